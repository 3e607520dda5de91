// ==============================================================================
// main.rs - VCF Genotype Masker Entry Point
// ==============================================================================
// Description: Command-line entry point for seeded genotype masking
// Author: Matt Barham
// Created: 2025-10-31
// Modified: 2026-10-18
// Version: 2.0.0
// ==============================================================================

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vcf_genotype_masker::config::{
    parse_buffer_mb, parse_missing_rate, RunConfig, DEFAULT_BUFFER_MB, DEFAULT_MISSING_RATE,
};
use vcf_genotype_masker::masker;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None, args_override_self = true)]
struct Args {
    /// Input VCF file
    #[arg(short = 'i', value_name = "INPUT")]
    input: PathBuf,

    /// Output VCF file (created or truncated)
    #[arg(short = 'o', value_name = "OUTPUT")]
    output: PathBuf,

    /// Probability of replacing each genotype with ./. (0-1)
    #[arg(short = 'r', value_name = "RATE", default_value_t = DEFAULT_MISSING_RATE, value_parser = parse_missing_rate)]
    missing_rate: f64,

    /// I/O buffer size in megabytes
    #[arg(short = 'b', value_name = "MB", default_value_t = DEFAULT_BUFFER_MB, value_parser = parse_buffer_mb)]
    buffer_mb: u64,
}

impl Args {
    fn into_config(self) -> Result<RunConfig> {
        RunConfig::new(self.input, self.output, self.missing_rate, self.buffer_mb)
            .context("Invalid arguments")
    }
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vcf_genotype_masker=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Usage errors exit with 1, not clap's default of 2
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            // Nowhere left to report a failed write to stderr
            let _ = e.print();
            return ExitCode::FAILURE;
        }
    };

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // RUST_LOG may filter the event out; the message must still reach stderr
            error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let config = args.into_config()?;
    let summary = masker::mask(&config)
        .with_context(|| format!("Failed to mask {}", config.input.display()))?;

    info!(
        "Wrote {} lines to {:?}",
        summary.header_lines + summary.data_lines,
        config.output
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("vcf-genotype-masker").chain(argv.iter().copied()))
    }

    #[test]
    fn test_defaults() {
        let config = parse(&["-i", "in.vcf", "-o", "out.vcf"])
            .unwrap()
            .into_config()
            .unwrap();

        assert_eq!(config.input, PathBuf::from("in.vcf"));
        assert_eq!(config.output, PathBuf::from("out.vcf"));
        assert_eq!(config.missing_rate, 0.01);
        assert_eq!(config.buffer_size, 16 * 1024 * 1024);
        assert_eq!(config.seed, vcf_genotype_masker::DEFAULT_SEED);
    }

    #[test]
    fn test_explicit_values() {
        let config = parse(&["-i", "in.vcf", "-o", "out.vcf", "-r", "0.25", "-b", "2"])
            .unwrap()
            .into_config()
            .unwrap();

        assert_eq!(config.missing_rate, 0.25);
        assert_eq!(config.buffer_size, 2 * 1024 * 1024);
    }

    #[test]
    fn test_missing_required() {
        let err = parse(&["-i", "in.vcf"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);

        let err = parse(&["-o", "out.vcf"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_unknown_flag() {
        let err = parse(&["-i", "in.vcf", "-o", "out.vcf", "-x", "1"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn test_invalid_numbers() {
        let err = parse(&["-i", "in.vcf", "-o", "out.vcf", "-r", "lots"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);

        let err = parse(&["-i", "in.vcf", "-o", "out.vcf", "-r", "1.5"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);

        let err = parse(&["-i", "in.vcf", "-o", "out.vcf", "-b", "big"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn test_repeated_flag_takes_last_value() {
        let config = parse(&["-i", "a.vcf", "-i", "b.vcf", "-o", "out.vcf", "-r", "0.1", "-r", "0.2"])
            .unwrap()
            .into_config()
            .unwrap();

        assert_eq!(config.input, PathBuf::from("b.vcf"));
        assert_eq!(config.missing_rate, 0.2);
    }

    #[test]
    fn test_run_reports_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let args = parse(&[
            "-i",
            dir.path().join("absent.vcf").to_str().unwrap(),
            "-o",
            dir.path().join("out.vcf").to_str().unwrap(),
        ])
        .unwrap();

        let err = run(args).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to open input file"));
    }
}
