// ==============================================================================
// masker.rs - Seeded Genotype Masking
// ==============================================================================
// Description: Replaces VCF sample genotypes with ./. at a fixed random rate
// Author: Matt Barham
// Created: 2026-10-18
// Modified: 2026-10-18
// Version: 1.0.0
// ==============================================================================
// Algorithm:
//   For every data line, columns 0-8 are copied untouched. Each column from
//   index 9 onward takes one uniform draw u in [0, 1) from a seeded
//   Xoshiro256** stream:
//   - u <  missing_rate → "./."
//   - u >= missing_rate → original value
//   Header lines ('#') consume no draws, so the mask pattern depends only on
//   the seed, the rate and the sequence of genotype columns.
// ==============================================================================

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;
use thiserror::Error;
use tracing::{debug, info};

use crate::config::{RunConfig, DEFAULT_SEED};
use crate::models::{MaskDecision, MaskSummary, Record, FIXED_COLUMNS};
use crate::parsers::{parse_line, trim_newline, write_record};

/// Smallest buffer handed to BufReader/BufWriter; a zero-capacity BufReader
/// reports EOF on the first fill
const MIN_BUFFER_SIZE: usize = 8 * 1024;

/// Masking errors
#[derive(Error, Debug)]
pub enum MaskError {
    #[error("Failed to open input file {}: {source}", .path.display())]
    UnreadableInput {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to open output file {}: {source}", .path.display())]
    UnwritableOutput {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read line {line}: {source}")]
    Read { line: u64, source: std::io::Error },

    #[error("Failed to write line {line}: {source}")]
    Write { line: u64, source: std::io::Error },
}

/// Seeded genotype masker
///
/// The generator is consumed as lines are processed, so a masker should be
/// used for one run. Two maskers built with the same seed and rate produce
/// byte-identical output for the same input.
pub struct GenotypeMasker {
    rng: Xoshiro256StarStar,
    missing_rate: f64,
}

impl GenotypeMasker {
    /// Create a masker seeded with `DEFAULT_SEED`
    pub fn new(missing_rate: f64) -> Self {
        Self::with_seed(missing_rate, DEFAULT_SEED)
    }

    /// Create a masker with an explicit seed
    pub fn with_seed(missing_rate: f64, seed: u64) -> Self {
        Self {
            rng: Xoshiro256StarStar::seed_from_u64(seed),
            missing_rate,
        }
    }

    /// Create a masker from a run configuration
    pub fn from_config(config: &RunConfig) -> Self {
        Self::with_seed(config.missing_rate, config.seed)
    }

    /// Draw once and decide the fate of one genotype field
    fn decide(&mut self) -> MaskDecision {
        MaskDecision::from_draw(self.rng.gen::<f64>(), self.missing_rate)
    }

    /// Apply mask decisions to the genotype columns of a record in place
    ///
    /// Returns the number of fields masked. Headers and lines with no more
    /// than 9 columns are left alone and consume no draws.
    pub fn mask_record(&mut self, record: &mut Record<'_>) -> usize {
        let Record::Data(fields) = record else {
            return 0;
        };

        let mut masked = 0;
        for field in fields.iter_mut().skip(FIXED_COLUMNS) {
            let decision = self.decide();
            if decision == MaskDecision::Mask {
                masked += 1;
            }
            *field = decision.apply(*field);
        }
        masked
    }

    /// Mask every line from `reader` into `writer`
    ///
    /// Lines are split on '\n' only and handled as raw bytes. Every record
    /// written ends with '\n', including the last one. The writer is flushed
    /// before returning.
    pub fn mask_stream<R: BufRead, W: Write>(
        &mut self,
        mut reader: R,
        mut writer: W,
    ) -> Result<MaskSummary, MaskError> {
        let mut summary = MaskSummary::default();
        let mut buffer = Vec::new();
        let mut line_number: u64 = 0;

        loop {
            buffer.clear();
            line_number += 1;

            let read = reader
                .read_until(b'\n', &mut buffer)
                .map_err(|source| MaskError::Read { line: line_number, source })?;
            if read == 0 {
                break;
            }

            let mut record = parse_line(trim_newline(&buffer));
            match &record {
                Record::Header(_) => summary.header_lines += 1,
                Record::Data(fields) => {
                    summary.data_lines += 1;
                    summary.genotype_fields += fields.len().saturating_sub(FIXED_COLUMNS) as u64;
                }
            }
            summary.masked_fields += self.mask_record(&mut record) as u64;

            write_record(&mut writer, &record)
                .map_err(|source| MaskError::Write { line: line_number, source })?;
        }

        writer
            .flush()
            .map_err(|source| MaskError::Write { line: line_number, source })?;

        debug!("Processed {} lines", line_number - 1);
        Ok(summary)
    }

    /// Mask a VCF file on disk
    ///
    /// # Arguments
    /// * `input` - VCF file to read (plain text)
    /// * `output` - VCF file to create or truncate
    /// * `buffer_size` - Capacity of the read and write buffers in bytes
    ///
    /// # Returns
    /// * `Ok(MaskSummary)` - Counters for the run
    /// * `Err(MaskError)` - Either file could not be opened, or I/O failed mid-run
    ///
    /// The input is opened first, so a missing input never touches the
    /// output path. A failure mid-run leaves a truncated output behind.
    pub fn mask_file(
        &mut self,
        input: impl AsRef<Path>,
        output: impl AsRef<Path>,
        buffer_size: usize,
    ) -> Result<MaskSummary, MaskError> {
        let input = input.as_ref();
        let output = output.as_ref();

        let infile = File::open(input).map_err(|source| MaskError::UnreadableInput {
            path: input.to_path_buf(),
            source,
        })?;
        let outfile = File::create(output).map_err(|source| MaskError::UnwritableOutput {
            path: output.to_path_buf(),
            source,
        })?;

        let capacity = buffer_size.max(MIN_BUFFER_SIZE);
        let reader = BufReader::with_capacity(capacity, infile);
        let writer = BufWriter::with_capacity(capacity, outfile);
        debug!("Masking {:?} -> {:?} with {} byte buffers", input, output, capacity);

        self.mask_stream(reader, writer)
    }
}

/// Run a full masking pass as described by `config`
pub fn mask(config: &RunConfig) -> Result<MaskSummary, MaskError> {
    info!(
        "Masking genotypes in {:?} at rate {} (seed {})",
        config.input, config.missing_rate, config.seed
    );

    let mut masker = GenotypeMasker::from_config(config);
    let summary = masker.mask_file(&config.input, &config.output, config.buffer_size)?;

    info!(
        "Masked {} of {} genotype fields ({:.4}) across {} data lines; {} header lines copied",
        summary.masked_fields,
        summary.genotype_fields,
        summary.masked_fraction(),
        summary.data_lines,
        summary.header_lines
    );
    Ok(summary)
}
