// ==============================================================================
// tests/cli.rs - Command-line behavior
// ==============================================================================
// Description: Runs the built binary to check exit codes and stderr output
// Author: Matt Barham
// Created: 2026-10-18
// Modified: 2026-10-18
// Version: 1.0.0
// ==============================================================================

use std::process::Command;
use tempfile::tempdir;

fn masker() -> Command {
    Command::new(env!("CARGO_BIN_EXE_vcf-genotype-masker"))
}

#[test]
fn test_missing_input_reports_error_with_logging_off() {
    let dir = tempdir().unwrap();
    let absent = dir.path().join("absent.vcf");
    let output = dir.path().join("out.vcf");

    for filter in ["off", "some_other_crate=info"] {
        let result = masker()
            .env("RUST_LOG", filter)
            .arg("-i")
            .arg(&absent)
            .arg("-o")
            .arg(&output)
            .output()
            .unwrap();

        assert_eq!(result.status.code(), Some(1));
        let stderr = String::from_utf8_lossy(&result.stderr);
        assert!(stderr.contains("Failed to open input file"), "stderr: {}", stderr);
        assert!(!output.exists());
    }
}

#[test]
fn test_missing_required_flag_exits_one() {
    let result = masker().env("RUST_LOG", "off").args(["-i", "in.vcf"]).output().unwrap();

    assert_eq!(result.status.code(), Some(1));
    assert!(!result.stderr.is_empty());
}

#[test]
fn test_masks_file_end_to_end() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.vcf");
    let output = dir.path().join("out.vcf");
    std::fs::write(
        &input,
        "#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\tFORMAT\tS1\tS2\n\
         1\t100\t.\tA\tG\t.\tPASS\t.\tGT\t0/1\t1/1\n",
    )
    .unwrap();

    let status = masker()
        .env("RUST_LOG", "off")
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .args(["-r", "1.0", "-b", "1"])
        .status()
        .unwrap();

    assert!(status.success());
    assert_eq!(
        std::fs::read_to_string(&output).unwrap(),
        "#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\tFORMAT\tS1\tS2\n\
         1\t100\t.\tA\tG\t.\tPASS\t.\tGT\t./.\t./.\n"
    );
}
