// ==============================================================================
// parsers/vcf_line.rs - VCF line classifier
// ==============================================================================
// Description: Splits raw VCF lines into header/data records and writes them back
// Author: Matt Barham
// Created: 2025-11-03
// Modified: 2026-10-18
// Version: 2.0.0
// ==============================================================================
// References:
// - VCF 4.2 Spec: https://samtools.github.io/hts-specs/VCFv4.2.pdf
// ==============================================================================
// Format: Tab-delimited text with '#' header lines
// Example:
//   ##fileformat=VCFv4.2
//   #CHROM  POS  ID  REF  ALT  QUAL  FILTER  INFO  FORMAT  S1   S2
//   1       100  .   A    G    .     PASS    .     GT      0/1  1/1
// ==============================================================================

use std::io::{self, Write};

use crate::models::{Record, FIELD_SEPARATOR, HEADER_MARKER};

/// Classify a line (without its '\n' terminator) as header or data
///
/// Data lines are split strictly on '\t': consecutive tabs produce empty
/// fields and a trailing tab produces a trailing empty field. An empty line
/// is a data line with a single empty field.
pub fn parse_line(line: &[u8]) -> Record<'_> {
    if line.first() == Some(&HEADER_MARKER) {
        Record::Header(line)
    } else {
        Record::Data(line.split(|&b| b == FIELD_SEPARATOR).collect())
    }
}

/// Write a record followed by a single '\n'
pub fn write_record<W: Write>(writer: &mut W, record: &Record<'_>) -> io::Result<()> {
    match record {
        Record::Header(line) => writer.write_all(line)?,
        Record::Data(fields) => {
            for (i, field) in fields.iter().enumerate() {
                if i != 0 {
                    writer.write_all(&[FIELD_SEPARATOR])?;
                }
                writer.write_all(field)?;
            }
        }
    }
    writer.write_all(b"\n")
}

/// Strip the trailing '\n' that `BufRead::read_until` leaves on a line
pub fn trim_newline(line: &[u8]) -> &[u8] {
    line.strip_suffix(b"\n").unwrap_or(line)
}
