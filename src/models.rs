// ==============================================================================
// models.rs - Masking Data Models
// ==============================================================================
// Description: Line records, per-field mask decisions and run counters
// Author: Matt Barham
// Created: 2025-11-12
// Modified: 2026-10-18
// Version: 3.0.0
// ==============================================================================

/// Marker that starts every meta-header (`##`) and column-header (`#CHROM`) line
pub const HEADER_MARKER: u8 = b'#';

/// Column separator for VCF data lines
pub const FIELD_SEPARATOR: u8 = b'\t';

/// Number of fixed metadata columns (CHROM..FORMAT) before the first sample
pub const FIXED_COLUMNS: usize = 9;

/// Missing-genotype sentinel ("no call")
pub const MISSING_GENOTYPE: &[u8] = b"./.";

/// One line of input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record<'a> {
    /// Header or comment line, copied as-is
    Header(&'a [u8]),

    /// Data line split on tabs, in original order
    Data(Vec<&'a [u8]>),
}

impl<'a> Record<'a> {
    /// Genotype columns of a data line (index >= 9); empty for headers and
    /// short lines
    pub fn genotype_fields(&self) -> &[&'a [u8]] {
        match self {
            Record::Header(_) => &[],
            Record::Data(fields) => fields.get(FIXED_COLUMNS..).unwrap_or(&[]),
        }
    }
}

/// Outcome of one draw for one genotype field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaskDecision {
    /// Keep the original genotype
    Keep,
    /// Replace with `./.`
    Mask,
}

impl MaskDecision {
    /// Decide from a uniform draw in [0, 1). Masks only when the draw is
    /// strictly below the rate.
    pub fn from_draw(draw: f64, missing_rate: f64) -> Self {
        if draw < missing_rate {
            MaskDecision::Mask
        } else {
            MaskDecision::Keep
        }
    }

    /// Value written for this field
    pub fn apply<'a>(&self, original: &'a [u8]) -> &'a [u8] {
        match self {
            MaskDecision::Keep => original,
            MaskDecision::Mask => MISSING_GENOTYPE,
        }
    }
}

/// Counters collected over a single masking run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaskSummary {
    /// Lines copied through as headers
    pub header_lines: u64,

    /// Data lines processed (including short and empty lines)
    pub data_lines: u64,

    /// Genotype fields that received a draw
    pub genotype_fields: u64,

    /// Genotype fields replaced with `./.`
    pub masked_fields: u64,
}

impl MaskSummary {
    /// Fraction of genotype fields that were masked (0.0 if none were seen)
    pub fn masked_fraction(&self) -> f64 {
        if self.genotype_fields == 0 {
            0.0
        } else {
            self.masked_fields as f64 / self.genotype_fields as f64
        }
    }
}
