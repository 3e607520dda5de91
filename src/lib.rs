// ==============================================================================
// lib.rs - VCF Genotype Masker Library
// ==============================================================================
// Description: Library interface for seeded genotype masking modules
// Author: Matt Barham
// Created: 2025-11-03
// Modified: 2026-10-18
// Version: 2.0.0
// ==============================================================================

pub mod config;
pub mod masker;
pub mod models;
pub mod parsers;

pub use config::{ConfigError, RunConfig, DEFAULT_SEED};
pub use masker::{mask, GenotypeMasker, MaskError};
pub use models::{MaskDecision, MaskSummary, Record};
