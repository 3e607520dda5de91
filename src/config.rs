// ==============================================================================
// config.rs - Run Configuration
// ==============================================================================
// Description: Validated settings for a single masking run
// Author: Matt Barham
// Created: 2026-10-18
// Modified: 2026-10-18
// Version: 1.0.0
// ==============================================================================

use std::path::PathBuf;
use thiserror::Error;

/// Default probability of masking a genotype field
pub const DEFAULT_MISSING_RATE: f64 = 0.01;

/// Default I/O buffer size in megabytes
pub const DEFAULT_BUFFER_MB: u64 = 16;

/// Seed used when none is supplied; keeps masking reproducible across runs
pub const DEFAULT_SEED: u64 = 19_991_220;

const BYTES_PER_MB: u64 = 1024 * 1024;

/// Configuration errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Missing required argument: {0}")]
    MissingRequiredArgument(&'static str),

    #[error("Invalid numeric value for {flag}: '{value}'")]
    InvalidNumericArgument { flag: &'static str, value: String },

    #[error("Missing rate {0} is outside [0, 1]")]
    RateOutOfRange(f64),

    #[error("Buffer size of {0} MB does not fit in memory addressing")]
    BufferTooLarge(u64),
}

/// Immutable settings for one run
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Per-field masking probability in [0, 1]
    pub missing_rate: f64,
    /// BufReader/BufWriter capacity in bytes
    pub buffer_size: usize,
    pub seed: u64,
}

impl RunConfig {
    /// Build a validated configuration
    ///
    /// # Arguments
    /// * `input` - Input VCF path
    /// * `output` - Output VCF path
    /// * `missing_rate` - Masking probability, must be within [0, 1]
    /// * `buffer_mb` - I/O buffer size in megabytes
    ///
    /// The seed is always `DEFAULT_SEED`; use `with_seed` to override it.
    pub fn new(
        input: impl Into<PathBuf>,
        output: impl Into<PathBuf>,
        missing_rate: f64,
        buffer_mb: u64,
    ) -> Result<Self, ConfigError> {
        let input = input.into();
        let output = output.into();

        if input.as_os_str().is_empty() {
            return Err(ConfigError::MissingRequiredArgument("-i <input>"));
        }
        if output.as_os_str().is_empty() {
            return Err(ConfigError::MissingRequiredArgument("-o <output>"));
        }

        Ok(Self {
            input,
            output,
            missing_rate: validate_rate(missing_rate)?,
            buffer_size: buffer_bytes(buffer_mb)?,
            seed: DEFAULT_SEED,
        })
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// Check that a rate is a number within [0, 1]
pub fn validate_rate(rate: f64) -> Result<f64, ConfigError> {
    if (0.0..=1.0).contains(&rate) {
        Ok(rate)
    } else {
        // NaN lands here too
        Err(ConfigError::RateOutOfRange(rate))
    }
}

/// Convert megabytes to bytes
pub fn buffer_bytes(megabytes: u64) -> Result<usize, ConfigError> {
    megabytes
        .checked_mul(BYTES_PER_MB)
        .and_then(|bytes| usize::try_from(bytes).ok())
        .ok_or(ConfigError::BufferTooLarge(megabytes))
}

/// clap value parser for `-r`
pub fn parse_missing_rate(value: &str) -> Result<f64, ConfigError> {
    let rate = value
        .trim()
        .parse::<f64>()
        .map_err(|_| ConfigError::InvalidNumericArgument {
            flag: "-r",
            value: value.to_string(),
        })?;
    validate_rate(rate)
}

/// clap value parser for `-b`
pub fn parse_buffer_mb(value: &str) -> Result<u64, ConfigError> {
    let megabytes = value
        .trim()
        .parse::<u64>()
        .map_err(|_| ConfigError::InvalidNumericArgument {
            flag: "-b",
            value: value.to_string(),
        })?;
    buffer_bytes(megabytes)?;
    Ok(megabytes)
}
