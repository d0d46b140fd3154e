//! Sampling configuration
//!
//! `sample_step` is the window length of the downstream consensus stage;
//! `extension` is the radius sampled around each boundary for
//! overlapping-window consensus (0 disables it).

use crate::core::error::{ConfigError, ConfigResult};

/// Default window length used by the consensus stage
pub const DEFAULT_SAMPLE_STEP: u64 = 500;

/// Validated sampling parameters
///
/// Construction checks `2 * extension + 1 < sample_step`, which keeps the
/// boundary request list ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplingConfig {
    sample_step: u64,
    extension: u64,
}

impl SamplingConfig {
    /// # Examples
    /// ```
    /// use overlap_sampler::core::SamplingConfig;
    /// assert!(SamplingConfig::new(500, 0).is_ok());
    /// assert!(SamplingConfig::new(10, 4).is_ok());
    /// assert!(SamplingConfig::new(10, 5).is_err());
    /// assert!(SamplingConfig::new(0, 0).is_err());
    /// ```
    pub fn new(sample_step: u64, extension: u64) -> ConfigResult<Self> {
        if sample_step == 0 {
            return Err(ConfigError::ZeroSampleStep);
        }
        let span = extension
            .checked_mul(2)
            .and_then(|v| v.checked_add(1));
        match span {
            Some(span) if span < sample_step => Ok(Self { sample_step, extension }),
            _ => Err(ConfigError::ExtensionTooLarge { sample_step, extension }),
        }
    }

    /// Boundaries only, no extension sampling
    pub fn with_sample_step(sample_step: u64) -> ConfigResult<Self> {
        Self::new(sample_step, 0)
    }

    pub fn sample_step(&self) -> u64 {
        self.sample_step
    }

    pub fn extension(&self) -> u64 {
        self.extension
    }
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            sample_step: DEFAULT_SAMPLE_STEP,
            extension: 0,
        }
    }
}
