use serde::{Deserialize, Serialize};

use crate::error::SamplerError;

/// Bucket width used when nothing else is configured.
pub const DEFAULT_INTERVAL_MINUTES: u32 = 5;

/// Configuration for a [`Sampler`](super::Sampler).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplerConfig {
    /// Width of each bucket in minutes. Must divide 60 so buckets stay
    /// aligned to the hour.
    pub interval_minutes: u32,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            interval_minutes: DEFAULT_INTERVAL_MINUTES,
        }
    }
}

impl SamplerConfig {
    pub fn with_interval_minutes(interval_minutes: u32) -> Self {
        Self { interval_minutes }
    }

    pub fn from_json_str(json: &str) -> Result<Self, SamplerError> {
        let config: SamplerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), SamplerError> {
        let m = self.interval_minutes;
        if m == 0 || m > 60 || 60 % m != 0 {
            return Err(SamplerError::InvalidInterval(m));
        }
        Ok(())
    }
}
