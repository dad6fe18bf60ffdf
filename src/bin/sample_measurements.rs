// src/bin/sample_measurements.rs
//! Samples measurements from a JSON file (or the built-in demo set) into
//! interval buckets and prints each type's sampled series.
//!
//! Usage:
//!   sample-measurements [FILE]
//!
//! Set SAMPLER_INTERVAL_MINUTES to change the bucket width and RUST_LOG for
//! logging.

use anyhow::Context;
use vitals_sampler::source::{demo_measurements, load_measurements};
use vitals_sampler::{Sampler, SamplerConfig};

const INTERVAL_ENV: &str = "SAMPLER_INTERVAL_MINUTES";

fn config_from_env() -> anyhow::Result<SamplerConfig> {
    match std::env::var(INTERVAL_ENV) {
        Ok(raw) => {
            let minutes: u32 = raw
                .trim()
                .parse()
                .with_context(|| format!("{} must be a whole number of minutes, got {:?}", INTERVAL_ENV, raw))?;
            Ok(SamplerConfig::with_interval_minutes(minutes))
        }
        Err(_) => Ok(SamplerConfig::default()),
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let sampler = Sampler::new(config_from_env()?)?;

    let measurements = match std::env::args().nth(1) {
        Some(path) => load_measurements(&path)
            .with_context(|| format!("Failed to load measurements from {}", path))?,
        None => {
            log::info!("No input file given, sampling the demo set");
            demo_measurements()
        }
    };

    let sampled = sampler.sample_measurements(&measurements);
    for (kind, series) in &sampled {
        println!("Measurement type: {}", kind);
        for m in series {
            println!("{}", m);
        }
    }

    Ok(())
}
