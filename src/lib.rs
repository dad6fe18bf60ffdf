// Vitals Sampler - Interval downsampling for physiological measurements

pub mod error;
pub mod sampler;
pub mod source;
pub mod types;

pub use error::SamplerError;
pub use sampler::{
    group_by_type, interval_start, sample_intervals, sample_measurements, Sampler, SamplerConfig,
};
pub use types::measurement::{Measurement, MeasurementType};
