use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SamplerError {
    #[error("Invalid interval: {0} minutes (must be 1..=60 and divide 60)")]
    InvalidInterval(u32),

    #[error("Unknown measurement type: {0}")]
    UnknownMeasurementType(String),

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("IO error: {0}")]
    Io(String),
}

impl From<serde_json::Error> for SamplerError {
    fn from(e: serde_json::Error) -> Self {
        SamplerError::Serialization(e.to_string())
    }
}

impl From<std::io::Error> for SamplerError {
    fn from(e: std::io::Error) -> Self {
        SamplerError::Io(e.to_string())
    }
}
