//! types/measurement.rs
//!
//! Defines the Measurement value object and the MeasurementType enum of
//! physiological signal kinds.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::SamplerError;

/// Kind of physiological signal a measurement carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MeasurementType {
    /// Peripheral oxygen saturation (%)
    #[serde(rename = "SPO2")]
    Spo2,

    /// Heart rate (beats per minute)
    #[serde(rename = "HR")]
    HeartRate,

    /// Body temperature (°C)
    #[serde(rename = "TEMP")]
    Temperature,
}

impl MeasurementType {
    pub fn name(&self) -> &'static str {
        match self {
            MeasurementType::Spo2 => "SPO2",
            MeasurementType::HeartRate => "HR",
            MeasurementType::Temperature => "TEMP",
        }
    }
}

impl fmt::Display for MeasurementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MeasurementType {
    type Err = SamplerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "SPO2" => Ok(MeasurementType::Spo2),
            "HR" => Ok(MeasurementType::HeartRate),
            "TEMP" => Ok(MeasurementType::Temperature),
            _ => Err(SamplerError::UnknownMeasurementType(s.to_string())),
        }
    }
}

/// A single timestamped reading.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    /// When the reading was taken
    pub time: DateTime<Utc>,

    /// Signal kind
    #[serde(rename = "type")]
    pub kind: MeasurementType,

    /// The reading itself
    pub value: f64,
}

impl Measurement {
    pub fn new(time: DateTime<Utc>, kind: MeasurementType, value: impl Into<f64>) -> Self {
        Self {
            time,
            kind,
            value: value.into(),
        }
    }

    /// Copy of this measurement re-stamped at `time`.
    pub fn at(&self, time: DateTime<Utc>) -> Self {
        Self {
            time,
            kind: self.kind,
            value: self.value,
        }
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{{}, {}, {}}}",
            self.time.format("%Y-%m-%dT%H:%M:%S%.f"),
            self.kind,
            self.value
        )
    }
}

/// Parse an RFC 3339 timestamp, or a naive ISO-8601 one taken as UTC.
pub fn parse_timestamp(s: &str) -> Result<DateTime<Utc>, SamplerError> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f"))
        .map(|naive| naive.and_utc())
        .map_err(|_| SamplerError::InvalidTimestamp(s.to_string()))
}
