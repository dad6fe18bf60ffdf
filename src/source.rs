//! Loading measurements from JSON
//!
//! Input is a JSON array of records shaped like
//! `{"time": "2017-01-03T10:04:45", "type": "TEMP", "value": 35.79}`.
//! `time` may be RFC 3339 or a naive timestamp, which is read as UTC.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;

use crate::error::SamplerError;
use crate::types::measurement::{parse_timestamp, Measurement, MeasurementType};

#[derive(Debug, Deserialize)]
struct MeasurementRecord {
    time: String,
    #[serde(rename = "type")]
    kind: String,
    value: f64,
}

impl MeasurementRecord {
    fn into_measurement(self) -> Result<Measurement, SamplerError> {
        let time = parse_timestamp(&self.time)?;
        let kind: MeasurementType = self.kind.parse()?;
        Ok(Measurement::new(time, kind, self.value))
    }
}

pub fn read_measurements<R: Read>(reader: R) -> Result<Vec<Measurement>, SamplerError> {
    let records: Vec<MeasurementRecord> = serde_json::from_reader(reader)?;
    let measurements = records
        .into_iter()
        .map(MeasurementRecord::into_measurement)
        .collect::<Result<Vec<_>, _>>()?;
    log::debug!("Read {} measurements", measurements.len());
    Ok(measurements)
}

pub fn load_measurements(path: impl AsRef<Path>) -> Result<Vec<Measurement>, SamplerError> {
    let file = File::open(path.as_ref())?;
    read_measurements(BufReader::new(file))
}

/// Seven readings spanning 10:01 to 10:05 on 2017-01-03, used when no input
/// file is given.
pub fn demo_measurements() -> Vec<Measurement> {
    const DEMO: &[(&str, MeasurementType, f64)] = &[
        ("2017-01-03T10:04:45", MeasurementType::Temperature, 35.79),
        ("2017-01-03T10:01:18", MeasurementType::Spo2, 98.78),
        ("2017-01-03T10:09:07", MeasurementType::Temperature, 35.01),
        ("2017-01-03T10:03:34", MeasurementType::Spo2, 96.49),
        ("2017-01-03T10:02:01", MeasurementType::Temperature, 35.82),
        ("2017-01-03T10:05:00", MeasurementType::Spo2, 97.17),
        ("2017-01-03T10:05:01", MeasurementType::Spo2, 95.08),
    ];
    DEMO.iter()
        .filter_map(|&(time, kind, value)| {
            parse_timestamp(time)
                .ok()
                .map(|time| Measurement::new(time, kind, value))
        })
        .collect()
}
