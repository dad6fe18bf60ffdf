use std::collections::BTreeMap;

use crate::types::measurement::{Measurement, MeasurementType};

/// Partition measurements by signal type, keeping input order within each type.
pub fn group_by_type(measurements: &[Measurement]) -> BTreeMap<MeasurementType, Vec<Measurement>> {
    let mut grouped: BTreeMap<MeasurementType, Vec<Measurement>> = BTreeMap::new();
    for measurement in measurements {
        grouped
            .entry(measurement.kind)
            .or_default()
            .push(measurement.clone());
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn reading(minute: u32, kind: MeasurementType, value: f64) -> Measurement {
        Measurement::new(Utc.with_ymd_and_hms(2017, 1, 3, 10, minute, 0).unwrap(), kind, value)
    }

    #[test]
    fn test_empty_input() {
        assert!(group_by_type(&[]).is_empty());
    }

    #[test]
    fn test_partition_preserves_order_and_count() {
        let input = vec![
            reading(9, MeasurementType::Temperature, 35.0),
            reading(1, MeasurementType::Spo2, 98.0),
            reading(3, MeasurementType::Temperature, 36.0),
            reading(2, MeasurementType::Spo2, 97.0),
        ];
        let grouped = group_by_type(&input);

        assert_eq!(grouped.len(), 2);
        assert!(!grouped.contains_key(&MeasurementType::HeartRate));
        assert_eq!(grouped.values().map(Vec::len).sum::<usize>(), input.len());

        // Relative input order, not time order
        let temps: Vec<f64> = grouped[&MeasurementType::Temperature]
            .iter()
            .map(|m| m.value)
            .collect();
        assert_eq!(temps, vec![35.0, 36.0]);
        let spo2: Vec<f64> = grouped[&MeasurementType::Spo2].iter().map(|m| m.value).collect();
        assert_eq!(spo2, vec![98.0, 97.0]);
    }
}
