use std::collections::hash_map::Entry;
use std::collections::HashMap;

use chrono::{DateTime, Utc};

use super::interval::bucket_boundary;
use crate::types::measurement::Measurement;

/// Reduce one type's measurements to the latest reading per bucket.
///
/// Buckets come out in the order their keys were first seen. On equal
/// timestamps the later measurement in `measurements` wins.
pub fn reduce_intervals(measurements: &[Measurement], width_minutes: u32) -> Vec<Measurement> {
    let mut order: Vec<DateTime<Utc>> = Vec::new();
    let mut latest: HashMap<DateTime<Utc>, &Measurement> = HashMap::new();

    for measurement in measurements {
        let boundary = bucket_boundary(measurement.time, width_minutes);
        log::trace!("{} -> bucket {}", measurement, boundary);
        match latest.entry(boundary) {
            Entry::Occupied(mut slot) => {
                if measurement.time >= slot.get().time {
                    slot.insert(measurement);
                }
            }
            Entry::Vacant(slot) => {
                order.push(boundary);
                slot.insert(measurement);
            }
        }
    }

    order
        .into_iter()
        .filter_map(|boundary| latest.get(&boundary).map(|m| m.at(boundary)))
        .collect()
}
