//! Interval sampling for measurements
//!
//! A [`Sampler`] downsamples irregularly-timed measurements into fixed-width
//! buckets, keeping the latest reading per bucket per signal type. Each
//! bucket is keyed by its boundary: a reading exactly on a boundary keys that
//! boundary, anything else rounds up to the next one.
//!
//! The free functions at the bottom of this module use the default
//! five-minute sampler.

mod config;
mod grouper;
mod interval;
mod reducer;

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

pub use config::{SamplerConfig, DEFAULT_INTERVAL_MINUTES};
pub use grouper::group_by_type;

use crate::error::SamplerError;
use crate::types::measurement::{Measurement, MeasurementType};

/// Stateless interval sampler. Cheap to copy and safe to share.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sampler {
    interval_minutes: u32,
}

impl Default for Sampler {
    fn default() -> Self {
        Self {
            interval_minutes: DEFAULT_INTERVAL_MINUTES,
        }
    }
}

impl Sampler {
    pub fn new(config: SamplerConfig) -> Result<Self, SamplerError> {
        config.validate()?;
        Ok(Self {
            interval_minutes: config.interval_minutes,
        })
    }

    pub fn interval_minutes(&self) -> u32 {
        self.interval_minutes
    }

    /// Partition by signal type. Independent of the interval width.
    pub fn group_by_type(&self, measurements: &[Measurement]) -> BTreeMap<MeasurementType, Vec<Measurement>> {
        group_by_type(measurements)
    }

    /// Start of the interval that begins at or before `time`.
    pub fn interval_start(&self, time: DateTime<Utc>) -> DateTime<Utc> {
        interval::floor_to_interval(time, self.interval_minutes)
    }

    /// Boundary keying the bucket `time` is sampled into.
    pub fn bucket_boundary(&self, time: DateTime<Utc>) -> DateTime<Utc> {
        interval::bucket_boundary(time, self.interval_minutes)
    }

    pub fn is_boundary_exact(&self, time: DateTime<Utc>) -> bool {
        interval::is_boundary_exact(time, self.interval_minutes)
    }

    /// Reduce measurements of a single type to one per bucket.
    ///
    /// Output follows the order buckets are first seen, so callers wanting
    /// ascending boundaries must pass time-sorted input.
    /// [`sample_measurements`](Self::sample_measurements) does that sort.
    pub fn sample_intervals(&self, measurements: &[Measurement]) -> Vec<Measurement> {
        reducer::reduce_intervals(measurements, self.interval_minutes)
    }

    /// Group by type, sort each group by time and sample it.
    ///
    /// Types absent from the input are absent from the result.
    pub fn sample_measurements(&self, measurements: &[Measurement]) -> BTreeMap<MeasurementType, Vec<Measurement>> {
        let mut sampled = BTreeMap::new();
        for (kind, mut group) in group_by_type(measurements) {
            // Stable, so equal timestamps keep input order for the tie-break
            group.sort_by_key(|m| m.time);
            let buckets = self.sample_intervals(&group);
            log::debug!(
                "Sampled {} {} readings into {} buckets of {} min",
                group.len(),
                kind,
                buckets.len(),
                self.interval_minutes
            );
            sampled.insert(kind, buckets);
        }
        sampled
    }
}

/// Start of the five-minute interval at or before `time`.
pub fn interval_start(time: DateTime<Utc>) -> DateTime<Utc> {
    Sampler::default().interval_start(time)
}

/// Five-minute [`Sampler::sample_intervals`].
pub fn sample_intervals(measurements: &[Measurement]) -> Vec<Measurement> {
    Sampler::default().sample_intervals(measurements)
}

/// Five-minute [`Sampler::sample_measurements`].
pub fn sample_measurements(measurements: &[Measurement]) -> BTreeMap<MeasurementType, Vec<Measurement>> {
    Sampler::default().sample_measurements(measurements)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Timelike};

    fn at(m: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2017, 1, 3, 10, m, s).unwrap()
    }

    fn temp(m: u32, s: u32, value: f64) -> Measurement {
        Measurement::new(at(m, s), MeasurementType::Temperature, value)
    }

    fn temperature_series() -> Vec<Measurement> {
        vec![
            temp(4, 45, 35.79),
            temp(9, 7, 35.01),
            temp(2, 1, 35.82),
            temp(10, 0, 34.95),
            temp(12, 30, 36.02),
            temp(15, 0, 35.47),
            temp(19, 45, 35.12),
            temp(23, 30, 35.68),
            temp(28, 30, 35.92),
        ]
    }

    #[test]
    fn test_interval_start_example() {
        assert_eq!(interval_start(at(12, 34)), at(10, 0));
    }

    #[test]
    fn test_interval_start_properties() {
        let mut t = at(0, 0);
        while t < at(59, 59) {
            let start = interval_start(t);
            assert_eq!(start.second(), 0);
            assert_eq!(start.nanosecond(), 0);
            assert_eq!(start.minute() % 5, 0);
            assert!(start <= t);
            t += Duration::seconds(37);
        }
    }

    #[test]
    fn test_sample_intervals_sorted_series() {
        let mut series = temperature_series();
        series.sort_by_key(|m| m.time);
        let times: Vec<_> = sample_intervals(&series).iter().map(|m| m.time).collect();
        assert_eq!(times, vec![at(5, 0), at(10, 0), at(15, 0), at(20, 0), at(25, 0), at(30, 0)]);
    }

    #[test]
    fn test_sample_intervals_picks_latest_value() {
        let mut series = temperature_series();
        series.sort_by_key(|m| m.time);
        let values: Vec<_> = sample_intervals(&series).iter().map(|m| m.value).collect();
        assert_eq!(values, vec![35.79, 34.95, 35.47, 35.12, 35.68, 35.92]);
    }

    #[test]
    fn test_sample_intervals_is_idempotent() {
        let mut series = temperature_series();
        series.sort_by_key(|m| m.time);
        let once = sample_intervals(&series);
        assert_eq!(sample_intervals(&once), once);
    }

    #[test]
    fn test_sample_measurements_sorts_before_bucketing() {
        // Unsorted input still yields ascending boundaries
        let sampled = sample_measurements(&temperature_series());
        let times: Vec<_> = sampled[&MeasurementType::Temperature].iter().map(|m| m.time).collect();
        assert_eq!(times, vec![at(5, 0), at(10, 0), at(15, 0), at(20, 0), at(25, 0), at(30, 0)]);
    }

    #[test]
    fn test_sample_measurements_tie_keeps_later_input() {
        let input = vec![temp(7, 0, 36.0), temp(6, 0, 35.0), temp(7, 0, 37.0)];
        let sampled = sample_measurements(&input);
        assert_eq!(sampled[&MeasurementType::Temperature], vec![temp(10, 0, 37.0)]);
    }

    #[test]
    fn test_sample_measurements_empty() {
        assert!(sample_measurements(&[]).is_empty());
    }

    #[test]
    fn test_custom_interval() {
        let sampler = Sampler::new(SamplerConfig::with_interval_minutes(15)).unwrap();
        let sampled = sampler.sample_measurements(&temperature_series());
        let times: Vec<_> = sampled[&MeasurementType::Temperature].iter().map(|m| m.time).collect();
        assert_eq!(times, vec![at(15, 0), at(30, 0)]);
        assert!(Sampler::new(SamplerConfig::with_interval_minutes(0)).is_err());
    }

    #[test]
    fn test_sampler_boundary_helpers() {
        let sampler = Sampler::default();
        assert!(sampler.is_boundary_exact(at(10, 0)));
        assert!(!sampler.is_boundary_exact(at(10, 1)));
        assert_eq!(sampler.bucket_boundary(at(10, 1)), at(15, 0));
        assert_eq!(sampler.interval_minutes(), 5);
    }
}
