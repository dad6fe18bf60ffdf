//! Interval resolution
//!
//! Maps arbitrary timestamps onto interval boundaries. Widths always divide
//! 60 (see [`SamplerConfig::validate`](super::SamplerConfig::validate)), so
//! flooring only touches the minute field and below.

use chrono::{DateTime, Duration, Timelike, Utc};

/// Start of the interval that begins at or before `time`.
///
/// Seconds and sub-seconds are zeroed and the minute is floored to a
/// multiple of `width_minutes`.
pub fn floor_to_interval(time: DateTime<Utc>, width_minutes: u32) -> DateTime<Utc> {
    let into_interval = Duration::minutes(i64::from(time.minute() % width_minutes))
        + Duration::seconds(i64::from(time.second()))
        + Duration::nanoseconds(i64::from(time.nanosecond()));
    time - into_interval
}

/// Boundary that keys the bucket `time` is sampled into.
///
/// A boundary-exact timestamp keys its own bucket; anything strictly inside
/// an interval rounds up to the next boundary.
pub fn bucket_boundary(time: DateTime<Utc>, width_minutes: u32) -> DateTime<Utc> {
    let floor = floor_to_interval(time, width_minutes);
    if floor == time {
        floor
    } else {
        floor + Duration::minutes(i64::from(width_minutes))
    }
}

/// True when `time` already sits on an interval boundary.
pub fn is_boundary_exact(time: DateTime<Utc>, width_minutes: u32) -> bool {
    floor_to_interval(time, width_minutes) == time
}
