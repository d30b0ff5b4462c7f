pub type MicrogridDateTime = hifitime::Epoch;

use crate::wire::metric_sample_models::Timestamp;
use hifitime::Unit;

const NANOS_PER_SECOND: i128 = 1_000_000_000;

/// Lossless bridge between the wire timestamp and `hifitime::Epoch`.
///
/// The wire timestamp is UTC seconds plus nanoseconds since the Unix
/// epoch, with nanos normalized to `[0, 999_999_999]` even for instants
/// before the epoch.
pub trait MicrogridDateTimeExt {
    fn from_wire_timestamp(timestamp: &Timestamp) -> Self;
    fn to_wire_timestamp(&self) -> Timestamp;
}

impl MicrogridDateTimeExt for MicrogridDateTime {
    fn from_wire_timestamp(timestamp: &Timestamp) -> Self {
        Self::from_unix_duration(
            timestamp.seconds * Unit::Second + (timestamp.nanos as i64) * Unit::Nanosecond,
        )
    }

    fn to_wire_timestamp(&self) -> Timestamp {
        let total_nanoseconds = self.to_unix_duration().total_nanoseconds();
        Timestamp {
            seconds: total_nanoseconds.div_euclid(NANOS_PER_SECOND) as i64,
            nanos: total_nanoseconds.rem_euclid(NANOS_PER_SECOND) as i32,
        }
    }
}
