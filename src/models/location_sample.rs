use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::SampleRejected;

/// Minimum valid latitude coordinate.
pub const MIN_LATITUDE: f64 = -90.0;

/// Maximum valid latitude coordinate.
pub const MAX_LATITUDE: f64 = 90.0;

/// Minimum valid longitude coordinate.
pub const MIN_LONGITUDE: f64 = -180.0;

/// Maximum valid longitude coordinate.
pub const MAX_LONGITUDE: f64 = 180.0;

/// Upper bound (exclusive) on GPS accuracy in meters.
pub const MAX_ACCURACY_METERS: f64 = 100.0;

/// Upper bound (exclusive) on ground speed in meters per second.
pub const MAX_SPEED_MPS: f64 = 30.0;

/// Samples captured more than this many seconds ago are refused as stale.
pub const MAX_SAMPLE_AGE_SECS: u64 = 300;

/// Current time in millis since the Unix epoch.
pub(crate) fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

/// One GPS observation captured during an active walk.
///
/// Created by the host's location-acquisition layer on each fix and handed to
/// [`WalkSession::submit`](crate::session::WalkSession::submit). A sample is
/// consumed exactly once: it either enters the batching buffer or is rejected
/// with a typed [`SampleRejected`] reason.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationSample {
    /// Client-local unique identifier for this fix. Never transmitted.
    pub sample_id: String,
    /// The walk session this fix belongs to.
    pub session_id: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Positional accuracy in meters.
    pub accuracy: f64,
    /// Ground speed in meters per second.
    pub speed: f64,
    /// Capture time, milliseconds since the Unix epoch.
    pub captured_at_ms: u64,
}

impl LocationSample {
    /// Check every range and freshness invariant against `now_ms`.
    ///
    /// A sample is valid only if all coordinate/accuracy/speed ranges hold
    /// and `captured_at_ms` lies within the last [`MAX_SAMPLE_AGE_SECS`] and
    /// not in the future.
    pub fn validate(&self, now_ms: u64) -> Result<(), SampleRejected> {
        if !(MIN_LATITUDE..=MAX_LATITUDE).contains(&self.latitude) {
            return Err(SampleRejected::LatitudeOutOfRange(self.latitude));
        }
        if !(MIN_LONGITUDE..=MAX_LONGITUDE).contains(&self.longitude) {
            return Err(SampleRejected::LongitudeOutOfRange(self.longitude));
        }
        if !self.accuracy.is_finite() || self.accuracy < 0.0 || self.accuracy >= MAX_ACCURACY_METERS {
            return Err(SampleRejected::AccuracyOutOfRange(self.accuracy));
        }
        if !self.speed.is_finite() || self.speed < 0.0 || self.speed >= MAX_SPEED_MPS {
            return Err(SampleRejected::SpeedOutOfRange(self.speed));
        }
        if self.captured_at_ms > now_ms {
            return Err(SampleRejected::CapturedInFuture);
        }
        if now_ms - self.captured_at_ms > MAX_SAMPLE_AGE_SECS * 1000 {
            return Err(SampleRejected::Stale(MAX_SAMPLE_AGE_SECS));
        }
        Ok(())
    }
}

/// Wire form of one sample inside a batch frame.
///
/// `sample_id` is client-side bookkeeping and never leaves the device; the
/// remaining fields serialize with the tracking backend's camelCase keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireSample {
    pub session_id: String,
    pub latitude: f64,
    pub longitude: f64,
    pub accuracy: f64,
    pub speed: f64,
    pub captured_at: u64,
}

impl From<&LocationSample> for WireSample {
    fn from(sample: &LocationSample) -> Self {
        Self {
            session_id: sample.session_id.clone(),
            latitude: sample.latitude,
            longitude: sample.longitude,
            accuracy: sample.accuracy,
            speed: sample.speed,
            captured_at: sample.captured_at_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> LocationSample {
        LocationSample {
            sample_id: "fix-1".to_string(),
            session_id: "walk-1".to_string(),
            latitude: 47.62,
            longitude: -122.35,
            accuracy: 8.0,
            speed: 1.4,
            captured_at_ms: now_ms(),
        }
    }

    #[test]
    fn test_valid_sample_passes() {
        assert!(sample().validate(now_ms()).is_ok());
    }

    #[test]
    fn test_latitude_out_of_range() {
        let mut s = sample();
        s.latitude = 90.5;
        assert_eq!(
            s.validate(now_ms()),
            Err(SampleRejected::LatitudeOutOfRange(90.5))
        );
        s.latitude = -91.0;
        assert!(s.validate(now_ms()).is_err());
    }

    #[test]
    fn test_longitude_out_of_range() {
        let mut s = sample();
        s.longitude = 180.01;
        assert_eq!(
            s.validate(now_ms()),
            Err(SampleRejected::LongitudeOutOfRange(180.01))
        );
    }

    #[test]
    fn test_accuracy_bounds_are_half_open() {
        let mut s = sample();
        s.accuracy = 0.0;
        assert!(s.validate(now_ms()).is_ok());
        s.accuracy = 100.0;
        assert!(s.validate(now_ms()).is_err());
        s.accuracy = -0.1;
        assert!(s.validate(now_ms()).is_err());
    }

    #[test]
    fn test_speed_bounds_are_half_open() {
        let mut s = sample();
        s.speed = 29.99;
        assert!(s.validate(now_ms()).is_ok());
        s.speed = 30.0;
        assert!(s.validate(now_ms()).is_err());
    }

    #[test]
    fn test_nan_fields_are_rejected() {
        let mut s = sample();
        s.accuracy = f64::NAN;
        assert!(s.validate(now_ms()).is_err());
    }

    #[test]
    fn test_future_sample_rejected() {
        let now = now_ms();
        let mut s = sample();
        s.captured_at_ms = now + 1;
        assert_eq!(s.validate(now), Err(SampleRejected::CapturedInFuture));
    }

    #[test]
    fn test_stale_sample_rejected() {
        let now = now_ms();
        let mut s = sample();
        s.captured_at_ms = now - (MAX_SAMPLE_AGE_SECS * 1000 + 1);
        assert_eq!(
            s.validate(now),
            Err(SampleRejected::Stale(MAX_SAMPLE_AGE_SECS))
        );
        // Exactly at the age limit is still fresh.
        s.captured_at_ms = now - MAX_SAMPLE_AGE_SECS * 1000;
        assert!(s.validate(now).is_ok());
    }

    #[test]
    fn test_wire_sample_uses_camel_case_keys() {
        let wire = WireSample::from(&sample());
        let json = serde_json::to_value(&wire).unwrap();
        assert!(json.get("sessionId").is_some());
        assert!(json.get("capturedAt").is_some());
        assert!(json.get("sample_id").is_none());
        assert!(json.get("sampleId").is_none());
    }
}
