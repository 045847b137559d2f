//! Timing context and the epochs derived from it

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::types::GateError;
use crate::{SECONDS_PER_DAY, TIMEDIFF_MIN_MS};

/// MJD of the Unix epoch (1970-01-01T00:00:00Z)
const MJD_UNIX_EPOCH: f64 = 40587.0;

/// Externally supplied timing inputs, validated
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimingContext {
    /// Frequency the snoopy DM/arrival time refers to (MHz)
    pub reference_frequency_mhz: f64,
    /// VCRAFT minus snoopy arrival time, geometric delay included (seconds)
    pub time_offset_seconds: f64,
    /// Start of correlation (MJD)
    pub correlation_start_mjd: f64,
}

impl TimingContext {
    /// Validate raw command inputs. The time offset arrives in milliseconds.
    ///
    /// Checks run in order frequency, timediff, corrstart so the first
    /// missing input is the one reported.
    pub fn from_inputs(
        frequency_mhz: f64,
        timediff_ms: f64,
        correlation_start_mjd: f64,
    ) -> Result<Self, GateError> {
        if frequency_mhz.is_nan() || frequency_mhz < 0.0 {
            return Err(GateError::MissingFrequency(frequency_mhz));
        }
        if timediff_ms.is_nan() || timediff_ms < TIMEDIFF_MIN_MS {
            return Err(GateError::MissingTimeOffset(timediff_ms));
        }
        if correlation_start_mjd.is_nan() || correlation_start_mjd < 0.0 {
            return Err(GateError::MissingCorrelationStart(correlation_start_mjd));
        }
        Ok(Self {
            reference_frequency_mhz: frequency_mhz,
            time_offset_seconds: timediff_ms / 1000.0,
            correlation_start_mjd,
        })
    }
}

/// Pulse timing after removing the dispersion sweep
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DedispersedEpoch {
    /// Physical pulse width (ms)
    pub pulse_width_ms: f64,
    /// Delay between the reference frequency and 168 MHz above it (s)
    pub dispersion_delay_seconds: f64,
    /// Pulse midpoint (MJD)
    pub midpoint_mjd: f64,
}

impl DedispersedEpoch {
    /// Epoch where the detected pulse begins (MJD)
    pub fn pulse_start_mjd(&self) -> f64 {
        self.midpoint_mjd - self.pulse_width_ms / (2.0 * 1000.0 * SECONDS_PER_DAY)
    }

    /// Epoch where the detected pulse ends (MJD)
    pub fn pulse_end_mjd(&self) -> f64 {
        self.midpoint_mjd + self.pulse_width_ms / (2.0 * 1000.0 * SECONDS_PER_DAY)
    }
}

/// Polyco reference epoch: correlation start floored to a whole second
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolycoReference {
    pub reference_mjd: f64,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl PolycoReference {
    /// Seconds of day reassembled from hour/minute/second
    pub fn seconds_of_day(&self) -> u32 {
        self.hour * 3600 + self.minute * 60 + self.second
    }

    /// Reference epoch as a UTC timestamp, or None if out of chrono's range
    pub fn to_utc(&self) -> Option<DateTime<Utc>> {
        let day = self.reference_mjd.floor();
        let unix_secs = (day - MJD_UNIX_EPOCH) as i64 * SECONDS_PER_DAY as i64
            + i64::from(self.seconds_of_day());
        Utc.timestamp_opt(unix_secs, 0).single()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_converted_to_seconds() {
        let timing = TimingContext::from_inputs(1400.0, 250.0, 59000.0).unwrap();
        assert!((timing.time_offset_seconds - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_unset_frequency_rejected_first() {
        let err = TimingContext::from_inputs(-1.0, -99999.0, -1.0).unwrap_err();
        assert_eq!(err.code(), "E101_MISSING_FREQUENCY");
    }

    #[test]
    fn test_timediff_sentinel() {
        let err = TimingContext::from_inputs(1400.0, -10000.5, 59000.0).unwrap_err();
        assert_eq!(err.code(), "E102_MISSING_TIMEDIFF");
        // exactly at the limit is accepted
        assert!(TimingContext::from_inputs(1400.0, -10000.0, 59000.0).is_ok());
    }

    #[test]
    fn test_corrstart_sentinel() {
        let err = TimingContext::from_inputs(1400.0, 0.0, -1.0).unwrap_err();
        assert_eq!(err.code(), "E103_MISSING_CORRSTART");
    }

    #[test]
    fn test_nan_inputs_rejected() {
        assert!(TimingContext::from_inputs(f64::NAN, 0.0, 59000.0).is_err());
        assert!(TimingContext::from_inputs(1400.0, f64::NAN, 59000.0).is_err());
        assert!(TimingContext::from_inputs(1400.0, 0.0, f64::NAN).is_err());
    }

    #[test]
    fn test_reference_to_utc() {
        // MJD 59000 = 2020-05-31
        let reference = PolycoReference {
            reference_mjd: 59000.0 + 3723.0 / 86400.0,
            hour: 1,
            minute: 2,
            second: 3,
        };
        let utc = reference.to_utc().unwrap();
        assert_eq!(utc.to_rfc3339(), "2020-05-31T01:02:03+00:00");
    }
}
