//! Dispersion/timing resolver
//!
//! Snoopy reports the arrival time at the reference frequency. The pulse
//! midpoint used for gating is pulled back by the cold-plasma delay across
//! the 168 MHz band above it.

use log::{info, warn};

use crate::types::{Candidate, DedispersedEpoch, TimingContext};
use crate::{
    DEDISPERSION_BANDWIDTH_MHZ, DISPERSION_CONSTANT, FILTERBANK_SAMPLE_MS, SECONDS_PER_DAY,
    SUBINT_SECONDS,
};

/// Filterbank width (samples) → physical width (ms)
pub fn pulse_width_ms(width_samples: f64) -> f64 {
    width_samples * FILTERBANK_SAMPLE_MS
}

/// Dispersion delay (s) between `freq_mhz` and `freq_mhz + bandwidth_mhz`
pub fn dispersion_delay_seconds(dm: f64, freq_mhz: f64, bandwidth_mhz: f64) -> f64 {
    let lo_ghz = freq_mhz / 1e3;
    let hi_ghz = (freq_mhz + bandwidth_mhz) / 1e3;
    dm * DISPERSION_CONSTANT / lo_ghz.powi(2) - dm * DISPERSION_CONSTANT / hi_ghz.powi(2)
}

/// Resolve the dedispersed pulse midpoint for a candidate
pub fn dedisperse(candidate: &Candidate, timing: &TimingContext) -> DedispersedEpoch {
    let pulse_width_ms = pulse_width_ms(candidate.width_samples);
    let delay = dispersion_delay_seconds(
        candidate.dm,
        timing.reference_frequency_mhz,
        DEDISPERSION_BANDWIDTH_MHZ,
    );
    let midpoint_mjd = candidate.detection_mjd - delay / SECONDS_PER_DAY;

    info!(
        "Pulse width {:.3} ms, dispersion delay {:.6} s, midpoint MJD {:.12}",
        pulse_width_ms, delay, midpoint_mjd
    );

    DedispersedEpoch {
        pulse_width_ms,
        dispersion_delay_seconds: delay,
        midpoint_mjd,
    }
}

/// Integration time (s) that puts the burst in the middle of a single
/// integration, as a whole number of correlator sub-integrations.
///
/// Counts round half to even. A midpoint before the correlation start has
/// no valid integration and yields 0.
pub fn calc_best_int_time(correlation_start_mjd: f64, midpoint_mjd: f64) -> f64 {
    let raw = 2.0 * (midpoint_mjd - correlation_start_mjd) * SECONDS_PER_DAY;
    if raw < 0.0 {
        warn!(
            "Pulse midpoint (MJD {:.9}) precedes correlation start (MJD {:.9})",
            midpoint_mjd, correlation_start_mjd
        );
        return 0.0;
    }
    (raw / SUBINT_SECONDS).round_ties_even() * SUBINT_SECONDS
}

// =============================================================================
// TESTS
// =============================================================================
