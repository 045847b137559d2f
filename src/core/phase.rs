//! Phase engine: absolute epochs → fake-pulsar phase
//!
//! phase = (86400 * (epoch - reference) + offset) / period
//!
//! Phases are not wrapped; a window may sit many cycles from the reference
//! or before it.

use crate::types::{PhaseWindow, PolycoReference, TimingContext};
use crate::SECONDS_PER_DAY;

/// Maps epochs onto phase of a fixed-period synthetic pulsar
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseEngine {
    /// Fake pulsar period (seconds)
    pub period_seconds: f64,
    /// Phase zero (MJD)
    pub reference_mjd: f64,
    /// VCRAFT minus snoopy arrival offset (seconds)
    pub time_offset_seconds: f64,
}

impl PhaseEngine {
    pub fn new(period_seconds: f64, reference_mjd: f64, time_offset_seconds: f64) -> Self {
        Self {
            period_seconds,
            reference_mjd,
            time_offset_seconds,
        }
    }

    /// Engine for a validated timing context and polyco reference
    pub fn for_reference(
        period_seconds: f64,
        reference: &PolycoReference,
        timing: &TimingContext,
    ) -> Self {
        Self::new(
            period_seconds,
            reference.reference_mjd,
            timing.time_offset_seconds,
        )
    }

    /// Phase (cycles) at an absolute epoch
    pub fn phase(&self, epoch_mjd: f64) -> f64 {
        phase(
            epoch_mjd,
            self.reference_mjd,
            self.time_offset_seconds,
            self.period_seconds,
        )
    }

    /// Phase window between two epochs
    pub fn window(&self, start_mjd: f64, end_mjd: f64) -> PhaseWindow {
        PhaseWindow::new(self.phase(start_mjd), self.phase(end_mjd))
    }

    /// Duration → phase span
    pub fn seconds_to_phase(&self, seconds: f64) -> f64 {
        seconds / self.period_seconds
    }
}

/// Free-standing form of [`PhaseEngine::phase`]
pub fn phase(
    epoch_mjd: f64,
    reference_mjd: f64,
    time_offset_seconds: f64,
    period_seconds: f64,
) -> f64 {
    (SECONDS_PER_DAY * (epoch_mjd - reference_mjd) + time_offset_seconds) / period_seconds
}
