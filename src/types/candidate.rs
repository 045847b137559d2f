//! Snoopy candidate record

use serde::{Deserialize, Serialize};

/// Field index of the pulse width (filterbank samples)
pub const FIELD_WIDTH: usize = 3;
/// Field index of the dispersion measure (pc/cm^3)
pub const FIELD_DM: usize = 5;
/// Field index of the detection MJD
pub const FIELD_MJD: usize = 7;

/// One triggering candidate from a snoopy log
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// Boxcar width in filterbank samples
    pub width_samples: f64,
    /// Dispersion measure (pc/cm^3)
    pub dm: f64,
    /// Detection epoch (MJD), referenced to the reference frequency
    pub detection_mjd: f64,
}

impl Candidate {
    pub fn new(width_samples: f64, dm: f64, detection_mjd: f64) -> Self {
        Self {
            width_samples,
            dm,
            detection_mjd,
        }
    }
}
