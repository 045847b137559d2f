//! Polyco reference epoch: the whole second at or before correlation start

use log::info;

use crate::types::PolycoReference;
use crate::SECONDS_PER_DAY;

/// Floor the correlation start to an integer second and split it into
/// hour/minute/second of day. The sub-second remainder is dropped.
pub fn calc_polyco_ref(correlation_start_mjd: f64) -> PolycoReference {
    let mjd_int = correlation_start_mjd.trunc();
    let seconds = ((correlation_start_mjd - mjd_int) * SECONDS_PER_DAY).trunc() as u32;

    let hour = seconds / 3600;
    let minute = (seconds - hour * 3600) / 60;
    let second = seconds - (hour * 3600 + minute * 60);

    let reference_mjd = mjd_int + f64::from(seconds) / SECONDS_PER_DAY;
    info!(
        "Polyco reference MJD {:.15} ({:02}:{:02}:{:02})",
        reference_mjd, hour, minute, second
    );

    PolycoReference {
        reference_mjd,
        hour,
        minute,
        second,
    }
}
