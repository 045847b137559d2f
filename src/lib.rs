//! frbgate: snoopy candidate → DiFX polyco + binconfig generator
//!
//! Pipeline: candidate_parser → dispersion → reference → phase → partitions
//! → scale → emit

pub mod core;
pub mod types;

// =============================================================================
// FAKE PULSAR MODEL
// =============================================================================

/// Period of the synthetic pulsar the correlator gates against (seconds)
pub const FAKE_PULSAR_PERIOD_SECONDS: f64 = 10.0;

pub const SECONDS_PER_DAY: f64 = 86400.0;

// =============================================================================
// INSTRUMENT CONSTANTS - CRAFT filterbank / correlator
// =============================================================================

/// Duration of one filterbank sample (milliseconds)
pub const FILTERBANK_SAMPLE_MS: f64 = 1.7;

/// Dispersion constant (s MHz^2 pc^-1 cm^3, frequencies in GHz)
pub const DISPERSION_CONSTANT: f64 = 0.00415;

/// Offset of the upper dedispersion frequency above the reference frequency
pub const DEDISPERSION_BANDWIDTH_MHZ: f64 = 168.0;

/// Correlator sub-integration (seconds)
pub const SUBINT_SECONDS: f64 = 0.13824;

// =============================================================================
// GATE WINDOWS
// =============================================================================

/// Gate opens this long before the pulse midpoint (seconds)
pub const GATE_LEAD_SECONDS: f64 = 0.5;

/// Gate closes this long after the pulse midpoint (seconds)
pub const GATE_TRAIL_SECONDS: f64 = 1.5;

/// RFI guard window: near edge offset from the gate (seconds)
pub const RFI_GUARD_INNER_SECONDS: f64 = 0.004;

/// RFI guard window: far edge offset from the gate (seconds)
pub const RFI_GUARD_OUTER_SECONDS: f64 = 0.020;

/// High time resolution bin width (microseconds)
pub const HIRES_BIN_MICROSECONDS: f64 = 216.0;

/// Padding either side of the detected pulse for the high-res bins (ms)
pub const HIRES_EXTRA_WIDTH_MS: f64 = 2.0;

/// Number of finder intervals; the binconfig carries one more phase end
pub const FINDER_NUM_INTERVALS: usize = 19;

/// Fixed finder bin width (seconds); 19 of these cover ~2 s of data
pub const FINDER_BIN_SECONDS: f64 = 0.1;

// =============================================================================
// INPUT SENTINELS - values meaning "not supplied"
// =============================================================================

pub const FREQUENCY_UNSET_MHZ: f64 = -1.0;
pub const TIMEDIFF_UNSET_MS: f64 = -99999.0;
/// Any timediff below this is treated as not supplied
pub const TIMEDIFF_MIN_MS: f64 = -10000.0;
pub const CORRSTART_UNSET_MJD: f64 = -1.0;

// =============================================================================
// OUTPUT FILES
// =============================================================================

pub const POLYCO_FILE: &str = "craftfrb.polyco";
pub const GATE_BINCONFIG_FILE: &str = "craftfrb.gate.binconfig";
pub const RFI_BINCONFIG_FILE: &str = "craftfrb.rfi.binconfig";
pub const BIN_BINCONFIG_FILE: &str = "craftfrb.bin.binconfig";
pub const FINDER_BINCONFIG_FILE: &str = "craftfrb.finder.binconfig";
pub const SUBTRACTION_SCRIPT_FILE: &str = "dosubtractions.sh";

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "1.0.0";
