//! Core modules for frbgate

pub mod candidate_parser;
pub mod dispersion;
pub mod reference;
pub mod phase;
pub mod partitions;
pub mod scale;
pub mod emit;
pub mod pipeline;

pub use candidate_parser::{parse_candidate_file, parse_candidate_str};
pub use dispersion::{calc_best_int_time, dedisperse, dispersion_delay_seconds, pulse_width_ms};
pub use reference::calc_polyco_ref;
pub use phase::PhaseEngine;
pub use partitions::{
    finder_partition, gate_partition, gate_window, high_res_bin_count, high_res_partition,
    rfi_partition, rfi_windows,
};
pub use scale::reconcile;
pub use emit::{binconfig_file_name, format_binconfig, format_int_time, format_polyco, format_subtractions, write_outputs};
pub use pipeline::{build_plan, prepare, run, GateInputs};
