//! Pipeline: validated inputs → GatePlan → output files
//!
//! Nothing touches the output directory until the candidate has parsed and
//! every partition has validated.

use std::path::{Path, PathBuf};

use log::info;

use crate::core::candidate_parser::parse_candidate_file;
use crate::core::dispersion::{calc_best_int_time, dedisperse};
use crate::core::emit::write_outputs;
use crate::core::partitions::{
    finder_partition, gate_partition, gate_window, high_res_partition, rfi_partition, rfi_windows,
};
use crate::core::phase::PhaseEngine;
use crate::core::reference::calc_polyco_ref;
use crate::core::scale::reconcile;
use crate::types::{Candidate, GateError, GatePlan, PlanOptions, TimingContext};

/// Raw command inputs, before validation
#[derive(Debug, Clone)]
pub struct GateInputs {
    pub snoopy_log: PathBuf,
    pub frequency_mhz: f64,
    pub timediff_ms: f64,
    pub correlation_start_mjd: f64,
    pub options: PlanOptions,
}

/// Derive every value needed by the emitters
pub fn build_plan(
    candidate: Candidate,
    timing: TimingContext,
    options: PlanOptions,
) -> Result<GatePlan, GateError> {
    let epoch = dedisperse(&candidate, &timing);
    let best_int_time_seconds = calc_best_int_time(timing.correlation_start_mjd, epoch.midpoint_mjd);
    let reference = calc_polyco_ref(timing.correlation_start_mjd);
    let engine = PhaseEngine::for_reference(options.period_seconds, &reference, &timing);

    let gate_window = gate_window(&engine, &epoch);
    let rfi_windows = rfi_windows(&engine, &gate_window);
    let (high_res, high_res_step) = high_res_partition(&engine, &epoch);
    let (finder, finder_step) =
        finder_partition(&engine, &gate_window, &rfi_windows, options.finder_spacing);
    let scales = reconcile(gate_window.width(), high_res_step, finder_step, &rfi_windows);

    let plan = GatePlan {
        candidate,
        timing,
        epoch,
        best_int_time_seconds,
        reference,
        period_seconds: options.period_seconds,
        gate_window,
        rfi_windows,
        gate: gate_partition(&gate_window),
        rfi: rfi_partition(&rfi_windows),
        high_res,
        high_res_step,
        finder,
        finder_step,
        scales,
    };

    for partition in plan.partitions() {
        partition.validate()?;
    }
    info!(
        "Scale factors: gate {:.9}, bin {:.9}, finder {:.9}",
        plan.scales.gate, plan.scales.bin, plan.scales.finder
    );
    Ok(plan)
}

/// Validate inputs, parse the candidate and build the plan without writing
pub fn prepare(inputs: &GateInputs) -> Result<GatePlan, GateError> {
    let timing = TimingContext::from_inputs(
        inputs.frequency_mhz,
        inputs.timediff_ms,
        inputs.correlation_start_mjd,
    )?;
    let candidate = parse_candidate_file(&inputs.snoopy_log)?;
    build_plan(candidate, timing, inputs.options)
}

/// Full run: prepare, then write every output into `out_dir`
pub fn run(inputs: &GateInputs, out_dir: &Path) -> Result<(GatePlan, Vec<PathBuf>), GateError> {
    let plan = prepare(inputs)?;
    let written = write_outputs(&plan, out_dir)?;
    Ok((plan, written))
}

// =============================================================================
// TESTS
// =============================================================================
