//! Integration tests for the phase/timing pipeline
//!
//! Tests the full path: snoopy text → candidate → dedispersion → reference
//! epoch → phase engine → partitions → scale factors

use frbgate::core::{build_plan, calc_best_int_time, dispersion_delay_seconds, parse_candidate_str, PhaseEngine};
use frbgate::types::{Candidate, PartitionKind, PlanOptions, TimingContext};
use frbgate::{SECONDS_PER_DAY, SUBINT_SECONDS};

const SNOOPY: &str = "\
# S/N sampno secs boxcar idt dm beamno mjd
13.2 20480 34.8 10 12 100.0 17 59000.123456
";

fn scenario_timing() -> TimingContext {
    TimingContext::from_inputs(1400.0, 0.0, 59000.0).unwrap()
}

/// The reference scenario: width 10 samples, DM 100, 1400 MHz
#[test]
fn test_reference_scenario() {
    let cand = parse_candidate_str(SNOOPY).unwrap();
    assert_eq!(cand, Candidate::new(10.0, 100.0, 59000.123456));

    let plan = build_plan(cand, scenario_timing(), PlanOptions::default()).unwrap();
    assert!((plan.epoch.pulse_width_ms - 17.0).abs() < 1e-12);

    let expected_delay = 100.0 * 0.00415 / 1.4f64.powi(2) - 100.0 * 0.00415 / 1.568f64.powi(2);
    assert!((plan.epoch.dispersion_delay_seconds - expected_delay).abs() < 1e-12);
    assert!(
        (plan.epoch.midpoint_mjd - (59000.123456 - expected_delay / SECONDS_PER_DAY)).abs() < 1e-12
    );

    assert_eq!(plan.gate.len(), 2);
    let ends: Vec<f64> = plan.gate.phase_ends().collect();
    assert!(ends[0] < ends[1]);
    assert_eq!(plan.gate.weights().collect::<Vec<_>>(), vec![0.0, 1.0]);

    // one phase end per high-res bin, one subtraction per interval between them
    assert_eq!(plan.high_res.len(), 98);
    assert_eq!(plan.high_res_intervals(), 97);
}

/// Every partition is strictly increasing with the right weights
#[test]
fn test_all_partitions_well_formed() {
    for &(width, dm, freq) in &[(1.0, 50.0, 1100.0), (10.0, 100.0, 1400.0), (40.0, 1500.0, 700.0)] {
        let cand = Candidate::new(width, dm, 59000.2);
        let timing = TimingContext::from_inputs(freq, -3.5, 59000.19).unwrap();
        let plan = build_plan(cand, timing, PlanOptions::default()).unwrap();

        for partition in plan.partitions() {
            let ends: Vec<f64> = partition.phase_ends().collect();
            assert!(ends.windows(2).all(|w| w[1] > w[0]), "{} not increasing", partition.kind);
            for w in partition.weights() {
                if partition.kind.is_gating() {
                    assert!(w == 0.0 || w == 1.0);
                } else {
                    assert_eq!(w, 1.0);
                }
            }
        }
        assert_eq!(plan.rfi.kind, PartitionKind::Rfi);
        assert_eq!(plan.rfi.len(), 4);
        assert_eq!(plan.finder.len(), 20);
    }
}

/// Best int time is a non-negative subint multiple
#[test]
fn test_best_int_time_property() {
    let plan = build_plan(
        Candidate::new(10.0, 100.0, 59000.123456),
        scenario_timing(),
        PlanOptions::default(),
    )
    .unwrap();
    let n = plan.best_int_time_seconds / SUBINT_SECONDS;
    assert!(plan.best_int_time_seconds >= 0.0);
    assert!((n - n.round()).abs() < 1e-9);
    assert_eq!(
        plan.best_int_time_seconds,
        calc_best_int_time(59000.0, plan.epoch.midpoint_mjd)
    );
}

/// Time offset moves every phase by offset / period
#[test]
fn test_time_offset_shifts_all_phases() {
    let cand = Candidate::new(10.0, 100.0, 59000.123456);
    let base = build_plan(cand, scenario_timing(), PlanOptions::default()).unwrap();
    let shifted_timing = TimingContext::from_inputs(1400.0, 500.0, 59000.0).unwrap();
    let shifted = build_plan(cand, shifted_timing, PlanOptions::default()).unwrap();

    for (a, b) in base.partitions().iter().zip(shifted.partitions().iter()) {
        for (pa, pb) in a.phase_ends().zip(b.phase_ends()) {
            assert!((pb - pa - 0.05).abs() < 1e-9);
        }
    }
    // scale factors only depend on widths
    assert!((base.scales.gate - shifted.scales.gate).abs() < 1e-6);
}

/// A different fake period rescales phases but not the scale factors
#[test]
fn test_alternate_period() {
    let cand = Candidate::new(10.0, 100.0, 59000.123456);
    let ten = build_plan(cand, scenario_timing(), PlanOptions::default()).unwrap();
    let options = PlanOptions {
        period_seconds: 5.0,
        ..PlanOptions::default()
    };
    let five = build_plan(cand, scenario_timing(), options).unwrap();

    assert!((five.gate_window.start_phase - 2.0 * ten.gate_window.start_phase).abs() < 1e-6);
    assert!((five.scales.gate - ten.scales.gate).abs() < 1e-6);
    assert!((five.scales.bin - ten.scales.bin).abs() < 1e-9);
}

/// Phase engine linearity and delay monotonicity at the crate surface
#[test]
fn test_engine_and_delay_properties() {
    let engine = PhaseEngine::new(10.0, 59000.0, 0.0);
    let delta = 0.25 / SECONDS_PER_DAY;
    let d = engine.phase(59000.3 + delta) - engine.phase(59000.3);
    assert!((d - 0.025).abs() < 1e-8);

    let a = dispersion_delay_seconds(10.0, 1271.5, 168.0);
    let b = dispersion_delay_seconds(20.0, 1271.5, 168.0);
    assert!(a > 0.0 && b > a);
}
