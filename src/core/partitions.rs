//! Bin partition generators: gate, RFI, high time resolution, finder
//!
//! All four are built from phases produced by one [`PhaseEngine`]. None of
//! them reorder or repair their input; an inverted window shows up as a
//! non-increasing partition and is rejected by `BinPartition::validate`.

use log::debug;

use crate::core::phase::PhaseEngine;
use crate::types::{
    BinPartition, DedispersedEpoch, FinderSpacing, PartitionKind, PhaseBin, PhaseWindow,
    RfiWindows,
};
use crate::{
    FINDER_BIN_SECONDS, FINDER_NUM_INTERVALS, GATE_LEAD_SECONDS, GATE_TRAIL_SECONDS,
    HIRES_BIN_MICROSECONDS, HIRES_EXTRA_WIDTH_MS, RFI_GUARD_INNER_SECONDS,
    RFI_GUARD_OUTER_SECONDS, SECONDS_PER_DAY,
};

// =============================================================================
// GATE
// =============================================================================

/// On-pulse window: 0.5 s before to 1.5 s after the pulse midpoint
pub fn gate_window(engine: &PhaseEngine, epoch: &DedispersedEpoch) -> PhaseWindow {
    let start_mjd = epoch.midpoint_mjd - GATE_LEAD_SECONDS / SECONDS_PER_DAY;
    let end_mjd = epoch.midpoint_mjd + GATE_TRAIL_SECONDS / SECONDS_PER_DAY;
    let window = engine.window(start_mjd, end_mjd);
    debug!(
        "Gate phases {:.9} → {:.9}",
        window.start_phase, window.end_phase
    );
    window
}

/// Two bins: off-pulse up to the gate start, on-pulse up to the gate end
pub fn gate_partition(gate: &PhaseWindow) -> BinPartition {
    BinPartition::new(
        PartitionKind::Gate,
        vec![
            PhaseBin {
                phase_end: gate.start_phase,
                weight: 0.0,
            },
            PhaseBin {
                phase_end: gate.end_phase,
                weight: 1.0,
            },
        ],
    )
}

// =============================================================================
// RFI
// =============================================================================

/// 16 ms guard windows 4–20 ms outside each gate edge
pub fn rfi_windows(engine: &PhaseEngine, gate: &PhaseWindow) -> RfiWindows {
    let inner = engine.seconds_to_phase(RFI_GUARD_INNER_SECONDS);
    let outer = engine.seconds_to_phase(RFI_GUARD_OUTER_SECONDS);
    RfiWindows {
        early: PhaseWindow::new(gate.start_phase - outer, gate.start_phase - inner),
        late: PhaseWindow::new(gate.end_phase + inner, gate.end_phase + outer),
    }
}

/// Four bins, alternating off/on, the "on" bins being the guards
pub fn rfi_partition(rfi: &RfiWindows) -> BinPartition {
    let ends = [
        (rfi.early.start_phase, 0.0),
        (rfi.early.end_phase, 1.0),
        (rfi.late.start_phase, 0.0),
        (rfi.late.end_phase, 1.0),
    ];
    BinPartition::new(
        PartitionKind::Rfi,
        ends.iter()
            .map(|&(phase_end, weight)| PhaseBin { phase_end, weight })
            .collect(),
    )
}

// =============================================================================
// HIGH TIME RESOLUTION
// =============================================================================

/// Number of 216 µs bins covering the pulse plus 2 ms either side
pub fn high_res_bin_count(pulse_width_ms: f64) -> usize {
    let bin_ms = HIRES_BIN_MICROSECONDS / 1000.0;
    let count = ((pulse_width_ms + 2.0 * HIRES_EXTRA_WIDTH_MS) / bin_ms).ceil();
    if count > 0.0 {
        count as usize
    } else {
        0
    }
}

/// Fine bins from 2 ms before the pulse start, one phase end per bin.
/// Returns the partition and its phase step.
pub fn high_res_partition(engine: &PhaseEngine, epoch: &DedispersedEpoch) -> (BinPartition, f64) {
    let start = engine.phase(epoch.pulse_start_mjd())
        - engine.seconds_to_phase(HIRES_EXTRA_WIDTH_MS / 1000.0);
    let step = engine.seconds_to_phase(HIRES_BIN_MICROSECONDS / 1e6);
    let bins = high_res_bin_count(epoch.pulse_width_ms);
    debug!("High-res: {} bins of {:.9} from {:.9}", bins, step, start);
    let partition = BinPartition::uniform(
        PartitionKind::HighRes,
        (0..bins).map(|i| start + i as f64 * step),
    );
    (partition, step)
}

// =============================================================================
// FINDER
// =============================================================================

/// Coarse scan bins, 19 intervals / 20 phase ends.
/// Returns the partition and its phase step.
pub fn finder_partition(
    engine: &PhaseEngine,
    gate: &PhaseWindow,
    rfi: &RfiWindows,
    spacing: FinderSpacing,
) -> (BinPartition, f64) {
    let (start, step) = match spacing {
        FinderSpacing::Fixed => (gate.start_phase, engine.seconds_to_phase(FINDER_BIN_SECONDS)),
        FinderSpacing::GuardSpan => (
            rfi.early.end_phase,
            (rfi.late.start_phase - rfi.early.end_phase) / FINDER_NUM_INTERVALS as f64,
        ),
    };
    debug!("Finder ({:?}): step {:.9} from {:.9}", spacing, step, start);
    let partition = BinPartition::uniform(
        PartitionKind::Finder,
        (0..=FINDER_NUM_INTERVALS).map(|i| start + i as f64 * step),
    );
    (partition, step)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> PhaseEngine {
        PhaseEngine::new(10.0, 59000.0, 0.0)
    }

    fn epoch(width_ms: f64) -> DedispersedEpoch {
        DedispersedEpoch {
            pulse_width_ms: width_ms,
            dispersion_delay_seconds: 0.0,
            midpoint_mjd: 59000.0 + 100.0 / SECONDS_PER_DAY,
        }
    }

    #[test]
    fn test_gate_window_spans_two_seconds() {
        let e = engine();
        let gate = gate_window(&e, &epoch(17.0));
        assert!((gate.start_phase - 9.95).abs() < 1e-6);
        assert!((gate.end_phase - 10.15).abs() < 1e-6);
        let p = gate_partition(&gate);
        assert_eq!(p.len(), 2);
        assert_eq!(p.weights().collect::<Vec<_>>(), vec![0.0, 1.0]);
        assert!(p.validate().is_ok());
    }

    #[test]
    fn test_rfi_guards() {
        let e = engine();
        let gate = PhaseWindow::new(1.0, 1.2);
        let rfi = rfi_windows(&e, &gate);
        assert!((rfi.early.start_phase - 0.998).abs() < 1e-12);
        assert!((rfi.early.end_phase - 0.9996).abs() < 1e-12);
        assert!((rfi.late.start_phase - 1.2004).abs() < 1e-12);
        assert!((rfi.late.end_phase - 1.202).abs() < 1e-12);
        assert!((rfi.on_width() - 0.0032).abs() < 1e-12);

        let p = rfi_partition(&rfi);
        assert_eq!(p.weights().collect::<Vec<_>>(), vec![0.0, 1.0, 0.0, 1.0]);
        assert!(p.validate().is_ok());
    }

    #[test]
    fn test_high_res_count() {
        // (17 + 4) / 0.216 = 97.2 → 98
        assert_eq!(high_res_bin_count(17.0), 98);
        // padding alone: 4 / 0.216 = 18.5 → 19
        assert_eq!(high_res_bin_count(0.0), 19);
    }

    #[test]
    fn test_high_res_covers_pulse() {
        let e = engine();
        let ep = epoch(17.0);
        let (p, step) = high_res_partition(&e, &ep);
        assert_eq!(p.len(), high_res_bin_count(17.0));
        assert_eq!(p.len(), 98);
        assert!((step - 2.16e-5).abs() < 1e-15);
        assert!(p.validate().is_ok());

        let ends: Vec<f64> = p.phase_ends().collect();
        let pulse_start = e.phase(ep.pulse_start_mjd());
        let pulse_end = e.phase(ep.pulse_end_mjd());
        assert!((ends[0] - (pulse_start - 0.0002)).abs() < 1e-9);
        // the last bin is open ended; its phase end lies within one step of the padded end
        let last = *ends.last().unwrap();
        assert!(last < pulse_end + 0.0002);
        assert!(last + step >= pulse_end + 0.0002 - 1e-9);
        assert!(p.weights().all(|w| w == 1.0));
        assert!(!p.scrunch());
    }

    #[test]
    fn test_finder_fixed() {
        let e = engine();
        let gate = PhaseWindow::new(1.0, 1.2);
        let rfi = rfi_windows(&e, &gate);
        let (p, step) = finder_partition(&e, &gate, &rfi, FinderSpacing::Fixed);
        assert_eq!(p.len(), 20);
        assert!((step - 0.01).abs() < 1e-15);
        let ends: Vec<f64> = p.phase_ends().collect();
        assert_eq!(ends[0], 1.0);
        assert!((ends[19] - 1.19).abs() < 1e-12);
        assert!(p.validate().is_ok());
    }

    #[test]
    fn test_finder_guard_span() {
        let e = engine();
        let gate = PhaseWindow::new(1.0, 1.2);
        let rfi = rfi_windows(&e, &gate);
        let (p, step) = finder_partition(&e, &gate, &rfi, FinderSpacing::GuardSpan);
        let ends: Vec<f64> = p.phase_ends().collect();
        assert_eq!(ends.len(), 20);
        assert_eq!(ends[0], rfi.early.end_phase);
        assert!((ends[19] - rfi.late.start_phase).abs() < 1e-12);
        assert!((step - (rfi.late.start_phase - rfi.early.end_phase) / 19.0).abs() < 1e-15);
    }

    #[test]
    fn test_inverted_gate_is_not_repaired() {
        let gate = PhaseWindow::new(2.0, 1.0);
        let p = gate_partition(&gate);
        assert_eq!(p.phase_ends().collect::<Vec<_>>(), vec![2.0, 1.0]);
        assert!(p.validate().is_err());
    }
}
