//! Everything derived from one candidate, ready for the emitters

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{
    BinPartition, Candidate, DedispersedEpoch, FinderSpacing, PhaseWindow, PolycoReference,
    TimingContext,
};
use crate::FAKE_PULSAR_PERIOD_SECONDS;

/// Tunables for building a plan
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanOptions {
    /// Fake pulsar period (seconds)
    pub period_seconds: f64,
    pub finder_spacing: FinderSpacing,
}

impl Default for PlanOptions {
    fn default() -> Self {
        Self {
            period_seconds: FAKE_PULSAR_PERIOD_SECONDS,
            finder_spacing: FinderSpacing::Fixed,
        }
    }
}

/// Relative weights for subtracting the RFI output from each other output
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleFactors {
    pub gate: f64,
    pub bin: f64,
    pub finder: f64,
}

/// Early and late RFI guard windows
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RfiWindows {
    pub early: PhaseWindow,
    pub late: PhaseWindow,
}

impl RfiWindows {
    /// Summed on-window phase width of both guards
    pub fn on_width(&self) -> f64 {
        self.early.width() + self.late.width()
    }
}

/// Immutable result of one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GatePlan {
    pub candidate: Candidate,
    pub timing: TimingContext,
    pub epoch: DedispersedEpoch,
    /// Integration time that keeps the burst within one integration (s)
    pub best_int_time_seconds: f64,
    pub reference: PolycoReference,
    pub period_seconds: f64,
    pub gate_window: PhaseWindow,
    pub rfi_windows: RfiWindows,
    pub gate: BinPartition,
    pub rfi: BinPartition,
    pub high_res: BinPartition,
    /// Phase step between high-res bins (cycles)
    pub high_res_step: f64,
    pub finder: BinPartition,
    /// Phase step between finder bins (cycles)
    pub finder_step: f64,
    pub scales: ScaleFactors,
}

impl GatePlan {
    /// Intervals between high-res phase ends, one FRB_BINxx output each
    pub fn high_res_intervals(&self) -> usize {
        self.high_res.len().saturating_sub(1)
    }

    /// Finder intervals, one FRB_FINDERBINxx output each
    pub fn finder_intervals(&self) -> usize {
        self.finder.len().saturating_sub(1)
    }

    /// The four partitions in file order
    pub fn partitions(&self) -> [&BinPartition; 4] {
        [&self.gate, &self.rfi, &self.high_res, &self.finder]
    }
}

/// JSON summary printed with --json
#[derive(Debug, Serialize)]
pub struct RunSummary<'a> {
    pub generated_at: DateTime<Utc>,
    pub reference_utc: Option<DateTime<Utc>>,
    pub files: Vec<String>,
    pub plan: &'a GatePlan,
}

impl<'a> RunSummary<'a> {
    pub fn new(plan: &'a GatePlan, files: Vec<String>) -> Self {
        Self {
            generated_at: Utc::now(),
            reference_utc: plan.reference.to_utc(),
            files,
            plan,
        }
    }
}
