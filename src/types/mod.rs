//! Core types for frbgate

mod candidate;
mod error;
mod partition;
mod plan;
mod timing;

pub use candidate::{Candidate, FIELD_DM, FIELD_MJD, FIELD_WIDTH};
pub use error::GateError;
pub use partition::{BinPartition, FinderSpacing, PartitionKind, PhaseBin, PhaseWindow};
pub use plan::{GatePlan, PlanOptions, RfiWindows, RunSummary, ScaleFactors};
pub use timing::{DedispersedEpoch, PolycoReference, TimingContext};
