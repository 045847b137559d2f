//! Error taxonomy
//!
//! E1xx: command inputs, E2xx: candidate file, E3xx: partitions, E4xx: output

use std::path::PathBuf;
use thiserror::Error;

use crate::types::PartitionKind;

#[derive(Debug, Error)]
pub enum GateError {
    // =========================================================================
    // E1xx: Inputs
    // =========================================================================
    #[error("You have to supply a frequency for the snoopy files (got {0} MHz)")]
    MissingFrequency(f64),

    #[error("You have to specify a timediff: the geometric delay from ASKAP to the geocentre, in ms (got {0})")]
    MissingTimeOffset(f64),

    #[error("You have to specify a corrstartmjd (got {0})")]
    MissingCorrelationStart(f64),

    // =========================================================================
    // E2xx: Candidate file
    // =========================================================================
    #[error("cannot read snoopy log {path}: {source}")]
    CandidateRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no candidate found in snoopy log")]
    NoCandidate,

    #[error("expected exactly one candidate in snoopy log, found {count}")]
    MultipleCandidates { count: usize },

    #[error("candidate line has no field {index} ({name})")]
    MissingField { index: usize, name: &'static str },

    #[error("candidate field {name} is not a number: {value:?}")]
    InvalidField { name: &'static str, value: String },

    // =========================================================================
    // E3xx: Partitions
    // =========================================================================
    #[error("{kind} partition is invalid at bin {bin}: {detail}")]
    InvalidPartition {
        kind: PartitionKind,
        bin: usize,
        detail: String,
    },

    // =========================================================================
    // E4xx: Output
    // =========================================================================
    #[error("output directory {path} is not usable: {source}")]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl GateError {
    /// Stable code string (for logging)
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingFrequency(_) => "E101_MISSING_FREQUENCY",
            Self::MissingTimeOffset(_) => "E102_MISSING_TIMEDIFF",
            Self::MissingCorrelationStart(_) => "E103_MISSING_CORRSTART",
            Self::CandidateRead { .. } => "E201_CANDIDATE_READ",
            Self::NoCandidate => "E202_NO_CANDIDATE",
            Self::MultipleCandidates { .. } => "E203_MULTIPLE_CANDIDATES",
            Self::MissingField { .. } => "E204_MISSING_FIELD",
            Self::InvalidField { .. } => "E205_INVALID_FIELD",
            Self::InvalidPartition { .. } => "E301_INVALID_PARTITION",
            Self::OutputDir { .. } => "E401_OUTPUT_DIR",
            Self::Write { .. } => "E402_WRITE",
        }
    }

    /// True for errors raised before any computation starts
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::MissingFrequency(_) | Self::MissingTimeOffset(_) | Self::MissingCorrelationStart(_)
        )
    }
}
