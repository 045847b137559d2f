//! Phase windows and binconfig partitions

use serde::{Deserialize, Serialize};

use crate::types::GateError;

/// A span of fake-pulsar phase, in cycles relative to the polyco reference
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhaseWindow {
    pub start_phase: f64,
    pub end_phase: f64,
}

impl PhaseWindow {
    pub fn new(start_phase: f64, end_phase: f64) -> Self {
        Self {
            start_phase,
            end_phase,
        }
    }

    /// Phase width (cycles); negative for an inverted window
    pub fn width(&self) -> f64 {
        self.end_phase - self.start_phase
    }
}

/// Which of the four binning schemes a partition is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartitionKind {
    /// On/off pulse selection
    Gate,
    /// Background reference either side of the gate
    Rfi,
    /// Fine time resolution across the pulse
    HighRes,
    /// Coarse diagnostic scan
    Finder,
}

impl PartitionKind {
    /// Gate and RFI partitions exclude data; the others only resolve phase
    pub fn is_gating(&self) -> bool {
        matches!(self, Self::Gate | Self::Rfi)
    }

    /// Correlator SCRUNCH OUTPUT setting for this partition
    pub fn scrunch(&self) -> bool {
        self.is_gating()
    }
}

impl std::fmt::Display for PartitionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PartitionKind::Gate => "gate",
            PartitionKind::Rfi => "rfi",
            PartitionKind::HighRes => "bin",
            PartitionKind::Finder => "finder",
        };
        write!(f, "{}", name)
    }
}

/// How the finder bins are laid out
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinderSpacing {
    /// 100 ms bins starting at the gate start
    #[default]
    Fixed,
    /// Equal bins from the end of the early RFI window to the start of the late one
    GuardSpan,
}

/// One binconfig bin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhaseBin {
    pub phase_end: f64,
    pub weight: f64,
}

/// Ordered set of bins for one binconfig file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinPartition {
    pub kind: PartitionKind,
    pub bins: Vec<PhaseBin>,
}

impl BinPartition {
    pub fn new(kind: PartitionKind, bins: Vec<PhaseBin>) -> Self {
        Self { kind, bins }
    }

    /// Build from phase ends that all carry weight 1.0
    pub fn uniform(kind: PartitionKind, phase_ends: impl IntoIterator<Item = f64>) -> Self {
        let bins = phase_ends
            .into_iter()
            .map(|phase_end| PhaseBin {
                phase_end,
                weight: 1.0,
            })
            .collect();
        Self { kind, bins }
    }

    pub fn len(&self) -> usize {
        self.bins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    pub fn scrunch(&self) -> bool {
        self.kind.scrunch()
    }

    pub fn phase_ends(&self) -> impl Iterator<Item = f64> + '_ {
        self.bins.iter().map(|b| b.phase_end)
    }

    pub fn weights(&self) -> impl Iterator<Item = f64> + '_ {
        self.bins.iter().map(|b| b.weight)
    }

    /// Check the binconfig invariants: at least one bin, finite and strictly
    /// increasing phase ends, weights in {0, 1} (gating) or all 1 (others).
    pub fn validate(&self) -> Result<(), GateError> {
        let invalid = |bin: usize, detail: String| GateError::InvalidPartition {
            kind: self.kind,
            bin,
            detail,
        };

        if self.bins.is_empty() {
            return Err(invalid(0, "no bins".to_string()));
        }

        let mut previous: Option<f64> = None;
        for (i, bin) in self.bins.iter().enumerate() {
            if !bin.phase_end.is_finite() {
                return Err(invalid(i, format!("phase end {} is not finite", bin.phase_end)));
            }
            if let Some(prev) = previous {
                if bin.phase_end <= prev {
                    return Err(invalid(
                        i,
                        format!("phase end {:.9} does not follow {:.9}", bin.phase_end, prev),
                    ));
                }
            }
            previous = Some(bin.phase_end);

            let weight_ok = if self.kind.is_gating() {
                bin.weight == 0.0 || bin.weight == 1.0
            } else {
                bin.weight == 1.0
            };
            if !weight_ok {
                return Err(invalid(i, format!("weight {} not allowed", bin.weight)));
            }
        }
        Ok(())
    }
}
