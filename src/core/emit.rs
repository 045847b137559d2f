//! Emitters for the polyco, binconfig and subtraction script files
//!
//! The DiFX config parser is column sensitive: labels are padded to 20
//! characters and phases carry 9 decimals.

use std::fmt::Display;
use std::path::{Path, PathBuf};

use log::info;

use crate::types::{BinPartition, GateError, GatePlan, PartitionKind};
use crate::{
    BIN_BINCONFIG_FILE, FINDER_BINCONFIG_FILE, GATE_BINCONFIG_FILE, POLYCO_FILE,
    RFI_BINCONFIG_FILE, SUBTRACTION_SCRIPT_FILE,
};

const LABEL_WIDTH: usize = 20;
const ZERO_COEFFICIENT: &str = "0.00000000000000000E-99";

/// binconfig file name for a partition
pub fn binconfig_file_name(kind: PartitionKind) -> &'static str {
    match kind {
        PartitionKind::Gate => GATE_BINCONFIG_FILE,
        PartitionKind::Rfi => RFI_BINCONFIG_FILE,
        PartitionKind::HighRes => BIN_BINCONFIG_FILE,
        PartitionKind::Finder => FINDER_BINCONFIG_FILE,
    }
}

fn labelled(label: &str, value: impl Display) -> String {
    format!("{:<width$}{}\n", label, value, width = LABEL_WIDTH)
}

/// Three-line polyco with zero coefficients: constant frequency 1/period
pub fn format_polyco(plan: &GatePlan) -> String {
    let r = &plan.reference;
    let lines = [
        format!(
            "fake+fake DD-MMM-YY {:02}{:02}{:05.2} {:.15} {:.4} 0.0 0.0",
            r.hour,
            r.minute,
            f64::from(r.second),
            r.reference_mjd,
            plan.candidate.dm
        ),
        format!(
            "0.0 {:.3} 0 100 3 {:.3}",
            1.0 / plan.period_seconds,
            plan.timing.reference_frequency_mhz
        ),
        format!("{0} {0} {0}", ZERO_COEFFICIENT),
    ];
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// binconfig body for one partition, pointing at `polyco_path`
pub fn format_binconfig(partition: &BinPartition, polyco_path: &Path) -> String {
    let mut out = String::new();
    out.push_str(&labelled("NUM POLYCO FILES:", 1));
    out.push_str(&labelled("POLYCO FILE 0:", polyco_path.display()));
    out.push_str(&labelled("NUM PULSAR BINS:", partition.len()));
    out.push_str(&labelled(
        "SCRUNCH OUTPUT:",
        if partition.scrunch() { "TRUE" } else { "FALSE" },
    ));
    for (i, bin) in partition.bins.iter().enumerate() {
        out.push_str(&labelled(
            &format!("BIN PHASE END {}:", i),
            format!("{:.9}", bin.phase_end),
        ));
        out.push_str(&labelled(
            &format!("BIN WEIGHT {}:", i),
            format!("{:.1}", bin.weight),
        ));
    }
    out
}

fn subtraction_line(input: &str, scale: f64) -> String {
    format!("uvsubScaled.py {} FRB_RFI.FITS {:.9}\n", input, scale)
}

/// uvsubScaled.py calls for every gated output
pub fn format_subtractions(plan: &GatePlan) -> String {
    let mut out = subtraction_line("FRB_GATE.FITS", plan.scales.gate);
    for i in 0..plan.high_res_intervals() {
        out.push_str(&subtraction_line(&format!("FRB_BIN{:02}.FITS", i), plan.scales.bin));
    }
    for i in 0..plan.finder_intervals() {
        out.push_str(&subtraction_line(
            &format!("FRB_FINDERBIN{:02}.FITS", i),
            plan.scales.finder,
        ));
    }
    out
}

/// Best integration time as printed on stdout; always keeps a decimal point
pub fn format_int_time(seconds: f64) -> String {
    format!("{:?}", seconds)
}

fn write_file(path: PathBuf, contents: &str) -> Result<PathBuf, GateError> {
    std::fs::write(&path, contents).map_err(|source| GateError::Write {
        path: path.clone(),
        source,
    })?;
    info!("Wrote {}", path.display());
    Ok(path)
}

/// Write all six output files into `dir`; returns the paths in write order
pub fn write_outputs(plan: &GatePlan, dir: &Path) -> Result<Vec<PathBuf>, GateError> {
    let dir = std::fs::canonicalize(dir).map_err(|source| GateError::OutputDir {
        path: dir.to_path_buf(),
        source,
    })?;
    let polyco_path = dir.join(POLYCO_FILE);

    let mut written = Vec::with_capacity(6);
    written.push(write_file(polyco_path.clone(), &format_polyco(plan))?);
    for partition in plan.partitions() {
        written.push(write_file(
            dir.join(binconfig_file_name(partition.kind)),
            &format_binconfig(partition, &polyco_path),
        )?);
    }
    written.push(write_file(
        dir.join(SUBTRACTION_SCRIPT_FILE),
        &format_subtractions(plan),
    )?);
    Ok(written)
}

// =============================================================================
// TESTS
// =============================================================================
