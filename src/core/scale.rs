//! Scale reconciler
//!
//! uvsubScaled.py subtracts the RFI output scaled by (bin width / total RFI
//! on-window width) so both carry the same background per unit time.

use crate::types::{RfiWindows, ScaleFactors};

/// Scale factors for the gate, high-res and finder subtractions
pub fn reconcile(gate_width: f64, high_res_step: f64, finder_step: f64, rfi: &RfiWindows) -> ScaleFactors {
    let rfi_width = rfi.on_width();
    ScaleFactors {
        gate: gate_width / rfi_width,
        bin: high_res_step / rfi_width,
        finder: finder_step / rfi_width,
    }
}
