//! Default line parameters and frequency conversions.
//!
//! The defaults approximate a generic low-loss line whose characteristic
//! impedance sits near 50 Ω (√(280 nH / 90 pF) ≈ 55.8 Ω).

use std::f64::consts::PI;

/// Default distributed capacitance C′ in farads per meter (F/m).
pub const DEFAULT_CAPACITANCE: f64 = 90e-12;
/// Default distributed inductance L′ in henries per meter (H/m).
pub const DEFAULT_INDUCTANCE: f64 = 280e-9;
/// Default distributed resistance R′ in ohms per meter (Ω/m).
pub const DEFAULT_RESISTANCE: f64 = 0.0;
/// Default distributed conductance G′ in siemens per meter (S/m).
pub const DEFAULT_CONDUCTANCE: f64 = 0.0;

/// Imaginary nudge added to any Z′ or Y′ sample whose imaginary part is exactly zero.
///
/// Absolute, never scaled to the parameter magnitudes. Changing it changes
/// every downstream S-parameter bit for bit.
pub const DEGENERACY_GUARD: f64 = 1e-12;

/// Returns the angular frequency corresponding to a linear frequency `hz`.
#[inline]
#[must_use]
pub fn angular_frequency(hz: f64) -> f64 {
    2.0 * PI * hz
}
