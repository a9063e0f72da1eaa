//! Uniform transmission line sections and ABCD parameterization.
//!
//! A section is fully described by its propagation constant γ, characteristic
//! impedance Zc and physical length; any media can produce these per sample.

use crate::math::{Scalar, C};

use super::twoport::TwoPort;

/// Returns the ABCD two-port of a uniform section of length `length_m`.
#[must_use]
pub fn line_twoport(gamma: C, zc: C, length_m: Scalar) -> TwoPort {
    // ABCD = [[cosh(γl), Zc*sinh(γl)],[sinh(γl)/Zc, cosh(γl)]]
    let gl = gamma * length_m;
    let a = gl.cosh();
    let s = gl.sinh();
    TwoPort::from_abcd(a, zc * s, s / zc, a)
}

/// Input impedance of a section terminated by `z_load`.
#[must_use]
pub fn line_input_impedance(gamma: C, zc: C, length_m: Scalar, z_load: C) -> C {
    let t = (gamma * length_m).tanh();
    (zc * (z_load + zc * t)) / (zc + z_load * t)
}
