//! Two-port network representations and parameter conversions.

use crate::math::C;

/// ABCD-based two-port network.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TwoPort {
    /// A element of the ABCD matrix.
    pub a: C,
    /// B element of the ABCD matrix.
    pub b: C,
    /// C element of the ABCD matrix.
    pub c: C,
    /// D element of the ABCD matrix.
    pub d: C,
}

impl TwoPort {
    /// Constructs a two-port from explicit ABCD elements.
    #[must_use]
    pub fn from_abcd(a: C, b: C, c: C, d: C) -> Self {
        Self { a, b, c, d }
    }

    /// ABCD determinant `ad - bc`.
    #[must_use]
    pub fn determinant(&self) -> C {
        self.a * self.d - self.b * self.c
    }

    /// Converts to S-parameters referenced to the same (possibly complex)
    /// impedance `z0` on both ports, using pseudo-wave normalization.
    /// Returns `None` if the denominator is zero.
    #[must_use]
    pub fn to_s(&self, z0: C) -> Option<SParameters> {
        if z0.norm() == 0.0 {
            return None;
        }
        let inv_z0 = C::new(1.0, 0.0) / z0;
        let den = self.a + self.b * inv_z0 + self.c * z0 + self.d;
        if den.norm() == 0.0 {
            return None;
        }
        let num11 = self.a + self.b * inv_z0 - self.c * z0 - self.d;
        let num22 = -self.a + self.b * inv_z0 - self.c * z0 + self.d;
        let s11 = num11 / den;
        let s21 = C::new(2.0, 0.0) / den;
        let s22 = num22 / den;
        let s12 = C::new(2.0, 0.0) * self.determinant() / den;
        Some(SParameters { s11, s12, s21, s22 })
    }
}

/// Scattering parameters under a single reference impedance.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SParameters {
    /// Reflection at port 1.
    pub s11: C,
    /// Reverse transmission.
    pub s12: C,
    /// Forward transmission.
    pub s21: C,
    /// Reflection at port 2.
    pub s22: C,
}
