//! Shared numerical primitives anchored on `nalgebra` and `num-complex`.

use nalgebra::DVector;

/// Primary scalar type used across the crate.
pub type Scalar = f64;
/// Primary complex scalar type used for phasors, impedances and propagation constants.
pub type C = num_complex::Complex<Scalar>;
/// Complex samples over a frequency grid.
pub type CVector = DVector<C>;
/// Real samples over a frequency grid.
pub type RVector = DVector<Scalar>;

/// Principal square root: non-negative real part, and non-negative imaginary
/// part when the real part is zero.
///
/// `Complex::sqrt` already returns a non-negative real part; the only case it
/// leaves open is a negative real input carrying a `-0.0` imaginary part,
/// which would otherwise land on `-j√|z|`.
#[must_use]
pub fn principal_sqrt(z: C) -> C {
    let root = z.sqrt();
    if root.re == 0.0 && root.im < 0.0 {
        C::new(0.0, -root.im)
    } else {
        root
    }
}
