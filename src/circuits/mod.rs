//! Two-port primitives for the networks that media synthesise.

/// Two-port network representations and conversions.
pub mod twoport;
/// Uniform line sections and ABCD parameterization.
pub mod transmission;

pub use twoport::{SParameters, TwoPort};
