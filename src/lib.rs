#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(clippy::all, clippy::cargo, clippy::nursery, missing_docs)]
#![doc = include_str!("../README.md")]

/// Default line parameters and frequency conversions.
pub mod constants;
/// Shared numerical primitives (scalars, complex vectors, principal square root).
pub mod math;
/// Sweep construction and post-processing helpers.
pub mod sweep;
/// Frequency grids and display units.
pub mod frequency;
/// Scalar-or-vector quantities aligned with a frequency grid.
pub mod sampled;
/// Two-port networks and uniform line sections.
pub mod circuits;
/// Transmission line media and the distributed-circuit mode.
pub mod media;
/// Tabulated media exchange.
pub mod io;
/// Error types shared between modules.
pub mod errors;

/// Common exports for downstream crates.
pub mod prelude;
