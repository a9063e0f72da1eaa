//! Shared error types used across submodules.

use thiserror::Error;

use crate::io::CsvError;

/// Top-level error type for the crate.
#[derive(Debug, Error)]
pub enum MediaError {
    /// A derived quantity was requested from a media without a frequency grid.
    #[error("media has no frequency grid")]
    MissingFrequency,
    /// A frequency grid must hold at least one sample.
    #[error("frequency grid must contain at least one sample")]
    EmptyFrequency,
    /// A vector-valued quantity does not line up with the frequency grid.
    #[error("{name} has {len} samples but the frequency grid has {expected}")]
    ShapeMismatch {
        /// Quantity at fault (`L'`, `z0_port`, ...).
        name: &'static str,
        /// Number of samples it carries.
        len: usize,
        /// Number of samples in the grid.
        expected: usize,
    },
    /// L′ and C′ cannot be recovered from a sample at ω = 0.
    #[error("cannot recover distributed parameters at DC (sample {index})")]
    DcSample {
        /// Index of the offending sample.
        index: usize,
    },
    /// A generated two-port has no S-parameter representation at the reference impedance.
    #[error("two-port at sample {index} has no S-parameter representation")]
    Singular {
        /// Index of the offending sample.
        index: usize,
    },
    /// Wraps CSV reading and writing errors.
    #[error(transparent)]
    Csv(#[from] CsvError),
}
