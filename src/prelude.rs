//! Convenience re-exports for working with transmission line media.

pub use crate::circuits::{
    transmission::{line_input_impedance, line_twoport},
    twoport::{SParameters, TwoPort},
};
pub use crate::constants::*;
pub use crate::errors::MediaError;
pub use crate::frequency::{Frequency, FrequencyUnit};
pub use crate::io::{read_csv, write_csv, CsvError};
pub use crate::math::{principal_sqrt, CVector, RVector, Scalar, C};
pub use crate::media::{
    DefinedGammaZ0, DistributedCircuit, Media, MediaBase, MediaOptions, Rlgc,
};
pub use crate::sampled::Sampled;
pub use crate::sweep::{linspace, mag_db, phase_deg};
