//! Media given directly by γ and Z₀ samples.

use std::io::BufRead;

use crate::errors::MediaError;
use crate::frequency::Frequency;
use crate::io::read_csv;
use crate::math::{CVector, C};
use crate::sampled::Sampled;

use super::{Media, MediaBase, MediaOptions};

/// Media whose propagation constant and characteristic impedance are given
/// directly rather than derived from a physical model.
///
/// This is the shape in which tabulated or measured lines enter the crate,
/// and the usual source for [`super::DistributedCircuit::from_media`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct DefinedGammaZ0 {
    base: MediaBase,
    gamma: Sampled<C>,
    z0: Sampled<C>,
}

impl DefinedGammaZ0 {
    /// Creates a media with the given γ and characteristic impedance.
    #[must_use]
    pub fn new(
        frequency: Option<Frequency>,
        gamma: impl Into<Sampled<C>>,
        z0: impl Into<Sampled<C>>,
        options: MediaOptions,
    ) -> Self {
        Self {
            base: MediaBase::new(frequency, options),
            gamma: gamma.into(),
            z0: z0.into(),
        }
    }

    /// Lossless unit-phase media: γ = j, Z₀ = 50 Ω.
    #[must_use]
    pub fn unit(frequency: Option<Frequency>) -> Self {
        Self::new(
            frequency,
            C::new(0.0, 1.0),
            C::new(50.0, 0.0),
            MediaOptions::default(),
        )
    }

    /// Reads a media from a CSV table written by [`crate::io::write_csv`].
    pub fn from_csv<R: BufRead>(reader: R) -> Result<Self, MediaError> {
        read_csv(reader)
    }

    fn npoints(&self) -> Result<usize, MediaError> {
        Ok(self.base.require_frequency()?.npoints())
    }
}

impl Media for DefinedGammaZ0 {
    fn base(&self) -> &MediaBase {
        &self.base
    }

    fn gamma(&self) -> Result<CVector, MediaError> {
        self.gamma.broadcast("gamma", self.npoints()?)
    }

    fn z0_characteristic(&self) -> Result<CVector, MediaError> {
        self.z0.broadcast("z0", self.npoints()?)
    }
}
