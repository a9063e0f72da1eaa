//! Media: anything that can report a propagation constant and a
//! characteristic impedance over a frequency grid.
//!
//! [`MediaBase`] carries what every media shares (the grid, the port
//! impedance used when renormalising generated networks, and the optional
//! characteristic impedance override). Concrete media implement [`Media`] on
//! top of it and inherit line synthesis from the provided methods.

use log::warn;

use crate::circuits::transmission::{line_input_impedance, line_twoport};
use crate::circuits::twoport::{SParameters, TwoPort};
use crate::errors::MediaError;
use crate::frequency::Frequency;
use crate::math::{CVector, Scalar, C};
use crate::sampled::Sampled;

/// Media defined directly by γ and Z₀ samples.
pub mod defined;
/// Transmission line mode defined by distributed R′, L′, G′, C′.
pub mod distributed;

pub use defined::DefinedGammaZ0;
pub use distributed::{DistributedCircuit, Rlgc};

/// Construction options shared by every media.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MediaOptions {
    /// Port impedance of generated networks. `None` keeps the media's own Z₀.
    pub z0_port: Option<Sampled<C>>,
    /// Replaces the computed characteristic impedance.
    pub z0_override: Option<Sampled<C>>,
    /// Legacy spelling of `z0_override`. Logs a deprecation warning and is
    /// ignored when `z0_override` is also set.
    pub z0: Option<Sampled<C>>,
}

impl MediaOptions {
    /// Sets the port impedance.
    #[must_use]
    pub fn z0_port(mut self, z0_port: impl Into<Sampled<C>>) -> Self {
        self.z0_port = Some(z0_port.into());
        self
    }

    /// Sets the characteristic impedance override.
    #[must_use]
    pub fn z0_override(mut self, z0_override: impl Into<Sampled<C>>) -> Self {
        self.z0_override = Some(z0_override.into());
        self
    }

    /// Sets the deprecated override alias.
    #[must_use]
    pub fn z0(mut self, z0: impl Into<Sampled<C>>) -> Self {
        self.z0 = Some(z0.into());
        self
    }
}

/// State shared by all media.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct MediaBase {
    frequency: Option<Frequency>,
    z0_port: Option<Sampled<C>>,
    z0_override: Option<Sampled<C>>,
}

impl MediaBase {
    /// Builds the shared state, folding the deprecated `z0` alias into the override.
    #[must_use]
    pub fn new(frequency: Option<Frequency>, options: MediaOptions) -> Self {
        let MediaOptions {
            z0_port,
            mut z0_override,
            z0,
        } = options;
        if let Some(legacy) = z0 {
            warn!("`z0` is deprecated, use `z0_override` instead");
            if z0_override.is_none() {
                z0_override = Some(legacy);
            }
        }
        Self {
            frequency,
            z0_port,
            z0_override,
        }
    }

    /// Frequency grid, if any.
    #[must_use]
    pub fn frequency(&self) -> Option<&Frequency> {
        self.frequency.as_ref()
    }

    /// Frequency grid, or [`MediaError::MissingFrequency`].
    pub fn require_frequency(&self) -> Result<&Frequency, MediaError> {
        self.frequency.as_ref().ok_or(MediaError::MissingFrequency)
    }

    /// Port impedance of generated networks.
    #[must_use]
    pub fn z0_port(&self) -> Option<&Sampled<C>> {
        self.z0_port.as_ref()
    }

    /// Characteristic impedance override.
    #[must_use]
    pub fn z0_override(&self) -> Option<&Sampled<C>> {
        self.z0_override.as_ref()
    }
}

/// Common interface of transmission line media.
pub trait Media {
    /// Shared media state.
    fn base(&self) -> &MediaBase;

    /// Propagation constant γ(ω), one sample per grid point.
    fn gamma(&self) -> Result<CVector, MediaError>;

    /// Characteristic impedance derived from the media's own parameters.
    fn z0_characteristic(&self) -> Result<CVector, MediaError>;

    /// Frequency grid, if any.
    fn frequency(&self) -> Option<&Frequency> {
        self.base().frequency()
    }

    /// Port impedance of generated networks, as given.
    fn z0_port(&self) -> Option<&Sampled<C>> {
        self.base().z0_port()
    }

    /// Characteristic impedance override, as given.
    fn z0_override(&self) -> Option<&Sampled<C>> {
        self.base().z0_override()
    }

    /// Effective characteristic impedance: the override if set, else [`Media::z0_characteristic`].
    fn z0(&self) -> Result<CVector, MediaError> {
        match self.z0_override() {
            Some(z0) => {
                let n = self.base().require_frequency()?.npoints();
                z0.broadcast("z0_override", n)
            }
            None => self.z0_characteristic(),
        }
    }

    /// Reference impedance of generated networks: `z0_port` if set, else [`Media::z0`].
    fn port_impedance(&self) -> Result<CVector, MediaError> {
        match self.z0_port() {
            Some(z0_port) => {
                let n = self.base().require_frequency()?.npoints();
                z0_port.broadcast("z0_port", n)
            }
            None => self.z0(),
        }
    }

    /// Passes `values` through when it holds one sample per grid point.
    ///
    /// Implementors are free to return vectors of any length; everything that
    /// walks γ or Z₀ sample by sample goes through here first.
    fn checked(&self, name: &'static str, values: CVector) -> Result<CVector, MediaError> {
        let expected = self
            .frequency()
            .ok_or(MediaError::MissingFrequency)?
            .npoints();
        if values.len() == expected {
            Ok(values)
        } else {
            Err(MediaError::ShapeMismatch {
                name,
                len: values.len(),
                expected,
            })
        }
    }

    /// ABCD two-ports of a line section of length `length_m`, one per sample.
    fn line(&self, length_m: Scalar) -> Result<Vec<TwoPort>, MediaError> {
        let gamma = self.checked("gamma", self.gamma()?)?;
        let z0 = self.checked("z0", self.z0()?)?;
        Ok(gamma
            .iter()
            .zip(z0.iter())
            .map(|(&g, &z)| line_twoport(g, z, length_m))
            .collect())
    }

    /// S-parameters of a line section of length `length_m`, referenced to
    /// [`Media::port_impedance`].
    fn line_s(&self, length_m: Scalar) -> Result<Vec<SParameters>, MediaError> {
        let reference = self.checked("z0_port", self.port_impedance()?)?;
        self.line(length_m)?
            .iter()
            .zip(reference.iter())
            .enumerate()
            .map(|(index, (t, &z))| t.to_s(z).ok_or(MediaError::Singular { index }))
            .collect()
    }

    /// Input impedance of a line section of length `length_m` terminated by `z_load`.
    fn input_impedance(&self, length_m: Scalar, z_load: C) -> Result<CVector, MediaError> {
        let gamma = self.checked("gamma", self.gamma()?)?;
        let z0 = self.checked("z0", self.z0()?)?;
        Ok(gamma.zip_map(&z0, |g, z| line_input_impedance(g, z, length_m, z_load)))
    }
}
