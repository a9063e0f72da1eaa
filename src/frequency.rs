//! Frequency grids shared by media.

use std::fmt;
use std::str::FromStr;

use nalgebra::DVector;

use crate::constants::angular_frequency;
use crate::errors::MediaError;
use crate::math::{RVector, Scalar};
use crate::sweep::linspace;

/// Display unit of a frequency grid.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FrequencyUnit {
    /// Hertz.
    Hz,
    /// Kilohertz.
    KHz,
    /// Megahertz.
    MHz,
    /// Gigahertz.
    #[default]
    GHz,
    /// Terahertz.
    THz,
}

impl FrequencyUnit {
    /// Hertz per unit.
    #[must_use]
    pub const fn multiplier(self) -> Scalar {
        match self {
            Self::Hz => 1.0,
            Self::KHz => 1.0e3,
            Self::MHz => 1.0e6,
            Self::GHz => 1.0e9,
            Self::THz => 1.0e12,
        }
    }

    /// Canonical spelling (`Hz`, `kHz`, `MHz`, `GHz`, `THz`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hz => "Hz",
            Self::KHz => "kHz",
            Self::MHz => "MHz",
            Self::GHz => "GHz",
            Self::THz => "THz",
        }
    }
}

impl fmt::Display for FrequencyUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when a unit string is not one of the supported spellings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown frequency unit `{0}`")]
pub struct UnknownUnit(pub String);

impl FromStr for FrequencyUnit {
    type Err = UnknownUnit;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hz" => Ok(Self::Hz),
            "khz" => Ok(Self::KHz),
            "mhz" => Ok(Self::MHz),
            "ghz" => Ok(Self::GHz),
            "thz" => Ok(Self::THz),
            _ => Err(UnknownUnit(s.trim().to_owned())),
        }
    }
}

/// Frequency axis of a media: N ≥ 1 samples stored in hertz, plus a display unit.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Frequency {
    f: RVector,
    unit: FrequencyUnit,
}

impl Frequency {
    /// `npoints` linearly spaced samples from `start` to `stop`, both expressed in `unit`.
    pub fn new(
        start: Scalar,
        stop: Scalar,
        npoints: usize,
        unit: FrequencyUnit,
    ) -> Result<Self, MediaError> {
        Self::from_f(linspace(start, stop, npoints), unit)
    }

    /// Explicit samples expressed in `unit`.
    pub fn from_f(values: impl Into<Vec<Scalar>>, unit: FrequencyUnit) -> Result<Self, MediaError> {
        let values = values.into();
        if values.is_empty() {
            return Err(MediaError::EmptyFrequency);
        }
        let scale = unit.multiplier();
        let f = DVector::from_iterator(values.len(), values.into_iter().map(|v| v * scale));
        Ok(Self { f, unit })
    }

    /// Frequency samples in hertz.
    #[must_use]
    pub fn f(&self) -> &RVector {
        &self.f
    }

    /// Angular frequency samples ω = 2πf in rad/s.
    #[must_use]
    pub fn w(&self) -> RVector {
        self.f.map(angular_frequency)
    }

    /// Frequency samples expressed in the display unit.
    #[must_use]
    pub fn f_scaled(&self) -> RVector {
        let scale = self.unit.multiplier();
        self.f.map(|v| v / scale)
    }

    /// Display unit.
    #[must_use]
    pub fn unit(&self) -> FrequencyUnit {
        self.unit
    }

    /// Number of samples.
    #[must_use]
    pub fn npoints(&self) -> usize {
        self.f.len()
    }

    /// First sample in the display unit.
    #[must_use]
    pub fn start_scaled(&self) -> Scalar {
        self.f[0] / self.unit.multiplier()
    }

    /// Last sample in the display unit.
    #[must_use]
    pub fn stop_scaled(&self) -> Scalar {
        self.f[self.f.len() - 1] / self.unit.multiplier()
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{} {}, {} pts",
            self.start_scaled(),
            self.stop_scaled(),
            self.unit,
            self.npoints()
        )
    }
}
