//! Scalar-or-vector quantities aligned with a frequency grid.
//!
//! Distributed parameters and port impedances may be given either as a single
//! value, valid at every frequency, or as one value per frequency sample.
//! Nothing is broadcast at construction time; shapes are checked against the
//! grid only when a derived quantity is computed.

use nalgebra::{DVector, Scalar as Element};

use crate::errors::MediaError;
use crate::math::{Scalar, C};

/// A quantity that is either constant over frequency or sampled on the grid.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum Sampled<T: Element> {
    /// Same value at every frequency.
    Scalar(T),
    /// One value per frequency sample.
    Vector(DVector<T>),
}

impl<T: Element + Copy> Sampled<T> {
    /// Number of samples carried, or `None` for a scalar.
    #[must_use]
    pub fn sample_count(&self) -> Option<usize> {
        match self {
            Self::Scalar(_) => None,
            Self::Vector(v) => Some(v.len()),
        }
    }

    /// Whether the quantity is constant over frequency.
    #[must_use]
    pub fn is_scalar(&self) -> bool {
        matches!(self, Self::Scalar(_))
    }

    /// Value at sample `k`. Callers must have validated the shape with [`Self::check`].
    #[must_use]
    pub fn at(&self, k: usize) -> T {
        match self {
            Self::Scalar(v) => *v,
            Self::Vector(v) => v[k],
        }
    }

    /// Representative value: the scalar itself, or the first sample.
    #[must_use]
    pub fn first(&self) -> Option<T> {
        match self {
            Self::Scalar(v) => Some(*v),
            Self::Vector(v) => v.iter().next().copied(),
        }
    }

    /// Verifies that a vector-valued quantity has exactly `expected` samples.
    pub fn check(&self, name: &'static str, expected: usize) -> Result<(), MediaError> {
        match self.sample_count() {
            Some(len) if len != expected => Err(MediaError::ShapeMismatch {
                name,
                len,
                expected,
            }),
            _ => Ok(()),
        }
    }

    /// Expands to one value per sample over a grid of `n` points.
    pub fn broadcast(&self, name: &'static str, n: usize) -> Result<DVector<T>, MediaError> {
        self.check(name, n)?;
        Ok(match self {
            Self::Scalar(v) => DVector::from_element(n, *v),
            Self::Vector(v) => v.clone(),
        })
    }
}

impl<T: Element> From<DVector<T>> for Sampled<T> {
    fn from(value: DVector<T>) -> Self {
        Self::Vector(value)
    }
}

impl From<Scalar> for Sampled<Scalar> {
    fn from(value: Scalar) -> Self {
        Self::Scalar(value)
    }
}

impl From<Vec<Scalar>> for Sampled<Scalar> {
    fn from(value: Vec<Scalar>) -> Self {
        Self::Vector(DVector::from_vec(value))
    }
}

impl From<C> for Sampled<C> {
    fn from(value: C) -> Self {
        Self::Scalar(value)
    }
}

impl From<Scalar> for Sampled<C> {
    fn from(value: Scalar) -> Self {
        Self::Scalar(C::new(value, 0.0))
    }
}

impl From<Vec<C>> for Sampled<C> {
    fn from(value: Vec<C>) -> Self {
        Self::Vector(DVector::from_vec(value))
    }
}
