//! The distributed-circuit line mode: a uniform line described by its
//! per-unit-length R′, L′, G′ and C′.
//!
//! Z′ = R′ + jωL′ and Y′ = G′ + jωC′ are formed per sample, with a small
//! imaginary guard added wherever either would be purely real, and γ and Z₀
//! follow on the principal branch. [`DistributedCircuit::from_media`] runs the
//! relations backwards from any other [`Media`].

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;
use nalgebra::DVector;

use crate::constants::{
    DEFAULT_CAPACITANCE, DEFAULT_CONDUCTANCE, DEFAULT_INDUCTANCE, DEFAULT_RESISTANCE,
    DEGENERACY_GUARD,
};
use crate::errors::MediaError;
use crate::frequency::Frequency;
use crate::io::{read_csv, CsvError};
use crate::math::{principal_sqrt, CVector, Scalar, C};
use crate::sampled::Sampled;

use super::{Media, MediaBase, MediaOptions};

/// Distributed RLGC parameters per unit length, each scalar or sampled.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Rlgc {
    /// Series resistance per meter (Ω/m).
    pub r: Sampled<Scalar>,
    /// Series inductance per meter (H/m).
    pub l: Sampled<Scalar>,
    /// Shunt conductance per meter (S/m).
    pub g: Sampled<Scalar>,
    /// Shunt capacitance per meter (F/m).
    pub c: Sampled<Scalar>,
}

impl Rlgc {
    /// Parameters from explicit R′, L′, G′, C′.
    #[must_use]
    pub fn new(
        r: impl Into<Sampled<Scalar>>,
        l: impl Into<Sampled<Scalar>>,
        g: impl Into<Sampled<Scalar>>,
        c: impl Into<Sampled<Scalar>>,
    ) -> Self {
        Self {
            r: r.into(),
            l: l.into(),
            g: g.into(),
            c: c.into(),
        }
    }

    /// Lossless line parameters (R=G=0).
    #[must_use]
    pub fn lossless(l: impl Into<Sampled<Scalar>>, c: impl Into<Sampled<Scalar>>) -> Self {
        Self::new(0.0, l, 0.0, c)
    }
}

impl Default for Rlgc {
    fn default() -> Self {
        Self::new(
            DEFAULT_RESISTANCE,
            DEFAULT_INDUCTANCE,
            DEFAULT_CONDUCTANCE,
            DEFAULT_CAPACITANCE,
        )
    }
}

/// A transmission line mode defined by its distributed impedance and admittance.
///
/// | Quantity | Definition |
/// |---|---|
/// | Z′ ([`Self::series_impedance`]) | R′ + jωL′ |
/// | Y′ ([`Self::shunt_admittance`]) | G′ + jωC′ |
/// | Z₀ ([`Media::z0_characteristic`]) | √(Z′/Y′) |
/// | γ ([`Media::gamma`]) | √(Z′Y′) |
///
/// Square roots take the principal branch, so a positive real part of γ is
/// attenuation and a positive imaginary part is forward propagation.
///
/// The parameter fields are public. Every derived quantity is recomputed from
/// them on access, so a mutation shows up on the next read.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct DistributedCircuit {
    base: MediaBase,
    degeneracy_guard: Scalar,
    /// Distributed resistance R′ (Ω/m).
    pub r: Sampled<Scalar>,
    /// Distributed inductance L′ (H/m).
    pub l: Sampled<Scalar>,
    /// Distributed conductance G′ (S/m).
    pub g: Sampled<Scalar>,
    /// Distributed capacitance C′ (F/m).
    pub c: Sampled<Scalar>,
}

impl DistributedCircuit {
    /// Creates a mode on `frequency`. Parameters are stored as given; shapes
    /// are validated when a derived quantity is first requested.
    #[must_use]
    pub fn new(frequency: Option<Frequency>, rlgc: Rlgc, options: MediaOptions) -> Self {
        let Rlgc { r, l, g, c } = rlgc;
        Self {
            base: MediaBase::new(frequency, options),
            degeneracy_guard: DEGENERACY_GUARD,
            r,
            l,
            g,
            c,
        }
    }

    /// Mode with the default parameters and no port impedance or override.
    #[must_use]
    pub fn with_defaults(frequency: Frequency) -> Self {
        Self::new(Some(frequency), Rlgc::default(), MediaOptions::default())
    }

    /// Recovers R′, L′, G′, C′ from an existing media's γ and Z₀:
    ///
    /// Y = γ/Z₀, Z = γZ₀, G′ = Re Y, C′ = Im Y / ω, R′ = Re Z, L′ = Im Z / ω.
    ///
    /// The port impedance is carried over. A grid containing ω = 0 is
    /// rejected with [`MediaError::DcSample`].
    pub fn from_media<M: Media + ?Sized>(media: &M) -> Result<Self, MediaError> {
        let frequency = media
            .frequency()
            .ok_or(MediaError::MissingFrequency)?
            .clone();
        let w = frequency.w();
        if let Some(index) = w.iter().position(|&w| w == 0.0) {
            return Err(MediaError::DcSample { index });
        }
        let gamma = media.checked("gamma", media.gamma()?)?;
        let z0 = media.checked("z0", media.z0()?)?;
        let n = w.len();
        debug!("recovering distributed parameters from {n} samples");

        let y = gamma.zip_map(&z0, |g, z| g / z);
        let z = gamma.zip_map(&z0, |g, z| g * z);
        let rlgc = Rlgc {
            r: z.map(|z| z.re).into(),
            l: z.zip_map(&w, |z, w| z.im / w).into(),
            g: y.map(|y| y.re).into(),
            c: y.zip_map(&w, |y, w| y.im / w).into(),
        };
        let options = MediaOptions {
            z0_port: media.z0_port().cloned(),
            ..MediaOptions::default()
        };
        Ok(Self::new(Some(frequency), rlgc, options))
    }

    /// Reads a (γ, Z₀) table and applies [`Self::from_media`].
    pub fn from_csv<R: BufRead>(reader: R) -> Result<Self, MediaError> {
        Self::from_media(&read_csv(reader)?)
    }

    /// Opens `path` and applies [`Self::from_csv`].
    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self, MediaError> {
        let file = File::open(path).map_err(CsvError::from)?;
        Self::from_csv(BufReader::new(file))
    }

    /// Replaces the imaginary nudge applied to degenerate Z′/Y′ samples.
    #[must_use]
    pub fn with_degeneracy_guard(mut self, guard: Scalar) -> Self {
        self.degeneracy_guard = guard;
        self
    }

    /// Copy of this mode with new distributed parameters.
    #[must_use]
    pub fn with_rlgc(&self, rlgc: Rlgc) -> Self {
        let Rlgc { r, l, g, c } = rlgc;
        Self {
            base: self.base.clone(),
            degeneracy_guard: self.degeneracy_guard,
            r,
            l,
            g,
            c,
        }
    }

    /// Snapshot of the current distributed parameters.
    #[must_use]
    pub fn rlgc(&self) -> Rlgc {
        Rlgc {
            r: self.r.clone(),
            l: self.l.clone(),
            g: self.g.clone(),
            c: self.c.clone(),
        }
    }

    /// Distributed impedance Z′ = R′ + jωL′ in Ω/m.
    pub fn series_impedance(&self) -> Result<CVector, MediaError> {
        self.distributed(("R'", &self.r), ("L'", &self.l))
    }

    /// Distributed admittance Y′ = G′ + jωC′ in S/m.
    pub fn shunt_admittance(&self) -> Result<CVector, MediaError> {
        self.distributed(("G'", &self.g), ("C'", &self.c))
    }

    /// `real + jω·reactive` per sample; samples with an exactly zero imaginary
    /// part get `+j·degeneracy_guard` so nothing downstream divides by a
    /// purely real quantity.
    fn distributed(
        &self,
        (real_name, real): (&'static str, &Sampled<Scalar>),
        (reactive_name, reactive): (&'static str, &Sampled<Scalar>),
    ) -> Result<CVector, MediaError> {
        let w = self.base.require_frequency()?.w();
        let n = w.len();
        real.check(real_name, n)?;
        reactive.check(reactive_name, n)?;
        Ok(DVector::from_fn(n, |k, _| {
            let mut v = C::new(real.at(k), w[k] * reactive.at(k));
            if v.im == 0.0 {
                v.im += self.degeneracy_guard;
            }
            v
        }))
    }
}

impl Media for DistributedCircuit {
    fn base(&self) -> &MediaBase {
        &self.base
    }

    /// γ = √(Z′Y′).
    fn gamma(&self) -> Result<CVector, MediaError> {
        let z = self.series_impedance()?;
        let y = self.shunt_admittance()?;
        Ok(z.zip_map(&y, |z, y| principal_sqrt(z * y)))
    }

    /// Z₀ = √(Z′/Y′).
    fn z0_characteristic(&self) -> Result<CVector, MediaError> {
        let z = self.series_impedance()?;
        let y = self.shunt_admittance()?;
        Ok(z.zip_map(&y, |z, y| principal_sqrt(z / y)))
    }
}

fn write_param(f: &mut fmt::Formatter<'_>, label: &str, value: &Sampled<Scalar>) -> fmt::Result {
    let marker = if value.is_scalar() { "" } else { ".." };
    match value.first() {
        Some(v) => write!(f, "{label}'= {v:.2e}{marker}"),
        None => write!(f, "{label}'= -{marker}"),
    }
}

impl fmt::Display for DistributedCircuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Distributed Circuit Media.  ")?;
        match self.base.frequency() {
            Some(freq) => write!(
                f,
                "{}-{} {}.  {} points.  ",
                freq.start_scaled(),
                freq.stop_scaled(),
                freq.unit(),
                freq.npoints()
            )?,
            None => f.write_str("no frequency.  ")?,
        }
        write_param(f, "L", &self.l)?;
        f.write_str(", ")?;
        write_param(f, "C", &self.c)?;
        f.write_str(", ")?;
        write_param(f, "R", &self.r)?;
        f.write_str(", ")?;
        write_param(f, "G", &self.g)
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use approx::assert_relative_eq;

    use super::*;
    use crate::frequency::FrequencyUnit;
    use crate::media::tests::captured_warnings;

    const L: Scalar = 280e-9;
    const CAP: Scalar = 90e-12;

    fn ghz(values: &[Scalar]) -> Frequency {
        Frequency::from_f(values.to_vec(), FrequencyUnit::GHz).unwrap()
    }

    fn lossy(frequency: Frequency) -> DistributedCircuit {
        DistributedCircuit::new(
            Some(frequency),
            Rlgc::new(0.5, L, 1e-3, CAP),
            MediaOptions::default(),
        )
    }

    #[test]
    fn lossless_line_has_real_z0_and_imaginary_gamma() {
        let media = DistributedCircuit::with_defaults(ghz(&[1.0, 2.0, 3.0]));
        let w = media.frequency().unwrap().w();
        let z0 = media.z0_characteristic().unwrap();
        let gamma = media.gamma().unwrap();
        for k in 0..3 {
            assert_relative_eq!(z0[k].re, (L / CAP).sqrt(), max_relative = 1e-9);
            assert_relative_eq!(z0[k].re, 55.777, epsilon = 1e-3);
            assert_relative_eq!(z0[k].im, 0.0, epsilon = 1e-9);
            assert_relative_eq!(gamma[k].re, 0.0, epsilon = 1e-9);
            assert_relative_eq!(gamma[k].im, w[k] * (L * CAP).sqrt(), max_relative = 1e-9);
        }
    }

    #[test]
    fn lossy_line_matches_closed_form() {
        let media = lossy(ghz(&[1.0]));
        let w = 2.0 * PI * 1e9;
        let z = media.series_impedance().unwrap()[0];
        let y = media.shunt_admittance().unwrap()[0];
        assert_eq!(z.re, 0.5);
        assert_relative_eq!(z.im, w * L, max_relative = 1e-15);
        assert_eq!(y.re, 1e-3);
        assert_relative_eq!(y.im, w * CAP, max_relative = 1e-15);

        let gamma = media.gamma().unwrap()[0];
        let z0 = media.z0_characteristic().unwrap()[0];
        assert!(gamma.re > 0.0 && gamma.im > 0.0);
        assert!(z0.re > 0.0);
        let gg = gamma * gamma;
        let zy = z * y;
        assert_relative_eq!(gg.re, zy.re, max_relative = 1e-12);
        assert_relative_eq!(gg.im, zy.im, max_relative = 1e-12);
        let zz = z0 * z0;
        let ratio = z / y;
        assert_relative_eq!(zz.re, ratio.re, max_relative = 1e-12);
        assert_relative_eq!(zz.im, ratio.im, max_relative = 1e-12);
    }

    #[test]
    fn dc_samples_are_guarded() {
        let media = DistributedCircuit::with_defaults(ghz(&[0.0, 1.0]));
        let z = media.series_impedance().unwrap();
        let y = media.shunt_admittance().unwrap();
        assert_eq!(z[0], C::new(0.0, 1e-12));
        assert_eq!(y[0], C::new(0.0, 1e-12));
        let gamma = media.gamma().unwrap();
        let z0 = media.z0_characteristic().unwrap();
        assert!(gamma[0].re.is_finite() && gamma[0].im.is_finite());
        assert!(z0[0].re.is_finite() && z0[0].im.is_finite());
        assert_relative_eq!(z0[0].re, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn guard_never_leaves_purely_real_samples() {
        let media = DistributedCircuit::new(
            Some(ghz(&[0.0, 1.0, 2.0])),
            Rlgc::new(5.0, 0.0, 2e-3, vec![0.0, 0.0, CAP]),
            MediaOptions::default(),
        );
        let z = media.series_impedance().unwrap();
        let y = media.shunt_admittance().unwrap();
        assert!(z.iter().chain(y.iter()).all(|v| v.im != 0.0));
        assert_eq!(z[2], C::new(5.0, 1e-12));
        assert_eq!(y[1], C::new(2e-3, 1e-12));
        assert_relative_eq!(y[2].im, 2.0 * PI * 2e9 * CAP, max_relative = 1e-15);
    }

    #[test]
    fn guard_is_tunable() {
        let media = DistributedCircuit::with_defaults(ghz(&[0.0])).with_degeneracy_guard(1e-6);
        assert_eq!(media.series_impedance().unwrap()[0], C::new(0.0, 1e-6));
    }

    #[test]
    fn vector_inductance_is_used_per_sample() {
        let freq = Frequency::new(1.0, 5.0, 5, FrequencyUnit::GHz).unwrap();
        let ls = vec![100e-9, 200e-9, 300e-9, 400e-9, 500e-9];
        let media = DistributedCircuit::new(
            Some(freq.clone()),
            Rlgc::new(0.0, ls.clone(), 0.0, CAP),
            MediaOptions::default(),
        );
        let gamma = media.gamma().unwrap();
        let z0 = media.z0_characteristic().unwrap();
        assert_eq!((gamma.len(), z0.len()), (5, 5));
        let w = freq.w();
        for k in 0..5 {
            assert_relative_eq!(gamma[k].im, w[k] * (ls[k] * CAP).sqrt(), max_relative = 1e-9);
            assert_relative_eq!(z0[k].re, (ls[k] / CAP).sqrt(), max_relative = 1e-9);
        }
    }

    #[test]
    fn mismatched_vector_is_a_shape_error_at_first_use() {
        let media = DistributedCircuit::new(
            Some(Frequency::new(1.0, 5.0, 5, FrequencyUnit::GHz).unwrap()),
            Rlgc::new(0.0, vec![L; 4], 0.0, CAP),
            MediaOptions::default(),
        );
        assert!(media.shunt_admittance().is_ok());
        assert!(matches!(
            media.series_impedance(),
            Err(MediaError::ShapeMismatch { name: "L'", len: 4, expected: 5 })
        ));
        assert!(matches!(media.gamma(), Err(MediaError::ShapeMismatch { .. })));
    }

    #[test]
    fn missing_grid_surfaces_on_derivation() {
        let media = DistributedCircuit::new(None, Rlgc::default(), MediaOptions::default());
        assert!(matches!(media.series_impedance(), Err(MediaError::MissingFrequency)));
        assert!(matches!(media.z0_characteristic(), Err(MediaError::MissingFrequency)));
        assert!(matches!(
            DistributedCircuit::from_media(&media),
            Err(MediaError::MissingFrequency)
        ));
    }

    #[test]
    fn mutation_is_reflected_on_next_read() {
        let mut media = DistributedCircuit::with_defaults(ghz(&[1.0, 2.0]));
        let z0_before = media.z0_characteristic().unwrap();
        let gamma_before = media.gamma().unwrap();
        media.c = Sampled::Scalar(4.0 * CAP);
        let z0_after = media.z0_characteristic().unwrap();
        let gamma_after = media.gamma().unwrap();
        for k in 0..2 {
            assert_relative_eq!(z0_after[k].re, z0_before[k].re / 2.0, max_relative = 1e-12);
            assert_relative_eq!(gamma_after[k].im, gamma_before[k].im * 2.0, max_relative = 1e-12);
        }
        media.r = Sampled::Scalar(1.0);
        assert_eq!(media.series_impedance().unwrap()[0].re, 1.0);
        assert!(media.gamma().unwrap()[0].re > 0.0);
    }

    #[test]
    fn with_rlgc_leaves_original_untouched() {
        let media = DistributedCircuit::with_defaults(ghz(&[1.0]));
        let lossy = media.with_rlgc(Rlgc::new(0.5, L, 1e-3, CAP));
        assert_eq!(media.rlgc(), Rlgc::default());
        assert_eq!(lossy.r, Sampled::Scalar(0.5));
        assert_eq!(lossy.frequency(), media.frequency());
    }

    #[test]
    fn from_media_recovers_parameters() {
        let m1 = lossy(ghz(&[1.0, 2.0]));
        let m2 = DistributedCircuit::from_media(&m1).unwrap();
        for k in 0..2 {
            assert_relative_eq!(m2.r.at(k), 0.5, max_relative = 1e-9);
            assert_relative_eq!(m2.l.at(k), L, max_relative = 1e-9);
            assert_relative_eq!(m2.g.at(k), 1e-3, max_relative = 1e-9);
            assert_relative_eq!(m2.c.at(k), CAP, max_relative = 1e-9);
        }
        assert_eq!(m2.r.sample_count(), Some(2));
    }

    #[test]
    fn from_media_carries_port_impedance() {
        let m1 = DistributedCircuit::new(
            Some(ghz(&[1.0, 2.0])),
            Rlgc::default(),
            MediaOptions::default().z0_port(50.0),
        );
        let m2 = DistributedCircuit::from_media(&m1).unwrap();
        assert_eq!(m2.z0_port(), Some(&Sampled::Scalar(C::new(50.0, 0.0))));
        assert_eq!(m2.z0_override(), None);
    }

    #[test]
    fn from_media_rejects_short_gamma() {
        let media = crate::media::tests::ShortGamma::new();
        assert!(matches!(
            DistributedCircuit::from_media(&media),
            Err(MediaError::ShapeMismatch { name: "gamma", len: 1, expected: 2 })
        ));
    }

    #[test]
    fn from_media_rejects_dc() {
        let m1 = DistributedCircuit::with_defaults(ghz(&[0.0, 1.0]));
        assert!(matches!(
            DistributedCircuit::from_media(&m1),
            Err(MediaError::DcSample { index: 0 })
        ));
    }

    #[test]
    fn deprecated_alias_overrides_z0_once() {
        let mut media = None;
        let warnings = captured_warnings(|| {
            media = Some(DistributedCircuit::new(
                Some(ghz(&[1.0])),
                Rlgc::default(),
                MediaOptions::default().z0(75.0),
            ));
        });
        assert_eq!(warnings.len(), 1);
        let media = media.unwrap();
        assert_eq!(media.z0().unwrap()[0], C::new(75.0, 0.0));
        assert_relative_eq!(media.z0_characteristic().unwrap()[0].re, 55.777, epsilon = 1e-3);
    }

    #[test]
    fn display_scalar_parameters() {
        let media = DistributedCircuit::with_defaults(ghz(&[1.0, 2.0, 3.0]));
        assert_eq!(
            media.to_string(),
            "Distributed Circuit Media.  1-3 GHz.  3 points.  \
             L'= 2.80e-7, C'= 9.00e-11, R'= 0.00e0, G'= 0.00e0"
        );
    }

    #[test]
    fn display_vector_parameters_shows_first_sample() {
        let m2 = DistributedCircuit::from_media(&lossy(ghz(&[1.0, 2.0]))).unwrap();
        let text = m2.to_string();
        assert!(text.starts_with("Distributed Circuit Media.  1-2 GHz.  2 points.  L'= 2.80e-7.., "));
        assert!(text.contains("R'= 5.00e-1.."));
        assert!(text.ends_with("G'= 1.00e-3.."));
    }

    #[test]
    fn display_without_grid() {
        let media = DistributedCircuit::new(None, Rlgc::default(), MediaOptions::default());
        assert!(media.to_string().starts_with("Distributed Circuit Media.  no frequency.  L'= "));
    }
}
