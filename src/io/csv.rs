//! CSV tables of propagation constant and impedances over frequency.
//!
//! One header row, then one row per frequency sample:
//!
//! ```text
//! f[GHz], Re(z0), Im(z0), Re(gamma), Im(gamma), Re(z0_port), Im(z0_port)
//! 1.0000000000000000e0,5.5777335102271663e1,0.0000000000000000e0,...
//! ```

use std::io::{self, BufRead, Write};

use log::debug;

use crate::errors::MediaError;
use crate::frequency::{Frequency, FrequencyUnit, UnknownUnit};
use crate::math::{CVector, Scalar, C};
use crate::media::{DefinedGammaZ0, Media, MediaOptions};

const COLUMNS: usize = 7;

/// Errors raised while reading or writing media tables.
#[derive(Debug, thiserror::Error)]
pub enum CsvError {
    /// Underlying reader or writer failed.
    #[error(transparent)]
    Io(#[from] io::Error),
    /// The input holds no header row.
    #[error("missing header row")]
    MissingHeader,
    /// The header row does not name a frequency unit or has the wrong column count.
    #[error("malformed header `{0}`")]
    BadHeader(String),
    /// The header names an unsupported frequency unit.
    #[error(transparent)]
    UnknownUnit(#[from] UnknownUnit),
    /// A data row does not have exactly seven columns.
    #[error("line {line}: expected 7 columns, found {found}")]
    ColumnCount {
        /// One-based line number.
        line: usize,
        /// Number of columns found.
        found: usize,
    },
    /// A data cell is not a number.
    #[error("line {line}, column {column}: cannot parse `{value}`")]
    BadNumber {
        /// One-based line number.
        line: usize,
        /// Zero-based column index.
        column: usize,
        /// Offending cell.
        value: String,
    },
}

/// Writes `media` as a CSV table: frequency in the grid's display unit, the
/// effective Z₀, γ, and the port impedance of generated networks.
pub fn write_csv<M: Media + ?Sized, W: Write>(media: &M, w: W) -> Result<(), MediaError> {
    let frequency = media.frequency().ok_or(MediaError::MissingFrequency)?;
    let z0 = media.checked("z0", media.z0()?)?;
    let gamma = media.checked("gamma", media.gamma()?)?;
    let port = media.checked("z0_port", media.port_impedance()?)?;
    write_rows(w, frequency, &z0, &gamma, &port).map_err(CsvError::from)?;
    Ok(())
}

fn write_rows<W: Write>(
    mut w: W,
    frequency: &Frequency,
    z0: &CVector,
    gamma: &CVector,
    port: &CVector,
) -> io::Result<()> {
    writeln!(
        w,
        "f[{}], Re(z0), Im(z0), Re(gamma), Im(gamma), Re(z0_port), Im(z0_port)",
        frequency.unit()
    )?;
    for (k, f) in frequency.f_scaled().iter().enumerate() {
        writeln!(
            w,
            "{:.16e},{:.16e},{:.16e},{:.16e},{:.16e},{:.16e},{:.16e}",
            f, z0[k].re, z0[k].im, gamma[k].re, gamma[k].im, port[k].re, port[k].im
        )?;
    }
    w.flush()
}

fn header_unit(header: &str) -> Result<FrequencyUnit, CsvError> {
    let bad = || CsvError::BadHeader(header.trim().to_owned());
    if header.split(',').count() != COLUMNS {
        return Err(bad());
    }
    let first = header.split(',').next().unwrap_or_default();
    let open = first.find('[').ok_or_else(bad)?;
    let close = first.rfind(']').filter(|&c| c > open).ok_or_else(bad)?;
    Ok(first[open + 1..close].parse()?)
}

fn parse_row(line: usize, text: &str) -> Result<[Scalar; COLUMNS], CsvError> {
    let cells: Vec<&str> = text.split(',').map(str::trim).collect();
    if cells.len() != COLUMNS {
        return Err(CsvError::ColumnCount {
            line,
            found: cells.len(),
        });
    }
    let mut row = [0.0; COLUMNS];
    for (column, (slot, cell)) in row.iter_mut().zip(&cells).enumerate() {
        *slot = cell.parse().map_err(|_| CsvError::BadNumber {
            line,
            column,
            value: (*cell).to_owned(),
        })?;
    }
    Ok(row)
}

/// Reads a table written by [`write_csv`] into a [`DefinedGammaZ0`]: the Z₀
/// column becomes its characteristic impedance and the port columns its `z0_port`.
pub fn read_csv<R: BufRead>(reader: R) -> Result<DefinedGammaZ0, MediaError> {
    let mut unit = None;
    let mut f = Vec::new();
    let mut z0 = Vec::new();
    let mut gamma = Vec::new();
    let mut port = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(CsvError::from)?;
        if line.trim().is_empty() {
            continue;
        }
        if unit.is_none() {
            unit = Some(header_unit(&line)?);
            continue;
        }
        let row = parse_row(idx + 1, &line)?;
        f.push(row[0]);
        z0.push(C::new(row[1], row[2]));
        gamma.push(C::new(row[3], row[4]));
        port.push(C::new(row[5], row[6]));
    }

    let unit = unit.ok_or(CsvError::MissingHeader)?;
    debug!("read {} samples from csv", f.len());
    let frequency = Frequency::from_f(f, unit)?;
    Ok(DefinedGammaZ0::new(
        Some(frequency),
        gamma,
        z0,
        MediaOptions::default().z0_port(port),
    ))
}
