//! I/O helpers for exchanging tabulated media data.

pub mod csv;

pub use csv::*;
