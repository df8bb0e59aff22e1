#![allow(non_upper_case_globals)]

//! Natural-unit constants.
//!
//! Every quantity in this crate is dimensionless: the reduced Planck constant,
//! the particle mass, and the oscillator angular frequency are all fixed to 1.
//! They are kept as named constants so that the closed forms in
//! [`wavefunction`][crate::wavefunction] read like their textbook versions.

/// reduced Planck constant
pub const hbar: f64 = 1.0;

/// particle mass
pub const m: f64 = 1.0;

/// harmonic oscillator angular frequency
pub const omega: f64 = 1.0;

/// Stationary-state phase angle `E t / ħ` accumulated by a mode of energy `e`
/// after time `t`.
pub fn phase(e: f64, t: f64) -> f64 { e * t / hbar }
