//! Collection of all error types.
//!
//! All errors derive [`thiserror::Error`], making them composable when allowed
//! and compatible with application code using [`anyhow`][anyhow].
//!
//! None of the evaluation routines in [`wavefunction`][crate::wavefunction],
//! [`timedep`][crate::timedep], or [`observe`][crate::observe] can fail; errors
//! only arise where raw input is turned into a
//! [`SystemParameters`][crate::params::SystemParameters] or where a saved
//! record touches the filesystem.
//!
//! [anyhow]: https://crates.io/crates/anyhow

use thiserror::Error;
use crate::params::{ L_MAX, L_MIN, N_MAX, N_MIN };

/// Returned when a [`SystemParameters`][crate::params::SystemParameters] is
/// built from out-of-range input.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParamError {
    /// Returned when the quantum number is outside `[1, 10]`.
    #[error("quantum number must be in [{}, {}]; got {0}", N_MIN, N_MAX)]
    BadQuantumNumber(u32),

    /// Returned when the length scale is outside `[5, 20]` or not finite.
    #[error("length scale must be in [{}, {}]; got {0}", L_MIN, L_MAX)]
    BadScale(f64),

    /// Returned when a superposition slider weight is outside `[0, 1]`.
    #[error("superposition weight must be in [0, 1]; got {0}")]
    BadWeight(f64),

    /// Returned when the simulated time is negative or not finite.
    #[error("simulated time must be finite and non-negative; got {0}")]
    BadTime(f64),
}

impl ParamError {
    pub(crate) fn check_quantum_number(n: u32) -> Result<(), Self> {
        (N_MIN..=N_MAX).contains(&n).then_some(())
            .ok_or(Self::BadQuantumNumber(n))
    }

    pub(crate) fn check_scale(l: f64) -> Result<(), Self> {
        (L_MIN..=L_MAX).contains(&l).then_some(()).ok_or(Self::BadScale(l))
    }

    pub(crate) fn check_weight(w: f64) -> Result<(), Self> {
        (0.0..=1.0).contains(&w).then_some(()).ok_or(Self::BadWeight(w))
    }

    pub(crate) fn check_time(t: f64) -> Result<(), Self> {
        (t.is_finite() && t >= 0.0).then_some(()).ok_or(Self::BadTime(t))
    }
}

/// Returned when a string does not name one of the three
/// [`QuantumSystemKind`][crate::params::QuantumSystemKind]s.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown quantum system {0:?}")]
pub struct UnknownSystem(pub String);

/// Returned from functions in [`record`][crate::record].
#[derive(Debug, Error)]
pub enum RecordError {
    /// Failure to read or write a record file.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// [`ParamError`]
    #[error("parameter error: {0}")]
    Param(#[from] ParamError),
}
