//! Closed-form stationary states of the three model systems.
//!
//! Each evaluation returns one [`ModeContribution`] (spatial amplitude and
//! energy) per eigenmode present in the state: one for the particle in a box
//! and the harmonic oscillator, two for the `n = 1, 2` superposition.
//!
//! The box is centered on the origin, spanning `[-L, L]`:
//! ```text
//! ψ[n](x) = √(2 / L) sin(n π (x + L) / 2 L)
//! E[n]    = n² π² ħ² / 2 m L²
//! ```
//! and the oscillator states are the usual Hermite-Gaussians:
//! ```text
//! ψ[n](x) = H[n](x) exp(-x² / 2) / √(2ⁿ n! √π)
//! E[n]    = ħ ω (n + 1/2)
//! ```
//! See [`docs`][crate::docs] for more information.

use std::f64::consts::PI;
use crate::{
    hermite::{ factorial, hermite },
    params::{ QuantumSystemKind, SystemParameters },
    units::{ hbar, m, omega },
};

/// Spatial amplitude and energy of a single eigenmode at a single position.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ModeContribution {
    /// Spatial amplitude
    pub psi: f64,
    /// Energy
    pub e: f64,
}

/// The eigenmodes making up a state, evaluated at one position.
///
/// `mode2` is present only for `Superposition12`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Modes {
    pub mode1: ModeContribution,
    pub mode2: Option<ModeContribution>,
}

/// Particle-in-a-box energy of mode `n` for half-width `l`.
pub fn box_energy(n: u32, l: f64) -> f64 {
    let n = f64::from(n);
    n.powi(2) * PI.powi(2) * hbar.powi(2) / (2.0 * m * l.powi(2))
}

/// Particle-in-a-box spatial amplitude of mode `n` for half-width `l`.
///
/// Meaningful for `x ∈ [-l, l]`; no masking is applied outside the box.
pub fn box_psi(n: u32, l: f64, x: f64) -> f64 {
    (2.0 / l).sqrt() * (f64::from(n) * PI * (x + l) / (2.0 * l)).sin()
}

/// Harmonic oscillator energy of mode `n`.
pub fn oscillator_energy(n: u32) -> f64 {
    hbar * omega * (f64::from(n) + 0.5)
}

/// Harmonic oscillator spatial amplitude of mode `n`.
pub fn oscillator_psi(n: u32, x: f64) -> f64 {
    let norm = (2.0_f64.powi(n as i32) * factorial(n) as f64 * PI.sqrt()).sqrt();
    hermite(n, x) * (-x.powi(2) / 2.0).exp() / norm
}

/// Closed-form energy of the `n`-th level for a given kind of system and
/// length scale.
///
/// `Superposition12` shares the box spectrum.
pub fn energy(kind: QuantumSystemKind, n: u32, l: f64) -> f64 {
    match kind {
        QuantumSystemKind::ParticleInBox
            | QuantumSystemKind::Superposition12 => box_energy(n, l),
        QuantumSystemKind::HarmonicOscillator => oscillator_energy(n),
    }
}

fn box_mode(n: u32, l: f64, x: f64) -> ModeContribution {
    ModeContribution { psi: box_psi(n, l, x), e: box_energy(n, l) }
}

fn oscillator_mode(n: u32, x: f64) -> ModeContribution {
    ModeContribution { psi: oscillator_psi(n, x), e: oscillator_energy(n) }
}

/// Evaluate the eigenmodes of the state described by `params` at position
/// `x`.
///
/// `Superposition12` always uses box modes 1 and 2, ignoring the configured
/// quantum number.
pub fn evaluate(params: &SystemParameters, x: f64) -> Modes {
    let n = params.quantum_number();
    let l = params.scale();
    match params.kind() {
        QuantumSystemKind::ParticleInBox => {
            Modes { mode1: box_mode(n, l, x), mode2: None }
        },
        QuantumSystemKind::HarmonicOscillator => {
            Modes { mode1: oscillator_mode(n, x), mode2: None }
        },
        QuantumSystemKind::Superposition12 => {
            Modes {
                mode1: box_mode(1, l, x),
                mode2: Some(box_mode(2, l, x)),
            }
        },
    }
}
