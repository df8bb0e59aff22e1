//! Time dependence of stationary states and their superpositions.
//!
//! Each mode carries a phase factor set by its energy; the complex amplitude
//! is the weighted sum
//! ```text
//! ψ(x, t) = Σ[k] w[k] ψ[k](x) exp(+i E[k] t / ħ)
//! ```
//! with `w = 1` for single-mode states. Note the positive sign of the phase:
//! it leaves every single-mode density unchanged, but fixes the direction in
//! which superposition interference terms and the phase-plot marker move.

use num_complex::Complex64 as C64;
use crate::{
    params::SystemParameters,
    units::phase,
    wavefunction::{ evaluate, ModeContribution },
};

/// Complex amplitude `ψ(x, t)`; the probability density is its
/// [`norm_sqr`][C64::norm_sqr].
pub type ComplexAmplitude = C64;

// contribution of a single mode with weight `w`
fn evolve(w: f64, mode: ModeContribution, t: f64) -> C64 {
    w * mode.psi * C64::cis(phase(mode.e, t))
}

/// Compute the complex amplitude of the state described by `params` at
/// position `x` and time `t`.
///
/// The time stored in `params` is ignored in favor of `t`.
pub fn amplitude_at(params: &SystemParameters, x: f64, t: f64)
    -> ComplexAmplitude
{
    let modes = evaluate(params, x);
    match modes.mode2 {
        None => evolve(1.0, modes.mode1, t),
        Some(mode2) => {
            let weights = params.weights();
            evolve(weights.w1(), modes.mode1, t)
                + evolve(weights.w2(), mode2, t)
        },
    }
}
