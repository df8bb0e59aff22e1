//! Derived observables.
//!
//! Everything here is a pure reduction over
//! [`wavefunction::evaluate`][crate::wavefunction::evaluate] and
//! [`timedep::amplitude_at`][crate::timedep::amplitude_at]; no function
//! mutates its [`SystemParameters`] and all are safe to call concurrently.
//!
//! In all 2D arrays, the first (or zero-th) axis indexes position and the
//! second indexes time.
//!
//! ```
//! use qbloom::{ observe, params::SystemParameters };
//!
//! let params = SystemParameters::default();
//! let rho = observe::probability_density(&params, 0.0, 0.0);
//! assert!((rho - 0.2).abs() < 1e-12);
//! assert_eq!(observe::probability_heatmap(&params).dim(), (50, 50));
//! ```

use ndarray as nd;
use crate::{
    params::{ QuantumSystemKind, SystemParameters },
    timedep::{ amplitude_at, ComplexAmplitude },
    utils::{ centered_grid, riemann, stepped_grid },
    wavefunction::{ box_psi, energy, oscillator_psi },
};

/// Number of ranks shown by [`energy_ladder`].
pub const LADDER_RANKS: u32 = 5;

/// Half the number of intervals in the position grid; the grid has
/// `2 * POSITION_HALF + 1` points spanning `[-L, L]`.
pub const POSITION_HALF: usize = 100;

/// Number of points in the momentum and expectation-value series.
pub const SERIES_POINTS: usize = 201;

/// Spacing of the momentum grid used by [`momentum_series`].
pub const MOMENTUM_STEP: f64 = 0.1;

/// Spacing of the time grid used by [`expectation_series`].
pub const EXPECTATION_TIME_STEP: f64 = 0.1;

/// Side length of the square [heatmap][probability_heatmap] grid.
pub const HEATMAP_SIZE: usize = 50;

/// Spacing of the heatmap time axis.
pub const HEATMAP_TIME_STEP: f64 = 0.5;

/// Closed-form energy of level `n` for the system described by `params`.
///
/// Independent of the configured quantum number; particle-in-a-box and
/// superposition states share the box spectrum.
pub fn energy_level(params: &SystemParameters, n: u32) -> f64 {
    energy(params.kind(), n, params.scale())
}

/// A single rung of the [energy ladder][energy_ladder].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Level {
    /// Quantum number of the level.
    pub rank: u32,
    /// Energy
    pub e: f64,
    /// Whether the level is occupied by the current state.
    pub occupied: bool,
}

/// Return the lowest [`LADDER_RANKS`] energy levels, marking those occupied
/// by the current state: levels 1 and 2 for the superposition, level `n`
/// otherwise.
pub fn energy_ladder(params: &SystemParameters) -> Vec<Level> {
    let n = params.quantum_number();
    (1..=LADDER_RANKS)
        .map(|rank| {
            let occupied = match params.kind() {
                QuantumSystemKind::Superposition12 => rank <= 2,
                _ => rank == n,
            };
            Level { rank, e: energy_level(params, rank), occupied }
        })
        .collect()
}

/// Probability density `|ψ(x, t)|²`.
pub fn probability_density(params: &SystemParameters, x: f64, t: f64) -> f64 {
    amplitude_at(params, x, t).norm_sqr()
}

/// Simplified momentum-space profile at momentum coordinate `p`.
///
/// This is not a Fourier transform of the spatial state. It reuses the
/// spatial closed forms at `p` with a parity adjustment:
/// ```text
/// box:           (-1)ⁿ ψ[n](p)
/// oscillator:    ψ[n](p)
/// superposition: w1 ψ[1](p) - w2 ψ[2](p)
/// ```
pub fn momentum_profile(params: &SystemParameters, p: f64) -> f64 {
    let n = params.quantum_number();
    let l = params.scale();
    match params.kind() {
        QuantumSystemKind::ParticleInBox => {
            let parity = if n % 2 == 0 { 1.0 } else { -1.0 };
            parity * box_psi(n, l, p)
        },
        QuantumSystemKind::HarmonicOscillator => oscillator_psi(n, p),
        QuantumSystemKind::Superposition12 => {
            let weights = params.weights();
            weights.w1() * box_psi(1, l, p) - weights.w2() * box_psi(2, l, p)
        },
    }
}

/// Riemann-sum estimate of `⟨x⟩` at time `t` over the
/// [position grid][position_grid].
pub fn expectation_position(params: &SystemParameters, t: f64) -> f64 {
    let x = position_grid(params);
    let dx = 2.0 * params.scale() / (2 * POSITION_HALF) as f64;
    let integrand = x.mapv(|xk| xk * probability_density(params, xk, t));
    riemann(&integrand, dx)
}

/// Complex amplitude at the origin, used as a single-point phase-space marker.
pub fn phase_point(params: &SystemParameters, t: f64) -> ComplexAmplitude {
    amplitude_at(params, 0.0, t)
}

/// Probability densities over a [`HEATMAP_SIZE`]×[`HEATMAP_SIZE`] grid with
/// ```text
/// x[i] = (i - 25) L / 25
/// t[j] = j / 2
/// ```
/// so that `heatmap[[i, j]]` is the density at `(x[i], t[j])`.
///
/// The time axis is fixed, so this only needs recomputing when parameters
/// change.
pub fn probability_heatmap(params: &SystemParameters) -> nd::Array2<f64> {
    log::debug!(
        "computing {size}x{size} probability heatmap for {}",
        params.kind(),
        size = HEATMAP_SIZE,
    );
    let x = centered_grid(HEATMAP_SIZE, HEATMAP_SIZE / 2, params.scale());
    let t = stepped_grid(HEATMAP_SIZE, 0, HEATMAP_TIME_STEP);
    let mut heatmap: nd::Array2<f64>
        = nd::Array2::zeros((HEATMAP_SIZE, HEATMAP_SIZE));
    let cell = |(i, j): (usize, usize), rho: &mut f64| {
        *rho = probability_density(params, x[i], t[j]);
    };
    #[cfg(feature = "parallel")]
    nd::Zip::indexed(&mut heatmap).par_for_each(cell);
    #[cfg(not(feature = "parallel"))]
    nd::Zip::indexed(&mut heatmap).for_each(cell);
    heatmap
}

/// Position grid `x[i] = (i - 100) L / 100`, `i = 0..=200`, shared by the
/// wavefunction plot and the expectation value.
pub fn position_grid(params: &SystemParameters) -> nd::Array1<f64> {
    centered_grid(2 * POSITION_HALF + 1, POSITION_HALF, params.scale())
}

/// Wavefunction sampled over the [position grid][position_grid] at a single
/// time.
#[derive(Clone, Debug)]
pub struct WavefunctionSamples {
    /// Positions
    pub x: nd::Array1<f64>,
    /// Real part of the amplitude
    pub re: nd::Array1<f64>,
    /// Imaginary part of the amplitude
    pub im: nd::Array1<f64>,
    /// Probability density
    pub prob: nd::Array1<f64>,
}

/// Sample the complex amplitude and probability density over the
/// [position grid][position_grid] at time `t`.
pub fn sample_wavefunction(params: &SystemParameters, t: f64)
    -> WavefunctionSamples
{
    let x = position_grid(params);
    let psi: nd::Array1<ComplexAmplitude>
        = x.mapv(|xk| amplitude_at(params, xk, t));
    WavefunctionSamples {
        re: psi.mapv(|a| a.re),
        im: psi.mapv(|a| a.im),
        prob: psi.mapv(|a| a.norm_sqr()),
        x,
    }
}

/// Magnitude `|ψ(x, t)|` at a draggable marker position, with `x` clamped into
/// the box `[-L, L]`.
pub fn marker_amplitude(params: &SystemParameters, x: f64, t: f64) -> f64 {
    let l = params.scale();
    probability_density(params, x.clamp(-l, l), t).sqrt()
}

/// Sample the [momentum profile][momentum_profile] at
/// `p[i] = (i - 100) / 10`, `i = 0..=200`.
///
/// Returns `(p, profile)`.
pub fn momentum_series(params: &SystemParameters)
    -> (nd::Array1<f64>, nd::Array1<f64>)
{
    let p = stepped_grid(SERIES_POINTS, SERIES_POINTS / 2, MOMENTUM_STEP);
    let phi = p.mapv(|pk| momentum_profile(params, pk));
    (p, phi)
}

/// Sample the [position expectation value][expectation_position] at
/// `t[i] = i / 10`, `i = 0..=200`.
///
/// Returns `(t, ⟨x⟩)`.
pub fn expectation_series(params: &SystemParameters)
    -> (nd::Array1<f64>, nd::Array1<f64>)
{
    let t = stepped_grid(SERIES_POINTS, 0, EXPECTATION_TIME_STEP);
    #[cfg(feature = "parallel")]
    let xexp = nd::Zip::from(&t)
        .par_map_collect(|&tk| expectation_position(params, tk));
    #[cfg(not(feature = "parallel"))]
    let xexp = t.mapv(|tk| expectation_position(params, tk));
    (t, xexp)
}
