//! Theoretical background.
//!
//! # Contents
//! - [Background](#background)
//! - [Particle in a box](#particle-in-a-box)
//! - [Harmonic oscillator](#harmonic-oscillator)
//! - [Time dependence](#time-dependence)
//! - [Derived quantities](#derived-quantities)
//!
//! # Background
//! All three systems handled by this crate have closed-form solutions to the
//! one-dimensional time-independent Schrödinger equation
//! ```text
//!    ħ²  ∂²ψ
//! - --- ---- + V(x) ψ(x) = E ψ(x)
//!   2 m  ∂x²
//! ```
//! so no numerical solving is required: every stationary state is written
//! down directly from its quantum number *n*. Units are chosen such that
//! *ħ* = *m* = *ω* = 1 (see [`units`][crate::units]), leaving a single length
//! scale *L* as a free parameter.
//!
//! # Particle in a box
//! The potential is zero for |*x*| < *L* and infinite elsewhere, so the box
//! has width 2 *L* and is centered on the origin. The eigenstates are
//! ```text
//! ψ[n](x) = √(2 / L) sin(n π (x + L) / 2 L)
//! ```
//! with energies
//! ```text
//!         n² π² ħ²
//! E[n] = ----------
//!          2 m L²
//! ```
//! The shift by *L* moves the textbook box on `[0, L]` to `[-L, L]`. Note that
//! the prefactor is the textbook one for a box of width *L*; over the full
//! width 2 *L* each mode integrates to 2 rather than 1. Densities are therefore
//! twice their normalized values, which only affects the vertical scale of
//! the plots.
//!
//! # Harmonic oscillator
//! For *V*(*x*) = *m* *ω*² *x*² / 2 the eigenstates are Hermite-Gaussians,
//! ```text
//!           H[n](x) exp(-x² / 2)
//! ψ[n](x) = --------------------
//!               √(2ⁿ n! √π)
//! ```
//! with energies *E*[*n*] = *ħ* *ω* (*n* + 1/2). The length scale *L* plays no
//! role here. The physicists' Hermite polynomials are generated by the
//! three-term recurrence
//! ```text
//! H[0](x) = 1
//! H[1](x) = 2 x
//! H[k](x) = 2 x H[k - 1](x) - 2 (k - 1) H[k - 2](x)
//! ```
//! which is stable for the small *n* used here (see
//! [`hermite`][crate::hermite]).
//!
//! # Time dependence
//! A stationary state only acquires a global phase in time. This crate uses
//! the phase factor exp(+*i* *E* *t* / *ħ*), i.e.
//! ```text
//! Re ψ(x, t) = ψ(x) cos(E t / ħ)
//! Im ψ(x, t) = ψ(x) sin(E t / ħ)
//! ```
//! which is the complex conjugate of the conventional exp(-*i* *E* *t* / *ħ*).
//! For a single eigenstate the two conventions give identical probability
//! densities, since cos² + sin² = 1. For the superposition
//! ```text
//! ψ(x, t) = w1 ψ[1](x) exp(i E[1] t / ħ) + w2 ψ[2](x) exp(i E[2] t / ħ)
//! ```
//! the density contains an interference term proportional to
//! cos((*E*[2] - *E*[1]) *t* / *ħ*), which is even in *t* and hence also
//! unchanged; what the sign does affect is the direction in which the complex
//! amplitude (and with it the [phase-plot marker][crate::observe::phase_point])
//! rotates. The weights are derived from a single value *w* ∈ \[0, 1\] as
//! (*w1*, *w2*) = (√*w*, √(1 - *w*)), so that *w1*² + *w2*² = 1.
//!
//! # Derived quantities
//! - **Energy ladder**: *E*[*n*] for *n* = 1, ..., 5.
//! - **Probability density**: |*ψ*(*x*, *t*)|².
//! - **Momentum profile**: a qualitative stand-in rather than a Fourier
//!   transform. The spatial closed form is evaluated at a momentum coordinate
//!   *p*, with a factor (-1)ⁿ for the box and a relative minus sign between the
//!   two superposed box modes.
//! - **Position expectation value**: the Riemann sum
//!   ```text
//!   ⟨x⟩(t) ≈ Σ[i] x[i] |ψ(x[i], t)|² δx
//!   x[i] = (i - 100) L / 100,  i ∊ {0, ..., 200},  δx = L / 100
//!   ```
//!   For the box and the oscillator this vanishes by symmetry; for the
//!   superposition it oscillates at the angular frequency
//!   (*E*[2] - *E*[1]) / *ħ*.
//! - **Phase point**: the complex amplitude at the origin.
//! - **Heatmap**: the density sampled over 50 positions
//!   *x*[*i*] = (*i* - 25) *L* / 25 and 50 times *t*[*j*] = *j* / 2.
