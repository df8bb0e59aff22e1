//! Closed-form evaluation of three idealized quantum systems and the
//! observables derived from them.
//!
//! Provides:
//! - Stationary states for the particle in a box, the harmonic oscillator,
//!   and a weighted superposition of the two lowest box modes
//!   ([`wavefunction`])
//! - Time evolution into complex amplitudes ([`timedep`])
//! - Six derived observables: energy levels, probability density, a
//!   momentum-space profile, a phase-space point, the position expectation
//!   value, and a position×time density heatmap ([`observe`])
//! - Validated parameter snapshots ([`params`]), a host-side control state with
//!   an animation clock ([`session`]), and a `key=value` save format
//!   ([`record`])
//!
//! Every evaluation is a pure function of an immutable
//! [`SystemParameters`][params::SystemParameters] snapshot, so evaluations may
//! run concurrently without synchronization. Enable the `parallel` feature to
//! compute the heatmap and expectation-value series with rayon.
//!
//! See [`docs`] for theoretical background.

pub mod error;
pub mod hermite;
pub mod units;
pub mod params;
pub mod wavefunction;
pub mod timedep;
pub mod observe;
pub mod record;
pub mod session;
pub mod utils;

pub mod docs;
