//! Validated, immutable input snapshots for a single evaluation.
//!
//! A [`SystemParameters`] holds everything the engine needs: which system is
//! being modeled, the quantum number, the length scale, the superposition
//! weights, and the simulated time. Values are range-checked once, here; the
//! evaluation routines downstream assume they hold.
//!
//! ```
//! use qbloom::params::{ QuantumSystemKind, SystemParameters };
//!
//! let params = SystemParameters::new(
//!     QuantumSystemKind::HarmonicOscillator, 2, 10.0, 0.5, 0.0).unwrap();
//! assert_eq!(params.quantum_number(), 2);
//! assert!(SystemParameters::new(
//!     QuantumSystemKind::ParticleInBox, 0, 10.0, 0.5, 0.0).is_err());
//! ```

use std::{ fmt, str::FromStr };
use crate::error::{ ParamError, UnknownSystem };

/// Smallest allowed quantum number.
pub const N_MIN: u32 = 1;
/// Largest allowed quantum number.
pub const N_MAX: u32 = 10;
/// Smallest allowed length scale.
pub const L_MIN: f64 = 5.0;
/// Largest allowed length scale.
pub const L_MAX: f64 = 20.0;

/// The three model systems.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum QuantumSystemKind {
    /// Infinite square well spanning `[-L, L]`.
    #[default]
    ParticleInBox,
    /// Harmonic oscillator with `ħ = m = ω = 1`.
    HarmonicOscillator,
    /// Weighted mix of the first two particle-in-a-box modes.
    Superposition12,
}

impl QuantumSystemKind {
    /// All kinds, in display order.
    pub const ALL: [Self; 3] = [
        Self::ParticleInBox,
        Self::HarmonicOscillator,
        Self::Superposition12,
    ];

    /// Human-readable name, also used as the persisted `system` value.
    pub fn name(self) -> &'static str {
        match self {
            Self::ParticleInBox => "Particle in a Box",
            Self::HarmonicOscillator => "Quantum Harmonic Oscillator",
            Self::Superposition12 => "Superposition (n=1,2)",
        }
    }

    /// Return `true` if the configured quantum number selects the state.
    pub fn uses_quantum_number(self) -> bool {
        !self.is_superposition()
    }

    /// Return `true` if the superposition weights affect the state.
    pub fn uses_weights(self) -> bool { self.is_superposition() }

    /// Return `true` if `self` is `Superposition12`.
    pub fn is_superposition(self) -> bool {
        matches!(self, Self::Superposition12)
    }
}

impl fmt::Display for QuantumSystemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for QuantumSystemKind {
    type Err = UnknownSystem;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL.into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| UnknownSystem(s.to_string()))
    }
}

/// Normalized pair of superposition amplitudes.
///
/// Only constructible from a single slider value `w ∈ [0, 1]` as
/// ```text
/// (w1, w2) = (√w, √(1 - w))
/// ```
/// so that `w1² + w2² = 1` always holds.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Weights {
    slider: f64,
    w1: f64,
    w2: f64,
}

impl Default for Weights {
    fn default() -> Self { Self::from_unit(0.5) }
}

impl Weights {
    // caller guarantees w ∈ [0, 1]
    fn from_unit(w: f64) -> Self {
        Self { slider: w, w1: w.sqrt(), w2: (1.0 - w).sqrt() }
    }

    /// Derive weights from a slider value, rejecting anything outside
    /// `[0, 1]`.
    pub fn from_slider(w: f64) -> Result<Self, ParamError> {
        ParamError::check_weight(w)?;
        Ok(Self::from_unit(w))
    }

    /// Derive weights from a slider value, clamping it into `[0, 1]` first.
    ///
    /// `NaN` maps to the default slider value `0.5`.
    pub fn clamped(w: f64) -> Self {
        if w.is_nan() { Self::default() } else { Self::from_unit(w.clamp(0.0, 1.0)) }
    }

    /// The slider value these weights were derived from.
    pub fn slider(&self) -> f64 { self.slider }

    /// Amplitude of the `n = 1` mode.
    pub fn w1(&self) -> f64 { self.w1 }

    /// Amplitude of the `n = 2` mode.
    pub fn w2(&self) -> f64 { self.w2 }
}

/// Immutable, validated snapshot of all inputs for one evaluation.
///
/// Construct a fresh value whenever any input changes; nothing in the crate
/// mutates one after construction.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SystemParameters {
    kind: QuantumSystemKind,
    n: u32,
    l: f64,
    weights: Weights,
    t: f64,
}

impl Default for SystemParameters {
    fn default() -> Self {
        Self {
            kind: QuantumSystemKind::default(),
            n: N_MIN,
            l: 10.0,
            weights: Weights::default(),
            t: 0.0,
        }
    }
}

impl SystemParameters {
    /// Build a snapshot from raw values, checking that `n ∈ [1, 10]`,
    /// `l ∈ [5, 20]`, `weight ∈ [0, 1]`, and `t ≥ 0`.
    ///
    /// `weight` is the single slider value from which the superposition
    /// amplitudes are [derived][Weights].
    pub fn new(
        kind: QuantumSystemKind,
        n: u32,
        l: f64,
        weight: f64,
        t: f64,
    ) -> Result<Self, ParamError>
    {
        ParamError::check_quantum_number(n)?;
        ParamError::check_scale(l)?;
        ParamError::check_time(t)?;
        let weights = Weights::from_slider(weight)?;
        Ok(Self { kind, n, l, weights, t })
    }

    /// Build a snapshot from raw values, clamping each into its allowed range
    /// the way the interactive controls do.
    ///
    /// `NaN` inputs, and infinite `l` or `t`, fall back to the defaults
    /// (`l = 10`, `weight = 0.5`, `t = 0`). Every adjustment is logged as a
    /// warning.
    pub fn clamped(
        kind: QuantumSystemKind,
        n: u32,
        l: f64,
        weight: f64,
        t: f64,
    ) -> Self
    {
        let default = Self::default();
        let n = report_clamp("quantum number", n, n.clamp(N_MIN, N_MAX));
        let l = report_clamp(
            "length scale", l, clamp_or(l, L_MIN, L_MAX, default.l));
        let weights = Weights::clamped(weight);
        report_clamp("superposition weight", weight, weights.slider());
        let t = report_clamp(
            "simulated time", t, clamp_or(t, 0.0, f64::INFINITY, default.t));
        Self { kind, n, l, weights, t }
    }

    /// Like [`Self::new`], but produce a copy of `self` at a different
    /// simulated time.
    pub fn at_time(&self, t: f64) -> Result<Self, ParamError> {
        ParamError::check_time(t)?;
        Ok(Self { t, ..*self })
    }

    /// Which system is modeled.
    pub fn kind(&self) -> QuantumSystemKind { self.kind }

    /// Configured quantum number. Ignored by `Superposition12`.
    pub fn quantum_number(&self) -> u32 { self.n }

    /// Length scale `L`; the box spans `[-L, L]`.
    pub fn scale(&self) -> f64 { self.l }

    /// Superposition weights. Only used by `Superposition12`.
    pub fn weights(&self) -> Weights { self.weights }

    /// Simulated time.
    pub fn time(&self) -> f64 { self.t }
}

// log a warning when a raw control value had to be adjusted; returns `used`
pub(crate) fn report_clamp<T>(what: &str, raw: T, used: T) -> T
where T: PartialEq + fmt::Display
{
    if raw != used { log::warn!("{what} {raw} out of range; using {used}"); }
    used
}

// clamp `x` into `[lo, hi]`, substituting `default` for NaN and infinities
fn clamp_or(x: f64, lo: f64, hi: f64, default: f64) -> f64 {
    if x.is_finite() { x.clamp(lo, hi) } else { default }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn weight_normalization() {
        for k in 0..=100 {
            let w = f64::from(k) / 100.0;
            let weights = Weights::from_slider(w).unwrap();
            assert_abs_diff_eq!(
                weights.w1().powi(2) + weights.w2().powi(2), 1.0,
                epsilon = 1e-9,
            );
            assert_eq!(weights.slider(), w);
        }
    }

    #[test]
    fn weights_reject_and_clamp() {
        assert_eq!(Weights::from_slider(1.5), Err(ParamError::BadWeight(1.5)));
        assert_eq!(Weights::clamped(1.5).slider(), 1.0);
        assert_eq!(Weights::clamped(-2.0).slider(), 0.0);
        assert_eq!(Weights::clamped(f64::NAN).slider(), 0.5);
        let half = Weights::default();
        assert_abs_diff_eq!(half.w1(), std::f64::consts::FRAC_1_SQRT_2);
        assert_abs_diff_eq!(half.w2(), std::f64::consts::FRAC_1_SQRT_2);
    }

    #[test]
    fn kind_names_round_trip() {
        for kind in QuantumSystemKind::ALL {
            assert_eq!(kind.to_string().parse::<QuantumSystemKind>(), Ok(kind));
        }
        assert_eq!(
            " Particle in a Box ".parse::<QuantumSystemKind>(),
            Ok(QuantumSystemKind::ParticleInBox),
        );
        assert_eq!(
            "particle in a box".parse::<QuantumSystemKind>(),
            Err(UnknownSystem("particle in a box".into())),
        );
    }

    #[test]
    fn enabled_controls() {
        assert!(QuantumSystemKind::ParticleInBox.uses_quantum_number());
        assert!(!QuantumSystemKind::ParticleInBox.uses_weights());
        assert!(QuantumSystemKind::HarmonicOscillator.uses_quantum_number());
        assert!(!QuantumSystemKind::Superposition12.uses_quantum_number());
        assert!(QuantumSystemKind::Superposition12.uses_weights());
    }

    #[test]
    fn construction_validates() {
        use QuantumSystemKind::*;
        assert!(SystemParameters::new(ParticleInBox, 1, 10.0, 0.5, 0.0).is_ok());
        assert_eq!(
            SystemParameters::new(ParticleInBox, 11, 10.0, 0.5, 0.0),
            Err(ParamError::BadQuantumNumber(11)),
        );
        assert_eq!(
            SystemParameters::new(HarmonicOscillator, 3, 25.0, 0.5, 0.0),
            Err(ParamError::BadScale(25.0)),
        );
        assert_eq!(
            SystemParameters::new(Superposition12, 1, 10.0, 1.2, 0.0),
            Err(ParamError::BadWeight(1.2)),
        );
        assert_eq!(
            SystemParameters::new(Superposition12, 1, 10.0, 0.5, -1.0),
            Err(ParamError::BadTime(-1.0)),
        );
    }

    #[test]
    fn clamped_construction() {
        use QuantumSystemKind::*;
        let p = SystemParameters::clamped(HarmonicOscillator, 0, 2.0, 1.5, -3.0);
        assert_eq!(p.kind(), HarmonicOscillator);
        assert_eq!(p.quantum_number(), 1);
        assert_eq!(p.scale(), 5.0);
        assert_eq!(p.weights().slider(), 1.0);
        assert_eq!(p.time(), 0.0);

        let p = SystemParameters::clamped(ParticleInBox, 40, f64::NAN, 0.2, f64::INFINITY);
        assert_eq!(p.quantum_number(), 10);
        assert_eq!(p.scale(), 10.0);
        assert_eq!(p.weights().slider(), 0.2);
        assert_eq!(p.time(), 0.0);

        let strict = SystemParameters::new(Superposition12, 4, 12.0, 0.3, 1.5);
        let loose = SystemParameters::clamped(Superposition12, 4, 12.0, 0.3, 1.5);
        assert_eq!(strict, Ok(loose));
    }

    #[test]
    fn defaults_and_retiming() {
        let params = SystemParameters::default();
        assert_eq!(params.kind(), QuantumSystemKind::ParticleInBox);
        assert_eq!(params.quantum_number(), 1);
        assert_eq!(params.scale(), 10.0);
        assert_eq!(params.weights().slider(), 0.5);
        assert_eq!(params.time(), 0.0);

        let later = params.at_time(2.5).unwrap();
        assert_eq!(later.time(), 2.5);
        assert_eq!(params.time(), 0.0);
        assert!(params.at_time(-0.1).is_err());
    }
}
