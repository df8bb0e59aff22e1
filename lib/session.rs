//! Host-side control state.
//!
//! A [`Session`] owns the mutable values a front end edits (the selected
//! system, the three sliders, the grid toggle, and the animation clock) and
//! hands out fresh, immutable [`SystemParameters`] snapshots for evaluation.
//! Slider setters clamp to the same ranges as the interactive controls,
//! logging a warning whenever a value is adjusted.
//!
//! ```
//! use qbloom::session::Session;
//!
//! let mut session = Session::default();
//! session.set_quantum_number(42);
//! assert_eq!(session.quantum_number(), 10);
//! session.play();
//! session.tick();
//! session.tick();
//! assert!((session.snapshot().time() - 0.1).abs() < 1e-12);
//! ```

use crate::{
    params::{
        report_clamp, QuantumSystemKind, SystemParameters, Weights,
        L_MAX, L_MIN, N_MAX, N_MIN,
    },
    record::SavedState,
};

/// Simulated time added per animation frame.
pub const TIME_STEP: f64 = 0.05;

/// Mutable control state for an interactive session.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    system: QuantumSystemKind,
    n: u32,
    l: f64,
    weights: Weights,
    time: f64,
    show_grid: bool,
    playing: bool,
}

impl Default for Session {
    fn default() -> Self { Self::from_saved(&SavedState::default()) }
}

impl Session {
    /// Restore a session from a saved record, clamping out-of-range values.
    ///
    /// The animation clock starts paused.
    pub fn from_saved(state: &SavedState) -> Self {
        let params = state.to_parameters();
        Self {
            system: params.kind(),
            n: params.quantum_number(),
            l: params.scale(),
            weights: params.weights(),
            time: params.time(),
            show_grid: state.show_grid,
            playing: false,
        }
    }

    /// Capture the current state as a saveable record.
    pub fn to_saved(&self) -> SavedState {
        SavedState::from_parameters(&self.snapshot(), self.show_grid)
    }

    /// Return a fresh parameter snapshot of the current state.
    pub fn snapshot(&self) -> SystemParameters {
        SystemParameters::clamped(
            self.system, self.n, self.l, self.weights.slider(), self.time)
    }

    /// Select a system.
    pub fn set_system(&mut self, system: QuantumSystemKind) {
        log::info!("switched to {system}");
        self.system = system;
    }

    /// Set the quantum number, clamped into `[1, 10]`.
    pub fn set_quantum_number(&mut self, n: u32) {
        self.n = report_clamp("quantum number", n, n.clamp(N_MIN, N_MAX));
    }

    /// Set the length scale, clamped into `[5, 20]`. `NaN` is ignored.
    pub fn set_scale(&mut self, l: f64) {
        if !l.is_nan() {
            self.l = report_clamp("length scale", l, l.clamp(L_MIN, L_MAX));
        }
    }

    /// Set the superposition slider, clamped into `[0, 1]`.
    pub fn set_weight(&mut self, w: f64) {
        self.weights = Weights::clamped(w);
        report_clamp("superposition weight", w, self.weights.slider());
    }

    /// Jump to a simulated time, clamped to be non-negative. `NaN` is ignored.
    pub fn set_time(&mut self, t: f64) {
        if !t.is_nan() {
            self.time = report_clamp("simulated time", t, t.max(0.0));
        }
    }

    /// Show or hide grid lines.
    pub fn set_show_grid(&mut self, show: bool) { self.show_grid = show; }

    /// Start advancing time on every [tick][Self::tick].
    pub fn play(&mut self) {
        if !self.playing { log::info!("started animation"); }
        self.playing = true;
    }

    /// Stop advancing time.
    pub fn pause(&mut self) {
        if self.playing { log::info!("paused animation"); }
        self.playing = false;
    }

    /// Flip between playing and paused.
    pub fn toggle(&mut self) {
        if self.playing { self.pause(); } else { self.play(); }
    }

    /// Advance one animation frame, returning the snapshot to render.
    ///
    /// Time only moves while playing.
    pub fn tick(&mut self) -> SystemParameters {
        if self.playing { self.time += TIME_STEP; }
        self.snapshot()
    }

    /// Restore every control to its default and stop the animation.
    ///
    /// The grid toggle is left untouched.
    pub fn reset(&mut self) {
        let show_grid = self.show_grid;
        *self = Self { show_grid, ..Self::default() };
        log::info!("reset all parameters");
    }

    pub fn system(&self) -> QuantumSystemKind { self.system }

    pub fn quantum_number(&self) -> u32 { self.n }

    pub fn scale(&self) -> f64 { self.l }

    pub fn weights(&self) -> Weights { self.weights }

    pub fn time(&self) -> f64 { self.time }

    pub fn show_grid(&self) -> bool { self.show_grid }

    pub fn is_playing(&self) -> bool { self.playing }
}
