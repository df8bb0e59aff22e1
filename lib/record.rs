//! Persisted parameter sets in `key=value` properties format.
//!
//! A record carries six keys:
//!
//! | key        | value                                    | default             |
//! |------------|------------------------------------------|---------------------|
//! | `system`   | one of the three system names            | `Particle in a Box` |
//! | `n`        | quantum number                           | `1`                 |
//! | `L`        | length scale                             | `10`                |
//! | `weight`   | superposition slider value `w ∈ [0, 1]`  | `0.5`               |
//! | `time`     | simulated time                           | `0`                 |
//! | `showGrid` | `true` or `false`                        | `false`             |
//!
//! Parsing never fails as a whole: a missing key, an unknown system name, or
//! an unparsable number falls back to that key's default. The syntax is that
//! of Java properties files: lines starting with `#` or `!` are comments; `=`,
//! `:`, or plain whitespace separates a key from its value; `\` escapes the
//! next character; and a trailing `\` continues an entry onto the next line.
//!
//! ```
//! use qbloom::{ params::QuantumSystemKind, record::SavedState };
//!
//! let state = SavedState::from_text("system=Quantum Harmonic Oscillator\nn=3\nL=oops\n");
//! assert_eq!(state.system, QuantumSystemKind::HarmonicOscillator);
//! assert_eq!(state.n, 3);
//! assert_eq!(state.l, 10.0);
//! ```

use std::{ fmt, fs, path::Path };
use crate::{
    error::RecordError,
    params::{ QuantumSystemKind, SystemParameters },
};

pub type RecordResult<T> = Result<T, RecordError>;

const KEY_SYSTEM: &str = "system";
const KEY_N: &str = "n";
const KEY_L: &str = "L";
const KEY_WEIGHT: &str = "weight";
const KEY_TIME: &str = "time";
const KEY_SHOW_GRID: &str = "showGrid";

/// A saved parameter set.
///
/// Values are stored as read; range checks happen on conversion to
/// [`SystemParameters`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SavedState {
    pub system: QuantumSystemKind,
    pub n: u32,
    pub l: f64,
    /// The single slider value, not the derived amplitude pair.
    pub weight: f64,
    pub time: f64,
    pub show_grid: bool,
}

impl Default for SavedState {
    fn default() -> Self {
        Self {
            system: QuantumSystemKind::ParticleInBox,
            n: 1,
            l: 10.0,
            weight: 0.5,
            time: 0.0,
            show_grid: false,
        }
    }
}

fn is_blank(c: char) -> bool { matches!(c, ' ' | '\t' | '\x0c') }

// join natural lines into logical ones; a line ending in an odd number of
// backslashes continues onto the next, minus that line's leading whitespace
fn logical_lines(text: &str) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut pending: Option<String> = None;
    for raw in text.lines() {
        let line = raw.trim_start_matches(is_blank);
        let mut logical = match pending.take() {
            Some(head) => head,
            None if line.is_empty()
                || line.starts_with('#')
                || line.starts_with('!') => continue,
            None => String::new(),
        };
        let trailing = line.chars().rev().take_while(|c| *c == '\\').count();
        if trailing % 2 == 1 {
            logical.push_str(&line[..line.len() - 1]);
            pending = Some(logical);
        } else {
            logical.push_str(line);
            lines.push(logical);
        }
    }
    lines.extend(pending);
    lines
}

// split a logical line into key and value; the key ends at the first
// unescaped `=`, `:`, or whitespace, and whitespace may surround one `=`/`:`
fn split_entry(line: &str) -> (String, String) {
    let mut key = String::new();
    let mut chars = line.chars();
    let mut escaped = false;
    let mut separated = false;
    for c in chars.by_ref() {
        if escaped {
            key.push(c);
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == '=' || c == ':' {
            separated = true;
            break;
        } else if is_blank(c) {
            break;
        } else {
            key.push(c);
        }
    }
    let rest: String = chars.collect();
    let mut value = rest.trim_start_matches(is_blank);
    if !separated {
        if let Some(tail) = value.strip_prefix(|c: char| c == '=' || c == ':') {
            value = tail.trim_start_matches(is_blank);
        }
    }
    (key, unescape(value))
}

fn unescape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c != '\\' { out.push(c); continue; }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some(other) => out.push(other),
            None => { },
        }
    }
    out
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if matches!(c, '\\' | '=' | ':' | '#' | '!') { out.push('\\'); }
        out.push(c);
    }
    out
}

fn parse_finite(key: &str, raw: &str, default: f64) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(x) if x.is_finite() => x,
        _ => {
            log::warn!("record: malformed {key} value {raw:?}; using {default}");
            default
        },
    }
}

// quantum numbers may have been written as decimals; truncate toward zero,
// saturating at the bounds of u32
fn parse_quantum_number(raw: &str, default: u32) -> u32 {
    match raw.trim().parse::<f64>() {
        Ok(x) if x.is_finite() => x.trunc() as u32,
        _ => {
            log::warn!("record: malformed {KEY_N} value {raw:?}; using {default}");
            default
        },
    }
}

impl SavedState {
    /// Parse properties-format text, substituting defaults for anything
    /// missing or malformed.
    ///
    /// Unrecognized keys are ignored; when a key appears more than once, the
    /// last occurrence wins.
    pub fn from_text(text: &str) -> Self {
        let mut state = Self::default();
        let default = Self::default();
        for line in logical_lines(text) {
            let (key, value) = split_entry(&line);
            match key.as_str() {
                KEY_SYSTEM => {
                    state.system = value.parse::<QuantumSystemKind>()
                        .unwrap_or_else(|err| {
                            log::warn!(
                                "record: {err}; using {}", default.system);
                            default.system
                        });
                },
                KEY_N => { state.n = parse_quantum_number(&value, default.n); },
                KEY_L => { state.l = parse_finite(KEY_L, &value, default.l); },
                KEY_WEIGHT => {
                    state.weight = parse_finite(KEY_WEIGHT, &value, default.weight);
                },
                KEY_TIME => {
                    state.time = parse_finite(KEY_TIME, &value, default.time);
                },
                KEY_SHOW_GRID => {
                    state.show_grid = value.trim().eq_ignore_ascii_case("true");
                },
                _ => {
                    log::debug!("record: ignoring unrecognized key {key:?}");
                },
            }
        }
        state
    }

    /// Read and parse a record file.
    pub fn load<P>(path: P) -> RecordResult<Self>
    where P: AsRef<Path>
    {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let state = Self::from_text(&text);
        log::debug!("loaded state from {}: {state:?}", path.display());
        Ok(state)
    }

    /// Write `self` to a record file, replacing any existing one.
    pub fn save<P>(&self, path: P) -> RecordResult<()>
    where P: AsRef<Path>
    {
        let path = path.as_ref();
        fs::write(path, self.to_string())?;
        log::debug!("saved state to {}", path.display());
        Ok(())
    }

    /// Capture a parameter snapshot along with the grid display flag.
    pub fn from_parameters(params: &SystemParameters, show_grid: bool) -> Self {
        Self {
            system: params.kind(),
            n: params.quantum_number(),
            l: params.scale(),
            weight: params.weights().slider(),
            time: params.time(),
            show_grid,
        }
    }

    /// Convert to a parameter snapshot, clamping out-of-range values.
    pub fn to_parameters(&self) -> SystemParameters {
        SystemParameters::clamped(
            self.system, self.n, self.l, self.weight, self.time)
    }

    /// Convert to a parameter snapshot, rejecting out-of-range values.
    pub fn try_to_parameters(&self) -> RecordResult<SystemParameters> {
        let params = SystemParameters::new(
            self.system, self.n, self.l, self.weight, self.time)?;
        Ok(params)
    }
}

impl fmt::Display for SavedState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "#Quantum Bloom state")?;
        writeln!(f, "{KEY_SYSTEM}={}", escape(self.system.name()))?;
        writeln!(f, "{KEY_N}={}", self.n)?;
        writeln!(f, "{KEY_L}={}", self.l)?;
        writeln!(f, "{KEY_WEIGHT}={}", self.weight)?;
        writeln!(f, "{KEY_TIME}={}", self.time)?;
        writeln!(f, "{KEY_SHOW_GRID}={}", self.show_grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParamError;

    #[test]
    fn empty_record_is_default() {
        assert_eq!(SavedState::from_text(""), SavedState::default());
        assert_eq!(
            SavedState::from_text("# only a comment\n\n! another\n"),
            SavedState::default(),
        );
    }

    #[test]
    fn defaults_match_documented_values() {
        let state = SavedState::default();
        assert_eq!(state.system, QuantumSystemKind::ParticleInBox);
        assert_eq!(state.n, 1);
        assert_eq!(state.l, 10.0);
        assert_eq!(state.weight, 0.5);
        assert_eq!(state.time, 0.0);
        assert!(!state.show_grid);
    }

    #[test]
    fn round_trip() {
        let state = SavedState {
            system: QuantumSystemKind::Superposition12,
            n: 7,
            l: 13.37,
            weight: 0.123456789,
            time: 42.05000000000001,
            show_grid: true,
        };
        let text = state.to_string();
        assert_eq!(SavedState::from_text(&text), state);

        for system in QuantumSystemKind::ALL {
            let state = SavedState { system, ..SavedState::default() };
            assert_eq!(SavedState::from_text(&state.to_string()), state);
        }
    }

    #[test]
    fn reads_java_style_output() {
        let text = "\
            #Quantum state\n\
            #Sun Oct 19 12:00:00 UTC 2026\n\
            showGrid=true\n\
            system=Superposition (n\\=1,2)\n\
            weight=0.75\n\
            time=3.1500000000000017\n\
            L=12.5\n\
            n=4\n";
        let state = SavedState::from_text(text);
        assert_eq!(state.system, QuantumSystemKind::Superposition12);
        assert_eq!(state.n, 4);
        assert_eq!(state.l, 12.5);
        assert_eq!(state.weight, 0.75);
        assert_eq!(state.time, 3.1500000000000017);
        assert!(state.show_grid);
    }

    #[test]
    fn malformed_fields_fall_back_individually() {
        let text = "system=Hydrogen Atom\nn=three\nL=7.5\nweight=NaN\ntime=-\nshowGrid=yes\n";
        let state = SavedState::from_text(text);
        assert_eq!(state.system, QuantumSystemKind::ParticleInBox);
        assert_eq!(state.n, 1);
        assert_eq!(state.l, 7.5);
        assert_eq!(state.weight, 0.5);
        assert_eq!(state.time, 0.0);
        assert!(!state.show_grid);
    }

    #[test]
    fn separators_and_whitespace() {
        let state = SavedState::from_text("  n : 3.0\nL   =   15\nshowGrid=TRUE\nextra=1\n");
        assert_eq!(state.n, 3);
        assert_eq!(state.l, 15.0);
        assert!(state.show_grid);
    }

    #[test]
    fn whitespace_separates_keys() {
        let state = SavedState::from_text("n 4\nL\t12\nweight  =  0.2\ntime:\t1.5\n");
        assert_eq!(state.n, 4);
        assert_eq!(state.l, 12.0);
        assert_eq!(state.weight, 0.2);
        assert_eq!(state.time, 1.5);
    }

    #[test]
    fn continued_lines_are_joined() {
        let text = "system=Quantum Harmonic \\\n    Oscillator\nn=1\\\n  0\n";
        let state = SavedState::from_text(text);
        assert_eq!(state.system, QuantumSystemKind::HarmonicOscillator);
        assert_eq!(state.n, 10);

        // an escaped backslash does not continue the line
        let state = SavedState::from_text("n=3\\\\\nL=6\n");
        assert_eq!(state.n, 1);
        assert_eq!(state.l, 6.0);

        // comments never continue
        let state = SavedState::from_text("# note \\\nn=5\n");
        assert_eq!(state.n, 5);
    }

    #[test]
    fn decimal_quantum_numbers_truncate() {
        assert_eq!(SavedState::from_text("n=2.9").n, 2);
        assert_eq!(SavedState::from_text("n=-4").n, 0);
    }

    #[test]
    fn parameter_conversion() {
        let state = SavedState {
            system: QuantumSystemKind::HarmonicOscillator,
            n: 12,
            l: 30.0,
            weight: 0.25,
            time: 1.0,
            show_grid: false,
        };
        let params = state.to_parameters();
        assert_eq!(params.quantum_number(), 10);
        assert_eq!(params.scale(), 20.0);
        assert!(matches!(
            state.try_to_parameters(),
            Err(RecordError::Param(ParamError::BadQuantumNumber(12))),
        ));

        let params = SystemParameters::new(
            QuantumSystemKind::Superposition12, 2, 6.5, 0.8, 4.2).unwrap();
        let state = SavedState::from_parameters(&params, true);
        assert_eq!(state.weight, 0.8);
        assert!(state.show_grid);
        assert_eq!(state.try_to_parameters().unwrap(), params);
    }

    #[test]
    fn file_round_trip() {
        let path = std::env::temp_dir()
            .join(format!("qbloom-record-{}.properties", std::process::id()));
        let state = SavedState {
            system: QuantumSystemKind::HarmonicOscillator,
            n: 5,
            l: 8.25,
            weight: 0.3,
            time: 12.6,
            show_grid: true,
        };
        state.save(&path).unwrap();
        let loaded = SavedState::load(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(loaded, state);
        assert!(matches!(SavedState::load(&path), Err(RecordError::Io(_))));
    }
}
