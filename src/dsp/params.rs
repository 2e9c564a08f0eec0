//! User-facing filter parameters.
//!
//! A `FilterParams` is rebuilt from the current host values every time one of a
//! stage's controls changes. It is never mutated in place.

/// Raw parameters for one filter stage.
///
/// The meaning of `q` depends on the stage: bandwidth in octaves for the band
/// and shelf stages, resonance for the high-pass and low-pass stages.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FilterParams {
    /// Whether the stage is switched on.
    pub enabled: bool,
    /// Gain in dB (ignored by high-pass and low-pass stages).
    pub gain_db: f64,
    /// Center or corner frequency in Hz.
    pub freq_hz: f64,
    /// Bandwidth or resonance.
    pub q: f64,
    /// Sample rate in Hz.
    pub sample_rate: f64,
}

impl FilterParams {
    /// Creates a new parameter set.
    pub fn new(enabled: bool, gain_db: f64, freq_hz: f64, q: f64, sample_rate: f64) -> Self {
        Self {
            enabled,
            gain_db,
            freq_hz,
            q,
            sample_rate,
        }
    }
}

/// Interprets a host toggle value: on when non-zero and not NaN.
#[inline]
pub fn is_on(value: f64) -> bool {
    value != 0.0 && !value.is_nan()
}
