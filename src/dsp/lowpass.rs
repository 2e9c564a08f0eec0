//! Low-pass stage.
//!
//! Approximate response of the resonant low-pass, without its additional shelf.

use std::f64::consts::PI;

use super::params::FilterParams;

const MIN_FREQ_RATIO: f64 = 0.0002;
const MAX_FREQ_RATIO: f64 = 0.4998;
const MAX_FEEDBACK: f64 = 9.0;

/// Low-pass coefficients.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LowPassCoeffs {
    /// Clamped resonance feedback.
    pub fb: f64,
    /// Warped corner, `sin(pi * freq / rate)`.
    pub wc: f64,
    /// Resonance term of the magnitude formula.
    pub q: f64,
    pub sample_rate: f64,
}

impl LowPassCoeffs {
    /// Derives the coefficients from user parameters.
    pub fn derive(params: &FilterParams) -> Self {
        let rate = params.sample_rate;
        // Compared one bound at a time so a non-positive or NaN rate cannot panic.
        let freq = if params.freq_hz < rate * MIN_FREQ_RATIO {
            rate * MIN_FREQ_RATIO
        } else if params.freq_hz > rate * MAX_FREQ_RATIO {
            rate * MAX_FREQ_RATIO
        } else {
            params.freq_hz
        };

        let fb = (3.0 * params.q.powf(3.20772)).clamp(0.0, MAX_FEEDBACK);
        let wc = (PI * freq / rate).sin();
        let q = (4.0 * fb / (1.0 + fb)).sqrt();

        Self {
            fb,
            wc,
            q,
            sample_rate: rate,
        }
    }

    /// Magnitude response in dB at `freq` Hz.
    pub fn evaluate_db(&self, freq: f64) -> f64 {
        let w = (PI * freq / self.sample_rate).sin();
        let x = w / self.wc;
        let x2 = x * x;
        -10.0 * ((1.0 + x2) * (1.0 + x2) - (self.q * x) * (self.q * x)).log10()
    }
}
