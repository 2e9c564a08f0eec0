//! High-pass stage.
//!
//! The response is an analog-style approximation with a reshaped resonance,
//! not the exact magnitude of the processing filter.

use super::params::FilterParams;

/// Lowest frequency the response is evaluated at.
const MIN_EVAL_FREQ: f64 = 5.0;

/// High-pass coefficients. Only the raw corner and resonance are kept; all the
/// work happens per query frequency.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HighPassCoeffs {
    pub freq: f64,
    pub q: f64,
    pub sample_rate: f64,
}

impl HighPassCoeffs {
    /// Stores the corner frequency and resonance unclamped.
    pub fn derive(params: &FilterParams) -> Self {
        Self {
            freq: params.freq_hz,
            q: params.q,
            sample_rate: params.sample_rate,
        }
    }

    /// Effective resonance after reshaping the user Q.
    ///
    /// The `r - 1.09` division only runs once `r >= 1.3`, so the pole at
    /// `r = 1.09` (user Q near 1.1018) falls in the other branch and is never hit.
    pub fn effective_q(&self) -> f64 {
        let r = 0.7 + 0.78 * (1.82 * (self.q - 0.8)).tanh();
        if r < 1.3 {
            3.01 * (r / (r + 2.0)).sqrt()
        } else {
            (4.0 - 0.09 / (r - 1.09)).sqrt()
        }
    }

    /// Magnitude response in dB at `freq` Hz.
    ///
    /// The query frequency is limited to `[5, sample_rate / 12]`.
    pub fn evaluate_db(&self, freq: f64) -> f64 {
        let f = if freq < MIN_EVAL_FREQ {
            MIN_EVAL_FREQ
        } else if freq > self.sample_rate / 12.0 {
            self.sample_rate / 12.0
        } else {
            freq
        };

        let wr = self.freq / f;
        let q = self.effective_q();
        let wr2 = wr * wr;
        -10.0 * ((1.0 + wr2) * (1.0 + wr2) - (q * wr) * (q * wr)).log10()
    }
}
