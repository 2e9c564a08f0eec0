//! Fully parametric band (peak/notch) stage.
//!
//! The band is modelled as a gain-weighted pole/zero pair. The response is the
//! ratio of the perturbed magnitude to the unity baseline, so a 0 dB band is
//! exactly transparent.

use std::f64::consts::PI;

use super::params::FilterParams;

/// Lower bound of the normalized center frequency.
const MIN_FREQ_RATIO: f64 = 0.0002;
/// Upper bound of the normalized center frequency.
const MAX_FREQ_RATIO: f64 = 0.4998;

/// Precomputed coefficients for a band stage.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BandPassCoeffs {
    /// First-order section term.
    pub s1: f64,
    /// Second-order section term.
    pub s2: f64,
    /// Weight of the gain perturbation.
    pub gain_factor: f64,
    /// Sample rate the coefficients were derived for.
    pub sample_rate: f64,
}

impl BandPassCoeffs {
    /// Derives the coefficients from user parameters.
    ///
    /// `params.q` is the bandwidth in octaves. The enable flag is not looked at
    /// here; disabled stages never reach this point.
    pub fn derive(params: &FilterParams) -> Self {
        let freq_ratio = (params.freq_hz / params.sample_rate).clamp(MIN_FREQ_RATIO, MAX_FREQ_RATIO);
        let g = 10.0_f64.powf(0.05 * params.gain_db);
        let b = 7.0 * params.q * freq_ratio / g.sqrt();

        let s2 = (1.0 - b) / (1.0 + b);
        let s1 = -(2.0 * PI * freq_ratio).cos() * (1.0 + s2);
        let gain_factor = 0.5 * (g - 1.0) * (1.0 - s2);

        Self {
            s1,
            s2,
            gain_factor,
            sample_rate: params.sample_rate,
        }
    }

    /// Magnitude response in dB at `freq` Hz.
    pub fn evaluate_db(&self, freq: f64) -> f64 {
        let w = 2.0 * PI * freq / self.sample_rate;
        let (s1, c1) = w.sin_cos();
        let (s2, c2) = (2.0 * w).sin_cos();

        let mut x = c2 + self.s1 * c1 + self.s2;
        let mut y = s2 + self.s1 * s1;
        let t1 = x.hypot(y);

        x += self.gain_factor * (c2 - 1.0);
        y += self.gain_factor * s2;
        let t2 = x.hypot(y);

        20.0 * (t2 / t1).log10()
    }
}
