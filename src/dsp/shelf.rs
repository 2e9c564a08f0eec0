//! Low and high shelving stages.
//!
//! Bilinear-transform shelving biquads (RBJ Audio EQ Cookbook). After
//! normalizing by `a0` the coefficients are folded into six terms so that the
//! response at a frequency needs only `cos(w)` and `sin(w)`.

use std::f64::consts::PI;

use super::params::FilterParams;

const MIN_FREQ_RATIO: f64 = 0.0004;
const MAX_FREQ_RATIO: f64 = 0.4700;
const MIN_Q: f64 = 0.25;
const MAX_Q: f64 = 2.0;

/// Which side of the corner frequency the shelf acts on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShelfType {
    /// Boost/cut below the corner.
    Low,
    /// Boost/cut above the corner.
    High,
}

/// Folded shelf coefficients.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShelfCoeffs {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub a1: f64,
    pub b1: f64,
    pub sample_rate: f64,
    pub shelf_type: ShelfType,
}

impl ShelfCoeffs {
    /// Derives the folded coefficients from user parameters.
    ///
    /// `params.q` is the bandwidth, mapped to a biquad Q of
    /// `0.2129 + bandwidth / 2.25` and then limited to `[0.25, 2.0]`.
    pub fn derive(params: &FilterParams, shelf_type: ShelfType) -> Self {
        let freq_ratio = (params.freq_hz / params.sample_rate).clamp(MIN_FREQ_RATIO, MAX_FREQ_RATIO);
        let q = (0.2129 + params.q / 2.25).clamp(MIN_Q, MAX_Q);

        let w0 = 2.0 * PI * freq_ratio;
        let cos_w = w0.cos();
        // sqrt of the linear gain
        let a = 10.0_f64.powf(0.025 * params.gain_db);
        let two_as_alpha = 2.0 * a.sqrt() * (w0.sin() / (2.0 * q));

        let (b0, b1, b2, a0, a1, a2) = match shelf_type {
            ShelfType::High => (
                a * ((a + 1.0) + (a - 1.0) * cos_w + two_as_alpha),
                -2.0 * a * ((a - 1.0) + (a + 1.0) * cos_w),
                a * ((a + 1.0) + (a - 1.0) * cos_w - two_as_alpha),
                (a + 1.0) - (a - 1.0) * cos_w + two_as_alpha,
                2.0 * ((a - 1.0) - (a + 1.0) * cos_w),
                (a + 1.0) - (a - 1.0) * cos_w - two_as_alpha,
            ),
            ShelfType::Low => (
                a * ((a + 1.0) - (a - 1.0) * cos_w + two_as_alpha),
                2.0 * a * ((a - 1.0) - (a + 1.0) * cos_w),
                a * ((a + 1.0) - (a - 1.0) * cos_w - two_as_alpha),
                (a + 1.0) + (a - 1.0) * cos_w + two_as_alpha,
                -2.0 * ((a - 1.0) + (a + 1.0) * cos_w),
                (a + 1.0) + (a - 1.0) * cos_w - two_as_alpha,
            ),
        };

        let nb0 = b0 / a0;
        let nb2 = b2 / a0;
        let na2 = a2 / a0;

        Self {
            a: nb0 + nb2,
            b: nb0 - nb2,
            c: 1.0 + na2,
            d: 1.0 - na2,
            a1: a1 / a0,
            b1: b1 / a0,
            sample_rate: params.sample_rate,
            shelf_type,
        }
    }

    /// Magnitude response in dB at `freq` Hz.
    pub fn evaluate_db(&self, freq: f64) -> f64 {
        let w = 2.0 * PI * freq / self.sample_rate;
        let (s1, c1) = w.sin_cos();

        let num_re = self.a * c1 + self.b1;
        let num_im = self.b * s1;
        let den_re = self.c * c1 + self.a1;
        let den_im = self.d * s1;

        let num = num_re * num_re + num_im * num_im;
        let den = den_re * den_re + den_im * den_im;
        20.0 * ((num * den).sqrt() / den).log10()
    }
}
