//! Curve sampling for the renderer.
//!
//! One point per integer pixel column. The renderer owns everything else
//! (grid, colors, clipping, fill).

use serde::{Deserialize, Serialize};

use super::axis::{frequency_at_x, x_at_frequency, y_at_db};
use crate::dsp::StageCoefficients;
use crate::engine::state::{EqualizerState, Slot};

/// Default width of the transfer-function plot in pixels.
pub const DEFAULT_PLOT_WIDTH: usize = 119;

/// A sampled point in plot coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    /// Pixel column in `[0, width)`.
    pub x: usize,
    /// Vertical plot coordinate. May be non-finite or outside the plot.
    pub y: f64,
}

/// A draggable handle at a stage's (frequency, gain).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Marker {
    pub slot: Slot,
    pub x: f64,
    pub y: f64,
}

impl Marker {
    /// Places a marker, snapping x to the nearest pixel column.
    pub fn new(slot: Slot, freq: f64, gain_db: f64, width: usize) -> Self {
        Self {
            slot,
            x: x_at_frequency(freq, width as f64).round(),
            y: y_at_db(gain_db),
        }
    }
}

fn sample_with<F>(width: usize, response: F) -> Vec<CurvePoint>
where
    F: Fn(f64) -> f64,
{
    (0..width)
        .map(|x| CurvePoint {
            x,
            y: y_at_db(response(frequency_at_x(x as f64, width as f64))),
        })
        .collect()
}

/// Samples the combined response of all stages.
pub fn sample_curve(stages: &EqualizerState, width: usize) -> Vec<CurvePoint> {
    sample_with(width, |f| stages.combined_response_db(f))
}

/// Samples the response of a single stage.
pub fn sample_stage_curve(stage: &StageCoefficients, width: usize) -> Vec<CurvePoint> {
    sample_with(width, |f| stage.evaluate_db(f))
}

/// Samples the combined response as `(frequency, dB)` pairs.
pub fn sample_response(stages: &EqualizerState, width: usize) -> Vec<(f64, f64)> {
    (0..width)
        .map(|x| {
            let f = frequency_at_x(x as f64, width as f64);
            (f, stages.combined_response_db(f))
        })
        .collect()
}
