//! Plot module
//!
//! Coordinate mapping and curve sampling for whatever draws the transfer
//! function.

pub mod axis;
pub mod curve;

pub use axis::{frequency_at_x, x_at_frequency, y_at_db, MAX_FREQ_HZ, MIN_FREQ_HZ, PLOT_HEIGHT};
pub use curve::{sample_curve, sample_response, sample_stage_curve, CurvePoint, Marker, DEFAULT_PLOT_WIDTH};
