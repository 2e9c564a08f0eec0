//! Plot axis mapping.
//!
//! Logarithmic frequency axis from 20 Hz to 20 kHz across the plot width, and a
//! linear dB axis where 0 dB sits at y = 50 and +/-20 dB span the full height
//! of 100 units (y grows downwards).

/// Frequency at the left edge of the plot.
pub const MIN_FREQ_HZ: f64 = 20.0;
/// Frequency at the right edge of the plot.
pub const MAX_FREQ_HZ: f64 = 20000.0;
/// Height of the plot in y units.
pub const PLOT_HEIGHT: f64 = 100.0;
/// dB value at the top edge of the plot.
pub const DB_RANGE: f64 = 20.0;

/// Ratio between the edge frequencies.
const FREQ_SPAN: f64 = MAX_FREQ_HZ / MIN_FREQ_HZ;

/// Frequency shown at pixel column `x` of a plot `width` pixels wide.
pub fn frequency_at_x(x: f64, width: f64) -> f64 {
    MIN_FREQ_HZ * FREQ_SPAN.powf(x / width)
}

/// Pixel column of frequency `f`. Inverse of [`frequency_at_x`].
pub fn x_at_frequency(f: f64, width: f64) -> f64 {
    width * (f / MIN_FREQ_HZ).ln() / FREQ_SPAN.ln()
}

/// Vertical plot coordinate of a dB value.
pub fn y_at_db(db: f64) -> f64 {
    let mid = PLOT_HEIGHT / 2.0;
    mid - mid * db / DB_RANGE
}
