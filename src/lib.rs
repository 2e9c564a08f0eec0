//! EQ Response Library
//!
//! Analytic magnitude response of an eight-stage parametric equalizer: four
//! parametric bands, low and high shelves, a high-pass and a low-pass.
//! Nothing here processes audio; the crate answers "what will this EQ do to
//! the signal" for drawing and control surfaces.

pub mod dsp;
pub mod engine;
pub mod persistence;
pub mod plot;
