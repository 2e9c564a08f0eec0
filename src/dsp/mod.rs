//! DSP module
//!
//! Per-stage filter models: coefficient derivation from user parameters and
//! magnitude response evaluation.

pub mod bandpass;
pub mod highpass;
pub mod lowpass;
pub mod parameter;
pub mod params;
pub mod shelf;
pub mod stage;

pub use bandpass::BandPassCoeffs;
pub use highpass::HighPassCoeffs;
pub use lowpass::LowPassCoeffs;
pub use parameter::{ParameterDefinition, ParameterDisplay, PARAMETERS};
pub use params::{is_on, FilterParams};
pub use shelf::{ShelfCoeffs, ShelfType};
pub use stage::{StageCoefficients, StageKind};
