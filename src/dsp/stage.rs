//! Filter stage dispatch.
//!
//! A stage is one of a closed set of filter kinds. Coefficients are derived once
//! per parameter change and evaluated at any number of frequencies.

use super::bandpass::BandPassCoeffs;
use super::highpass::HighPassCoeffs;
use super::lowpass::LowPassCoeffs;
use super::params::FilterParams;
use super::shelf::{ShelfCoeffs, ShelfType};

/// The filter kinds an equalizer stage can take.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StageKind {
    BandPass,
    LowShelf,
    HighShelf,
    HighPass,
    LowPass,
}

impl StageKind {
    /// Whether this kind uses the gain parameter.
    pub fn has_gain(self) -> bool {
        matches!(self, Self::BandPass | Self::LowShelf | Self::HighShelf)
    }
}

/// Derived coefficients of one stage.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum StageCoefficients {
    /// A switched-off stage. Contributes 0 dB everywhere.
    #[default]
    Disabled,
    BandPass(BandPassCoeffs),
    Shelf(ShelfCoeffs),
    HighPass(HighPassCoeffs),
    LowPass(LowPassCoeffs),
}

impl StageCoefficients {
    /// Derives the coefficients of a stage of the given kind.
    ///
    /// A disabled stage skips all derivation.
    pub fn derive(kind: StageKind, params: &FilterParams) -> Self {
        if !params.enabled {
            return Self::Disabled;
        }
        match kind {
            StageKind::BandPass => Self::BandPass(BandPassCoeffs::derive(params)),
            StageKind::LowShelf => Self::Shelf(ShelfCoeffs::derive(params, ShelfType::Low)),
            StageKind::HighShelf => Self::Shelf(ShelfCoeffs::derive(params, ShelfType::High)),
            StageKind::HighPass => Self::HighPass(HighPassCoeffs::derive(params)),
            StageKind::LowPass => Self::LowPass(LowPassCoeffs::derive(params)),
        }
    }

    /// Magnitude response in dB at `freq` Hz.
    ///
    /// Non-finite values are possible for the high-pass and low-pass
    /// approximations near their degenerate settings and are returned as-is.
    pub fn evaluate_db(&self, freq: f64) -> f64 {
        match self {
            Self::Disabled => 0.0,
            Self::BandPass(c) => c.evaluate_db(freq),
            Self::Shelf(c) => c.evaluate_db(freq),
            Self::HighPass(c) => c.evaluate_db(freq),
            Self::LowPass(c) => c.evaluate_db(freq),
        }
    }

    /// Returns true if the stage contributes to the response.
    pub fn is_enabled(&self) -> bool {
        !matches!(self, Self::Disabled)
    }
}
