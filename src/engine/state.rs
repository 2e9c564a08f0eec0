//! Equalizer state
//!
//! The eight stage slots of the equalizer and the combined response.

use crate::dsp::{StageCoefficients, StageKind};

/// One of the eight fixed stage positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Slot {
    Band1,
    Band2,
    Band3,
    Band4,
    LowShelf,
    HighShelf,
    HighPass,
    LowPass,
}

impl Slot {
    /// All slots in state order.
    pub const ALL: [Slot; 8] = [
        Slot::Band1,
        Slot::Band2,
        Slot::Band3,
        Slot::Band4,
        Slot::LowShelf,
        Slot::HighShelf,
        Slot::HighPass,
        Slot::LowPass,
    ];

    /// Position of the slot in the state.
    pub fn index(self) -> usize {
        self as usize
    }

    /// The filter kind living in this slot.
    pub fn kind(self) -> StageKind {
        match self {
            Slot::Band1 | Slot::Band2 | Slot::Band3 | Slot::Band4 => StageKind::BandPass,
            Slot::LowShelf => StageKind::LowShelf,
            Slot::HighShelf => StageKind::HighShelf,
            Slot::HighPass => StageKind::HighPass,
            Slot::LowPass => StageKind::LowPass,
        }
    }
}

/// Snapshot of all eight stages.
///
/// Slots start out `Disabled`, so querying a response before every stage has
/// been populated treats the missing stages as flat (0 dB).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EqualizerState {
    stages: [StageCoefficients; 8],
}

impl EqualizerState {
    /// Creates a state with every stage disabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the coefficients of one slot.
    pub fn replace(&mut self, slot: Slot, coeffs: StageCoefficients) {
        self.stages[slot.index()] = coeffs;
    }

    /// Returns a copy with one slot replaced.
    pub fn with_stage(mut self, slot: Slot, coeffs: StageCoefficients) -> Self {
        self.replace(slot, coeffs);
        self
    }

    /// Coefficients currently held in `slot`.
    pub fn stage(&self, slot: Slot) -> &StageCoefficients {
        &self.stages[slot.index()]
    }

    /// Iterates over `(slot, coefficients)` in state order.
    pub fn iter(&self) -> impl Iterator<Item = (Slot, &StageCoefficients)> + '_ {
        Slot::ALL.into_iter().zip(self.stages.iter())
    }

    /// Response of a single slot in dB.
    pub fn stage_response_db(&self, slot: Slot, freq: f64) -> f64 {
        self.stage(slot).evaluate_db(freq)
    }

    /// Combined response of all stages in dB.
    pub fn combined_response_db(&self, freq: f64) -> f64 {
        self.stages.iter().map(|stage| stage.evaluate_db(freq)).sum()
    }
}
