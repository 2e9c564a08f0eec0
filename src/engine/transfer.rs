//! Transfer function
//!
//! Keeps the latest value of every host parameter and the derived stage
//! coefficients. A change re-derives only the stage it belongs to, and only
//! once every required parameter is known.

use std::collections::HashMap;

use thiserror::Error;
use tracing::{debug, trace, warn};

use super::commands::{ParamChange, ParamError, ParamId, StageField};
use super::state::{EqualizerState, Slot};
use crate::dsp::{is_on, parameter, FilterParams, StageCoefficients};
use crate::plot::curve::{self, CurvePoint, Marker};

/// Sample rate the response is computed for unless told otherwise.
pub const DEFAULT_SAMPLE_RATE: f64 = 48000.0;

/// Errors returned when a response is requested.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResponseError {
    /// Not every transfer-function parameter has been received yet.
    #[error("parameter set incomplete, missing: {}", .missing.join(", "))]
    IncompleteState { missing: Vec<&'static str> },
}

/// What a parameter change did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Update {
    /// Stored; the parameter set is still incomplete.
    Pending,
    /// The parameter set just became complete and every stage was derived.
    All,
    /// One stage was re-derived.
    Stage(Slot),
    /// Enable or bypass changed. Only the curve's presentation is affected.
    Display,
}

/// Parameter store plus derived equalizer state.
#[derive(Clone, Debug)]
pub struct TransferFunction {
    sample_rate: f64,
    values: HashMap<ParamId, f64>,
    stages: EqualizerState,
}

impl TransferFunction {
    /// Creates a transfer function with no known parameters.
    pub fn new(sample_rate: f64) -> Self {
        Self {
            sample_rate,
            values: HashMap::with_capacity(ParamId::COUNT),
            stages: EqualizerState::new(),
        }
    }

    /// Creates a complete transfer function from the host defaults.
    pub fn with_defaults(sample_rate: f64) -> Self {
        let mut tf = Self::new(sample_rate);
        for id in ParamId::all() {
            if let Some(def) = parameter::find(id.symbol()) {
                tf.values.insert(id, def.default);
            }
        }
        tf.rebuild_all();
        tf
    }

    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    /// Changes the sample rate and re-derives every stage.
    pub fn set_sample_rate(&mut self, sample_rate: f64) {
        self.sample_rate = sample_rate;
        if self.is_complete() {
            self.rebuild_all();
        }
    }

    /// Handles a host notification by symbol.
    ///
    /// Unknown symbols are rejected and leave the state untouched.
    pub fn set_parameter(&mut self, symbol: &str, value: f64) -> Result<Update, ParamError> {
        let change = ParamChange::parse(symbol, value).map_err(|e| {
            warn!(symbol, "ignoring parameter change: {}", e);
            e
        })?;
        Ok(self.apply(change))
    }

    /// Applies an already parsed change.
    pub fn apply(&mut self, change: ParamChange) -> Update {
        let was_complete = self.is_complete();
        self.values.insert(change.id, change.value);

        if !self.is_complete() {
            return Update::Pending;
        }
        if !was_complete {
            debug!("parameter set complete");
            self.rebuild_all();
            return Update::All;
        }

        match change.id.slot() {
            Some(slot) => {
                self.rebuild(slot);
                Update::Stage(slot)
            }
            None => {
                trace!(param = %change.id, value = change.value, "display flag changed");
                Update::Display
            }
        }
    }

    /// Latest value of a parameter.
    pub fn get(&self, id: ParamId) -> Option<f64> {
        self.values.get(&id).copied()
    }

    /// Latest values of all known parameters, in host order.
    pub fn values(&self) -> impl Iterator<Item = (ParamId, f64)> + '_ {
        ParamId::all().filter_map(|id| self.get(id).map(|v| (id, v)))
    }

    /// Returns true once every required parameter has been received.
    pub fn is_complete(&self) -> bool {
        ParamId::all().all(|id| self.values.contains_key(&id))
    }

    /// Symbols still missing before a response can be computed.
    pub fn missing(&self) -> Vec<&'static str> {
        ParamId::all()
            .filter(|id| !self.values.contains_key(id))
            .map(ParamId::symbol)
            .collect()
    }

    /// Whether the curve should be drawn as active (enabled and not bypassed).
    pub fn is_active(&self) -> bool {
        self.get(ParamId::Enable).map_or(false, is_on) && self.get(ParamId::Bypass) != Some(1.0)
    }

    /// Builds the filter parameters of one slot from the stored values.
    ///
    /// Returns `None` while any of the slot's controls is unknown.
    pub fn stage_params(&self, slot: Slot) -> Option<FilterParams> {
        let field = |field| self.get(ParamId::Stage { slot, field });
        let gain_db = if slot.kind().has_gain() {
            field(StageField::Gain)?
        } else {
            0.0
        };
        Some(FilterParams::new(
            is_on(field(StageField::Enabled)?),
            gain_db,
            field(StageField::Frequency)?,
            field(StageField::Q)?,
            self.sample_rate,
        ))
    }

    fn rebuild(&mut self, slot: Slot) {
        let coeffs = self
            .stage_params(slot)
            .map(|params| StageCoefficients::derive(slot.kind(), &params))
            .unwrap_or_default();
        debug!(?slot, enabled = coeffs.is_enabled(), "stage derived");
        self.stages.replace(slot, coeffs);
    }

    fn rebuild_all(&mut self) {
        for slot in Slot::ALL {
            self.rebuild(slot);
        }
    }

    fn check_complete(&self) -> Result<(), ResponseError> {
        if self.is_complete() {
            Ok(())
        } else {
            Err(ResponseError::IncompleteState {
                missing: self.missing(),
            })
        }
    }

    /// The derived stages, available once the parameter set is complete.
    pub fn state(&self) -> Result<&EqualizerState, ResponseError> {
        self.check_complete()?;
        Ok(&self.stages)
    }

    /// Combined response in dB at `freq` Hz.
    pub fn response_db(&self, freq: f64) -> Result<f64, ResponseError> {
        Ok(self.state()?.combined_response_db(freq))
    }

    /// Response of a single stage in dB at `freq` Hz.
    pub fn stage_response_db(&self, slot: Slot, freq: f64) -> Result<f64, ResponseError> {
        Ok(self.state()?.stage_response_db(slot, freq))
    }

    /// Samples the combined curve, one point per pixel column.
    pub fn sample_curve(&self, width: usize) -> Result<Vec<CurvePoint>, ResponseError> {
        Ok(curve::sample_curve(self.state()?, width))
    }

    /// Handle positions of the enabled band and shelf stages.
    pub fn markers(&self, width: usize) -> Result<Vec<Marker>, ResponseError> {
        let stages = self.state()?;
        Ok(Slot::ALL
            .into_iter()
            .filter(|slot| slot.kind().has_gain() && stages.stage(*slot).is_enabled())
            .filter_map(|slot| {
                self.stage_params(slot)
                    .map(|p| Marker::new(slot, p.freq_hz, p.gain_db, width))
            })
            .collect())
    }
}

impl Default for TransferFunction {
    fn default() -> Self {
        Self::with_defaults(DEFAULT_SAMPLE_RATE)
    }
}
