//! Preset serialization for save/load functionality.
//!
//! A preset stores the value of every transfer-function parameter by host
//! symbol, plus the sample rate the response is computed for.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::engine::{ParamError, ParamId, TransferFunction, DEFAULT_SAMPLE_RATE};

/// Current preset format version.
/// Increment this when making breaking changes to the format.
pub const PRESET_VERSION: u32 = 1;

/// A complete equalizer setting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    /// Human-readable name for the preset.
    pub name: String,
    /// Preset format version for future compatibility.
    pub version: u32,
    /// Sample rate in Hz.
    #[serde(default = "default_sample_rate")]
    pub sample_rate: f64,
    /// Parameter values keyed by host symbol.
    pub values: BTreeMap<String, f64>,
}

fn default_sample_rate() -> f64 {
    DEFAULT_SAMPLE_RATE
}

impl Preset {
    /// Create a new empty preset with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: PRESET_VERSION,
            sample_rate: DEFAULT_SAMPLE_RATE,
            values: BTreeMap::new(),
        }
    }

    /// Captures every known parameter of a transfer function.
    pub fn capture(name: impl Into<String>, tf: &TransferFunction) -> Self {
        Self {
            sample_rate: tf.sample_rate(),
            values: tf
                .values()
                .map(|(id, value)| (id.symbol().to_string(), value))
                .collect(),
            ..Self::new(name)
        }
    }

    /// Check if this preset version is compatible with the current format.
    pub fn is_compatible(&self) -> bool {
        self.version <= PRESET_VERSION
    }
}

impl Default for Preset {
    fn default() -> Self {
        Self::capture("Default", &TransferFunction::default())
    }
}

impl TransferFunction {
    /// Builds a transfer function from a preset.
    ///
    /// Starts from the host defaults so a partial preset still yields a
    /// complete parameter set. Unknown symbols are an error.
    pub fn from_preset(preset: &Preset) -> Result<Self, PresetError> {
        let mut tf = TransferFunction::with_defaults(preset.sample_rate);
        for (symbol, &value) in &preset.values {
            tf.set_parameter(symbol, value)?;
        }
        Ok(tf)
    }
}

/// Error type for preset operations.
#[derive(Debug, Error)]
pub enum PresetError {
    /// File I/O error.
    #[error("File error: {0}")]
    Io(#[from] std::io::Error),
    /// JSON serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    /// Incompatible preset version.
    #[error("Incompatible preset version: found {found}, expected <= {expected}")]
    IncompatibleVersion { found: u32, expected: u32 },
    /// A value keyed by a symbol that is not a transfer-function parameter.
    #[error("Invalid preset: {0}")]
    Param(#[from] ParamError),
}

/// Save a preset to a JSON file.
pub fn save_to_file(preset: &Preset, path: &Path) -> Result<(), PresetError> {
    let json = serde_json::to_string_pretty(preset)?;
    std::fs::write(path, json)?;
    debug!(path = %path.display(), "preset saved");
    Ok(())
}

/// Load a preset from a JSON file.
pub fn load_from_file(path: &Path) -> Result<Preset, PresetError> {
    let json = std::fs::read_to_string(path)?;
    let preset: Preset = serde_json::from_str(&json)?;

    if !preset.is_compatible() {
        warn!(found = preset.version, "incompatible preset version");
        return Err(PresetError::IncompatibleVersion {
            found: preset.version,
            expected: PRESET_VERSION,
        });
    }

    // Validate symbols up front so a bad file fails at load time.
    for symbol in preset.values.keys() {
        if let Err(e) = ParamId::from_symbol(symbol) {
            warn!(path = %path.display(), "rejecting preset: {}", e);
            return Err(e.into());
        }
    }

    Ok(preset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Slot;

    #[test]
    fn test_preset_creation() {
        let preset = Preset::new("Test Preset");
        assert_eq!(preset.name, "Test Preset");
        assert_eq!(preset.version, PRESET_VERSION);
        assert_eq!(preset.sample_rate, 48000.0);
        assert!(preset.values.is_empty());
    }

    #[test]
    fn test_default_preset_has_all_values() {
        let preset = Preset::default();
        assert_eq!(preset.values.len(), ParamId::COUNT);
        assert_eq!(preset.values["HSfreq"], 8000.0);
    }

    #[test]
    fn test_preset_serialization() {
        let mut tf = TransferFunction::default();
        tf.set_parameter("gain1", 4.5).unwrap();
        tf.set_parameter("LowPass", 1.0).unwrap();
        let preset = Preset::capture("Bright", &tf);

        let json = serde_json::to_string(&preset).unwrap();
        let loaded: Preset = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, preset);

        let restored = TransferFunction::from_preset(&loaded).unwrap();
        assert_eq!(restored.state().unwrap(), tf.state().unwrap());
    }

    #[test]
    fn test_partial_preset_uses_defaults() {
        let json = r#"{ "name": "Cut", "version": 1, "values": { "gain2": -6.0 } }"#;
        let preset: Preset = serde_json::from_str(json).unwrap();
        assert_eq!(preset.sample_rate, DEFAULT_SAMPLE_RATE);

        let tf = TransferFunction::from_preset(&preset).unwrap();
        assert!(tf.is_complete());
        assert!((tf.stage_response_db(Slot::Band2, 397.0).unwrap() + 6.0).abs() < 0.1);
    }

    #[test]
    fn test_unknown_symbol_in_preset() {
        let mut preset = Preset::new("Bad");
        preset.values.insert("volume".to_string(), 1.0);
        assert!(matches!(
            TransferFunction::from_preset(&preset),
            Err(PresetError::Param(ParamError::UnknownParameter(_)))
        ));
    }

    #[test]
    fn test_negative_sample_rate_in_preset() {
        let json = r#"{ "name": "Odd", "version": 1, "sample_rate": -48000.0, "values": { "LowPass": 1.0 } }"#;
        let preset: Preset = serde_json::from_str(json).unwrap();
        let tf = TransferFunction::from_preset(&preset).unwrap();
        assert_eq!(tf.sample_rate(), -48000.0);
        assert!(tf.is_complete());
    }

    #[test]
    fn test_load_rejects_unknown_symbol() {
        let path = std::env::temp_dir().join(format!("eq_response_unknown_{}.json", std::process::id()));
        let json = r#"{ "name": "Bad", "version": 1, "values": { "peakreset": 1.0 } }"#;
        std::fs::write(&path, json).unwrap();
        let result = load_from_file(&path);
        let _ = std::fs::remove_file(&path);
        assert!(matches!(
            result,
            Err(PresetError::Param(ParamError::UnknownParameter(ref s))) if s == "peakreset"
        ));
    }

    #[test]
    fn test_version_compatibility() {
        let preset = Preset::new("Test");
        assert!(preset.is_compatible());

        let future = Preset {
            version: PRESET_VERSION + 1,
            ..Preset::new("Future")
        };
        assert!(!future.is_compatible());
    }

    #[test]
    fn test_file_round_trip() {
        let path = std::env::temp_dir().join(format!("eq_response_preset_{}.json", std::process::id()));
        let preset = Preset::default();
        save_to_file(&preset, &path).unwrap();
        let loaded = load_from_file(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded, preset);
    }

    #[test]
    fn test_load_rejects_future_version() {
        let path = std::env::temp_dir().join(format!("eq_response_future_{}.json", std::process::id()));
        let future = Preset {
            version: PRESET_VERSION + 1,
            ..Preset::new("Future")
        };
        std::fs::write(&path, serde_json::to_string(&future).unwrap()).unwrap();
        let result = load_from_file(&path);
        let _ = std::fs::remove_file(&path);
        assert!(matches!(
            result,
            Err(PresetError::IncompatibleVersion { found, expected }) if found == PRESET_VERSION + 1 && expected == PRESET_VERSION
        ));
    }
}
