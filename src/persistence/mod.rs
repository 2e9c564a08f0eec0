//! Persistence module
//!
//! Preset save/load using serde and JSON.

pub mod preset;

pub use preset::{load_from_file, save_to_file, Preset, PresetError, PRESET_VERSION};
