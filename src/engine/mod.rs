//! Engine module
//!
//! Equalizer state, host parameter dispatch, and the transfer-function façade
//! that turns parameter notifications into a response curve.

pub mod channels;
pub mod commands;
pub mod state;
pub mod transfer;

pub use channels::{ChannelError, ParamChannel, ParamReceiver, ParamSender, DEFAULT_CHANNEL_CAPACITY};
pub use commands::{ParamChange, ParamError, ParamId, StageField};
pub use state::{EqualizerState, Slot};
pub use transfer::{ResponseError, TransferFunction, Update, DEFAULT_SAMPLE_RATE};
