//! Parameter Channels
//!
//! Lock-free hand-off of parameter changes from the host/UI thread to the thread
//! that owns the [`TransferFunction`]. Uses an rtrb ring buffer (SPSC).

use rtrb::{Consumer, Producer, RingBuffer};
use thiserror::Error;

use super::commands::{ParamChange, ParamError};
use super::transfer::{TransferFunction, Update};

/// Default capacity of the change queue.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 256;

/// Errors raised when queueing a change.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChannelError {
    /// The symbol is not a transfer-function parameter. Nothing was queued.
    #[error(transparent)]
    Param(#[from] ParamError),
    /// The queue is full; the change is handed back.
    #[error("parameter queue full, dropped {} = {}", .0.id, .0.value)]
    Full(ParamChange),
}

/// Both ends of a parameter queue before they are handed to their threads.
pub struct ParamChannel {
    tx: Producer<ParamChange>,
    rx: Consumer<ParamChange>,
}

impl ParamChannel {
    /// Creates a queue holding up to `capacity` pending changes.
    pub fn new(capacity: usize) -> Self {
        let (tx, rx) = RingBuffer::new(capacity);
        Self { tx, rx }
    }

    /// Creates a queue with the default capacity.
    pub fn with_defaults() -> Self {
        Self::new(DEFAULT_CHANNEL_CAPACITY)
    }

    /// Splits into the sending and receiving handles.
    pub fn split(self) -> (ParamSender, ParamReceiver) {
        (ParamSender { tx: self.tx }, ParamReceiver { rx: self.rx })
    }
}

/// Host-side handle.
pub struct ParamSender {
    tx: Producer<ParamChange>,
}

impl ParamSender {
    /// Parses a host notification and queues it.
    ///
    /// Unknown symbols are rejected here so they never reach the receiver.
    pub fn send(&mut self, symbol: &str, value: f64) -> Result<(), ChannelError> {
        let change = ParamChange::parse(symbol, value)?;
        self.send_change(change)
    }

    /// Queues an already parsed change. Never blocks.
    pub fn send_change(&mut self, change: ParamChange) -> Result<(), ChannelError> {
        self.tx
            .push(change)
            .map_err(|rtrb::PushError::Full(change)| ChannelError::Full(change))
    }

    /// Number of changes that can still be queued.
    pub fn slots_available(&self) -> usize {
        self.tx.slots()
    }
}

/// Receiver-side handle.
pub struct ParamReceiver {
    rx: Consumer<ParamChange>,
}

impl ParamReceiver {
    /// Pops the next pending change.
    pub fn recv(&mut self) -> Option<ParamChange> {
        self.rx.pop().ok()
    }

    /// Applies every pending change in arrival order.
    ///
    /// Returns whether the curve needs to be redrawn: true when at least one
    /// change took effect on a complete parameter set.
    pub fn apply_pending(&mut self, tf: &mut TransferFunction) -> bool {
        let mut redraw = false;
        while let Some(change) = self.recv() {
            redraw |= tf.apply(change) != Update::Pending;
        }
        redraw
    }

    /// Number of changes waiting.
    pub fn pending(&self) -> usize {
        self.rx.slots()
    }
}
