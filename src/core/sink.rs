//! Delivery targets for aggregated notifications.

use crate::errors::{AppError, AppResult};
use crate::ui::messages;
use std::sync::mpsc;

/// Receives one aggregated message per tick, when there is something to say.
///
/// Implementations that render on another thread must marshal the message
/// themselves; the scheduler calls `deliver` from whatever context runs it.
pub trait NotificationSink: Send {
    fn deliver(&self, message: &str) -> AppResult<()>;
}

/// Prints the message to stdout. Used when no other sink is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

impl NotificationSink for ConsoleSink {
    fn deliver(&self, message: &str) -> AppResult<()> {
        messages::header("Notification");
        for line in message.lines() {
            messages::warning(line);
        }
        Ok(())
    }
}

/// Wraps a plain callback.
pub struct FnSink<F>(pub F);

impl<F> NotificationSink for FnSink<F>
where
    F: Fn(&str) + Send,
{
    fn deliver(&self, message: &str) -> AppResult<()> {
        (self.0)(message);
        Ok(())
    }
}

/// Posts messages onto a channel owned by another execution context
/// (typically a UI event loop).
pub struct ChannelSink {
    tx: mpsc::Sender<String>,
}

impl ChannelSink {
    pub fn new(tx: mpsc::Sender<String>) -> Self {
        Self { tx }
    }

    pub fn channel() -> (Self, mpsc::Receiver<String>) {
        let (tx, rx) = mpsc::channel();
        (Self::new(tx), rx)
    }
}

impl NotificationSink for ChannelSink {
    fn deliver(&self, message: &str) -> AppResult<()> {
        self.tx
            .send(message.to_string())
            .map_err(|_| AppError::Notification("receiver has been dropped".into()))
    }
}
