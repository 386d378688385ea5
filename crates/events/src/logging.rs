//! Sink that turns events into structured log records.

use serde::Serialize;
use thiserror::Error;

use crate::event::Event;
use crate::sink::EventSink;

#[derive(Debug, Error)]
pub enum LoggingSinkError {
    #[error("failed to serialize event payload: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Emits one `tracing` record per event, with the payload rendered as JSON.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingSink;

impl LoggingSink {
    pub fn new() -> Self {
        Self
    }
}

impl<M> EventSink<M> for LoggingSink
where
    M: Event + Serialize,
{
    type Error = LoggingSinkError;

    fn publish(&self, message: M) -> Result<(), Self::Error> {
        let payload = serde_json::to_string(&message)?;
        tracing::info!(
            event_type = message.event_type(),
            event_version = message.version(),
            occurred_at = %message.occurred_at(),
            payload = %payload,
            "domain event"
        );
        Ok(())
    }
}
