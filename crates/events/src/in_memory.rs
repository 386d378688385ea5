//! In-memory event sink for tests/dev.

use std::sync::Mutex;

use thiserror::Error;

use crate::sink::EventSink;

#[derive(Debug, Error)]
pub enum InMemorySinkError {
    /// Publish failed due to internal lock poisoning.
    #[error("in-memory sink lock poisoned")]
    Poisoned,
}

/// Records every published event, in publication order.
#[derive(Debug)]
pub struct InMemoryEventSink<M> {
    events: Mutex<Vec<M>>,
}

impl<M> InMemoryEventSink<M> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.events.lock().map(|events| events.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Take all recorded events, leaving the sink empty.
    pub fn drain(&self) -> Vec<M> {
        match self.events.lock() {
            Ok(mut events) => std::mem::take(&mut *events),
            Err(_) => Vec::new(),
        }
    }
}

impl<M: Clone> InMemoryEventSink<M> {
    /// Snapshot of recorded events.
    pub fn events(&self) -> Vec<M> {
        self.events.lock().map(|events| events.clone()).unwrap_or_default()
    }
}

impl<M> Default for InMemoryEventSink<M> {
    fn default() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
        }
    }
}

impl<M> EventSink<M> for InMemoryEventSink<M>
where
    M: Send,
{
    type Error = InMemorySinkError;

    fn publish(&self, message: M) -> Result<(), Self::Error> {
        let mut events = self.events.lock().map_err(|_| InMemorySinkError::Poisoned)?;
        events.push(message);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[test]
    fn records_in_publication_order() {
        let sink = InMemoryEventSink::<&str>::new();
        sink.publish("first").unwrap();
        sink.publish("second").unwrap();

        assert_eq!(sink.events(), vec!["first", "second"]);
        assert_eq!(sink.len(), 2);
    }

    #[test]
    fn drain_empties_the_sink() {
        let sink = InMemoryEventSink::<u32>::new();
        sink.publish(1).unwrap();

        assert_eq!(sink.drain(), vec![1]);
        assert!(sink.is_empty());
    }

    #[test]
    fn shared_through_arc() {
        let sink = Arc::new(InMemoryEventSink::<&str>::new());
        let handle = Arc::clone(&sink);
        handle.publish("via arc").unwrap();

        assert_eq!(sink.events(), vec!["via arc"]);
    }
}
