//! Domain events and the sinks that receive them.
//!
//! Business operations return values plus an event describing what happened;
//! deciding how (or whether) to narrate that event is the sink's job.

pub mod event;
pub mod in_memory;
pub mod logging;
pub mod sink;

pub use event::Event;
pub use in_memory::{InMemoryEventSink, InMemorySinkError};
pub use logging::{LoggingSink, LoggingSinkError};
pub use sink::EventSink;
