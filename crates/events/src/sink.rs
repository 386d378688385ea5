//! Event sink abstraction (mechanics only).
//!
//! A sink is where finished facts go: a console reporter, a structured log, a
//! test recorder. Domain code never formats narration itself; it hands events
//! to whichever sink the caller injected.

use std::sync::Arc;

/// Receiver of published events.
///
/// `publish()` can fail (e.g. a poisoned lock or a serialization error). The
/// failure is surfaced to the caller, which decides whether it matters; the
/// domain state change that produced the event has already happened.
pub trait EventSink<M>: Send + Sync {
    type Error: core::fmt::Debug + Send + Sync + 'static;

    fn publish(&self, message: M) -> Result<(), Self::Error>;
}

impl<M, S> EventSink<M> for Arc<S>
where
    S: EventSink<M> + ?Sized,
{
    type Error = S::Error;

    fn publish(&self, message: M) -> Result<(), Self::Error> {
        (**self).publish(message)
    }
}

impl<M, S> EventSink<M> for &S
where
    S: EventSink<M> + ?Sized,
{
    type Error = S::Error;

    fn publish(&self, message: M) -> Result<(), Self::Error> {
        (**self).publish(message)
    }
}
