//! Order processing: applying a customer's discount policy without knowing
//! which tier the customer belongs to.
//!
//! Pure computation lives in [`process_order`]; [`OrderProcessor`] adds event
//! publication and logging around it.

pub mod order;
pub mod processor;

pub use order::{OrderEvent, OrderReceipt, process_order};
pub use processor::OrderProcessor;
