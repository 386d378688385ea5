//! Tracing/logging setup shared by clientbook binaries.

/// Subscriber installation (filters, output format).
pub mod subscriber;

pub use subscriber::{LogFormat, ParseLogFormatError};

/// Initialize process-wide observability with JSON logs.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    subscriber::init(LogFormat::Json);
}

/// Initialize process-wide observability with the given output format.
pub fn init_with(format: LogFormat) {
    subscriber::init(format);
}
