//! Structured logging setup over `tracing`.

mod format;

pub use format::StructuredLogger;
