//! Structured logging setup and newline-delimited JSON output.

mod format;

pub use format::StructuredLogger;
