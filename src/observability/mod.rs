//! # Observability
//!
//! Structured logging for server and store events.

mod logger;

pub use logger::{Logger, Severity};
