//! Observability
//!
//! Structured logging through `tracing`. Request spans come from
//! `tower_http::trace::TraceLayer` in the HTTP server; store mutations log
//! at debug.

mod logger;

pub use logger::{init, LoggerError};
