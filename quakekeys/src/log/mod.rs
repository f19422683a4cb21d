//! Engine-level logging for keys lookups.
//!
//! Lookup engines report through an `Arc<dyn Logger>` rather than calling
//! `tracing` themselves. A host embedding quakekeys can then route or drop
//! the per-location lines without installing a global subscriber, while the
//! CLI forwards them into the `tracing` pipeline set up by
//! [`crate::logging`].
//!
//! | Logger            | Used by                                         |
//! |-------------------|-------------------------------------------------|
//! | [`NoOpLogger`]    | `QuakeReference::new`, tests                    |
//! | [`TracingLogger`] | the CLI, target [`ENGINE_LOG_TARGET`]           |
//! | your own          | any `Logger + Send + Sync`                      |
//!
//! ```
//! use std::sync::Arc;
//! use quakekeys::log::{Logger, TracingLogger};
//! use quakekeys::log_warn;
//!
//! let logger: Arc<dyn Logger> = Arc::new(TracingLogger);
//! log_warn!(logger, "{} locations skipped in batch", 3);
//! ```

mod noop;
mod tracing_adapter;
mod r#trait;

pub use noop::NoOpLogger;
pub use r#trait::{LogLevel, Logger};
pub use tracing_adapter::{TracingLogger, ENGINE_LOG_TARGET};
