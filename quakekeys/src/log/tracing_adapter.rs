//! Bridge from engine messages to `tracing` events.

use crate::log::{LogLevel, Logger};
use std::fmt::Arguments;

/// `tracing` target of every event emitted by [`TracingLogger`].
///
/// Lets a filter raise per-location output on its own, for example
/// `RUST_LOG=info,quakekeys::engine=debug`.
pub const ENGINE_LOG_TARGET: &str = "quakekeys::engine";

/// Forwards engine messages to `tracing` under [`ENGINE_LOG_TARGET`].
///
/// The CLI hands this to
/// [`QuakeKeysLookup::from_settings`](crate::lookup::QuakeKeysLookup::from_settings)
/// after [`init_logging`](crate::logging::init_logging) has installed the
/// subscriber. Startup lines land at info, per-location results at debug.
///
/// ```
/// use std::sync::Arc;
/// use quakekeys::log::TracingLogger;
/// use quakekeys::lookup::{LookupSettings, QuakeKeysLookup};
///
/// // No keys-data directory: both indexes start empty
/// let settings = LookupSettings::default();
/// let lookup = QuakeKeysLookup::from_settings(&settings, Arc::new(TracingLogger)).unwrap();
/// assert!(lookup.vulnerabilities().is_empty());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn log(&self, level: LogLevel, args: Arguments<'_>) {
        match level {
            LogLevel::Trace => tracing::trace!(target: ENGINE_LOG_TARGET, "{}", args),
            LogLevel::Debug => tracing::debug!(target: ENGINE_LOG_TARGET, "{}", args),
            LogLevel::Info => tracing::info!(target: ENGINE_LOG_TARGET, "{}", args),
            LogLevel::Warn => tracing::warn!(target: ENGINE_LOG_TARGET, "{}", args),
            LogLevel::Error => tracing::error!(target: ENGINE_LOG_TARGET, "{}", args),
        }
    }
}
