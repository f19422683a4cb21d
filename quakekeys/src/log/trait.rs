//! The [`Logger`] seam between lookup engines and the host.

use std::fmt::Arguments;

/// Severity of an engine message.
///
/// Ordered from most to least verbose, so a host can filter with
/// `level >= LogLevel::Warn`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

/// Where a lookup engine sends its messages.
///
/// [`QuakeKeysLookup`](crate::lookup::QuakeKeysLookup) logs one info line
/// when it is built and one debug line per resolved location. Only
/// [`log`](Logger::log) is required; the per-level methods forward to it.
///
/// Engines hold an `Arc<dyn Logger>` and may be shared between threads, so
/// implementations must be `Send + Sync`.
///
/// ```
/// use std::fmt::Arguments;
/// use std::sync::{Arc, Mutex};
/// use quakekeys::area_peril::{AreaPerilIndex, GridSpacing};
/// use quakekeys::log::{LogLevel, Logger};
/// use quakekeys::lookup::{KeysLookup, QuakeKeysLookup, QuakeReference};
/// use quakekeys::vulnerability::{default_key_fields, VulnerabilityIndex};
///
/// #[derive(Default)]
/// struct StartupLog(Mutex<Vec<String>>);
///
/// impl Logger for StartupLog {
///     fn log(&self, level: LogLevel, args: Arguments<'_>) {
///         if level >= LogLevel::Info {
///             self.0.lock().unwrap().push(args.to_string());
///         }
///     }
/// }
///
/// let log = Arc::new(StartupLog::default());
/// let reference = QuakeReference::new(
///     Arc::new(AreaPerilIndex::build(GridSpacing::default(), vec![(1, 10.0, 20.0)]).unwrap()),
///     Arc::new(VulnerabilityIndex::empty(default_key_fields()).unwrap()),
/// )
/// .logger(log.clone());
/// QuakeKeysLookup::build(reference).unwrap();
///
/// let lines = log.0.lock().unwrap();
/// assert_eq!(lines.len(), 1);
/// assert!(lines[0].contains("1 area cells"));
/// ```
pub trait Logger: Send + Sync {
    /// Record one message at `level`.
    fn log(&self, level: LogLevel, args: Arguments<'_>);

    fn trace(&self, args: Arguments<'_>) {
        self.log(LogLevel::Trace, args);
    }

    fn debug(&self, args: Arguments<'_>) {
        self.log(LogLevel::Debug, args);
    }

    fn info(&self, args: Arguments<'_>) {
        self.log(LogLevel::Info, args);
    }

    fn warn(&self, args: Arguments<'_>) {
        self.log(LogLevel::Warn, args);
    }

    fn error(&self, args: Arguments<'_>) {
        self.log(LogLevel::Error, args);
    }
}

/// Format and send a trace message through a [`Logger`].
///
/// The logger may be a value, a reference or an `Arc<dyn Logger>`.
///
/// ```
/// use std::sync::Arc;
/// use quakekeys::log::{Logger, NoOpLogger};
///
/// let logger: Arc<dyn Logger> = Arc::new(NoOpLogger);
/// quakekeys::log_trace!(logger, "bucket {} scanned", "+20+010");
/// ```
#[macro_export]
macro_rules! log_trace {
    ($logger:expr, $($arg:tt)*) => {
        $logger.trace(format_args!($($arg)*))
    };
}

/// Debug counterpart of [`log_trace!`]; used for per-location results.
#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)*) => {
        $logger.debug(format_args!($($arg)*))
    };
}

/// Info counterpart of [`log_trace!`]; used for engine startup.
#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)*) => {
        $logger.info(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $($arg:tt)*) => {
        $logger.warn(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)*) => {
        $logger.error(format_args!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Collects formatted messages for assertions.
    #[derive(Default)]
    struct RecordingLogger {
        lines: Mutex<Vec<(LogLevel, String)>>,
    }

    impl Logger for RecordingLogger {
        fn log(&self, level: LogLevel, args: Arguments<'_>) {
            self.lines.lock().unwrap().push((level, args.to_string()));
        }
    }

    #[test]
    fn test_log_level_ordering() {
        assert!(LogLevel::Trace < LogLevel::Debug);
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warn);
        assert!(LogLevel::Warn < LogLevel::Error);
    }

    #[test]
    fn test_macros_route_levels() {
        let logger = RecordingLogger::default();
        crate::log_trace!(logger, "t{}", 1);
        crate::log_debug!(logger, "d");
        crate::log_info!(logger, "location {} resolved", 7);
        crate::log_warn!(logger, "w");
        crate::log_error!(logger, "e");

        let lines = logger.lines.lock().unwrap();
        let levels: Vec<LogLevel> = lines.iter().map(|(l, _)| *l).collect();
        assert_eq!(
            levels,
            vec![
                LogLevel::Trace,
                LogLevel::Debug,
                LogLevel::Info,
                LogLevel::Warn,
                LogLevel::Error
            ]
        );
        assert_eq!(lines[2].1, "location 7 resolved");
    }

    #[test]
    fn test_engine_logs_through_custom_logger() {
        use crate::area_peril::{AreaPerilIndex, GridSpacing};
        use crate::location::RawRow;
        use crate::lookup::{KeysLookup, QuakeKeysLookup, QuakeReference};
        use crate::vulnerability::{default_key_fields, VulnerabilityIndex};
        use std::sync::Arc;

        let logger = Arc::new(RecordingLogger::default());
        let lookup = QuakeKeysLookup::build(
            QuakeReference::new(
                Arc::new(AreaPerilIndex::empty(GridSpacing::default())),
                Arc::new(VulnerabilityIndex::empty(default_key_fields()).unwrap()),
            )
            .logger(logger.clone()),
        )
        .unwrap();

        let row = RawRow::new()
            .with("ROW_ID", "12")
            .with("LONGITUDE", "0.0")
            .with("LATITUDE", "95.0");
        lookup.lookup_row(&row).unwrap();

        let lines = logger.lines.lock().unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].0, LogLevel::Info);
        assert!(lines[0].1.starts_with("Keys lookup ready"));
        assert_eq!(lines[1].0, LogLevel::Debug);
        assert!(lines[1].1.starts_with("Location 12: fail"));
    }
}
