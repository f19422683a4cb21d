//! Silent logger for embedded and test use.

use crate::log::{LogLevel, Logger};
use std::fmt::Arguments;

/// Discards every engine message.
///
/// [`QuakeReference::new`](crate::lookup::QuakeReference::new) starts with
/// this logger, so a library host that never calls
/// [`logger`](crate::lookup::QuakeReference::logger) pays nothing for the
/// per-location debug lines.
///
/// ```
/// use std::sync::Arc;
/// use quakekeys::area_peril::{AreaPerilIndex, GridSpacing};
/// use quakekeys::log::NoOpLogger;
/// use quakekeys::lookup::{KeysLookup, QuakeKeysLookup, QuakeReference};
/// use quakekeys::vulnerability::{default_key_fields, VulnerabilityIndex};
///
/// let reference = QuakeReference::new(
///     Arc::new(AreaPerilIndex::empty(GridSpacing::default())),
///     Arc::new(VulnerabilityIndex::empty(default_key_fields()).unwrap()),
/// )
/// .logger(Arc::new(NoOpLogger));
///
/// let lookup = QuakeKeysLookup::build(reference).unwrap();
/// assert!(lookup.area_perils().is_empty());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpLogger;

impl Logger for NoOpLogger {
    #[inline]
    fn log(&self, _level: LogLevel, _args: Arguments<'_>) {}
}
