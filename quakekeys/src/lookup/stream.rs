//! Single-pass stream of output records.

use std::iter::FusedIterator;

use super::record::OutputRecord;
use super::{KeysLookup, LookupError};
use crate::location::RawRow;
use crate::outcome::LookupStatus;

/// Input accepted by [`KeysLookup::process`].
///
/// Plain rows are always usable. Rows from a fallible reader carry the
/// reader's error, which aborts the batch like an invalid location id.
pub trait IntoRawRow {
    /// Produce the row, or the error that prevented reading it.
    fn into_raw_row(self) -> Result<RawRow, LookupError>;
}

impl IntoRawRow for RawRow {
    fn into_raw_row(self) -> Result<RawRow, LookupError> {
        Ok(self)
    }
}

impl IntoRawRow for &RawRow {
    fn into_raw_row(self) -> Result<RawRow, LookupError> {
        Ok(self.clone())
    }
}

impl<E: Into<LookupError>> IntoRawRow for Result<RawRow, E> {
    fn into_raw_row(self) -> Result<RawRow, LookupError> {
        self.map_err(Into::into)
    }
}

/// Lifecycle of one batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchState {
    /// No row requested yet
    Idle,
    /// At least one row has been requested and more may follow
    Processing,
    /// Input exhausted or batch aborted; the stream yields nothing more
    Done,
}

/// Per-status record counts of a batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub success: usize,
    pub no_match: usize,
    pub fail: usize,
}

impl BatchSummary {
    /// Records emitted so far.
    pub fn total(&self) -> usize {
        self.success + self.no_match + self.fail
    }

    fn record(&mut self, status: LookupStatus) {
        match status {
            LookupStatus::Success => self.success += 1,
            LookupStatus::NoMatch => self.no_match += 1,
            LookupStatus::Fail => self.fail += 1,
        }
    }
}

/// Lazy, forward-only sequence of [`OutputRecord`]s, one per input row.
///
/// Each call to `next` pulls one row from the input, so consumers can start
/// before the input is fully read. The stream owns the input iterator and
/// cannot be restarted.
///
/// # Exhaustion
///
/// - input exhausted → `None`, state [`BatchState::Done`]
/// - structural error (unreadable row, invalid id) → one `Err`, then
///   [`BatchState::Done`]; the rest of the input is never read
///
/// Once done, `next` always returns `None`.
pub struct KeysStream<'a, L, I> {
    lookup: &'a L,
    rows: I,
    state: BatchState,
    summary: BatchSummary,
}

impl<'a, L, I> KeysStream<'a, L, I>
where
    L: KeysLookup,
    I: Iterator,
    I::Item: IntoRawRow,
{
    pub(crate) fn new(lookup: &'a L, rows: I) -> Self {
        Self {
            lookup,
            rows,
            state: BatchState::Idle,
            summary: BatchSummary::default(),
        }
    }

    /// Current batch state.
    pub fn state(&self) -> BatchState {
        self.state
    }

    /// Counts of the records emitted so far.
    pub fn summary(&self) -> BatchSummary {
        self.summary
    }

    fn finish(&mut self) {
        self.state = BatchState::Done;
        tracing::debug!(
            success = self.summary.success,
            no_match = self.summary.no_match,
            fail = self.summary.fail,
            "Keys batch complete"
        );
    }
}

impl<L, I> Iterator for KeysStream<'_, L, I>
where
    L: KeysLookup,
    I: Iterator,
    I::Item: IntoRawRow,
{
    type Item = Result<OutputRecord, LookupError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.state == BatchState::Done {
            return None;
        }
        self.state = BatchState::Processing;

        let Some(item) = self.rows.next() else {
            self.finish();
            return None;
        };

        match item
            .into_raw_row()
            .and_then(|row| self.lookup.lookup_row(&row))
        {
            Ok(record) => {
                self.summary.record(record.status);
                Some(Ok(record))
            }
            Err(e) => {
                tracing::error!(
                    error = %e,
                    emitted = self.summary.total(),
                    "Aborting keys batch"
                );
                self.state = BatchState::Done;
                Some(Err(e))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.state == BatchState::Done {
            (0, Some(0))
        } else {
            (0, self.rows.size_hint().1)
        }
    }
}

impl<L, I> FusedIterator for KeysStream<'_, L, I>
where
    L: KeysLookup,
    I: Iterator,
    I::Item: IntoRawRow,
{
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::{LocationReadError, LocationRecord, LocationSchema};
    use crate::lookup::PerilId;
    use crate::outcome::LookupOutcome;

    /// Minimal engine: every location east of the prime meridian matches.
    struct HemisphereLookup {
        schema: LocationSchema,
    }

    impl KeysLookup for HemisphereLookup {
        type Reference = ();

        fn build(_: ()) -> Result<Self, LookupError> {
            Ok(Self {
                schema: LocationSchema::default(),
            })
        }

        fn peril_id(&self) -> PerilId {
            PerilId::Wind
        }

        fn schema(&self) -> &LocationSchema {
            &self.schema
        }

        fn lookup_location(&self, location: &LocationRecord) -> OutputRecord {
            let area = match location.lon {
                Some(lon) if lon >= 0.0 => LookupOutcome::success(1),
                _ => LookupOutcome::no_match("west"),
            };
            OutputRecord::from_outcomes(location, self.peril_id(), &area, &LookupOutcome::success(1))
        }
    }

    fn row(id: &str, lon: &str) -> RawRow {
        RawRow::new().with("ROW_ID", id).with("LONGITUDE", lon)
    }

    #[test]
    fn test_preserves_order_and_length() {
        let lookup = HemisphereLookup::build(()).unwrap();
        let rows = vec![row("3", "1.0"), row("1", "-1.0"), row("2", "5.0")];

        let records: Vec<_> = lookup
            .process(rows)
            .collect::<Result<Vec<_>, _>>()
            .unwrap();

        let ids: Vec<i64> = records.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
        assert_eq!(records[1].status, LookupStatus::NoMatch);
    }

    #[test]
    fn test_state_machine() {
        let lookup = HemisphereLookup::build(()).unwrap();
        let mut stream = lookup.process(vec![row("1", "1.0")]);
        assert_eq!(stream.state(), BatchState::Idle);

        assert!(stream.next().is_some());
        assert_eq!(stream.state(), BatchState::Processing);

        assert!(stream.next().is_none());
        assert_eq!(stream.state(), BatchState::Done);
        assert!(stream.next().is_none());
    }

    #[test]
    fn test_invalid_id_aborts_batch() {
        let lookup = HemisphereLookup::build(()).unwrap();
        let rows = vec![row("1", "1.0"), row("x", "1.0"), row("3", "1.0")];
        let mut stream = lookup.process(rows);

        assert!(stream.next().unwrap().is_ok());
        assert!(matches!(
            stream.next(),
            Some(Err(LookupError::Validation(_)))
        ));
        assert_eq!(stream.state(), BatchState::Done);
        assert!(stream.next().is_none());
        assert_eq!(stream.size_hint(), (0, Some(0)));
    }

    #[test]
    fn test_reader_error_aborts_batch() {
        let lookup = HemisphereLookup::build(()).unwrap();
        let header_error = csv::Reader::from_reader("a\n1,2\n".as_bytes())
            .records()
            .find_map(Result::err)
            .unwrap();
        let rows: Vec<Result<RawRow, LocationReadError>> = vec![
            Ok(row("1", "1.0")),
            Err(LocationReadError::Row {
                line: 2,
                source: header_error,
            }),
            Ok(row("3", "1.0")),
        ];

        let results: Vec<_> = lookup.process(rows).collect();
        assert_eq!(results.len(), 2);
        assert!(results[0].is_ok());
        assert!(matches!(results[1], Err(LookupError::LocationRead(_))));
    }

    #[test]
    fn test_lazy_consumption() {
        let lookup = HemisphereLookup::build(()).unwrap();
        let mut pulled = 0;
        let rows = (0..100).map(|i| {
            pulled += 1;
            row(&i.to_string(), "1.0")
        });

        let first_two: Vec<_> = lookup.process(rows).take(2).collect();
        assert_eq!(first_two.len(), 2);
        assert_eq!(pulled, 2);
    }

    #[test]
    fn test_summary_counts() {
        let lookup = HemisphereLookup::build(()).unwrap();
        let rows = vec![row("1", "1.0"), row("2", "-1.0"), row("3", "1.0")];
        let mut stream = lookup.process(&rows);
        while stream.next().is_some() {}

        let summary = stream.summary();
        assert_eq!(summary.success, 2);
        assert_eq!(summary.no_match, 1);
        assert_eq!(summary.fail, 0);
        assert_eq!(summary.total(), 3);
    }
}
