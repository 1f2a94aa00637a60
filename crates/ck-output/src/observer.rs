//! `ReportObserver<W>` — bridges `SimObserver` to a `ReportWriter`.

use ck_core::SimTime;
use ck_sim::SimObserver;
use ck_station::Station;
use tracing::warn;

use crate::row::{StationReportRow, TotalsRow};
use crate::writer::ReportWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes the end-of-day station results to any
/// [`ReportWriter`] backend.
///
/// One observer can follow several runs: call [`begin_run`][Self::begin_run]
/// before each `simulate` to label its rows.  Errors from the writer are
/// stored internally because `SimObserver` methods have no return value;
/// [`finish`][Self::finish] reports the first one.
pub struct ReportObserver<W: ReportWriter> {
    writer:     W,
    run:        String,
    last_error: Option<OutputError>,
}

impl<W: ReportWriter> ReportObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, run: String::new(), last_error: None }
    }

    /// Label the rows of the next simulated day.
    pub fn begin_run(&mut self, run: impl Into<String>) {
        self.run = run.into();
    }

    /// Take the stored write error (if any).
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer without flushing it.
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Flush the writer and hand it back, or return the first error seen
    /// during the runs.
    pub fn finish(mut self) -> OutputResult<W> {
        if let Some(e) = self.last_error.take() {
            return Err(e);
        }
        self.writer.finish()?;
        Ok(self.writer)
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            warn!(run = %self.run, error = %e, "report write failed");
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: ReportWriter> SimObserver for ReportObserver<W> {
    fn on_close(&mut self, _closing: SimTime, stations: &[Station]) {
        let rows: Vec<StationReportRow> = stations.iter().map(StationReportRow::from_station).collect();
        let totals = TotalsRow::from_rows(&rows);

        let result = self.writer.write_station_rows(&self.run, &rows);
        self.store_err(result);
        let result = self.writer.write_totals(&self.run, &totals);
        self.store_err(result);
    }
}
