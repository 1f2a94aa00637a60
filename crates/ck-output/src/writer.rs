//! The `ReportWriter` trait implemented by all report backends.

use crate::{OutputResult, StationReportRow, TotalsRow};

/// Trait implemented by the CSV and text backends.
///
/// Errors raised while a simulation is running are stored by
/// [`ReportObserver`][crate::ReportObserver] and surface from its `finish`.
pub trait ReportWriter {
    /// Write the per-station rows of one run.
    fn write_station_rows(&mut self, run: &str, rows: &[StationReportRow]) -> OutputResult<()>;

    /// Write the across-station totals of one run.
    fn write_totals(&mut self, run: &str, totals: &TotalsRow) -> OutputResult<()>;

    /// Flush all underlying handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}

/// Fan out to two writers, e.g. a CSV file and the terminal.
///
/// Both writers see every call; the first error is returned after both ran.
impl<A: ReportWriter, B: ReportWriter> ReportWriter for (A, B) {
    fn write_station_rows(&mut self, run: &str, rows: &[StationReportRow]) -> OutputResult<()> {
        let a = self.0.write_station_rows(run, rows);
        let b = self.1.write_station_rows(run, rows);
        a.and(b)
    }

    fn write_totals(&mut self, run: &str, totals: &TotalsRow) -> OutputResult<()> {
        let a = self.0.write_totals(run, totals);
        let b = self.1.write_totals(run, totals);
        a.and(b)
    }

    fn finish(&mut self) -> OutputResult<()> {
        let a = self.0.finish();
        let b = self.1.finish();
        a.and(b)
    }
}
