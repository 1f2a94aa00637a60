//! CSV report backend.
//!
//! Creates two files in the configured output directory:
//! - `station_results.csv`: one row per station per run
//! - `run_totals.csv`: one row per run

use std::fs::File;
use std::path::Path;

use csv::Writer;
use tracing::debug;

use crate::writer::ReportWriter;
use crate::{OutputResult, StationReportRow, TotalsRow};

/// Writes simulation results to two CSV files.
pub struct CsvReport {
    stations: Writer<File>,
    totals:   Writer<File>,
    finished: bool,
}

impl CsvReport {
    /// Create (or truncate) the two CSV files in `dir` and write the header
    /// rows.  `dir` must exist.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut stations = Writer::from_path(dir.join("station_results.csv"))?;
        stations.write_record([
            "run",
            "station",
            "customers",
            "served",
            "avg_wait_secs",
            "max_wait_secs",
            "max_queue_length",
            "avg_checkout_secs",
            "idle_secs",
        ])?;

        let mut totals = Writer::from_path(dir.join("run_totals.csv"))?;
        totals.write_record([
            "run",
            "stations",
            "customers",
            "served",
            "avg_wait_secs",
            "max_wait_secs",
            "max_queue_length",
            "avg_checkout_secs",
            "idle_secs",
        ])?;

        debug!(dir = %dir.display(), "CSV report opened");
        Ok(Self { stations, totals, finished: false })
    }
}

impl ReportWriter for CsvReport {
    fn write_station_rows(&mut self, run: &str, rows: &[StationReportRow]) -> OutputResult<()> {
        for row in rows {
            self.stations.write_record(&[
                run.to_owned(),
                row.station.clone(),
                row.customers.to_string(),
                row.served.to_string(),
                format!("{:.2}", row.avg_wait_secs),
                row.max_wait_secs.to_string(),
                row.max_queue_length.to_string(),
                format!("{:.2}", row.avg_checkout_secs),
                row.idle_secs.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_totals(&mut self, run: &str, totals: &TotalsRow) -> OutputResult<()> {
        self.totals.write_record(&[
            run.to_owned(),
            totals.stations.to_string(),
            totals.customers.to_string(),
            totals.served.to_string(),
            format!("{:.2}", totals.avg_wait_secs),
            totals.max_wait_secs.to_string(),
            totals.max_queue_length.to_string(),
            format!("{:.2}", totals.avg_checkout_secs),
            totals.idle_secs.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.stations.flush()?;
        self.totals.flush()?;
        Ok(())
    }
}
