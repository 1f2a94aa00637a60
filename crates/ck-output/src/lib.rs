//! `ck-output` — reports for the checkout simulator.
//!
//! Two backends implement [`ReportWriter`]:
//!
//! | Backend        | Destination                                           |
//! |----------------|-------------------------------------------------------|
//! | [`CsvReport`]  | `station_results.csv`, `run_totals.csv` in a directory |
//! | [`TextReport`] | aligned table on any `io::Write` (usually stdout)     |
//!
//! Both are driven by [`ReportObserver`], which implements
//! `ck_sim::SimObserver` and turns the final station state of each run into
//! [`StationReportRow`]s plus one [`TotalsRow`].
//!
//! [`CustomerStats`] summarises the input side (customers, items, most
//! bought product per zip code) and needs no simulation at all.
//!
//! # Usage
//!
//! ```rust,ignore
//! use ck_output::{CsvReport, ReportObserver};
//!
//! let mut obs = ReportObserver::new(CsvReport::new(Path::new("./output"))?);
//! obs.begin_run("FIFO");
//! market.simulate(&customers, &mut obs)?;
//! let writer = obs.finish()?;
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod stats;
pub mod text;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvReport;
pub use error::{OutputError, OutputResult};
pub use observer::ReportObserver;
pub use row::{StationReportRow, TotalsRow};
pub use stats::{CustomerStats, TopProduct};
pub use text::{TextReport, write_customer_stats};
pub use writer::ReportWriter;
