//! Plain-text report backend, for terminals and logs.

use std::io::Write;

use ck_core::{Product, SimConfig};

use crate::writer::ReportWriter;
use crate::{CustomerStats, OutputResult, StationReportRow, TotalsRow};

/// Writes each run as an aligned table to any `io::Write`.
///
/// ```text
/// Simulation results: mixed
/// station      customers  avg-wait  max-wait  max-queue  avg-checkout     idle
/// FIFO               117     31.40       188          5         35.12    17230
/// PRIO               133     24.97       160          4         27.05    20148
/// total              250     27.99       188          5         30.82    37378
/// ```
pub struct TextReport<W: Write> {
    out:      W,
    finished: bool,
}

impl<W: Write> TextReport<W> {
    pub fn new(out: W) -> Self {
        Self { out, finished: false }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ReportWriter for TextReport<W> {
    fn write_station_rows(&mut self, run: &str, rows: &[StationReportRow]) -> OutputResult<()> {
        writeln!(self.out, "\nSimulation results: {run}")?;
        writeln!(
            self.out,
            "{:<12} {:>10} {:>9} {:>9} {:>10} {:>13} {:>8}",
            "station", "customers", "avg-wait", "max-wait", "max-queue", "avg-checkout", "idle"
        )?;
        for r in rows {
            writeln!(
                self.out,
                "{:<12} {:>10} {:>9.2} {:>9} {:>10} {:>13.2} {:>8}",
                r.station,
                r.customers,
                r.avg_wait_secs,
                r.max_wait_secs,
                r.max_queue_length,
                r.avg_checkout_secs,
                r.idle_secs
            )?;
        }
        Ok(())
    }

    fn write_totals(&mut self, _run: &str, t: &TotalsRow) -> OutputResult<()> {
        writeln!(
            self.out,
            "{:<12} {:>10} {:>9.2} {:>9} {:>10} {:>13.2} {:>8}",
            "total",
            t.customers,
            t.avg_wait_secs,
            t.max_wait_secs,
            t.max_queue_length,
            t.avg_checkout_secs,
            t.idle_secs
        )?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.out.flush()?;
        Ok(())
    }
}

/// Print the input-side summary of a scenario.
///
/// Product ids in `stats` are resolved against `products`; ids outside the
/// catalogue print as the raw id.
pub fn write_customer_stats<W: Write>(
    out: &mut W,
    name: &str,
    config: &SimConfig,
    products: &[Product],
    stats: &CustomerStats,
) -> OutputResult<()> {
    writeln!(out, "\nCustomer statistics of '{name}' between {} and {}", config.open, config.closing)?;
    if stats.customers == 0 || products.is_empty() {
        writeln!(out, "No products or customers have been set up...")?;
        return Ok(());
    }
    writeln!(
        out,
        "{} customers have shopped {} items out of {} different products",
        stats.customers, stats.total_items, stats.distinct_products
    )?;
    writeln!(out, "Most bought product per zip code:")?;
    for (zip, top) in &stats.most_bought {
        match products.get(top.product.index()) {
            Some(p) => writeln!(out, "\t{zip}: {} ({} units)", p.description, top.amount)?,
            None => writeln!(out, "\t{zip}: {} ({} units)", top.product, top.amount)?,
        }
    }
    Ok(())
}
