//! Unit and integration tests for ck-output.

use ck_core::{Customer, CustomerId, ProductId, SimConfig, SimTime};
use ck_sim::{ShortestExpectedWait, SupermarketBuilder};
use ck_station::Station;

use crate::{StationReportRow, TotalsRow};

// ── Helpers ───────────────────────────────────────────────────────────────────

const NINE: SimTime = SimTime::from_hms(9, 0, 0);

fn cust(id: u32, secs: u64, zip: &str, lines: &[(u32, u32)]) -> Customer {
    lines.iter().fold(
        Customer::new(CustomerId(id), NINE.offset(secs), zip),
        |c, &(product, amount)| c.with_purchase(ProductId(product), amount),
    )
}

fn row(name: &str, served: usize, avg_wait: f64, max_wait: u64, idle: i64) -> StationReportRow {
    StationReportRow {
        station:           name.to_owned(),
        customers:         served,
        served,
        started:           served,
        avg_wait_secs:     avg_wait,
        max_wait_secs:     max_wait,
        max_queue_length:  served.min(3),
        avg_checkout_secs: 30.0,
        idle_secs:         idle,
    }
}

/// A (2 items) at 09:00:00, B (0 items) at 09:00:05, C (3 items) at 09:00:10
/// through one FIFO station; open until 09:10.
fn scenario_station() -> Station {
    let config = SimConfig::new(NINE, NINE.offset(600));
    let mut market = SupermarketBuilder::new(config, ShortestExpectedWait)
        .station(Station::fifo("FIFO"))
        .build()
        .unwrap();
    let customers = [cust(0, 0, "1013AD", &[(0, 2)]), cust(1, 5, "1013AD", &[]), cust(2, 10, "1014BE", &[(1, 3)])];
    market.simulate(&customers, &mut ck_sim::NoopObserver).unwrap();
    market.into_stations().remove(0)
}

// ── Rows ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod rows {
    use super::*;

    #[test]
    fn station_row_reads_final_state() {
        let r = StationReportRow::from_station(&scenario_station());
        assert_eq!(r.station, "FIFO");
        assert_eq!(r.customers, 2);
        assert_eq!(r.served, 2);
        assert_eq!(r.started, 2);
        assert!((r.avg_wait_secs - 7.0).abs() < 1e-9);
        assert_eq!(r.max_wait_secs, 14);
        assert_eq!(r.max_queue_length, 2);
        assert!((r.avg_checkout_secs - 25.0).abs() < 1e-9);
        assert_eq!(r.idle_secs, 550);
    }

    #[test]
    fn totals_weight_by_served_customers() {
        let rows = [row("A", 1, 10.0, 10, 100), row("B", 3, 30.0, 50, -20)];
        let t = TotalsRow::from_rows(&rows);
        assert_eq!(t.stations, 2);
        assert_eq!(t.customers, 4);
        assert_eq!(t.served, 4);
        assert!((t.avg_wait_secs - 25.0).abs() < 1e-9);
        assert!((t.avg_checkout_secs - 30.0).abs() < 1e-9);
        assert_eq!(t.max_wait_secs, 50);
        assert_eq!(t.max_queue_length, 3);
        assert_eq!(t.idle_secs, 80);
    }

    #[test]
    fn totals_count_the_wait_of_the_customer_in_service() {
        // Customer 0 done at 09:00:24, customer 1 in service since then.
        let mut station = Station::fifo("F");
        station.restart(NINE);
        station.admit(&cust(0, 0, "1013AD", &[(0, 2)])).unwrap();
        station.admit(&cust(1, 0, "1013AD", &[(0, 2)])).unwrap();
        station.advance_to(NINE.offset(30)).unwrap();

        let busy = StationReportRow::from_station(&station);
        assert_eq!((busy.served, busy.started), (1, 2));
        assert!((busy.avg_wait_secs - 12.0).abs() < 1e-9);

        let t = TotalsRow::from_rows(&[busy, row("B", 1, 30.0, 30, 0)]);
        assert!((t.avg_wait_secs - (12.0 * 2.0 + 30.0) / 3.0).abs() < 1e-9);
        assert!((t.avg_checkout_secs - 27.0).abs() < 1e-9);
    }

    #[test]
    fn totals_of_an_idle_day_are_zero() {
        let t = TotalsRow::from_rows(&[row("A", 0, 0.0, 0, 600)]);
        assert_eq!(t.avg_wait_secs, 0.0);
        assert_eq!(t.avg_checkout_secs, 0.0);
        assert_eq!(t.idle_secs, 600);

        let none = TotalsRow::from_rows(&[]);
        assert_eq!(none.stations, 0);
        assert_eq!(none.max_wait_secs, 0);
    }
}

// ── Customer statistics ───────────────────────────────────────────────────────

#[cfg(test)]
mod stats {
    use super::*;
    use crate::{CustomerStats, TopProduct};

    #[test]
    fn counts_and_most_bought_per_zip() {
        let customers = [
            cust(0, 0, "1014BE", &[(0, 2), (1, 1)]),
            cust(1, 0, "1013AD", &[(2, 4)]),
            cust(2, 0, "1014BE", &[(1, 3)]),
            cust(3, 0, "1015CF", &[]),
        ];
        let s = CustomerStats::from_customers(&customers);
        assert_eq!(s.customers, 4);
        assert_eq!(s.total_items, 10);
        assert_eq!(s.distinct_products, 3);

        let zips: Vec<&str> = s.most_bought.keys().map(String::as_str).collect();
        assert_eq!(zips, ["1013AD", "1014BE"], "ordered, empty baskets absent");
        assert_eq!(s.most_bought["1014BE"], TopProduct { product: ProductId(1), amount: 4 });
    }

    #[test]
    fn ties_go_to_the_lower_product_id() {
        let customers = [cust(0, 0, "1016DG", &[(5, 2), (3, 2), (4, 1)])];
        let s = CustomerStats::from_customers(&customers);
        assert_eq!(s.most_bought["1016DG"].product, ProductId(3));
    }

    #[test]
    fn empty_population() {
        let s = CustomerStats::from_customers(&[]);
        assert_eq!(s.customers, 0);
        assert_eq!(s.total_items, 0);
        assert!(s.most_bought.is_empty());
    }
}

// ── CSV backend ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use super::*;
    use crate::writer::ReportWriter;
    use crate::CsvReport;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn csv_files_created_with_headers() {
        let dir = tmp();
        let mut w = CsvReport::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("station_results.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(
            headers,
            [
                "run",
                "station",
                "customers",
                "served",
                "avg_wait_secs",
                "max_wait_secs",
                "max_queue_length",
                "avg_checkout_secs",
                "idle_secs",
            ]
        );
        assert!(dir.path().join("run_totals.csv").exists());
    }

    #[test]
    fn csv_station_rows_are_rounded() {
        let dir = tmp();
        let mut w = CsvReport::new(dir.path()).unwrap();
        w.write_station_rows("mixed", &[row("FIFO", 3, 12.346, 40, -5), row("PRIO", 2, 1.0, 2, 7)])
            .unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("station_results.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "mixed");
        assert_eq!(&rows[0][1], "FIFO");
        assert_eq!(&rows[0][4], "12.35");
        assert_eq!(&rows[0][8], "-5");
        assert_eq!(&rows[1][1], "PRIO");
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvReport::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tmp();
        assert!(CsvReport::new(&dir.path().join("absent")).is_err());
    }
}

// ── Text backend ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod text {
    use super::*;
    use crate::writer::ReportWriter;
    use crate::{CustomerStats, TextReport, write_customer_stats};
    use ck_core::Product;

    #[test]
    fn table_lists_every_station_and_the_total() {
        let mut w = TextReport::new(Vec::new());
        let rows = [row("FIFO-1", 3, 12.346, 40, 100), row("PRIO", 1, 2.0, 2, 50)];
        w.write_station_rows("custom", &rows).unwrap();
        w.write_totals("custom", &TotalsRow::from_rows(&rows)).unwrap();
        w.finish().unwrap();

        let out = String::from_utf8(w.into_inner()).unwrap();
        assert!(out.contains("Simulation results: custom"));
        let fifo = out.lines().find(|l| l.starts_with("FIFO-1")).unwrap();
        assert!(fifo.contains("12.35"));
        let total = out.lines().find(|l| l.starts_with("total")).unwrap();
        assert!(total.contains("150"));
    }

    #[test]
    fn customer_stats_resolve_product_names() {
        let products = [Product::new(ProductId(0), "B001", "Croissant")];
        let customers = [cust(0, 0, "1013AD", &[(0, 2)])];
        let stats = CustomerStats::from_customers(&customers);
        let config = SimConfig::new(NINE, NINE.offset(600));

        let mut out = Vec::new();
        write_customer_stats(&mut out, "demo", &config, &products, &stats).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("'demo' between 09:00:00 and 09:10:00"));
        assert!(out.contains("1 customers have shopped 2 items out of 1 different products"));
        assert!(out.contains("1013AD: Croissant (2 units)"));
    }

    #[test]
    fn customer_stats_without_customers() {
        let config = SimConfig::new(NINE, NINE.offset(600));
        let mut out = Vec::new();
        write_customer_stats(&mut out, "empty", &config, &[], &CustomerStats::from_customers(&[]))
            .unwrap();
        assert!(String::from_utf8(out).unwrap().contains("No products or customers"));
    }
}

// ── Observer ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod observer {
    use super::*;
    use crate::writer::ReportWriter;
    use crate::{CsvReport, OutputError, OutputResult, ReportObserver, TextReport};

    /// Fails every write with an I/O error.
    struct Broken {
        attempts: usize,
    }

    impl ReportWriter for Broken {
        fn write_station_rows(&mut self, _run: &str, _rows: &[StationReportRow]) -> OutputResult<()> {
            self.attempts += 1;
            Err(std::io::Error::other("disk full").into())
        }

        fn write_totals(&mut self, _run: &str, _totals: &TotalsRow) -> OutputResult<()> {
            self.attempts += 1;
            Err(std::io::Error::other("still full").into())
        }

        fn finish(&mut self) -> OutputResult<()> {
            Ok(())
        }
    }

    fn run_presets<W: ReportWriter>(obs: &mut ReportObserver<W>) {
        let config = SimConfig::new(NINE, NINE.offset(600));
        let customers: Vec<Customer> =
            (0..10).map(|i| cust(i, u64::from(i) * 5, "1013AD", &[(0, i + 1)])).collect();

        for (run, stations) in [
            ("fifo", vec![Station::fifo("FIFO")]),
            ("mixed", vec![Station::fifo("FIFO"), Station::priority("PRIO", 5)]),
        ] {
            let mut market = SupermarketBuilder::new(config, ShortestExpectedWait)
                .stations(stations)
                .build()
                .unwrap();
            obs.begin_run(run);
            market.simulate(&customers, &mut *obs).unwrap();
        }
    }

    #[test]
    fn integration_csv() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let mut obs = ReportObserver::new(CsvReport::new(dir.path()).unwrap());
        run_presets(&mut obs);
        assert!(obs.take_error().is_none(), "no write errors expected");
        obs.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("station_results.csv")).unwrap();
        let runs: Vec<String> = rdr.records().map(|r| r.unwrap()[0].to_owned()).collect();
        assert_eq!(runs, ["fifo", "mixed", "mixed"]);

        let mut rdr = csv::Reader::from_path(dir.path().join("run_totals.csv")).unwrap();
        let totals: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(totals.len(), 2);
        assert_eq!(&totals[0][2], "10", "every customer is counted once");
        assert_eq!(&totals[1][2], "10");
    }

    #[test]
    fn first_error_is_kept() {
        let mut obs = ReportObserver::new(Broken { attempts: 0 });
        run_presets(&mut obs);
        match obs.finish() {
            Err(OutputError::Io(e)) => assert_eq!(e.to_string(), "disk full"),
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => panic!("expected the stored error"),
        }
    }

    #[test]
    fn pair_writes_csv_and_text() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let pair = (CsvReport::new(dir.path()).unwrap(), TextReport::new(Vec::new()));
        let mut obs = ReportObserver::new(pair);
        run_presets(&mut obs);
        let (_csv, text) = obs.finish().unwrap();

        let text = String::from_utf8(text.into_inner()).unwrap();
        assert!(text.contains("Simulation results: fifo"));
        assert!(text.contains("Simulation results: mixed"));
        let mut rdr = csv::Reader::from_path(dir.path().join("run_totals.csv")).unwrap();
        assert_eq!(rdr.records().count(), 2);
    }

    #[test]
    fn writer_sees_every_run() {
        let mut obs = ReportObserver::new(Broken { attempts: 0 });
        run_presets(&mut obs);
        assert!(obs.take_error().is_some());
        assert!(obs.take_error().is_none());
        assert_eq!(obs.into_writer().attempts, 4);
    }
}
