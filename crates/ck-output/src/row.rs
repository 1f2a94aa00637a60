//! Plain data row types written by report backends.

use ck_station::Station;

/// End-of-day results of one station.
#[derive(Debug, Clone, PartialEq)]
pub struct StationReportRow {
    pub station:           String,
    /// Customers admitted (empty-handed passers-by excluded).
    pub customers:         usize,
    /// Customers whose checkout completed.
    pub served:            usize,
    /// Customers whose checkout began, the one still in service included.
    /// Each contributes one sample to `avg_wait_secs`.
    pub started:           usize,
    pub avg_wait_secs:     f64,
    pub max_wait_secs:     u64,
    /// Deepest queue observed, the customer in service included.
    pub max_queue_length:  usize,
    pub avg_checkout_secs: f64,
    /// Opening time minus work time; negative when overtime work exceeded the
    /// idle time before closing.
    pub idle_secs:         i64,
}

impl StationReportRow {
    pub fn from_station(station: &Station) -> Self {
        Self {
            station:           station.name().to_owned(),
            customers:         station.total_customers(),
            served:            station.customers_served(),
            started:           station.waiting_times().len(),
            avg_wait_secs:     station.average_waiting_time(),
            max_wait_secs:     station.max_waiting_time(),
            max_queue_length:  station.max_queue_length(),
            avg_checkout_secs: station.average_checkout_time(),
            idle_secs:         station.total_idle_time(),
        }
    }
}

/// The same figures across all stations of a run.
///
/// Averages are weighted by the number of samples behind them (`started` for
/// waits, `served` for checkout times), maxima are taken over stations,
/// counts and idle time are summed.
#[derive(Debug, Clone, PartialEq)]
pub struct TotalsRow {
    pub stations:          usize,
    pub customers:         usize,
    pub served:            usize,
    pub avg_wait_secs:     f64,
    pub max_wait_secs:     u64,
    pub max_queue_length:  usize,
    pub avg_checkout_secs: f64,
    pub idle_secs:         i64,
}

impl TotalsRow {
    pub fn from_rows(rows: &[StationReportRow]) -> Self {
        let served: usize = rows.iter().map(|r| r.served).sum();
        let weighted = |value: fn(&StationReportRow) -> f64, weight: fn(&StationReportRow) -> usize| {
            let samples: usize = rows.iter().map(weight).sum();
            if samples == 0 {
                return 0.0;
            }
            rows.iter().map(|r| value(r) * weight(r) as f64).sum::<f64>() / samples as f64
        };

        Self {
            stations:          rows.len(),
            customers:         rows.iter().map(|r| r.customers).sum(),
            served,
            avg_wait_secs:     weighted(|r| r.avg_wait_secs, |r| r.started),
            max_wait_secs:     rows.iter().map(|r| r.max_wait_secs).max().unwrap_or(0),
            max_queue_length:  rows.iter().map(|r| r.max_queue_length).max().unwrap_or(0),
            avg_checkout_secs: weighted(|r| r.avg_checkout_secs, |r| r.served),
            idle_secs:         rows.iter().map(|r| r.idle_secs).sum(),
        }
    }
}
