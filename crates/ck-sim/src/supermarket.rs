//! The `Supermarket` struct and its one-day simulation loop.

use ck_core::{Customer, SimConfig, SimTime, StationId};
use ck_station::Station;
use tracing::{debug, info};

use crate::{SimError, SimObserver, SimResult, StationChooser};

/// Return references to `customers` in non-decreasing arrival order.
///
/// The sort is stable: customers arriving in the same second keep their input
/// order.  The input slice is left untouched.
pub fn sort_by_arrival(customers: &[Customer]) -> Vec<&Customer> {
    let mut ordered: Vec<&Customer> = customers.iter().collect();
    ordered.sort_by_key(|c| c.arrival);
    ordered
}

/// A checkout floor: opening hours, a set of stations, and a routing rule.
///
/// Created via [`SupermarketBuilder`][crate::SupermarketBuilder].  The same
/// `Supermarket` may be simulated any number of times; every call to
/// [`simulate`](Self::simulate) restarts all stations first.
pub struct Supermarket<C: StationChooser> {
    pub(crate) config:   SimConfig,
    pub(crate) chooser:  C,
    pub(crate) stations: Vec<Station>,
}

impl<C: StationChooser> Supermarket<C> {
    /// Simulate one day for `customers`.
    ///
    /// Per customer, in arrival order:
    ///
    /// 1. every station advances to the arrival instant,
    /// 2. the chooser picks a station from the advanced state,
    /// 3. that station admits the customer.
    ///
    /// After the last customer every station drains until
    /// `closing + overtime_secs` and removes the overtime window from its
    /// clock and time-at-work.
    ///
    /// A customer arriving before opening, or after `closing + overtime_secs`,
    /// surfaces as [`StationError::TimeReversal`][ck_station::StationError].
    pub fn simulate<O: SimObserver>(
        &mut self,
        customers: &[Customer],
        observer: &mut O,
    ) -> SimResult<()> {
        let open = self.config.open;
        for station in &mut self.stations {
            station.restart(open);
            debug!(station = station.name(), discipline = station.discipline().kind(), "station ready");
        }
        observer.on_open(open, &self.stations);

        let ordered = sort_by_arrival(customers);
        info!(
            customers = ordered.len(),
            stations = self.stations.len(),
            open = %open,
            closing = %self.config.closing,
            "simulation started"
        );

        for customer in ordered {
            self.advance_all(customer.arrival)?;

            let choice = self.chooser.select(customer, &self.stations);
            let index = match choice {
                Some(id) if id.index() < self.stations.len() => id,
                _ => {
                    return Err(SimError::InvalidChoice {
                        customer: customer.id,
                        choice,
                        stations: self.stations.len(),
                    });
                }
            };

            let admission = self.stations[index.index()].admit(customer)?;
            debug!(customer = %customer.id, station = %index, ?admission, "routed");
            observer.on_admit(customer, index, admission);
        }

        let closing = self.config.closing;
        let overtime = self.config.overtime_secs;
        for station in &mut self.stations {
            station.finish_day(closing, overtime)?;
        }
        info!(
            served = self.stations.iter().map(Station::customers_served).sum::<usize>(),
            drained_until = %self.config.drain_until(),
            "simulation finished"
        );
        observer.on_close(closing, &self.stations);
        Ok(())
    }

    /// Bring every station's clock to `at`.
    ///
    /// With the `parallel` feature the stations advance on Rayon's pool; they
    /// share no state, so the outcome is identical to the sequential path.
    fn advance_all(&mut self, at: SimTime) -> SimResult<()> {
        #[cfg(not(feature = "parallel"))]
        {
            for station in &mut self.stations {
                station.advance_to(at)?;
            }
            Ok(())
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            self.stations
                .par_iter_mut()
                .try_for_each(|station| station.advance_to(at))
                .map_err(SimError::from)
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn chooser(&self) -> &C {
        &self.chooser
    }

    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    pub fn station(&self, id: StationId) -> Option<&Station> {
        self.stations.get(id.index())
    }

    /// Consume the supermarket and hand back its stations.
    pub fn into_stations(self) -> Vec<Station> {
        self.stations
    }
}
