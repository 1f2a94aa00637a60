//! Routing: which station does an arriving customer join?

use ck_core::{Customer, StationId};
use ck_station::Station;

/// Picks the destination station for one customer.
///
/// Called once per customer, after every station has been advanced to the
/// customer's arrival instant.  Implementations get a read-only view of the
/// stations and must return the index of a member of `stations`; returning
/// `None` or an out-of-range id aborts the run with
/// [`SimError::InvalidChoice`][crate::SimError::InvalidChoice].
///
/// Any `Fn(&Customer, &[Station]) -> Option<StationId>` is a chooser, which
/// keeps one-off routing rules in tests short.
pub trait StationChooser {
    fn select(&self, customer: &Customer, stations: &[Station]) -> Option<StationId>;
}

impl<F> StationChooser for F
where
    F: Fn(&Customer, &[Station]) -> Option<StationId>,
{
    fn select(&self, customer: &Customer, stations: &[Station]) -> Option<StationId> {
        self(customer, stations)
    }
}

/// The shopper's own heuristic: join the station with the lowest expected
/// wait.  Ties go to the station listed first.
#[derive(Copy, Clone, Debug, Default)]
pub struct ShortestExpectedWait;

impl StationChooser for ShortestExpectedWait {
    fn select(&self, customer: &Customer, stations: &[Station]) -> Option<StationId> {
        stations
            .iter()
            .enumerate()
            .min_by_key(|(_, s)| s.expected_wait_time(customer))
            .and_then(|(i, _)| StationId::try_from(i).ok())
    }
}
