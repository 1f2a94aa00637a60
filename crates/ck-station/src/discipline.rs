//! The `Discipline` trait — the extension point for queue policies.

use std::collections::VecDeque;
use std::fmt;

use crate::{ServiceModel, Ticket};

/// Pluggable queue admission policy.
///
/// A discipline decides where a newly admitted customer is placed in the
/// waiting queue.  It never touches the queue itself: [`Station`] performs
/// the insert and all time accounting.
///
/// # Required methods
///
/// [`kind`][Self::kind] and [`insertion_index`][Self::insertion_index].
/// [`service_time`][Self::service_time] defaults to the station's
/// [`ServiceModel`]; override it for stations that check out at a different
/// pace (e.g. self-scan lanes).
///
/// # Contract
///
/// `insertion_index` must be a pure function of its arguments and return a
/// value in `0..=queue.len()`.  The station relies on it for both admission
/// and the expected-wait estimate.
///
/// [`Station`]: crate::Station
pub trait Discipline: fmt::Debug + Send + Sync + 'static {
    /// Short label for reports and logs (`"fifo"`, `"priority"`, …).
    fn kind(&self) -> &'static str;

    /// Index at which a customer with `items` items would be inserted into
    /// `queue` if admitted now.  `queue.len()` means "append at the tail".
    fn insertion_index(&self, queue: &VecDeque<Ticket>, items: u32) -> usize;

    /// Checkout time of a customer with `items` items at this station.
    fn service_time(&self, model: &ServiceModel, items: u32) -> u64 {
        model.service_time(items)
    }
}
