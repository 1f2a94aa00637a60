//! Simulation observer trait for progress reporting and data collection.

use ck_core::{Customer, SimTime, StationId};
use ck_station::{Admission, Station};

/// Callbacks invoked by [`Supermarket::simulate`][crate::Supermarket::simulate]
/// at key points of the day.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — admission counter
///
/// ```rust,ignore
/// struct Counter { queued: usize }
///
/// impl SimObserver for Counter {
///     fn on_admit(&mut self, _c: &Customer, _s: StationId, a: Admission) {
///         if matches!(a, Admission::Queued { .. }) {
///             self.queued += 1;
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called once after every station has been restarted at `open`.
    fn on_open(&mut self, _open: SimTime, _stations: &[Station]) {}

    /// Called after the chosen station has admitted `customer`.
    fn on_admit(&mut self, _customer: &Customer, _station: StationId, _admission: Admission) {}

    /// Called once after the overtime drain and correction.
    ///
    /// Provides read-only access to the final station state so that report
    /// writers can record results without the driver knowing any format.
    fn on_close(&mut self, _closing: SimTime, _stations: &[Station]) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call
/// `simulate` but don't want callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
