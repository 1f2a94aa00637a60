//! The `Station` engine and its time-advancement algorithm.

use std::collections::VecDeque;

use ck_core::{Customer, CustomerId, SimTime};
use tracing::{debug, trace, warn};

use crate::{Discipline, Fifo, Priority, ServiceModel, StationError, StationResult, Ticket};

// ── Phase ─────────────────────────────────────────────────────────────────────

/// Lifecycle of a station within and across runs.
///
/// ```text
/// Uninitialized ──restart──▶ Ready ──admit/advance──▶ Working ⇄ Idle
///                              ▲                          │
///                              └─────────restart──────────┘
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StationPhase {
    /// Constructed but never restarted; every mutating call fails.
    Uninitialized,
    /// Restarted at the opening instant, nothing has happened yet.
    Ready,
    /// Nobody in service and nobody waiting.
    Idle,
    /// Serving a customer or holding a non-empty queue.
    Working,
}

/// Outcome of [`Station::admit`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Admission {
    /// Customer had no items and walked past without queueing.
    PassedThrough,
    /// Customer was inserted at `position` (0 = head of the waiting queue).
    Queued { position: usize },
}

// ── Station ───────────────────────────────────────────────────────────────────

/// A checkout station: one clock, one waiting queue, at most one customer in
/// service, and the running statistics of the current run.
///
/// The queue policy is injected as a boxed [`Discipline`]; everything else
/// (time accounting, statistics) is shared by every variant.
#[derive(Debug)]
pub struct Station {
    name:       String,
    discipline: Box<dyn Discipline>,
    service:    ServiceModel,
    phase:      StationPhase,

    clock:      SimTime,
    queue:      VecDeque<Ticket>,
    in_service: Option<Ticket>,
    /// Seconds already spent on the in-service ticket.
    worked:     u64,

    total_at_work:    u64,
    total_work_time:  u64,
    total_idle_time:  i64,
    max_queue_length: usize,
    total_customers:  usize,
    waiting_times:    Vec<u64>,
    /// Customers admitted this run, in admission order.
    history:          Vec<CustomerId>,
}

impl Station {
    /// A station using `discipline` and the default [`ServiceModel`].
    ///
    /// The station starts [`Uninitialized`][StationPhase::Uninitialized];
    /// call [`restart`][Self::restart] before using it.
    pub fn new(name: impl Into<String>, discipline: impl Discipline) -> Self {
        Self::with_boxed(name, Box::new(discipline))
    }

    pub fn with_boxed(name: impl Into<String>, discipline: Box<dyn Discipline>) -> Self {
        Self {
            name: name.into(),
            discipline,
            service: ServiceModel::default(),
            phase: StationPhase::Uninitialized,
            clock: SimTime::MIDNIGHT,
            queue: VecDeque::new(),
            in_service: None,
            worked: 0,
            total_at_work: 0,
            total_work_time: 0,
            total_idle_time: 0,
            max_queue_length: 0,
            total_customers: 0,
            waiting_times: Vec::new(),
            history: Vec::new(),
        }
    }

    /// Strict arrival-order station.
    pub fn fifo(name: impl Into<String>) -> Self {
        Self::new(name, Fifo)
    }

    /// Express-lane station with the given short-basket threshold.
    pub fn priority(name: impl Into<String>, max_priority_items: u32) -> Self {
        Self::new(name, Priority::new(max_priority_items))
    }

    /// Replace the checkout-time model.
    pub fn with_service_model(mut self, service: ServiceModel) -> Self {
        self.service = service;
        self
    }

    // ── Lifecycle ─────────────────────────────────────────────────────────

    /// Reset the clock to `open` and clear all queues and statistics.
    pub fn restart(&mut self, open: SimTime) {
        self.clock = open;
        self.queue.clear();
        self.in_service = None;
        self.worked = 0;
        self.total_at_work = 0;
        self.total_work_time = 0;
        self.total_idle_time = 0;
        self.max_queue_length = 0;
        self.total_customers = 0;
        self.waiting_times.clear();
        self.history.clear();
        self.phase = StationPhase::Ready;
    }

    // ── Estimates ─────────────────────────────────────────────────────────

    /// Checkout time of a customer with `items` items at this station.
    #[inline]
    pub fn expected_service_time(&self, items: u32) -> u64 {
        self.discipline.service_time(&self.service, items)
    }

    /// How long `customer` would wait before being served if admitted now.
    ///
    /// Counts the remaining work on the in-service customer plus every queued
    /// ticket that would stay ahead of `customer` under this station's
    /// discipline.  Customers without items never wait.
    pub fn expected_wait_time(&self, customer: &Customer) -> u64 {
        let items = customer.number_of_items();
        if items == 0 {
            return 0;
        }
        let ahead = self.discipline.insertion_index(&self.queue, items);
        let queued: u64 = self
            .queue
            .iter()
            .take(ahead)
            .map(|t| self.expected_service_time(t.items))
            .sum();
        self.remaining_in_service() + queued
    }

    fn remaining_in_service(&self) -> u64 {
        self.in_service
            .map(|t| self.expected_service_time(t.items).saturating_sub(self.worked))
            .unwrap_or(0)
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Put `customer` in the waiting queue at the position the discipline
    /// chooses.  Customers without items pass through untouched.
    ///
    /// The ticket is stamped with the station's current clock; callers
    /// advance the station to the arrival instant first.
    pub fn admit(&mut self, customer: &Customer) -> StationResult<Admission> {
        self.ensure_started()?;

        let ticket = Ticket::new(customer, self.clock);
        if ticket.items == 0 {
            trace!(station = %self.name, customer = %customer.id, "empty basket passes through");
            return Ok(Admission::PassedThrough);
        }

        let position = self
            .discipline
            .insertion_index(&self.queue, ticket.items)
            .min(self.queue.len());
        self.queue.insert(position, ticket);
        self.total_customers += 1;
        self.history.push(customer.id);
        self.refresh_max_queue_length();
        self.phase = StationPhase::Working;

        trace!(
            station  = %self.name,
            customer = %customer.id,
            items    = ticket.items,
            position,
            "admitted"
        );
        Ok(Admission::Queued { position })
    }

    /// Let the station work until `target`.
    ///
    /// Finishes or continues the in-service customer, then serves queued
    /// customers head-first until the elapsed time is used up.  Each customer
    /// gets exactly one wait-time sample, taken at the instant their service
    /// begins.
    ///
    /// # Errors
    /// [`StationError::TimeReversal`] if `target` is before the station
    /// clock; [`StationError::NotStarted`] before the first restart.  Neither
    /// changes any state.
    pub fn advance_to(&mut self, target: SimTime) -> StationResult<()> {
        self.ensure_started()?;
        let mut elapsed = target
            .checked_since(self.clock)
            .ok_or_else(|| StationError::TimeReversal {
                station: self.name.clone(),
                clock:   self.clock,
                target,
            })?;

        self.total_at_work += elapsed;
        // Instant up to which work has been accounted for in this call.
        let mut now = self.clock;
        let mut started = 0usize;

        // ── Continue or finish the in-service customer ───────────────────
        if let Some(ticket) = self.in_service {
            let required = self.expected_service_time(ticket.items);
            let remaining = required.saturating_sub(self.worked);
            if elapsed < remaining {
                self.worked += elapsed;
                self.total_work_time += elapsed;
                self.settle(target);
                return Ok(());
            }
            elapsed -= remaining;
            now = now + remaining;
            self.total_work_time += remaining;
            self.in_service = None;
            self.worked = 0;
        }

        // ── Drain the queue head-first ───────────────────────────────────
        while elapsed > 0 {
            let Some(ticket) = self.queue.pop_front() else {
                break;
            };
            if ticket.items == 0 {
                warn!(station = %self.name, customer = %ticket.customer, "dropping empty ticket");
                continue;
            }

            let required = self.expected_service_time(ticket.items);
            self.waiting_times.push(now.since(ticket.queued_at));
            started += 1;

            // A checkout that exactly fills the remaining time stays in
            // service; the next advance, even a zero-length one, completes it.
            if elapsed > required {
                elapsed -= required;
                now = now + required;
                self.total_work_time += required;
            } else {
                self.worked = elapsed;
                self.total_work_time += elapsed;
                self.in_service = Some(ticket);
                break;
            }
        }

        self.settle(target);
        debug!(
            station = %self.name,
            clock   = %self.clock,
            started,
            waiting = self.queue.len(),
            "advanced"
        );
        Ok(())
    }

    /// Close the day: drain until `closing + overtime_secs`, then remove the
    /// overtime window from the clock and from the time-at-work and idle
    /// counters.  Overtime only lets in-flight checkouts finish; it is never
    /// reported as opening time.
    pub fn finish_day(&mut self, closing: SimTime, overtime_secs: u64) -> StationResult<()> {
        self.advance_to(closing.offset(overtime_secs))?;
        self.clock = self.clock.rewind(overtime_secs);
        self.total_at_work = self.total_at_work.saturating_sub(overtime_secs);
        self.total_idle_time = self.total_at_work as i64 - self.total_work_time as i64;
        Ok(())
    }

    fn settle(&mut self, target: SimTime) {
        self.clock = target;
        self.total_idle_time = self.total_at_work as i64 - self.total_work_time as i64;
        self.refresh_max_queue_length();
        self.phase = if self.in_service.is_some() || !self.queue.is_empty() {
            StationPhase::Working
        } else {
            StationPhase::Idle
        };
    }

    fn refresh_max_queue_length(&mut self) {
        let depth = self.queue.len() + usize::from(self.in_service.is_some());
        self.max_queue_length = self.max_queue_length.max(depth);
    }

    fn ensure_started(&self) -> StationResult<()> {
        if self.phase == StationPhase::Uninitialized {
            return Err(StationError::NotStarted(self.name.clone()));
        }
        Ok(())
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn discipline(&self) -> &dyn Discipline {
        self.discipline.as_ref()
    }

    pub fn service_model(&self) -> ServiceModel {
        self.service
    }

    pub fn phase(&self) -> StationPhase {
        self.phase
    }

    pub fn clock(&self) -> SimTime {
        self.clock
    }

    /// Customers waiting, head first.  Does not include the in-service one.
    pub fn queue(&self) -> &VecDeque<Ticket> {
        &self.queue
    }

    pub fn in_service(&self) -> Option<&Ticket> {
        self.in_service.as_ref()
    }

    /// Seconds the clock has advanced since the last restart.
    pub fn total_at_work(&self) -> u64 {
        self.total_at_work
    }

    /// Seconds spent checking out customers, including the partial work on
    /// the one currently in service.
    pub fn total_work_time(&self) -> u64 {
        self.total_work_time
    }

    /// `total_at_work - total_work_time`.
    ///
    /// Negative only after [`finish_day`][Self::finish_day], when checkouts
    /// running into the overtime window took longer than all idle time
    /// before closing.
    pub fn total_idle_time(&self) -> i64 {
        self.total_idle_time
    }

    /// Largest observed number of waiting customers, counting the one in service.
    pub fn max_queue_length(&self) -> usize {
        self.max_queue_length
    }

    /// Customers admitted since the last restart (empty baskets excluded).
    pub fn total_customers(&self) -> usize {
        self.total_customers
    }

    /// One sample per customer whose service has begun, in service order.
    pub fn waiting_times(&self) -> &[u64] {
        &self.waiting_times
    }

    pub fn history(&self) -> &[CustomerId] {
        &self.history
    }

    /// Customers whose checkout has completed.
    pub fn customers_served(&self) -> usize {
        self.waiting_times.len() - usize::from(self.in_service.is_some())
    }

    /// Mean wait in seconds; `0.0` when nobody has been served yet.
    pub fn average_waiting_time(&self) -> f64 {
        if self.waiting_times.is_empty() {
            return 0.0;
        }
        self.waiting_times.iter().sum::<u64>() as f64 / self.waiting_times.len() as f64
    }

    /// Longest wait in seconds; `0` when nobody has been served yet.
    pub fn max_waiting_time(&self) -> u64 {
        self.waiting_times.iter().copied().max().unwrap_or(0)
    }

    /// Mean checkout duration of completed customers; `0.0` when there are none.
    pub fn average_checkout_time(&self) -> f64 {
        match self.customers_served() {
            0 => 0.0,
            n => (self.total_work_time - self.worked) as f64 / n as f64,
        }
    }
}
