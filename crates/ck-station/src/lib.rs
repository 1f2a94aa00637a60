//! `ck-station` — the checkout station engine.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                     |
//! |----------------|--------------------------------------------------------------|
//! | [`station`]    | `Station` — clock, queue, in-service slot, statistics        |
//! | [`discipline`] | `Discipline` trait (admission position, service time)        |
//! | [`fifo`]       | `Fifo` — strict arrival order                                |
//! | [`priority`]   | `Priority` — short baskets jump a trailing run of long ones  |
//! | [`service`]    | `ServiceModel` — linear checkout-time model                  |
//! | [`ticket`]     | `Ticket` — a customer's queue entry                          |
//! | [`error`]      | `StationError`, `StationResult<T>`                           |
//!
//! # Design notes
//!
//! There is exactly one time-accounting algorithm,
//! [`Station::advance_to`].  Disciplines only decide *where* a new ticket is
//! inserted.  The expected-wait estimate asks the same
//! [`Discipline::insertion_index`] the admission uses, so the estimate can
//! never disagree with where the customer would actually end up.
//!
//! All counters are private to `Station` and change only in
//! [`restart`][Station::restart], [`admit`][Station::admit],
//! [`advance_to`][Station::advance_to] and
//! [`finish_day`][Station::finish_day].  After any of them:
//!
//! ```text
//! total_idle_time == total_at_work - total_work_time
//! ```

pub mod discipline;
pub mod error;
pub mod fifo;
pub mod priority;
pub mod service;
pub mod station;
pub mod ticket;


pub use discipline::Discipline;
pub use error::{StationError, StationResult};
pub use fifo::Fifo;
pub use priority::{DEFAULT_MAX_PRIORITY_ITEMS, Priority};
pub use service::ServiceModel;
pub use station::{Admission, Station, StationPhase};
pub use ticket::Ticket;
