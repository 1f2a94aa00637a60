//! `ck-sim` — simulation driver for the checkout simulator.
//!
//! # One simulated day
//!
//! ```text
//! restart every station at config.open
//! for customer in customers.stable_sort_by(arrival):
//!   ① Advance — every station works until customer.arrival
//!               (parallel with the `parallel` feature).
//!   ② Route   — StationChooser::select picks one station.
//!   ③ Admit   — the chosen station queues the customer.
//! every station: finish_day(config.closing, config.overtime_secs)
//! ```
//!
//! Step ① always completes for the current customer before step ③, and
//! customers are handled strictly in non-decreasing arrival order.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs step ① on Rayon's thread pool.                    |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use ck_core::{SimConfig, SimTime};
//! use ck_sim::{NoopObserver, ShortestExpectedWait, SupermarketBuilder};
//! use ck_station::Station;
//!
//! let config = SimConfig::new(SimTime::from_hms(8, 0, 0), SimTime::from_hms(20, 0, 0));
//! let mut market = SupermarketBuilder::new(config, ShortestExpectedWait)
//!     .station(Station::fifo("FIFO"))
//!     .station(Station::priority("PRIO", 5))
//!     .build()?;
//! market.simulate(&customers, &mut NoopObserver)?;
//! ```

pub mod builder;
pub mod chooser;
pub mod error;
pub mod observer;
pub mod supermarket;


pub use builder::SupermarketBuilder;
pub use chooser::{ShortestExpectedWait, StationChooser};
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use supermarket::{Supermarket, sort_by_arrival};
