//! `ck-core` — foundational types for the checkout floor simulator.
//!
//! This crate is a dependency of every other `ck-*` crate.  It intentionally
//! has no `ck-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `CustomerId`, `ProductId`, `StationId`                |
//! | [`time`]        | `SimTime` (seconds since midnight), `SimConfig`       |
//! | [`customer`]    | `Customer`, `Purchase`, `Product`                     |
//! | [`rng`]         | `SimRng` (seeded scenario randomness)                 |
//! | [`error`]       | `CkError`, `CkResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public data types.   |
//!           | Enabled through the `serde` feature of `ck-scenario`.      |

pub mod customer;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use customer::{Customer, Product, Purchase};
pub use error::{CkError, CkResult};
pub use ids::{CustomerId, ProductId, StationId};
pub use rng::SimRng;
pub use time::{DEFAULT_OVERTIME_SECS, SimConfig, SimTime};
