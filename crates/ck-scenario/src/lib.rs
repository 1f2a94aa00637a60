//! `ck-scenario` — the input side of the checkout simulator.
//!
//! A [`Scenario`] bundles everything one simulated day needs besides the
//! station set: opening hours, the product catalogue, and the customers.
//!
//! | Module        | Contents                                               |
//! |---------------|--------------------------------------------------------|
//! | [`scenario`]  | `Scenario` container and catalogue lookups             |
//! | [`json`]      | JSON load/save                                         |
//! | [`generator`] | Seeded random customers and zip codes                  |
//! | [`error`]     | `ScenarioError`, `ScenarioResult`                      |
//!
//! Loading validates the document (opening before closing, purchases naming
//! known product codes) so the simulation can treat a `Scenario` as trusted.

pub mod error;
pub mod generator;
pub mod json;
pub mod scenario;


pub use error::{ScenarioError, ScenarioResult};
pub use generator::{ScenarioGenerator, sample_catalogue};
pub use json::{load_scenario_json, load_scenario_reader, save_scenario_json, write_scenario};
pub use scenario::Scenario;
