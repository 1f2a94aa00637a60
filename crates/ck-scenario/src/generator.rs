//! Seeded random customer generation.
//!
//! # Distributions
//!
//! | Quantity      | Rule                                                     |
//! |---------------|----------------------------------------------------------|
//! | arrival       | uniform second in `[open, open + max(60, close − open − 60))` |
//! | item count    | `1 + ⌊(4·avg − 1)·u·v⌋`, `u, v` uniform in `[0, 1)`      |
//! | basket lines  | split the item count over distinct random products       |
//! | zip code      | `1013`–`1017` followed by two letters                    |
//!
//! The product of two uniforms has mean ¼, so the item count averages close
//! to `avg` while keeping a long tail of big baskets.  Arrivals stop one
//! minute before closing so stations can usually finish within overtime.

use ck_core::{Customer, CustomerId, Product, ProductId, SimRng};
use tracing::debug;

use crate::{Scenario, ScenarioError, ScenarioResult};

/// Draws random customers for a [`Scenario`].
///
/// Every call to [`add_random_customers`](Self::add_random_customers) runs on
/// its own child stream of the injected RNG, so a batch does not depend on how
/// many numbers earlier batches consumed.
pub struct ScenarioGenerator {
    rng:     SimRng,
    batches: u64,
}

impl ScenarioGenerator {
    pub fn new(rng: SimRng) -> Self {
        Self { rng, batches: 0 }
    }

    /// Shorthand for `ScenarioGenerator::new(SimRng::new(seed))`.
    pub fn seeded(seed: u64) -> Self {
        Self::new(SimRng::new(seed))
    }

    /// Append `count` random customers to `scenario`, numbered after the
    /// existing ones.  Returns the number of customers added.
    ///
    /// Fails with [`ScenarioError::Config`] when the catalogue is empty or
    /// `avg_items` is zero.
    pub fn add_random_customers(
        &mut self,
        scenario: &mut Scenario,
        count: usize,
        avg_items: u32,
    ) -> ScenarioResult<usize> {
        if scenario.products.is_empty() {
            return Err(ScenarioError::Config("cannot generate customers without products".into()));
        }
        if avg_items == 0 {
            return Err(ScenarioError::Config("average basket size must be at least 1".into()));
        }

        let mut rng = self.rng.child(self.batches);
        self.batches += 1;

        let open = scenario.config.open;
        let window = scenario.config.opening_secs().saturating_sub(60).max(60);
        let mut shelf: Vec<ProductId> = scenario.products.iter().map(|p| p.id).collect();
        let first = scenario.customers.len();

        for n in 0..count {
            let id = CustomerId::try_from(first + n)
                .map_err(|_| ScenarioError::Config("too many customers".into()))?;
            let arrival = open.offset(rng.gen_range(0..window));
            let mut customer = Customer::new(id, arrival, random_zip_code(&mut rng));

            let mut remaining = random_item_count(&mut rng, avg_items);
            let mut upper = shelf.len();
            while remaining > 0 {
                let amount = 1 + rng.gen_range(0..remaining);
                // Products before `upper` are not yet in this basket.
                let pick = rng.gen_range(0..upper);
                customer = customer.with_purchase(shelf[pick], amount);
                remaining -= amount;
                upper -= 1;
                shelf.swap(pick, upper);
                if upper == 0 && remaining > 0 {
                    // Catalogue exhausted: the last line takes the rest.
                    if let Some(last) = customer.purchases.last_mut() {
                        last.amount += remaining;
                    }
                    remaining = 0;
                }
            }
            scenario.customers.push(customer);
        }

        debug!(added = count, avg_items, total = scenario.customers.len(), "random customers added");
        Ok(count)
    }
}

/// `1 + ⌊(4·avg − 1)·u·v⌋`, never less than one.
pub(crate) fn random_item_count(rng: &mut SimRng, avg_items: u32) -> u32 {
    let u: f64 = rng.random();
    let v: f64 = rng.random();
    let spread = 4.0 * f64::from(avg_items.max(1)) - 1.0;
    // Float-to-int casts saturate, so huge averages top out at u32::MAX.
    (1.0 + spread * u * v) as u32
}

/// A zip code of the form `1013AD`: four digits in `1013..=1017` and two
/// upper-case letters derived from the same draws.
pub(crate) fn random_zip_code(rng: &mut SimRng) -> String {
    let digit: u8 = rng.gen_range(0..5);
    let c1 = u8::from(rng.gen_bool(0.5));
    let c2 = u8::from(rng.gen_bool(0.5));
    let first = char::from(b'A' + digit + 9 * c1 + c2);
    let second = char::from(b'D' + digit + 3 * c1 + 7 * c2);
    format!("{}{first}{second}", 1013 + u32::from(digit))
}

/// A small grocery catalogue for generated scenarios.
pub fn sample_catalogue() -> Vec<Product> {
    const ITEMS: [(&str, &str); 12] = [
        ("B001", "Croissant"),
        ("B002", "Volkoren brood"),
        ("C001", "Douwe Egberts snelfilter 500g"),
        ("C002", "Thee Earl Grey 20st"),
        ("D001", "Halfvolle melk 1L"),
        ("D002", "Goudse kaas jong 500g"),
        ("D003", "Yoghurt naturel 1L"),
        ("F001", "Bananen 1kg"),
        ("F002", "Appels Elstar 1kg"),
        ("G001", "Pindakaas 350g"),
        ("G002", "Hagelslag puur 400g"),
        ("H001", "Afwasmiddel 500ml"),
    ];
    ITEMS
        .iter()
        .enumerate()
        .map(|(i, (code, description))| Product::new(ProductId(i as u32), *code, *description))
        .collect()
}
