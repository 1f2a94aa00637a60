//! Customer and product data model.
//!
//! Customers are created by the scenario importer or generator and are
//! read-only for the whole simulation.  Stations copy what they need (id,
//! item count, admission instant) into their own queue entries, so nothing
//! here is ever mutated by the engine.

use crate::{CustomerId, ProductId, SimTime};

/// An article that can be bought.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Product {
    pub id:          ProductId,
    /// Short article code, unique within a scenario (e.g. `"A001"`).
    pub code:        String,
    pub description: String,
}

impl Product {
    pub fn new(id: ProductId, code: impl Into<String>, description: impl Into<String>) -> Self {
        Self { id, code: code.into(), description: description.into() }
    }
}

/// One line of a customer's basket.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Purchase {
    pub product: ProductId,
    pub amount:  u32,
}

/// A shopper arriving at the checkout floor.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Customer {
    pub id:        CustomerId,
    /// Instant the customer reaches the checkout area.
    pub arrival:   SimTime,
    /// Opaque location tag, only used for reporting.
    pub zip_code:  String,
    pub purchases: Vec<Purchase>,
}

impl Customer {
    /// A customer with an empty basket.
    pub fn new(id: CustomerId, arrival: SimTime, zip_code: impl Into<String>) -> Self {
        Self { id, arrival, zip_code: zip_code.into(), purchases: Vec::new() }
    }

    /// Builder-style helper used by generators and tests.
    pub fn with_purchase(mut self, product: ProductId, amount: u32) -> Self {
        self.purchases.push(Purchase { product, amount });
        self
    }

    /// Total number of items across all purchase lines, saturating at
    /// `u32::MAX`.  Scenario import rejects baskets that would saturate.
    pub fn number_of_items(&self) -> u32 {
        self.purchases.iter().fold(0u32, |n, p| n.saturating_add(p.amount))
    }

    /// `true` for customers that walk past the checkout without buying.
    #[inline]
    pub fn is_empty_handed(&self) -> bool {
        self.number_of_items() == 0
    }
}
