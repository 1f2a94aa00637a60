//! The `Scenario` container.

use std::collections::BTreeSet;

use ck_core::{Customer, Product, ProductId, SimConfig};

/// Opening hours, product catalogue, and customer population of one day.
///
/// `products[i].id == ProductId(i)` and `customers[i].id == CustomerId(i)`
/// hold for every scenario produced by this crate.
#[derive(Clone, Debug, PartialEq)]
pub struct Scenario {
    /// Free-form label used in reports.
    pub name:      String,
    pub config:    SimConfig,
    pub products:  Vec<Product>,
    pub customers: Vec<Customer>,
}

impl Scenario {
    /// An empty scenario: no products, no customers.
    pub fn new(name: impl Into<String>, config: SimConfig) -> Self {
        Self { name: name.into(), config, products: Vec::new(), customers: Vec::new() }
    }

    /// Replace the catalogue, renumbering products by position.
    pub fn with_products(mut self, products: impl IntoIterator<Item = Product>) -> Self {
        self.products = products
            .into_iter()
            .enumerate()
            .map(|(i, mut p)| {
                p.id = ProductId(i as u32);
                p
            })
            .collect();
        self
    }

    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.get(id.index())
    }

    pub fn product_by_code(&self, code: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.code == code)
    }

    /// Items bought across all customers.
    pub fn total_items(&self) -> u64 {
        self.customers.iter().map(|c| u64::from(c.number_of_items())).sum()
    }

    /// Number of catalogue entries that at least one customer bought.
    pub fn distinct_products_bought(&self) -> usize {
        self.customers
            .iter()
            .flat_map(|c| c.purchases.iter().map(|p| p.product))
            .collect::<BTreeSet<_>>()
            .len()
    }
}
