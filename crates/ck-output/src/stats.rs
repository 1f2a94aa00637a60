//! Input-side statistics: who shopped, and what.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use ck_core::{Customer, ProductId};

/// The product bought most often within one zip code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopProduct {
    pub product: ProductId,
    /// Units of `product` bought by customers from this zip code.
    pub amount:  u64,
}

/// Summary of a customer population.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerStats {
    pub customers:         usize,
    pub total_items:       u64,
    /// Distinct products bought by at least one customer.
    pub distinct_products: usize,
    /// Ordered by zip code.  Ties between products go to the lower id; zip
    /// codes whose customers bought nothing are absent.
    pub most_bought:       BTreeMap<String, TopProduct>,
}

impl CustomerStats {
    pub fn from_customers(customers: &[Customer]) -> Self {
        let mut per_zip: HashMap<&str, HashMap<ProductId, u64>> = HashMap::new();
        let mut distinct = BTreeSet::new();
        let mut total_items = 0u64;

        for c in customers {
            for p in &c.purchases {
                if p.amount == 0 {
                    continue;
                }
                total_items += u64::from(p.amount);
                distinct.insert(p.product);
                *per_zip
                    .entry(c.zip_code.as_str())
                    .or_default()
                    .entry(p.product)
                    .or_default() += u64::from(p.amount);
            }
        }

        let most_bought = per_zip
            .into_iter()
            .filter_map(|(zip, counts)| {
                counts
                    .into_iter()
                    .max_by(|(pa, a), (pb, b)| a.cmp(b).then(pb.cmp(pa)))
                    .map(|(product, amount)| (zip.to_owned(), TopProduct { product, amount }))
            })
            .collect();

        Self {
            customers: customers.len(),
            total_items,
            distinct_products: distinct.len(),
            most_bought,
        }
    }
}
