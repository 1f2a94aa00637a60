//! JSON scenario files.
//!
//! # Format
//!
//! ```json
//! {
//!   "name": "saturday",
//!   "open_time": "08:00:00",
//!   "closing_time": "20:00",
//!   "overtime_secs": 900,
//!   "products": [
//!     { "code": "A001", "description": "Croissant" }
//!   ],
//!   "customers": [
//!     { "arrival": "08:00:12", "zip_code": "1013AD",
//!       "purchases": [ { "product": "A001", "amount": 2 } ] }
//!   ]
//! }
//! ```
//!
//! Times are `HH:MM` or `HH:MM:SS`.  `overtime_secs` is optional and defaults
//! to [`DEFAULT_OVERTIME_SECS`].  Product and customer ids are assigned by
//! position in their arrays; purchases refer to products by `code`.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use ck_core::{
    Customer, CustomerId, DEFAULT_OVERTIME_SECS, Product, ProductId, SimConfig, SimTime,
};

use crate::{Scenario, ScenarioError, ScenarioResult};

// ── JSON records ──────────────────────────────────────────────────────────────

#[derive(Serialize, Deserialize)]
struct ScenarioRecord {
    #[serde(default)]
    name:          String,
    open_time:     String,
    closing_time:  String,
    #[serde(default = "default_overtime")]
    overtime_secs: u64,
    #[serde(default)]
    products:      Vec<ProductRecord>,
    #[serde(default)]
    customers:     Vec<CustomerRecord>,
}

#[derive(Serialize, Deserialize)]
struct ProductRecord {
    code:        String,
    #[serde(default)]
    description: String,
}

#[derive(Serialize, Deserialize)]
struct CustomerRecord {
    arrival:   String,
    zip_code:  String,
    #[serde(default)]
    purchases: Vec<PurchaseRecord>,
}

#[derive(Serialize, Deserialize)]
struct PurchaseRecord {
    product: String,
    amount:  u32,
}

fn default_overtime() -> u64 {
    DEFAULT_OVERTIME_SECS
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load and validate a scenario from a JSON file.
///
/// An empty `name` in the file is replaced by the file stem.
pub fn load_scenario_json(path: &Path) -> ScenarioResult<Scenario> {
    let file = File::open(path)?;
    let mut scenario = load_scenario_reader(BufReader::new(file))?;
    if scenario.name.is_empty() {
        scenario.name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
    }
    info!(
        path = %path.display(),
        products = scenario.products.len(),
        customers = scenario.customers.len(),
        "scenario loaded"
    );
    Ok(scenario)
}

/// Like [`load_scenario_json`] but accepts any `Read` source.
pub fn load_scenario_reader<R: Read>(reader: R) -> ScenarioResult<Scenario> {
    let record: ScenarioRecord = serde_json::from_reader(reader)?;
    from_record(record)
}

/// Write `scenario` to `path` as pretty-printed JSON.
pub fn save_scenario_json(scenario: &Scenario, path: &Path) -> ScenarioResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_scenario(scenario, &mut writer)?;
    writer.flush()?;
    info!(path = %path.display(), customers = scenario.customers.len(), "scenario saved");
    Ok(())
}

/// Like [`save_scenario_json`] but writes to any `Write` sink.
///
/// Fails with [`ScenarioError::Parse`] if a purchase refers to a product id
/// outside the catalogue.
pub fn write_scenario<W: Write>(scenario: &Scenario, writer: W) -> ScenarioResult<()> {
    let record = to_record(scenario)?;
    serde_json::to_writer_pretty(writer, &record)?;
    Ok(())
}

// ── Conversion ────────────────────────────────────────────────────────────────

fn from_record(record: ScenarioRecord) -> ScenarioResult<Scenario> {
    let config = SimConfig {
        open:          parse_time(&record.open_time)?,
        closing:       parse_time(&record.closing_time)?,
        overtime_secs: record.overtime_secs,
    };
    config
        .validate()
        .map_err(|e| ScenarioError::Config(e.to_string()))?;

    let mut by_code: HashMap<&str, ProductId> = HashMap::with_capacity(record.products.len());
    let mut products = Vec::with_capacity(record.products.len());
    for (i, p) in record.products.iter().enumerate() {
        let id = ProductId(i as u32);
        if by_code.insert(p.code.as_str(), id).is_some() {
            return Err(ScenarioError::Parse(format!("duplicate product code {:?}", p.code)));
        }
        products.push(Product::new(id, p.code.clone(), p.description.clone()));
    }

    let mut customers = Vec::with_capacity(record.customers.len());
    for (i, c) in record.customers.iter().enumerate() {
        let mut customer = Customer::new(CustomerId(i as u32), parse_time(&c.arrival)?, c.zip_code.clone());
        let mut items = 0u32;
        for purchase in &c.purchases {
            items = items.checked_add(purchase.amount).ok_or_else(|| {
                ScenarioError::Parse(format!("customer {i} buys more than {} items", u32::MAX))
            })?;
            let product = by_code.get(purchase.product.as_str()).copied().ok_or_else(|| {
                ScenarioError::UnknownProduct { customer: i, code: purchase.product.clone() }
            })?;
            customer = customer.with_purchase(product, purchase.amount);
        }
        customers.push(customer);
    }

    Ok(Scenario { name: record.name, config, products, customers })
}

fn to_record(scenario: &Scenario) -> ScenarioResult<ScenarioRecord> {
    let products = scenario
        .products
        .iter()
        .map(|p| ProductRecord { code: p.code.clone(), description: p.description.clone() })
        .collect();

    let customers = scenario
        .customers
        .iter()
        .map(|c| -> ScenarioResult<CustomerRecord> {
            let purchases = c
                .purchases
                .iter()
                .map(|p| -> ScenarioResult<PurchaseRecord> {
                    let product = scenario.product(p.product).ok_or_else(|| {
                        ScenarioError::Parse(format!("customer {} bought unlisted {}", c.id, p.product))
                    })?;
                    Ok(PurchaseRecord { product: product.code.clone(), amount: p.amount })
                })
                .collect::<ScenarioResult<_>>()?;
            Ok(CustomerRecord {
                arrival: c.arrival.to_string(),
                zip_code: c.zip_code.clone(),
                purchases,
            })
        })
        .collect::<ScenarioResult<_>>()?;

    Ok(ScenarioRecord {
        name:          scenario.name.clone(),
        open_time:     scenario.config.open.to_string(),
        closing_time:  scenario.config.closing.to_string(),
        overtime_secs: scenario.config.overtime_secs,
        products,
        customers,
    })
}

fn parse_time(s: &str) -> ScenarioResult<SimTime> {
    SimTime::parse(s).map_err(|e| ScenarioError::Parse(e.to_string()))
}
