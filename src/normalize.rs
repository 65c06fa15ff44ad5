use crate::dates::date_key;
use crate::schema::{RawDataset, RawItem, RawSale};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Current stock and unit price for one packaging size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightTier {
    pub units: u64,
    pub price: f64,
}

/// One observed day's sales for an item. `revenue` is always resolved: raw
/// records without a usable revenue figure get `units_sold` times the item's
/// average tier price during normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleRecord {
    pub date: NaiveDate,
    pub units_sold: u64,
    pub revenue: f64,
}

/// A fully normalized product record. Every field is present and coerced;
/// downstream code never re-checks for missing data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub category: String,
    pub name: String,
    pub weight_tiers: BTreeMap<String, WeightTier>,
    pub sales_history: Vec<SaleRecord>,
}

impl Item {
    /// Stock units across all weight tiers.
    pub fn stock_units(&self) -> u64 {
        self.weight_tiers.values().map(|tier| tier.units).sum()
    }

    /// Stock value (units times price) across all weight tiers.
    pub fn stock_value(&self) -> f64 {
        self.weight_tiers
            .values()
            .map(|tier| tier.units as f64 * tier.price)
            .sum()
    }

    /// Cumulative units sold over the (possibly trimmed) sales history.
    pub fn sold_units(&self) -> u64 {
        self.sales_history.iter().map(|sale| sale.units_sold).sum()
    }

    /// Mean price across weight tiers; 0 when the item has none.
    pub fn average_unit_price(&self) -> f64 {
        if self.weight_tiers.is_empty() {
            return 0.0;
        }
        let total: f64 = self.weight_tiers.values().map(|tier| tier.price).sum();
        total / self.weight_tiers.len() as f64
    }
}

/// Flattens one or more raw datasets into a single normalized collection.
///
/// Lowercases categories, defaults missing collections, coerces tier numbers,
/// drops sales with unparsable dates, and resolves missing revenue. Repeated
/// names stay distinct records; nothing is deduplicated. Malformed fields
/// coerce to defaults rather than failing, so this function is total.
pub fn normalize_datasets(datasets: &[RawDataset]) -> Vec<Item> {
    datasets
        .iter()
        .flat_map(|dataset| dataset.items.iter())
        .map(normalize_item)
        .collect()
}

fn normalize_item(raw: &RawItem) -> Item {
    let weight_tiers: BTreeMap<String, WeightTier> = raw
        .weight_tiers
        .iter()
        .map(|(key, tier)| {
            (
                key.clone(),
                WeightTier {
                    units: coerce_u64(&tier.units),
                    price: coerce_f64(&tier.price),
                },
            )
        })
        .collect();

    // Revenue derivation needs the tier prices, so tiers come first.
    let mut item = Item {
        category: raw.category.trim().to_lowercase(),
        name: raw.name.clone(),
        weight_tiers,
        sales_history: Vec::new(),
    };

    let average_price = item.average_unit_price();
    item.sales_history = raw
        .sales_history
        .iter()
        .filter_map(|sale| normalize_sale(sale, average_price))
        .collect();

    item
}

fn normalize_sale(raw: &RawSale, average_price: f64) -> Option<SaleRecord> {
    let date = date_key(&raw.date)?;
    let units_sold = coerce_u64(&raw.units_sold);

    let revenue = raw
        .revenue
        .as_ref()
        .and_then(parse_f64)
        .unwrap_or(units_sold as f64 * average_price);

    Some(SaleRecord {
        date,
        units_sold,
        revenue,
    })
}

/// Reads a non-negative finite number out of a loose JSON value. Numeric
/// strings count; anything else is absent.
fn parse_f64(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|v| v.is_finite() && *v >= 0.0)
}

fn coerce_f64(value: &Value) -> f64 {
    parse_f64(value).unwrap_or(0.0)
}

fn coerce_u64(value: &Value) -> u64 {
    coerce_f64(value) as u64
}
