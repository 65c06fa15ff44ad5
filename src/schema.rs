use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// One category fixture file as the dashboard ships it:
/// `{ "title": "...", "items": [...] }`.
///
/// Every field is optional on the wire. Fixtures are hand-edited JSON, so the
/// types here stay deliberately loose; the normalizer applies defaults and
/// numeric coercion exactly once, and downstream code only ever sees the
/// normalized [`crate::Item`] shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RawDataset {
    #[serde(default)]
    #[schemars(
        description = "Display title of the category file (e.g. 'Non Veg Pickles'). Not interpreted by the analytics core."
    )]
    pub title: String,

    #[serde(default)]
    #[schemars(description = "Loosely-typed product records carried by this file.")]
    pub items: Vec<RawItem>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RawItem {
    #[serde(default)]
    #[schemars(
        description = "Category key (e.g. 'vegetable', 'nonveg'). Lowercased during normalization; keys outside the configured catalog are excluded from category-keyed aggregates."
    )]
    pub category: String,

    #[serde(default)]
    #[schemars(description = "Product display name. Repeated names are distinct records.")]
    pub name: String,

    // Older fixtures call this field "weights".
    #[serde(default, alias = "weights")]
    #[schemars(
        description = "Stock per packaging size, keyed by weight tier (e.g. '250', '500' grams)."
    )]
    pub weight_tiers: BTreeMap<String, RawWeightTier>,

    #[serde(default)]
    #[schemars(description = "Observed per-day sales for this product, in no particular order.")]
    pub sales_history: Vec<RawSale>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RawWeightTier {
    #[serde(default)]
    #[schemars(
        description = "Units currently in stock for this tier. Numbers or numeric strings; anything else coerces to 0."
    )]
    pub units: Value,

    #[serde(default)]
    #[schemars(
        description = "Unit price for this tier. Numbers or numeric strings; anything else coerces to 0."
    )]
    pub price: Value,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RawSale {
    #[serde(default)]
    #[schemars(
        description = "Calendar date in YYYY-MM-DD form, with or without a time suffix. Records with unparsable dates are dropped during normalization."
    )]
    pub date: String,

    #[serde(default)]
    #[schemars(description = "Units sold on this date. Coerces to 0 when missing or malformed.")]
    pub units_sold: Value,

    #[serde(default)]
    #[schemars(
        description = "Revenue for this date. When absent, derived as unitsSold times the item's average tier price."
    )]
    pub revenue: Option<Value>,
}

impl RawDataset {
    pub fn generate_json_schema() -> schemars::schema::RootSchema {
        schemars::schema_for!(RawDataset)
    }

    pub fn schema_as_json() -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&Self::generate_json_schema())
    }
}
