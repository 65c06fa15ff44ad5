use crate::categories::CategoryCatalog;
use crate::normalize::Item;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

/// Stock units across all weight tiers of all items, whatever their category.
pub fn total_units(items: &[Item]) -> u64 {
    items.iter().map(Item::stock_units).sum()
}

/// Stock value (units times price) across all weight tiers of all items.
pub fn total_stock_value(items: &[Item]) -> f64 {
    items.iter().map(Item::stock_value).sum()
}

/// Sales-scoped totals for the header stat cards: how many products moved,
/// and the units and revenue they moved. Only items with at least one
/// (surviving) sale count as products here.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesTotals {
    pub products: usize,
    pub units_sold: u64,
    pub revenue: f64,
}

pub fn sales_totals(items: &[Item]) -> SalesTotals {
    let mut totals = SalesTotals::default();
    for item in items {
        if item.sales_history.is_empty() {
            continue;
        }
        totals.products += 1;
        for sale in &item.sales_history {
            totals.units_sold += sale.units_sold;
            totals.revenue += sale.revenue;
        }
    }
    totals
}

/// One pie slice: total stock units for a configured category.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySlice {
    pub category: String,
    pub label: String,
    pub total_units: u64,
    pub color: String,
}

/// Groups total stock units by category over the full configured catalog.
/// Every catalog entry yields a row, zero-filled when nothing matches; items
/// with a category outside the catalog are silently excluded.
pub fn category_distribution(items: &[Item], catalog: &CategoryCatalog) -> Vec<CategorySlice> {
    let mut units_by_key: BTreeMap<&str, u64> = catalog.keys().map(|key| (key, 0)).collect();

    for item in items {
        if let Some(units) = units_by_key.get_mut(item.category.as_str()) {
            *units += item.stock_units();
        }
    }

    catalog
        .iter()
        .map(|def| CategorySlice {
            category: def.key.clone(),
            label: def.label.clone(),
            total_units: units_by_key[def.key.as_str()],
            color: def.color.clone(),
        })
        .collect()
}

/// One point of the single-series sales trend.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub units_sold: u64,
}

/// Sums units sold across all items for each date of `span`, in span order.
/// Dates with no matching sale produce 0, never a missing row, so charts can
/// render an unbroken series. Sales outside the span are ignored.
pub fn sales_trend(items: &[Item], span: &[NaiveDate]) -> Vec<TrendPoint> {
    let mut units_by_date: BTreeMap<NaiveDate, u64> = span.iter().map(|day| (*day, 0)).collect();

    for item in items {
        for sale in &item.sales_history {
            if let Some(units) = units_by_date.get_mut(&sale.date) {
                *units += sale.units_sold;
            }
        }
    }

    span.iter()
        .map(|date| TrendPoint {
            date: *date,
            units_sold: units_by_date[date],
        })
        .collect()
}

/// One date of the multi-series trend: a units-sold column per configured
/// category, flattened on serialization to the `{date, vegetable: 10, ...}`
/// row shape chart libraries consume directly.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTrendRow {
    pub date: NaiveDate,
    #[serde(flatten)]
    pub units_sold: BTreeMap<String, u64>,
}

/// Like [`sales_trend`], but with one accumulator column per catalog key,
/// each zero-initialized for every date of the span before accumulation.
pub fn category_sales_trend(
    items: &[Item],
    catalog: &CategoryCatalog,
    span: &[NaiveDate],
) -> Vec<CategoryTrendRow> {
    let mut rows: Vec<CategoryTrendRow> = span
        .iter()
        .map(|date| CategoryTrendRow {
            date: *date,
            units_sold: catalog.keys().map(|key| (key.to_string(), 0)).collect(),
        })
        .collect();

    let row_index: BTreeMap<NaiveDate, usize> = span
        .iter()
        .enumerate()
        .map(|(idx, date)| (*date, idx))
        .collect();

    for item in items {
        if !catalog.contains(&item.category) {
            continue;
        }
        for sale in &item.sales_history {
            if let Some(&idx) = row_index.get(&sale.date) {
                if let Some(units) = rows[idx].units_sold.get_mut(&item.category) {
                    *units += sale.units_sold;
                }
            }
        }
    }

    rows
}

/// One bar-chart row comparing point-in-time stock against cumulative sales
/// for a configured category.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StockVsSalesRow {
    pub category: String,
    pub label: String,
    pub stock_units: u64,
    pub sold_units: u64,
}

/// Per catalog entry: stock units from weight tiers versus cumulative units
/// sold from the sales history. Stock is point-in-time and unaffected by date
/// filters; sold units respect whatever trimming the caller already applied.
pub fn stock_vs_sales_by_category(
    items: &[Item],
    catalog: &CategoryCatalog,
) -> Vec<StockVsSalesRow> {
    let mut by_key: BTreeMap<&str, (u64, u64)> =
        catalog.keys().map(|key| (key, (0, 0))).collect();

    for item in items {
        if let Some((stock, sold)) = by_key.get_mut(item.category.as_str()) {
            *stock += item.stock_units();
            *sold += item.sold_units();
        }
    }

    catalog
        .iter()
        .map(|def| {
            let (stock_units, sold_units) = by_key[def.key.as_str()];
            StockVsSalesRow {
                category: def.key.clone(),
                label: def.label.clone(),
                stock_units,
                sold_units,
            }
        })
        .collect()
}
