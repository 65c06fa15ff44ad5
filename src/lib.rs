//! # Retail Stock Analytics
//!
//! A library for deriving the chart-ready numeric series an inventory/sales
//! dashboard renders from raw per-product stock and sales-history records.
//!
//! ## Core Concepts
//!
//! - **Raw dataset**: one loosely-typed category fixture file (`{title, items}`)
//! - **Item**: a normalized product record with stock-by-weight-tier and sales history
//! - **Category catalog**: the closed category enumeration (key, label, color),
//!   declared as configuration and never inferred from data
//! - **Date span**: the contiguous calendar days between the earliest and latest
//!   observed sale, with no gaps, so time axes render unbroken
//! - **Aggregates**: pure reducers producing totals, category distribution,
//!   single- and multi-series sales trends, and stock-vs-sales comparisons
//!
//! Every stage is a pure function over immutable inputs: normalize once per
//! page load, filter zero or more times, then aggregate. The core holds no
//! state between calls; callers re-run the pipeline whenever a filter changes.
//!
//! ## Example
//!
//! ```rust,ignore
//! use retail_stock_analytics::*;
//!
//! let datasets = ingestion::load_datasets(&["data/vegetable.json", "data/nonveg.json"])?;
//! let items = normalize_datasets(&datasets);
//! let catalog = CategoryCatalog::retail_default();
//!
//! let filter = DashboardFilter {
//!     category: CategorySelection::from_token("vegetable"),
//!     range: RangeSelection::from_token("30")?,
//! };
//!
//! let dashboard = build_dashboard_data(&items, &catalog, &filter);
//! println!("{}", serde_json::to_string_pretty(&dashboard)?);
//! ```

pub mod aggregate;
pub mod categories;
pub mod dates;
pub mod error;
pub mod filter;
pub mod ingestion;
pub mod normalize;
pub mod schema;

pub use aggregate::{
    category_distribution, category_sales_trend, sales_totals, sales_trend,
    stock_vs_sales_by_category, total_stock_value, total_units, CategorySlice, CategoryTrendRow,
    SalesTotals, StockVsSalesRow, TrendPoint,
};
pub use categories::{CategoryCatalog, CategoryDef};
pub use dates::{available_dates, clip_span, date_key, full_date_span, last_n_days_span};
pub use error::{AnalyticsError, Result};
pub use filter::{by_category, by_date_window, CategorySelection, DateWindow, RangeSelection};
pub use normalize::{normalize_datasets, Item, SaleRecord, WeightTier};
pub use schema::{RawDataset, RawItem, RawSale, RawWeightTier};

use chrono::NaiveDate;
use log::{debug, info};
use serde::Serialize;

/// Filter state supplied by the dashboard controls.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardFilter {
    pub category: CategorySelection,
    pub range: RangeSelection,
}

impl Default for DashboardFilter {
    fn default() -> Self {
        Self {
            category: CategorySelection::All,
            range: RangeSelection::All,
        }
    }
}

impl DashboardFilter {
    /// Builds a filter from the raw UI tokens (category key or `"all"`,
    /// range token `"all"`/`"7"`/`"15"`/`"30"`/`"90"`).
    pub fn from_tokens(category: &str, range: &str) -> Result<Self> {
        Ok(Self {
            category: CategorySelection::from_token(category),
            range: RangeSelection::from_token(range)?,
        })
    }
}

/// Point-in-time inventory totals, unaffected by date filtering.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryTotals {
    pub products: usize,
    pub stock_units: u64,
    pub stock_value: f64,
}

/// Everything one dashboard render needs, bundled from a single pass over
/// the item collection. All rows are `Serialize` and shaped for direct
/// feeding into a charting library's data prop.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    pub inventory: InventoryTotals,
    pub sales: SalesTotals,
    pub distribution: Vec<CategorySlice>,
    pub trend: Vec<TrendPoint>,
    pub category_trend: Vec<CategoryTrendRow>,
    pub stock_vs_sales: Vec<StockVsSalesRow>,
}

pub struct DashboardProcessor;

impl DashboardProcessor {
    /// Runs the full pipeline for one filter state: category filter, date
    /// trimming, then every aggregate the dashboard charts consume.
    ///
    /// The time axis is always built from the FULL item collection, so its
    /// length stays stable when the category toggles; filters narrow the
    /// aggregated values, not the axis. Custom windows are the exception:
    /// they clip the axis explicitly, since the user asked for those days.
    pub fn process(
        items: &[Item],
        catalog: &CategoryCatalog,
        filter: &DashboardFilter,
    ) -> DashboardData {
        info!("Building dashboard series for {} items", items.len());
        debug!(
            "Filter state: category={:?}, range={:?}",
            filter.category, filter.range
        );

        let span = Self::span_for_range(items, &filter.range);

        let by_category = filter::by_category(items, &filter.category);
        let window = filter.range.window();
        let filtered = filter::by_date_window(&by_category, window.as_ref());

        let inventory = InventoryTotals {
            products: by_category.len(),
            stock_units: total_units(&by_category),
            stock_value: total_stock_value(&by_category),
        };

        DashboardData {
            inventory,
            sales: sales_totals(&filtered),
            distribution: category_distribution(&filtered, catalog),
            trend: sales_trend(&filtered, &span),
            category_trend: category_sales_trend(&filtered, catalog, &span),
            stock_vs_sales: stock_vs_sales_by_category(&filtered, catalog),
        }
    }

    fn span_for_range(items: &[Item], range: &RangeSelection) -> Vec<NaiveDate> {
        match *range {
            RangeSelection::All => full_date_span(items),
            RangeSelection::LastDays(n) => last_n_days_span(items, n),
            RangeSelection::Custom(DateWindow::Single(day)) => vec![day],
            RangeSelection::Custom(window @ DateWindow::Range { .. }) => {
                clip_span(&full_date_span(items), &window)
            }
        }
    }
}

/// Convenience wrapper over [`DashboardProcessor::process`].
pub fn build_dashboard_data(
    items: &[Item],
    catalog: &CategoryCatalog,
    filter: &DashboardFilter,
) -> DashboardData {
    DashboardProcessor::process(items, catalog, filter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn fixture_items() -> Vec<Item> {
        let dataset: RawDataset = serde_json::from_value(json!({
            "title": "All Categories",
            "items": [
                {
                    "category": "vegetable",
                    "name": "Mango Pickle",
                    "weightTiers": { "250": { "units": 10, "price": 50 } },
                    "salesHistory": [
                        { "date": "2024-01-01", "unitsSold": 5 },
                        { "date": "2024-01-04", "unitsSold": 2 }
                    ]
                },
                {
                    "category": "nonveg",
                    "name": "Chicken Pickle",
                    "weightTiers": { "500": { "units": 4, "price": 120 } },
                    "salesHistory": [{ "date": "2024-01-02", "unitsSold": 3 }]
                }
            ]
        }))
        .unwrap();
        normalize_datasets(&[dataset])
    }

    #[test]
    fn test_process_all_filters_off() {
        let items = fixture_items();
        let catalog = CategoryCatalog::retail_default();
        let dashboard =
            DashboardProcessor::process(&items, &catalog, &DashboardFilter::default());

        assert_eq!(dashboard.inventory.products, 2);
        assert_eq!(dashboard.inventory.stock_units, 14);
        assert_eq!(dashboard.sales.units_sold, 10);
        // axis covers Jan 1-4 without gaps
        assert_eq!(dashboard.trend.len(), 4);
        assert_eq!(dashboard.trend[2].units_sold, 0);
        assert_eq!(dashboard.distribution.len(), catalog.len());
    }

    #[test]
    fn test_axis_stays_stable_across_category_toggle() {
        let items = fixture_items();
        let catalog = CategoryCatalog::retail_default();

        let all = DashboardProcessor::process(&items, &catalog, &DashboardFilter::default());
        let veg_only = DashboardProcessor::process(
            &items,
            &catalog,
            &DashboardFilter {
                category: CategorySelection::from_token("vegetable"),
                range: RangeSelection::All,
            },
        );

        let axis = |data: &DashboardData| -> Vec<NaiveDate> {
            data.trend.iter().map(|point| point.date).collect()
        };
        assert_eq!(axis(&all), axis(&veg_only));
        // but the values narrow to the selected category
        assert_eq!(veg_only.sales.units_sold, 7);
        assert_eq!(veg_only.inventory.products, 1);
    }

    #[test]
    fn test_custom_range_clips_axis() {
        let items = fixture_items();
        let catalog = CategoryCatalog::retail_default();
        let filter = DashboardFilter {
            category: CategorySelection::All,
            range: RangeSelection::Custom(DateWindow::Range {
                from: day(2024, 1, 2),
                to: day(2024, 1, 3),
            }),
        };

        let dashboard = DashboardProcessor::process(&items, &catalog, &filter);
        assert_eq!(dashboard.trend.len(), 2);
        assert_eq!(dashboard.trend[0].units_sold, 3);
        assert_eq!(dashboard.trend[1].units_sold, 0);
        // sales totals follow the trimmed histories
        assert_eq!(dashboard.sales.units_sold, 3);
        // stock stays point-in-time
        assert_eq!(dashboard.inventory.stock_units, 14);
    }

    #[test]
    fn test_inverted_custom_range_yields_empty_trend() {
        let items = fixture_items();
        let catalog = CategoryCatalog::retail_default();
        let filter = DashboardFilter {
            category: CategorySelection::All,
            range: RangeSelection::Custom(DateWindow::Range {
                from: day(2024, 2, 1),
                to: day(2024, 1, 1),
            }),
        };

        let dashboard = DashboardProcessor::process(&items, &catalog, &filter);
        assert!(dashboard.trend.is_empty());
        assert!(dashboard.category_trend.is_empty());
        assert_eq!(dashboard.sales.units_sold, 0);
    }

    #[test]
    fn test_filter_from_tokens() {
        let filter = DashboardFilter::from_tokens("Vegetable", "30").unwrap();
        assert_eq!(
            filter.category,
            CategorySelection::Key("vegetable".to_string())
        );
        assert_eq!(filter.range, RangeSelection::LastDays(30));

        assert!(DashboardFilter::from_tokens("all", "sometimes").is_err());
    }
}
