use crate::error::{AnalyticsError, Result};
use crate::normalize::Item;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Category filter state as supplied by the UI: a concrete key or the "all"
/// sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CategorySelection {
    All,
    Key(String),
}

impl CategorySelection {
    /// Interprets a UI token. Empty and `"all"` mean no filtering; anything
    /// else is treated as a category key and lowercased to match normalized
    /// records.
    pub fn from_token(token: &str) -> Self {
        let token = token.trim().to_lowercase();
        if token.is_empty() || token == "all" {
            Self::All
        } else {
            Self::Key(token)
        }
    }

    pub fn matches(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Key(key) => key == category,
        }
    }
}

/// A date window: one day, or an inclusive range. An inverted range
/// (`from > to`) contains nothing, so filters and spans over it come out
/// empty rather than falling back to unfiltered data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DateWindow {
    Single(NaiveDate),
    Range { from: NaiveDate, to: NaiveDate },
}

impl DateWindow {
    pub fn contains(&self, date: NaiveDate) -> bool {
        match *self {
            Self::Single(day) => date == day,
            Self::Range { from, to } => from <= date && date <= to,
        }
    }
}

/// Date-range selector state: the whole history, a trailing window, or a
/// custom date window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RangeSelection {
    All,
    LastDays(usize),
    Custom(DateWindow),
}

impl RangeSelection {
    /// Parses the range toggle tokens the dashboard emits: `"all"` or a day
    /// count such as `"7"`, `"15"`, `"30"`, `"90"`. Custom windows carry
    /// explicit dates and are constructed directly, not through tokens.
    pub fn from_token(token: &str) -> Result<Self> {
        let token = token.trim();
        if token.eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        token
            .parse::<usize>()
            .map(Self::LastDays)
            .map_err(|_| AnalyticsError::UnknownRangeToken(token.to_string()))
    }

    /// The date window to trim histories with, if this selection implies one.
    pub fn window(&self) -> Option<DateWindow> {
        match *self {
            Self::Custom(window) => Some(window),
            _ => None,
        }
    }
}

/// Keeps the items whose category matches the selection. Identity for
/// [`CategorySelection::All`].
pub fn by_category(items: &[Item], selection: &CategorySelection) -> Vec<Item> {
    match selection {
        CategorySelection::All => items.to_vec(),
        CategorySelection::Key(key) => items
            .iter()
            .filter(|item| item.category == *key)
            .cloned()
            .collect(),
    }
}

/// Trims each item's sales history to the window. Items are never dropped,
/// even when their trimmed history becomes empty; callers that need "items
/// with at least one sale in window" filter on non-empty history themselves.
/// `None` is a passthrough.
pub fn by_date_window(items: &[Item], window: Option<&DateWindow>) -> Vec<Item> {
    let Some(window) = window else {
        return items.to_vec();
    };

    items
        .iter()
        .map(|item| {
            let mut trimmed = item.clone();
            trimmed.sales_history.retain(|sale| window.contains(sale.date));
            trimmed
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::SaleRecord;
    use std::collections::BTreeMap;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn item(category: &str, sale_days: &[NaiveDate]) -> Item {
        Item {
            category: category.to_string(),
            name: format!("{} item", category),
            weight_tiers: BTreeMap::new(),
            sales_history: sale_days
                .iter()
                .map(|date| SaleRecord {
                    date: *date,
                    units_sold: 2,
                    revenue: 0.0,
                })
                .collect(),
        }
    }

    #[test]
    fn test_category_selection_tokens() {
        assert_eq!(CategorySelection::from_token("all"), CategorySelection::All);
        assert_eq!(CategorySelection::from_token(""), CategorySelection::All);
        assert_eq!(
            CategorySelection::from_token("Vegetable"),
            CategorySelection::Key("vegetable".to_string())
        );
    }

    #[test]
    fn test_range_selection_tokens() {
        assert_eq!(RangeSelection::from_token("all").unwrap(), RangeSelection::All);
        assert_eq!(
            RangeSelection::from_token("30").unwrap(),
            RangeSelection::LastDays(30)
        );
        assert!(RangeSelection::from_token("custom").is_err());
    }

    #[test]
    fn test_by_category_passthrough_and_match() {
        let items = vec![
            item("vegetable", &[]),
            item("nonveg", &[]),
            item("vegetable", &[]),
        ];

        assert_eq!(by_category(&items, &CategorySelection::All).len(), 3);

        let veg = by_category(&items, &CategorySelection::Key("vegetable".to_string()));
        assert_eq!(veg.len(), 2);
        assert!(veg.iter().all(|i| i.category == "vegetable"));
    }

    #[test]
    fn test_by_date_window_trims_but_keeps_items() {
        let items = vec![item("vegetable", &[day(2024, 1, 1), day(2024, 1, 10)])];
        let window = DateWindow::Range {
            from: day(2024, 1, 5),
            to: day(2024, 1, 31),
        };

        let trimmed = by_date_window(&items, Some(&window));
        assert_eq!(trimmed.len(), 1);
        assert_eq!(trimmed[0].sales_history.len(), 1);
        assert_eq!(trimmed[0].sales_history[0].date, day(2024, 1, 10));

        // a window matching nothing still keeps the item
        let empty_window = DateWindow::Single(day(2023, 6, 1));
        let emptied = by_date_window(&items, Some(&empty_window));
        assert_eq!(emptied.len(), 1);
        assert!(emptied[0].sales_history.is_empty());
    }

    #[test]
    fn test_inverted_range_trims_everything() {
        let items = vec![item("vegetable", &[day(2024, 1, 15)])];
        let window = DateWindow::Range {
            from: day(2024, 2, 1),
            to: day(2024, 1, 1),
        };
        let trimmed = by_date_window(&items, Some(&window));
        assert!(trimmed[0].sales_history.is_empty());
    }

    #[test]
    fn test_filters_commute() {
        let items = vec![
            item("vegetable", &[day(2024, 1, 1), day(2024, 1, 8)]),
            item("nonveg", &[day(2024, 1, 2)]),
            item("vegetable", &[day(2024, 1, 2)]),
        ];
        let selection = CategorySelection::Key("vegetable".to_string());
        let window = DateWindow::Range {
            from: day(2024, 1, 1),
            to: day(2024, 1, 3),
        };

        let category_first =
            by_date_window(&by_category(&items, &selection), Some(&window));
        let window_first =
            by_category(&by_date_window(&items, Some(&window)), &selection);

        let sold = |items: &[Item]| -> u64 { items.iter().map(Item::sold_units).sum() };
        assert_eq!(sold(&category_first), sold(&window_first));
        assert_eq!(category_first, window_first);
    }
}
