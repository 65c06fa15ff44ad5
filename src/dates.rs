use crate::filter::DateWindow;
use crate::normalize::Item;
use chrono::NaiveDate;

/// Parses any day-granularity date input to its canonical calendar day.
///
/// Accepts `YYYY-MM-DD` with or without a `T`/space time suffix
/// (`"2024-01-05T09:30:00Z"` and `"2024-01-05 09:30"` both key to
/// 2024-01-05). Returns `None` for unparsable input; callers must treat
/// `None` as "no date".
pub fn date_key(raw: &str) -> Option<NaiveDate> {
    let day = raw.trim().split(['T', ' ']).next().unwrap_or_default();
    NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
}

/// The sorted set of distinct sale dates present in any item's history.
pub fn available_dates(items: &[Item]) -> Vec<NaiveDate> {
    let mut dates: Vec<NaiveDate> = items
        .iter()
        .flat_map(|item| item.sales_history.iter().map(|sale| sale.date))
        .collect();
    dates.sort();
    dates.dedup();
    dates
}

/// Every calendar day from the earliest to the latest observed sale date,
/// inclusive, with no gaps. Days with no sales are kept so trend series stay
/// unbroken; they aggregate to zero downstream. Empty when no dated sales
/// exist.
pub fn full_date_span(items: &[Item]) -> Vec<NaiveDate> {
    let dates = available_dates(items);
    if dates.is_empty() {
        return Vec::new();
    }

    let start = dates[0];
    let end = dates[dates.len() - 1];
    start.iter_days().take_while(|day| *day <= end).collect()
}

/// The final `n` entries of the full span, or the entire span when it is
/// shorter than `n`.
pub fn last_n_days_span(items: &[Item], n: usize) -> Vec<NaiveDate> {
    let full = full_date_span(items);
    if full.len() <= n {
        return full;
    }
    full[full.len() - n..].to_vec()
}

/// Restricts a span to the days inside `window`. An inverted range keeps
/// nothing.
pub fn clip_span(span: &[NaiveDate], window: &DateWindow) -> Vec<NaiveDate> {
    span.iter()
        .copied()
        .filter(|day| window.contains(*day))
        .collect()
}
