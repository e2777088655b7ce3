//! Ranking records by a numeric column.

use std::cmp::Ordering;

use crate::core::Record;

/// Default number of records returned by the ranking functions.
pub const DEFAULT_TOP_N: usize = 5;

/// The `n` records with the largest market cap, largest first.
///
/// Ties keep their original relative order. Returns every record when there
/// are fewer than `n`.
pub fn top_n_by_market_cap(records: &[Record], n: usize) -> Vec<Record> {
    top_n_by(records, |r| r.market_cap, n)
}

/// The `n` records with the largest value of a column, largest first.
///
/// NaN values rank after every number.
pub fn top_n_by<F>(records: &[Record], field: F, n: usize) -> Vec<Record>
where
    F: Fn(&Record) -> f64,
{
    let mut ranked: Vec<&Record> = records.iter().collect();
    ranked.sort_by(|a, b| descending_nan_last(field(*a), field(*b)));
    ranked.into_iter().take(n).cloned().collect()
}

fn descending_nan_last(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
    }
}
