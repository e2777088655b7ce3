//! Day-over-day percentage change per asset.

use serde::{Deserialize, Serialize};

use super::group::chronological_groups;
use crate::core::Record;

/// Percentage change of a column for one coin relative to its previous date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PercentChange {
    pub coin: String,
    pub date: String,
    pub change: f64,
}

/// Percentage change between consecutive records of each coin.
///
/// Each coin's records are sorted by date first. The earliest record of a
/// coin has no predecessor and produces nothing, so a coin with `L` records
/// contributes `L - 1` outputs.
pub fn daily_percent_change_by_coin<F>(records: &[Record], field: F) -> Vec<PercentChange>
where
    F: Fn(&Record) -> f64,
{
    let mut result = Vec::with_capacity(records.len());

    for (coin, members) in chronological_groups(records) {
        for pair in members.windows(2) {
            let prev = field(pair[0]);
            let curr = field(pair[1]);
            result.push(PercentChange {
                coin: coin.to_string(),
                date: pair[1].date.clone(),
                change: percent_change(prev, curr),
            });
        }
    }

    result
}

/// `((curr - prev) / prev) * 100`, or 0 when `prev` is exactly zero.
pub fn percent_change(prev: f64, curr: f64) -> f64 {
    if prev == 0.0 {
        return 0.0;
    }
    (curr - prev) / prev * 100.0
}
