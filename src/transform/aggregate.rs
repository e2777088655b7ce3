//! Cross-asset aggregation per calendar date.

use serde::{Deserialize, Serialize};

use super::group::group_by_date;
use crate::core::Record;

/// Mean of a column across all assets on one date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyAverage {
    pub date: String,
    #[serde(rename = "avgPrice")]
    pub avg_price: f64,
}

/// Average price across all coins for each distinct date.
///
/// One output per date, in the order dates are first seen.
pub fn average_price_by_day(records: &[Record]) -> Vec<DailyAverage> {
    average_by_day(records, |r| r.price)
}

/// Average of an arbitrary column across all coins for each distinct date.
pub fn average_by_day<F>(records: &[Record], field: F) -> Vec<DailyAverage>
where
    F: Fn(&Record) -> f64,
{
    group_by_date(records)
        .iter()
        .map(|(date, members)| {
            let values: Vec<f64> = members.iter().map(|r| field(*r)).collect();
            DailyAverage {
                date: (*date).to_string(),
                avg_price: mean(&values),
            }
        })
        .collect()
}

/// Arithmetic mean of a slice; NaN when empty.
///
/// Finite values always give a finite mean, even when their sum would
/// overflow.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }

    let n = values.len() as f64;
    let sum: f64 = values.iter().sum();
    if sum.is_finite() {
        return sum / n;
    }
    values.iter().map(|&x| x / n).sum()
}
