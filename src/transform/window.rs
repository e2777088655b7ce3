//! Trailing moving averages per asset.

use serde::{Deserialize, Serialize};

use super::aggregate::mean;
use super::group::chronological_groups;
use crate::core::Record;

/// Default number of observations in a rolling window.
pub const DEFAULT_WINDOW_SIZE: usize = 7;

/// Windowed value for one coin on one date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RollingValue {
    pub coin: String,
    pub date: String,
    pub value: f64,
}

/// Simple moving average of a column per coin.
///
/// Each coin's records are sorted by date before windowing. The window at
/// position `i` covers `[max(0, i - window + 1), i]`, so it shrinks near the
/// start of a series instead of padding. A `window` of 0 behaves as 1.
///
/// Output has one value per input record, grouped by coin in first-seen
/// order and chronological within each coin.
///
/// # Example
/// ```
/// use coinframe::core::{Field, Record};
/// use coinframe::transform::rolling_average_by_coin;
///
/// let records = vec![
///     Record::new("2024-01-02", "BTC", 20.0, 0.0, 0.0),
///     Record::new("2024-01-01", "BTC", 10.0, 0.0, 0.0),
/// ];
/// let rolled = rolling_average_by_coin(&records, Field::Price.accessor(), 7);
/// assert_eq!(rolled[0].value, 10.0);
/// assert_eq!(rolled[1].value, 15.0);
/// ```
pub fn rolling_average_by_coin<F>(records: &[Record], field: F, window: usize) -> Vec<RollingValue>
where
    F: Fn(&Record) -> f64,
{
    let mut result = Vec::with_capacity(records.len());

    for (coin, members) in chronological_groups(records) {
        let values: Vec<f64> = members.iter().map(|r| field(*r)).collect();
        let means = trailing_mean(&values, window);

        for (record, value) in members.iter().zip(means) {
            result.push(RollingValue {
                coin: coin.to_string(),
                date: record.date.clone(),
                value,
            });
        }
    }

    result
}

/// Trailing mean with a window that is truncated at the start of the series.
///
/// Unlike a full-window rolling mean, no leading position is left undefined:
/// the first value is the first observation itself.
pub fn trailing_mean(series: &[f64], window: usize) -> Vec<f64> {
    let window = window.max(1);

    (0..series.len())
        .map(|i| {
            let start = (i + 1).saturating_sub(window);
            mean(&series[start..=i])
        })
        .collect()
}
