//! Min-max normalization per asset.

use serde::{Deserialize, Serialize};

use super::group::group_by_coin;
use crate::core::Record;

/// Column value for one coin rescaled into `[0, 1]` against that coin's range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedValue {
    pub coin: String,
    pub date: String,
    pub normalized: f64,
}

/// Min-max normalize a column within each coin.
///
/// x_scaled = (x - min) / (max - min)
///
/// A coin whose values are all equal normalizes to 0 everywhere. Output is
/// grouped by coin in first-seen order with members in input order.
pub fn normalize_by_coin<F>(records: &[Record], field: F) -> Vec<NormalizedValue>
where
    F: Fn(&Record) -> f64,
{
    let mut result = Vec::with_capacity(records.len());

    for (coin, members) in group_by_coin(records) {
        let values: Vec<f64> = members.iter().map(|r| field(*r)).collect();
        let scaled = min_max_scale(&values);

        for (record, normalized) in members.iter().zip(scaled) {
            result.push(NormalizedValue {
                coin: coin.to_string(),
                date: record.date.clone(),
                normalized,
            });
        }
    }

    result
}

/// Rescale a series into `[0, 1]`.
///
/// Returns all zeros when `max == min`. A NaN anywhere in the series makes
/// the range undefined and every output NaN.
pub fn min_max_scale(series: &[f64]) -> Vec<f64> {
    let Some((min, max)) = min_max(series) else {
        return Vec::new();
    };

    if max == min {
        return vec![0.0; series.len()];
    }

    let range = max - min;
    if range.is_infinite() && min.is_finite() && max.is_finite() {
        // Range exceeds f64::MAX; rescale with halved bounds.
        let half_range = max * 0.5 - min * 0.5;
        return series
            .iter()
            .map(|&x| (x * 0.5 - min * 0.5) / half_range)
            .collect();
    }
    series.iter().map(|&x| (x - min) / range).collect()
}

/// Minimum and maximum of a series, propagating NaN.
pub fn min_max(series: &[f64]) -> Option<(f64, f64)> {
    let first = *series.first()?;

    Some(series.iter().skip(1).fold((first, first), |(lo, hi), &x| {
        if lo.is_nan() || x.is_nan() {
            (f64::NAN, f64::NAN)
        } else {
            (lo.min(x), hi.max(x))
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Field;
    use approx::assert_relative_eq;

    #[test]
    fn min_max_basic() {
        assert_eq!(min_max(&[3.0, 1.0, 4.0, 1.5]), Some((1.0, 4.0)));
        assert_eq!(min_max(&[2.0]), Some((2.0, 2.0)));
        assert_eq!(min_max(&[]), None);
    }

    #[test]
    fn min_max_propagates_nan() {
        let (lo, hi) = min_max(&[1.0, f64::NAN, 3.0]).unwrap();
        assert!(lo.is_nan());
        assert!(hi.is_nan());

        let (lo, _) = min_max(&[f64::NAN, 1.0]).unwrap();
        assert!(lo.is_nan());
    }

    #[test]
    fn min_max_scale_basic() {
        let result = min_max_scale(&[10.0, 20.0, 15.0]);

        assert_relative_eq!(result[0], 0.0, epsilon = 1e-10);
        assert_relative_eq!(result[1], 1.0, epsilon = 1e-10);
        assert_relative_eq!(result[2], 0.5, epsilon = 1e-10);
    }

    #[test]
    fn min_max_scale_constant_is_zero() {
        assert_eq!(min_max_scale(&[5.0, 5.0, 5.0]), vec![0.0, 0.0, 0.0]);
        assert_eq!(min_max_scale(&[7.0]), vec![0.0]);
        assert!(min_max_scale(&[]).is_empty());
    }

    #[test]
    fn min_max_scale_range_beyond_f64_max() {
        let result = min_max_scale(&[-1e308, 1e308, 0.0]);

        assert!(result.iter().all(|v| v.is_finite()));
        assert_eq!(result[0], 0.0);
        assert_eq!(result[1], 1.0);
        assert_relative_eq!(result[2], 0.5, epsilon = 1e-10);
    }

    #[test]
    fn normalize_extreme_prices_stay_finite() {
        let records = vec![
            Record::new("2024-01-01", "BTC", -1e308, 0.0, 0.0),
            Record::new("2024-01-02", "BTC", 1e308, 0.0, 0.0),
        ];
        let result = normalize_by_coin(&records, Field::Price.accessor());

        assert_eq!(result[0].normalized, 0.0);
        assert_eq!(result[1].normalized, 1.0);
    }

    #[test]
    fn min_max_scale_infinite_input_is_not_finite() {
        let result = min_max_scale(&[f64::NEG_INFINITY, 1.0]);
        assert!(result.iter().any(|v| !v.is_finite()));
    }

    #[test]
    fn normalize_two_point_series() {
        let records = vec![
            Record::new("2024-01-01", "BTC", 100.0, 10.0, 1000.0),
            Record::new("2024-01-02", "BTC", 200.0, 10.0, 1000.0),
        ];
        let result = normalize_by_coin(&records, Field::Price.accessor());

        assert_eq!(
            result,
            vec![
                NormalizedValue {
                    coin: "BTC".to_string(),
                    date: "2024-01-01".to_string(),
                    normalized: 0.0,
                },
                NormalizedValue {
                    coin: "BTC".to_string(),
                    date: "2024-01-02".to_string(),
                    normalized: 1.0,
                },
            ]
        );
    }

    #[test]
    fn normalize_uses_each_coins_own_range() {
        let records = vec![
            Record::new("2024-01-01", "BTC", 100.0, 0.0, 0.0),
            Record::new("2024-01-01", "ETH", 1.0, 0.0, 0.0),
            Record::new("2024-01-02", "BTC", 300.0, 0.0, 0.0),
            Record::new("2024-01-02", "ETH", 3.0, 0.0, 0.0),
            Record::new("2024-01-03", "ETH", 2.0, 0.0, 0.0),
        ];
        let result = normalize_by_coin(&records, Field::Price.accessor());

        let eth: Vec<f64> = result
            .iter()
            .filter(|v| v.coin == "ETH")
            .map(|v| v.normalized)
            .collect();
        assert_eq!(eth.len(), 3);
        assert_relative_eq!(eth[0], 0.0, epsilon = 1e-10);
        assert_relative_eq!(eth[1], 1.0, epsilon = 1e-10);
        assert_relative_eq!(eth[2], 0.5, epsilon = 1e-10);
        assert_eq!(result[0].coin, "BTC");
        assert_eq!(result[1].coin, "BTC");
    }

    #[test]
    fn normalize_constant_series_is_zero() {
        let records = vec![
            Record::new("2024-01-01", "BTC", 0.0, 5.0, 0.0),
            Record::new("2024-01-02", "BTC", 0.0, 5.0, 0.0),
        ];
        let result = normalize_by_coin(&records, Field::Volume.accessor());
        assert!(result.iter().all(|v| v.normalized == 0.0));
    }
}
