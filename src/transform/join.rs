//! Left outer join of record sets on `(date, coin)`.

use std::collections::HashMap;

use log::trace;

use crate::core::{Record, RecordPatch};

/// A row that can be merged onto a [`Record`] with the same date and coin.
pub trait Overlay {
    /// Date half of the join key.
    fn date(&self) -> &str;

    /// Coin half of the join key.
    fn coin(&self) -> &str;

    /// Overwrite the columns of `base` that this row carries.
    fn apply(&self, base: &mut Record);
}

impl Overlay for Record {
    fn date(&self) -> &str {
        &self.date
    }

    fn coin(&self) -> &str {
        &self.coin
    }

    fn apply(&self, base: &mut Record) {
        base.price = self.price;
        base.volume = self.volume;
        base.market_cap = self.market_cap;
    }
}

impl Overlay for RecordPatch {
    fn date(&self) -> &str {
        &self.date
    }

    fn coin(&self) -> &str {
        &self.coin
    }

    fn apply(&self, base: &mut Record) {
        if let Some(price) = self.price {
            base.price = price;
        }
        if let Some(volume) = self.volume {
            base.volume = volume;
        }
        if let Some(market_cap) = self.market_cap {
            base.market_cap = market_cap;
        }
    }
}

/// Merge each left record with the first right row sharing its date and coin.
///
/// Columns present on the matched right row win. Left records without a
/// match are returned unchanged, so the output always has `left.len()`
/// records in left order. The right side is indexed once, so the join is
/// linear in `left.len() + right.len()`.
///
/// # Example
/// ```
/// use coinframe::core::{Record, RecordPatch};
/// use coinframe::transform::join_by_date_coin;
///
/// let left = vec![Record::new("2024-01-01", "BTC", 1.0, 2.0, 3.0)];
/// let right = vec![RecordPatch::new("2024-01-01", "BTC").volume(9.0)];
///
/// let joined = join_by_date_coin(&left, &right);
/// assert_eq!(joined[0], Record::new("2024-01-01", "BTC", 1.0, 9.0, 3.0));
/// ```
pub fn join_by_date_coin<O>(left: &[Record], right: &[O]) -> Vec<Record>
where
    O: Overlay,
{
    let mut index: HashMap<(&str, &str), &O> = HashMap::with_capacity(right.len());
    for row in right {
        index.entry((row.date(), row.coin())).or_insert(row);
    }

    let mut matched = 0usize;
    let joined = left
        .iter()
        .map(|record| {
            let mut merged = record.clone();
            if let Some(row) = index.get(&(record.date.as_str(), record.coin.as_str())) {
                row.apply(&mut merged);
                matched += 1;
            }
            merged
        })
        .collect();

    trace!(
        "joined {} left rows against {} right rows, {} matched",
        left.len(),
        right.len(),
        matched
    );
    joined
}
