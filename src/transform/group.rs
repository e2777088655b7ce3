//! Grouping records by a categorical key.
//!
//! Every aggregator in this crate partitions its input through
//! [`group_by_key`]. Groups keep the order in which their keys were first
//! seen, and members keep their original relative order.

use std::collections::HashMap;
use std::hash::Hash;

use log::trace;

use crate::core::{date_key, Record};

/// Ordered partition of a slice by key.
#[derive(Debug)]
pub struct Groups<'a, K, T> {
    groups: Vec<(K, Vec<&'a T>)>,
    index: HashMap<K, usize>,
}

impl<'a, K, T> Groups<'a, K, T>
where
    K: Eq + Hash,
{
    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Check if there are no groups.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Members of the group for `key`, if any.
    pub fn get(&self, key: &K) -> Option<&[&'a T]> {
        self.index.get(key).map(|&i| self.groups[i].1.as_slice())
    }

    /// Keys in first-seen order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.groups.iter().map(|(k, _)| k)
    }

    /// Groups in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &[&'a T])> {
        self.groups.iter().map(|(k, members)| (k, members.as_slice()))
    }

    /// Total number of members across all groups.
    pub fn total_members(&self) -> usize {
        self.groups.iter().map(|(_, members)| members.len()).sum()
    }
}

impl<'a, K, T> IntoIterator for Groups<'a, K, T> {
    type Item = (K, Vec<&'a T>);
    type IntoIter = std::vec::IntoIter<(K, Vec<&'a T>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

/// Partition `items` by the key returned from `key`.
///
/// Groups appear in the order their key is first seen; members keep their
/// original relative order. An empty input yields no groups.
///
/// # Example
/// ```
/// use coinframe::transform::group_by_key;
///
/// let words = ["apple", "bean", "avocado", "beet", "cherry"];
/// let groups = group_by_key(&words, |w| w.as_bytes()[0]);
///
/// let keys: Vec<_> = groups.keys().copied().collect();
/// assert_eq!(keys, vec![b'a', b'b', b'c']);
/// assert_eq!(groups.get(&b'b').unwrap(), &[&"bean", &"beet"]);
/// ```
pub fn group_by_key<'a, T, K, F>(items: &'a [T], key: F) -> Groups<'a, K, T>
where
    K: Eq + Hash + Clone,
    F: Fn(&'a T) -> K,
{
    let (groups, index) = items.iter().fold(
        (Vec::<(K, Vec<&'a T>)>::new(), HashMap::<K, usize>::new()),
        |(mut groups, mut index), item| {
            let k = key(item);
            let next = groups.len();
            let slot = *index.entry(k.clone()).or_insert(next);
            if slot == next {
                groups.push((k, Vec::new()));
            }
            groups[slot].1.push(item);
            (groups, index)
        },
    );

    trace!("grouped {} items into {} groups", items.len(), groups.len());
    Groups { groups, index }
}

/// Partition records by asset identifier.
pub fn group_by_coin(records: &[Record]) -> Groups<'_, &str, Record> {
    group_by_key(records, |r| r.coin.as_str())
}

/// Partition records by date string.
pub fn group_by_date(records: &[Record]) -> Groups<'_, &str, Record> {
    group_by_key(records, |r| r.date.as_str())
}

/// Stable sort of records by parsed date, oldest first.
///
/// Each date is parsed once.
pub fn sort_chronologically<'r>(records: &mut [&'r Record]) {
    records.sort_by_cached_key(|r| {
        let record: &'r Record = *r;
        date_key(&record.date)
    });
}

/// Partition records by coin with each group in chronological order.
pub(crate) fn chronological_groups(records: &[Record]) -> Vec<(&str, Vec<&Record>)> {
    group_by_coin(records)
        .into_iter()
        .map(|(coin, mut members)| {
            sort_chronologically(&mut members);
            (coin, members)
        })
        .collect()
}
