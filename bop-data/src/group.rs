//! Order-preserving group-and-sum shared by the aggregation passes.

use bop_anp::record::ProductionRecord;
use std::cmp::Ordering;

/// Sum volumes per key, keys in order of first appearance.
pub(crate) fn sum_by<'a, K, F>(records: &[&'a ProductionRecord], key: F) -> Vec<(K, f64)>
where
    K: PartialEq,
    F: Fn(&'a ProductionRecord) -> K,
{
    let mut sums: Vec<(K, f64)> = Vec::new();
    for record in records.iter().copied() {
        let k = key(record);
        match sums.iter_mut().find(|(existing, _)| *existing == k) {
            Some((_, total)) => *total += record.volume,
            None => sums.push((k, record.volume)),
        }
    }
    sums
}

/// [`sum_by`], then sorted descending by sum. The sort is stable, so keys
/// with equal sums keep their first-appearance order.
pub(crate) fn sum_descending<'a, K, F>(records: &[&'a ProductionRecord], key: F) -> Vec<(K, f64)>
where
    K: PartialEq,
    F: Fn(&'a ProductionRecord) -> K,
{
    let mut sums = sum_by(records, key);
    sums.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    sums
}
