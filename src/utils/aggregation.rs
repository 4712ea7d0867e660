use statrs::statistics::Statistics;
use std::collections::BTreeMap;

/// Group values by key, keeping keys in sorted order.
pub fn group_by<T, K, V, FK, FV>(items: &[T], key: FK, value: FV) -> BTreeMap<K, Vec<V>>
where
    K: Ord,
    FK: Fn(&T) -> Option<K>,
    FV: Fn(&T) -> Option<V>,
{
    let mut groups: BTreeMap<K, Vec<V>> = BTreeMap::new();
    for item in items {
        // Rows with a missing key are dropped, rows with a missing value
        // still open the group.
        if let Some(k) = key(item) {
            let entry = groups.entry(k).or_default();
            if let Some(v) = value(item) {
                entry.push(v);
            }
        }
    }
    groups
}

/// Arithmetic mean, `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.mean())
    }
}

/// Fraction of `true` values, `None` for an empty slice.
pub fn rate(flags: &[bool]) -> Option<f64> {
    let as_f64: Vec<f64> = flags.iter().map(|&b| if b { 1.0 } else { 0.0 }).collect();
    mean(&as_f64)
}

/// Dense rank with the largest value ranked 1.
pub fn dense_rank_desc(values: &[u32]) -> Vec<usize> {
    let mut distinct: Vec<u32> = values.to_vec();
    distinct.sort_unstable_by(|a, b| b.cmp(a));
    distinct.dedup();
    values
        .iter()
        .map(|v| match distinct.binary_search_by(|probe| v.cmp(probe)) {
            Ok(idx) => idx + 1,
            Err(idx) => idx + 1,
        })
        .collect()
}

/// Format a number with thousands separators and no decimals.
pub fn format_thousands(value: f64) -> String {
    let rounded = value.round();
    let negative = rounded < 0.0;
    let digits = format!("{:.0}", rounded.abs());
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if negative {
        out.insert(0, '-');
    }
    out
}

/// Format large values with K/M suffixes for axis labels.
pub fn format_compact(value: f64) -> String {
    if value.abs() >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if value.abs() >= 1_000.0 {
        format!("{:.1}K", value / 1_000.0)
    } else {
        format!("{:.0}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_group_by_drops_missing_keys() {
        let data = vec![(Some(1), 10.0), (None, 20.0), (Some(1), 30.0), (Some(2), 5.0)];
        let groups = group_by(&data, |(k, _)| *k, |(_, v)| Some(*v));

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[&1], vec![10.0, 30.0]);
        assert_eq!(groups[&2], vec![5.0]);
    }

    #[test]
    fn test_group_by_keeps_group_with_missing_values() {
        let data = vec![("a", None), ("b", Some(1.0))];
        let groups = group_by(&data, |(k, _)| Some(*k), |(_, v)| *v);

        assert!(groups["a"].is_empty());
        assert_eq!(mean(&groups["a"]), None);
        assert_eq!(mean(&groups["b"]), Some(1.0));
    }

    #[test]
    fn test_rate() {
        assert_eq!(rate(&[true, false, true, true]), Some(0.75));
        assert_eq!(rate(&[]), None);
    }

    #[test]
    fn test_dense_rank_desc() {
        let ranks = dense_rank_desc(&[1, 3, 3, 2, 5]);
        assert_eq!(ranks, vec![4, 2, 2, 3, 1]);
    }

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0.0), "0");
        assert_eq!(format_thousands(999.4), "999");
        assert_eq!(format_thousands(1_000.0), "1,000");
        assert_eq!(format_thousands(12_345_678.0), "12,345,678");
        assert_eq!(format_thousands(-4_500.0), "-4,500");
    }

    #[test]
    fn test_format_compact() {
        assert_eq!(format_compact(2_200_000.0), "2.2M");
        assert_eq!(format_compact(1_500.0), "1.5K");
        assert_eq!(format_compact(42.0), "42");
    }
}
