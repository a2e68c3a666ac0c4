//! Stable merge sort shared by every ranked report.
//!
//! One routine orders movies by revenue, tallies by total, word tables by
//! count and genre tags alphabetically. Callers say *what* to compare by
//! passing a key-extraction closure; the merge logic never changes.
//!
//! ## Algorithm
//! 1. Extract each element's key once
//! 2. Split at the midpoint and sort both halves recursively
//! 3. Merge, taking the left element whenever it is at least as good as the
//!    right one under `Direction` (">=" descending, "<=" ascending)
//!
//! Step 3's "left wins ties" rule is what makes the sort stable: equal keys
//! leave in the order they arrived. O(n log n) comparisons in every case.

use serde::{Deserialize, Serialize};

/// Order in which ranked output is produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Largest key first (every "top N" report)
    #[default]
    Descending,
    /// Smallest key first
    Ascending,
}

impl Direction {
    /// Whether the left operand of a merge step goes out first.
    ///
    /// Keys that do not compare with themselves (NaN) rank after every
    /// comparable key in either direction, so they collect at the tail and
    /// the comparable keys stay ordered. Two such keys keep input order.
    pub(crate) fn left_wins<K: PartialOrd>(self, left: &K, right: &K) -> bool {
        match (is_incomparable(left), is_incomparable(right)) {
            (_, true) => true,
            (true, false) => false,
            (false, false) => match self {
                Direction::Descending => left >= right,
                Direction::Ascending => left <= right,
            },
        }
    }
}

fn is_incomparable<K: PartialOrd>(key: &K) -> bool {
    key.partial_cmp(key).is_none()
}

/// Sort `items` by the key `key` extracts, stably, returning a new vector.
///
/// Empty and single-element input comes back unchanged.
pub fn sort_by_key<T, K, F>(items: Vec<T>, direction: Direction, key: F) -> Vec<T>
where
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    if items.len() <= 1 {
        return items;
    }

    let keyed: Vec<(K, T)> = items.into_iter().map(|item| (key(&item), item)).collect();

    merge_sort(keyed, direction)
        .into_iter()
        .map(|(_, item)| item)
        .collect()
}

/// Sort, then keep only the first `limit` elements
pub fn top_n<T, K, F>(items: Vec<T>, direction: Direction, limit: usize, key: F) -> Vec<T>
where
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    let mut sorted = sort_by_key(items, direction, key);
    sorted.truncate(limit);
    sorted
}

fn merge_sort<K: PartialOrd, T>(mut items: Vec<(K, T)>, direction: Direction) -> Vec<(K, T)> {
    if items.len() <= 1 {
        return items;
    }

    let right = items.split_off(items.len() / 2);
    let left = merge_sort(items, direction);
    let right = merge_sort(right, direction);

    merge(left, right, direction)
}

fn merge<K: PartialOrd, T>(
    left: Vec<(K, T)>,
    right: Vec<(K, T)>,
    direction: Direction,
) -> Vec<(K, T)> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_left = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => direction.left_wins(&l.0, &r.0),
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => break,
        };

        if take_left {
            merged.extend(left.next());
        } else {
            merged.extend(right.next());
        }
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_permutation(mut a: Vec<(i64, usize)>, mut b: Vec<(i64, usize)>) -> bool {
        a.sort();
        b.sort();
        a == b
    }

    #[test]
    fn test_empty_and_single() {
        let empty: Vec<i32> = Vec::new();
        assert!(sort_by_key(empty, Direction::Descending, |x| *x).is_empty());

        assert_eq!(sort_by_key(vec![7], Direction::Descending, |x| *x), vec![7]);
    }

    #[test]
    fn test_descending_order() {
        let sorted = sort_by_key(vec![3, 9, 1, 4, 1, 5, 9, 2, 6], Direction::Descending, |x| *x);
        assert_eq!(sorted, vec![9, 9, 6, 5, 4, 3, 2, 1, 1]);
    }

    #[test]
    fn test_ascending_strings() {
        let tags = vec!["Drama", "Animation", "Comedy", "Animation"]
            .into_iter()
            .map(String::from)
            .collect::<Vec<_>>();

        let sorted = sort_by_key(tags, Direction::Ascending, |t| t.clone());
        assert_eq!(sorted, vec!["Animation", "Animation", "Comedy", "Drama"]);
    }

    #[test]
    fn test_stability_on_ties() {
        // (key, original position)
        let input: Vec<(i64, usize)> = vec![5, 3, 5, 1, 3, 5, 0, 3]
            .into_iter()
            .enumerate()
            .map(|(pos, key)| (key, pos))
            .collect();

        let sorted = sort_by_key(input.clone(), Direction::Descending, |pair| pair.0);

        assert!(is_permutation(input, sorted.clone()));
        for pair in sorted.windows(2) {
            assert!(pair[0].0 >= pair[1].0);
            if pair[0].0 == pair[1].0 {
                assert!(pair[0].1 < pair[1].1, "equal keys must keep input order");
            }
        }
    }

    #[test]
    fn test_stability_ascending() {
        let input = vec![("b", 1), ("a", 2), ("b", 3), ("a", 4)];
        let sorted = sort_by_key(input, Direction::Ascending, |pair| pair.0);
        assert_eq!(sorted, vec![("a", 2), ("a", 4), ("b", 1), ("b", 3)]);
    }

    #[test]
    fn test_float_keys() {
        let sorted = sort_by_key(vec![0.5_f32, 12.25, 3.0], Direction::Descending, |x| *x);
        assert_eq!(sorted, vec![12.25, 3.0, 0.5]);
    }

    #[test]
    fn test_nan_keys_sink_to_the_tail() {
        let sorted = sort_by_key(vec![3.0_f32, f32::NAN, 1.0, 0.0], Direction::Descending, |x| *x);
        assert_eq!(&sorted[..3], &[3.0, 1.0, 0.0]);
        assert!(sorted[3].is_nan());

        let sorted = sort_by_key(vec![f32::NAN, 2.0, f32::NAN, -1.0, 5.0], Direction::Ascending, |x| *x);
        assert_eq!(&sorted[..3], &[-1.0, 2.0, 5.0]);
        assert!(sorted[3..].iter().all(|x| x.is_nan()));
    }

    #[test]
    fn test_nan_keys_keep_input_order() {
        let input = vec![("a", f64::NAN), ("b", 1.0), ("c", f64::NAN)];
        let sorted = sort_by_key(input, Direction::Descending, |pair| pair.1);
        let names: Vec<&str> = sorted.iter().map(|pair| pair.0).collect();
        assert_eq!(names, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_larger_input_is_ordered() {
        // Deterministic pseudo-random sequence
        let mut state: u64 = 42;
        let input: Vec<(i64, usize)> = (0..1000)
            .map(|pos| {
                state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
                (((state >> 33) % 50) as i64, pos)
            })
            .collect();

        let sorted = sort_by_key(input.clone(), Direction::Descending, |pair| pair.0);
        assert_eq!(sorted.len(), input.len());
        assert!(is_permutation(input, sorted.clone()));
        assert!(sorted
            .windows(2)
            .all(|w| w[0].0 > w[1].0 || (w[0].0 == w[1].0 && w[0].1 < w[1].1)));
    }

    #[test]
    fn test_top_n() {
        let top = top_n(vec![4, 8, 15, 16, 23, 42], Direction::Descending, 3, |x| *x);
        assert_eq!(top, vec![42, 23, 16]);

        let all = top_n(vec![1, 2], Direction::Descending, 10, |x| *x);
        assert_eq!(all, vec![2, 1]);
    }
}
