//! Run compression for integer collections.
//!
//! This module provides:
//! - [`runs`] — Collapse a collection into maximal consecutive spans
//! - [`range_str`] — Render the spans as a terse human-readable string

use std::collections::BTreeSet;

/// Collapses `values` into maximal runs of consecutive integers.
///
/// Duplicates collapse first (set semantics), then the unique values
/// are walked in ascending order; neighbors that differ by exactly one
/// extend the pending run. Runs are returned as inclusive
/// `(start, end)` pairs, ascending by start, with a gap of at least two
/// between consecutive runs. Adjacency is by integer difference, so
/// negative values behave like any others.
#[must_use]
pub fn runs<I>(values: I) -> Vec<(i64, i64)>
where
    I: IntoIterator<Item = i64>,
{
    let unique: BTreeSet<i64> = values.into_iter().collect();

    let mut spans = Vec::new();
    let mut pending: Option<(i64, i64)> = None;
    for value in unique {
        match pending {
            Some((start, end)) if end.checked_add(1) == Some(value) => {
                pending = Some((start, value));
            }
            Some(span) => {
                spans.push(span);
                pending = Some((value, value));
            }
            None => pending = Some((value, value)),
        }
    }
    if let Some(span) = pending {
        spans.push(span);
    }
    spans
}

/// Renders `values` as a terse "ranges and singles" description.
///
/// A run of length one prints as the bare number, a longer run as
/// `start-end`. Segments join with `", "` except the final joint, which
/// is `" & "`; a single segment has no separator at all. Input order
/// and duplicates do not affect the result, and empty input yields the
/// empty string.
///
/// ```rust
/// use labrig_util::ranges::range_str;
///
/// let indices = [0, 1, 2, 3, 4, 7, 8, 11, 15, 20];
/// assert_eq!(range_str(indices), "0-4, 7-8, 11, 15 & 20");
/// ```
#[must_use]
pub fn range_str<I>(values: I) -> String
where
    I: IntoIterator<Item = i64>,
{
    let segments: Vec<String> = runs(values)
        .into_iter()
        .map(|(start, end)| {
            if start == end {
                start.to_string()
            } else {
                format!("{start}-{end}")
            }
        })
        .collect();

    match segments.split_last() {
        None => String::new(),
        Some((only, [])) => only.clone(),
        Some((last, init)) => format!("{} & {last}", init.join(", ")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use test_case::test_case;

    #[test_case(&[1, 2, 3, 4, 5, 6, 7, 8, 12, 17], "1-8, 12 & 17" ; "long run then singles")]
    #[test_case(&[0, 6, 7, 10, 11, 12, 30, 30], "0, 6-7, 10-12 & 30" ; "duplicates collapse")]
    #[test_case(&[], "" ; "empty input")]
    #[test_case(&[5], "5" ; "single value")]
    #[test_case(&[3, 4], "3-4" ; "one run of two")]
    #[test_case(&[1, 3], "1 & 3" ; "two singles")]
    #[test_case(&[-3, -2, -1, 5], "-3--1 & 5" ; "negative run")]
    fn range_str_examples(values: &[i64], expected: &str) {
        assert_eq!(range_str(values.iter().copied()), expected);
    }

    #[test]
    fn runs_are_ascending_and_gapped() {
        let spans = runs([20, 0, 1, 2, 3, 4, 7, 8, 11, 15]);
        assert_eq!(spans, vec![(0, 4), (7, 8), (11, 11), (15, 15), (20, 20)]);
    }

    #[test]
    fn runs_handle_extreme_values() {
        let spans = runs([i64::MAX, i64::MIN, i64::MAX - 1]);
        assert_eq!(spans, vec![(i64::MIN, i64::MIN), (i64::MAX - 1, i64::MAX)]);
    }

    proptest! {
        #[test]
        fn prop_result_ignores_order_and_duplicates(
            values in proptest::collection::vec(-10_000i64..10_000, 0..200)
        ) {
            let mut shuffled: Vec<i64> = values.iter().rev().copied().collect();
            shuffled.extend(values.iter().copied());

            prop_assert_eq!(range_str(values), range_str(shuffled));
        }

        #[test]
        fn prop_runs_partition_the_unique_values(
            values in proptest::collection::vec(-10_000i64..10_000, 0..200)
        ) {
            let spans = runs(values.iter().copied());

            // Ascending, non-touching spans.
            for window in spans.windows(2) {
                prop_assert!(window[0].1 + 1 < window[1].0);
            }

            // Every input value is covered, and span bounds are inputs.
            let total: i64 = spans.iter().map(|(start, end)| end - start + 1).sum();
            let unique: std::collections::BTreeSet<i64> = values.iter().copied().collect();
            prop_assert_eq!(total, unique.len() as i64);
            for value in unique {
                prop_assert!(spans.iter().any(|&(start, end)| start <= value && value <= end));
            }
        }
    }
}
