//! Depth-first flattening of nested JSON values.
//!
//! Arrays are recursed into; every other value — including strings and
//! objects — is atomic. This mirrors how pipeline metadata is shaped:
//! a trial list may nest arbitrarily, but a string label or a
//! key-value record is one element, not a collection to descend into.

use serde_json::Value;

/// Flattens `value` depth-first into its atomic elements.
///
/// A non-array input flattens to a single-element vector; an empty
/// array flattens to nothing.
///
/// ```rust
/// use labrig_util::flatten::flatten;
/// use serde_json::json;
///
/// let nested = json!([1, [2, 3], "label", {"k": 1}]);
/// assert_eq!(
///     flatten(&nested),
///     vec![json!(1), json!(2), json!(3), json!("label"), json!({"k": 1})]
/// );
/// ```
#[must_use]
pub fn flatten(value: &Value) -> Vec<Value> {
    iter(value).cloned().collect()
}

/// Lazy variant of [`flatten`], yielding borrowed elements.
///
/// The iterator is finite and single-pass; once consumed it cannot be
/// restarted.
#[must_use]
pub fn iter(value: &Value) -> FlattenIter<'_> {
    FlattenIter { stack: vec![value] }
}

/// Iterator over the atomic elements of a nested value.
///
/// Keeps an explicit work stack, so nesting depth never grows the call
/// stack during iteration.
#[derive(Debug)]
pub struct FlattenIter<'a> {
    stack: Vec<&'a Value>,
}

impl<'a> Iterator for FlattenIter<'a> {
    type Item = &'a Value;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(value) = self.stack.pop() {
            match value {
                // Reversed so the leftmost child is popped first.
                Value::Array(items) => self.stack.extend(items.iter().rev()),
                leaf => return Some(leaf),
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn flattens_depth_first() {
        let nested = json!([1, 2, 3, [1, 2], "string", 0.1, {"1": null}, [[1, 2, 3], {"1": 1}, 1]]);
        let flat = flatten(&nested);

        assert_eq!(flat.len(), 11);
        assert_eq!(&flat[..5], &[json!(1), json!(2), json!(3), json!(1), json!(2)]);
        assert_eq!(flat[5], json!("string"));
        assert_eq!(flat[10], json!(1));
    }

    #[test]
    fn strings_and_objects_are_atomic() {
        let nested = json!(["ab", {"nested": [1, 2]}]);
        let flat = flatten(&nested);

        assert_eq!(flat, vec![json!("ab"), json!({"nested": [1, 2]})]);
    }

    #[test]
    fn scalar_input_is_its_own_element() {
        assert_eq!(flatten(&json!(7)), vec![json!(7)]);
        assert_eq!(flatten(&json!(null)), vec![json!(null)]);
    }

    #[test]
    fn empty_arrays_flatten_to_nothing() {
        assert!(flatten(&json!([])).is_empty());
        assert!(flatten(&json!([[], [[]]])).is_empty());
    }

    #[test]
    fn lazy_iterator_matches_eager_flatten() {
        let nested = json!([[1, [2]], 3, ["x", [{"k": 0}]]]);
        let eager = flatten(&nested);
        let lazy: Vec<Value> = iter(&nested).cloned().collect();
        assert_eq!(eager, lazy);
    }

    #[test]
    fn lazy_iterator_is_single_pass() {
        let nested = json!([1, 2]);
        let mut it = iter(&nested);
        assert_eq!(it.next(), Some(&json!(1)));
        assert_eq!(it.next(), Some(&json!(2)));
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
    }

    #[test]
    fn deep_nesting_does_not_recurse() {
        let mut nested = json!(42);
        for _ in 0..2_000 {
            nested = Value::Array(vec![nested]);
        }
        assert_eq!(flatten(&nested), vec![json!(42)]);
    }
}
