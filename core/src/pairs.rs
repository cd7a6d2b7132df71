//! Pair-array detection and key/value normalization
//!
//! A "pair array" is a list whose elements are all 2-element lists, e.g.
//! `[["a", 1], ["b", 2]]` — the shape expansion values take when a caller
//! hands over an association list instead of a mapping. [`to_mapping`]
//! converts that shape into a [`Value::Map`].
//!
//! # Strict vs. fast detection
//!
//! [`is_pair_array`] validates every element (O(n), safe);
//! [`looks_like_pair_array`] peeks only at the first element (O(1)) and
//! assumes the rest of the list is shaped the same. The two agree whenever
//! the list is uniformly pairs or uniformly non-pairs; on mixed-shape input
//! the fast check can wave through a list the strict check refuses, and the
//! resulting mapping is malformed (see [`to_mapping`]). That divergence is
//! an intentional performance/safety tradeoff, preserved as two separately
//! named predicates.

use crate::Value;

/// Strict pair-array check: the value is a list and every element is a
/// 2-element list. O(n).
///
/// An empty list vacuously satisfies "every element" and is a pair array.
///
/// # Example
///
/// ```
/// use rutem::{is_pair_array, Value};
///
/// let pairs = Value::List(vec![
///     Value::List(vec!["a".into(), Value::Int(1)]),
///     Value::List(vec!["b".into(), Value::Int(2)]),
/// ]);
/// assert!(is_pair_array(&pairs));
///
/// assert!(is_pair_array(&Value::List(vec![])));
/// assert!(!is_pair_array(&Value::List(vec![Value::Int(1)])));
/// assert!(!is_pair_array(&Value::String("x".into())));
/// ```
#[must_use]
pub fn is_pair_array(value: &Value) -> bool {
    value.as_list().is_some_and(|items| {
        items
            .iter()
            .all(|item| item.as_list().is_some_and(|pair| pair.len() == 2))
    })
}

/// Fast pair-array heuristic: the value is a list whose first element is
/// itself a list. O(1).
///
/// Only the first element is inspected; homogeneity is assumed, not
/// checked. An empty list passes (agreeing with [`is_pair_array`]). A
/// mixed-shape list whose first element happens to be a list also passes —
/// use [`is_pair_array`] when the input shape is untrusted.
#[must_use]
pub fn looks_like_pair_array(value: &Value) -> bool {
    value.as_list().is_some_and(|items| match items.first() {
        Some(first) => first.is_list(),
        None => true,
    })
}

/// Normalize a pair array into a key/value mapping.
///
/// `strict` selects the detection mode: [`is_pair_array`] when `true`,
/// [`looks_like_pair_array`] when `false`. When the selected check fails,
/// the input is returned unchanged. When it passes, the list is flattened
/// one level (non-list elements pass through as single items) and
/// successive items are paired into key/value entries.
///
/// Later occurrences of a duplicate key overwrite earlier ones, in list
/// order; the entry keeps its first position. In fast mode, a mixed-shape
/// list can produce a malformed mapping — an odd trailing item becomes a
/// key bound to `Value::None`. That is the documented cost of skipping the
/// full scan, not a defect to guard against here.
///
/// # Example
///
/// ```
/// use rutem::{to_mapping, Value};
///
/// let pairs = Value::List(vec![
///     Value::List(vec!["a".into(), Value::Int(1)]),
///     Value::List(vec!["a".into(), Value::Int(2)]),
/// ]);
/// let mapping = to_mapping(pairs, true);
/// assert_eq!(mapping.map_get(&"a".into()), Some(&Value::Int(2)));
///
/// // Non-pair shapes come back unchanged.
/// let original = to_mapping(Value::String("x".into()), true);
/// assert_eq!(original, Value::String("x".into()));
/// ```
#[must_use]
pub fn to_mapping(value: Value, strict: bool) -> Value {
    let convertible = if strict {
        is_pair_array(&value)
    } else {
        looks_like_pair_array(&value)
    };
    if !convertible {
        return value;
    }
    let items = match value {
        Value::List(items) => items,
        other => return other,
    };

    // One-level flatten: list elements contribute their items, anything
    // else passes through as a single item.
    let mut flat = Vec::with_capacity(items.len() * 2);
    for item in items {
        match item {
            Value::List(inner) => flat.extend(inner),
            other => flat.push(other),
        }
    }

    let mut entries: Vec<(Value, Value)> = Vec::with_capacity(flat.len() / 2);
    let mut flat = flat.into_iter();
    while let Some(key) = flat.next() {
        let val = flat.next().unwrap_or(Value::None);
        match entries.iter_mut().find(|(k, _)| k == &key) {
            Some(entry) => entry.1 = val,
            None => entries.push((key, val)),
        }
    }
    Value::Map(entries)
}
