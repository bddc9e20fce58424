//! Assertion functions for testing collection outputs.
//!
//! Element types only need `PartialEq` here, so JSON records can be compared
//! directly.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::{BuildHasher, Hash};

/// Assert that two collections are equal in order and content.
///
/// # Panics
///
/// Panics if the collections differ in length or content.
///
/// # Example
///
/// ```
/// use ironcollect::testing::assert_collections_equal;
///
/// assert_collections_equal(&[1, 2, 3], &[1, 2, 3]);
/// ```
pub fn assert_collections_equal<T: Debug + PartialEq>(actual: &[T], expected: &[T]) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "Collection length mismatch:\n  Expected length: {}\n  Actual length: {}\n  Expected: {expected:?}\n  Actual: {actual:?}",
        expected.len(),
        actual.len()
    );

    for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        assert_eq!(
            a, e,
            "Collection mismatch at index {i}:\n  Expected: {e:?}\n  Actual: {a:?}\n  Full expected: {expected:?}\n  Full actual: {actual:?}"
        );
    }
}

/// `true` if `a` and `b` hold the same elements with the same multiplicity.
fn same_multiset<T: PartialEq>(a: &[T], b: &[T]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut used = vec![false; b.len()];
    a.iter().all(|x| {
        match (0..b.len()).find(|&j| !used[j] && *x == b[j]) {
            Some(j) => {
                used[j] = true;
                true
            }
            None => false,
        }
    })
}

/// Assert that two collections contain the same elements, ignoring order.
///
/// Multiplicity matters: `[1, 1, 2]` and `[1, 2, 2]` are not equal.
///
/// # Panics
///
/// Panics if the collections differ as multisets.
///
/// # Example
///
/// ```
/// use ironcollect::testing::assert_collections_unordered_equal;
///
/// assert_collections_unordered_equal(&[3, 1, 2], &[1, 2, 3]);
/// ```
pub fn assert_collections_unordered_equal<T: Debug + PartialEq>(actual: &[T], expected: &[T]) {
    assert!(
        same_multiset(actual, expected),
        "Collection content mismatch (ignoring order):\n  Expected: {expected:?}\n  Actual: {actual:?}"
    );
}

/// Assert that `kept` and `dropped` together are exactly `source`: their
/// concatenation equals `source` as a multiset and no element of `source`
/// is in both.
///
/// # Panics
///
/// Panics if the two parts do not partition `source`.
///
/// # Example
///
/// ```
/// use ironcollect::testing::assert_partition;
///
/// assert_partition(&[1, 2, 3, 4], &[2, 4], &[1, 3]);
/// ```
pub fn assert_partition<T: Debug + PartialEq + Clone>(source: &[T], kept: &[T], dropped: &[T]) {
    let mut both = kept.to_vec();
    both.extend_from_slice(dropped);
    assert!(
        same_multiset(source, &both),
        "Parts do not add up to the source:\n  Source: {source:?}\n  Kept: {kept:?}\n  Dropped: {dropped:?}"
    );
    for item in kept {
        assert!(
            !dropped.contains(item),
            "Element present in both parts: {item:?}\n  Kept: {kept:?}\n  Dropped: {dropped:?}"
        );
    }
}

/// Assert that all elements in a collection satisfy a predicate.
///
/// # Panics
///
/// Panics if any element does not satisfy the predicate.
///
/// # Example
///
/// ```
/// use ironcollect::testing::assert_all;
///
/// assert_all(&[2, 4, 6, 8], |x| x % 2 == 0);
/// ```
pub fn assert_all<T: Debug>(collection: &[T], predicate: impl Fn(&T) -> bool) {
    for (i, item) in collection.iter().enumerate() {
        assert!(
            predicate(item),
            "Predicate failed for element at index {i}:\n  Element: {item:?}\n  Collection: {collection:?}"
        );
    }
}

/// Assert that at least one element in a collection satisfies a predicate.
///
/// # Panics
///
/// Panics if no elements satisfy the predicate.
pub fn assert_any<T: Debug>(collection: &[T], predicate: impl Fn(&T) -> bool) {
    assert!(
        collection.iter().any(&predicate),
        "No elements satisfied the predicate:\n  Collection: {collection:?}"
    );
}

/// Assert that no elements in a collection satisfy a predicate.
///
/// # Panics
///
/// Panics if any element satisfies the predicate.
pub fn assert_none<T: Debug>(collection: &[T], predicate: impl Fn(&T) -> bool) {
    for (i, item) in collection.iter().enumerate() {
        assert!(
            !predicate(item),
            "Predicate unexpectedly succeeded for element at index {i}:\n  Element: {item:?}\n  Collection: {collection:?}"
        );
    }
}

/// Assert that two bucket maps (as produced by grouping) hold the same keys,
/// and the same elements in the same order under each key.
///
/// # Panics
///
/// Panics if the maps differ in keys or in any bucket.
///
/// # Example
///
/// ```
/// use ironcollect::testing::assert_groups_equal;
/// use std::collections::HashMap;
///
/// let actual = HashMap::from([("a", vec![1, 2]), ("b", vec![3])]);
/// let expected = HashMap::from([("b", vec![3]), ("a", vec![1, 2])]);
/// assert_groups_equal(&actual, &expected);
/// ```
pub fn assert_groups_equal<K, V, S: BuildHasher>(
    actual: &HashMap<K, Vec<V>, S>,
    expected: &HashMap<K, Vec<V>, S>,
) where
    K: Debug + Eq + Hash,
    V: Debug + PartialEq,
{
    assert_eq!(
        actual.len(),
        expected.len(),
        "Bucket count mismatch:\n  Expected: {expected:?}\n  Actual: {actual:?}"
    );

    for (key, expected_bucket) in expected {
        match actual.get(key) {
            Some(actual_bucket) if actual_bucket == expected_bucket => {}
            Some(actual_bucket) => {
                panic!(
                    "Bucket mismatch for key {key:?}:\n  Expected: {expected_bucket:?}\n  Actual: {actual_bucket:?}"
                );
            }
            None => {
                panic!("Missing bucket: {key:?}");
            }
        }
    }
}
