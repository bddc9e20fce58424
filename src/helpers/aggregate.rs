//! Folding and partitioning.
//!
//! # Overview
//! - [`Collection::reduce`] / [`Collection::reduce_with_carry`] -- left fold
//! - [`Collection::group_by`] -- partition by a computed key
//! - [`Collection::group_by_path`] -- partition by the value at a key path
//! - [`Collection::group_by_path_with`] -- the same, with the bucket key rewritten
//! - [`Collection::expand`] -- fan each element out into every bucket named by
//!   the array at a key path
//!
//! Buckets are built with a single pass over a `HashMap` index and keep the
//! input order of their elements. Bucket iteration order is unspecified.

use crate::key_path::{Key, KeyPath, Record};
use crate::Collection;
use serde_json::Value;
use std::collections::HashMap;
use std::hash::Hash;
use tracing::trace;

impl<T> Collection<T> {
    /// Fold left to right starting from an absent accumulator.
    ///
    /// Empty input returns `None`.
    ///
    /// # Example
    /// ```
    /// use ironcollect::*;
    ///
    /// let chars = from_vec(vec!["a", "ccc", "bb"])
    ///     .reduce(|acc: Option<usize>, s| Some(acc.unwrap_or(0) + s.len()));
    /// assert_eq!(chars, Some(6));
    /// ```
    pub fn reduce<A, F>(&self, f: F) -> Option<A>
    where
        F: Fn(Option<A>, &T) -> Option<A>,
    {
        self.items.iter().fold(None, f)
    }

    /// Fold left to right starting from `carry`. Empty input returns `carry`.
    pub fn reduce_with_carry<A, F>(&self, carry: A, f: F) -> A
    where
        F: Fn(A, &T) -> A,
    {
        self.items.iter().fold(carry, f)
    }
}

impl<T: Clone> Collection<T> {
    /// Partition elements by `key_fn`.
    ///
    /// Every element lands in exactly one bucket.
    pub fn group_by<K, F>(&self, key_fn: F) -> HashMap<K, Vec<T>>
    where
        K: Eq + Hash,
        F: Fn(&T) -> K,
    {
        let mut groups: HashMap<K, Vec<T>> = HashMap::new();
        for t in &self.items {
            groups.entry(key_fn(t)).or_default().push(t.clone());
        }
        trace!(elements = self.items.len(), buckets = groups.len(), "group_by");
        groups
    }
}

impl<T: Record + Clone> Collection<T> {
    /// Partition elements by their value at `path`.
    ///
    /// Elements where `path` is absent share the [`Key::Null`] bucket.
    ///
    /// # Example
    /// ```
    /// use ironcollect::*;
    /// use serde_json::json;
    ///
    /// let g = from_vec(vec![json!({"a": 1}), json!({"a": 2}), json!({"a": 1})])
    ///     .group_by_path("a");
    /// assert_eq!(g[&Key::Int(1)], vec![json!({"a": 1}), json!({"a": 1})]);
    /// assert_eq!(g[&Key::Int(2)], vec![json!({"a": 2})]);
    /// ```
    pub fn group_by_path(&self, path: impl Into<KeyPath>) -> HashMap<Key, Vec<T>> {
        let path = path.into();
        self.group_by(|t| Key::of(t.resolve(&path)))
    }

    /// Partition elements by `rekey(element, raw_key)`, where `raw_key` is
    /// the element's value at `path`.
    pub fn group_by_path_with<K, F>(&self, path: impl Into<KeyPath>, rekey: F) -> HashMap<K, Vec<T>>
    where
        K: Eq + Hash,
        F: Fn(&T, &Key) -> K,
    {
        let path = path.into();
        self.group_by(|t| rekey(t, &Key::of(t.resolve(&path))))
    }
}

impl<T: Record + Clone + PartialEq> Collection<T> {
    /// Treat the array at `path` as a list of bucket keys and append the
    /// whole element to each of those buckets.
    ///
    /// An element whose value at `path` is absent or not an array contributes
    /// to no bucket. With `unique`, an element is not added to a bucket that
    /// already holds an equal element.
    ///
    /// # Example
    /// ```
    /// use ironcollect::*;
    /// use serde_json::json;
    ///
    /// let a = json!({"groups": [1, 2]});
    /// let b = json!({"groups": [2, 3, 3]});
    /// let c = from_vec(vec![a.clone(), b.clone()]);
    ///
    /// let all = c.expand("groups", false);
    /// assert_eq!(all[&Key::Int(2)], vec![a.clone(), b.clone()]);
    /// assert_eq!(all[&Key::Int(3)], vec![b.clone(), b.clone()]);
    ///
    /// let uniq = c.expand("groups", true);
    /// assert_eq!(uniq[&Key::Int(3)], vec![b]);
    /// ```
    pub fn expand(&self, path: impl Into<KeyPath>, unique: bool) -> HashMap<Key, Vec<T>> {
        let path = path.into();
        let mut buckets: HashMap<Key, Vec<T>> = HashMap::new();
        for t in &self.items {
            let Some(Value::Array(keys)) = t.resolve(&path) else {
                continue;
            };
            for k in keys {
                let bucket = buckets.entry(Key::from(k)).or_default();
                if unique && bucket.contains(t) {
                    continue;
                }
                bucket.push(t.clone());
            }
        }
        trace!(elements = self.items.len(), buckets = buckets.len(), unique, "expand");
        buckets
    }
}
