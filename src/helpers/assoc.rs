//! Pairing, associative maps and string joining.
//!
//! - [`Collection::zip`] -- positional pairs, truncated to the shorter side
//! - [`Collection::map_to_assoc`] -- build a map from `(key, value)` pairs
//! - [`Collection::counted_set`] -- occurrence count per distinct element
//! - [`Collection::implode`] / [`Collection::implode_path`] -- join string forms

use crate::key_path::{display_value, KeyPath, Record};
use crate::utils::AsText;
use crate::Collection;
use std::collections::HashMap;
use std::hash::Hash;

impl<T: Clone> Collection<T> {
    /// Pair elements positionally with `other`.
    ///
    /// # Example
    /// ```
    /// use ironcollect::*;
    ///
    /// let z = from_vec(vec![1, 2, 3]).zip(&from_vec(vec![4, 5]));
    /// assert_eq!(z, vec![(1, 4), (2, 5)]);
    /// ```
    pub fn zip<U: Clone>(&self, other: &Collection<U>) -> Collection<(T, U)> {
        self.items
            .iter()
            .cloned()
            .zip(other.items.iter().cloned())
            .collect()
    }
}

impl<T> Collection<T> {
    /// Build a map from the `(key, value)` pair `f(element, index)` returns
    /// for each element. Later keys overwrite earlier ones.
    pub fn map_to_assoc<K, V, F>(&self, f: F) -> HashMap<K, V>
    where
        K: Eq + Hash,
        F: Fn(&T, usize) -> (K, V),
    {
        self.items.iter().enumerate().map(|(i, t)| f(t, i)).collect()
    }
}

impl<T: Clone + Eq + Hash> Collection<T> {
    /// Occurrences of each distinct element.
    pub fn counted_set(&self) -> HashMap<T, usize> {
        let mut counts = HashMap::new();
        for t in &self.items {
            *counts.entry(t.clone()).or_insert(0) += 1;
        }
        counts
    }
}

impl<T: AsText> Collection<T> {
    /// Join the [`AsText`] form of every element with `delimiter`. JSON
    /// strings are joined without quotes, the same as in
    /// [`implode_path`](Collection::implode_path).
    ///
    /// # Example
    /// ```
    /// use ironcollect::*;
    /// use serde_json::json;
    ///
    /// assert_eq!(from_vec(vec![1, 2, 3]).implode(", "), "1, 2, 3");
    /// assert_eq!(from_vec(vec![json!("a"), json!(1)]).implode(","), "a,1");
    /// ```
    pub fn implode(&self, delimiter: &str) -> String {
        self.items
            .iter()
            .map(AsText::as_text)
            .collect::<Vec<_>>()
            .join(delimiter)
    }
}

impl<T: Record> Collection<T> {
    /// Join the string form of the value at `path` with `delimiter`,
    /// skipping absent values. Strings are joined without quotes.
    pub fn implode_path(&self, path: impl Into<KeyPath>, delimiter: &str) -> String {
        let path = path.into();
        self.items
            .iter()
            .filter_map(|t| t.resolve(&path).map(display_value))
            .collect::<Vec<_>>()
            .join(delimiter)
    }
}
