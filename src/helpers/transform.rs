//! Element-wise transforms.
//!
//! - [`Collection::map`] -- `f(element, index)` for every element, same length and order
//! - [`Collection::flat_map`] -- map, then splice each result in place (one level)
//! - [`Collection::flat_map_path`] -- resolve a key path to a sub-sequence per
//!   element, then map every sub-element
//! - [`Collection::pluck`] -- the value at a key path for every element
//! - [`Collection::pluck_keyed`] -- a map from one key path's value to another's
//!
//! ## Example
//! ```
//! use ironcollect::*;
//! use serde_json::json;
//!
//! let orders = from_vec(vec![
//!     json!({"id": 1, "lines": [{"sku": "a"}, {"sku": "b"}]}),
//!     json!({"id": 2, "lines": [{"sku": "c"}]}),
//! ]);
//!
//! let skus = orders.flat_map_path("lines", |line, _| line["sku"].clone());
//! assert_eq!(skus, vec![json!("a"), json!("b"), json!("c")]);
//!
//! let ids = orders.pluck("id");
//! assert_eq!(ids, vec![Some(json!(1)), Some(json!(2))]);
//! ```

use crate::key_path::{Key, KeyPath, Record};
use crate::Collection;
use serde_json::Value;
use std::collections::HashMap;

impl<T> Collection<T> {
    /// Apply `f(element, index)` to every element.
    pub fn map<O, F>(&self, f: F) -> Collection<O>
    where
        F: Fn(&T, usize) -> O,
    {
        self.items.iter().enumerate().map(|(i, t)| f(t, i)).collect()
    }

    /// Apply `f(element, index)` to every element and concatenate the results.
    ///
    /// # Example
    /// ```
    /// use ironcollect::*;
    ///
    /// let out = from_vec(vec![1usize, 2]).flat_map(|x, _| vec![*x; *x]);
    /// assert_eq!(out, vec![1, 2, 2]);
    /// ```
    pub fn flat_map<O, I, F>(&self, f: F) -> Collection<O>
    where
        I: IntoIterator<Item = O>,
        F: Fn(&T, usize) -> I,
    {
        let mut out = Vec::new();
        for (i, t) in self.items.iter().enumerate() {
            out.extend(f(t, i));
        }
        Collection { items: out }
    }
}

impl<T: Record> Collection<T> {
    /// Resolve `path` on every element and map each item of the resulting
    /// arrays with `f(item, index)`, where `index` counts across the whole
    /// output.
    ///
    /// Elements whose value at `path` is absent contribute nothing; a
    /// non-array value counts as a single item.
    pub fn flat_map_path<O, F>(&self, path: impl Into<KeyPath>, f: F) -> Collection<O>
    where
        F: Fn(&Value, usize) -> O,
    {
        let path = path.into();
        let mut out = Vec::new();
        for t in &self.items {
            match t.resolve(&path) {
                Some(Value::Array(items)) => {
                    for item in items {
                        out.push(f(item, out.len()));
                    }
                }
                Some(other) => out.push(f(other, out.len())),
                None => {}
            }
        }
        Collection { items: out }
    }

    /// The value at `path` for every element; `None` where absent.
    #[must_use]
    pub fn pluck(&self, path: impl Into<KeyPath>) -> Collection<Option<Value>> {
        let path = path.into();
        self.items.iter().map(|t| t.resolve(&path).cloned()).collect()
    }

    /// Map from the value at `key_path` to the value at `value_path`.
    ///
    /// Later elements overwrite earlier ones with the same key. Absent keys
    /// collect under [`Key::Null`].
    #[must_use]
    pub fn pluck_keyed(
        &self,
        value_path: impl Into<KeyPath>,
        key_path: impl Into<KeyPath>,
    ) -> HashMap<Key, Option<Value>> {
        let value_path = value_path.into();
        let key_path = key_path.into();
        self.items
            .iter()
            .map(|t| (Key::of(t.resolve(&key_path)), t.resolve(&value_path).cloned()))
            .collect()
    }
}
