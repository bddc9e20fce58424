//! One-level flattening.
//!
//! Exactly one level of nesting is removed; deeper nesting is kept as is.
//!
//! ## Example
//! ```
//! use ironcollect::*;
//! use serde_json::json;
//!
//! let nested = from_vec(vec![vec![1, 2, 3], vec![4, 5, 6]]);
//! assert_eq!(nested.flatten(), vec![1, 2, 3, 4, 5, 6]);
//!
//! let mixed = from_vec(vec![json!([1, [2]]), json!(3)]);
//! assert_eq!(mixed.flatten(), vec![json!(1), json!([2]), json!(3)]);
//!
//! let rows = from_vec(vec![json!({"hola": [1, 2]}), json!({"hola": [3, 4]})]);
//! assert_eq!(rows.flatten_path("hola"), vec![json!(1), json!(2), json!(3), json!(4)]);
//! ```

use crate::key_path::{KeyPath, Record};
use crate::Collection;
use serde_json::Value;

fn push_flat(out: &mut Vec<Value>, v: &Value) {
    match v {
        Value::Array(items) => out.extend(items.iter().cloned()),
        other => out.push(other.clone()),
    }
}

impl<U: Clone> Collection<Vec<U>> {
    /// Concatenate the inner vectors, in order.
    #[must_use]
    pub fn flatten(&self) -> Collection<U> {
        self.items.iter().flatten().cloned().collect()
    }
}

impl Collection<Value> {
    /// Expand array elements in place; non-array elements pass through.
    #[must_use]
    pub fn flatten(&self) -> Self {
        let mut out = Vec::with_capacity(self.items.len());
        for v in &self.items {
            push_flat(&mut out, v);
        }
        Self { items: out }
    }
}

impl<T: Record> Collection<T> {
    /// Resolve `path` on every element and flatten the results one level.
    ///
    /// Absent values are skipped; non-array values pass through.
    #[must_use]
    pub fn flatten_path(&self, path: impl Into<KeyPath>) -> Collection<Value> {
        let path = path.into();
        let mut out = Vec::new();
        for t in &self.items {
            if let Some(v) = t.resolve(&path) {
                push_flat(&mut out, v);
            }
        }
        Collection { items: out }
    }
}
