//! Key-path search over record collections.
//!
//! - [`Collection::where_is`] -- resolved value equals the probe
//! - [`Collection::where_like`] -- resolved value's string form contains the probe's
//! - [`Collection::where_any_is`] / [`Collection::where_any_like`] -- the same
//!   tests, OR-ed across several key paths
//!
//! Absent values compare equal to JSON `null` and are never `like` anything.
//! `like` is a case-sensitive substring match on [`display_value`].
//!
//! ## Example
//! ```
//! use ironcollect::*;
//! use serde_json::json;
//!
//! let people = from_vec(vec![
//!     json!({"name": "Ada", "city": "London"}),
//!     json!({"name": "Grace", "city": "New York"}),
//! ]);
//!
//! assert_eq!(people.where_is("city", &json!("London")).len(), 1);
//! assert_eq!(people.where_like("name", &json!("ra")).len(), 1);
//! ```

use crate::key_path::{display_value, KeyPath, Record};
use crate::Collection;
use serde_json::Value;

fn is_match(resolved: Option<&Value>, value: &Value) -> bool {
    resolved.unwrap_or(&Value::Null) == value
}

fn like_match(resolved: Option<&Value>, needle: &str) -> bool {
    resolved.is_some_and(|v| display_value(v).contains(needle))
}

impl<T: Record + Clone> Collection<T> {
    /// Elements whose value at `path` equals `value`.
    #[must_use]
    pub fn where_is(&self, path: impl Into<KeyPath>, value: &Value) -> Self {
        let path = path.into();
        self.filter(|t| is_match(t.resolve(&path), value))
    }

    /// Elements whose value at `path`, as a string, contains `value` as a string.
    #[must_use]
    pub fn where_like(&self, path: impl Into<KeyPath>, value: &Value) -> Self {
        let path = path.into();
        let needle = display_value(value);
        self.filter(|t| like_match(t.resolve(&path), &needle))
    }

    /// Elements where at least one of `paths` resolves to a value equal to `value`.
    #[must_use]
    pub fn where_any_is<I, K>(&self, paths: I, value: &Value) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<KeyPath>,
    {
        let paths: Vec<KeyPath> = paths.into_iter().map(Into::into).collect();
        self.filter(|t| paths.iter().any(|p| is_match(t.resolve(p), value)))
    }

    /// Elements where at least one of `paths` is `like` `value`.
    #[must_use]
    pub fn where_any_like<I, K>(&self, paths: I, value: &Value) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<KeyPath>,
    {
        let paths: Vec<KeyPath> = paths.into_iter().map(Into::into).collect();
        let needle = display_value(value);
        self.filter(|t| paths.iter().any(|p| like_match(t.resolve(p), &needle)))
    }
}
