//! Ordering and positional selection.
//!
//! All sorts are **stable**: elements that compare equal keep their relative
//! input order.
//!
//! Negative counts select from the end:
//!
//! | call        | `n >= 0`                | `n < 0`                 |
//! |-------------|-------------------------|-------------------------|
//! | `slice(n)`  | drop the first `n`      | keep the last `|n|`     |
//! | `take(n)`   | keep the first `n`      | keep the last `|n|`     |
//! | `splice(n)` | as `take`, and remove   | as `take`, and remove   |
//!
//! Counts larger than the collection clamp to its length.

use crate::key_path::{compare_values, KeyPath, Record};
use crate::Collection;
use serde_json::Value;
use std::cmp::Ordering;
use std::ops::Range;
use tracing::debug;

/// Index range selected by `take(n)` on a sequence of length `len`.
fn take_range(len: usize, n: isize) -> Range<usize> {
    let count = n.unsigned_abs().min(len);
    if n >= 0 { 0..count } else { len - count..len }
}

impl<T: Clone> Collection<T> {
    /// Sort with a caller-supplied comparator.
    #[must_use]
    pub fn sort_with<F>(&self, cmp: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering,
    {
        let mut items = self.items.clone();
        items.sort_by(cmp);
        Self { items }
    }

    /// Same elements in reverse order.
    #[must_use]
    pub fn reverse(&self) -> Self {
        self.items.iter().rev().cloned().collect()
    }

    /// Elements from index `n` to the end; for negative `n`, the last `|n|`.
    ///
    /// # Example
    /// ```
    /// use ironcollect::*;
    ///
    /// let c = from_vec(vec![1, 2, 3, 4, 5]);
    /// assert_eq!(c.slice(2), vec![3, 4, 5]);
    /// assert_eq!(c.slice(-2), vec![4, 5]);
    /// assert_eq!(c.slice(9), Vec::<i32>::new());
    /// ```
    #[must_use]
    pub fn slice(&self, n: isize) -> Self {
        let len = self.items.len();
        let range = if n >= 0 {
            n.unsigned_abs().min(len)..len
        } else {
            take_range(len, n)
        };
        Self {
            items: self.items[range].to_vec(),
        }
    }

    /// The first `n` elements, or the last `|n|` when `n` is negative.
    ///
    /// # Example
    /// ```
    /// use ironcollect::*;
    ///
    /// let c = from_vec(vec![1, 2, 3, 4, 5]);
    /// assert_eq!(c.take(2), vec![1, 2]);
    /// assert_eq!(c.take(-2), vec![4, 5]);
    /// ```
    #[must_use]
    pub fn take(&self, n: isize) -> Self {
        Self {
            items: self.items[take_range(self.items.len(), n)].to_vec(),
        }
    }
}

impl<T> Collection<T> {
    /// Remove the elements `take(n)` would select and return them.
    ///
    /// This is the only operation that mutates its receiver.
    ///
    /// # Example
    /// ```
    /// use ironcollect::*;
    ///
    /// let mut c = from_vec(vec![1, 2, 3, 4, 5]);
    /// assert_eq!(c.splice(2), vec![1, 2]);
    /// assert_eq!(c, vec![3, 4, 5]);
    /// assert_eq!(c.splice(-1), vec![5]);
    /// assert_eq!(c, vec![3, 4]);
    /// ```
    pub fn splice(&mut self, n: isize) -> Self {
        let range = take_range(self.items.len(), n);
        let removed: Vec<T> = self.items.drain(range).collect();
        debug!(requested = n, removed = removed.len(), remaining = self.items.len(), "splice");
        Self { items: removed }
    }
}

impl<T: Clone + Ord> Collection<T> {
    /// Sort by the elements' natural ordering.
    #[must_use]
    pub fn sort(&self) -> Self {
        self.sort_with(T::cmp)
    }

    /// The greatest element; the first one wins on ties.
    pub fn max_object(&self) -> Option<&T> {
        self.items
            .iter()
            .reduce(|best, t| if t > best { t } else { best })
    }

    /// The least element; the first one wins on ties.
    pub fn min_object(&self) -> Option<&T> {
        self.items
            .iter()
            .reduce(|best, t| if t < best { t } else { best })
    }
}

impl Collection<Value> {
    /// Sort JSON values by [`compare_values`], the same order
    /// [`sort_by_path`](Collection::sort_by_path) applies to fields.
    ///
    /// # Example
    /// ```
    /// use ironcollect::*;
    /// use serde_json::json;
    ///
    /// let c = from_vec(vec![json!("b"), json!(2), json!(null), json!(1.5), json!(true)]);
    /// assert_eq!(
    ///     c.sort_values(),
    ///     vec![json!(null), json!(true), json!(1.5), json!(2), json!("b")]
    /// );
    /// ```
    #[must_use]
    pub fn sort_values(&self) -> Self {
        self.sort_with(|a, b| compare_values(Some(a), Some(b)))
    }

    /// The greatest value under [`compare_values`]; the first one wins on ties.
    pub fn max_value(&self) -> Option<&Value> {
        self.items.iter().reduce(|best, v| {
            if compare_values(Some(v), Some(best)) == Ordering::Greater { v } else { best }
        })
    }

    /// The least value under [`compare_values`]; the first one wins on ties.
    pub fn min_value(&self) -> Option<&Value> {
        self.items.iter().reduce(|best, v| {
            if compare_values(Some(v), Some(best)) == Ordering::Less { v } else { best }
        })
    }
}

impl<T: Record + Clone> Collection<T> {
    /// Sort by the value at `path` using [`compare_values`].
    ///
    /// Absent values sort first when ascending and last when descending.
    /// Ties keep input order in both directions.
    ///
    /// # Example
    /// ```
    /// use ironcollect::*;
    /// use serde_json::json;
    ///
    /// let c = from_vec(vec![json!({"n": 2}), json!({"n": 1}), json!({"n": 3})]);
    /// assert_eq!(c.sort_by_path("n", true).pluck("n"),
    ///            vec![Some(json!(1)), Some(json!(2)), Some(json!(3))]);
    /// assert_eq!(c.sort_by_path("n", false).pluck("n"),
    ///            vec![Some(json!(3)), Some(json!(2)), Some(json!(1))]);
    /// ```
    #[must_use]
    pub fn sort_by_path(&self, path: impl Into<KeyPath>, ascending: bool) -> Self {
        let path = path.into();
        self.sort_with(|a, b| {
            let ord = compare_values(a.resolve(&path), b.resolve(&path));
            if ascending { ord } else { ord.reverse() }
        })
    }

    /// The greatest value at `path`; absent values are skipped.
    #[must_use]
    pub fn max_object_path(&self, path: impl Into<KeyPath>) -> Option<Value> {
        let path = path.into();
        self.items
            .iter()
            .filter_map(|t| t.resolve(&path))
            .reduce(|best, v| {
                if compare_values(Some(v), Some(best)) == Ordering::Greater { v } else { best }
            })
            .cloned()
    }

    /// The least value at `path`; absent values are skipped.
    #[must_use]
    pub fn min_object_path(&self, path: impl Into<KeyPath>) -> Option<Value> {
        let path = path.into();
        self.items
            .iter()
            .filter_map(|t| t.resolve(&path))
            .reduce(|best, v| {
                if compare_values(Some(v), Some(best)) == Ordering::Less { v } else { best }
            })
            .cloned()
    }
}
