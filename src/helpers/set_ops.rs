//! Set algebra over ordered collections.
//!
//! Results are computed with value equality (`PartialEq`) and keep the order
//! of the left operand, then the right one. Equality-only elements such as
//! JSON values are supported, at the cost of pairwise scans; use
//! [`Collection::distinct_by`] or [`Collection::distinct_path`] when a
//! hashable identity is available.
//!
//! | operator        | result                                                  |
//! |-----------------|---------------------------------------------------------|
//! | `intersect(b)`  | items of `self` also in `b`, multiplicity from `self`   |
//! | `union(b)`      | `self`, then each item of `b` not yet present, once     |
//! | `join(b)`       | `self` followed by `b`, duplicates kept                 |
//! | `diff(b)`       | items in exactly one of the two (symmetric difference)  |
//! | `minus(b)`      | items of `self` not in `b`                              |
//! | `distinct()`    | first occurrence of every item                          |

use crate::key_path::{Key, KeyPath, Record};
use crate::Collection;
use std::collections::HashSet;
use std::hash::Hash;

impl<T: Clone + PartialEq> Collection<T> {
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Self {
        self.filter(|t| other.items.contains(t))
    }

    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let mut items = self.items.clone();
        for t in &other.items {
            if !items.contains(t) {
                items.push(t.clone());
            }
        }
        Self { items }
    }

    /// Concatenation; duplicates are kept.
    #[must_use]
    pub fn join(&self, other: &Self) -> Self {
        let mut items = self.items.clone();
        items.extend(other.items.iter().cloned());
        Self { items }
    }

    #[must_use]
    pub fn diff(&self, other: &Self) -> Self {
        self.minus(other).join(&other.minus(self))
    }

    #[must_use]
    pub fn minus(&self, other: &Self) -> Self {
        self.reject(|t| other.items.contains(t))
    }

    /// Remove duplicates, keeping the first occurrence of each element.
    ///
    /// # Example
    /// ```
    /// use ironcollect::*;
    ///
    /// assert_eq!(from_vec(vec![1, 2, 2, 3, 1]).distinct(), vec![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn distinct(&self) -> Self {
        let mut items: Vec<T> = Vec::with_capacity(self.items.len());
        for t in &self.items {
            if !items.contains(t) {
                items.push(t.clone());
            }
        }
        Self { items }
    }
}

impl<T: Clone> Collection<T> {
    /// Remove elements whose `key_fn` identity was already seen, keeping the
    /// first occurrence.
    #[must_use]
    pub fn distinct_by<K, F>(&self, key_fn: F) -> Self
    where
        K: Eq + Hash,
        F: Fn(&T) -> K,
    {
        let mut seen = HashSet::new();
        self.filter(|t| seen.insert(key_fn(t)))
    }
}

impl<T: Record + Clone> Collection<T> {
    /// Remove elements whose value at `path` was already seen, keeping the
    /// first occurrence. Absent values count as one shared identity.
    #[must_use]
    pub fn distinct_path(&self, path: impl Into<KeyPath>) -> Self {
        let path = path.into();
        self.distinct_by(|t| Key::of(t.resolve(&path)))
    }
}
