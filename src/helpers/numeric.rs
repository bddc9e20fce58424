//! Numeric aggregates: `sum`, `avg`, `max`, `min`.
//!
//! Each comes in an element form (the elements themselves are numbers, see
//! [`AsF64`]) and a key-path form (`*_path`). `sum_with` sums the result of a
//! closure.
//!
//! Values without a numeric view (strings, absent fields, objects, ...) are
//! skipped. When nothing is left:
//! - `sum` returns `0.0`
//! - `avg`, `max` and `min` return `None`
//!
//! `max` and `min` compare through [`OrderedFloat`]: NaN ranks above every
//! other number and all NaNs are equal. So `max` returns NaN as soon as one
//! input is NaN, while `min` only returns NaN when every input is NaN.
//!
//! ## Example
//! ```
//! use ironcollect::*;
//! use serde_json::json;
//!
//! let rows = from_vec(vec![json!({"v": 2}), json!({"v": "x"}), json!({"v": 4})]);
//! assert_eq!(rows.sum_path("v"), 6.0);
//! assert_eq!(rows.avg_path("v"), Some(3.0));
//! assert_eq!(rows.max_path("missing"), None);
//! ```

use crate::combiners::{AverageF64, Max, Min, Sum};
use crate::key_path::{KeyPath, Record};
use crate::utils::AsF64;
use crate::{CombineFn, Collection};
use ordered_float::OrderedFloat;

/// Feed every number produced by `values` into `comb`.
fn aggregate<I, C, A, O>(values: I, comb: C) -> O
where
    I: IntoIterator<Item = f64>,
    C: CombineFn<OrderedFloat<f64>, A, O>,
{
    let mut acc = comb.create();
    for v in values {
        comb.add_input(&mut acc, OrderedFloat(v));
    }
    comb.finish(acc)
}

fn sum_of(values: impl IntoIterator<Item = f64>) -> f64 {
    aggregate(values, Sum::<OrderedFloat<f64>>::new()).0
}

fn avg_of(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    aggregate(values, AverageF64)
}

fn max_of(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    aggregate(values, Max::<OrderedFloat<f64>>::new()).map(|m| m.0)
}

fn min_of(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    aggregate(values, Min::<OrderedFloat<f64>>::new()).map(|m| m.0)
}

impl<T> Collection<T> {
    /// Sum of `f(element)` over all elements with a numeric result.
    pub fn sum_with<N, F>(&self, f: F) -> f64
    where
        N: AsF64,
        F: Fn(&T) -> N,
    {
        sum_of(self.items.iter().filter_map(|t| f(t).as_f64()))
    }
}

impl<T: AsF64> Collection<T> {
    fn numbers(&self) -> impl Iterator<Item = f64> + '_ {
        self.items.iter().filter_map(AsF64::as_f64)
    }

    /// Sum of the numeric elements; `0.0` when there are none.
    pub fn sum(&self) -> f64 {
        sum_of(self.numbers())
    }

    /// Mean of the numeric elements; `None` when there are none.
    pub fn avg(&self) -> Option<f64> {
        avg_of(self.numbers())
    }

    /// Largest numeric element; `None` when there are none.
    pub fn max(&self) -> Option<f64> {
        max_of(self.numbers())
    }

    /// Smallest numeric element; `None` when there are none.
    pub fn min(&self) -> Option<f64> {
        min_of(self.numbers())
    }
}

impl<T: Record> Collection<T> {
    fn numbers_at(&self, path: KeyPath) -> impl Iterator<Item = f64> + '_ {
        self.items
            .iter()
            .filter_map(move |t| t.resolve(&path).and_then(AsF64::as_f64))
    }

    pub fn sum_path(&self, path: impl Into<KeyPath>) -> f64 {
        sum_of(self.numbers_at(path.into()))
    }

    pub fn avg_path(&self, path: impl Into<KeyPath>) -> Option<f64> {
        avg_of(self.numbers_at(path.into()))
    }

    pub fn max_path(&self, path: impl Into<KeyPath>) -> Option<f64> {
        max_of(self.numbers_at(path.into()))
    }

    pub fn min_path(&self, path: impl Into<KeyPath>) -> Option<f64> {
        min_of(self.numbers_at(path.into()))
    }
}
