//! # ironcollect
//!
//! **Declarative collection operations** for Rust: filter, map, reduce, group,
//! sort, set algebra and numeric aggregation over an ordered in-memory
//! sequence, plus key-path addressed lookup into JSON-shaped records.
//!
//! ## Key Features
//!
//! - **One receiver type** - every operation is a method on [`Collection<T>`]
//! - **Pure by default** - operations borrow their input and return a new value;
//!   [`splice`](Collection::splice) is the only mutator
//! - **Key paths** - address nested fields with dotted strings such as
//!   `"customer.address.city"` or `"items.0.sku"`
//! - **Absence, not errors** - missing fields resolve to `None`, empty
//!   aggregates return a documented sentinel
//! - **Reusable combiners** - [`Sum`], [`Min`], [`Max`], [`AverageF64`], [`Count`]
//!   or your own [`CombineFn`]
//! - **JSON friendly** - collections (de)serialize as plain JSON arrays, and
//!   [`from_json_array`] builds one from array text
//!
//! ## Quick Start
//!
//! ```
//! use ironcollect::*;
//! use serde_json::json;
//!
//! let orders = from_vec(vec![
//!     json!({"id": 1, "status": "open", "total": 120.5, "customer": {"city": "London"}}),
//!     json!({"id": 2, "status": "closed", "total": 80, "customer": {"city": "Paris"}}),
//!     json!({"id": 3, "status": "open", "total": 42, "customer": {"city": "London"}}),
//! ]);
//!
//! let open = orders.where_is("status", &json!("open"));
//! assert_eq!(open.sum_path("total"), 162.5);
//!
//! let by_city = orders.group_by_path("customer.city");
//! assert_eq!(by_city[&Key::from("London")].len(), 2);
//!
//! let ids = orders.sort_by_path("total", false).pluck("id");
//! assert_eq!(ids, vec![Some(json!(1)), Some(json!(2)), Some(json!(3))]);
//! ```
//!
//! ## Operation Groups
//!
//! ### Predicate ops
//! [`filter`](Collection::filter), [`reject`](Collection::reject),
//! [`first`](Collection::first), [`last`](Collection::last),
//! [`contains`](Collection::contains), [`doesnt_contain`](Collection::doesnt_contain)
//!
//! ### Key-path search
//! [`where_is`](Collection::where_is), [`where_like`](Collection::where_like),
//! [`where_any_is`](Collection::where_any_is), [`where_any_like`](Collection::where_any_like)
//!
//! ### Transforms
//! [`map`](Collection::map), [`flat_map`](Collection::flat_map),
//! [`flat_map_path`](Collection::flat_map_path), [`pluck`](Collection::pluck),
//! [`pluck_keyed`](Collection::pluck_keyed), `flatten`,
//! [`flatten_path`](Collection::flatten_path)
//!
//! ### Aggregation
//! [`reduce`](Collection::reduce), [`group_by`](Collection::group_by),
//! [`group_by_path`](Collection::group_by_path), [`expand`](Collection::expand),
//! [`combine`](Collection::combine)
//!
//! ### Ordering
//! [`sort`](Collection::sort), [`sort_by_path`](Collection::sort_by_path),
//! [`sort_with`](Collection::sort_with), [`reverse`](Collection::reverse),
//! [`slice`](Collection::slice), [`take`](Collection::take), [`splice`](Collection::splice)
//!
//! `Collection<serde_json::Value>` also gets [`sort_values`](Collection::sort_values),
//! [`max_value`](Collection::max_value) and [`min_value`](Collection::min_value),
//! ordered by [`compare_values`].
//!
//! ### Set algebra
//! [`intersect`](Collection::intersect), [`union`](Collection::union),
//! [`join`](Collection::join), [`diff`](Collection::diff), [`minus`](Collection::minus),
//! [`distinct`](Collection::distinct), [`distinct_path`](Collection::distinct_path)
//!
//! ### Numeric aggregates
//! [`sum`](Collection::sum), [`avg`](Collection::avg), [`max`](Collection::max),
//! [`min`](Collection::min), their `*_path` forms, and [`sum_with`](Collection::sum_with).
//! Empty input: `sum` is `0.0`, the others are `None`.
//!
//! ### Zip and associative
//! [`zip`](Collection::zip), [`map_to_assoc`](Collection::map_to_assoc),
//! [`counted_set`](Collection::counted_set), [`implode`](Collection::implode)
//!
//! ## Module Overview
//!
//! - [`collection`] - the `Collection` type and the `CombineFn` trait
//! - [`key_path`] - key paths, the `Record` accessor trait, bucket keys and value ordering
//! - [`combiners`] - built-in aggregation functions
//! - [`utils`] - numeric and string views used by the aggregates and `implode`
//! - [`testing`] - assertions and fixtures for tests

pub mod collection;
pub mod combiners;
pub mod helpers;
pub mod key_path;
pub mod testing;
pub mod utils;

// General re-exports
pub use collection::{from_json_array, from_vec, Collection, CombineFn};
pub use combiners::{AverageF64, Count, Max, Min, Sum};
pub use key_path::{compare_values, display_value, Key, KeyPath, Record};
pub use utils::{AsF64, AsText};
