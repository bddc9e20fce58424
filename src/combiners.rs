//! Built-in combiners for [`Collection::combine`](crate::Collection::combine).
//!
//! These are reusable implementations of [`CombineFn`](crate::CombineFn):
//!
//! - [`Sum<T>`] -- sum of values.
//! - [`Min<T>`] -- minimum value, `None` when empty.
//! - [`Max<T>`] -- maximum value, `None` when empty.
//! - [`AverageF64`] -- arithmetic mean, `None` when empty.
//! - [`Count`] -- number of inputs.
//!
//! The numeric aggregates (`sum`, `avg`, `min`, `max`) are thin wrappers that
//! feed the numeric view of each element into one of these.
//!
//! # Examples
//! ```
//! use ironcollect::*;
//!
//! let c = from_vec(vec![3u32, 1, 2]);
//! assert_eq!(c.combine(Sum::<u32>::new()), 6);
//! assert_eq!(c.combine(Min::<u32>::new()), Some(1));
//! assert_eq!(c.combine(Max::<u32>::new()), Some(3));
//! assert_eq!(c.combine(AverageF64), Some(2.0));
//! assert_eq!(c.combine(Count), 3);
//! ```

mod basic;
mod statistical;

// Re-export all public combiners
pub use basic::{Count, Max, Min, Sum};
pub use statistical::AverageF64;
