//! The core [`Collection`] type.
//!
//! A `Collection<T>` is an owned, ordered sequence of elements. It is the
//! receiver for every operation in this crate; the operations themselves are
//! split by topic across the [`helpers`](crate::helpers) modules, each adding
//! its own `impl` block.
//!
//! Collections are **values**: apart from [`splice`](Collection::splice),
//! every operation borrows the receiver and returns a fresh result, leaving
//! the input untouched.

use anyhow::{Context, Result};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::ops::{ControlFlow, Index};
use std::slice::Iter;

/// An owned, ordered sequence of elements.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Collection<T> {
    pub(crate) items: Vec<T>,
}

/// Wrap an owned vector in a [`Collection`], keeping its order.
///
/// # Example
/// ```
/// use ironcollect::*;
///
/// let c = from_vec(vec![1, 2, 3]);
/// assert_eq!(c.len(), 3);
/// ```
pub fn from_vec<T>(data: Vec<T>) -> Collection<T> {
    Collection { items: data }
}

/// Parse a JSON array document (`[...]`) into a `Collection<T>`.
///
/// # Errors
/// Returns an error if `text` is not a JSON array of `T`.
///
/// # Example
/// ```
/// use ironcollect::*;
///
/// let c: Collection<u8> = from_json_array("[3, 1, 2]").unwrap();
/// assert_eq!(c.sort(), vec![1, 2, 3]);
/// ```
pub fn from_json_array<T: DeserializeOwned>(text: &str) -> Result<Collection<T>> {
    let items: Vec<T> = serde_json::from_str(text)
        .with_context(|| format!("parse JSON array ({} bytes)", text.len()))?;
    Ok(Collection { items })
}

impl<T> Collection<T> {
    /// An empty collection.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Unwrap into the underlying vector.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.items.iter()
    }

    /// Element at `index`, or `None` when out of bounds.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Call `f` on every element, in order.
    pub fn each<F>(&self, mut f: F)
    where
        F: FnMut(&T),
    {
        for item in &self.items {
            f(item);
        }
    }

    /// Call `f` with every element and its index, in order.
    ///
    /// Iteration stops as soon as `f` returns [`ControlFlow::Break`].
    ///
    /// # Example
    /// ```
    /// use ironcollect::*;
    /// use std::ops::ControlFlow;
    ///
    /// let mut seen = Vec::new();
    /// from_vec(vec![10, 20, 30, 40]).each_with_index(|x, i| {
    ///     seen.push(*x);
    ///     if i == 1 { ControlFlow::Break(()) } else { ControlFlow::Continue(()) }
    /// });
    /// assert_eq!(seen, vec![10, 20]);
    /// ```
    pub fn each_with_index<F>(&self, mut f: F)
    where
        F: FnMut(&T, usize) -> ControlFlow<()>,
    {
        for (i, item) in self.items.iter().enumerate() {
            if f(item, i).is_break() {
                break;
            }
        }
    }
}

impl<T> From<Vec<T>> for Collection<T> {
    fn from(data: Vec<T>) -> Self {
        from_vec(data)
    }
}

impl<T> From<Collection<T>> for Vec<T> {
    fn from(c: Collection<T>) -> Self {
        c.items
    }
}

impl<T> FromIterator<T> for Collection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for Collection<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> Index<usize> for Collection<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<T: PartialEq> PartialEq<Vec<T>> for Collection<T> {
    fn eq(&self, other: &Vec<T>) -> bool {
        &self.items == other
    }
}

/// A reusable aggregation: build an accumulator, feed it every input, then
/// turn it into the output.
///
/// - `V`: input type
/// - `A`: accumulator type
/// - `O`: output type
pub trait CombineFn<V, A, O> {
    fn create(&self) -> A;
    fn add_input(&self, acc: &mut A, v: V);
    fn finish(&self, acc: A) -> O;
}

impl<T: Clone> Collection<T> {
    /// Run `comb` over every element in order.
    ///
    /// # Example
    /// ```
    /// use ironcollect::*;
    ///
    /// let total = from_vec(vec![1u64, 2, 3]).combine(Sum::<u64>::new());
    /// assert_eq!(total, 6);
    /// ```
    pub fn combine<C, A, O>(&self, comb: C) -> O
    where
        C: CombineFn<T, A, O>,
    {
        let mut acc = comb.create();
        for item in &self.items {
            comb.add_input(&mut acc, item.clone());
        }
        comb.finish(acc)
    }
}
