//! Predicate operations: keep, drop or find elements by a boolean test.
//!
//! - [`Collection::filter`] / [`Collection::reject`] -- complementary subsequences
//! - [`Collection::first`] / [`Collection::last`] -- earliest / latest match
//! - [`Collection::first_or`] / [`Collection::last_or`] -- the same, with a default
//! - [`Collection::contains`] / [`Collection::doesnt_contain`] -- existence checks
//!
//! `filter` and `reject` partition the input: every element lands in exactly
//! one of the two results, and both keep the original order.
//!
//! Every predicate is `FnMut` and is called at most once per element, in
//! order (`last` and `last_or` walk from the end).

use crate::Collection;

impl<T: Clone> Collection<T> {
    /// Elements for which `pred` holds, in original order.
    ///
    /// # Example
    /// ```
    /// use ironcollect::*;
    ///
    /// let evens = from_vec(vec![1, 2, 3, 4]).filter(|x| x % 2 == 0);
    /// assert_eq!(evens, vec![2, 4]);
    /// ```
    #[must_use]
    pub fn filter<P>(&self, mut pred: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        self.items.iter().filter(|t| pred(t)).cloned().collect()
    }

    /// Elements for which `pred` does not hold, in original order.
    #[must_use]
    pub fn reject<P>(&self, mut pred: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        self.items.iter().filter(|t| !pred(t)).cloned().collect()
    }
}

impl<T> Collection<T> {
    /// The earliest element satisfying `pred`, or `None`.
    pub fn first<P>(&self, mut pred: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.items.iter().find(|t| pred(t))
    }

    /// The earliest element satisfying `pred`, or `default` when none does.
    pub fn first_or<'a, P>(&'a self, pred: P, default: &'a T) -> &'a T
    where
        P: FnMut(&T) -> bool,
    {
        self.first(pred).unwrap_or(default)
    }

    /// The latest element satisfying `pred`, or `None`.
    pub fn last<P>(&self, mut pred: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.items.iter().rev().find(|t| pred(t))
    }

    /// The latest element satisfying `pred`, or `default` when none does.
    pub fn last_or<'a, P>(&'a self, pred: P, default: &'a T) -> &'a T
    where
        P: FnMut(&T) -> bool,
    {
        self.last(pred).unwrap_or(default)
    }

    /// `true` if any element satisfies `pred`.
    pub fn contains<P>(&self, pred: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.first(pred).is_some()
    }

    /// `true` if no element satisfies `pred`.
    pub fn doesnt_contain<P>(&self, pred: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        !self.contains(pred)
    }
}
