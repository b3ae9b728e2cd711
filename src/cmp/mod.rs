/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! Comparators: first-class total orders over keys.
//!
//! A [`RedBlackTreeMap`](crate::RedBlackTreeMap) receives its ordering as a value at
//! construction instead of relying on the key's [`Ord`] implementation alone.  This lets the
//! same map type hold keys in reversed or otherwise custom order without wrapping the key type.
//!
//! ```
//! use rbdict::cmp::{Comparator, Natural, reverse};
//! use std::cmp::Ordering;
//!
//! assert_eq!(Natural.compare(&1, &2), Ordering::Less);
//! assert_eq!(reverse(Natural).compare(&1, &2), Ordering::Greater);
//!
//! let by_abs = |a: &i32, b: &i32| a.abs().cmp(&b.abs());
//! assert_eq!(by_abs.compare(&-3, &2), Ordering::Greater);
//! ```

use std::cmp::Ordering;

/// A total order over `K`.
///
/// Implementations must be deterministic and transitive.  A comparator that violates this
/// makes the map return unspecified (but memory safe) results.
///
/// Every `Fn(&K, &K) -> Ordering` is a comparator.
pub trait Comparator<K: ?Sized> {
    fn compare(&self, a: &K, b: &K) -> Ordering;
}

impl<K: ?Sized, F> Comparator<K> for F
where
    F: Fn(&K, &K) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        self(a, b)
    }
}

/// The natural order of `K`, as given by [`natural`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Natural;

impl<K: Ord + ?Sized> Comparator<K> for Natural {
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        natural(a, b)
    }
}

/// Compares two keys by their natural order.
///
/// Only `<` is used, never subtraction, so this is correct for unbounded numeric domains.
#[inline]
pub fn natural<K: Ord + ?Sized>(a: &K, b: &K) -> Ordering {
    if a < b {
        Ordering::Less
    } else if b < a {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

/// The inverse of the wrapped comparator: `Reverse(c).compare(a, b) == c.compare(b, a)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Reverse<C>(pub C);

impl<K: ?Sized, C> Comparator<K> for Reverse<C>
where
    C: Comparator<K>,
{
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        self.0.compare(b, a)
    }
}

/// Returns a comparator that orders keys opposite to `cmp`.
#[must_use]
pub fn reverse<C>(cmp: C) -> Reverse<C> {
    Reverse(cmp)
}

#[cfg(test)]
mod test;
