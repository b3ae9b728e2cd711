/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! Helpers over lazy sequences.
//!
//! The lazy sequence itself is Rust's [`Iterator`]: a single-pass producer advanced one
//! element at a time, whose cost is proportional to the elements consumed.  This module adds
//! what the standard library leaves out.

use std::fmt::{self, Display, Write};

/// Writes the items as `[a, b, c]`, rendering each with its [`Display`] implementation.
pub fn write_seq<W, I>(out: &mut W, items: I) -> fmt::Result
where
    W: Write + ?Sized,
    I: IntoIterator,
    I::Item: Display,
{
    let mut first = true;

    out.write_char('[')?;

    for item in items {
        if !first {
            out.write_str(", ")?;
        }
        write!(out, "{}", item)?;
        first = false;
    }

    out.write_char(']')
}

/// Renders the items as `[a, b, c]`.  Debugging convenience.
///
/// This never fails.  If an item's [`Display`] implementation returns an error, rendering
/// stops there and the text written so far is returned, without the closing `]`.  Use
/// [`write_seq`] to observe the error.
///
/// ```
/// use rbdict::iter::sprint;
///
/// assert_eq!(sprint(1..4), "[1, 2, 3]");
/// assert_eq!(sprint(Vec::<u8>::new()), "[]");
/// ```
#[must_use]
pub fn sprint<I>(items: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    let mut out = String::new();

    let _ = write_seq(&mut out, items);

    out
}

/// Returns `true` if both sequences have the same length and `eq` holds for every pair of
/// elements at the same position.  Stops at the first mismatch.
pub fn equivalent_by<A, B, F>(a: A, b: B, mut eq: F) -> bool
where
    A: IntoIterator,
    B: IntoIterator,
    F: FnMut(A::Item, B::Item) -> bool,
{
    let mut a = a.into_iter();
    let mut b = b.into_iter();

    loop {
        match (a.next(), b.next()) {
            (None, None) => return true,
            (Some(x), Some(y)) => {
                if !eq(x, y) {
                    return false;
                }
            }
            _ => return false,
        }
    }
}
