/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

#![cfg_attr(feature = "fatal-warnings", deny(warnings))]

// Note: Keep this in sync with `README.md`.  Note that the doc links must be removed.
//! # Red-Black Ordered Dictionary
//!
//! An ordered associative container backed by a self-balancing
//! [red-black tree](https://en.wikipedia.org/wiki/Red-Black_tree), together with the
//! comparator abstraction that orders its keys.
//!
//! # Components
//!
//!   1. [`RedBlackTreeMap`](#redblacktreemap)
//!   2. [Comparators](#comparators)
//!   3. [Lazy sequences](#lazy-sequences)
//!
//! ## `RedBlackTreeMap`
//!
//! A map with logarithmic `get`, `insert` and `remove` that yields its entries in ascending key
//! order.  Inserting a key that is already present overwrites its value and returns the old
//! one.
//!
//! ### Example
//!
//! ```rust
//! use rbdict::RedBlackTreeMap;
//!
//! let mut map = RedBlackTreeMap::new();
//!
//! assert_eq!(map.insert(7, "a"), None);
//! assert_eq!(map.insert(7, "b"), Some("a"));
//! assert_eq!(map.insert(3, "c"), None);
//!
//! assert_eq!(map.get(&7), Some(&"b"));
//! assert_eq!(map.remove(&3), Some("c"));
//! assert_eq!(map.remove(&3), None);
//!
//! assert_eq!(map.to_string(), "[7:b]");
//! ```
//!
//! ## Comparators
//!
//! The order of a map is a value given at construction: anything implementing
//! [`Comparator`](cmp::Comparator), including plain closures.  [`Natural`](cmp::Natural) is the
//! default for keys implementing [`Ord`].
//!
//! ### Example
//!
//! ```rust
//! use rbdict::RedBlackTreeMap;
//!
//! let mut map = RedBlackTreeMap::with_comparator(|a: &u32, b: &u32| b.cmp(a));
//!
//! map.extend([(1, ()), (2, ()), (3, ())]);
//!
//! assert_eq!(map.keys().collect::<Vec<_>>(), vec![&3, &2, &1]);
//! ```
//!
//! ## Lazy sequences
//!
//! [`RedBlackTreeMap::iter()`] is a single-pass [`Iterator`] that walks the tree one node at a
//! time.  It borrows the map, so the map cannot change while it is alive.
//!
//! ### Example
//!
//! ```rust
//! use rbdict::rbt_map;
//! use rbdict::iter::sprint;
//!
//! let map = rbt_map![2 => "two", 1 => "one", 3 => "three"];
//! let mut iter = map.iter();
//!
//! assert_eq!(iter.next(), Some((&1, &"one")));
//! assert_eq!(sprint(iter.map(|(k, _)| k)), "[2, 3]");
//! ```

pub mod cmp;
pub mod container;
pub mod iter;
pub mod map;

mod utils;

pub use cmp::{Comparator, Natural};
pub use container::{Container, Dictionary};
pub use map::entry::Entry;
pub use map::red_black_tree_map::{AllocError, RedBlackTreeMap};
