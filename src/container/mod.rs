/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! Abstract container contracts.

/// An abstract container of elements.
pub trait Container {
    /// Number of elements in the container.
    fn size(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.size() == 0
    }
}

/// An associative mapping from keys to values, typically implemented as a hash table or a
/// binary search tree.
///
/// Absence is a normal outcome, never an error: lookups and removals of a missing key return
/// `None`.
pub trait Dictionary<K, V>: Container {
    /// Lazy sequence over all key-value pairs in an implementation-defined order.
    type Iter<'a>: Iterator<Item = (&'a K, &'a V)>
    where
        Self: 'a,
        K: 'a,
        V: 'a;

    fn list(&self) -> Self::Iter<'_>;

    /// Returns the value associated with the key, if present.
    fn find(&self, key: &K) -> Option<&V>;

    /// Sets the value of the key.  Returns the prior value, if present.
    fn insert(&mut self, key: K, value: V) -> Option<V>;

    /// Removes the key.  Returns the removed value, if present.
    fn remove(&mut self, key: &K) -> Option<V>;

    /// Inserts every pair, later pairs overwriting earlier ones with an equal key.
    fn insert_all<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (K, V)>,
        Self: Sized,
    {
        for (k, v) in entries {
            self.insert(k, v);
        }
    }
}
