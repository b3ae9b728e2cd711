/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use std::fmt::{self, Display};

/// A key-value pair, rendered as `key:value`.
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct Entry<K, V> {
    pub key: K,
    pub value: V,
}

impl<K, V> Entry<K, V> {
    #[must_use]
    pub fn new(key: K, value: V) -> Entry<K, V> {
        Entry { key, value }
    }

    #[must_use]
    pub fn into_pair(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K, V> From<(K, V)> for Entry<K, V> {
    fn from((key, value): (K, V)) -> Entry<K, V> {
        Entry::new(key, value)
    }
}

impl<K: Display, V: Display> Display for Entry<K, V> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "{}:{}", self.key, self.value)
    }
}
