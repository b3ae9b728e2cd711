/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use log::debug;
use std::collections::TryReserveError;
use std::fmt;
use std::ops::{Index, IndexMut};

/// Stable handle to a value stored in an [`Arena`].
///
/// A handle stays valid until the value is removed.  After that the slot may be handed out
/// again by a later insertion.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    #[inline]
    fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Debug)]
enum Slot<T> {
    Occupied(T),
    Vacant { next_free: Option<NodeId> },
}

/// A vector of slots addressed by [`NodeId`].
///
/// Vacant slots form an intrusive free list threaded through the slots themselves, so
/// removing a value never allocates and the next insertion reuses the most recently freed
/// slot.
#[derive(Clone, Debug)]
pub struct Arena<T> {
    slots: Vec<Slot<T>>,
    free_head: Option<NodeId>,
    len: usize,
}

impl<T> Arena<T> {
    #[must_use]
    pub fn new() -> Arena<T> {
        Arena::with_capacity(0)
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Arena<T> {
        Arena {
            slots: Vec::with_capacity(capacity),
            free_head: None,
            len: 0,
        }
    }

    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Makes sure the next [`insert`](Arena::insert) will not need to allocate.
    pub fn try_reserve_one(&mut self) -> Result<(), TryReserveError> {
        if self.free_head.is_some() {
            Ok(())
        } else {
            self.slots.try_reserve(1)
        }
    }

    pub fn insert(&mut self, value: T) -> NodeId {
        self.len += 1;

        match self.free_head {
            Some(id) => {
                let slot = &mut self.slots[id.index()];

                self.free_head = match *slot {
                    Slot::Vacant { next_free } => next_free,
                    Slot::Occupied(_) => unreachable!("free list points at an occupied slot"),
                };
                *slot = Slot::Occupied(value);

                id
            }
            None => {
                if self.slots.len() == self.slots.capacity() {
                    debug!("growing node arena past {} slots", self.slots.capacity());
                }

                let id = NodeId(self.slots.len());
                self.slots.push(Slot::Occupied(value));

                id
            }
        }
    }

    /// Removes the value behind `id` and returns it.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not refer to an occupied slot.
    pub fn remove(&mut self, id: NodeId) -> T {
        let vacant = Slot::Vacant { next_free: self.free_head };

        match std::mem::replace(&mut self.slots[id.index()], vacant) {
            Slot::Occupied(value) => {
                self.free_head = Some(id);
                self.len -= 1;

                value
            }
            Slot::Vacant { next_free } => {
                // Undo the replacement so the free list stays intact.
                self.slots[id.index()] = Slot::Vacant { next_free };

                panic!("no value stored at {:?}", id)
            }
        }
    }

    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&T> {
        match self.slots.get(id.index()) {
            Some(Slot::Occupied(value)) => Some(value),
            _ => None,
        }
    }

    #[must_use]
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        match self.slots.get_mut(id.index()) {
            Some(Slot::Occupied(value)) => Some(value),
            _ => None,
        }
    }

    /// Drops every value and releases the free list, keeping the allocated capacity.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free_head = None;
        self.len = 0;
    }
}

impl<T> Default for Arena<T> {
    fn default() -> Arena<T> {
        Arena::new()
    }
}

impl<T> Index<NodeId> for Arena<T> {
    type Output = T;

    fn index(&self, id: NodeId) -> &T {
        match self.get(id) {
            Some(value) => value,
            None => panic!("no value stored at {:?}", id),
        }
    }
}

impl<T> IndexMut<NodeId> for Arena<T> {
    fn index_mut(&mut self, id: NodeId) -> &mut T {
        match self.get_mut(id) {
            Some(value) => value,
            None => panic!("no value stored at {:?}", id),
        }
    }
}
