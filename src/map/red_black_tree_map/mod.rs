/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use super::entry::Entry;
use crate::cmp::{Comparator, Natural};
use crate::container::{Container, Dictionary};
use crate::iter::write_seq;
use crate::utils::{Arena, NodeId};
use log::trace;
use std::cmp::Ordering;
use std::collections::TryReserveError;
use std::fmt::{self, Debug, Display};
use std::hash::{Hash, Hasher};
use std::iter::FusedIterator;
use std::ops::Index;

// TODO Use impl trait instead of this when available.
pub type Iter<'a, K, V, C> =
    std::iter::Map<IterEntries<'a, K, V, C>, fn(&'a Entry<K, V>) -> (&'a K, &'a V)>;
pub type IterKeys<'a, K, V, C> = std::iter::Map<Iter<'a, K, V, C>, fn((&'a K, &'a V)) -> &'a K>;
pub type IterValues<'a, K, V, C> = std::iter::Map<Iter<'a, K, V, C>, fn((&'a K, &'a V)) -> &'a V>;

/// Creates a [`RedBlackTreeMap`](map/red_black_tree_map/struct.RedBlackTreeMap.html) in
/// natural key order containing the given arguments:
///
/// ```
/// # use rbdict::*;
/// #
/// let mut m = RedBlackTreeMap::new();
/// m.insert(1, "one");
/// m.insert(2, "two");
/// m.insert(3, "three");
///
/// assert_eq!(rbt_map![1 => "one", 2 => "two", 3 => "three"], m);
/// ```
#[macro_export]
macro_rules! rbt_map {
    ($($k:expr => $v:expr),*) => {
        {
            #[allow(unused_mut)]
            let mut m = $crate::RedBlackTreeMap::new();
            $(
                m.insert($k, $v);
            )*
            m
        }
    };
}

/// An ordered dictionary.  This implementation uses a
/// [red-black tree](https://en.wikipedia.org/wiki/Red-Black_tree) whose order is given by a
/// [`Comparator`] value supplied at construction.
///
/// # Complexity
///
/// Let *n* be the number of elements in the map.
///
/// ## Temporal complexity
///
/// | Operation                  | Best case | Average   | Worst case  |
/// |:-------------------------- | ---------:| ---------:| -----------:|
/// | `new()`                    |      Θ(1) |      Θ(1) |        Θ(1) |
/// | `insert()`                 |      Θ(1) | Θ(log(n)) |   Θ(log(n)) |
/// | `remove()`                 |      Θ(1) | Θ(log(n)) |   Θ(log(n)) |
/// | `get()`                    |      Θ(1) | Θ(log(n)) |   Θ(log(n)) |
/// | `contains_key()`           |      Θ(1) | Θ(log(n)) |   Θ(log(n)) |
/// | `size()`                   |      Θ(1) |      Θ(1) |        Θ(1) |
/// | `height()`                 |      Θ(n) |      Θ(n) |        Θ(n) |
/// | `clone()`                  |      Θ(n) |      Θ(n) |        Θ(n) |
/// | iterator creation          |      Θ(1) | Θ(log(n)) |   Θ(log(n)) |
/// | iterator step              |      Θ(1) |      Θ(1) |   Θ(log(n)) |
/// | iterator full              |      Θ(n) |      Θ(n) |        Θ(n) |
///
/// # Implementation details
///
/// This is the classic parent-linked red-black tree from "Introduction to Algorithms"
/// (Cormen, Leiserson, Rivest and Stein).  Nodes live in an arena owned by the map and refer
/// to each other by index.  Child links define the tree; parent links are only used to
/// navigate upwards during rebalancing and iteration.  Absent children are `None` and count as
/// black.
///
/// Iterators borrow the map, so the map cannot be modified while one is alive.
///
/// # Example
///
/// ```
/// use rbdict::RedBlackTreeMap;
/// use rbdict::cmp::{reverse, Natural};
///
/// let mut map = RedBlackTreeMap::with_comparator(reverse(Natural));
///
/// assert_eq!(map.insert(1, "one"), None);
/// assert_eq!(map.insert(2, "two"), None);
/// assert_eq!(map.insert(1, "uno"), Some("one"));
///
/// assert_eq!(map.get(&1), Some(&"uno"));
/// assert_eq!(map.to_string(), "[2:two, 1:uno]");
/// ```
#[derive(Clone)]
pub struct RedBlackTreeMap<K, V, C = Natural> {
    nodes: Arena<Node<K, V>>,
    root:  Option<NodeId>,
    cmp:   C,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Color {
    Red,
    Black,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

impl Side {
    #[inline]
    fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

#[derive(Clone, Debug)]
struct Node<K, V> {
    entry:  Entry<K, V>,
    color:  Color,
    parent: Option<NodeId>,
    left:   Option<NodeId>,
    right:  Option<NodeId>,
}

impl<K, V> Node<K, V> {
    fn new_red(entry: Entry<K, V>, parent: Option<NodeId>) -> Node<K, V> {
        Node {
            entry,
            color: Color::Red,
            parent,
            left: None,
            right: None,
        }
    }

    #[inline]
    fn child(&self, side: Side) -> Option<NodeId> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    #[inline]
    fn child_mut(&mut self, side: Side) -> &mut Option<NodeId> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}

/// Outcome of descending the tree looking for a key.
enum Search {
    Found(NodeId),
    /// The key is absent; it belongs in the empty `side` slot of `parent`, or at the root
    /// when there is no parent.
    Vacant { parent: Option<NodeId>, side: Side },
}

/// Error returned by [`RedBlackTreeMap::try_insert`] when no memory could be obtained for a
/// new node.  The map is left unchanged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AllocError {
    source: TryReserveError,
}

impl Display for AllocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to allocate a red-black tree node: {}", self.source)
    }
}

impl std::error::Error for AllocError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

impl From<TryReserveError> for AllocError {
    fn from(source: TryReserveError) -> AllocError {
        AllocError { source }
    }
}

impl<K, V> RedBlackTreeMap<K, V>
where
    K: Ord,
{
    /// Creates an empty map ordered by the keys' natural order.
    #[must_use]
    pub fn new() -> RedBlackTreeMap<K, V> {
        RedBlackTreeMap::with_comparator(Natural)
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> RedBlackTreeMap<K, V> {
        RedBlackTreeMap::with_capacity_and_comparator(capacity, Natural)
    }
}

impl<K, V, C> RedBlackTreeMap<K, V, C>
where
    C: Comparator<K>,
{
    /// Creates an empty map ordered by `cmp`.
    #[must_use]
    pub fn with_comparator(cmp: C) -> RedBlackTreeMap<K, V, C> {
        RedBlackTreeMap::with_capacity_and_comparator(0, cmp)
    }

    /// Creates an empty map ordered by `cmp` with room for `capacity` entries before the node
    /// arena has to grow.
    #[must_use]
    pub fn with_capacity_and_comparator(capacity: usize, cmp: C) -> RedBlackTreeMap<K, V, C> {
        RedBlackTreeMap {
            nodes: Arena::with_capacity(capacity),
            root: None,
            cmp,
        }
    }

    fn search(&self, key: &K) -> Search {
        let mut parent = None;
        let mut side = Side::Left;
        let mut current = self.root;

        while let Some(id) = current {
            let node = &self.nodes[id];

            side = match self.cmp.compare(&node.entry.key, key) {
                Ordering::Equal => return Search::Found(id),
                Ordering::Less => Side::Right,
                Ordering::Greater => Side::Left,
            };
            parent = Some(id);
            current = node.child(side);
        }

        Search::Vacant { parent, side }
    }

    fn find_node(&self, key: &K) -> Option<NodeId> {
        match self.search(key) {
            Search::Found(id) => Some(id),
            Search::Vacant { .. } => None,
        }
    }

    #[must_use]
    pub fn get(&self, key: &K) -> Option<&V> {
        self.find_node(key).map(|id| &self.nodes[id].entry.value)
    }

    #[must_use]
    pub fn get_key_value(&self, key: &K) -> Option<(&K, &V)> {
        self.find_node(key).map(|id| {
            let entry = &self.nodes[id].entry;
            (&entry.key, &entry.value)
        })
    }

    #[must_use]
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let id = self.find_node(key)?;

        Some(&mut self.nodes[id].entry.value)
    }

    #[must_use]
    pub fn contains_key(&self, key: &K) -> bool {
        self.find_node(key).is_some()
    }

    /// Associates `value` with `key` and returns the value previously associated with a
    /// comparator-equal key.
    ///
    /// If the key is already present its value is overwritten in place: the stored key is kept
    /// and the shape of the tree does not change.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        match self.search(&key) {
            Search::Found(id) => Some(std::mem::replace(&mut self.nodes[id].entry.value, value)),
            Search::Vacant { parent, side } => {
                self.attach(parent, side, Entry::new(key, value));

                None
            }
        }
    }

    /// Like [`insert`](RedBlackTreeMap::insert), but reports allocation failure instead of
    /// aborting.  Memory is reserved before the tree is touched, so on error the map is
    /// unchanged.
    pub fn try_insert(&mut self, key: K, value: V) -> Result<Option<V>, AllocError> {
        match self.search(&key) {
            Search::Found(id) => {
                Ok(Some(std::mem::replace(&mut self.nodes[id].entry.value, value)))
            }
            Search::Vacant { parent, side } => {
                self.nodes.try_reserve_one()?;
                self.attach(parent, side, Entry::new(key, value));

                Ok(None)
            }
        }
    }

    /// Removes `key` and returns its value, if present.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.remove_entry(key).map(|(_, v)| v)
    }

    /// Removes `key` and returns the stored key and its value, if present.
    pub fn remove_entry(&mut self, key: &K) -> Option<(K, V)> {
        let id = self.find_node(key)?;

        Some(self.remove_node(id).into_pair())
    }
}

impl<K, V, C> RedBlackTreeMap<K, V, C> {
    #[must_use]
    #[inline]
    pub fn size(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    #[must_use]
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Number of nodes on the longest path from the root to a leaf, `0` for an empty map.
    ///
    /// This walks the whole tree and is meant for tests and diagnostics.
    #[must_use]
    pub fn height(&self) -> usize {
        fn go<K, V>(nodes: &Arena<Node<K, V>>, node: Option<NodeId>) -> usize {
            node.map_or(0, |id| {
                let n = &nodes[id];
                1 + go(nodes, n.left).max(go(nodes, n.right))
            })
        }

        go(&self.nodes, self.root)
    }

    #[must_use]
    pub fn first(&self) -> Option<(&K, &V)> {
        self.root.map(|r| {
            let entry = &self.nodes[self.minimum(r)].entry;
            (&entry.key, &entry.value)
        })
    }

    #[must_use]
    pub fn last(&self) -> Option<(&K, &V)> {
        self.root.map(|r| {
            let entry = &self.nodes[self.maximum(r)].entry;
            (&entry.key, &entry.value)
        })
    }

    /// Removes every entry.  The node arena keeps its capacity.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    /// Lazy sequence over the entries in ascending key order.
    #[must_use]
    pub fn entries(&self) -> IterEntries<'_, K, V, C> {
        IterEntries::new(self)
    }

    /// Lazy sequence over the key-value pairs in ascending key order.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, K, V, C> {
        self.entries().map(|e| (&e.key, &e.value))
    }

    #[must_use]
    pub fn keys(&self) -> IterKeys<'_, K, V, C> {
        self.iter().map(|(k, _)| k)
    }

    #[must_use]
    pub fn values(&self) -> IterValues<'_, K, V, C> {
        self.iter().map(|(_, v)| v)
    }

    #[inline]
    fn color(&self, node: Option<NodeId>) -> Color {
        node.map_or(Color::Black, |id| self.nodes[id].color)
    }

    #[inline]
    fn set_color(&mut self, id: NodeId, color: Color) {
        self.nodes[id].color = color;
    }

    #[inline]
    fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id].parent
    }

    #[inline]
    fn child(&self, id: NodeId, side: Side) -> Option<NodeId> {
        self.nodes[id].child(side)
    }

    /// Which child of `parent` the node `id` is.
    #[inline]
    fn side_of(&self, id: NodeId, parent: NodeId) -> Side {
        if self.nodes[parent].left == Some(id) {
            Side::Left
        } else {
            Side::Right
        }
    }

    fn minimum(&self, mut id: NodeId) -> NodeId {
        while let Some(l) = self.nodes[id].left {
            id = l;
        }
        id
    }

    fn maximum(&self, mut id: NodeId) -> NodeId {
        while let Some(r) = self.nodes[id].right {
            id = r;
        }
        id
    }

    fn successor(&self, id: NodeId) -> Option<NodeId> {
        if let Some(r) = self.nodes[id].right {
            return Some(self.minimum(r));
        }

        // Lowest ancestor whose left subtree holds `id`.
        let mut child = id;
        let mut parent = self.nodes[id].parent;

        while let Some(p) = parent {
            if self.nodes[p].left == Some(child) {
                break;
            }
            child = p;
            parent = self.nodes[p].parent;
        }

        parent
    }

    fn predecessor(&self, id: NodeId) -> Option<NodeId> {
        if let Some(l) = self.nodes[id].left {
            return Some(self.maximum(l));
        }

        let mut child = id;
        let mut parent = self.nodes[id].parent;

        while let Some(p) = parent {
            if self.nodes[p].right == Some(child) {
                break;
            }
            child = p;
            parent = self.nodes[p].parent;
        }

        parent
    }

    /// Points the slot of `parent` that holds `old` (or the root, without a parent) at `new`.
    fn replace_child(&mut self, parent: Option<NodeId>, old: NodeId, new: Option<NodeId>) {
        match parent {
            None => self.root = new,
            Some(p) => {
                let node = &mut self.nodes[p];

                if node.left == Some(old) {
                    node.left = new;
                } else {
                    node.right = new;
                }
            }
        }
    }

    /// Replaces the subtree rooted at `u` with the subtree rooted at `v`, which may be absent.
    fn transplant(&mut self, u: NodeId, v: Option<NodeId>) {
        let parent = self.nodes[u].parent;

        self.replace_child(parent, u, v);

        if let Some(v) = v {
            self.nodes[v].parent = parent;
        }
    }

    /// Rotates `x` down towards `side`, promoting its child on the opposite side.
    ///
    /// A left rotation looks like this (a right rotation is the mirror image):
    ///
    /// ```text
    ///         x                y
    ///        ╱ ╲              ╱ ╲
    ///       a   y     ->     x   c
    ///          ╱ ╲          ╱ ╲
    ///         b   c        a   b
    /// ```
    fn rotate(&mut self, x: NodeId, side: Side) {
        let y = match self.child(x, side.opposite()) {
            Some(y) => y,
            None => unreachable!("rotating {:?} without a child to promote", x),
        };

        let b = self.child(y, side);
        *self.nodes[x].child_mut(side.opposite()) = b;
        if let Some(b) = b {
            self.nodes[b].parent = Some(x);
        }

        let parent = self.nodes[x].parent;
        self.nodes[y].parent = parent;
        self.replace_child(parent, x, Some(y));

        *self.nodes[y].child_mut(side) = Some(x);
        self.nodes[x].parent = Some(y);

        trace!("rotated {:?} {:?}, promoting {:?}", x, side, y);
    }

    /// Links a new red node into the empty slot found by a search and restores the red-black
    /// properties.
    fn attach(&mut self, parent: Option<NodeId>, side: Side, entry: Entry<K, V>) {
        let id = self.nodes.insert(Node::new_red(entry, parent));

        match parent {
            None => self.root = Some(id),
            Some(p) => *self.nodes[p].child_mut(side) = Some(id),
        }

        self.insert_fixup(id);
    }

    fn insert_fixup(&mut self, mut z: NodeId) {
        while let Some(mut p) = self.parent(z) {
            if self.nodes[p].color == Color::Black {
                break;
            }

            // A red node is never the root, so it has a parent.
            let g = match self.parent(p) {
                Some(g) => g,
                None => break,
            };
            let side = self.side_of(p, g);
            let uncle = self.child(g, side.opposite());

            if self.color(uncle) == Color::Red {
                // Case 1: recolor and continue from the grandparent.
                self.set_color(p, Color::Black);
                if let Some(u) = uncle {
                    self.set_color(u, Color::Black);
                }
                self.set_color(g, Color::Red);
                z = g;
            } else {
                if self.child(p, side.opposite()) == Some(z) {
                    // Case 2: `z` is an inner child.  Rotate it into the parent's position.
                    self.rotate(p, side);
                    std::mem::swap(&mut z, &mut p);
                }

                // Case 3: `z` is an outer child.
                self.set_color(p, Color::Black);
                self.set_color(g, Color::Red);
                self.rotate(g, side.opposite());
            }
        }

        if let Some(root) = self.root {
            self.set_color(root, Color::Black);
        }
    }

    /// Unlinks `z` from the tree, rebalances, and frees its arena slot.
    fn remove_node(&mut self, z: NodeId) -> Entry<K, V> {
        let (z_left, z_right, z_color) = {
            let node = &self.nodes[z];
            (node.left, node.right, node.color)
        };

        // `x` takes the place of the node that is physically unlinked.  It may be absent, so
        // its parent is tracked separately.
        let x: Option<NodeId>;
        let x_parent: Option<NodeId>;
        let removed_color: Color;

        match (z_left, z_right) {
            (None, _) => {
                removed_color = z_color;
                x = z_right;
                x_parent = self.parent(z);
                self.transplant(z, z_right);
            }
            (Some(_), None) => {
                removed_color = z_color;
                x = z_left;
                x_parent = self.parent(z);
                self.transplant(z, z_left);
            }
            (Some(l), Some(r)) => {
                let y = self.minimum(r);

                removed_color = self.nodes[y].color;
                x = self.nodes[y].right;

                if y == r {
                    x_parent = Some(y);
                } else {
                    x_parent = self.parent(y);
                    self.transplant(y, x);
                    self.nodes[y].right = Some(r);
                    self.nodes[r].parent = Some(y);
                }

                self.transplant(z, Some(y));
                self.nodes[y].left = Some(l);
                self.nodes[l].parent = Some(y);
                self.nodes[y].color = z_color;
            }
        }

        if removed_color == Color::Black {
            self.remove_fixup(x, x_parent);
        }

        self.nodes.remove(z).entry
    }

    fn remove_fixup(&mut self, mut x: Option<NodeId>, mut parent: Option<NodeId>) {
        while x != self.root && self.color(x) == Color::Black {
            let p = match parent {
                Some(p) => p,
                None => break,
            };
            let side = if self.nodes[p].left == x { Side::Left } else { Side::Right };
            let mut sibling = self.child(p, side.opposite());

            if let Some(w) = sibling.filter(|&w| self.nodes[w].color == Color::Red) {
                // Case 1: make the sibling black.
                self.set_color(w, Color::Black);
                self.set_color(p, Color::Red);
                self.rotate(p, side);
                sibling = self.child(p, side.opposite());
            }

            // A black `x` always has a sibling in a balanced tree.
            let mut w = match sibling {
                Some(w) => w,
                None => {
                    x = Some(p);
                    parent = self.parent(p);
                    continue;
                }
            };

            let inner = self.child(w, side);
            let outer = self.child(w, side.opposite());

            if self.color(inner) == Color::Black && self.color(outer) == Color::Black {
                // Case 2: push the missing black up.
                self.set_color(w, Color::Red);
                x = Some(p);
                parent = self.parent(p);
            } else {
                if self.color(outer) == Color::Black {
                    // Case 3: the inner child is red.  Rotate it into the sibling's place.
                    if let Some(i) = inner {
                        self.set_color(i, Color::Black);
                        self.set_color(w, Color::Red);
                        self.rotate(w, side.opposite());
                        w = i;
                    }
                }

                // Case 4: the outer child is red.
                let parent_color = self.nodes[p].color;
                self.set_color(w, parent_color);
                self.set_color(p, Color::Black);
                if let Some(o) = self.child(w, side.opposite()) {
                    self.set_color(o, Color::Black);
                }
                self.rotate(p, side);

                x = self.root;
                parent = None;
            }
        }

        if let Some(x) = x {
            self.set_color(x, Color::Black);
        }
    }
}

impl<K, V, C> Index<&K> for RedBlackTreeMap<K, V, C>
where
    C: Comparator<K>,
{
    type Output = V;

    fn index(&self, key: &K) -> &V {
        self.get(key).expect("no entry found for key")
    }
}

impl<K, V, C> Default for RedBlackTreeMap<K, V, C>
where
    C: Comparator<K> + Default,
{
    fn default() -> RedBlackTreeMap<K, V, C> {
        RedBlackTreeMap::with_comparator(C::default())
    }
}

impl<K: PartialEq, V: PartialEq, C> PartialEq for RedBlackTreeMap<K, V, C> {
    fn eq(&self, other: &RedBlackTreeMap<K, V, C>) -> bool {
        self.size() == other.size() && self.iter().eq(other.iter())
    }
}

impl<K: Eq, V: Eq, C> Eq for RedBlackTreeMap<K, V, C> {}

impl<K: Hash, V: Hash, C> Hash for RedBlackTreeMap<K, V, C> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Add the hash of length so that if two collections are added one after the other it
        // doesn't hash to the same thing as a single collection with the same elements in the same
        // order.
        self.size().hash(state);

        for e in self.entries() {
            e.hash(state);
        }
    }
}

impl<K: Debug, V: Debug, C> Debug for RedBlackTreeMap<K, V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Renders the map as `[k1:v1, k2:v2, ...]` in ascending key order.
impl<K: Display, V: Display, C> Display for RedBlackTreeMap<K, V, C> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_seq(fmt, self.entries())
    }
}

impl<'a, K, V, C> IntoIterator for &'a RedBlackTreeMap<K, V, C> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V, C>;

    fn into_iter(self) -> Iter<'a, K, V, C> {
        self.iter()
    }
}

impl<K, V, C> Extend<(K, V)> for RedBlackTreeMap<K, V, C>
where
    C: Comparator<K>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<K, V, C> FromIterator<(K, V)> for RedBlackTreeMap<K, V, C>
where
    C: Comparator<K> + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(into_iter: I) -> RedBlackTreeMap<K, V, C> {
        let mut map = RedBlackTreeMap::default();

        map.extend(into_iter);

        map
    }
}

impl<K, V, C> Container for RedBlackTreeMap<K, V, C> {
    fn size(&self) -> usize {
        RedBlackTreeMap::size(self)
    }

    fn is_empty(&self) -> bool {
        RedBlackTreeMap::is_empty(self)
    }
}

impl<K, V, C> Dictionary<K, V> for RedBlackTreeMap<K, V, C>
where
    C: Comparator<K>,
{
    type Iter<'a>
        = Iter<'a, K, V, C>
    where
        Self: 'a,
        K: 'a,
        V: 'a;

    fn list(&self) -> Iter<'_, K, V, C> {
        self.iter()
    }

    fn find(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn insert(&mut self, key: K, value: V) -> Option<V> {
        RedBlackTreeMap::insert(self, key, value)
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        RedBlackTreeMap::remove(self, key)
    }
}

/// Lazy in-order sequence over the entries of a [`RedBlackTreeMap`].
///
/// Each end holds a cursor to the next node to yield.  Stepping the front cursor moves it to
/// the in-order successor, stepping the back cursor to the in-order predecessor, and a count of
/// the entries still to be yielded stops both once they meet.
#[derive(Debug)]
pub struct IterEntries<'a, K, V, C> {
    map: &'a RedBlackTreeMap<K, V, C>,

    front: Option<NodeId>,
    back:  Option<NodeId>,

    remaining: usize,
}

impl<'a, K, V, C> IterEntries<'a, K, V, C> {
    fn new(map: &'a RedBlackTreeMap<K, V, C>) -> IterEntries<'a, K, V, C> {
        IterEntries {
            map,

            front: map.root.map(|r| map.minimum(r)),
            back: map.root.map(|r| map.maximum(r)),

            remaining: map.size(),
        }
    }
}

impl<'a, K, V, C> Iterator for IterEntries<'a, K, V, C> {
    type Item = &'a Entry<K, V>;

    fn next(&mut self) -> Option<&'a Entry<K, V>> {
        if self.remaining == 0 {
            return None;
        }

        let map = self.map;
        let current = self.front?;

        self.front = map.successor(current);
        self.remaining -= 1;

        Some(&map.nodes[current].entry)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K, V, C> DoubleEndedIterator for IterEntries<'a, K, V, C> {
    fn next_back(&mut self) -> Option<&'a Entry<K, V>> {
        if self.remaining == 0 {
            return None;
        }

        let map = self.map;
        let current = self.back?;

        self.back = map.predecessor(current);
        self.remaining -= 1;

        Some(&map.nodes[current].entry)
    }
}

impl<K, V, C> ExactSizeIterator for IterEntries<'_, K, V, C> {}

impl<K, V, C> FusedIterator for IterEntries<'_, K, V, C> {}
