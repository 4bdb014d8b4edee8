use std::fmt::{Debug, Formatter};
use std::mem;

use tracing::trace;

use crate::error::{Error, Result};
use crate::list::cursor::ListCursor;
use crate::list::node::{Block, Node};
use crate::{Blocks, Iter};

pub mod cursor;
pub mod iterator;

mod algorithms;
mod dump;
mod node;

/// Number of elements a node holds when no node size is given.
pub const DEFAULT_NODE_SIZE: usize = 4;

/// Arena index of the head sentinel.
const HEAD: usize = 0;
/// Arena index of the tail sentinel.
const TAIL: usize = 1;

/// The `StoutList` is an unrolled doubly-linked list: every node holds a block
/// of up to `node_size` elements instead of a single one.
///
/// Every node except possibly the last one is kept at least half full, so a
/// list of *n* elements has at most about 2*n* / `node_size` nodes. Positional
/// access walks the nodes, not the elements.
///
/// The nodes live in an arena and refer to each other by index. Indices `0`
/// and `1` are the head and tail sentinels, which bound the chain and never
/// hold elements. Slots of released nodes are kept on a free list and reused.
///
/// # Naming Conventions
///
/// - *position*: the zero-based index of an element in the whole list;
/// - *offset*: the index of an element inside its node.
pub struct StoutList<T> {
    nodes: Vec<Node<T>>,
    free: Vec<usize>,
    node_size: usize,
    /// the number of elements in the list
    len: usize,
    /// bumped by every structural mutation
    generation: u64,
}

/// Opaque handle of a node, as returned by [`StoutList::find`].
///
/// A handle is only meaningful until the next structural mutation of the list
/// it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// The node holding an element, and the element's offset inside that node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Location {
    pub node: NodeId,
    pub offset: usize,
}

// private methods
impl<T> StoutList<T> {
    fn empty(node_size: usize) -> Self {
        let nodes = vec![Node::new(0, HEAD, TAIL), Node::new(0, HEAD, TAIL)];
        Self {
            nodes,
            free: Vec::new(),
            node_size,
            len: 0,
            generation: 0,
        }
    }

    pub(crate) fn front_node(&self) -> usize {
        self.nodes[HEAD].next
    }

    pub(crate) fn back_node(&self) -> usize {
        self.nodes[TAIL].prev
    }

    pub(crate) fn node(&self, index: usize) -> &Node<T> {
        &self.nodes[index]
    }

    pub(crate) fn is_tail(index: usize) -> bool {
        index == TAIL
    }

    fn connect(&mut self, prev: usize, next: usize) {
        self.nodes[prev].next = next;
        self.nodes[next].prev = prev;
    }

    /// Create a node holding `items`, linked between the adjacent nodes
    /// `prev` and `next`, reusing a released slot if there is one.
    fn attach_node(&mut self, prev: usize, next: usize, items: Block<T>) -> usize {
        debug_assert_eq!(self.nodes[prev].next, next, "attach between non-adjacent nodes");
        let node = Node::with_items(self.node_size, items, prev, next);
        let index = match self.free.pop() {
            Some(index) => {
                self.nodes[index] = node;
                index
            }
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            }
        };
        self.connect(prev, index);
        self.connect(index, next);
        index
    }

    /// Splice the node at `index` out of the chain and release its slot.
    fn detach_node(&mut self, index: usize) {
        let (prev, next) = (self.nodes[index].prev, self.nodes[index].next);
        self.connect(prev, next);
        self.nodes[index].items.clear();
        self.free.push(index);
        trace!(node = index, "node released");
    }

    /// Map `pos` in `0..=len` to a node and an offset. Position `len` maps to
    /// the tail sentinel at offset 0.
    fn locate(&self, pos: usize) -> (usize, usize) {
        let (mut node, mut start) = (self.front_node(), 0);
        while node != TAIL {
            let count = self.nodes[node].count();
            if pos < start + count {
                return (node, pos - start);
            }
            start += count;
            node = self.nodes[node].next;
        }
        (TAIL, pos - start)
    }

    fn mutated(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        #[cfg(debug_assertions)]
        self.assert_invariants();
    }

    /// Insert at a position already checked to be in `0..=len`.
    fn insert_unchecked(&mut self, pos: usize, item: T) {
        let (node, offset) = self.locate(pos);
        if offset == 0 {
            // An item landing on a node boundary prefers the end of the
            // previous node over splitting the current one.
            let prev = self.nodes[node].prev;
            if prev != HEAD && !self.nodes[prev].is_full() {
                self.nodes[prev].append(item);
                self.len += 1;
                self.mutated();
                return;
            }
            if node == TAIL {
                self.push_back(item);
                return;
            }
        }

        if !self.nodes[node].is_full() {
            self.nodes[node].insert_at(offset, item);
        } else {
            let half = self.node_size / 2;
            let upper = self.nodes[node].split_upper();
            let next = self.nodes[node].next;
            let successor = self.attach_node(node, next, upper);
            trace!(node, successor, offset, "node overflowed, split");
            if offset <= half {
                self.nodes[node].insert_at(offset, item);
            } else {
                self.nodes[successor].insert_at(offset - half, item);
            }
        }
        self.len += 1;
        self.mutated();
    }

    /// Take every element out of the list, in order, leaving it empty.
    pub(crate) fn take_all(&mut self) -> Vec<T> {
        let mut items = Vec::with_capacity(self.len);
        let mut node = self.front_node();
        while node != TAIL {
            items.extend(mem::take(&mut self.nodes[node].items));
            node = self.nodes[node].next;
        }
        self.reset();
        items
    }

    fn reset(&mut self) {
        self.nodes.truncate(2);
        self.free.clear();
        self.connect(HEAD, TAIL);
        self.len = 0;
        self.mutated();
    }

    #[cfg(debug_assertions)]
    fn assert_invariants(&self) {
        let half = self.node_size / 2;
        let (mut prev, mut node, mut len) = (HEAD, self.front_node(), 0);
        while node != TAIL {
            let current = &self.nodes[node];
            assert_eq!(current.prev, prev, "broken back link at node {}", node);
            assert!(current.count() > 0, "empty node {} left in the chain", node);
            assert!(current.count() <= self.node_size, "node {} overflowed", node);
            if current.next != TAIL {
                assert!(current.count() >= half, "node {} is less than half full", node);
            }
            len += current.count();
            prev = node;
            node = current.next;
        }
        assert_eq!(self.nodes[TAIL].prev, prev, "broken back link at the tail");
        assert_eq!(len, self.len, "length does not match the node counts");
    }
}

impl<T> StoutList<T> {
    /// Creates an empty `StoutList` with nodes of [`DEFAULT_NODE_SIZE`]
    /// elements.
    ///
    /// # Examples
    /// ```
    /// use stout_list::StoutList;
    /// let list: StoutList<u32> = StoutList::new();
    /// assert_eq!(list.node_size(), 4);
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self::empty(DEFAULT_NODE_SIZE)
    }

    /// Creates an empty `StoutList` whose nodes hold `node_size` elements.
    ///
    /// Returns [`Error::InvalidNodeSize`] unless `node_size` is a positive
    /// even number.
    ///
    /// # Examples
    /// ```
    /// use stout_list::{Error, StoutList};
    ///
    /// let list = StoutList::<char>::with_node_size(6).unwrap();
    /// assert_eq!(list.node_size(), 6);
    ///
    /// assert_eq!(
    ///     StoutList::<char>::with_node_size(3).err(),
    ///     Some(Error::InvalidNodeSize(3))
    /// );
    /// ```
    pub fn with_node_size(node_size: usize) -> Result<Self> {
        if node_size == 0 || node_size % 2 != 0 {
            return Err(Error::InvalidNodeSize(node_size));
        }
        Ok(Self::empty(node_size))
    }

    /// The maximum number of elements held by a node.
    #[inline]
    pub fn node_size(&self) -> usize {
        self.node_size
    }

    /// Returns the number of elements in the list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of nodes in the chain, sentinels excluded.
    pub fn node_count(&self) -> usize {
        self.nodes.len() - 2 - self.free.len()
    }

    /// A counter that changes whenever elements are inserted, removed or
    /// reordered. Overwriting an element in place does not change it.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Finds the node holding the element at `pos`, and its offset inside
    /// that node. Returns `None` if `pos >= len`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n* / `node_size`) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use stout_list::StoutList;
    /// use std::iter::FromIterator;
    ///
    /// let list = StoutList::from_iter(1..=5);
    /// // nodes: (1, 2, 3, 4), (5, -, -, -)
    /// assert_eq!(list.find(2).unwrap().offset, 2);
    /// assert_eq!(list.find(4).unwrap().offset, 0);
    /// assert_ne!(list.find(2).unwrap().node, list.find(4).unwrap().node);
    /// assert_eq!(list.find(5), None);
    /// ```
    pub fn find(&self, pos: usize) -> Option<Location> {
        if pos >= self.len {
            return None;
        }
        let (node, offset) = self.locate(pos);
        Some(Location {
            node: NodeId(node),
            offset,
        })
    }

    /// Provides a reference to the element at `pos`, or `None` if `pos` is
    /// out of bounds.
    pub fn get(&self, pos: usize) -> Option<&T> {
        let Location { node, offset } = self.find(pos)?;
        self.nodes[node.0].items.get(offset)
    }

    /// Provides a mutable reference to the element at `pos`, or `None` if
    /// `pos` is out of bounds.
    pub fn get_mut(&mut self, pos: usize) -> Option<&mut T> {
        let Location { node, offset } = self.find(pos)?;
        self.nodes[node.0].items.get_mut(offset)
    }

    /// Provides a reference to the front element, or `None` if the list is
    /// empty.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.nodes[self.front_node()].items.first()
    }

    /// Provides a reference to the back element, or `None` if the list is
    /// empty.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.nodes[self.back_node()].items.last()
    }

    /// Appends an element to the back of the list. A new node is started only
    /// when the last node is full.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use stout_list::StoutList;
    ///
    /// let mut list = StoutList::new();
    /// (1..=5).for_each(|x| list.push_back(x));
    /// assert_eq!(list.dump(), "[(1, 2, 3, 4), (5, -, -, -)]");
    /// ```
    pub fn push_back(&mut self, item: T) {
        let back = self.back_node();
        let node = if back != HEAD && !self.nodes[back].is_full() {
            back
        } else {
            self.attach_node(back, TAIL, Block::with_capacity(self.node_size))
        };
        self.nodes[node].append(item);
        self.len += 1;
        self.mutated();
    }

    /// Adds an element first in the list.
    pub fn push_front(&mut self, item: T) {
        self.insert_unchecked(0, item);
    }

    /// Removes the first element and returns it, or `None` if the list is
    /// empty.
    pub fn pop_front(&mut self) -> Option<T> {
        self.remove(0).ok()
    }

    /// Removes the last element and returns it, or `None` if the list is
    /// empty.
    pub fn pop_back(&mut self) -> Option<T> {
        let last = self.len.checked_sub(1)?;
        self.remove(last).ok()
    }

    /// Inserts an element at position `pos`, shifting every element after it
    /// one position back.
    ///
    /// A full node is split in two: its upper half moves into a new successor
    /// and the element goes into whichever half its offset falls in, the
    /// original node winning ties.
    ///
    /// Returns [`Error::IndexOutOfRange`] if `pos > len`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n* / `node_size` + `node_size`) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use stout_list::StoutList;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = StoutList::from_iter(1..=5);
    /// list.insert(2, 99).unwrap();
    /// assert_eq!(list.dump(), "[(1, 2, 99, -), (3, 4, -, -), (5, -, -, -)]");
    /// assert!(list.insert(7, 0).is_err());
    /// ```
    pub fn insert(&mut self, pos: usize, item: T) -> Result<()> {
        if pos > self.len {
            return Err(Error::IndexOutOfRange {
                index: pos,
                len: self.len,
            });
        }
        self.insert_unchecked(pos, item);
        Ok(())
    }

    /// Removes the element at position `pos` and returns it.
    ///
    /// A node falling below half full takes the first element of its
    /// successor when the successor can spare one, and otherwise absorbs the
    /// whole successor.
    ///
    /// Returns [`Error::IndexOutOfRange`] if `pos >= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use stout_list::StoutList;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = StoutList::from_iter(1..=8);
    /// assert_eq!(list.remove(0), Ok(1));
    /// assert_eq!(list.remove(0), Ok(2));
    /// assert_eq!(list.dump(), "[(3, 4, -, -), (5, 6, 7, 8)]");
    ///
    /// // the first node drops below half and takes 5 from its successor
    /// assert_eq!(list.remove(0), Ok(3));
    /// assert_eq!(list.dump(), "[(4, 5, -, -), (6, 7, 8, -)]");
    /// ```
    pub fn remove(&mut self, pos: usize) -> Result<T> {
        if pos >= self.len {
            return Err(Error::IndexOutOfRange {
                index: pos,
                len: self.len,
            });
        }
        let half = self.node_size / 2;
        let (node, offset) = self.locate(pos);
        let (count, next) = (self.nodes[node].count(), self.nodes[node].next);

        let item = if next == TAIL && count == 1 {
            let item = self.nodes[node].remove_at(offset);
            self.detach_node(node);
            item
        } else if next == TAIL || count > half {
            self.nodes[node].remove_at(offset)
        } else {
            let item = self.nodes[node].remove_at(offset);
            if self.nodes[next].count() > half {
                let first = self.nodes[next].remove_at(0);
                self.nodes[node].append(first);
                trace!(node, successor = next, "node underflowed, borrowed from successor");
            } else {
                let rest = mem::take(&mut self.nodes[next].items);
                self.nodes[node].absorb(rest);
                trace!(node, successor = next, "node underflowed, merged successor");
                self.detach_node(next);
            }
            item
        };
        self.len -= 1;
        self.mutated();
        Ok(item)
    }

    /// Removes all elements from the list.
    ///
    /// # Examples
    ///
    /// ```
    /// use stout_list::StoutList;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = StoutList::from_iter(0..10);
    /// list.clear();
    /// assert!(list.is_empty());
    /// assert_eq!(list.node_count(), 0);
    /// ```
    pub fn clear(&mut self) {
        self.reset();
    }

    /// Provides a cursor before the first element.
    pub fn cursor_start_mut(&mut self) -> ListCursor<'_, T>
    where
        T: Clone,
    {
        ListCursor::new(self, 0)
    }

    /// Provides a cursor before the element at `pos`; `pos == len` places it
    /// after the last element.
    ///
    /// Returns [`Error::IndexOutOfRange`] if `pos > len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use stout_list::StoutList;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = StoutList::from_iter(['a', 'b', 'c']);
    /// let mut cursor = list.cursor_mut(1).unwrap();
    /// assert_eq!(cursor.next(), Ok(&'b'));
    /// ```
    pub fn cursor_mut(&mut self, pos: usize) -> Result<ListCursor<'_, T>>
    where
        T: Clone,
    {
        if pos > self.len {
            return Err(Error::IndexOutOfRange {
                index: pos,
                len: self.len,
            });
        }
        Ok(ListCursor::new(self, pos))
    }

    /// Provides a forward iterator.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Provides an iterator over the live elements of each node, in order.
    ///
    /// # Examples
    ///
    /// ```
    /// use stout_list::StoutList;
    /// use std::iter::FromIterator;
    ///
    /// let list = StoutList::from_iter(1..=5);
    /// let blocks: Vec<&[i32]> = list.blocks().collect();
    /// assert_eq!(blocks, vec![&[1, 2, 3, 4][..], &[5][..]]);
    /// ```
    #[inline]
    pub fn blocks(&self) -> Blocks<'_, T> {
        Blocks::new(self)
    }
}

impl<T> Default for StoutList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug> Debug for StoutList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
