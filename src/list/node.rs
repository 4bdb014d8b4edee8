use smallvec::SmallVec;

use crate::list::DEFAULT_NODE_SIZE;

/// Storage of a single node. Its length is the node's element count.
pub(crate) type Block<T> = SmallVec<[T; DEFAULT_NODE_SIZE]>;

/// A node of the chain: a block of at most `capacity` elements, stored
/// contiguously from offset 0, plus the arena indices of its neighbours.
///
/// The primitives here never rebalance; keeping nodes half full is the
/// job of the list.
#[derive(Clone)]
pub(crate) struct Node<T> {
    pub(crate) items: Block<T>,
    pub(crate) capacity: usize,
    pub(crate) next: usize,
    pub(crate) prev: usize,
}

impl<T> Node<T> {
    pub(crate) fn new(capacity: usize, prev: usize, next: usize) -> Self {
        Self::with_items(capacity, Block::with_capacity(capacity), prev, next)
    }

    /// A node taking ownership of `items` as its storage.
    pub(crate) fn with_items(capacity: usize, items: Block<T>, prev: usize, next: usize) -> Self {
        debug_assert!(items.len() <= capacity, "node built over capacity");
        Self {
            items,
            capacity,
            next,
            prev,
        }
    }

    #[inline]
    pub(crate) fn count(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub(crate) fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    /// Append `item` after the last live element.
    pub(crate) fn append(&mut self, item: T) {
        debug_assert!(!self.is_full(), "append to a full node");
        self.items.push(item);
    }

    /// Insert `item` at `offset`, shifting `offset..count` one slot right.
    pub(crate) fn insert_at(&mut self, offset: usize, item: T) {
        debug_assert!(!self.is_full(), "insert into a full node");
        debug_assert!(offset <= self.count(), "insert offset past the live range");
        self.items.insert(offset, item);
    }

    /// Remove and return the element at `offset`, shifting the rest left.
    pub(crate) fn remove_at(&mut self, offset: usize) -> T {
        debug_assert!(offset < self.count(), "remove offset past the live range");
        self.items.remove(offset)
    }

    /// Move the upper half `capacity/2..capacity` of a full node out, in order.
    pub(crate) fn split_upper(&mut self) -> Block<T> {
        debug_assert!(self.is_full(), "only full nodes are split");
        let mut upper = Block::with_capacity(self.capacity);
        upper.extend(self.items.drain(self.capacity / 2..));
        upper
    }

    /// Append every element of `other`, in order.
    pub(crate) fn absorb(&mut self, other: Block<T>) {
        debug_assert!(
            self.count() + other.len() <= self.capacity,
            "merged node overflows"
        );
        self.items.extend(other);
    }
}
