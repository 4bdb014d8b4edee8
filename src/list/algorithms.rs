use crate::list::StoutList;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::mem;

use self::sort::{bubble_sort, insertion_sort};

mod sort;

impl<T: PartialEq> PartialEq for StoutList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T: Eq> Eq for StoutList<T> {}

impl<T: PartialOrd> PartialOrd for StoutList<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T: Ord> Ord for StoutList<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

/// Cloning keeps the node size and the node layout.
impl<T: Clone> Clone for StoutList<T> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes.clone(),
            free: self.free.clone(),
            node_size: self.node_size,
            len: self.len,
            generation: 0,
        }
    }
}

impl<T: Hash> Hash for StoutList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for elt in self {
            elt.hash(state);
        }
    }
}

impl<T> StoutList<T> {
    /// Returns `true` if the `StoutList` contains an element equal to the
    /// given value.
    ///
    /// # Examples
    ///
    /// ```
    /// use stout_list::StoutList;
    /// use std::iter::FromIterator;
    ///
    /// let list = StoutList::from_iter(0..3);
    /// assert_eq!(list.contains(&0), true);
    /// assert_eq!(list.contains(&10), false);
    /// ```
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq<T>,
    {
        self.iter().any(|e| e == x)
    }

    /// Sort the list in non-decreasing order.
    ///
    /// This sort is stable (i.e., does not reorder equal elements).
    ///
    /// The elements are drained into a buffer, sorted there, and appended
    /// back, so afterwards every node except possibly the last one is full.
    ///
    /// # Current Implementation
    ///
    /// The buffer is sorted by insertion sort, in *O*(*n*<sup>2</sup>) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use stout_list::StoutList;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = StoutList::from_iter([5, 2, 4, 3, 1]);
    /// list.sort();
    /// assert_eq!(list.dump(), "[(1, 2, 3, 4), (5, -, -, -)]");
    /// ```
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        self.sort_with(insertion_sort, |a, b| a.lt(b));
    }

    /// Sort the list in non-increasing order.
    ///
    /// This sort is stable. Afterwards every node except possibly the last
    /// one is full.
    ///
    /// # Current Implementation
    ///
    /// The buffer is sorted by bubble sort, in *O*(*n*<sup>2</sup>) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use stout_list::StoutList;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = StoutList::from_iter([5, 2, 4, 3, 1]);
    /// list.sort_reverse();
    /// assert_eq!(list.dump(), "[(5, 4, 3, 2), (1, -, -, -)]");
    /// ```
    pub fn sort_reverse(&mut self)
    where
        T: Ord,
    {
        self.sort_with(bubble_sort, |a, b| b.lt(a));
    }

    /// Sort the list with a comparator function.
    ///
    /// This sort is stable (i.e., does not reorder equal elements).
    ///
    /// The comparator function must define a total ordering for the
    /// elements in the list. If the ordering is not total, the order
    /// of the elements is unspecified.
    ///
    /// # Examples
    ///
    /// ```
    /// use stout_list::StoutList;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = StoutList::from_iter([5, 4, 1, 3, 2]);
    ///
    /// list.sort_by(|a, b| a.cmp(b));
    /// assert_eq!(Vec::from_iter(list.iter().copied()), vec![1, 2, 3, 4, 5]);
    ///
    /// // reverse sorting
    /// list.sort_by(|a, b| b.cmp(a));
    /// assert_eq!(Vec::from_iter(list.iter().copied()), vec![5, 4, 3, 2, 1]);
    /// ```
    pub fn sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.sort_with(insertion_sort, |a, b| compare(a, b) == Ordering::Less);
    }

    /// Sort the list with a key extraction function.
    ///
    /// This sort is stable (i.e., does not reorder equal elements).
    ///
    /// # Examples
    ///
    /// ```
    /// use stout_list::StoutList;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = StoutList::from_iter([-5i32, 4, 1, -3, 2]);
    ///
    /// list.sort_by_key(|k| k.abs());
    /// assert_eq!(Vec::from_iter(list), vec![1, 2, -3, 4, -5]);
    /// ```
    pub fn sort_by_key<K, F>(&mut self, mut f: F)
    where
        F: FnMut(&T) -> K,
        K: Ord,
    {
        self.sort_with(insertion_sort, |a, b| f(a).lt(&f(b)));
    }

    fn sort_with<S, F>(&mut self, sort: S, less: F)
    where
        S: FnOnce(&mut [T], F),
        F: FnMut(&T, &T) -> bool,
    {
        let items = self.take_all();
        let mut refill = Refill { list: self, items };
        sort(&mut refill.items, less);
    }
}

/// Appends the drained elements back to the list when dropped, so a
/// panicking comparator leaves every element in the list.
struct Refill<'a, T> {
    list: &'a mut StoutList<T>,
    items: Vec<T>,
}

impl<T> Drop for Refill<'_, T> {
    fn drop(&mut self) {
        let items = mem::take(&mut self.items);
        self.list.extend(items);
    }
}
