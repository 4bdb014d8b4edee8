use crate::list::StoutList;
use std::fmt;
use std::iter::{FromIterator, FusedIterator};

/// An iterator over the elements of a `StoutList`.
///
/// It keeps a pair of positions `(node, offset)` into the list: `front`
/// points at the next element to yield, `back` just past the last one.
/// Since both ends walk whole nodes, each step is *O*(1).
///
/// # Examples
///
/// ```compile_fail
/// use stout_list::StoutList;
/// use std::iter::FromIterator;
///
/// let mut list = StoutList::from_iter([1, 2, 3]);
/// let mut iter = list.iter();
///
/// // Won't compile, because list is already borrowed immutably.
/// list.push_back(4);
/// println!("{:?}", iter.next());
/// ```
pub struct Iter<'a, T: 'a> {
    list: &'a StoutList<T>,
    front: (usize, usize),
    back: (usize, usize),
    len: usize,
}

impl<'a, T: 'a> Iter<'a, T> {
    pub(crate) fn new(list: &'a StoutList<T>) -> Self {
        Self {
            list,
            front: (list.front_node(), 0),
            back: (list.back_node(), list.node(list.back_node()).count()),
            len: list.len(),
        }
    }
}

impl<'a, T: 'a> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Self { ..*self }
    }
}

impl<'a, T: fmt::Debug + 'a> fmt::Debug for Iter<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.len).finish()
    }
}

impl<'a, T: 'a> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        let (mut node, mut offset) = self.front;
        // `len > 0` guarantees a live element before the tail sentinel.
        while offset >= self.list.node(node).count() {
            node = self.list.node(node).next;
            offset = 0;
        }
        self.front = (node, offset + 1);
        self.len -= 1;
        self.list.node(node).items.get(offset)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }

    fn last(mut self) -> Option<Self::Item>
    where
        Self: Sized,
    {
        self.next_back()
    }
}

impl<'a, T: 'a> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        let (mut node, mut end) = self.back;
        while end == 0 {
            node = self.list.node(node).prev;
            end = self.list.node(node).count();
        }
        self.back = (node, end - 1);
        self.len -= 1;
        self.list.node(node).items.get(end - 1)
    }
}

impl<'a, T: 'a> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T: 'a> FusedIterator for Iter<'a, T> {}

/// An iterator over the nodes of a `StoutList`, yielding the live elements of
/// each node as a slice.
pub struct Blocks<'a, T: 'a> {
    list: &'a StoutList<T>,
    node: usize,
}

impl<'a, T: 'a> Blocks<'a, T> {
    pub(crate) fn new(list: &'a StoutList<T>) -> Self {
        Self {
            list,
            node: list.front_node(),
        }
    }
}

impl<'a, T: 'a> Iterator for Blocks<'a, T> {
    type Item = &'a [T];

    fn next(&mut self) -> Option<Self::Item> {
        if StoutList::<T>::is_tail(self.node) {
            return None;
        }
        let node = self.list.node(self.node);
        self.node = node.next;
        Some(node.items.as_slice())
    }
}

impl<'a, T: 'a> FusedIterator for Blocks<'a, T> {}

/// An owning iterator over the elements of a `StoutList`.
pub struct IntoIter<T> {
    list: StoutList<T>,
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoIter")
            .field("list", &self.list)
            .finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.list.len();
        (len, Some(len))
    }

    fn last(mut self) -> Option<Self::Item>
    where
        Self: Sized,
    {
        self.next_back()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.list.pop_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for StoutList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a StoutList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> FromIterator<T> for StoutList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = StoutList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for StoutList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|item| self.push_back(item));
    }
}

impl<'a, T: 'a + Copy> Extend<&'a T> for StoutList<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied())
    }
}
