use crate::error::{Error, Result};
use crate::list::StoutList;
use std::fmt;
use std::fmt::{Display, Formatter};

/// The direction of the most recent successful `next` / `previous` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LastMove {
    None,
    Next,
    Previous,
}

/// A bidirectional cursor over a `StoutList` with editing operations.
///
/// The cursor sits *between* elements. In a list with length *n* there are
/// *n* + 1 valid locations, indexed by 0, 1, ..., *n*; location *i* is just
/// before the element at position *i*.
///
/// Reads are served from a flat copy of the list taken together with the
/// list's [`generation`](StoutList::generation). Whenever the cursor edits the
/// list, the generation moves on and the copy is taken again on the next
/// read, since splits and merges shift elements between nodes.
///
/// # Examples
///
/// ```
/// use stout_list::StoutList;
/// use std::iter::FromIterator;
///
/// let mut list = StoutList::from_iter(['A', 'B', 'C', 'D']);
///
/// // [|A B C D]
/// let mut cursor = list.cursor_start_mut();
/// assert_eq!(cursor.next(), Ok(&'A'));
/// assert_eq!(cursor.next(), Ok(&'B'));
///
/// // [A|C D] removes the element returned last
/// assert_eq!(cursor.remove(), Ok('B'));
/// assert_eq!(cursor.index(), 1);
///
/// // [A X|C D]
/// cursor.insert('X').unwrap();
/// assert_eq!(cursor.previous(), Ok(&'X'));
/// cursor.set('Y').unwrap();
///
/// assert_eq!(Vec::from_iter(list), vec!['A', 'Y', 'C', 'D']);
/// ```
///
/// The list cannot be touched while the cursor is alive:
///
/// ```compile_fail
/// use stout_list::StoutList;
/// use std::iter::FromIterator;
///
/// let mut list = StoutList::from_iter([1, 2, 3]);
/// let mut cursor = list.cursor_start_mut();
/// list.push_back(4);
/// println!("{:?}", cursor.next());
/// ```
pub struct ListCursor<'a, T: Clone + 'a> {
    list: &'a mut StoutList<T>,
    index: usize,
    last_move: LastMove,
    snapshot: Vec<T>,
    generation: u64,
}

impl<'a, T: Clone + 'a> ListCursor<'a, T> {
    pub(crate) fn new(list: &'a mut StoutList<T>, index: usize) -> Self {
        let snapshot = list.iter().cloned().collect();
        let generation = list.generation();
        Self {
            list,
            index,
            last_move: LastMove::None,
            snapshot,
            generation,
        }
    }

    /// Take a fresh copy of the list if it changed since the last one.
    fn sync(&mut self) {
        if self.generation != self.list.generation() {
            self.snapshot.clear();
            self.snapshot.extend(self.list.iter().cloned());
            self.generation = self.list.generation();
        }
    }

    /// Position of the element returned by the last `next` / `previous`.
    fn last_returned(&self) -> Result<usize> {
        match self.last_move {
            LastMove::Next => Ok(self.index - 1),
            LastMove::Previous => Ok(self.index),
            LastMove::None => Err(Error::InvalidCursorState),
        }
    }

    /// Return the index of the cursor, which is also the position of the
    /// element a call to [`next`](Self::next) would return.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// The position of the element a call to `next` would return. Equal to
    /// the length of the list at the end.
    #[inline]
    pub fn next_index(&self) -> usize {
        self.index
    }

    /// The position of the element a call to `previous` would return, or
    /// `None` at the start of the list.
    #[inline]
    pub fn previous_index(&self) -> Option<usize> {
        self.index.checked_sub(1)
    }

    /// Returns `true` if a call to [`next`](Self::next) would return an element.
    #[inline]
    pub fn has_next(&self) -> bool {
        self.index < self.list.len()
    }

    /// Returns `true` if a call to [`previous`](Self::previous) would return
    /// an element.
    #[inline]
    pub fn has_previous(&self) -> bool {
        self.index > 0
    }

    /// Return the element after the cursor and move the cursor past it, or
    /// return [`Error::EndOfSequence`] at the end of the list.
    ///
    /// # Examples
    ///
    /// ```
    /// use stout_list::{Error, StoutList};
    /// use std::iter::FromIterator;
    ///
    /// let mut list = StoutList::from_iter([1]);
    /// let mut cursor = list.cursor_start_mut();
    /// assert_eq!(cursor.next(), Ok(&1));
    /// assert_eq!(cursor.next(), Err(Error::EndOfSequence));
    /// ```
    pub fn next(&mut self) -> Result<&T> {
        if !self.has_next() {
            return Err(Error::EndOfSequence);
        }
        self.sync();
        self.index += 1;
        self.last_move = LastMove::Next;
        Ok(&self.snapshot[self.index - 1])
    }

    /// Move the cursor back over the element before it and return that
    /// element, or return [`Error::EndOfSequence`] at the start of the list.
    ///
    /// # Examples
    ///
    /// ```
    /// use stout_list::{Error, StoutList};
    /// use std::iter::FromIterator;
    ///
    /// let mut list = StoutList::from_iter([1, 2]);
    /// let mut cursor = list.cursor_mut(2).unwrap();
    /// assert_eq!(cursor.previous(), Ok(&2));
    /// assert_eq!(cursor.previous(), Ok(&1));
    /// assert_eq!(cursor.previous(), Err(Error::EndOfSequence));
    /// ```
    pub fn previous(&mut self) -> Result<&T> {
        if !self.has_previous() {
            return Err(Error::EndOfSequence);
        }
        self.sync();
        self.index -= 1;
        self.last_move = LastMove::Previous;
        Ok(&self.snapshot[self.index])
    }

    /// Remove the element returned by the last `next` or `previous` and
    /// return it.
    ///
    /// After `next` the cursor steps back over the removed slot; after
    /// `previous` it stays put. Either way the element after the cursor is
    /// the one that followed the removed element.
    ///
    /// Returns [`Error::InvalidCursorState`] if there was no such call since
    /// the last `remove` or `insert`.
    pub fn remove(&mut self) -> Result<T> {
        let pos = self.last_returned()?;
        let item = self.list.remove(pos)?;
        self.index = pos;
        self.last_move = LastMove::None;
        Ok(item)
    }

    /// Insert `item` before the cursor. The cursor ends up after the new
    /// element, so a following `next` is unaffected.
    ///
    /// # Examples
    ///
    /// ```
    /// use stout_list::StoutList;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = StoutList::from_iter([1, 3]);
    /// let mut cursor = list.cursor_mut(1).unwrap();
    /// cursor.insert(2).unwrap();
    /// assert_eq!(cursor.index(), 2);
    /// assert_eq!(cursor.next(), Ok(&3));
    /// assert_eq!(list.len(), 3);
    /// ```
    pub fn insert(&mut self, item: T) -> Result<()> {
        self.list.insert(self.index, item)?;
        self.index += 1;
        self.last_move = LastMove::None;
        Ok(())
    }

    /// Overwrite the element returned by the last `next` or `previous`.
    ///
    /// This is not a structural change: the node layout and the list's
    /// generation stay as they are.
    ///
    /// Returns [`Error::InvalidCursorState`] if there was no such call since
    /// the last `remove`, `insert` or `set`.
    pub fn set(&mut self, item: T) -> Result<()> {
        let pos = self.last_returned()?;
        self.sync();
        let len = self.list.len();
        let live = self
            .list
            .get_mut(pos)
            .ok_or(Error::IndexOutOfRange { index: pos, len })?;
        *live = item.clone();
        self.snapshot[pos] = item;
        self.last_move = LastMove::None;
        Ok(())
    }

    /// Temporarily borrow the list the cursor is editing.
    ///
    /// # Examples
    ///
    /// ```
    /// use stout_list::StoutList;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = StoutList::from_iter([1, 2, 3]);
    /// let mut cursor = list.cursor_start_mut();
    /// cursor.insert(0).unwrap();
    /// assert_eq!(cursor.view(), &StoutList::from_iter(0..4));
    /// ```
    pub fn view(&self) -> &StoutList<T> {
        self.list
    }
}

impl<'a, T: Clone + Display + 'a> ListCursor<'a, T> {
    /// Render the node layout of the list, marking the cursor. See
    /// [`StoutList::dump`].
    ///
    /// # Examples
    ///
    /// ```
    /// use stout_list::StoutList;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = StoutList::from_iter(1..=5);
    /// let mut cursor = list.cursor_start_mut();
    /// assert_eq!(cursor.dump(), "[(| 1, 2, 3, 4), (5, -, -, -)]");
    /// cursor.next().unwrap();
    /// assert_eq!(cursor.dump(), "[(1, | 2, 3, 4), (5, -, -, -)]");
    /// ```
    pub fn dump(&self) -> String {
        self.list.dump_with_cursor(Some(self.index))
    }
}

impl<'a, T: Clone + fmt::Debug + 'a> fmt::Debug for ListCursor<'a, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ListCursor")
            .field(&self.index)
            .field(&self.list)
            .finish()
    }
}
