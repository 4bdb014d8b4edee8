use crate::list::StoutList;
use std::fmt::Display;

/// Placeholder for an unoccupied slot.
const EMPTY_SLOT: &str = "-";

impl<T: Display> StoutList<T> {
    /// Render the node layout of the list, for debugging and structural tests.
    ///
    /// Each node is a parenthesised group of `node_size` slots, empty slots
    /// shown as `-`. The format is not meant to be parsed.
    ///
    /// # Examples
    ///
    /// ```
    /// use stout_list::StoutList;
    /// use std::iter::FromIterator;
    ///
    /// let list = StoutList::from_iter(['A', 'B', 'C', 'D', 'E']);
    /// assert_eq!(list.dump(), "[(A, B, C, D), (E, -, -, -)]");
    /// assert_eq!(StoutList::<char>::new().dump(), "[]");
    /// ```
    pub fn dump(&self) -> String {
        self.dump_with_cursor(None)
    }

    /// Like [`dump`](Self::dump), with `| ` in front of the element at
    /// position `cursor`, or ` |` after the last element when `cursor` is
    /// the length of the list.
    pub(crate) fn dump_with_cursor(&self, cursor: Option<usize>) -> String {
        let mut out = String::from("[");
        let mut seen = 0;
        for (i, block) in self.blocks().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            out.push('(');
            for slot in 0..self.node_size() {
                if slot > 0 {
                    out.push_str(", ");
                }
                let item = match block.get(slot) {
                    Some(item) => item,
                    None => {
                        out.push_str(EMPTY_SLOT);
                        continue;
                    }
                };
                if cursor == Some(seen) {
                    out.push_str("| ");
                }
                out.push_str(&item.to_string());
                seen += 1;
                if seen == self.len() && cursor == Some(seen) {
                    out.push_str(" |");
                }
            }
            out.push(')');
        }
        out.push(']');
        out
    }
}
