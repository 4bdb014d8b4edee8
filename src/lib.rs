//! This crate provides an unrolled doubly-linked list, [`StoutList`], whose
//! nodes each hold a small block of elements.
//!
//! Every node except possibly the last one is kept at least half full. Nodes
//! are split when an insertion overflows them and are refilled from, or merged
//! with, their successor when a removal leaves them less than half full. Walking
//! to a position visits nodes, not elements, and edits shift at most one
//! node's worth of elements.
//!
//! Here is a quick example showing how the list works.
//!
//! ```
//! use stout_list::StoutList;
//! use std::iter::FromIterator;
//!
//! let mut list = StoutList::from_iter(1..=5);
//! assert_eq!(list.dump(), "[(1, 2, 3, 4), (5, -, -, -)]");
//!
//! list.insert(2, 99).unwrap(); // the first node is full and gets split
//! assert_eq!(list.dump(), "[(1, 2, 99, -), (3, 4, -, -), (5, -, -, -)]");
//!
//! assert_eq!(list.remove(4), Ok(4));
//! assert_eq!(list.dump(), "[(1, 2, 99, -), (3, 5, -, -)]");
//!
//! list.sort_reverse();
//! assert_eq!(list.dump(), "[(99, 5, 3, 2), (1, -, -, -)]");
//! ```
//!
//! # Memory Layout
//!
//! The nodes live in an arena owned by the list and link to each other by
//! index:
//! ```text
//!    arena[0]                arena[2]                arena[3]               arena[1]
//!  ╔═══════════╗          ┌───────────┐          ┌───────────┐          ╔═══════════╗
//!  ║   next    ║ ───────→ │   next    │ ───────→ │   next    │ ───────→ ║           ║
//!  ╟───────────╢          ├───────────┤          ├───────────┤          ╟───────────╢
//!  ║           ║ ←─────── │   prev    │ ←─────── │   prev    │ ←─────── ║   prev    ║
//!  ╚═══════════╝          ├───────────┤          ├───────────┤          ╚═══════════╝
//!      head               │ 1 2 99 -  │          │ 3 5 - -   │              tail
//!                         └───────────┘          └───────────┘
//! ```
//! - `head` and `tail` are sentinels at the fixed indices 0 and 1. They hold no
//!   elements and are never removed, so an empty list is `head` linked to `tail`.
//! - Each real node holds up to `node_size` elements contiguously from its first
//!   slot. The node size is fixed when the list is created, must be a positive
//!   even number, and defaults to [`DEFAULT_NODE_SIZE`].
//! - Arena slots of removed nodes are remembered and reused by later splits.
//!
//! # Cursors
//!
//! [`ListCursor`] walks the list in both directions and edits it on the way:
//! [`insert`] before the cursor, and [`remove`] or [`set`] the element returned
//! by the last [`next`] or [`previous`].
//!
//! ```
//! use stout_list::{Error, StoutList};
//! use std::iter::FromIterator;
//!
//! let mut list = StoutList::from_iter(1..=3);
//! let mut cursor = list.cursor_start_mut();
//!
//! assert_eq!(cursor.next(), Ok(&1));
//! cursor.set(10).unwrap();
//! assert_eq!(cursor.next(), Ok(&2));
//! assert_eq!(cursor.remove(), Ok(2));
//! assert_eq!(cursor.remove(), Err(Error::InvalidCursorState));
//! assert_eq!(cursor.dump(), "[(10, | 3, -, -)]");
//!
//! assert_eq!(Vec::from_iter(list), vec![10, 3]);
//! ```
//!
//! [`ListCursor`]: crate::list::cursor::ListCursor
//! [`insert`]: crate::list::cursor::ListCursor::insert
//! [`remove`]: crate::list::cursor::ListCursor::remove
//! [`set`]: crate::list::cursor::ListCursor::set
//! [`next`]: crate::list::cursor::ListCursor::next
//! [`previous`]: crate::list::cursor::ListCursor::previous

#[doc(inline)]
pub use error::{Error, Result};
#[doc(inline)]
pub use list::cursor::ListCursor;
#[doc(inline)]
pub use list::iterator::{Blocks, IntoIter, Iter};
#[doc(inline)]
pub use list::{Location, NodeId, StoutList, DEFAULT_NODE_SIZE};

pub mod error;
pub mod list;
