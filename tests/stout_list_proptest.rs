//! Property-based tests for `StoutList`, checked against a `Vec` model.

use proptest::prelude::*;
use std::iter::FromIterator;
use stout_list::{Error, StoutList};

// =============================================================================
// Test helpers
// =============================================================================

/// A random edit, with positions as fractions of the current length.
#[derive(Clone, Debug)]
enum ListOp {
    Insert { pos_pct: f64, item: i32 },
    Remove { pos_pct: f64 },
    PushBack(i32),
    PushFront(i32),
    PopFront,
    PopBack,
    Sort,
    SortReverse,
}

fn arbitrary_list_op() -> impl Strategy<Value = ListOp> {
    prop_oneof![
        4 => (0.0..=1.0f64, -50..50i32).prop_map(|(pos_pct, item)| ListOp::Insert { pos_pct, item }),
        3 => (0.0..=1.0f64).prop_map(|pos_pct| ListOp::Remove { pos_pct }),
        2 => (-50..50i32).prop_map(ListOp::PushBack),
        1 => (-50..50i32).prop_map(ListOp::PushFront),
        1 => Just(ListOp::PopFront),
        1 => Just(ListOp::PopBack),
        1 => Just(ListOp::Sort),
        1 => Just(ListOp::SortReverse),
    ]
}

fn node_size() -> impl Strategy<Value = usize> {
    prop_oneof![Just(2usize), Just(4usize), Just(6usize)]
}

fn scaled(pos_pct: f64, len: usize) -> usize {
    ((pos_pct * len as f64) as usize).min(len)
}

fn apply_op(list: &mut StoutList<i32>, model: &mut Vec<i32>, op: &ListOp) {
    match *op {
        ListOp::Insert { pos_pct, item } => {
            let pos = scaled(pos_pct, model.len());
            list.insert(pos, item).unwrap();
            model.insert(pos, item);
        }
        ListOp::Remove { pos_pct } => {
            if model.is_empty() {
                assert!(list.remove(0).is_err());
                return;
            }
            let pos = scaled(pos_pct, model.len() - 1);
            assert_eq!(list.remove(pos), Ok(model.remove(pos)));
        }
        ListOp::PushBack(item) => {
            list.push_back(item);
            model.push(item);
        }
        ListOp::PushFront(item) => {
            list.push_front(item);
            model.insert(0, item);
        }
        ListOp::PopFront => {
            let expected = if model.is_empty() { None } else { Some(model.remove(0)) };
            assert_eq!(list.pop_front(), expected);
        }
        ListOp::PopBack => assert_eq!(list.pop_back(), model.pop()),
        ListOp::Sort => {
            list.sort();
            model.sort();
        }
        ListOp::SortReverse => {
            list.sort_reverse();
            model.sort_by(|a, b| b.cmp(a));
        }
    }
}

/// Checks the node occupancy rules through the public block view.
fn check_layout<T>(list: &StoutList<T>) {
    let blocks: Vec<&[T]> = list.blocks().collect();
    let half = list.node_size() / 2;
    assert_eq!(blocks.len(), list.node_count());
    assert_eq!(blocks.iter().map(|b| b.len()).sum::<usize>(), list.len());
    for (i, block) in blocks.iter().enumerate() {
        assert!(!block.is_empty(), "node {} is empty", i);
        assert!(block.len() <= list.node_size(), "node {} overflows", i);
        if i + 1 < blocks.len() {
            assert!(block.len() >= half, "node {} is less than half full", i);
        }
    }
}

/// Checks that every node but the last one is full.
fn check_packed<T>(list: &StoutList<T>) {
    let blocks: Vec<&[T]> = list.blocks().collect();
    if let Some((_, init)) = blocks.split_last() {
        assert!(init.iter().all(|b| b.len() == list.node_size()));
    }
}

// =============================================================================
// Edit sequences
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Any edit sequence keeps the contents equal to the model and the nodes
    /// within their occupancy bounds.
    #[test]
    fn prop_edits_match_model(
        node_size in node_size(),
        ops in prop::collection::vec(arbitrary_list_op(), 0..120),
    ) {
        let mut list = StoutList::with_node_size(node_size).unwrap();
        let mut model = Vec::new();
        for op in &ops {
            apply_op(&mut list, &mut model, op);
            check_layout(&list);
            prop_assert_eq!(list.len(), model.len());
        }
        prop_assert_eq!(Vec::from_iter(list.iter().copied()), model.clone());
        prop_assert_eq!(Vec::from_iter(list.iter().rev().copied()), Vec::from_iter(model.iter().rev().copied()));
    }

    /// Positional reads agree with the model, and out-of-range positions fail.
    #[test]
    fn prop_get_and_find(
        node_size in node_size(),
        items in prop::collection::vec(-100..100i32, 0..60),
        inserts in prop::collection::vec((0.0..=1.0f64, -100..100i32), 0..30),
    ) {
        let mut list = StoutList::with_node_size(node_size).unwrap();
        let mut model = items.clone();
        list.extend(items.iter().copied());
        for (pos_pct, item) in inserts {
            let pos = scaled(pos_pct, model.len());
            list.insert(pos, item).unwrap();
            model.insert(pos, item);
        }

        for (pos, item) in model.iter().enumerate() {
            prop_assert_eq!(list.get(pos), Some(item));
            let location = list.find(pos).unwrap();
            prop_assert!(location.offset < node_size);
            prop_assert_eq!(list.find(pos), Some(location));
        }
        prop_assert_eq!(list.get(model.len()), None);
        prop_assert_eq!(list.find(model.len()), None);
        prop_assert_eq!(
            list.insert(model.len() + 1, 0),
            Err(Error::IndexOutOfRange { index: model.len() + 1, len: model.len() })
        );
    }

    /// Sorting agrees with the standard library and packs the nodes.
    #[test]
    fn prop_sort_packs_nodes(
        node_size in node_size(),
        ops in prop::collection::vec(arbitrary_list_op(), 0..80),
        reverse in any::<bool>(),
    ) {
        let mut list = StoutList::with_node_size(node_size).unwrap();
        let mut model = Vec::new();
        for op in &ops {
            apply_op(&mut list, &mut model, op);
        }

        if reverse {
            list.sort_reverse();
            model.sort_by(|a, b| b.cmp(a));
        } else {
            list.sort();
            model.sort();
        }
        check_layout(&list);
        check_packed(&list);
        prop_assert_eq!(Vec::from_iter(list), model);
    }

    /// Draining from either end releases every node.
    #[test]
    fn prop_drain_releases_nodes(
        node_size in node_size(),
        items in prop::collection::vec(any::<i32>(), 0..80),
        from_front in any::<bool>(),
    ) {
        let mut list = StoutList::with_node_size(node_size).unwrap();
        list.extend(items.iter().copied());
        check_packed(&list);

        let mut drained = Vec::new();
        loop {
            let item = if from_front { list.pop_front() } else { list.pop_back() };
            match item {
                Some(item) => drained.push(item),
                None => break,
            }
            check_layout(&list);
        }
        if !from_front {
            drained.reverse();
        }
        prop_assert_eq!(drained, items);
        prop_assert!(list.is_empty());
        prop_assert_eq!(list.node_count(), 0);
        prop_assert_eq!(list.dump(), "[]");
    }
}

// =============================================================================
// Cursor walks
// =============================================================================

/// A random cursor step.
#[derive(Clone, Debug)]
enum CursorOp {
    Next,
    Previous,
    Insert(i32),
    Remove,
    Set(i32),
}

fn arbitrary_cursor_op() -> impl Strategy<Value = CursorOp> {
    prop_oneof![
        3 => Just(CursorOp::Next),
        2 => Just(CursorOp::Previous),
        2 => (-50..50i32).prop_map(CursorOp::Insert),
        2 => Just(CursorOp::Remove),
        1 => (-50..50i32).prop_map(CursorOp::Set),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// A cursor walking and editing the list behaves like a cursor over a
    /// `Vec`, and leaves the nodes within their occupancy bounds.
    #[test]
    fn prop_cursor_matches_model(
        node_size in node_size(),
        items in prop::collection::vec(-50..50i32, 0..40),
        start_pct in 0.0..=1.0f64,
        ops in prop::collection::vec(arbitrary_cursor_op(), 0..80),
    ) {
        let mut list = StoutList::with_node_size(node_size).unwrap();
        list.extend(items.iter().copied());
        let mut model = items;
        let mut index = scaled(start_pct, model.len());
        // position of the element returned by the last `next`/`previous`
        let mut last: Option<usize> = None;

        let mut cursor = list.cursor_mut(index).unwrap();
        for op in &ops {
            match *op {
                CursorOp::Next => {
                    if index < model.len() {
                        prop_assert_eq!(cursor.next(), Ok(&model[index]));
                        last = Some(index);
                        index += 1;
                    } else {
                        prop_assert_eq!(cursor.next(), Err(Error::EndOfSequence));
                    }
                }
                CursorOp::Previous => {
                    if index > 0 {
                        index -= 1;
                        prop_assert_eq!(cursor.previous(), Ok(&model[index]));
                        last = Some(index);
                    } else {
                        prop_assert_eq!(cursor.previous(), Err(Error::EndOfSequence));
                    }
                }
                CursorOp::Insert(item) => {
                    prop_assert_eq!(cursor.insert(item), Ok(()));
                    model.insert(index, item);
                    index += 1;
                    last = None;
                }
                CursorOp::Remove => match last.take() {
                    Some(pos) => {
                        prop_assert_eq!(cursor.remove(), Ok(model.remove(pos)));
                        index = pos;
                    }
                    None => prop_assert_eq!(cursor.remove(), Err(Error::InvalidCursorState)),
                },
                CursorOp::Set(item) => match last.take() {
                    Some(pos) => {
                        prop_assert_eq!(cursor.set(item), Ok(()));
                        model[pos] = item;
                    }
                    None => prop_assert_eq!(cursor.set(item), Err(Error::InvalidCursorState)),
                },
            }
            prop_assert_eq!(cursor.index(), index);
            prop_assert_eq!(cursor.has_next(), index < model.len());
            prop_assert_eq!(cursor.has_previous(), index > 0);
            check_layout(cursor.view());
        }
        prop_assert_eq!(Vec::from_iter(list.iter().copied()), model);
    }
}

// =============================================================================
// Worked layouts
// =============================================================================

#[test]
fn appends_fill_nodes_in_order() {
    let mut list = StoutList::new();
    for i in 1..=5 {
        list.push_back(i);
    }
    assert_eq!(list.node_count(), 2);
    assert_eq!(list.dump(), "[(1, 2, 3, 4), (5, -, -, -)]");
}

#[test]
fn insert_into_full_node_splits_it() {
    let mut list = StoutList::from_iter(1..=5);
    list.insert(2, 99).unwrap();
    assert_eq!(list.len(), 6);
    assert_eq!(list.dump(), "[(1, 2, 99, -), (3, 4, -, -), (5, -, -, -)]");
}

#[test]
fn remove_from_half_full_node_borrows() {
    let mut list = StoutList::from_iter(1..=5);
    list.insert(2, 99).unwrap();
    list.push_back(6);
    list.push_back(7);
    // nodes: (1, 2, 99), (3, 4), (5, 6, 7)
    assert_eq!(list.remove(3), Ok(3));
    assert_eq!(list.dump(), "[(1, 2, 99, -), (4, 5, -, -), (6, 7, -, -)]");
    assert_eq!(list.node_count(), 3);
}

#[test]
fn remove_sole_element_of_last_node() {
    let mut list = StoutList::from_iter(1..=5);
    let before = list.node_count();
    assert_eq!(list.remove(4), Ok(5));
    assert_eq!(list.len(), 4);
    assert_eq!(list.node_count(), before - 1);
    assert_eq!(list.dump(), "[(1, 2, 3, 4)]");
}

#[test]
fn odd_node_size_is_rejected() {
    assert_eq!(
        StoutList::<i32>::with_node_size(3).err(),
        Some(Error::InvalidNodeSize(3))
    );
}
