//! Sorting of the flat buffer a `StoutList` is drained into before it is
//! rebuilt. Both sorts are stable and in place; neither is fast, and neither
//! needs to be, since rebuilding the nodes dominates for the node sizes in use.

/// Sort `v` so that no element is `less` than the one before it.
pub(crate) fn insertion_sort<T, F>(v: &mut [T], mut less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    for to_sort in 1..v.len() {
        // Sink `v[to_sort]` into the sorted prefix `v[..to_sort]`.
        let mut i = to_sort;
        while i > 0 && less(&v[i], &v[i - 1]) {
            v.swap(i, i - 1);
            i -= 1;
        }
    }
}

/// Sort `v` so that no element is `less` than the one before it, by
/// repeatedly bubbling the greatest unsorted element to the back.
pub(crate) fn bubble_sort<T, F>(v: &mut [T], mut less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    let mut unsorted = v.len();
    while unsorted > 1 {
        let mut last_swap = 0;
        for i in 1..unsorted {
            if less(&v[i], &v[i - 1]) {
                v.swap(i, i - 1);
                last_swap = i;
            }
        }
        // Everything from the last swap on is in its final place.
        unsorted = last_swap;
    }
}
