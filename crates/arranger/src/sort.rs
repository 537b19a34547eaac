use std::cmp::Ordering;

/// Stable insertion sort.
///
/// Each item moves left only past neighbours that compare `Greater` than it. The
/// output therefore never has an adjacent pair ordered `Greater`, and input with no
/// such pair comes back unchanged, so sorting twice gives the same order even when
/// `compare` is not transitive. Never panics, unlike `slice::sort_by` on a
/// comparator that is not a total order.
pub fn stable_sort_by<T, F>(mut items: Vec<T>, mut compare: F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    for i in 1..items.len() {
        let mut j = i;
        while j > 0 && compare(&items[j - 1], &items[j]) == Ordering::Greater {
            items.swap(j - 1, j);
            j -= 1;
        }
    }
    items
}
