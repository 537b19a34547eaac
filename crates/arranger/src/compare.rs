use crate::constants::COLUMN_TOLERANCE;
use crate::direction::Direction;
use crate::geometry::Rect;
use std::cmp::Ordering;

/// Orders `a` against `b` for the given direction.
///
/// Rows are grouped by vertical overlap, columns by a fixed x tolerance. Neither
/// rule is transitive, so sort with [`crate::sort::stable_sort_by`].
pub fn compare(direction: Direction, a: &Rect, b: &Rect) -> Ordering {
    match direction {
        Direction::LeftToRight => left_to_right(a, b),
        Direction::TopToBottom => top_to_bottom(a, b),
    }
}

/// True when the vertical spans overlap. Touching edges do not overlap.
#[inline]
pub fn same_row(a: &Rect, b: &Rect) -> bool {
    a.bottom() > b.y && b.bottom() > a.y
}

#[inline]
pub fn same_column(a: &Rect, b: &Rect) -> bool {
    (a.x - b.x).abs() <= COLUMN_TOLERANCE
}

/// Row-major order
pub fn left_to_right(a: &Rect, b: &Rect) -> Ordering {
    if same_row(a, b) {
        axis_cmp(a.x, b.x)
    } else if a.bottom() <= b.y {
        Ordering::Less
    } else if b.bottom() <= a.y {
        Ordering::Greater
    } else {
        // only reachable with NaN geometry
        Ordering::Equal
    }
}

/// Column-major order
pub fn top_to_bottom(a: &Rect, b: &Rect) -> Ordering {
    if same_column(a, b) {
        axis_cmp(a.y, b.y)
    } else {
        axis_cmp(a.x, b.x)
    }
}

#[inline]
fn axis_cmp(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}
