/// Command identifiers understood by the direction selector
pub const LEFT_TO_RIGHT: &str = "left-to-right";
pub const TOP_TO_BOTTOM: &str = "top-to-bottom";

/// Two items whose x differs by at most this much share a column.
/// Absorbs rounding noise; this is not an overlap test.
pub const COLUMN_TOLERANCE: f64 = 1.0;
