use crate::geometry::{Item, ItemId, Parent};
use std::error::Error as StdError;

/// Read access to the page being arranged
pub trait ItemSource {
    /// Snapshot of the top-level items, each container carrying its children.
    ///
    /// Every collection is listed front-most first (layer-list order).
    fn root_items(&self) -> Vec<Item>;
}

/// The single mutation primitive the arranger relies on.
///
/// Collections are paint stacks: the end of a parent's children is the front-most
/// position, which [`ItemSource`] lists first. A host that stores children back to
/// front implements `move_to_end` as an append and reads them back reversed.
pub trait MutationSink {
    type Error: StdError + Send + Sync + 'static;

    /// Moves `item` to the end of `parent`'s paint stack, making it the front-most
    /// child and the first one listed. Geometry is left untouched.
    fn move_to_end(&mut self, item: &ItemId, parent: &Parent) -> Result<(), Self::Error>;
}
