use std::error::Error as StdError;
use thiserror::Error;

use crate::geometry::{ItemId, Parent};

pub type Result<T> = std::result::Result<T, ArrangeError>;

#[derive(Debug, Error)]
pub enum ArrangeError {
    #[error("Invalid direction: {0}. Must be 'left-to-right' or 'top-to-bottom'")]
    InvalidDirection(String),

    /// The sink refused a move. Items moved before the failure stay moved.
    #[error("Failed to move {item} to the end of {parent}")]
    MutationFailure {
        item: ItemId,
        parent: Parent,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    #[error("Invalid item {id}: {message}")]
    InvalidItem { id: ItemId, message: String },

    #[error("Duplicate item id: {0}")]
    DuplicateId(ItemId),
}
