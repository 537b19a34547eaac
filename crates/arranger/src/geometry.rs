pub mod document;
pub mod types;

pub use document::{Document, DocumentError};
pub use types::{Item, ItemId, ItemKind, Parent, Rect};
