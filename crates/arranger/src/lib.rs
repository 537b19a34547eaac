pub mod arrange;
pub mod compare;
pub mod constants;
pub mod direction;
pub mod error;
pub mod geometry;
pub mod host;
pub mod sort;

pub use arrange::{
    ArrangePlan, ArrangeSummary, PlannedOrder, arrange, arrange_host, commit, plan, run_command,
    sort_items,
};
pub use compare::compare;
pub use constants::{COLUMN_TOLERANCE, LEFT_TO_RIGHT, TOP_TO_BOTTOM};
pub use direction::{Direction, select_direction};
pub use error::{ArrangeError, Result};
pub use geometry::{Document, DocumentError, Item, ItemId, ItemKind, Parent, Rect};
pub use host::{ItemSource, MutationSink};
