//! Batch ("infinite scroll") and numbered pagination over filtered results.

mod cursor;
mod pages;

pub use cursor::RenderCursor;
pub use pages::{PageItem, page_count, page_slice, page_window};

/// Cards appended per render pass unless configured otherwise.
pub const DEFAULT_BATCH_SIZE: usize = 12;

/// Placeholder cards shown while the catalog loads.
pub const SKELETON_CARDS: usize = 4;
