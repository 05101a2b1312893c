//! Cross-page selection state for a remote paged artwork listing.
//!
//! The [`SelectionManager`] owns the global set of selected artwork ids and
//! a snapshot of the currently loaded page. Paging never mutates the
//! selection set; only the two selection operations do. The bounded
//! "select the first N" bulk operation fetches id-only pages sequentially
//! through the [`PageFetcher`] seam and commits all-or-nothing.

pub mod config_file;
pub mod fetcher;
pub mod selection;

pub use fetcher::PageFetcher;
pub use selection::{SelectProgress, SelectionManager, TableEvent};

/// Rows per page the presentation layer uses unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: u32 = 12;
