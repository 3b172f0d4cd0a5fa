//! Catalog engine behind the trimshop storefront.
//!
//! Records are ingested once per load from a delimited table or an embedded
//! JSON array, normalized into [`VehicleRecord`]s and then browsed through a
//! [`CatalogController`], which owns the filter state and feeds result
//! batches to a [`ResultView`].

pub mod controller;
pub mod error;
pub mod filter;
pub mod ingest;
pub mod render;
pub mod search;
pub mod types;

pub use controller::{CatalogController, CatalogEvent, CatalogPhase, ResultView};
pub use error::LoadError;
pub use filter::{FacetIndex, apply_filters, dedupe_by_listing};
pub use ingest::{
	ShuffleOrder, TableDialect, ingest_delimited, ingest_embedded, ingest_quoted, ingest_table,
	parse_embedded,
};
pub use render::{
	DEFAULT_BATCH_SIZE, PageItem, RenderCursor, SKELETON_CARDS, page_count, page_slice, page_window,
};
pub use search::{QuickResults, QuickSearch, Shortcut, ShortcutKind, default_shortcuts};
pub use types::{
	DEFAULT_YEAR, Facet, FacetRow, FilterState, RawVehicle, Scalar, VehicleRecord,
};
