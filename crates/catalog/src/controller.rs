//! Event dispatch for a single catalog page.
//!
//! [`CatalogController`] owns every piece of mutable browsing state and is the
//! only thing that mutates it. Front ends translate their input (clicks,
//! scroll position, command-line flags) into [`CatalogEvent`]s and receive
//! rendering instructions through their [`ResultView`] implementation.

use std::collections::BTreeSet;

use tracing::{debug, warn};

use crate::error::LoadError;
use crate::filter::{FacetIndex, apply_filters};
use crate::render::{RenderCursor, SKELETON_CARDS};
use crate::types::{FilterState, VehicleRecord};

/// Receives rendering instructions from a [`CatalogController`].
pub trait ResultView {
	/// The catalog is loading; show `placeholders` skeleton cards.
	fn show_loading(&mut self, placeholders: usize);

	/// The catalog could not be loaded.
	fn show_load_error(&mut self, message: &str);

	/// Remove every rendered card before a fresh render.
	fn clear(&mut self);

	/// Append a batch of result cards.
	fn append(&mut self, batch: &[VehicleRecord]);

	/// The filters matched nothing; offer to clear them.
	fn show_empty(&mut self);

	fn set_result_count(&mut self, count: usize);

	/// Whether another scroll can still append results.
	fn set_more_available(&mut self, more: bool);

	/// The model facet changed. `None` means no brand is selected.
	fn show_model_choices(&mut self, _models: Option<&BTreeSet<String>>) {}
}

/// User input the controller reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogEvent {
	ToggleBrand(String),
	ToggleModel(String),
	ToggleYear(String),
	SetQuery(String),
	ResetFilters,
	ScrollNearBottom,
}

/// Load state of the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CatalogPhase {
	#[default]
	Idle,
	Loading,
	Ready,
	Failed(String),
}

/// Owns the catalog, the filter state and the render cursor for one view.
pub struct CatalogController<V> {
	view: V,
	phase: CatalogPhase,
	all: Vec<VehicleRecord>,
	facets: FacetIndex,
	filters: FilterState,
	filtered: Vec<VehicleRecord>,
	cursor: RenderCursor,
}

impl<V: ResultView> CatalogController<V> {
	#[must_use]
	pub fn new(view: V, batch_size: usize) -> Self {
		Self {
			view,
			phase: CatalogPhase::Idle,
			all: Vec::new(),
			facets: FacetIndex::default(),
			filters: FilterState::new(),
			filtered: Vec::new(),
			cursor: RenderCursor::new(batch_size),
		}
	}

	/// Show the loading placeholder. Call before fetching the catalog.
	pub fn begin_loading(&mut self) {
		self.phase = CatalogPhase::Loading;
		self.view.show_loading(SKELETON_CARDS);
	}

	/// Install the loaded catalog and render the first batch, or show the
	/// failure. A failed load is final for this controller.
	pub fn finish_loading(&mut self, result: Result<Vec<VehicleRecord>, LoadError>) {
		match result {
			Ok(records) => {
				debug!(records = records.len(), "catalog loaded");
				self.facets = FacetIndex::build(&records);
				self.all = records;
				self.phase = CatalogPhase::Ready;
				let candidates = self
					.filters
					.brand()
					.map(|brand| self.facets.models_for(brand).clone())
					.unwrap_or_default();
				self.filters.retain_models(&candidates);
				self.publish_model_choices();
				self.refresh();
			}
			Err(err) => {
				warn!(error = %err, "catalog failed to load");
				let message = err.to_string();
				self.view.show_load_error(&message);
				self.phase = CatalogPhase::Failed(message);
			}
		}
	}

	/// Apply `event` and return the number of cards appended as a result.
	pub fn dispatch(&mut self, event: CatalogEvent) -> usize {
		match event {
			CatalogEvent::ToggleBrand(brand) => {
				if self.is_ready() && !self.facets.has_brand(&brand) {
					debug!(%brand, "ignoring unknown brand");
					return 0;
				}
				let candidates = self.facets.models_for(&brand);
				self.filters.toggle_brand(&brand, candidates);
				self.publish_model_choices();
				self.refresh()
			}
			CatalogEvent::ToggleModel(model) => {
				if !self.is_ready() {
					self.filters.toggle_model(&model);
					return 0;
				}
				let allowed = self
					.filters
					.brand()
					.is_some_and(|brand| self.facets.models_for(brand).contains(&model));
				if !allowed {
					debug!(%model, "ignoring model outside the selected brand");
					return 0;
				}
				self.filters.toggle_model(&model);
				self.refresh()
			}
			CatalogEvent::ToggleYear(year) => {
				self.filters.toggle_year(&year);
				self.refresh()
			}
			CatalogEvent::SetQuery(query) => {
				if self.filters.query() == query {
					return 0;
				}
				self.filters.set_query(query);
				self.refresh()
			}
			CatalogEvent::ResetFilters => {
				self.filters.clear();
				self.publish_model_choices();
				self.refresh()
			}
			CatalogEvent::ScrollNearBottom => self.render_next(),
		}
	}

	/// Recompute the filtered list and render its first batch.
	fn refresh(&mut self) -> usize {
		if !self.is_ready() {
			return 0;
		}
		self.filtered = apply_filters(&self.all, &self.filters);
		self.cursor.reset();
		self.view.clear();
		self.view.set_result_count(self.filtered.len());
		if self.filtered.is_empty() {
			self.view.show_empty();
			self.view.set_more_available(false);
			return 0;
		}
		self.render_next()
	}

	fn render_next(&mut self) -> usize {
		if !self.is_ready() || !self.cursor.has_more(self.filtered.len()) {
			return 0;
		}
		let batch = self.cursor.next_batch(&self.filtered);
		self.view.append(batch);
		self.view
			.set_more_available(self.cursor.has_more(self.filtered.len()));
		batch.len()
	}

	fn publish_model_choices(&mut self) {
		let models = self.filters.brand().map(|brand| self.facets.models_for(brand));
		self.view.show_model_choices(models);
	}

	#[must_use]
	pub fn is_ready(&self) -> bool {
		self.phase == CatalogPhase::Ready
	}

	#[must_use]
	pub fn phase(&self) -> &CatalogPhase {
		&self.phase
	}

	#[must_use]
	pub fn facets(&self) -> &FacetIndex {
		&self.facets
	}

	#[must_use]
	pub fn filters(&self) -> &FilterState {
		&self.filters
	}

	#[must_use]
	pub fn filtered(&self) -> &[VehicleRecord] {
		&self.filtered
	}

	/// Number of filtered results rendered so far.
	#[must_use]
	pub fn rendered(&self) -> usize {
		self.cursor.index()
	}

	#[must_use]
	pub fn has_more(&self) -> bool {
		self.cursor.has_more(self.filtered.len())
	}

	#[must_use]
	pub fn view(&self) -> &V {
		&self.view
	}
}
