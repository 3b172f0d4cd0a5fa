use std::collections::BTreeSet;

use super::{Facet, VehicleRecord};

/// Current facet selection plus the free-text query.
///
/// The toggle methods encode the selection policy: brand and model are
/// single-select, year is multi-select. [`FilterState::insert`] bypasses the
/// policy and simply adds a value to a facet set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
	make: BTreeSet<String>,
	model: BTreeSet<String>,
	year: BTreeSet<String>,
	query: String,
}

impl FilterState {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Values selected for `facet`.
	#[must_use]
	pub fn selected(&self, facet: Facet) -> &BTreeSet<String> {
		match facet {
			Facet::Make => &self.make,
			Facet::Model => &self.model,
			Facet::Year => &self.year,
		}
	}

	fn selected_mut(&mut self, facet: Facet) -> &mut BTreeSet<String> {
		match facet {
			Facet::Make => &mut self.make,
			Facet::Model => &mut self.model,
			Facet::Year => &mut self.year,
		}
	}

	#[must_use]
	pub fn is_selected(&self, facet: Facet, value: &str) -> bool {
		self.selected(facet).contains(value)
	}

	/// The selected brand, if any.
	#[must_use]
	pub fn brand(&self) -> Option<&str> {
		self.make.iter().next().map(String::as_str)
	}

	#[must_use]
	pub fn query(&self) -> &str {
		&self.query
	}

	/// True when nothing constrains the catalog.
	#[must_use]
	pub fn is_unconstrained(&self) -> bool {
		self.make.is_empty()
			&& self.model.is_empty()
			&& self.year.is_empty()
			&& self.query.trim().is_empty()
	}

	/// Add `value` to the `facet` set without applying the selection policy.
	pub fn insert(&mut self, facet: Facet, value: impl Into<String>) {
		self.selected_mut(facet).insert(value.into());
	}

	/// Toggle `brand` as the single selected brand.
	///
	/// `candidates` are the models belonging to `brand`; selected models
	/// outside that list are dropped. Deselecting the brand clears the model
	/// selection. Returns whether the brand is selected afterwards.
	pub fn toggle_brand(&mut self, brand: &str, candidates: &BTreeSet<String>) -> bool {
		if self.make.contains(brand) {
			self.make.clear();
			self.model.clear();
			return false;
		}

		self.make.clear();
		self.make.insert(brand.to_string());
		self.model.retain(|model| candidates.contains(model));
		true
	}

	/// Drop selected models that are not in `candidates`.
	pub fn retain_models(&mut self, candidates: &BTreeSet<String>) {
		self.model.retain(|model| candidates.contains(model));
	}

	/// Toggle `model` as the single selected model. Returns whether it is selected afterwards.
	pub fn toggle_model(&mut self, model: &str) -> bool {
		if self.model.remove(model) {
			return false;
		}
		self.model.clear();
		self.model.insert(model.to_string());
		true
	}

	/// Toggle membership of `year`. Returns whether it is selected afterwards.
	pub fn toggle_year(&mut self, year: &str) -> bool {
		if self.year.remove(year) {
			return false;
		}
		self.year.insert(year.to_string());
		true
	}

	pub fn set_query(&mut self, query: impl Into<String>) {
		self.query = query.into();
	}

	/// Reset every facet and the query.
	pub fn clear(&mut self) {
		self.make.clear();
		self.model.clear();
		self.year.clear();
		self.query.clear();
	}

	/// Whether `record` passes every active constraint.
	#[must_use]
	pub fn matches(&self, record: &VehicleRecord) -> bool {
		let facets_pass = Facet::ALL.iter().all(|&facet| {
			let selected = self.selected(facet);
			selected.is_empty() || selected.contains(facet.value_of(record))
		});
		facets_pass && self.matches_query(record)
	}

	fn matches_query(&self, record: &VehicleRecord) -> bool {
		let needle = self.query.trim().to_lowercase();
		if needle.is_empty() {
			return true;
		}
		record.brand.to_lowercase().contains(&needle)
			|| record.model.to_lowercase().contains(&needle)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn models(values: &[&str]) -> BTreeSet<String> {
		values.iter().map(|value| value.to_string()).collect()
	}

	#[test]
	fn brand_selection_is_single_select() {
		let mut state = FilterState::new();
		assert!(state.toggle_brand("Toyota", &models(&["Corolla"])));
		assert!(state.toggle_brand("Honda", &models(&["Civic"])));
		assert_eq!(state.selected(Facet::Make).len(), 1);
		assert_eq!(state.brand(), Some("Honda"));
	}

	#[test]
	fn switching_brand_drops_models_of_previous_brand() {
		let mut state = FilterState::new();
		state.toggle_brand("Toyota", &models(&["Corolla", "Yaris"]));
		state.toggle_model("Corolla");
		state.toggle_brand("Honda", &models(&["Civic", "Jazz"]));
		assert!(state.selected(Facet::Model).is_empty());
	}

	#[test]
	fn deselecting_brand_clears_models() {
		let mut state = FilterState::new();
		let toyota = models(&["Corolla"]);
		state.toggle_brand("Toyota", &toyota);
		state.toggle_model("Corolla");
		assert!(!state.toggle_brand("Toyota", &toyota));
		assert!(state.selected(Facet::Make).is_empty());
		assert!(state.selected(Facet::Model).is_empty());
	}

	#[test]
	fn years_are_multi_select() {
		let mut state = FilterState::new();
		assert!(state.toggle_year("2019"));
		assert!(state.toggle_year("2020"));
		assert_eq!(state.selected(Facet::Year).len(), 2);
		assert!(!state.toggle_year("2019"));
		assert!(state.is_selected(Facet::Year, "2020"));
	}

	#[test]
	fn model_toggle_replaces_previous_model() {
		let mut state = FilterState::new();
		state.toggle_model("Corolla");
		state.toggle_model("Yaris");
		assert_eq!(
			state.selected(Facet::Model).iter().collect::<Vec<_>>(),
			vec!["Yaris"]
		);
		assert!(!state.toggle_model("Yaris"));
		assert!(state.selected(Facet::Model).is_empty());
	}

	#[test]
	fn query_matches_brand_or_model_case_insensitively() {
		let record = VehicleRecord::new("csv-0", "Mercedes-Benz", "C-Class", "2021").unwrap();
		let mut state = FilterState::new();
		state.set_query("  benz ");
		assert!(state.matches(&record));
		state.set_query("c-cl");
		assert!(state.matches(&record));
		state.set_query("2021");
		assert!(!state.matches(&record));
	}

	#[test]
	fn clear_resets_everything() {
		let mut state = FilterState::new();
		state.insert(Facet::Make, "Audi");
		state.insert(Facet::Year, "2020");
		state.set_query("a4");
		state.clear();
		assert!(state.is_unconstrained());
	}
}
