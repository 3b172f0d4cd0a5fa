//! Facet filtering and listing deduplication.

mod facets;

use indexmap::IndexMap;
use indexmap::map::Entry;

use crate::types::{FilterState, VehicleRecord};

pub use facets::FacetIndex;

/// Filter the full catalog with `state` and collapse duplicate listings.
///
/// Recomputed from scratch on every call; catalogs are a few hundred records.
#[must_use]
pub fn apply_filters(all: &[VehicleRecord], state: &FilterState) -> Vec<VehicleRecord> {
	dedupe_by_listing(all.iter().filter(|record| state.matches(record)))
}

/// Keep at most one record per `(brand, model, year)`.
///
/// The cheapest monthly price wins and ties keep the first record seen. Keys
/// stay in the position where they first appeared.
#[must_use]
pub fn dedupe_by_listing<'a, I>(records: I) -> Vec<VehicleRecord>
where
	I: IntoIterator<Item = &'a VehicleRecord>,
{
	let mut unique: IndexMap<(&str, &str, &str), &VehicleRecord> = IndexMap::new();
	for record in records {
		match unique.entry(record.listing_key()) {
			Entry::Vacant(slot) => {
				slot.insert(record);
			}
			Entry::Occupied(mut slot) => {
				if record.price_monthly < slot.get().price_monthly {
					slot.insert(record);
				}
			}
		}
	}
	unique.into_values().cloned().collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::types::Facet;

	fn record(id: &str, brand: &str, model: &str, year: &str, price: u32) -> VehicleRecord {
		VehicleRecord::new(id, brand, model, year)
			.unwrap()
			.with_price_monthly(price)
	}

	fn catalog() -> Vec<VehicleRecord> {
		vec![
			record("a", "Toyota", "Corolla", "2020", 300),
			record("b", "Honda", "Civic", "2019", 250),
			record("c", "Toyota", "Corolla", "2020", 200),
			record("d", "Toyota", "Yaris", "2021", 180),
			record("e", "Honda", "Civic", "2019", 250),
		]
	}

	fn ids(records: &[VehicleRecord]) -> Vec<&str> {
		records.iter().map(|record| record.id.as_str()).collect()
	}

	#[test]
	fn empty_state_returns_deduplicated_catalog() {
		let filtered = apply_filters(&catalog(), &FilterState::new());
		assert_eq!(ids(&filtered), vec!["c", "b", "d"]);
	}

	#[test]
	fn cheaper_duplicate_survives_and_ties_keep_first() {
		let filtered = dedupe_by_listing(&catalog());
		let corolla = filtered.iter().find(|r| r.model == "Corolla").unwrap();
		assert_eq!(corolla.id, "c");
		let civic = filtered.iter().find(|r| r.model == "Civic").unwrap();
		assert_eq!(civic.id, "b");
	}

	#[test]
	fn every_non_empty_facet_constrains() {
		let mut state = FilterState::new();
		state.insert(Facet::Make, "Toyota");
		state.insert(Facet::Year, "2021");
		let filtered = apply_filters(&catalog(), &state);
		assert_eq!(ids(&filtered), vec!["d"]);
	}

	#[test]
	fn filtering_is_idempotent() {
		let mut state = FilterState::new();
		state.insert(Facet::Make, "Honda");
		let first = apply_filters(&catalog(), &state);
		let second = apply_filters(&catalog(), &state);
		assert_eq!(first, second);
	}

	#[test]
	fn no_match_yields_empty_list() {
		let mut state = FilterState::new();
		state.insert(Facet::Make, "Porsche");
		assert!(apply_filters(&catalog(), &state).is_empty());
	}
}
