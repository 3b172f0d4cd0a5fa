use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::types::{FacetRow, VehicleRecord};

/// Distinct facet values derived once from a loaded catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FacetIndex {
	brands: Vec<FacetRow>,
	models_by_brand: BTreeMap<String, BTreeSet<String>>,
	years: Vec<String>,
}

impl FacetIndex {
	#[must_use]
	pub fn build(records: &[VehicleRecord]) -> Self {
		let mut brand_counts: BTreeMap<&str, usize> = BTreeMap::new();
		let mut models_by_brand: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
		let mut years: BTreeSet<&str> = BTreeSet::new();

		for record in records {
			*brand_counts.entry(&record.brand).or_default() += 1;
			models_by_brand
				.entry(record.brand.clone())
				.or_default()
				.insert(record.model.clone());
			years.insert(&record.year);
		}

		Self {
			brands: brand_counts
				.into_iter()
				.map(|(name, count)| FacetRow::new(name, count))
				.collect(),
			models_by_brand,
			years: years.into_iter().rev().map(str::to_string).collect(),
		}
	}

	/// Brands in ascending order with their record counts.
	#[must_use]
	pub fn brands(&self) -> &[FacetRow] {
		&self.brands
	}

	/// Models of `brand` in ascending order. Empty for unknown brands.
	#[must_use]
	pub fn models_for(&self, brand: &str) -> &BTreeSet<String> {
		static NONE: BTreeSet<String> = BTreeSet::new();
		self.models_by_brand.get(brand).unwrap_or(&NONE)
	}

	/// Years, newest first.
	#[must_use]
	pub fn years(&self) -> &[String] {
		&self.years
	}

	#[must_use]
	pub fn has_brand(&self, brand: &str) -> bool {
		self.models_by_brand.contains_key(brand)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn catalog() -> Vec<VehicleRecord> {
		[
			("Toyota", "Yaris", "2021"),
			("Honda", "Civic", "2019"),
			("Toyota", "Corolla", "2020"),
			("Toyota", "Corolla", "2018"),
		]
		.iter()
		.enumerate()
		.filter_map(|(index, (brand, model, year))| {
			VehicleRecord::new(format!("csv-{index}"), brand, model, *year)
		})
		.collect()
	}

	#[test]
	fn brands_are_sorted_with_counts() {
		let index = FacetIndex::build(&catalog());
		assert_eq!(
			index.brands(),
			&[FacetRow::new("Honda", 1), FacetRow::new("Toyota", 3)]
		);
	}

	#[test]
	fn models_are_scoped_to_brand() {
		let index = FacetIndex::build(&catalog());
		let toyota: Vec<_> = index.models_for("Toyota").iter().cloned().collect();
		assert_eq!(toyota, vec!["Corolla", "Yaris"]);
		assert!(index.models_for("Porsche").is_empty());
	}

	#[test]
	fn years_are_newest_first() {
		let index = FacetIndex::build(&catalog());
		assert_eq!(index.years(), &["2021", "2020", "2019", "2018"]);
	}
}
