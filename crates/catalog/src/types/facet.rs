use serde::Serialize;

use super::VehicleRecord;

/// A filterable dimension of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Facet {
	Make,
	Model,
	Year,
}

impl Facet {
	pub const ALL: [Facet; 3] = [Facet::Make, Facet::Model, Facet::Year];

	/// The record field this facet filters on.
	#[must_use]
	pub fn value_of(self, record: &VehicleRecord) -> &str {
		match self {
			Self::Make => &record.brand,
			Self::Model => &record.model,
			Self::Year => &record.year,
		}
	}

	#[must_use]
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Make => "make",
			Self::Model => "model",
			Self::Year => "year",
		}
	}
}

/// Represents a single facet value with its label and the number of records carrying it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetRow {
	pub name: String,
	pub count: usize,
}

impl FacetRow {
	/// Create a new [`FacetRow`] with the provided `name` and `count`.
	#[must_use]
	pub fn new(name: impl Into<String>, count: usize) -> Self {
		Self {
			name: name.into(),
			count,
		}
	}
}
