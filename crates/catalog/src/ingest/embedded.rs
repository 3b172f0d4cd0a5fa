use tracing::debug;

use super::IdAllocator;
use crate::types::{RawVehicle, VehicleRecord};

/// Decode an embedded JSON array of vehicle objects.
///
/// # Errors
///
/// Returns the decoder error when `text` is not an array of objects.
pub fn parse_embedded(text: &str) -> Result<Vec<RawVehicle>, serde_json::Error> {
	serde_json::from_str(text)
}

/// Normalize pre-loaded vehicle objects.
///
/// Objects without an explicit id get `local-{n}` from their array position.
/// Objects missing brand or model are dropped.
#[must_use]
pub fn ingest_embedded(objects: Vec<RawVehicle>) -> Vec<VehicleRecord> {
	let total = objects.len();
	let mut ids = IdAllocator::default();
	let records: Vec<VehicleRecord> = objects
		.into_iter()
		.enumerate()
		.filter_map(|(index, mut raw)| {
			if raw.brand.is_none() || raw.model.is_none() {
				return None;
			}
			let candidate = raw
				.id
				.take()
				.map(|id| id.trim().to_string())
				.filter(|id| !id.is_empty())
				.unwrap_or_else(|| format!("local-{index}"));
			raw.into_record(ids.claim(candidate))
		})
		.collect();

	if records.len() < total {
		debug!(dropped = total - records.len(), "skipped incomplete embedded vehicles");
	}
	records
}
