use tracing::debug;

use super::{IdAllocator, table_lines};
use crate::types::{RawVehicle, Scalar, VehicleRecord};

const ID_COLUMNS: &[&str] = &["id"];
const BRAND_COLUMNS: &[&str] = &["brand", "make"];
const MODEL_COLUMNS: &[&str] = &["model"];
const YEAR_COLUMNS: &[&str] = &["year", "yearstart", "year_start", "start", "from"];
const CREATED_COLUMNS: &[&str] = &["created", "created on"];
const TYPE_COLUMNS: &[&str] = &["type", "bodytype", "body_type"];
const FUEL_COLUMNS: &[&str] = &["fuel", "fuel type"];
const TRANSMISSION_COLUMNS: &[&str] = &["transmission", "gearbox"];
const ENGINE_COLUMNS: &[&str] = &["engine", "enginesize", "engine_size"];
const SEATS_COLUMNS: &[&str] = &["seats"];
const DOORS_COLUMNS: &[&str] = &["doors"];
const IMAGE_COLUMNS: &[&str] = &["image", "imagepath", "image_path"];
const PRICE_COLUMNS: &[&str] = &["pricemonthly", "price_monthly"];

/// Split one row on commas that are not inside double quotes.
///
/// Quote characters toggle the quoted state and are not kept. Cells are
/// trimmed.
#[must_use]
pub fn split_quoted_row(row: &str) -> Vec<String> {
	let mut cells = Vec::new();
	let mut current = String::new();
	let mut in_quotes = false;
	for ch in row.chars() {
		match ch {
			'"' => in_quotes = !in_quotes,
			',' if !in_quotes => cells.push(std::mem::take(&mut current)),
			_ => current.push(ch),
		}
	}
	cells.push(current);
	cells.into_iter().map(|cell| cell.trim().to_string()).collect()
}

/// Column positions resolved from the header row.
struct Columns {
	width: usize,
	id: Option<usize>,
	brand: Option<usize>,
	model: Option<usize>,
	year: Option<usize>,
	created: Option<usize>,
	body_type: Option<usize>,
	fuel: Option<usize>,
	transmission: Option<usize>,
	engine: Option<usize>,
	seats: Option<usize>,
	doors: Option<usize>,
	image: Option<usize>,
	price: Option<usize>,
}

impl Columns {
	fn from_header(header: &[String]) -> Self {
		let names: Vec<String> = header.iter().map(|name| name.to_lowercase()).collect();
		let find = |aliases: &[&str]| {
			aliases
				.iter()
				.find_map(|alias| names.iter().position(|name| name == alias))
		};
		Self {
			width: header.len(),
			id: find(ID_COLUMNS),
			brand: find(BRAND_COLUMNS),
			model: find(MODEL_COLUMNS),
			year: find(YEAR_COLUMNS),
			created: find(CREATED_COLUMNS),
			body_type: find(TYPE_COLUMNS),
			fuel: find(FUEL_COLUMNS),
			transmission: find(TRANSMISSION_COLUMNS),
			engine: find(ENGINE_COLUMNS),
			seats: find(SEATS_COLUMNS),
			doors: find(DOORS_COLUMNS),
			image: find(IMAGE_COLUMNS),
			price: find(PRICE_COLUMNS),
		}
	}

	fn raw_vehicle(&self, cells: &[String]) -> RawVehicle {
		let text = |column: Option<usize>| {
			column
				.and_then(|index| cells.get(index))
				.filter(|cell| !cell.is_empty())
				.cloned()
		};
		RawVehicle {
			id: text(self.id),
			brand: text(self.brand),
			model: text(self.model),
			year: text(self.year).map(Scalar::Text),
			price_monthly: text(self.price).and_then(|price| price.parse().ok()),
			price_raw: None,
			engine_size: text(self.engine),
			fuel: text(self.fuel),
			body_type: text(self.body_type),
			transmission: text(self.transmission),
			seats: text(self.seats).map(Scalar::Text),
			doors: text(self.doors).map(Scalar::Text),
			image: text(self.image),
			created: text(self.created),
		}
	}
}

/// Parse a quote-aware table whose first row is always a header.
///
/// Columns are located by (case-insensitive) header name. Rows whose cell
/// count differs from the header, or that lack brand or model, are dropped.
#[must_use]
pub fn ingest_quoted(text: &str) -> Vec<VehicleRecord> {
	let mut lines = table_lines(text);
	let Some(header) = lines.next() else {
		return Vec::new();
	};
	let columns = Columns::from_header(&split_quoted_row(header));

	let mut ids = IdAllocator::default();
	let mut records = Vec::new();
	let mut dropped = 0usize;
	for line in lines {
		let cells = split_quoted_row(line);
		if cells.len() != columns.width {
			dropped += 1;
			continue;
		}
		let mut raw = columns.raw_vehicle(&cells);
		let candidate = raw.id.take().unwrap_or_else(|| {
			format!(
				"{}-{}-{}",
				raw.brand.as_deref().unwrap_or_default(),
				raw.model.as_deref().unwrap_or_default(),
				raw.year.as_ref().map(Scalar::to_text).unwrap_or_default()
			)
		});
		if raw.brand.is_none() || raw.model.is_none() {
			dropped += 1;
			continue;
		}
		match raw.into_record(ids.claim(candidate)) {
			Some(record) => records.push(record),
			None => dropped += 1,
		}
	}

	if dropped > 0 {
		debug!(dropped, kept = records.len(), "skipped malformed catalog rows");
	}
	records
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn quoted_cells_keep_embedded_commas() {
		assert_eq!(
			split_quoted_row(r#""Mercedes, Benz", "C-Class" ,2021"#),
			vec!["Mercedes, Benz", "C-Class", "2021"]
		);
	}

	#[test]
	fn header_names_are_case_insensitive() {
		let records = ingest_quoted("Brand,Model,Year,Created On\nToyota,Corolla,2020,2024-01-01");
		assert_eq!(records.len(), 1);
		assert_eq!(records[0].id, "Toyota-Corolla-2020");
		assert_eq!(records[0].created.as_deref(), Some("2024-01-01"));
	}

	#[test]
	fn rows_with_wrong_width_are_dropped() {
		let records = ingest_quoted("brand,model,year\nHonda,Civic\nHonda,Jazz,2019,extra\nHonda,CR-V,2022");
		assert_eq!(records.len(), 1);
		assert_eq!(records[0].model, "CR-V");
	}

	#[test]
	fn duplicate_composite_ids_stay_unique() {
		let records = ingest_quoted("brand,model,year\nAudi,A3,2021\nAudi,A3,2021");
		assert_eq!(records[0].id, "Audi-A3-2021");
		assert_eq!(records[1].id, "Audi-A3-2021-2");
	}

	#[test]
	fn optional_columns_override_defaults() {
		let records = ingest_quoted(
			"id,brand,model,yearStart,fuel,gearbox,priceMonthly\nv1,Nissan,Leaf,2019,Electric,Automatic,210",
		);
		let record = &records[0];
		assert_eq!(record.id, "v1");
		assert_eq!(record.year, "2019");
		assert_eq!(record.fuel, "Electric");
		assert_eq!(record.price_monthly, 210);
	}

	#[test]
	fn empty_input_yields_nothing() {
		assert!(ingest_quoted("").is_empty());
		assert!(ingest_quoted("brand,model,year\n").is_empty());
	}
}
