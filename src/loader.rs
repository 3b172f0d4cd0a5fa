//! Fetch the raw catalog from disk or over HTTP and hand it to the ingesters.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};
use trimshop_catalog::{
	LoadError, ShuffleOrder, TableDialect, VehicleRecord, ingest_embedded, ingest_table,
	parse_embedded,
};

/// Where the catalog comes from and how it is ordered once loaded.
#[derive(Debug, Clone, Default)]
pub struct CatalogLoader {
	embedded: Option<PathBuf>,
	table: Option<String>,
	dialect: TableDialect,
	shuffle: ShuffleOrder,
}

impl CatalogLoader {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// JSON array consulted before the table when the file exists.
	#[must_use]
	pub fn with_embedded(mut self, path: Option<PathBuf>) -> Self {
		self.embedded = path;
		self
	}

	/// Table location: a file path or an `http(s)://` URL.
	#[must_use]
	pub fn with_table(mut self, location: Option<String>, dialect: TableDialect) -> Self {
		self.table = location;
		self.dialect = dialect;
		self
	}

	#[must_use]
	pub fn with_shuffle(mut self, shuffle: ShuffleOrder) -> Self {
		self.shuffle = shuffle;
		self
	}

	/// Load, normalize and order the catalog.
	pub fn load(&self) -> Result<Vec<VehicleRecord>, LoadError> {
		let mut records = self.load_unordered()?;
		self.shuffle.apply(&mut records);
		info!(records = records.len(), "catalog ready");
		Ok(records)
	}

	fn load_unordered(&self) -> Result<Vec<VehicleRecord>, LoadError> {
		if let Some(path) = &self.embedded {
			if path.is_file() {
				return load_embedded(path);
			}
			debug!(path = %path.display(), "embedded catalog absent");
			if self.table.is_none() {
				return Err(LoadError::unavailable(
					path.display().to_string(),
					"embedded vehicle data not found",
				));
			}
		}

		let location = self.table.as_deref().ok_or(LoadError::MissingSource)?;
		let text = read_table(location)?;
		debug!(location, dialect = self.dialect.as_str(), "parsing catalog table");
		Ok(ingest_table(&text, self.dialect))
	}
}

fn load_embedded(path: &Path) -> Result<Vec<VehicleRecord>, LoadError> {
	let origin = path.display().to_string();
	let text = fs::read_to_string(path).map_err(|err| LoadError::unavailable(&origin, err))?;
	let objects = parse_embedded(&text).map_err(|source| LoadError::Decode { origin, source })?;
	Ok(ingest_embedded(objects))
}

/// Read the table text from `location`.
fn read_table(location: &str) -> Result<String, LoadError> {
	if is_remote(location) {
		return fetch(location);
	}
	fs::read_to_string(location).map_err(|err| LoadError::unavailable(location, err))
}

fn is_remote(location: &str) -> bool {
	let lower = location.to_ascii_lowercase();
	lower.starts_with("http://") || lower.starts_with("https://")
}

fn fetch(url: &str) -> Result<String, LoadError> {
	debug!(url, "fetching catalog table");
	let response = reqwest::blocking::get(url).map_err(|err| LoadError::unavailable(url, err))?;
	let status = response.status();
	if !status.is_success() {
		return Err(LoadError::Status {
			origin: url.to_string(),
			status: status.as_u16(),
		});
	}
	response.text().map_err(|err| LoadError::unavailable(url, err))
}

#[cfg(test)]
mod tests {
	use std::io::Write;

	use tempfile::{NamedTempFile, tempdir};

	use super::*;
	use crate::testing::{closed_port, respond_once};

	fn table(contents: &str) -> NamedTempFile {
		let mut file = NamedTempFile::new().unwrap();
		file.write_all(contents.as_bytes()).unwrap();
		file
	}

	#[test]
	fn reads_table_from_file_in_source_order() {
		let file = table("Brand,Model,Year\nToyota,Corolla,2020\nHonda,Civic,2019\n");
		let records = CatalogLoader::new()
			.with_table(Some(file.path().display().to_string()), TableDialect::Simple)
			.with_shuffle(ShuffleOrder::Preserve)
			.load()
			.unwrap();
		let ids: Vec<_> = records.iter().map(|record| record.id.as_str()).collect();
		assert_eq!(ids, vec!["csv-0", "csv-1"]);
	}

	#[test]
	fn embedded_data_wins_when_present() {
		let dir = tempdir().unwrap();
		let embedded = dir.path().join("vehicles.json");
		fs::write(&embedded, r#"[{"brand":"BMW","model":"X5","year":2022}]"#).unwrap();
		let file = table("Toyota,Corolla,2020\n");

		let records = CatalogLoader::new()
			.with_embedded(Some(embedded))
			.with_table(Some(file.path().display().to_string()), TableDialect::Simple)
			.load()
			.unwrap();
		assert_eq!(records.len(), 1);
		assert_eq!(records[0].id, "local-0");
		assert_eq!(records[0].year, "2022");
	}

	#[test]
	fn absent_embedded_data_falls_back_to_table() {
		let dir = tempdir().unwrap();
		let file = table("Toyota,Corolla,2020\n");
		let records = CatalogLoader::new()
			.with_embedded(Some(dir.path().join("missing.json")))
			.with_table(Some(file.path().display().to_string()), TableDialect::Simple)
			.load()
			.unwrap();
		assert_eq!(records[0].brand, "Toyota");
	}

	#[test]
	fn malformed_embedded_data_is_a_decode_error() {
		let dir = tempdir().unwrap();
		let embedded = dir.path().join("vehicles.json");
		fs::write(&embedded, r#"{"brand":"BMW"}"#).unwrap();
		let err = CatalogLoader::new()
			.with_embedded(Some(embedded))
			.load()
			.unwrap_err();
		assert!(matches!(err, LoadError::Decode { .. }));
	}

	#[test]
	fn missing_file_reports_origin() {
		let dir = tempdir().unwrap();
		let missing = dir.path().join("vehicles.csv").display().to_string();
		let err = CatalogLoader::new()
			.with_table(Some(missing.clone()), TableDialect::Simple)
			.load()
			.unwrap_err();
		assert!(err.to_string().contains(&missing));
	}

	#[test]
	fn nothing_configured_is_missing_source() {
		let err = CatalogLoader::new().load().unwrap_err();
		assert!(matches!(err, LoadError::MissingSource));
	}

	#[test]
	fn remote_table_is_fetched_and_parsed() {
		let (addr, server) = respond_once("200 OK", "Brand,Model,Year\nBMW,X5,2022\nKia,Rio,2019\n");
		let records = CatalogLoader::new()
			.with_table(Some(format!("http://{addr}/vehicles.csv")), TableDialect::Simple)
			.with_shuffle(ShuffleOrder::Preserve)
			.load()
			.unwrap();
		let brands: Vec<_> = records.iter().map(|record| record.brand.as_str()).collect();
		assert_eq!(brands, vec!["BMW", "Kia"]);
		assert!(server.join().unwrap().starts_with("GET /vehicles.csv"));
	}

	#[test]
	fn remote_error_status_is_typed() {
		let (addr, server) = respond_once("500 Internal Server Error", "");
		let err = CatalogLoader::new()
			.with_table(Some(format!("http://{addr}/vehicles.csv")), TableDialect::Simple)
			.load()
			.unwrap_err();
		assert!(matches!(err, LoadError::Status { status: 500, .. }));
		server.join().unwrap();
	}

	#[test]
	fn unreachable_remote_table_is_unavailable() {
		let location = format!("http://{}/vehicles.csv", closed_port());
		let err = CatalogLoader::new()
			.with_table(Some(location.clone()), TableDialect::Simple)
			.load()
			.unwrap_err();
		assert!(matches!(err, LoadError::Unavailable { .. }));
		assert!(err.to_string().contains(&location));
	}

	#[test]
	fn remote_locations_are_detected() {
		assert!(is_remote("HTTPS://example.com/vehicles.csv"));
		assert!(!is_remote("DATA/vehicles.csv"));
	}
}
