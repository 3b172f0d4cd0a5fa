use std::path::PathBuf;

use serde::Deserialize;
use trimshop_catalog::{DEFAULT_BATCH_SIZE, ShuffleOrder, TableDialect};

use super::super::resolved::CatalogSettings;
use super::super::util::non_blank;
use crate::cli::CliArgs;

/// Table read when nothing else is configured.
const DEFAULT_TABLE: &str = "DATA/vehicles.csv";

/// Catalog source options as they are read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct CatalogSection {
	pub(super) embedded: Option<PathBuf>,
	pub(super) table: Option<String>,
	pub(super) dialect: Option<TableDialect>,
	pub(super) batch_size: Option<usize>,
	pub(super) shuffle: Option<bool>,
	pub(super) seed: Option<u64>,
}

impl CatalogSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(path) = cli.embedded.clone() {
			self.embedded = Some(path);
		}
		if let Some(table) = cli.table.clone() {
			self.table = Some(table);
		}
		if let Some(dialect) = cli.dialect {
			self.dialect = Some(dialect.dialect());
		}
		if let Some(value) = cli.batch_size {
			self.batch_size = Some(value);
		}
		if let Some(value) = cli.shuffle {
			self.shuffle = Some(value);
		}
		if let Some(value) = cli.seed {
			self.seed = Some(value);
		}
	}

	pub(super) fn resolve(self) -> CatalogSettings {
		let shuffle = match (self.shuffle.unwrap_or(true), self.seed) {
			(false, _) => ShuffleOrder::Preserve,
			(true, Some(seed)) => ShuffleOrder::Seeded(seed),
			(true, None) => ShuffleOrder::Uniform,
		};

		CatalogSettings {
			embedded: self.embedded,
			table: non_blank(self.table).unwrap_or_else(|| DEFAULT_TABLE.to_string()),
			dialect: self.dialect.unwrap_or_default(),
			batch_size: self.batch_size.unwrap_or(DEFAULT_BATCH_SIZE),
			shuffle,
		}
	}
}
