use std::path::PathBuf;

use trimshop::contact::ContactChannel;
use trimshop::view::BrandLogos;
use trimshop_catalog::{ShuffleOrder, TableDialect};

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Where the catalog comes from and how it is paged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogSettings {
	pub embedded: Option<PathBuf>,
	pub table: String,
	pub dialect: TableDialect,
	pub batch_size: usize,
	pub shuffle: ShuffleOrder,
}

/// How contact requests are delivered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSettings {
	pub channel: ContactChannel,
	pub webhook_url: Option<String>,
	pub whatsapp_number: Option<String>,
	pub source: String,
}

/// Application-ready configuration derived from user input, config files and
/// sensible defaults.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
	pub catalog: CatalogSettings,
	pub contact: ContactSettings,
	pub logos: BrandLogos,
	pub state_file: PathBuf,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		summary::print_summary(self);
	}
}
