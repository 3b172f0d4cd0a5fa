use std::env;

use anyhow::{Error, Result};
use serde::Deserialize;

use crate::cli::CliArgs;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};

mod brands;
mod catalog;
mod contact;
mod storage;

use brands::BrandsSection;
use catalog::CatalogSection;
use contact::ContactSection;
use storage::StorageSection;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	catalog: CatalogSection,
	contact: ContactSection,
	brands: BrandsSection,
	storage: StorageSection,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		self.catalog.apply_cli_overrides(cli);
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			catalog_batch_size: detect_source(
				cli.batch_size.is_some(),
				self.catalog.batch_size.is_some(),
				"TRIMSHOP__CATALOG__BATCH_SIZE",
				"--batch-size",
				"catalog.batch_size",
			),
			contact_webhook_url: detect_source(
				false,
				self.contact.webhook_url.is_some(),
				"TRIMSHOP__CONTACT__WEBHOOK_URL",
				"",
				"contact.webhook_url",
			),
			contact_whatsapp_number: detect_source(
				false,
				self.contact.whatsapp_number.is_some(),
				"TRIMSHOP__CONTACT__WHATSAPP_NUMBER",
				"",
				"contact.whatsapp_number",
			),
		};

		let config = ResolvedConfig {
			catalog: self.catalog.resolve(),
			contact: self.contact.resolve(),
			logos: self.brands.resolve(),
			state_file: self.storage.resolve()?,
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}
