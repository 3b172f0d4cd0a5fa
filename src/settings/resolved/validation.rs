use super::super::util::{is_http_url, is_whatsapp_number};
use super::{ConfigError, ConfigSources, ResolvedConfig};

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	if config.catalog.batch_size == 0 {
		return Err(ConfigError::invalid(
			"catalog.batch_size",
			"0",
			sources.source_for_batch_size(),
			"must be greater than zero",
		));
	}

	if let Some(url) = &config.contact.webhook_url
		&& !is_http_url(url)
	{
		return Err(ConfigError::invalid(
			"contact.webhook_url",
			url.as_str(),
			sources.source_for_webhook_url(),
			"must be an http or https URL",
		));
	}

	if let Some(number) = &config.contact.whatsapp_number
		&& !is_whatsapp_number(number)
	{
		return Err(ConfigError::invalid(
			"contact.whatsapp_number",
			number.as_str(),
			sources.source_for_whatsapp_number(),
			"must contain digits only, in international format",
		));
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use std::path::PathBuf;

	use trimshop::contact::ContactChannel;
	use trimshop::view::BrandLogos;
	use trimshop_catalog::{ShuffleOrder, TableDialect};

	use super::super::{CatalogSettings, ContactSettings, SettingSource};
	use super::*;

	fn config() -> ResolvedConfig {
		ResolvedConfig {
			catalog: CatalogSettings {
				embedded: None,
				table: "DATA/vehicles.csv".into(),
				dialect: TableDialect::Simple,
				batch_size: 12,
				shuffle: ShuffleOrder::Uniform,
			},
			contact: ContactSettings {
				channel: ContactChannel::Webhook,
				webhook_url: None,
				whatsapp_number: None,
				source: "test".into(),
			},
			logos: BrandLogos::default(),
			state_file: PathBuf::from("/tmp/state.json"),
		}
	}

	#[test]
	fn defaults_are_valid() {
		assert!(validate(&config(), &ConfigSources::default()).is_ok());
	}

	#[test]
	fn validation_rejects_zero_batch_size() {
		let mut config = config();
		config.catalog.batch_size = 0;
		let sources = ConfigSources {
			catalog_batch_size: Some(SettingSource::CliFlag("--batch-size")),
			..ConfigSources::default()
		};

		let err = validate(&config, &sources).unwrap_err();
		assert!(matches!(err.key, "catalog.batch_size"));
		let message = err.to_string();
		assert!(message.contains("value: 0"));
		assert!(message.contains("CLI flag"));
	}

	#[test]
	fn validation_rejects_non_http_webhook() {
		let mut config = config();
		config.contact.webhook_url = Some("localhost:5678/webhook".into());
		let sources = ConfigSources {
			contact_webhook_url: Some(SettingSource::Environment(
				"TRIMSHOP__CONTACT__WEBHOOK_URL",
			)),
			..ConfigSources::default()
		};

		let err = validate(&config, &sources).unwrap_err();
		assert!(matches!(err.key, "contact.webhook_url"));
		assert!(err.to_string().contains("environment variable"));
	}

	#[test]
	fn validation_rejects_formatted_whatsapp_number() {
		let mut config = config();
		config.contact.whatsapp_number = Some("+212 700 000".into());

		let err = validate(&config, &ConfigSources::default()).unwrap_err();
		assert!(matches!(err.key, "contact.whatsapp_number"));
		assert!(err.to_string().contains("configuration key"));
	}
}
