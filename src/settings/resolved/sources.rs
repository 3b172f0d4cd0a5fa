use std::fmt;

#[derive(Debug, Clone)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(&'static str),
	ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
		}
	}
}

/// Where each validated setting came from.
#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	pub(crate) catalog_batch_size: Option<SettingSource>,
	pub(crate) contact_webhook_url: Option<SettingSource>,
	pub(crate) contact_whatsapp_number: Option<SettingSource>,
}

impl ConfigSources {
	pub(crate) fn source_for_batch_size(&self) -> SettingSource {
		self.catalog_batch_size
			.clone()
			.unwrap_or(SettingSource::ConfigKey("catalog.batch_size"))
	}

	pub(crate) fn source_for_webhook_url(&self) -> SettingSource {
		self.contact_webhook_url
			.clone()
			.unwrap_or(SettingSource::ConfigKey("contact.webhook_url"))
	}

	pub(crate) fn source_for_whatsapp_number(&self) -> SettingSource {
		self.contact_whatsapp_number
			.clone()
			.unwrap_or(SettingSource::ConfigKey("contact.whatsapp_number"))
	}
}
