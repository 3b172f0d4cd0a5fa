use serde::Deserialize;
use trimshop::contact::ContactChannel;

use super::super::resolved::ContactSettings;
use super::super::util::non_blank;

/// Label sent as the `source` field of webhook submissions.
const DEFAULT_SOURCE: &str = "trimshop CLI";

/// Contact form delivery options as they are read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct ContactSection {
	pub(super) channel: Option<ContactChannel>,
	pub(super) webhook_url: Option<String>,
	pub(super) whatsapp_number: Option<String>,
	pub(super) source: Option<String>,
}

impl ContactSection {
	pub(super) fn resolve(self) -> ContactSettings {
		ContactSettings {
			channel: self.channel.unwrap_or_default(),
			webhook_url: non_blank(self.webhook_url),
			whatsapp_number: non_blank(self.whatsapp_number),
			source: non_blank(self.source).unwrap_or_else(|| DEFAULT_SOURCE.to_string()),
		}
	}
}
