use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::blocking::{Client, multipart};
use tracing::{debug, info};

use super::{ContactForm, SubmitError};

/// Posts contact forms to a webhook as `multipart/form-data`.
#[derive(Debug, Clone)]
pub struct WebhookClient {
	client: Client,
	url: String,
	source: String,
}

impl WebhookClient {
	/// `source` labels where the submission came from.
	pub fn new(url: impl Into<String>, source: impl Into<String>) -> Result<Self, SubmitError> {
		Ok(Self {
			client: Client::builder().build()?,
			url: url.into(),
			source: source.into(),
		})
	}

	#[must_use]
	pub fn url(&self) -> &str {
		&self.url
	}

	/// Text parts of the multipart body, in submission order.
	#[must_use]
	pub fn fields(&self, form: &ContactForm, timestamp: DateTime<Utc>) -> Vec<(&'static str, String)> {
		vec![
			("name", form.name.trim().to_string()),
			("email", form.email.trim().to_string()),
			("phone", form.phone.trim().to_string()),
			("vehicle", form.vehicle.trim().to_string()),
			("message", form.message.trim().to_string()),
			(
				"timestamp",
				timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
			),
			("source", self.source.clone()),
		]
	}

	/// Validate and send `form`. Nothing is retried.
	pub fn submit(&self, form: &ContactForm) -> Result<(), SubmitError> {
		form.validate()?;

		let mut payload = multipart::Form::new();
		for (name, value) in self.fields(form, Utc::now()) {
			payload = payload.text(name, value);
		}
		if let Some(path) = &form.attachment {
			payload = payload
				.file("file", path)
				.map_err(|source| SubmitError::Attachment {
					path: path.display().to_string(),
					source,
				})?;
		}

		debug!(url = %self.url, "posting contact form");
		let response = self.client.post(&self.url).multipart(payload).send()?;
		let status = response.status();
		if !status.is_success() {
			return Err(SubmitError::Rejected(status.as_u16()));
		}
		info!(status = status.as_u16(), "contact form delivered");
		Ok(())
	}
}
