//! Contact form validation and delivery.
//!
//! A form is validated before any network activity. Delivery goes either to a
//! webhook as a multipart POST or into a prefilled WhatsApp deep link.

mod form;
mod webhook;
mod whatsapp;

use clap::ValueEnum;
use serde::Deserialize;
use thiserror::Error;

pub use form::{ContactForm, FormError};
pub use webhook::WebhookClient;
pub use whatsapp::{GREETING, whatsapp_link, whatsapp_message};

/// How a submitted form reaches the shop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ContactChannel {
	#[default]
	Webhook,
	Whatsapp,
}

impl ContactChannel {
	#[must_use]
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Webhook => "webhook",
			Self::Whatsapp => "whatsapp",
		}
	}
}

/// Reasons a submission did not go through. The form is left untouched.
#[derive(Debug, Error)]
pub enum SubmitError {
	#[error(transparent)]
	Invalid(#[from] FormError),

	#[error("failed to attach {path}: {source}")]
	Attachment {
		path: String,
		#[source]
		source: std::io::Error,
	},

	#[error("failed to reach the contact webhook: {0}")]
	Transport(#[from] reqwest::Error),

	#[error("the contact webhook answered with status {0}")]
	Rejected(u16),

	#[error("unable to build a WhatsApp link: {0}")]
	Link(String),
}
