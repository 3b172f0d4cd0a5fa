use std::path::PathBuf;
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;
use thiserror::Error;

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

/// Why a form was refused before submission.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FormError {
	#[error("please fill in the {0} field")]
	Missing(&'static str),

	#[error("please enter a valid email address")]
	InvalidEmail,

	#[error("email pattern failed to compile: {0}")]
	Pattern(String),
}

/// Values entered in the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactForm {
	pub name: String,
	pub email: String,
	pub phone: String,
	pub vehicle: String,
	pub message: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub attachment: Option<PathBuf>,
}

impl ContactForm {
	/// Check the required fields and the email shape.
	pub fn validate(&self) -> Result<(), FormError> {
		for (field, value) in [
			("name", &self.name),
			("email", &self.email),
			("message", &self.message),
		] {
			if value.trim().is_empty() {
				return Err(FormError::Missing(field));
			}
		}

		if !email_pattern()?.is_match(self.email.trim()) {
			return Err(FormError::InvalidEmail);
		}
		Ok(())
	}
}

fn email_pattern() -> Result<&'static Regex, FormError> {
	static EMAIL: OnceLock<Result<Regex, regex::Error>> = OnceLock::new();
	EMAIL
		.get_or_init(|| Regex::new(EMAIL_PATTERN))
		.as_ref()
		.map_err(|err| FormError::Pattern(err.to_string()))
}
