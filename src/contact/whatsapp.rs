use reqwest::Url;

use super::{ContactForm, SubmitError};

/// Opening line of every WhatsApp enquiry.
pub const GREETING: &str = "Hi! I'm interested in your upholstery services.";

const WHATSAPP_BASE: &str = "https://wa.me/";

/// Message body sent through WhatsApp. Empty optional fields are left out.
#[must_use]
pub fn whatsapp_message(form: &ContactForm) -> String {
	let mut text = format!("{GREETING}\n\n");
	text.push_str(&format!("Name: {}\n", form.name.trim()));
	text.push_str(&format!("Email: {}\n", form.email.trim()));
	if !form.phone.trim().is_empty() {
		text.push_str(&format!("Phone: {}\n", form.phone.trim()));
	}
	if !form.vehicle.trim().is_empty() {
		text.push_str(&format!("Vehicle: {}\n", form.vehicle.trim()));
	}
	text.push_str(&format!("\nMessage: {}", form.message.trim()));
	text
}

/// Validate `form` and build the `wa.me` deep link for `number`.
pub fn whatsapp_link(number: &str, form: &ContactForm) -> Result<Url, SubmitError> {
	form.validate()?;
	let base = format!("{WHATSAPP_BASE}{}", number.trim());
	Url::parse_with_params(&base, [("text", whatsapp_message(form))])
		.map_err(|err| SubmitError::Link(err.to_string()))
}

#[cfg(test)]
mod tests {
	use super::*;

	fn form() -> ContactForm {
		ContactForm {
			name: "Sara".into(),
			email: "sara@example.com".into(),
			message: "Headliner sags".into(),
			..ContactForm::default()
		}
	}

	#[test]
	fn message_skips_blank_optional_lines() {
		let text = whatsapp_message(&form());
		assert_eq!(
			text,
			"Hi! I'm interested in your upholstery services.\n\nName: Sara\nEmail: sara@example.com\n\nMessage: Headliner sags"
		);
	}

	#[test]
	fn message_includes_phone_and_vehicle_when_given() {
		let text = whatsapp_message(&ContactForm {
			phone: "0600".into(),
			vehicle: "BMW X5".into(),
			..form()
		});
		assert!(text.contains("Phone: 0600\nVehicle: BMW X5\n\nMessage:"));
	}

	#[test]
	fn link_targets_number_and_encodes_text() {
		let url = whatsapp_link("212700000000", &form()).unwrap();
		assert_eq!(url.host_str(), Some("wa.me"));
		assert_eq!(url.path(), "/212700000000");
		let (key, value) = url.query_pairs().next().unwrap();
		assert_eq!(key, "text");
		assert_eq!(value, whatsapp_message(&form()));
	}

	#[test]
	fn link_requires_a_valid_form() {
		let err = whatsapp_link("212700000000", &ContactForm::default()).unwrap_err();
		assert!(matches!(err, SubmitError::Invalid(_)));
	}
}
