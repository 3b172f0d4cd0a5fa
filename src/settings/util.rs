use std::collections::BTreeMap;

/// Trim `value`, mapping blank strings to `None`.
pub(super) fn non_blank(value: Option<String>) -> Option<String> {
	value
		.map(|value| value.trim().to_string())
		.filter(|value| !value.is_empty())
}

/// Drop logo entries with a blank brand or location and trim the rest.
pub(super) fn sanitize_logos(logos: BTreeMap<String, String>) -> BTreeMap<String, String> {
	logos
		.into_iter()
		.filter_map(|(brand, logo)| {
			let brand = brand.trim().to_string();
			let logo = logo.trim().to_string();
			(!brand.is_empty() && !logo.is_empty()).then_some((brand, logo))
		})
		.collect()
}

/// Whether `url` is an absolute http or https URL.
pub(super) fn is_http_url(url: &str) -> bool {
	reqwest::Url::parse(url)
		.map(|parsed| matches!(parsed.scheme(), "http" | "https") && parsed.has_host())
		.unwrap_or(false)
}

/// WhatsApp numbers are digits only, in international form without `+`.
pub(super) fn is_whatsapp_number(number: &str) -> bool {
	!number.is_empty() && number.chars().all(|ch| ch.is_ascii_digit())
}
