use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

/// Year assigned to delimited rows that only carry brand and model.
pub const DEFAULT_YEAR: &str = "2020";

const NEW_ARRIVAL_DAYS: i64 = 30;
const LEASE_MONTHS: f64 = 48.0;
const INITIAL_PAYMENT_RATE: f64 = 0.15;

/// One normalized catalog entry.
///
/// Cosmetic fields are defaulted when the record is built, so views never
/// have to guess at missing values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleRecord {
	pub id: String,
	pub brand: String,
	pub model: String,
	pub year: String,
	pub price_monthly: u32,
	pub initial_payment: u32,
	pub engine_size: String,
	pub fuel: String,
	#[serde(rename = "type")]
	pub body_type: String,
	pub transmission: String,
	pub seats: u8,
	pub doors: u8,
	pub image_path: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub created: Option<String>,
}

impl VehicleRecord {
	/// Build a record with default cosmetic fields.
	///
	/// Returns `None` when the trimmed brand or model is empty.
	#[must_use]
	pub fn new(
		id: impl Into<String>,
		brand: &str,
		model: &str,
		year: impl Into<String>,
	) -> Option<Self> {
		let brand = brand.trim();
		let model = model.trim();
		if brand.is_empty() || model.is_empty() {
			return None;
		}

		Some(Self {
			id: id.into(),
			brand: brand.to_string(),
			model: model.to_string(),
			year: year.into(),
			price_monthly: 0,
			initial_payment: 0,
			engine_size: "2.0".to_string(),
			fuel: "Petrol".to_string(),
			body_type: "Sedan".to_string(),
			transmission: "Automatic".to_string(),
			seats: 5,
			doors: 4,
			image_path: String::new(),
			created: None,
		})
	}

	/// Replace the monthly price.
	#[must_use]
	pub fn with_price_monthly(mut self, price: u32) -> Self {
		self.price_monthly = price;
		self
	}

	/// Key used to collapse duplicate listings.
	#[must_use]
	pub fn listing_key(&self) -> (&str, &str, &str) {
		(&self.brand, &self.model, &self.year)
	}

	/// Card heading, e.g. `2020 Toyota Corolla`.
	#[must_use]
	pub fn title(&self) -> String {
		format!("{} {} {}", self.year, self.brand, self.model)
	}

	/// Card subheading, e.g. `2.0L Petrol • Sedan`.
	#[must_use]
	pub fn subtitle(&self) -> String {
		format!("{}L {} • {}", self.engine_size, self.fuel, self.body_type)
	}

	/// Parse the creation date, accepting `YYYY-MM-DD` and RFC 3339 stamps.
	#[must_use]
	pub fn created_on(&self) -> Option<NaiveDate> {
		let raw = self.created.as_deref()?.trim();
		if raw.is_empty() {
			return None;
		}
		NaiveDate::parse_from_str(raw, "%Y-%m-%d")
			.ok()
			.or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|stamp| stamp.date_naive()))
	}

	/// Whether the record was added within the last 30 days of `today`.
	/// Dates after `today` count as new.
	#[must_use]
	pub fn is_new_arrival(&self, today: NaiveDate) -> bool {
		let Some(created) = self.created_on() else {
			return false;
		};
		let age = today.signed_duration_since(created).num_days();
		age <= NEW_ARRIVAL_DAYS
	}
}

/// A value that embedded data may spell either as a number or a string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
	Number(f64),
	Text(String),
}

impl Scalar {
	/// Render the value as trimmed text. Whole numbers lose their fraction.
	#[must_use]
	pub fn to_text(&self) -> String {
		match self {
			Self::Number(value) if value.fract() == 0.0 => format!("{value:.0}"),
			Self::Number(value) => value.to_string(),
			Self::Text(text) => text.trim().to_string(),
		}
	}

	/// Interpret the value as a small count, ignoring anything unparseable.
	#[must_use]
	pub fn to_count(&self) -> Option<u8> {
		match self {
			Self::Number(value) if *value >= 0.0 && *value <= f64::from(u8::MAX) => {
				Some(*value as u8)
			}
			Self::Number(_) => None,
			Self::Text(text) => text.trim().parse().ok(),
		}
	}
}

/// A vehicle object as it appears in embedded JSON data.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawVehicle {
	pub id: Option<String>,
	#[serde(alias = "Brand")]
	pub brand: Option<String>,
	#[serde(alias = "Model")]
	pub model: Option<String>,
	#[serde(alias = "Year")]
	pub year: Option<Scalar>,
	pub price_monthly: Option<u32>,
	pub price_raw: Option<f64>,
	pub engine_size: Option<String>,
	pub fuel: Option<String>,
	#[serde(rename = "type")]
	pub body_type: Option<String>,
	pub transmission: Option<String>,
	pub seats: Option<Scalar>,
	pub doors: Option<Scalar>,
	#[serde(alias = "realImagePath")]
	pub image: Option<String>,
	pub created: Option<String>,
}

impl RawVehicle {
	/// Shorthand for the three fields every source carries.
	#[must_use]
	pub fn listing(brand: &str, model: &str, year: &str) -> Self {
		Self {
			brand: Some(brand.to_string()),
			model: Some(model.to_string()),
			year: Some(Scalar::Text(year.to_string())),
			..Self::default()
		}
	}

	/// Normalize into a [`VehicleRecord`] with the given id.
	///
	/// Returns `None` when brand or model is missing.
	#[must_use]
	pub fn into_record(self, id: String) -> Option<VehicleRecord> {
		let year = self
			.year
			.as_ref()
			.map(Scalar::to_text)
			.filter(|year| !year.is_empty())
			.unwrap_or_else(|| DEFAULT_YEAR.to_string());
		let mut record = VehicleRecord::new(
			id,
			self.brand.as_deref().unwrap_or_default(),
			self.model.as_deref().unwrap_or_default(),
			year,
		)?;

		match (self.price_monthly, self.price_raw) {
			(Some(monthly), _) => record.price_monthly = monthly,
			(None, Some(raw)) if raw > 0.0 => {
				record.price_monthly = (raw / LEASE_MONTHS).floor() as u32;
				record.initial_payment = (raw * INITIAL_PAYMENT_RATE).floor() as u32;
			}
			_ => {}
		}

		if let Some(value) = non_blank(self.engine_size) {
			record.engine_size = value;
		}
		if let Some(value) = non_blank(self.fuel) {
			record.fuel = value;
		}
		if let Some(value) = non_blank(self.body_type) {
			record.body_type = value;
		}
		if let Some(value) = non_blank(self.transmission) {
			record.transmission = value;
		}
		if let Some(value) = self.seats.as_ref().and_then(Scalar::to_count) {
			record.seats = value;
		}
		if let Some(value) = self.doors.as_ref().and_then(Scalar::to_count) {
			record.doors = value;
		}
		if let Some(value) = non_blank(self.image) {
			record.image_path = value;
		}
		record.created = non_blank(self.created);

		Some(record)
	}
}

fn non_blank(value: Option<String>) -> Option<String> {
	value
		.map(|value| value.trim().to_string())
		.filter(|value| !value.is_empty())
}
