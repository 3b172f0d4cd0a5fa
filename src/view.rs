//! Terminal presentation of catalog results.
//!
//! [`ResultsPanel`] is the [`ResultView`] the CLI hands to the controller. It
//! only records what it was told; the CLI turns the recorded state into plain
//! text or JSON once dispatch is done.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use serde::Serialize;
use trimshop_catalog::{ResultView, VehicleRecord};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const TITLE_COLUMN: usize = 34;
const SUBTITLE_COLUMN: usize = 30;
const FAVORITE_MARK: &str = "♥";
const NEW_BADGE: &str = "New Arrival";

/// Maps brand names to logo image locations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrandLogos {
	logos: BTreeMap<String, String>,
	fallback: Option<String>,
}

impl BrandLogos {
	#[must_use]
	pub fn new(logos: BTreeMap<String, String>, fallback: Option<String>) -> Self {
		Self { logos, fallback }
	}

	/// Number of brands with a dedicated logo.
	#[must_use]
	pub fn len(&self) -> usize {
		self.logos.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.logos.is_empty()
	}

	#[must_use]
	pub fn fallback(&self) -> Option<&str> {
		self.fallback.as_deref()
	}

	/// Logo for `brand`, matched case-insensitively, else the fallback.
	#[must_use]
	pub fn logo_for(&self, brand: &str) -> Option<&str> {
		self.logos
			.iter()
			.find(|(name, _)| name.eq_ignore_ascii_case(brand))
			.map(|(_, logo)| logo.as_str())
			.or(self.fallback.as_deref())
	}
}

/// Everything a [`ResultsPanel`] has been asked to display.
#[derive(Debug, Default)]
pub struct ResultsPanel {
	placeholders: usize,
	failure: Option<String>,
	cards: Vec<VehicleRecord>,
	empty: bool,
	count: usize,
	more: bool,
	model_choices: Option<Vec<String>>,
}

impl ResultsPanel {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Skeleton cards requested while loading.
	#[must_use]
	pub fn placeholders(&self) -> usize {
		self.placeholders
	}

	#[must_use]
	pub fn failure(&self) -> Option<&str> {
		self.failure.as_deref()
	}

	#[must_use]
	pub fn cards(&self) -> &[VehicleRecord] {
		&self.cards
	}

	/// True when the filters matched nothing.
	#[must_use]
	pub fn is_empty_state(&self) -> bool {
		self.empty
	}

	#[must_use]
	pub fn result_count(&self) -> usize {
		self.count
	}

	#[must_use]
	pub fn more_available(&self) -> bool {
		self.more
	}

	/// Models offered for the selected brand, `None` without a brand.
	#[must_use]
	pub fn model_choices(&self) -> Option<&[String]> {
		self.model_choices.as_deref()
	}
}

impl ResultView for ResultsPanel {
	fn show_loading(&mut self, placeholders: usize) {
		self.placeholders = placeholders;
		self.failure = None;
	}

	fn show_load_error(&mut self, message: &str) {
		self.placeholders = 0;
		self.failure = Some(message.to_string());
	}

	fn clear(&mut self) {
		self.placeholders = 0;
		self.cards.clear();
		self.empty = false;
	}

	fn append(&mut self, batch: &[VehicleRecord]) {
		self.cards.extend_from_slice(batch);
	}

	fn show_empty(&mut self) {
		self.empty = true;
	}

	fn set_result_count(&mut self, count: usize) {
		self.count = count;
	}

	fn set_more_available(&mut self, more: bool) {
		self.more = more;
	}

	fn show_model_choices(&mut self, models: Option<&BTreeSet<String>>) {
		self.model_choices = models.map(|models| models.iter().cloned().collect());
	}
}

/// Display form of a single vehicle card.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Card<'a> {
	#[serde(flatten)]
	pub record: &'a VehicleRecord,
	pub title: String,
	pub subtitle: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub logo: Option<&'a str>,
	pub new_arrival: bool,
	pub favorite: bool,
}

impl<'a> Card<'a> {
	#[must_use]
	pub fn new(
		record: &'a VehicleRecord,
		logos: &'a BrandLogos,
		favorites: &BTreeSet<String>,
		today: NaiveDate,
	) -> Self {
		Self {
			record,
			title: record.title(),
			subtitle: record.subtitle(),
			logo: logos.logo_for(&record.brand),
			new_arrival: record.is_new_arrival(today),
			favorite: favorites.contains(&record.id),
		}
	}

	/// One aligned terminal line for the card.
	#[must_use]
	pub fn line(&self) -> String {
		let mark = if self.favorite { FAVORITE_MARK } else { " " };
		let price = if self.record.price_monthly > 0 {
			format!("{}/mo", self.record.price_monthly)
		} else {
			"price on request".to_string()
		};
		let mut line = format!(
			"{mark} {} {} {price}",
			pad(&self.title, TITLE_COLUMN),
			pad(&self.subtitle, SUBTITLE_COLUMN),
		);
		if self.new_arrival {
			line.push_str("  [");
			line.push_str(NEW_BADGE);
			line.push(']');
		}
		line
	}
}

/// Truncate or pad `text` to exactly `width` terminal columns.
fn pad(text: &str, width: usize) -> String {
	if UnicodeWidthStr::width(text) <= width {
		let fill = width - UnicodeWidthStr::width(text);
		return format!("{text}{}", " ".repeat(fill));
	}

	let mut out = String::new();
	let mut used = 0;
	for ch in text.chars() {
		let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
		if used + ch_width + 1 > width {
			break;
		}
		out.push(ch);
		used += ch_width;
	}
	out.push('…');
	used += 1;
	out.push_str(&" ".repeat(width.saturating_sub(used)));
	out
}
