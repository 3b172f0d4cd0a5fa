use std::collections::BTreeMap;

use serde::Deserialize;
use trimshop::view::BrandLogos;

use super::super::util::{non_blank, sanitize_logos};

/// Brand logo locations as they are read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct BrandsSection {
	pub(super) logos: BTreeMap<String, String>,
	pub(super) fallback_logo: Option<String>,
}

impl BrandsSection {
	pub(super) fn resolve(self) -> BrandLogos {
		BrandLogos::new(sanitize_logos(self.logos), non_blank(self.fallback_logo))
	}
}
