use serde::{Deserialize, Serialize};

/// Kind of destination a shortcut points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShortcutKind {
	Service,
	Page,
}

/// A named link offered by quick search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shortcut {
	pub name: String,
	pub kind: ShortcutKind,
	pub url: String,
}

impl Shortcut {
	#[must_use]
	pub fn new(name: impl Into<String>, kind: ShortcutKind, url: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			kind,
			url: url.into(),
		}
	}
}

/// Services and pages the storefront links to from its header.
#[must_use]
pub fn default_shortcuts() -> Vec<Shortcut> {
	use ShortcutKind::{Page, Service};

	[
		("Leather Restoration", Service, "category.html?q=leather"),
		("Seat Repair", Service, "category.html?q=seat"),
		("Dashboard Restoration", Service, "category.html?q=dashboard"),
		("Custom Stitching", Service, "category.html?q=custom"),
		("Headliner Replacement", Service, "category.html?q=roof"),
		("Contact Us", Page, "#contact"),
		("About Us", Page, "#why-choose-us"),
		("Our Work", Page, "gallery.html"),
	]
	.into_iter()
	.map(|(name, kind, url)| Shortcut::new(name, kind, url))
	.collect()
}
