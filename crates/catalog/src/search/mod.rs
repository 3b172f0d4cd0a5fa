//! Header quick search over the catalog and the site shortcuts.

mod shortcuts;

use std::collections::HashSet;

use frizbee::{Config, match_list};
use serde::Serialize;

use crate::types::VehicleRecord;

pub use shortcuts::{Shortcut, ShortcutKind, default_shortcuts};

/// Entries returned per section.
pub const QUICK_LIMIT: usize = 3;

/// What the quick-search dropdown shows for a query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase", tag = "kind")]
pub enum QuickResults {
	/// The query was blank; show recent searches instead.
	History { entries: Vec<String> },
	Matches {
		vehicles: Vec<VehicleRecord>,
		shortcuts: Vec<Shortcut>,
	},
}

impl QuickResults {
	#[must_use]
	pub fn is_empty(&self) -> bool {
		match self {
			Self::History { entries } => entries.is_empty(),
			Self::Matches {
				vehicles,
				shortcuts,
			} => vehicles.is_empty() && shortcuts.is_empty(),
		}
	}
}

/// Quick search over a fixed shortcut list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickSearch {
	shortcuts: Vec<Shortcut>,
}

impl Default for QuickSearch {
	fn default() -> Self {
		Self::new(default_shortcuts())
	}
}

impl QuickSearch {
	#[must_use]
	pub fn new(shortcuts: Vec<Shortcut>) -> Self {
		Self { shortcuts }
	}

	/// Run `query` against `catalog`, falling back to `history` when blank.
	#[must_use]
	pub fn run(&self, query: &str, catalog: &[VehicleRecord], history: &[String]) -> QuickResults {
		let trimmed = query.trim();
		if trimmed.is_empty() {
			return QuickResults::History {
				entries: history.to_vec(),
			};
		}

		QuickResults::Matches {
			vehicles: rank_vehicles(trimmed, catalog),
			shortcuts: self.matching_shortcuts(trimmed),
		}
	}

	fn matching_shortcuts(&self, query: &str) -> Vec<Shortcut> {
		let needle = query.to_lowercase();
		self.shortcuts
			.iter()
			.filter(|shortcut| shortcut.name.to_lowercase().contains(&needle))
			.take(QUICK_LIMIT)
			.cloned()
			.collect()
	}
}

/// Tune the matcher for `query`: longer queries tolerate more typos.
#[must_use]
pub fn config_for_query(query: &str) -> Config {
	let length = query.chars().count();
	let mut allowed_typos: u16 = match length {
		0..=2 => 0,
		3..=5 => 1,
		6..=9 => 2,
		_ => 3,
	};
	if let Ok(max_reasonable) = u16::try_from(length.saturating_sub(1)) {
		allowed_typos = allowed_typos.min(max_reasonable);
	}

	Config {
		prefilter: true,
		max_typos: Some(allowed_typos),
		sort: false,
		..Config::default()
	}
}

/// Best-scoring distinct vehicles for `query`, ties kept in catalog order.
fn rank_vehicles(query: &str, catalog: &[VehicleRecord]) -> Vec<VehicleRecord> {
	let labels: Vec<String> = catalog
		.iter()
		.map(|record| format!("{} {}", record.brand, record.model))
		.collect();
	let haystacks: Vec<&str> = labels.iter().map(String::as_str).collect();
	let config = config_for_query(query);

	let mut scored: Vec<(u16, usize)> = match_list(query, &haystacks, &config)
		.into_iter()
		.filter(|entry| entry.score > 0)
		.map(|entry| (entry.score, entry.index as usize))
		.collect();
	scored.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));

	let mut seen = HashSet::new();
	scored
		.into_iter()
		.filter_map(|(_, index)| catalog.get(index))
		.filter(|record| seen.insert(record.listing_key()))
		.take(QUICK_LIMIT)
		.cloned()
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	fn catalog() -> Vec<VehicleRecord> {
		[
			("Toyota", "Corolla", "2020"),
			("Toyota", "Corolla", "2020"),
			("Toyota", "Yaris", "2021"),
			("Honda", "Civic", "2019"),
			("BMW", "X5", "2022"),
		]
		.iter()
		.enumerate()
		.filter_map(|(index, (brand, model, year))| {
			VehicleRecord::new(format!("csv-{index}"), brand, model, *year)
		})
		.collect()
	}

	#[test]
	fn blank_query_returns_history() {
		let history = vec!["corolla".to_string(), "bmw".to_string()];
		let results = QuickSearch::default().run("   ", &catalog(), &history);
		assert_eq!(results, QuickResults::History { entries: history });
	}

	#[test]
	fn vehicles_are_capped_and_distinct() {
		let results = QuickSearch::default().run("toyota", &catalog(), &[]);
		let QuickResults::Matches { vehicles, .. } = results else {
			panic!("expected matches");
		};
		let ids: Vec<_> = vehicles.iter().map(|record| record.id.as_str()).collect();
		assert_eq!(ids.len(), 2);
		assert!(ids.contains(&"csv-0"));
		assert!(ids.contains(&"csv-2"));
		assert!(!ids.contains(&"csv-1"));
	}

	#[test]
	fn shortcuts_match_by_substring() {
		let results = QuickSearch::default().run("RESTOR", &[], &[]);
		let QuickResults::Matches { vehicles, shortcuts } = results else {
			panic!("expected matches");
		};
		assert!(vehicles.is_empty());
		let names: Vec<_> = shortcuts.iter().map(|shortcut| shortcut.name.as_str()).collect();
		assert_eq!(names, vec!["Leather Restoration", "Dashboard Restoration"]);
	}

	#[test]
	fn shortcut_matches_are_capped() {
		let results = QuickSearch::default().run("e", &[], &[]);
		let QuickResults::Matches { shortcuts, .. } = results else {
			panic!("expected matches");
		};
		assert_eq!(shortcuts.len(), QUICK_LIMIT);
	}

	#[test]
	fn unrelated_query_is_empty() {
		let results = QuickSearch::default().run("zzzzqqq", &catalog(), &[]);
		assert!(results.is_empty());
	}

	#[test]
	fn typo_budget_grows_with_length() {
		assert_eq!(config_for_query("ab").max_typos, Some(0));
		assert_eq!(config_for_query("civc").max_typos, Some(1));
		assert_eq!(config_for_query("corrolla").max_typos, Some(2));
	}
}
