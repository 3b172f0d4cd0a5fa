//! Turn raw catalog sources into normalized [`VehicleRecord`]s.
//!
//! Every entry point preserves source order; shuffling is a separate step
//! applied by [`ShuffleOrder::apply`] once the records are loaded.

mod embedded;
mod quoted;
mod shuffle;
mod simple;

use std::collections::HashSet;

use serde::Deserialize;

use crate::types::VehicleRecord;

pub use embedded::{ingest_embedded, parse_embedded};
pub use quoted::{ingest_quoted, split_quoted_row};
pub use shuffle::ShuffleOrder;
pub use simple::ingest_delimited;

/// How a delimited table should be parsed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableDialect {
	/// Plain comma splitting with optional header detection.
	#[default]
	Simple,
	/// Quote-aware splitting with a mandatory header row.
	Quoted,
}

impl TableDialect {
	#[must_use]
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Simple => "simple",
			Self::Quoted => "quoted",
		}
	}
}

/// Parse `text` with the given dialect.
#[must_use]
pub fn ingest_table(text: &str, dialect: TableDialect) -> Vec<VehicleRecord> {
	match dialect {
		TableDialect::Simple => ingest_delimited(text),
		TableDialect::Quoted => ingest_quoted(text),
	}
}

/// Non-blank lines of a table, with surrounding whitespace and `\r` removed.
pub(crate) fn table_lines(text: &str) -> impl Iterator<Item = &str> {
	text.lines().map(str::trim).filter(|line| !line.is_empty())
}

/// Hands out record ids, suffixing repeats so every id stays unique.
#[derive(Debug, Default)]
pub(crate) struct IdAllocator {
	taken: HashSet<String>,
}

impl IdAllocator {
	pub(crate) fn claim(&mut self, candidate: String) -> String {
		if self.taken.insert(candidate.clone()) {
			return candidate;
		}
		let mut suffix = 2usize;
		loop {
			let attempt = format!("{candidate}-{suffix}");
			if self.taken.insert(attempt.clone()) {
				return attempt;
			}
			suffix += 1;
		}
	}
}
