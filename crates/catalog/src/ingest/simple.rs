use tracing::debug;

use super::table_lines;
use crate::types::{DEFAULT_YEAR, VehicleRecord};

const HEADER_TOKEN: &str = "brand";

/// Parse a plain comma-separated table of `brand, model[, year, ...]` rows.
///
/// The first row is treated as a header when its first cell mentions
/// "brand". Rows with fewer than two columns or a blank brand/model are
/// dropped. Ids are `csv-{n}` where `n` counts data rows, dropped or not.
#[must_use]
pub fn ingest_delimited(text: &str) -> Vec<VehicleRecord> {
	let mut lines = table_lines(text).peekable();
	if lines.peek().is_some_and(|first| is_header(first)) {
		lines.next();
	}

	let mut records = Vec::new();
	let mut dropped = 0usize;
	for (index, line) in lines.enumerate() {
		match parse_row(index, line) {
			Some(record) => records.push(record),
			None => dropped += 1,
		}
	}

	if dropped > 0 {
		debug!(dropped, kept = records.len(), "skipped malformed catalog rows");
	}
	records
}

fn is_header(line: &str) -> bool {
	line.split(',')
		.next()
		.is_some_and(|cell| cell.to_ascii_lowercase().contains(HEADER_TOKEN))
}

fn parse_row(index: usize, line: &str) -> Option<VehicleRecord> {
	let columns: Vec<&str> = line.split(',').map(str::trim).collect();
	if columns.len() < 2 {
		return None;
	}
	let year = columns
		.get(2)
		.filter(|year| !year.is_empty())
		.copied()
		.unwrap_or(DEFAULT_YEAR);
	VehicleRecord::new(format!("csv-{index}"), columns[0], columns[1], year)
}
