use anyhow::Result;
use serde::Serialize;

/// Print each line of a plain-text report.
pub(crate) fn print_plain(lines: &[String]) {
	for line in lines {
		println!("{line}");
	}
}

/// Format a report as pretty JSON.
pub(crate) fn format_json<T: Serialize>(report: &T) -> Result<String> {
	Ok(serde_json::to_string_pretty(report)?)
}

/// Print the JSON representation of a report.
pub(crate) fn print_json<T: Serialize>(report: &T) -> Result<()> {
	println!("{}", format_json(report)?);
	Ok(())
}
