use trimshop_catalog::ShuffleOrder;

use super::ResolvedConfig;

pub(super) fn print_summary(config: &ResolvedConfig) {
	for line in summary_lines(config) {
		println!("{line}");
	}
}

fn summary_lines(config: &ResolvedConfig) -> Vec<String> {
	let catalog = &config.catalog;
	let contact = &config.contact;
	let mut lines = vec!["Effective configuration:".to_string()];

	match &catalog.embedded {
		Some(path) => lines.push(format!("  Embedded data: {}", path.display())),
		None => lines.push("  Embedded data: (none)".to_string()),
	}
	lines.push(format!("  Table: {}", catalog.table));
	lines.push(format!("  Dialect: {}", catalog.dialect.as_str()));
	lines.push(format!("  Batch size: {}", catalog.batch_size));
	lines.push(format!(
		"  Shuffle: {}",
		match catalog.shuffle {
			ShuffleOrder::Preserve => bool_to_word(false).to_string(),
			ShuffleOrder::Uniform => bool_to_word(true).to_string(),
			ShuffleOrder::Seeded(seed) => format!("{} (seed {seed})", bool_to_word(true)),
		}
	));
	lines.push(format!("  Contact channel: {}", contact.channel.as_str()));
	lines.push(format!(
		"  Webhook URL: {}",
		contact.webhook_url.as_deref().unwrap_or("(not set)")
	));
	lines.push(format!(
		"  WhatsApp number: {}",
		contact.whatsapp_number.as_deref().unwrap_or("(not set)")
	));
	lines.push(format!("  Submission source: {}", contact.source));
	lines.push(format!(
		"  Brand logos: {} (fallback: {})",
		config.logos.len(),
		config.logos.fallback().unwrap_or("none")
	));
	lines.push(format!("  State file: {}", config.state_file.display()));
	lines
}

fn bool_to_word(value: bool) -> &'static str {
	if value { "yes" } else { "no" }
}
