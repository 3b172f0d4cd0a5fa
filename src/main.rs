mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use cli::{OutputFormat, parse_cli, print_json, print_plain};
use settings::ResolvedConfig;
use trimshop::logging;
use workflow::CatalogWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();
	logging::initialize(cli.log_format);

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	run_command(&cli, resolved)
}

/// Execute the selected command and print its report in the chosen format.
fn run_command(cli: &cli::CliArgs, settings: ResolvedConfig) -> Result<()> {
	let workflow = CatalogWorkflow::from_config(settings);
	let report = workflow.run(&cli.command)?;

	match cli.output {
		OutputFormat::Plain => print_plain(report.lines()),
		OutputFormat::Json => print_json(report.json())?,
	}

	Ok(())
}
