use std::path::PathBuf;

use clap::builder::BoolishValueParser;
use clap::{ArgAction, Args, ColorChoice, Parser, Subcommand};
use trimshop::contact::ContactChannel;
use trimshop::logging::LogFormat;
use trimshop::store::Theme;

use super::options::{DialectArg, OutputFormat};
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `trimshop` binary.
#[derive(Parser, Debug)]
#[command(
	name = "trimshop",
	version,
	long_version = long_version(),
	about = "Browse, filter and search the upholstery shop vehicle catalog",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "TRIMSHOP_CONFIG",
		action = ArgAction::Append,
		global = true,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		global = true,
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'p',
		long = "print-config",
		global = true,
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		global = true,
		default_value_t = OutputFormat::Plain,
		help = "Choose how to print the result"
	)]
	pub(crate) output: OutputFormat,
	#[arg(
		long = "log-format",
		value_enum,
		global = true,
		env = "TRIMSHOP_LOG_FORMAT",
		default_value_t = LogFormat::Pretty,
		help = "Format of diagnostic logs written to stderr"
	)]
	pub(crate) log_format: LogFormat,
	#[arg(
		short = 't',
		long,
		value_name = "PATH|URL",
		global = true,
		help = "Catalog table to load, a file path or http(s) URL (default: DATA/vehicles.csv)"
	)]
	pub(crate) table: Option<String>,
	#[arg(
		long,
		value_name = "FILE",
		global = true,
		help = "JSON array of vehicles consulted before the table (default: none)"
	)]
	pub(crate) embedded: Option<PathBuf>,
	#[arg(
		long,
		value_enum,
		global = true,
		help = "How the table is parsed (default: simple)"
	)]
	pub(crate) dialect: Option<DialectArg>,
	#[arg(
		short = 'b',
		long = "batch-size",
		value_name = "NUM",
		global = true,
		help = "Results appended per render pass (default: 12)"
	)]
	pub(crate) batch_size: Option<usize>,
	#[arg(
		long,
		value_parser = BoolishValueParser::new(),
		global = true,
		help = "Shuffle the catalog after loading (default: enabled)"
	)]
	pub(crate) shuffle: Option<bool>,
	#[arg(
		long,
		value_name = "SEED",
		global = true,
		help = "Seed for a reproducible shuffle (default: random)"
	)]
	pub(crate) seed: Option<u64>,
	#[command(subcommand)]
	pub(crate) command: Command,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Command {
	/// Filter the catalog and print result cards.
	Browse(BrowseArgs),
	/// List brands, models and years available for filtering.
	Facets(FacetsArgs),
	/// Quick search over vehicles and site shortcuts.
	Search(SearchArgs),
	/// Validate and send a contact request.
	Contact(ContactArgs),
	/// Show or change the stored colour theme.
	Theme(ThemeArgs),
	/// List or toggle favorite vehicles.
	Favorites(FavoritesArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct BrowseArgs {
	#[arg(long, value_name = "BRAND", help = "Select a brand")]
	pub(crate) brand: Option<String>,
	#[arg(
		long,
		value_name = "MODEL",
		requires = "brand",
		help = "Select a model of the chosen brand"
	)]
	pub(crate) model: Option<String>,
	#[arg(
		long,
		value_name = "YEAR",
		value_delimiter = ',',
		help = "Select one or more years"
	)]
	pub(crate) year: Vec<String>,
	#[arg(short, long, value_name = "TEXT", help = "Match brand or model text")]
	pub(crate) query: Option<String>,
	#[arg(
		short,
		long,
		value_name = "NUM",
		default_value_t = 0,
		conflicts_with_all = ["all", "page"],
		help = "Extra scroll passes after the first batch"
	)]
	pub(crate) scroll: usize,
	#[arg(short, long, conflicts_with = "page", help = "Render every matching result")]
	pub(crate) all: bool,
	#[arg(
		long,
		value_name = "NUM",
		help = "Show one numbered page instead of scroll batches"
	)]
	pub(crate) page: Option<usize>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct FacetsArgs {
	#[arg(long, value_name = "BRAND", help = "Only list models of this brand")]
	pub(crate) brand: Option<String>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct SearchArgs {
	#[arg(value_name = "QUERY", help = "Search text; omit to list recent searches")]
	pub(crate) query: Option<String>,
	#[arg(long, help = "Do not add the query to the search history")]
	pub(crate) no_history: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ContactArgs {
	#[arg(long, value_name = "NAME")]
	pub(crate) name: String,
	#[arg(long, value_name = "EMAIL")]
	pub(crate) email: String,
	#[arg(long, value_name = "PHONE", default_value = "")]
	pub(crate) phone: String,
	#[arg(long, value_name = "VEHICLE", default_value = "")]
	pub(crate) vehicle: String,
	#[arg(long, value_name = "TEXT")]
	pub(crate) message: String,
	#[arg(long = "attach", value_name = "FILE", help = "Photo or document to send along")]
	pub(crate) attachment: Option<PathBuf>,
	#[arg(long, value_enum, help = "Delivery channel (default: configured channel)")]
	pub(crate) channel: Option<ContactChannel>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ThemeArgs {
	#[arg(value_enum, value_name = "THEME", conflicts_with = "toggle")]
	pub(crate) set: Option<Theme>,
	#[arg(long, help = "Switch between light and dark")]
	pub(crate) toggle: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct FavoritesArgs {
	#[arg(long, value_name = "ID", help = "Add or remove a vehicle id")]
	pub(crate) toggle: Vec<String>,
}
