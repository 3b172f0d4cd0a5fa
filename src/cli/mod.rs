mod args;
mod output;

pub(crate) use args::{
	BrowseArgs, CliArgs, Command, ContactArgs, FacetsArgs, FavoritesArgs, OutputFormat, SearchArgs,
	ThemeArgs, parse_cli,
};
pub(crate) use output::{print_json, print_plain};
