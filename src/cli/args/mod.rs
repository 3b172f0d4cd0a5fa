mod command;
mod definitions;
mod options;
mod styles;


pub(crate) use command::parse_cli;
pub(crate) use definitions::{
	BrowseArgs, CliArgs, Command, ContactArgs, FacetsArgs, FavoritesArgs, SearchArgs, ThemeArgs,
};
pub(crate) use options::OutputFormat;
