use clap::ValueEnum;
use trimshop_catalog::TableDialect;

/// Table dialects selectable from the CLI.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum DialectArg {
	Simple,
	Quoted,
}

impl DialectArg {
	pub(crate) fn dialect(self) -> TableDialect {
		match self {
			DialectArg::Simple => TableDialect::Simple,
			DialectArg::Quoted => TableDialect::Quoted,
		}
	}
}

/// Output formats supported by the CLI utility.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
	Plain,
	Json,
}
