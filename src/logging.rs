//! Structured logging for the `trimshop` binary.
//!
//! Log lines go to stderr so that plain and JSON results on stdout stay
//! machine readable.

use std::io;
use std::sync::Once;

use clap::ValueEnum;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Variable holding the log filter directives, e.g. `trimshop_catalog=debug`.
pub const LOG_ENV: &str = "TRIMSHOP_LOG";

const DEFAULT_DIRECTIVES: &str = "warn";

static INIT: Once = Once::new();

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
	#[default]
	Pretty,
	Json,
}

/// Install the global subscriber. Later calls are no-ops.
pub fn initialize(format: LogFormat) {
	INIT.call_once(|| {
		let filter =
			EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));
		let registry = tracing_subscriber::registry().with(filter);

		let installed = match format {
			LogFormat::Pretty => registry
				.with(fmt::layer().with_writer(io::stderr).with_target(false))
				.try_init(),
			LogFormat::Json => registry
				.with(fmt::layer().json().with_writer(io::stderr))
				.try_init(),
		};
		if let Err(err) = installed {
			eprintln!("trimshop: logging disabled ({err})");
		}
	});
}
