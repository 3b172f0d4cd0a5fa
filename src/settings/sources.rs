use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use config::{Config, ConfigError, File};
use trimshop::app_dirs;

use crate::cli::CliArgs;

/// Prefix of environment variables read as configuration, e.g.
/// `TRIMSHOP__CATALOG__BATCH_SIZE`.
pub(super) const ENV_PREFIX: &str = "trimshop";

/// Build a [`Config`] instance by combining default locations with CLI overrides.
pub(super) fn build_config(cli: &CliArgs) -> Result<Config> {
	let mut builder = Config::builder();

	if !cli.no_config {
		for path in default_config_files() {
			builder = builder.add_source(File::from(path).required(false));
		}
	}

	for path in &cli.config {
		builder = builder.add_source(File::from(path.clone()).required(true));
	}

	builder = builder.add_source(
		config::Environment::with_prefix(ENV_PREFIX)
			.separator("__")
			.try_parsing(true)
			.list_separator(","),
	);

	builder.build().map_err(|err| match err {
		ConfigError::Frozen => anyhow!("configuration builder is frozen"),
		other => other.into(),
	})
}

/// Discover the default configuration file locations that should be consulted.
pub(super) fn default_config_files() -> Vec<PathBuf> {
	let mut files = Vec::new();

	if let Ok(dir) = app_dirs::get_config_dir() {
		files.push(dir.join("config.toml"));
	}

	if let Ok(current_dir) = env::current_dir() {
		files.push(current_dir.join(".trimshop.toml"));
		files.push(current_dir.join("trimshop.toml"));
	}

	files
}

#[cfg(test)]
mod tests {
	use std::fs;

	use clap::Parser;
	use tempfile::tempdir;

	use super::*;

	#[test]
	fn default_files_include_current_directory_variants() {
		let files = default_config_files();
		assert!(files.iter().any(|path| path.ends_with(".trimshop.toml")));
		assert!(files.iter().any(|path| path.ends_with("trimshop.toml")));
	}

	#[test]
	fn explicit_files_are_merged() {
		let dir = tempdir().unwrap();
		let path = dir.path().join("shop.toml");
		fs::write(&path, "[catalog]\nbatch_size = 20\n").unwrap();

		let cli = CliArgs::parse_from([
			"trimshop",
			"--no-config",
			"--config",
			path.to_str().unwrap(),
			"facets",
		]);
		let config = build_config(&cli).unwrap();
		assert_eq!(config.get_int("catalog.batch_size").unwrap(), 20);
	}

	#[test]
	fn missing_explicit_file_is_an_error() {
		let dir = tempdir().unwrap();
		let path = dir.path().join("absent.toml");
		let cli = CliArgs::parse_from([
			"trimshop",
			"--no-config",
			"--config",
			path.to_str().unwrap(),
			"facets",
		]);
		assert!(build_config(&cli).is_err());
	}
}
