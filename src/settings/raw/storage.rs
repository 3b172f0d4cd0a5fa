use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Deserialize;
use trimshop::app_dirs;

/// Client state location as it is read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct StorageSection {
	pub(super) state_file: Option<PathBuf>,
}

impl StorageSection {
	pub(super) fn resolve(self) -> Result<PathBuf> {
		match self.state_file {
			Some(path) if !path.as_os_str().is_empty() => Ok(path),
			_ => app_dirs::default_state_file()
				.context("failed to determine where to store client state"),
		}
	}
}
