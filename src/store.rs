//! Persisted client state: theme, recent searches and favorite vehicles.

use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

/// Number of recent searches kept.
pub const HISTORY_LIMIT: usize = 5;

#[derive(Debug, Error)]
pub enum StoreError {
	#[error("failed to write {path}: {source}")]
	Write {
		path: String,
		#[source]
		source: io::Error,
	},

	#[error("failed to encode client state: {0}")]
	Encode(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
	#[default]
	Light,
	Dark,
}

impl Theme {
	#[must_use]
	pub fn toggled(self) -> Self {
		match self {
			Self::Light => Self::Dark,
			Self::Dark => Self::Light,
		}
	}

	#[must_use]
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Light => "light",
			Self::Dark => "dark",
		}
	}
}

/// The stored document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClientState {
	pub theme: Theme,
	pub search_history: Vec<String>,
	pub favorites: BTreeSet<String>,
}

impl ClientState {
	/// Record `term` as the most recent search.
	///
	/// Blank terms are ignored and a repeated term moves to the front.
	pub fn remember_search(&mut self, term: &str) {
		let term = term.trim();
		if term.is_empty() {
			return;
		}
		self.search_history.retain(|existing| existing != term);
		self.search_history.insert(0, term.to_string());
		self.search_history.truncate(HISTORY_LIMIT);
	}

	/// Toggle `id` in the favorites. Returns whether it is a favorite afterwards.
	pub fn toggle_favorite(&mut self, id: &str) -> bool {
		if self.favorites.remove(id) {
			return false;
		}
		self.favorites.insert(id.to_string());
		true
	}
}

/// Reads and writes a [`ClientState`] at a fixed path.
#[derive(Debug, Clone)]
pub struct ClientStore {
	path: PathBuf,
}

impl ClientStore {
	#[must_use]
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	#[must_use]
	pub fn path(&self) -> &Path {
		&self.path
	}

	/// Read the stored state. A missing or unreadable document yields the default.
	#[must_use]
	pub fn load(&self) -> ClientState {
		let text = match fs::read_to_string(&self.path) {
			Ok(text) => text,
			Err(err) if err.kind() == io::ErrorKind::NotFound => {
				debug!(path = %self.path.display(), "no client state yet");
				return ClientState::default();
			}
			Err(err) => {
				warn!(path = %self.path.display(), error = %err, "ignoring unreadable client state");
				return ClientState::default();
			}
		};

		serde_json::from_str(&text).unwrap_or_else(|err| {
			warn!(path = %self.path.display(), error = %err, "ignoring malformed client state");
			ClientState::default()
		})
	}

	pub fn save(&self, state: &ClientState) -> Result<(), StoreError> {
		let text = serde_json::to_string_pretty(state)?;
		if let Some(parent) = self.path.parent() {
			fs::create_dir_all(parent).map_err(|source| self.write_error(source))?;
		}
		fs::write(&self.path, text).map_err(|source| self.write_error(source))
	}

	/// Load, apply `change`, and save.
	pub fn update<T>(&self, change: impl FnOnce(&mut ClientState) -> T) -> Result<T, StoreError> {
		let mut state = self.load();
		let outcome = change(&mut state);
		self.save(&state)?;
		Ok(outcome)
	}

	fn write_error(&self, source: io::Error) -> StoreError {
		StoreError::Write {
			path: self.path.display().to_string(),
			source,
		}
	}
}
