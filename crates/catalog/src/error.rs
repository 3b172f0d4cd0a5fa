use thiserror::Error;

/// Reasons a catalog could not be loaded.
///
/// The display text is shown verbatim in the "unable to load" state, so the
/// messages stay short and user facing.
#[derive(Debug, Error)]
pub enum LoadError {
	/// The source could not be read or fetched.
	#[error("unable to read {origin}: {reason}")]
	Unavailable { origin: String, reason: String },

	/// The source answered but the request was not successful.
	#[error("failed to load vehicle data from {origin} (status {status})")]
	Status { origin: String, status: u16 },

	/// Embedded data was present but is not a JSON array of vehicle objects.
	#[error("failed to decode vehicle data from {origin}: {source}")]
	Decode {
		origin: String,
		#[source]
		source: serde_json::Error,
	},

	/// No source was configured at all.
	#[error("no vehicle data source is configured")]
	MissingSource,
}

impl LoadError {
	pub fn unavailable(origin: impl Into<String>, reason: impl ToString) -> Self {
		Self::Unavailable {
			origin: origin.into(),
			reason: reason.to_string(),
		}
	}
}
