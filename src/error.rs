//! Error types for the widget.

use thiserror::Error;

use crate::i18n::Locale;

/// Errors surfaced by the query service client.
///
/// Payloads are plain strings so results stay `Clone` inside Leptos resources.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
	/// The request never produced a response
	#[error("Network error: {0}")]
	Transport(String),

	/// The server answered with a non-success status
	#[error("Server responded with status {0}")]
	Status(u16),

	/// The response body was not the expected JSON
	#[error("Invalid response: {0}")]
	Decode(String),

	/// The GraphQL layer reported errors
	#[error("Query failed: {}", .0.join("; "))]
	GraphQl(Vec<String>),

	/// Neither data nor errors in the response
	#[error("Response contained no data")]
	MissingData,

	/// The requested record does not exist
	#[error("No record found for {0}")]
	NotFound(String),
}

impl From<reqwest::Error> for QueryError {
	fn from(e: reqwest::Error) -> Self {
		if e.is_decode() {
			QueryError::Decode(e.to_string())
		} else if let Some(status) = e.status() {
			QueryError::Status(status.as_u16())
		} else {
			QueryError::Transport(e.to_string())
		}
	}
}

impl From<serde_json::Error> for QueryError {
	fn from(e: serde_json::Error) -> Self {
		QueryError::Decode(e.to_string())
	}
}

/// A translation key with no entry in the message table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Missing translation for '{key}' ({locale})")]
pub struct MissingTranslationError {
	pub key: String,
	pub locale: Locale,
}

/// Widget configuration errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
	/// Not valid JSON, or wrong field types
	#[error("Failed to parse config: {0}")]
	Parse(String),

	/// Parsed, but a value is out of range
	#[error("Invalid config: {0}")]
	Invalid(String),
}

impl From<serde_json::Error> for ConfigError {
	fn from(e: serde_json::Error) -> Self {
		ConfigError::Parse(e.to_string())
	}
}

/// Failures while attaching the widget to the host page.
#[derive(Error, Debug)]
pub enum MountError {
	#[error("No browser window available")]
	NoWindow,

	#[error("No element matches '{0}'")]
	NoTarget(String),

	#[error("DOM operation failed: {0}")]
	Dom(String),

	#[error(transparent)]
	Config(#[from] ConfigError),
}
