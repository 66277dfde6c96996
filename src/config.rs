//! Widget configuration and site detection.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::i18n::Locale;

pub const DEFAULT_API_URL: &str = "https://api.lobbywatch.ch/graphql";
/// Build-time override of the query endpoint.
const API_URL_OVERRIDE: Option<&str> = option_env!("LOBBYWATCH_API_URL");
pub const DEFAULT_CONTENT_SELECTOR: &str = "article";
pub const DEFAULT_MAX_GROUPS: usize = 5;

/// Publication hosting the widget. Decides locale and styling.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Site {
	/// German-language partner sites
	#[default]
	Default,
	/// Radio Télévision Suisse, French with its own styling
	Rts,
}

impl Site {
	/// `Rts` for rts.ch hosts, `Default` otherwise.
	pub fn from_hostname(hostname: &str) -> Self {
		if hostname.ends_with("rts.ch") {
			Site::Rts
		} else {
			Site::Default
		}
	}

	/// Locale the site publishes in.
	pub fn locale(self) -> Locale {
		match self {
			Site::Rts => Locale::Fr,
			Site::Default => Locale::De,
		}
	}
}

/// Settings for one widget instance.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
	/// GraphQL endpoint of the query service
	pub api_url: String,
	/// Host publication
	pub site: Site,
	/// Derived from `site` when not set
	pub locale: Option<Locale>,
	/// CSS selector of the element holding the article text
	pub content_selector: String,
	/// Category groups shown before the rest folds into the overflow group
	pub max_groups: usize,
}

impl Default for WidgetConfig {
	fn default() -> Self {
		Self {
			api_url: API_URL_OVERRIDE.unwrap_or(DEFAULT_API_URL).to_string(),
			site: Site::Default,
			locale: None,
			content_selector: DEFAULT_CONTENT_SELECTOR.to_string(),
			max_groups: DEFAULT_MAX_GROUPS,
		}
	}
}

impl WidgetConfig {
	/// Defaults for the site serving `hostname`.
	pub fn from_hostname(hostname: &str) -> Self {
		Self {
			site: Site::from_hostname(hostname),
			..Self::default()
		}
	}

	/// Parse a JSON config from the embedding page. Omitted fields take defaults.
	pub fn from_json(json: &str) -> Result<Self, ConfigError> {
		let config: Self = serde_json::from_str(json)?;
		config.validate()?;
		Ok(config)
	}

	/// Reject empty endpoints and selectors and a zero group limit.
	pub fn validate(&self) -> Result<(), ConfigError> {
		if self.api_url.trim().is_empty() {
			return Err(ConfigError::Invalid("api_url must not be empty".into()));
		}
		if self.content_selector.trim().is_empty() {
			return Err(ConfigError::Invalid(
				"content_selector must not be empty".into(),
			));
		}
		if self.max_groups == 0 {
			return Err(ConfigError::Invalid(
				"max_groups must be greater than 0".into(),
			));
		}
		Ok(())
	}

	/// Configured locale, or the site's.
	pub fn locale(&self) -> Locale {
		self.locale.unwrap_or_else(|| self.site.locale())
	}
}
