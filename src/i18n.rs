//! Message lookup for the two supported locales.

use std::fmt;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::MissingTranslationError;

/// Supported UI locales. Serialized the way the query service expects them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
	/// German
	#[default]
	De,
	/// French
	Fr,
}

impl Locale {
	/// Two-letter language code.
	pub fn code(self) -> &'static str {
		match self {
			Locale::De => "de",
			Locale::Fr => "fr",
		}
	}
}

impl fmt::Display for Locale {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.code())
	}
}

struct Message {
	key: &'static str,
	de: &'static str,
	fr: &'static str,
}

const MESSAGES: &[Message] = &[
	Message {
		key: "loading",
		de: "Lädt...",
		fr: "charger...",
	},
	Message {
		key: "title",
		de: "Lobbywatch",
		fr: "Lobbywatch",
	},
	Message {
		key: "List/parliamentarians",
		de: "Parlamentarier",
		fr: "Parlementaires",
	},
	Message {
		key: "List/guests",
		de: "Zutrittsberechtigte",
		fr: "Personnes avec droit d'accès",
	},
	Message {
		key: "Disclosure/none",
		de: "In diesem Artikel kommen keine Parlamentarier vor.",
		fr: "Aucun parlementaire n'apparaît dans cet article.",
	},
	Message {
		key: "Connections/none",
		de: "Keine Interessenbindungen erfasst.",
		fr: "Aucun lien d'intérêts enregistré.",
	},
	Message {
		key: "Connections/more/singular",
		de: "weitere Verbindung",
		fr: "autre lien",
	},
	Message {
		key: "Connections/more/plural",
		de: "weitere Verbindungen",
		fr: "autres liens",
	},
	Message {
		key: "Detail/directConnections",
		de: "Direkte Interessenbindungen:",
		fr: "Liens d'intérêts directs:",
	},
	Message {
		key: "Detail/invited-by",
		de: "eingeladen von",
		fr: "invité par",
	},
	Message {
		key: "Detail/link",
		de: "Mehr auf Lobbywatch.ch",
		fr: "Plus sur Lobbywatch.ch",
	},
	Message {
		key: "Detail/NR-M",
		de: "Nationalrat",
		fr: "Le Conseiller national",
	},
	Message {
		key: "Detail/NR-F",
		de: "Nationalrätin",
		fr: "La Conseillère nationale",
	},
	Message {
		key: "Detail/SR-M",
		de: "Ständerat",
		fr: "Le Conseiller aux Etats",
	},
	Message {
		key: "Detail/SR-F",
		de: "Ständerätin",
		fr: "La Conseillère aux Etats",
	},
];

/// Look up `key` for `locale`.
pub fn translate(key: &str, locale: Locale) -> Result<&'static str, MissingTranslationError> {
	MESSAGES
		.iter()
		.find(|m| m.key == key)
		.map(|m| match locale {
			Locale::De => m.de,
			Locale::Fr => m.fr,
		})
		.ok_or_else(|| MissingTranslationError {
			key: key.to_string(),
			locale,
		})
}

/// Lookup for views: a missing key is logged and rendered as the key itself.
pub fn t(key: &str, locale: Locale) -> String {
	match translate(key, locale) {
		Ok(text) => text.to_string(),
		Err(e) => {
			warn!("{e}");
			key.to_string()
		}
	}
}
