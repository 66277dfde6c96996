use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::components::connections::Connection;
use crate::error::QueryError;
use crate::i18n::Locale;

const PROFILE_BASE_URL: &str = "https://lobbywatch.ch";

/// A person as listed for the article lookup. Matching only needs the full name.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct PersonSummary {
	pub id: String,
	pub name: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ArticlePeople {
	#[serde(default)]
	pub parliamentarians: Vec<PersonSummary>,
	#[serde(default)]
	pub guests: Vec<PersonSummary>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Party {
	pub abbr: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct PartyMembership {
	pub party: Party,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parliamentarian {
	pub id: String,
	pub name: String,
	pub first_name: String,
	pub last_name: String,
	#[serde(default)]
	pub portrait: Option<String>,
	/// `NR` or `SR`
	#[serde(default)]
	pub council: Option<String>,
	/// `M` or `F`
	#[serde(default)]
	pub gender: Option<String>,
	#[serde(default)]
	pub party_membership: Option<PartyMembership>,
	#[serde(default)]
	pub canton: Option<String>,
	#[serde(default)]
	pub connections: Vec<Connection>,
}

impl Parliamentarian {
	/// Message key for the council seat, e.g. `Detail/NR-F`.
	pub fn role_key(&self) -> Option<String> {
		match (&self.council, &self.gender) {
			(Some(council), Some(gender)) => Some(format!("Detail/{council}-{gender}")),
			_ => None,
		}
	}

	pub fn party_abbr(&self) -> Option<&str> {
		self.party_membership.as_ref().map(|m| m.party.abbr.as_str())
	}
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guest {
	pub id: String,
	pub name: String,
	pub first_name: String,
	pub last_name: String,
	#[serde(default)]
	pub function: Option<String>,
	/// Name of the inviting parliamentarian
	#[serde(default)]
	pub parliamentarian: Option<String>,
	#[serde(default)]
	pub connections: Vec<Connection>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PersonKind {
	Parliamentarian,
	Guest,
}

impl PersonKind {
	fn path_segment(self) -> &'static str {
		match self {
			PersonKind::Parliamentarian => "parlamentarier",
			PersonKind::Guest => "zutrittsberechtigter",
		}
	}
}

/// Link to the person's public record on lobbywatch.ch.
///
/// Record ids look like `Parliamentarian-123`; only the number goes in the URL.
/// Every path segment is percent-encoded.
pub fn profile_url(
	locale: Locale,
	kind: PersonKind,
	id: &str,
	first_name: &str,
	last_name: &str,
) -> Option<String> {
	let number = id.rsplit_once('-').map_or(id, |(_, n)| n);
	let name = format!("{first_name} {last_name}");
	let mut url = Url::parse(PROFILE_BASE_URL).ok()?;
	url.path_segments_mut().ok()?.clear().extend([
		locale.code(),
		"daten",
		kind.path_segment(),
		number,
		name.as_str(),
	]);
	Some(url.to_string())
}

/// Outgoing GraphQL request body.
#[derive(Debug, Serialize)]
pub struct GraphQlRequest<'a, V> {
	pub query: &'a str,
	pub variables: V,
}

#[derive(Debug, Serialize)]
pub struct LocaleVariables {
	pub locale: Locale,
}

#[derive(Debug, Serialize)]
pub struct PersonVariables<'a> {
	pub locale: Locale,
	pub id: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct GraphQlError {
	pub message: String,
}

/// GraphQL response envelope.
#[derive(Debug, Deserialize)]
pub struct GraphQlResponse<T> {
	pub data: Option<T>,
	#[serde(default)]
	pub errors: Vec<GraphQlError>,
}

impl<T> GraphQlResponse<T> {
	/// Errors take precedence over partial data.
	pub fn into_result(self) -> Result<T, QueryError> {
		if !self.errors.is_empty() {
			return Err(QueryError::GraphQl(
				self.errors.into_iter().map(|e| e.message).collect(),
			));
		}
		self.data.ok_or(QueryError::MissingData)
	}
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParliamentarianData {
	pub get_parliamentarian: Option<Parliamentarian>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestData {
	pub get_guest: Option<Guest>,
}
