use std::fmt;

use serde::{Deserialize, Deserializer};

/// What a connection points at. Decoded from the GraphQL `__typename`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(tag = "__typename")]
pub enum ConnectionTarget {
	/// A company, association or foundation
	Organisation {
		/// Display name
		#[serde(default)]
		name: String,
	},
	/// Any target type this widget does not render
	#[default]
	#[serde(other)]
	Other,
}

impl ConnectionTarget {
	/// Organisation name; empty for unknown targets.
	pub fn name(&self) -> &str {
		match self {
			ConnectionTarget::Organisation { name } => name,
			ConnectionTarget::Other => "",
		}
	}
}

/// The person an indirect connection runs through.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(tag = "__typename")]
pub enum Intermediary {
	/// An invited guest
	Guest {
		/// Full name
		#[serde(default)]
		name: String,
	},
	/// Another parliamentarian
	Parliamentarian {
		/// Full name
		#[serde(default)]
		name: String,
	},
	/// Unknown person type
	#[serde(other)]
	Other,
}

/// One tie between a person and an organisation.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Connection {
	/// Category, e.g. the organisation's sector
	#[serde(default)]
	pub group: Option<String>,
	/// Role held in the organisation
	#[serde(default)]
	pub function: Option<String>,
	/// Set when the tie runs through another person
	#[serde(default)]
	pub via: Option<Intermediary>,
	/// Organisation at the other end
	#[serde(default, deserialize_with = "null_as_other")]
	pub to: ConnectionTarget,
}

fn null_as_other<'de, D>(deserializer: D) -> Result<ConnectionTarget, D::Error>
where
	D: Deserializer<'de>,
{
	Ok(Option::<ConnectionTarget>::deserialize(deserializer)?.unwrap_or_default())
}

impl Connection {
	/// Connection to a named organisation, tagged with `group`.
	pub fn to_organisation(group: Option<&str>, name: &str) -> Self {
		Self {
			group: group.map(str::to_string),
			function: None,
			via: None,
			to: ConnectionTarget::Organisation {
				name: name.to_string(),
			},
		}
	}

	/// No intermediary.
	pub fn is_direct(&self) -> bool {
		self.via.is_none()
	}

	/// Category key; an empty string counts as no category.
	pub fn category(&self) -> Option<&str> {
		self.group.as_deref().filter(|g| !g.is_empty())
	}
}

/// Connections not running through an intermediary.
pub fn direct_connections(connections: &[Connection]) -> Vec<Connection> {
	connections.iter().filter(|c| c.is_direct()).cloned().collect()
}

/// Identity of a summarized group.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum GroupKey {
	/// Connections sharing this category
	Category(String),
	/// Uncategorized connections and folded categories
	Overflow,
}

impl fmt::Display for GroupKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			GroupKey::Category(name) => f.write_str(name),
			GroupKey::Overflow => f.write_str("$more$"),
		}
	}
}

/// A summarized group of connections.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Group {
	/// Category or overflow
	pub key: GroupKey,
	/// Members in input order
	pub members: Vec<Connection>,
}

impl Group {
	/// Member count.
	pub fn len(&self) -> usize {
		self.members.len()
	}

	/// True without members.
	pub fn is_empty(&self) -> bool {
		self.members.is_empty()
	}

	/// True for the trailing overflow group.
	pub fn is_overflow(&self) -> bool {
		self.key == GroupKey::Overflow
	}

	/// Single-member groups are always shown open.
	pub fn is_toggleable(&self) -> bool {
		self.members.len() != 1
	}

	/// Organisation names of the members, in order.
	pub fn target_names(&self) -> Vec<&str> {
		self.members.iter().map(|c| c.to.name()).collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn decodes_organisation_target() {
		let c: Connection = serde_json::from_str(
			r#"{"group": "Gesundheit", "function": "Beirat", "via": null,
			    "to": {"__typename": "Organisation", "name": "Santésuisse"}}"#,
		)
		.unwrap();
		assert_eq!(c.category(), Some("Gesundheit"));
		assert_eq!(c.to.name(), "Santésuisse");
		assert!(c.is_direct());
	}

	#[test]
	fn unknown_or_null_target_is_other() {
		let c: Connection =
			serde_json::from_str(r#"{"to": {"__typename": "Parliamentarian", "name": "X"}}"#).unwrap();
		assert_eq!(c.to, ConnectionTarget::Other);

		let c: Connection = serde_json::from_str(r#"{"group": null, "to": null}"#).unwrap();
		assert_eq!(c.to, ConnectionTarget::Other);
		assert_eq!(c.category(), None);
	}

	#[test]
	fn via_guest_is_indirect() {
		let c: Connection = serde_json::from_str(
			r#"{"via": {"__typename": "Guest", "name": "Hans Muster"},
			    "to": {"__typename": "Organisation", "name": "Pharma AG"}}"#,
		)
		.unwrap();
		assert_eq!(
			c.via,
			Some(Intermediary::Guest {
				name: "Hans Muster".into()
			})
		);
		assert!(direct_connections(&[c]).is_empty());
	}

	#[test]
	fn empty_group_counts_as_uncategorized() {
		let c = Connection::to_organisation(Some(""), "Verein");
		assert_eq!(c.category(), None);
	}

	#[test]
	fn singleton_is_not_toggleable() {
		let group = Group {
			key: GroupKey::Category("A".into()),
			members: vec![Connection::to_organisation(Some("A"), "One")],
		};
		assert!(!group.is_toggleable());
		assert_eq!(group.target_names(), vec!["One"]);
	}
}
