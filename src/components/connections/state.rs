use std::collections::HashMap;

use super::types::{Group, GroupKey};
use crate::i18n::{Locale, t};

/// Expand/collapse flags for one rendered connection list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToggleState {
	expanded: HashMap<GroupKey, bool>,
}

impl ToggleState {
	pub fn is_expanded(&self, key: &GroupKey) -> bool {
		self.expanded.get(key).copied().unwrap_or(false)
	}

	pub fn toggle(&mut self, key: &GroupKey) {
		let next = !self.is_expanded(key);
		self.expanded.insert(key.clone(), next);
	}
}

/// How a group renders given the current toggle state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GroupDisplay {
	/// One member: its name, always visible, no count
	Single {
		name: String,
		category: Option<String>,
	},
	/// Count label plus an ellipsized one-line list
	Collapsed { label: String, summary: String },
	/// Count label plus one name per line
	Expanded { label: String, names: Vec<String> },
}

impl GroupDisplay {
	pub fn for_group(group: &Group, state: &ToggleState, locale: Locale) -> Self {
		let names: Vec<String> = group.target_names().into_iter().map(str::to_string).collect();
		if !group.is_toggleable() {
			let category = match &group.key {
				GroupKey::Category(name) => Some(name.clone()),
				GroupKey::Overflow => None,
			};
			return GroupDisplay::Single {
				name: names.into_iter().next().unwrap_or_default(),
				category,
			};
		}
		let label = group_label(group, locale);
		if state.is_expanded(&group.key) {
			GroupDisplay::Expanded { label, names }
		} else {
			GroupDisplay::Collapsed {
				label,
				summary: names.join(", "),
			}
		}
	}
}

/// `"<count> <category>"`, or the pluralized overflow phrase.
pub fn group_label(group: &Group, locale: Locale) -> String {
	let count = group.len();
	let name = match &group.key {
		GroupKey::Category(name) => name.clone(),
		GroupKey::Overflow if count == 1 => t("Connections/more/singular", locale),
		GroupKey::Overflow => t("Connections/more/plural", locale),
	};
	format!("{count}\u{a0}{name}")
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::connections::types::Connection;

	fn group(key: GroupKey, names: &[&str]) -> Group {
		Group {
			key,
			members: names
				.iter()
				.map(|n| Connection::to_organisation(Some("x"), n))
				.collect(),
		}
	}

	#[test]
	fn toggles_default_to_collapsed() {
		let state = ToggleState::default();
		assert!(!state.is_expanded(&GroupKey::Overflow));
	}

	#[test]
	fn toggle_flips_only_its_key() {
		let mut state = ToggleState::default();
		let a = GroupKey::Category("A".into());
		state.toggle(&a);
		assert!(state.is_expanded(&a));
		assert!(!state.is_expanded(&GroupKey::Category("B".into())));
		state.toggle(&a);
		assert!(!state.is_expanded(&a));
	}

	#[test]
	fn collapsed_group_joins_names() {
		let g = group(GroupKey::Category("Gesundheit".into()), &["A AG", "B AG", "C AG"]);
		let display = GroupDisplay::for_group(&g, &ToggleState::default(), Locale::De);
		assert_eq!(
			display,
			GroupDisplay::Collapsed {
				label: "3\u{a0}Gesundheit".into(),
				summary: "A AG, B AG, C AG".into(),
			}
		);
	}

	#[test]
	fn expanded_group_lists_names() {
		let g = group(GroupKey::Overflow, &["A AG", "B AG"]);
		let mut state = ToggleState::default();
		state.toggle(&GroupKey::Overflow);
		let display = GroupDisplay::for_group(&g, &state, Locale::De);
		assert_eq!(
			display,
			GroupDisplay::Expanded {
				label: "2\u{a0}weitere Verbindungen".into(),
				names: vec!["A AG".into(), "B AG".into()],
			}
		);
	}

	#[test]
	fn singleton_ignores_toggle_state() {
		let g = group(GroupKey::Category("Sport".into()), &["FC Test"]);
		let mut state = ToggleState::default();
		state.toggle(&g.key);
		let display = GroupDisplay::for_group(&g, &state, Locale::Fr);
		assert_eq!(
			display,
			GroupDisplay::Single {
				name: "FC Test".into(),
				category: Some("Sport".into()),
			}
		);
	}

	#[test]
	fn singleton_carries_no_count() {
		let g = group(GroupKey::Overflow, &["Verein"]);
		let display = GroupDisplay::for_group(&g, &ToggleState::default(), Locale::De);
		assert_eq!(
			display,
			GroupDisplay::Single {
				name: "Verein".into(),
				category: None,
			}
		);
	}

	#[test]
	fn overflow_label_is_pluralized() {
		let one = group(GroupKey::Overflow, &["A"]);
		let two = group(GroupKey::Overflow, &["A", "B"]);
		assert_eq!(group_label(&one, Locale::Fr), "1\u{a0}autre lien");
		assert_eq!(group_label(&two, Locale::Fr), "2\u{a0}autres liens");
	}
}
