//! Find the people an article mentions.

use log::warn;
use regex::Regex;

use crate::query::PersonSummary;

/// Names shorter than this are too ambiguous to match.
const MIN_NAME_LEN: usize = 3;

/// Ids of the people found in an article, in query order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Mentions {
	pub parliamentarian_ids: Vec<String>,
	pub guest_ids: Vec<String>,
}

impl Mentions {
	pub fn is_empty(&self) -> bool {
		self.parliamentarian_ids.is_empty() && self.guest_ids.is_empty()
	}
}

pub fn extract_mentions(
	content: &str,
	parliamentarians: &[PersonSummary],
	guests: &[PersonSummary],
) -> Mentions {
	let text = normalize_whitespace(content);
	Mentions {
		parliamentarian_ids: mentioned_ids(&text, parliamentarians),
		guest_ids: mentioned_ids(&text, guests),
	}
}

fn mentioned_ids(text: &str, people: &[PersonSummary]) -> Vec<String> {
	let mut ids: Vec<String> = Vec::new();
	for person in people {
		let name = normalize_whitespace(&person.name);
		if name.chars().count() < MIN_NAME_LEN || !mentions_name(text, &name) {
			continue;
		}
		if !ids.contains(&person.id) {
			ids.push(person.id.clone());
		}
	}
	ids
}

/// Whole-name match: no word character may touch either end of the name.
fn mentions_name(text: &str, name: &str) -> bool {
	let pattern = format!(r"(?:^|\W){}(?:\W|$)", regex::escape(name));
	match Regex::new(&pattern) {
		Ok(re) => re.is_match(text),
		Err(e) => {
			warn!("skipping name '{name}': {e}");
			false
		}
	}
}

/// Collapse whitespace runs (including non-breaking spaces) into one space.
fn normalize_whitespace(s: &str) -> String {
	s.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
	use super::*;

	fn person(id: &str, name: &str) -> PersonSummary {
		PersonSummary {
			id: id.into(),
			name: name.into(),
		}
	}

	#[test]
	fn finds_full_names() {
		let parliamentarians = vec![
			person("Parliamentarian-1", "Anna Beispiel"),
			person("Parliamentarian-2", "Beat Muster"),
		];
		let guests = vec![person("Guest-1", "Paul Gast")];
		let mentions = extract_mentions(
			"Nationalrätin Anna Beispiel sprach mit Paul Gast über die Vorlage.",
			&parliamentarians,
			&guests,
		);
		assert_eq!(mentions.parliamentarian_ids, vec!["Parliamentarian-1"]);
		assert_eq!(mentions.guest_ids, vec!["Guest-1"]);
	}

	#[test]
	fn matches_across_line_breaks_and_nbsp() {
		let parliamentarians = vec![person("Parliamentarian-1", "Anna Beispiel")];
		let mentions = extract_mentions("Laut Anna\u{a0}\n Beispiel ist das", &parliamentarians, &[]);
		assert_eq!(mentions.parliamentarian_ids, vec!["Parliamentarian-1"]);
	}

	#[test]
	fn duplicates_are_dropped() {
		let parliamentarians = vec![
			person("Parliamentarian-1", "Anna Beispiel"),
			person("Parliamentarian-1", "Anna Beispiel"),
		];
		let mentions = extract_mentions(
			"Anna Beispiel, und nochmals Anna Beispiel",
			&parliamentarians,
			&[],
		);
		assert_eq!(mentions.parliamentarian_ids, vec!["Parliamentarian-1"]);
	}

	#[test]
	fn keeps_query_order() {
		let parliamentarians = vec![
			person("Parliamentarian-2", "Beat Muster"),
			person("Parliamentarian-1", "Anna Beispiel"),
		];
		let mentions = extract_mentions(
			"Anna Beispiel und Beat Muster",
			&parliamentarians,
			&[],
		);
		assert_eq!(
			mentions.parliamentarian_ids,
			vec!["Parliamentarian-2", "Parliamentarian-1"]
		);
	}

	#[test]
	fn nothing_mentioned() {
		let mentions = extract_mentions("Das Wetter wird schön.", &[person("P-1", "Anna Beispiel")], &[]);
		assert!(mentions.is_empty());
	}

	#[test]
	fn longer_name_containing_a_shorter_one_is_not_a_mention() {
		let parliamentarians = vec![person("Parliamentarian-9", "Hans Muster")];
		let mentions = extract_mentions(
			"Der Unternehmer Hans Mustermann kritisierte die Vorlage.",
			&parliamentarians,
			&[],
		);
		assert!(mentions.is_empty(), "false mention: {:?}", mentions.parliamentarian_ids);

		let mentions = extract_mentions("Alt-Hans Muster trat ab.", &parliamentarians, &[]);
		assert_eq!(mentions.parliamentarian_ids, vec!["Parliamentarian-9"]);
	}

	#[test]
	fn names_at_text_edges_and_before_punctuation_match() {
		let parliamentarians = vec![person("Parliamentarian-1", "Anna Beispiel")];
		let mentions = extract_mentions("Anna Beispiel", &parliamentarians, &[]);
		assert_eq!(mentions.parliamentarian_ids, vec!["Parliamentarian-1"]);
		let mentions = extract_mentions("Gesagt hat es «Anna Beispiel».", &parliamentarians, &[]);
		assert_eq!(mentions.parliamentarian_ids, vec!["Parliamentarian-1"]);
	}

	#[test]
	fn short_names_are_ignored() {
		let mentions = extract_mentions("AB steht hier", &[person("P-1", "AB")], &[]);
		assert!(mentions.is_empty());
	}
}
