use log::debug;

use super::types::{Connection, Group, GroupKey};
use crate::config::DEFAULT_MAX_GROUPS;

/// Group connections for display with the default group limit.
pub fn summarize(connections: &[Connection]) -> Vec<Group> {
	summarize_with(connections, DEFAULT_MAX_GROUPS)
}

/// Group connections by category, smallest groups first.
///
/// The `max_groups` smallest categories are kept; everything else, along with
/// uncategorized connections, lands in a trailing overflow group. Equal-size
/// groups keep the order in which their category was first seen.
pub fn summarize_with(connections: &[Connection], max_groups: usize) -> Vec<Group> {
	let mut groups: Vec<Group> = Vec::new();
	let mut overflow: Vec<Connection> = Vec::new();

	for connection in connections {
		let Some(category) = connection.category() else {
			overflow.push(connection.clone());
			continue;
		};
		match groups
			.iter_mut()
			.find(|g| matches!(&g.key, GroupKey::Category(k) if k == category))
		{
			Some(group) => group.members.push(connection.clone()),
			None => groups.push(Group {
				key: GroupKey::Category(category.to_string()),
				members: vec![connection.clone()],
			}),
		}
	}

	// stable: ties stay in first-seen order
	groups.sort_by_key(Group::len);

	let keep = max_groups.min(groups.len());
	let folded = groups.len() - keep;
	for group in groups.drain(keep..) {
		overflow.extend(group.members);
	}

	if !overflow.is_empty() {
		groups.push(Group {
			key: GroupKey::Overflow,
			members: overflow,
		});
	}

	debug!(
		"summarized {} connections into {} groups ({} folded into overflow)",
		connections.len(),
		groups.len(),
		folded
	);
	groups
}


#[cfg(test)]
mod proptests {
	use std::collections::HashMap;

	use super::*;
	use proptest::prelude::*;

	fn connections() -> impl Strategy<Value = Vec<Connection>> {
		prop::collection::vec(prop::option::of(0u8..10), 0..40).prop_map(|keys| {
			keys.into_iter()
				.enumerate()
				.map(|(i, key)| {
					let group = key.map(|k| format!("cat-{k}"));
					Connection::to_organisation(group.as_deref(), &format!("org-{i}"))
				})
				.collect()
		})
	}

	proptest! {
		/// Property: every input connection appears exactly once in the output
		#[test]
		fn test_no_loss_no_duplication(input in connections()) {
			let groups = summarize(&input);
			let mut names: Vec<String> = groups
				.iter()
				.flat_map(|g| g.target_names())
				.map(str::to_string)
				.collect();
			let mut expected: Vec<String> = input.iter().map(|c| c.to.name().to_string()).collect();
			names.sort();
			expected.sort();
			prop_assert_eq!(names, expected);
		}

		/// Property: at most five category groups plus overflow
		#[test]
		fn test_group_count_bound(input in connections()) {
			prop_assert!(summarize(&input).len() <= DEFAULT_MAX_GROUPS + 1);
		}

		/// Property: overflow, when present, is last and only there
		#[test]
		fn test_overflow_is_last(input in connections()) {
			let groups = summarize(&input);
			for (i, group) in groups.iter().enumerate() {
				prop_assert!(!group.is_empty());
				if group.is_overflow() {
					prop_assert_eq!(i, groups.len() - 1);
				}
			}
		}

		/// Property: shown categories are the smallest ones, in ascending order
		#[test]
		fn test_shown_categories_are_smallest(input in connections()) {
			let groups = summarize(&input);
			let shown: Vec<&Group> = groups.iter().filter(|g| !g.is_overflow()).collect();
			for pair in shown.windows(2) {
				prop_assert!(pair[0].len() <= pair[1].len());
			}

			let mut counts: HashMap<&str, usize> = HashMap::new();
			for category in input.iter().filter_map(Connection::category) {
				*counts.entry(category).or_default() += 1;
			}
			let largest_shown = shown.last().map_or(0, |g| g.len());
			let mut folded = 0;
			for (category, count) in &counts {
				let is_shown = shown
					.iter()
					.any(|g| matches!(&g.key, GroupKey::Category(k) if k == category));
				if !is_shown {
					folded += 1;
					prop_assert!(
						*count >= largest_shown,
						"folded {} ({}) is smaller than a shown group ({})",
						category,
						count,
						largest_shown
					);
				}
			}
			prop_assert_eq!(folded, counts.len().saturating_sub(DEFAULT_MAX_GROUPS));
			if folded > 0 {
				prop_assert_eq!(shown.len(), DEFAULT_MAX_GROUPS);
			}
		}

		/// Property: the same input always yields the same groups
		#[test]
		fn test_deterministic(input in connections()) {
			prop_assert_eq!(summarize(&input), summarize(&input));
		}
	}
}
