use leptos::ev::MouseEvent;
use leptos::prelude::*;
use log::debug;

use super::state::{GroupDisplay, ToggleState};
use super::summary::summarize_with;
use super::types::{Connection, Group};
use crate::config::WidgetConfig;
use crate::i18n::Locale;

/// Grouped, collapsible list of one person's direct connections.
#[component]
pub fn Connections(connections: Vec<Connection>) -> impl IntoView {
	let config = use_context::<WidgetConfig>().unwrap_or_default();
	let locale = config.locale();
	let toggles = RwSignal::new(ToggleState::default());
	let groups = summarize_with(&connections, config.max_groups);

	view! {
		<ul class="lw-connections">
			{groups
				.into_iter()
				.map(|group| view! { <ConnectionGroup group=group toggles=toggles locale=locale /> })
				.collect_view()}
		</ul>
	}
}

#[component]
fn ConnectionGroup(group: Group, toggles: RwSignal<ToggleState>, locale: Locale) -> impl IntoView {
	let key = group.key.clone();
	let on_click = move |ev: MouseEvent| {
		ev.prevent_default();
		toggles.update(|s| s.toggle(&key));
		debug!("toggled group {key}");
	};

	move || match toggles.with(|s| GroupDisplay::for_group(&group, s, locale)) {
		GroupDisplay::Single { name, category } => view! {
			<li class="lw-single" title=category>{name}</li>
		}
		.into_any(),
		GroupDisplay::Collapsed { label, summary } => view! {
			<li>
				<a class="lw-toggle" style="cursor: pointer;" on:click=on_click.clone()>
					<span>{label}</span>
					<br />
					<span class="lw-ellipsis">{summary}</span>
				</a>
			</li>
		}
		.into_any(),
		GroupDisplay::Expanded { label, names } => view! {
			<li>
				<a class="lw-toggle" style="cursor: pointer;" on:click=on_click.clone()>
					<span>{label}</span>
				</a>
				<ul>{names.into_iter().map(|name| view! { <li>{name}</li> }).collect_view()}</ul>
			</li>
		}
		.into_any(),
	}
}
