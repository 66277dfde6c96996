use leptos::prelude::*;
use log::{info, warn};

use super::detail::{GuestDetail, ParliamentarianDetail};
use super::use_query_client;
use crate::components::container::Container;
use crate::config::WidgetConfig;
use crate::extractor::{Mentions, extract_mentions};
use crate::i18n::t;

/// One detail view per mentioned person, parliamentarians first.
#[component]
pub fn DisclosureList(mentions: Mentions) -> impl IntoView {
	let locale = use_context::<WidgetConfig>().unwrap_or_default().locale();
	if mentions.is_empty() {
		return view! { <p>{t("Disclosure/none", locale)}</p> }.into_any();
	}
	let Mentions {
		parliamentarian_ids,
		guest_ids,
	} = mentions;

	view! {
		<div class="lw-list">
			{(!parliamentarian_ids.is_empty())
				.then(|| view! { <h2>{t("List/parliamentarians", locale)}</h2> })}
			{parliamentarian_ids
				.into_iter()
				.map(|id| view! { <ParliamentarianDetail id=id /> })
				.collect_view()}
			{(!guest_ids.is_empty()).then(|| view! { <h2>{t("List/guests", locale)}</h2> })}
			{guest_ids.into_iter().map(|id| view! { <GuestDetail id=id /> }).collect_view()}
		</div>
	}
	.into_any()
}

/// Looks up who the article mentions and lists their connections.
#[component]
pub fn ArticleDisclosures(content: String) -> impl IntoView {
	let locale = use_context::<WidgetConfig>().unwrap_or_default().locale();
	let client = use_query_client();
	let people = LocalResource::new(move || {
		let client = client.clone();
		async move { client.article_people(locale).await }
	});

	move || match people.get() {
		None => view! { <span>{t("loading", locale)}</span> }.into_any(),
		Some(Err(e)) => {
			warn!("people list fetch failed: {e}");
			view! { <span class="lw-error">{e.to_string()}</span> }.into_any()
		}
		Some(Ok(people)) => {
			let mentions = extract_mentions(&content, &people.parliamentarians, &people.guests);
			info!(
				"article mentions {} parliamentarians and {} guests",
				mentions.parliamentarian_ids.len(),
				mentions.guest_ids.len()
			);
			view! {
				<Container>
					<DisclosureList mentions=mentions />
				</Container>
			}
			.into_any()
		}
	}
}
