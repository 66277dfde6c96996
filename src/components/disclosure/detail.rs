use leptos::prelude::*;
use log::warn;

use super::use_query_client;
use crate::components::connections::{Connection, Connections, direct_connections};
use crate::config::{Site, WidgetConfig};
use crate::i18n::{Locale, t};
use crate::query::{Guest, Parliamentarian, PersonKind, profile_url};

/// Fetches and shows one parliamentarian.
#[component]
pub fn ParliamentarianDetail(id: String) -> impl IntoView {
	let config = use_context::<WidgetConfig>().unwrap_or_default();
	let (locale, site) = (config.locale(), config.site);
	let client = use_query_client();
	let person = LocalResource::new(move || {
		let (client, id) = (client.clone(), id.clone());
		async move { client.parliamentarian(locale, &id).await }
	});

	move || match person.get() {
		None => view! { <span>{t("loading", locale)}</span> }.into_any(),
		Some(Err(e)) => {
			warn!("parliamentarian fetch failed: {e}");
			view! { <span class="lw-error">{e.to_string()}</span> }.into_any()
		}
		Some(Ok(person)) => {
			view! { <ParliamentarianCard person=person locale=locale site=site /> }.into_any()
		}
	}
}

#[component]
fn ParliamentarianCard(person: Parliamentarian, locale: Locale, site: Site) -> impl IntoView {
	let role = person.role_key().map(|key| t(&key, locale)).unwrap_or_default();
	let subtitle = join_present(&[
		role.as_str(),
		person.party_abbr().unwrap_or_default(),
		person.canton.as_deref().unwrap_or_default(),
	]);
	let link = profile_url(
		locale,
		PersonKind::Parliamentarian,
		&person.id,
		&person.first_name,
		&person.last_name,
	);
	let connections = direct_connections(&person.connections);
	let class = match site {
		Site::Rts => "lw-card lw-card-rts",
		Site::Default => "lw-card alert alert-info",
	};

	view! {
		<div class=class>
			{person.portrait.map(|src| view! { <img class="lw-portrait" src=src /> })}
			<h1 class="lw-name">{person.name}</h1>
			<h2 class="lw-role">{subtitle}</h2>
			<p>{t("Detail/directConnections", locale)}</p>
			{connection_section(connections, locale)}
			{profile_link(link, locale)}
		</div>
	}
}

/// Fetches and shows one invited guest.
#[component]
pub fn GuestDetail(id: String) -> impl IntoView {
	let config = use_context::<WidgetConfig>().unwrap_or_default();
	let locale = config.locale();
	let client = use_query_client();
	let guest = LocalResource::new(move || {
		let (client, id) = (client.clone(), id.clone());
		async move { client.guest(locale, &id).await }
	});

	move || match guest.get() {
		None => view! { <span>{t("loading", locale)}</span> }.into_any(),
		Some(Err(e)) => {
			warn!("guest fetch failed: {e}");
			view! { <span class="lw-error">{e.to_string()}</span> }.into_any()
		}
		Some(Ok(guest)) => view! { <GuestCard guest=guest locale=locale /> }.into_any(),
	}
}

#[component]
fn GuestCard(guest: Guest, locale: Locale) -> impl IntoView {
	let invited_by = t("Detail/invited-by", locale);
	let subtitle = match guest.parliamentarian.as_deref() {
		Some(host) => join_present(&[
			guest.function.as_deref().unwrap_or_default(),
			invited_by.as_str(),
			host,
		]),
		None => guest.function.clone().unwrap_or_default(),
	};
	let link = profile_url(
		locale,
		PersonKind::Guest,
		&guest.id,
		&guest.first_name,
		&guest.last_name,
	);
	let connections = direct_connections(&guest.connections);

	view! {
		<div class="lw-card alert alert-info">
			<h1 class="lw-name">{guest.name}</h1>
			<h2 class="lw-role">{subtitle}</h2>
			<p>{t("Detail/directConnections", locale)}</p>
			{connection_section(connections, locale)}
			{profile_link(link, locale)}
		</div>
	}
}

fn connection_section(connections: Vec<Connection>, locale: Locale) -> AnyView {
	if connections.is_empty() {
		view! { <p class="lw-empty">{t("Connections/none", locale)}</p> }.into_any()
	} else {
		view! { <Connections connections=connections /> }.into_any()
	}
}

fn profile_link(link: Option<String>, locale: Locale) -> Option<impl IntoView> {
	link.map(|href| {
		view! {
			<p>
				<a target="_blank" href=href>
					{t("Detail/link", locale)}
				</a>
			</p>
		}
	})
}

/// Space-separated, skipping blanks.
fn join_present(parts: &[&str]) -> String {
	parts
		.iter()
		.map(|p| p.trim())
		.filter(|p| !p.is_empty())
		.collect::<Vec<_>>()
		.join(" ")
}
