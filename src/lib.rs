//! Lobbywatch article widget: who an article mentions and whom they are tied to.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use log::{Level, info};
use wasm_bindgen::prelude::*;

// Modules
mod components;
mod config;
mod error;
mod extractor;
mod i18n;
mod pages;
mod query;

pub use crate::components::connections::{
	Connection, ConnectionTarget, Group, GroupKey, Intermediary, direct_connections, summarize,
	summarize_with,
};
pub use crate::config::{Site, WidgetConfig};
pub use crate::error::ConfigError;
pub use crate::i18n::Locale;

use crate::components::disclosure::ArticleDisclosures;
use crate::error::MountError;
use crate::query::QueryClient;

// Top-Level pages
use crate::pages::home::Home;
use crate::pages::not_found::NotFound;
use crate::pages::person::{GuestPage, ParliamentarianPage};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("Logging initialized");
}

/// Config for the current page, detected from the host name.
pub fn detect_config() -> WidgetConfig {
	let hostname = web_sys::window()
		.and_then(|w| w.location().hostname().ok())
		.unwrap_or_default();
	WidgetConfig::from_hostname(&hostname)
}

fn provide_widget_context(config: WidgetConfig) {
	provide_meta_context();
	provide_context(QueryClient::new(config.api_url.clone()));
	provide_context(config);
}

/// The embeddable widget for one article.
#[component]
pub fn Widget(
	/// Query endpoint, site and display limits
	config: WidgetConfig,
	/// Plain text of the article
	content: String,
) -> impl IntoView {
	provide_widget_context(config);
	view! { <ArticleDisclosures content=content /> }
}

/// Standalone preview app with a sample article and single-person pages
#[component]
pub fn App() -> impl IntoView {
	let config = detect_config();
	let lang = config.locale().code();
	provide_widget_context(config);

	view! {
		<Html attr:lang=lang attr:dir="ltr" />

		<Title text="Lobbywatch Widget" />

		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Router>
			<Routes fallback=|| view! { <NotFound /> }>
				<Route path=path!("/") view=Home />
				<Route path=path!("/parliamentarian/:id") view=ParliamentarianPage />
				<Route path=path!("/guest/:id") view=GuestPage />
			</Routes>
		</Router>
	}
}

/// Attach the widget after the article element of the host page.
///
/// `config_json` is a JSON [`WidgetConfig`]; without it the site is detected
/// from the host name.
#[wasm_bindgen]
pub fn mount(config_json: Option<String>) -> Result<(), JsValue> {
	init_logging();
	mount_widget(config_json.as_deref()).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn mount_widget(config_json: Option<&str>) -> Result<(), MountError> {
	let window = web_sys::window().ok_or(MountError::NoWindow)?;
	let document = window.document().ok_or(MountError::NoWindow)?;
	let config = match config_json {
		Some(json) => WidgetConfig::from_json(json)?,
		None => detect_config(),
	};

	let article = document
		.query_selector(&config.content_selector)
		.ok()
		.flatten()
		.ok_or_else(|| MountError::NoTarget(config.content_selector.clone()))?;
	let content = article.text_content().unwrap_or_default();

	let host = document
		.create_element("div")
		.map_err(|e| MountError::Dom(format!("{e:?}")))?;
	host.set_class_name("lobbywatch-widget");
	article
		.after_with_node_1(&host)
		.map_err(|e| MountError::Dom(format!("{e:?}")))?;
	let host: web_sys::HtmlElement = host
		.dyn_into()
		.map_err(|e| MountError::Dom(format!("{e:?}")))?;

	info!(
		"mounting widget ({}, {} chars of article text)",
		config.locale(),
		content.len()
	);
	leptos::mount::mount_to(host, move || view! { <Widget config=config content=content /> })
		.forget();
	Ok(())
}
