mod detail;
mod list;

use leptos::prelude::*;

use crate::config::WidgetConfig;
use crate::query::QueryClient;

pub use detail::{GuestDetail, ParliamentarianDetail};
pub use list::ArticleDisclosures;

/// The client provided by the widget root, or one built from the config.
fn use_query_client() -> QueryClient {
	use_context::<QueryClient>().unwrap_or_else(|| {
		let config = use_context::<WidgetConfig>().unwrap_or_default();
		QueryClient::new(config.api_url)
	})
}
