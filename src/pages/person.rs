use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::container::Container;
use crate::components::disclosure::{GuestDetail, ParliamentarianDetail};

/// Preview of a single parliamentarian, e.g. `/parliamentarian/Parliamentarian-42`
#[component]
pub fn ParliamentarianPage() -> impl IntoView {
	let params = use_params_map();
	view! {
		<Container>
			{move || {
				let id = params.read().get("id").unwrap_or_default();
				view! { <ParliamentarianDetail id=id /> }
			}}
		</Container>
	}
}

#[component]
pub fn GuestPage() -> impl IntoView {
	let params = use_params_map();
	view! {
		<Container>
			{move || {
				let id = params.read().get("id").unwrap_or_default();
				view! { <GuestDetail id=id /> }
			}}
		</Container>
	}
}
