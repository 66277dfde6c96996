use leptos::prelude::*;

/// 404 page
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<h1>"Nicht gefunden / Page introuvable"</h1>
		<p>
			<a href="/">"Zurück / Retour"</a>
		</p>
	}
}
