use leptos::prelude::*;

use crate::components::disclosure::ArticleDisclosures;

const SAMPLE_ARTICLE: &str = "Die Gesundheitskommission des Nationalrats hat am Dienstag \
	über die Vorlage zur Spitalfinanzierung beraten. Ruth Humbel verteidigte den Kompromiss, \
	während Thomas de Courten Nachbesserungen bei den Tarifen forderte. \
	Im Anschluss an die Sitzung äusserten sich mehrere Verbandsvertreter in der Wandelhalle.";

/// Preview page: a sample article with the widget below it.
#[component]
pub fn Home() -> impl IntoView {
	view! {
		<article class="sample-article">
			<h1>"Spitalfinanzierung: Kommission uneins"</h1>
			<p>{SAMPLE_ARTICLE}</p>
		</article>
		<ArticleDisclosures content=SAMPLE_ARTICLE.to_string() />
	}
}
