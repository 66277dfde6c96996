use leptos::prelude::*;
use leptos_meta::Style;

use crate::config::{Site, WidgetConfig};
use crate::i18n::t;

const WIDGET_CSS: &str = r#"
.lw-container { border-left: 2px solid #0077D7; padding-left: 10px; }
.lw-container ul { padding-left: 25px; }
.lw-container ul li { list-style: disc; }
.lw-card .lw-name { color: black; margin-bottom: 0; margin-top: 3px; }
.lw-card .lw-role { margin-bottom: 10px; }
.lw-card .lw-portrait { float: right; }
.lw-ellipsis {
	display: block;
	width: 100%;
	font-style: italic;
	font-size: 0.8em;
	white-space: nowrap;
	overflow: hidden;
	text-overflow: ellipsis;
}
.lw-card-rts {
	max-width: 1000px;
	margin: 0 auto 1.5625rem;
	background-clip: padding-box;
	padding: 1.25rem 1.25rem 1.5625rem;
	border: 1px solid #dedede;
	border-left: 4px solid #f45050;
	background: #fbfbfb;
}
"#;

/// The Lobbywatch mark: a light blue disc with an eye.
#[component]
pub fn Logo(#[prop(default = 74)] size: u32) -> impl IntoView {
	view! {
		<svg width=size height=size viewBox="0 0 74 74">
			<g>
				<circle fill="#74D7FF" cx="37" cy="37" r="37" />
				<circle fill="#1f2532" cx="37" cy="37" r="20" />
				<circle fill="#fff" cx="45" cy="29" r="5" />
			</g>
		</svg>
	}
}

/// Branded frame around the widget content.
#[component]
pub fn Container(children: Children) -> impl IntoView {
	let config = use_context::<WidgetConfig>().unwrap_or_default();
	let class = match config.site {
		Site::Rts => "lw-container border",
		Site::Default => "lw-container",
	};

	view! {
		<Style>{WIDGET_CSS}</Style>
		<div class=class>
			<h1>
				<Logo size=20 />
				" "
				{t("title", config.locale())}
			</h1>
			<div>{children()}</div>
		</div>
	}
}
