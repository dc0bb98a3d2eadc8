use std::sync::Arc;

use leptos::prelude::*;

use crate::components::relation_graph::NavigationIntent;
use crate::pages::document::route_for;
use crate::source::FixtureSource;

/// Default Home Page: the document library.
#[component]
pub fn Home() -> impl IntoView {
	let entries = use_context::<Arc<FixtureSource>>()
		.map(|source| source.entries())
		.unwrap_or_default();

	view! {
		<main class="library">
			<h1>"Research library"</h1>
			<p class="subtitle">
				"Open a document to explore its forks, citations and neighbours."
			</p>
			<ul>
				{entries
					.into_iter()
					.map(|entry| {
						let href = route_for(&NavigationIntent {
							id: entry.id,
							content_type: entry.content_type,
						});
						view! {
							<li>
								<a href=href>{entry.title}</a>
								<span class="content-type">{entry.content_type.as_str()}</span>
							</li>
						}
					})
					.collect_view()}
			</ul>
		</main>
	}
}
