use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};
use log::warn;

use crate::components::relation_graph::{GraphData, GraphLoad, NavigationIntent, RelationGraph};
use crate::source::{FixtureSource, load_graph};

/// Route of the document a navigation intent points at.
pub fn route_for(intent: &NavigationIntent) -> String {
	format!("/{}/{}", intent.content_type, intent.id)
}

/// A post or resource page with its relationship graph.
#[component]
pub fn DocumentPage() -> impl IntoView {
	let params = use_params_map();
	let center_id = Memo::new(move |_| params.with(|p| p.get("id")).unwrap_or_default());
	let source = use_context::<Arc<FixtureSource>>();
	let load = RwSignal::new(GraphLoad::Loading);

	Effect::new(move |_| {
		let id = center_id.get();
		let source = source.clone();
		load.set(GraphLoad::Loading);
		spawn_local(async move {
			let graph = match source {
				Some(source) => load_graph(source.as_ref(), &id),
				None => {
					warn!("no relation source provided");
					GraphData::empty()
				}
			};
			// A newer request owns the graph now.
			if center_id.get_untracked() == id {
				load.set(GraphLoad::Ready(Arc::new(graph)));
			}
		});
	});

	let navigate = use_navigate();
	let pending = RwSignal::new(None::<String>);
	Effect::new(move |_| {
		if let Some(path) = pending.get() {
			navigate(&path, Default::default());
		}
	});
	let on_navigate = Callback::new(move |intent: NavigationIntent| {
		pending.set(Some(route_for(&intent)));
	});

	let title = move || match load.get() {
		GraphLoad::Ready(graph) => graph.center().map(|c| c.title.clone()),
		GraphLoad::Loading => None,
	};

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>
			<article class="document-page">
				<a href="/">"All documents"</a>
				<h1>{move || title().unwrap_or_else(|| center_id.get())}</h1>
				<section class="document-relations">
					<h2>"Connections"</h2>
					<RelationGraph load=load on_navigate=on_navigate />
				</section>
			</article>
		</ErrorBoundary>
	}
}
