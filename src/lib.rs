//! Leptos client-side app wiring and routes for the research relationship graph.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use log::{Level, error, info};

// Modules
pub mod components;
pub mod config;
pub mod error;
mod pages;
pub mod source;

// Top-Level pages
use crate::pages::document::DocumentPage;
use crate::pages::home::Home;
use crate::pages::not_found::NotFound;
use crate::source::FixtureSource;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("Logging initialized");
}

/// An app router which renders the library, document pages and handles 404's
#[component]
pub fn App() -> impl IntoView {
	// Provides context that manages stylesheets, titles, meta tags, etc.
	provide_meta_context();

	let source = FixtureSource::bundled().unwrap_or_else(|e| {
		error!("document library unavailable: {e}");
		FixtureSource::default()
	});
	provide_context(Arc::new(source));

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />

		// sets the document title
		<Title text="Research relationship graph" />

		// injects metadata in the <head> of the page
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Router>
			<Routes fallback=|| view! { <NotFound /> }>
				<Route path=path!("/") view=Home />
				<Route path=path!("/post/:id") view=DocumentPage />
				<Route path=path!("/resource/:id") view=DocumentPage />
			</Routes>
		</Router>
	}
}
