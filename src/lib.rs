//! Leptos client-side app wiring and routes.
//!
//! `/` draws a user-supplied edge list on an N x N grid, `/campus` overlays a
//! route from the route service on the campus map. Both go through the same
//! canvas renderer.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use log::{Level, info};

// Modules
pub mod components;
pub mod config;
pub mod edge_list;
pub mod error;
pub mod geometry;
pub mod grid_size;
mod pages;
pub mod route;

// Top-Level pages
use crate::config::AppConfig;
use crate::pages::campus::Campus;
use crate::pages::home::Home;
use crate::pages::not_found::NotFound;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("Logging initialized");
}

/// An app router which renders the grid page, the campus page and handles 404's
#[component]
pub fn App() -> impl IntoView {
	// Provides context that manages stylesheets, titles, meta tags, etc.
	provide_meta_context();
	provide_context(AppConfig::from_build_env());

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="light" />

		// sets the document title
		<Title text="Route Canvas" />

		// injects metadata in the <head> of the page
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Router>
			<nav>
				<A href="/">"Grid"</A>
				" | "
				<A href="/campus">"Campus"</A>
			</nav>
			<Routes fallback=|| view! { <NotFound /> }>
				<Route path=path!("/") view=Home />
				<Route path=path!("/campus") view=Campus />
			</Routes>
		</Router>
	}
}
