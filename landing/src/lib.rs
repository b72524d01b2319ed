//! # northwest-landing
//!
//! Marketing site for Northwest Polishing & Buffing, built with Leptos 0.8 in
//! client-side rendering mode and shipped as a single wasm bundle.
//!
//! Two routes exist: `/` renders the home page, every other path renders the
//! not-found page. Home page sections are reached through in-page anchors
//! (`#capabilities`, `#about`, `#equipment`, `#gallery`, `#contact`); the
//! [`scroll::ScrollController`] keeps the viewport in step with them.
//!
//! ## Modules
//!
//! - [`config`] - embedded `site.toml` (identity, phones, form backend)
//! - [`navigation`] - route classification and path/anchor state
//! - [`scroll`] - scroll restoration on navigation
//! - [`state`] - mobile menu and lightbox state
//! - [`contact`] - contact form encoding and submission
//! - [`content`] - catalog tables and gallery
//! - [`sections`], [`pages`], [`components`] - the view layer
//!
//! Everything except the DOM glue is plain Rust and is tested natively.

#![recursion_limit = "256"]

pub mod components;
pub mod config;
pub mod contact;
pub mod content;
pub mod error;
pub mod logging;
pub mod navigation;
pub mod pages;
pub mod scroll;
pub mod sections;
pub mod state;
pub mod styles;

use leptos::prelude::*;
use leptos_router::components::{Route as RouteDef, Router, Routes};
use leptos_router::hooks::use_location;
use leptos_router::path;

use config::SiteConfig;
use navigation::Route;
use pages::{HomePage, NotFoundPage};
use scroll::ScrollController;
use sections::Layout;

/// Root component. Provides the config, styles, router and page chrome.
#[component]
pub fn App(config: SiteConfig) -> impl IntoView {
    let base = config.base_path.trim_end_matches('/').to_string();
    provide_context(config);

    view! {
        <style>{styles::SITE_CSS}</style>
        <Router base=base>
            <ScrollController />
            <DocumentTitle />
            <Layout>
                <Routes fallback=|| page(Route::NotFound)>
                    <RouteDef path=path!("/") view=|| page(Route::Home) />
                </Routes>
            </Layout>
        </Router>
    }
}

/// The page body for a resolved route.
pub fn page(route: Route) -> AnyView {
    match route {
        Route::Home => view! { <HomePage /> }.into_any(),
        Route::NotFound => view! { <NotFoundPage /> }.into_any(),
    }
}

/// Keeps `document.title` in line with the current route.
#[component]
fn DocumentTitle() -> impl IntoView {
    let config = SiteConfig::current();
    let location = use_location();

    Effect::new(move || {
        let route = Route::resolve(&location.pathname.get(), &config.base_path);
        if route == Route::NotFound {
            tracing::debug!(path = %location.pathname.get_untracked(), "no such page");
        }
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            document.set_title(&route.title(&config.business_name));
        }
    });
}
