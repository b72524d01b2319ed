//! Scroll restoration on client-side navigation.
//!
//! No anchor: jump to the origin right away. Anchor: wait one animation frame so
//! the target has a chance to mount, then smooth-scroll it to the top of the
//! viewport. A missing target is not an error.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::navigation::NavigationState;

/// What a navigation asks of the viewport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrollIntent {
    Top,
    /// Element `id` on page `path`.
    Anchor { path: String, id: String },
}

impl ScrollIntent {
    pub fn for_navigation(nav: &NavigationState) -> Self {
        match nav.fragment() {
            Some(id) => ScrollIntent::Anchor {
                path: nav.path().to_string(),
                id: id.to_string(),
            },
            None => ScrollIntent::Top,
        }
    }

    /// A deferred anchor scroll only fires if the visitor is still on that page and anchor.
    pub fn still_current(&self, now: &NavigationState) -> bool {
        match self {
            ScrollIntent::Top => now.fragment().is_none(),
            ScrollIntent::Anchor { path, id } => {
                now.path() == path && now.fragment() == Some(id.as_str())
            }
        }
    }
}

/// Watches the router location and keeps the viewport in step with it.
///
/// The router jumps to a fragment target itself and `scroll-behavior: smooth`
/// animates that jump. The deferred scroll below catches targets that mount late.
#[component]
pub fn ScrollController() -> impl IntoView {
    let location = use_location();

    Effect::new(move || {
        let nav = NavigationState::new(location.pathname.get(), &location.hash.get());
        let intent = ScrollIntent::for_navigation(&nav);
        tracing::debug!(path = nav.path(), fragment = ?nav.fragment(), ?intent, "navigation");

        let ScrollIntent::Anchor { id, .. } = intent.clone() else {
            scroll_to_origin();
            return;
        };
        let pathname = location.pathname;
        let hash = location.hash;
        request_animation_frame(move || {
            let (Some(path), Some(hash)) = (pathname.try_get_untracked(), hash.try_get_untracked())
            else {
                return;
            };
            if !intent.still_current(&NavigationState::new(path, &hash)) {
                tracing::trace!(anchor = %id, "stale anchor scroll dropped");
                return;
            }
            scroll_to_anchor(&id);
        });
    });
}

/// Jump to the top left corner without animating, whatever the page's
/// `scroll-behavior` says.
pub fn scroll_to_origin() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let options = web_sys::ScrollToOptions::new();
    options.set_left(0.0);
    options.set_top(0.0);
    options.set_behavior(web_sys::ScrollBehavior::Instant);

    window.scroll_to_with_scroll_to_options(&options);
    if let Some(document) = window.document() {
        if let Some(root) = document.document_element() {
            root.scroll_to_with_scroll_to_options(&options);
        }
        if let Some(body) = document.body() {
            body.scroll_to_with_scroll_to_options(&options);
        }
    }
}

fn scroll_to_anchor(id: &str) {
    let target = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id));

    let Some(target) = target else {
        tracing::trace!(anchor = id, "anchor target not found");
        return;
    };

    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    options.set_block(web_sys::ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}
