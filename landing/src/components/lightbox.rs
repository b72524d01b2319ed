//! Full-size image overlay for the work gallery.

use leptos::ev::MouseEvent;
use leptos::prelude::*;

use super::icons::{ICON_CLOSE, Icon};
use crate::state::LightboxState;

/// Overlay showing the selected image. Backdrop and close button both clear the
/// selection; clicks on the image itself stop at the image.
#[component]
pub fn Lightbox(state: RwSignal<LightboxState>) -> impl IntoView {
    let close = move |_: MouseEvent| state.update(|l| l.close());
    let selected = move || state.with(|l| l.selected().unwrap_or_default().to_string());

    view! {
        <Show when=move || state.with(LightboxState::is_open)>
            <div class="lightbox" role="dialog" aria-modal="true" on:click=close>
                <button class="lightbox-close" aria-label="Close" on:click=close>
                    <Icon path=ICON_CLOSE size="40" />
                </button>
                <img
                    class="lightbox-image"
                    src=selected
                    alt="Full size view"
                    on:click=|ev: MouseEvent| ev.stop_propagation()
                />
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn closed_lightbox_renders_nothing() {
        let state = RwSignal::new(LightboxState::default());
        let html = view! { <Lightbox state=state /> }.to_html();
        assert!(!html.contains("lightbox-image"));
    }

    #[test]
    fn open_lightbox_shows_selected_image() {
        let state = RwSignal::new(LightboxState::default());
        state.update(|l| l.open("https://cdn.example/brass.jpg"));
        let html = view! { <Lightbox state=state /> }.to_html();
        assert!(html.contains("lightbox-image"));
        assert!(html.contains("https://cdn.example/brass.jpg"));
        assert!(html.contains("lightbox-close"));
    }
}
