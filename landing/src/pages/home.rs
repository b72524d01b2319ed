// Home page - hero, catalog panels, gallery with lightbox, contact form
use crate::components::Lightbox;
use crate::sections::{About, Capabilities, ContactSection, Equipment, Gallery, Hero};
use crate::state::LightboxState;
use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    let lightbox = RwSignal::new(LightboxState::default());

    view! {
        <div class="home">
            <Hero />
            <Capabilities />
            <About />
            <Equipment />
            <Gallery lightbox=lightbox />
            <Lightbox state=lightbox />
            <ContactSection />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ANCHORS;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn every_anchor_target_exists() {
        let html = view! { <HomePage /> }.to_html();
        for anchor in ANCHORS {
            assert!(html.contains(&format!("id=\"{anchor}\"")), "missing #{anchor}");
        }
    }

    #[test]
    fn every_section_fades_in() {
        let html = view! { <HomePage /> }.to_html();
        for anchor in ANCHORS {
            assert!(
                html.contains(&format!("id=\"{anchor}\" class=\"{anchor} fade-in\"")),
                "#{anchor} has no fade"
            );
        }
    }

    #[test]
    fn lightbox_starts_closed() {
        let html = view! { <HomePage /> }.to_html();
        assert!(html.contains("gallery-item featured"));
        assert!(!html.contains("lightbox-image"));
    }
}
