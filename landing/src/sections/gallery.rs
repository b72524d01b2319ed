use leptos::prelude::*;

use crate::components::SectionHeading;
use crate::content::GALLERY;
use crate::state::LightboxState;

/// Thumbnail grid. Activating a tile puts its image into the lightbox.
#[component]
pub fn Gallery(lightbox: RwSignal<LightboxState>) -> impl IntoView {
    view! {
        <section id="gallery" class="gallery fade-in">
            <div class="container">
                <SectionHeading subtitle="Our Work" title="The Shine Gallery" />
                <div class="gallery-grid">
                    {GALLERY
                        .iter()
                        .map(|item| {
                            let src = item.src;
                            let class = if item.featured {
                                "gallery-item featured"
                            } else {
                                "gallery-item"
                            };
                            view! {
                                <button
                                    type="button"
                                    class=class
                                    on:click=move |_| lightbox.update(|l| l.open(src))
                                >
                                    <img src=src alt=item.caption loading="lazy" />
                                    <div class="gallery-overlay">
                                        <span>"View Detail"</span>
                                    </div>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
