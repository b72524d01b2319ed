use leptos::prelude::*;

use crate::components::icons::ICON_ARROW_RIGHT;
use crate::components::{Icon, SectionHeading};
use crate::config::SiteConfig;
use crate::content::EQUIPMENT;

#[component]
pub fn Equipment() -> impl IntoView {
    let config = SiteConfig::current();

    view! {
        <section id="equipment" class="equipment fade-in">
            <div class="container equipment-grid">
                <div class="equipment-photo">
                    <div class="equipment-glow"></div>
                    <img src=config.facility_image alt="Polishing Facility" loading="lazy" />
                </div>

                <div class="equipment-copy">
                    <SectionHeading
                        subtitle="Our Facility"
                        title="Built for Volume & Precision"
                        align_left=true
                    />
                    <p class="lead muted">
                        "Our facility in Conklin, MI is equipped with industrial-grade polishing and buffing "
                        "machinery designed to handle both high-volume production runs and intricate custom jobs."
                    </p>

                    <div class="inventory">
                        <h4 class="inventory-title">
                            <span>"\u{2699}\u{FE0F}"</span>
                            " Equipment Inventory"
                        </h4>
                        <ul class="inventory-list">
                            {EQUIPMENT
                                .iter()
                                .map(|item| {
                                    view! {
                                        <li>
                                            <span class="accent">"\u{25B8}"</span>
                                            <span>{*item}</span>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>

                    <a href="#contact" class="text-link">
                        "Schedule a Visit"
                        <Icon path=ICON_ARROW_RIGHT size="16" />
                    </a>
                </div>
            </div>
        </section>
    }
}
