use leptos::prelude::*;

use crate::components::Icon;
use crate::components::icons::{ICON_ARROW_RIGHT, ICON_CARET_DOWN};
use crate::config::SiteConfig;

#[component]
pub fn Hero() -> impl IntoView {
    let config = SiteConfig::current();
    let badge_text = format!("3rd Generation Family Owned \u{2022} Since {}", config.since);

    view! {
        <section class="hero">
            <div class="hero-backdrop">
                <img src=config.hero_image alt="Polished Metal Parts" />
                <div class="hero-shade"></div>
            </div>
            <div class="container hero-inner">
                <div class="hero-content fade-in">
                    <div class="hero-badge">{badge_text}</div>
                    <h1 class="hero-title">
                        "NORTHWEST"
                        <br />
                        <span class="accent">"POLISHING & BUFFING"</span>
                    </h1>
                    <p class="hero-description">{config.tagline}</p>
                    <div class="hero-actions">
                        <a href="#contact" class="btn btn-primary">
                            "Request a Quote"
                            <Icon path=ICON_ARROW_RIGHT size="20" />
                        </a>
                        <a href="#capabilities" class="btn btn-outline">
                            "View Capabilities"
                        </a>
                    </div>
                </div>
            </div>
            <div class="hero-scroll-hint">
                <Icon path=ICON_CARET_DOWN size="32" />
            </div>
        </section>
    }
}
