use leptos::prelude::*;

use crate::components::SectionHeading;
use crate::config::SiteConfig;

#[component]
pub fn About() -> impl IntoView {
    let config = SiteConfig::current();
    let established = format!("Established in {}", config.since);

    view! {
        <section id="about" class="about fade-in">
            <div class="container narrow">
                <SectionHeading subtitle="Our Story" title="About Northwest Polishing & Buffing" />

                <div class="panel">
                    <p class="about-intro">
                        <strong>"3rd generation family owned and operated small business"</strong>
                        " located in Conklin, Michigan. Successfully operating for more than 60 years "
                        "with dedication to providing customers with pristine finishes and reliable quality. "
                        "The 8000 square foot building allows us to manage both large and small customers efficiently."
                    </p>
                </div>

                <div class="about-grid">
                    <div class="panel">
                        <h3 class="about-card-title">
                            <span class="about-card-icon">"\u{1F3ED}"</span>
                            {established}
                        </h3>
                        <p class="muted">
                            "Founded by Jerome Klein in 1965 after a successful career with Roosevelt Metal Finishing. "
                            "While in retirement, Jerome felt there was a need for a quality polishing and buffing "
                            "business to assist companies with their metal finishing needs. With minimal supplies and "
                            "a strong work ethic, Jerome built the company from the ground up. What began as a few "
                            "machines in an old chicken coop turned into a thriving business."
                        </p>
                    </div>
                    <div class="panel">
                        <h3 class="about-card-title">
                            <span class="about-card-icon">"\u{1F3AF}"</span>
                            "Our Goal"
                        </h3>
                        <p class="muted">
                            "To provide our customers with high quality metal finishing services in a timely manner. "
                            "We pride ourselves on our ability to find new and innovated ways to meet the customer's expectations."
                        </p>
                    </div>
                </div>
            </div>
        </section>
    }
}
