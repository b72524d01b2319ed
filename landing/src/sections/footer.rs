use leptos::prelude::*;

use crate::components::Icon;
use crate::components::icons::{ICON_CARET_RIGHT, ICON_MAIL, ICON_MAP_PIN, ICON_PHONE};
use crate::config::SiteConfig;
use crate::content::QUICK_LINKS;

#[component]
pub fn Footer() -> impl IntoView {
    let config = SiteConfig::current();
    let copyright = format!(
        "\u{a9} {} {}. All rights reserved.",
        current_year(),
        config.business_name
    );

    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-grid">
                    <div>
                        <img
                            class="footer-logo"
                            src=config.logo_url.clone()
                            alt=config.business_name.clone()
                        />
                        <p class="muted">{config.tagline.clone()}</p>
                    </div>

                    <div>
                        <h3 class="footer-heading">"Quick Links"</h3>
                        <ul class="footer-list">
                            {QUICK_LINKS
                                .iter()
                                .map(|item| {
                                    view! {
                                        <li>
                                            <a href=item.href class="footer-link">
                                                <Icon path=ICON_CARET_RIGHT size="16" class="accent" />
                                                {item.label}
                                            </a>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>

                    <div>
                        <h3 class="footer-heading">"Contact Us"</h3>
                        <ul class="footer-list">
                            <li class="footer-contact">
                                <Icon path=ICON_MAP_PIN size="20" class="accent" />
                                <span class="muted">
                                    {config.address.street.clone()}
                                    <br />
                                    {config.address.city.clone()}
                                </span>
                            </li>
                            <li class="footer-contact">
                                <Icon path=ICON_PHONE size="20" class="accent" />
                                <div class="footer-phones">
                                    {config
                                        .phones
                                        .iter()
                                        .map(|phone| {
                                            let label = format!("{}:", phone.label);
                                            view! {
                                                <a href=phone.tel_href() class="footer-link">
                                                    <span class="bright">{label}</span>
                                                    " "
                                                    {phone.display.clone()}
                                                </a>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </li>
                            <li class="footer-contact">
                                <Icon path=ICON_MAIL size="20" class="accent" />
                                <a href=config.mailto_href() class="footer-link">
                                    {config.email.clone()}
                                </a>
                            </li>
                        </ul>
                    </div>
                </div>

                <div class="footer-bottom">
                    <p>{copyright}</p>
                    <div class="footer-legal">
                        <span>"Privacy Policy"</span>
                        <span>"Terms of Service"</span>
                    </div>
                </div>
            </div>
        </footer>
    }
}

#[cfg(target_arch = "wasm32")]
fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

#[cfg(not(target_arch = "wasm32"))]
fn current_year() -> u32 {
    use std::time::{SystemTime, UNIX_EPOCH};

    const SECS_PER_YEAR: u64 = 31_556_952;
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();
    1970 + (secs / SECS_PER_YEAR) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn quick_links_point_at_home_anchors() {
        let html = view! { <Footer /> }.to_html();
        for anchor in crate::content::ANCHORS {
            assert!(html.contains(&format!("href=\"/#{anchor}\"")), "missing {anchor}");
        }
        assert!(html.contains("mailto:sales@nwpolishandbuff.com"));
        assert!(html.contains("All rights reserved."));
    }
}
