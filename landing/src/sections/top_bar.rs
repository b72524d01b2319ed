use leptos::prelude::*;

use crate::components::Icon;
use crate::components::icons::{ICON_MAIL, ICON_MAP_PIN, ICON_PHONE};
use crate::config::SiteConfig;

/// Address / email / phone strip above the header (desktop only).
#[component]
pub fn TopBar() -> impl IntoView {
    let config = SiteConfig::current();
    let address = format!("{}, {}", config.address.street, config.address.city);

    view! {
        <div class="top-bar">
            <div class="container top-bar-inner">
                <div class="top-bar-group">
                    <span class="top-bar-item">
                        <Icon path=ICON_MAP_PIN size="16" class="accent" />
                        {address}
                    </span>
                    <a href=config.mailto_href() class="top-bar-item">
                        <Icon path=ICON_MAIL size="16" class="accent" />
                        {config.email.clone()}
                    </a>
                </div>
                <div class="top-bar-group">
                    {config
                        .phones
                        .iter()
                        .map(|phone| {
                            let label = format!("{}:", phone.label);
                            view! {
                                <a href=phone.tel_href() class="top-bar-item strong">
                                    <Icon path=ICON_PHONE size="16" class="accent" />
                                    <span class="bright">{label}</span>
                                    {phone.display.clone()}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
