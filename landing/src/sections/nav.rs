use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::Icon;
use crate::components::icons::{ICON_CLOSE, ICON_MENU};
use crate::config::SiteConfig;
use crate::content::{NAV_LINKS, QUOTE_LINK};
use crate::navigation::NavigationState;
use crate::state::MenuState;

/// Sticky header: logo, desktop links, and the collapsible mobile menu.
#[component]
pub fn Nav() -> impl IntoView {
    let config = SiteConfig::current();
    let location = use_location();
    let (pathname, hash) = (location.pathname, location.hash);
    let current = Memo::new(move |_| NavigationState::new(pathname.get(), &hash.get()));
    let menu = RwSignal::new(MenuState::default());

    let link_class = move |href: &'static str| {
        move || {
            if current.with(|nav| nav.is_active(href)) {
                "nav-link active"
            } else {
                "nav-link"
            }
        }
    };

    view! {
        <header class="nav">
            <div class="container nav-inner">
                <a href="/" class="nav-brand">
                    <img src=config.logo_url.clone() alt=config.business_name.clone() />
                </a>

                <nav class="nav-links">
                    {NAV_LINKS
                        .iter()
                        .map(|item| {
                            view! {
                                <a href=item.href class=link_class(item.href)>
                                    {item.label}
                                </a>
                            }
                        })
                        .collect_view()}
                    <a href=QUOTE_LINK.href class="btn btn-primary nav-cta">
                        {QUOTE_LINK.label}
                    </a>
                </nav>

                <button
                    class="nav-toggle"
                    aria-label="Toggle menu"
                    aria-expanded=move || menu.get().is_open().to_string()
                    on:click=move |_| menu.update(MenuState::toggle)
                >
                    {move || {
                        let path = if menu.get().is_open() { ICON_CLOSE } else { ICON_MENU };
                        view! { <Icon path=path size="28" /> }
                    }}
                </button>
            </div>

            <Show when=move || menu.get().is_open()>
                <nav class="nav-mobile">
                    {NAV_LINKS
                        .iter()
                        .map(|item| {
                            view! {
                                <a
                                    href=item.href
                                    class=link_class(item.href)
                                    on:click=move |_| menu.update(MenuState::close)
                                >
                                    {item.label}
                                </a>
                            }
                        })
                        .collect_view()}
                    <a
                        href=QUOTE_LINK.href
                        class="btn btn-primary"
                        on:click=move |_| menu.update(MenuState::close)
                    >
                        {QUOTE_LINK.label}
                    </a>
                </nav>
            </Show>
        </header>
    }
}
