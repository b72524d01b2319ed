// Northwest Polishing & Buffing: Leptos 0.8 CSR entry point

use leptos::prelude::*;
use northwest_landing::App;
use northwest_landing::config::SiteConfig;
use northwest_landing::logging;

fn main() {
    console_error_panic_hook::set_once();
    logging::init();

    let config = SiteConfig::load().unwrap_or_else(|err| {
        tracing::warn!(%err, "using built-in site config");
        SiteConfig::default()
    });

    leptos::mount::mount_to_body(move || view! { <App config=config.clone() /> });
}
