use leptos::prelude::*;

use super::{Footer, Nav, TopBar};

/// Persistent chrome around whichever page the router picked.
#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="site">
            <TopBar />
            <Nav />
            <main class="site-main">{children()}</main>
            <Footer />
        </div>
    }
}
