// Not-found page - anything the router does not know
use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <section class="not-found">
            <h1 class="not-found-code">"404"</h1>
            <p class="not-found-title">"Page Not Found"</p>
            <p class="muted">"The page you are looking for does not exist or has been moved"</p>
            <a href="/" class="btn btn-light">
                "Return Home"
            </a>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ANCHORS;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn renders_404_without_home_content() {
        let html = view! { <NotFoundPage /> }.to_html();
        assert!(html.contains("404"));
        assert!(html.contains("Page Not Found"));
        assert!(html.contains("href=\"/\""));
        for anchor in ANCHORS {
            assert!(!html.contains(&format!("id=\"{anchor}\"")));
        }
    }
}
