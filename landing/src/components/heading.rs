use leptos::prelude::*;

/// Eyebrow + title + accent rule used at the top of every home page section.
#[component]
pub fn SectionHeading(
    subtitle: &'static str,
    title: &'static str,
    #[prop(optional)] align_left: bool,
) -> impl IntoView {
    let class = if align_left {
        "section-heading align-left"
    } else {
        "section-heading"
    };
    view! {
        <div class=class>
            <span class="section-eyebrow">{subtitle}</span>
            <h2 class="section-title">{title}</h2>
            <div class="section-rule"></div>
        </div>
    }
}
