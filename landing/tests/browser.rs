//! DOM behaviour that only exists in a real browser.
//!
//! Run with `wasm-pack test --headless --firefox landing`.

#![cfg(target_arch = "wasm32")]

use leptos::prelude::*;
use leptos_router::components::Router;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, HtmlElement};

use northwest_landing::components::Lightbox;
use northwest_landing::pages::HomePage;
use northwest_landing::scroll::scroll_to_origin;
use northwest_landing::sections::Nav;
use northwest_landing::state::LightboxState;
use northwest_landing::styles::SITE_CSS;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

/// Fresh mount point so tests never see each other's markup.
fn container() -> HtmlElement {
    let host: HtmlElement = document().create_element("div").unwrap().dyn_into().unwrap();
    document().body().unwrap().append_child(&host).unwrap();
    host
}

fn find(root: &Element, selector: &str) -> Option<HtmlElement> {
    root.query_selector(selector)
        .unwrap()
        .map(|el| el.dyn_into::<HtmlElement>().unwrap())
}

fn click(root: &Element, selector: &str) {
    find(root, selector)
        .unwrap_or_else(|| panic!("{selector} not mounted"))
        .click();
}

/// Let queued reactive work and pending timers run.
async fn sleep(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .unwrap();
    });
    wasm_bindgen_futures::JsFuture::from(promise).await.unwrap();
}

fn install_site_css() {
    let style = document().create_element("style").unwrap();
    style.set_text_content(Some(SITE_CSS));
    document().head().unwrap().append_child(&style).unwrap();
}

fn scroll_y() -> f64 {
    web_sys::window().unwrap().scroll_y().unwrap()
}

#[wasm_bindgen_test]
fn lightbox_closes_on_backdrop_but_not_on_image() {
    let state = RwSignal::new(LightboxState::default());
    state.update(|l| l.open("https://cdn.wegic.ai/assets/onepage/agent/images/1766769012016.jpeg"));
    let host = container();
    let _mounted = leptos::mount::mount_to(host.clone(), move || view! { <Lightbox state=state /> });

    click(&host, ".lightbox-image");
    assert!(state.get_untracked().is_open());

    click(&host, ".lightbox");
    assert!(!state.get_untracked().is_open());
}

#[wasm_bindgen_test]
async fn gallery_tile_opens_its_image_and_close_button_clears_it() {
    let host = container();
    let _mounted = leptos::mount::mount_to(host.clone(), || view! { <HomePage /> });
    assert!(find(&host, ".lightbox").is_none());

    let tile = find(&host, ".gallery-item:nth-child(3)").expect("third gallery tile");
    let src = tile.query_selector("img").unwrap().unwrap().get_attribute("src").unwrap();
    tile.click();
    sleep(0).await;

    let shown = find(&host, ".lightbox-image").expect("lightbox opened");
    assert_eq!(shown.get_attribute("src").as_deref(), Some(src.as_str()));

    click(&host, ".lightbox-close");
    sleep(0).await;
    assert!(find(&host, ".lightbox").is_none());
}

#[wasm_bindgen_test]
async fn mobile_nav_link_closes_the_menu() {
    let host = container();
    let _mounted = leptos::mount::mount_to(host.clone(), || {
        view! {
            <Router>
                <Nav />
            </Router>
        }
    });
    assert!(find(&host, ".nav-mobile").is_none());

    click(&host, ".nav-toggle");
    sleep(0).await;
    assert!(find(&host, ".nav-mobile").is_some());
    assert_eq!(
        find(&host, ".nav-toggle").unwrap().get_attribute("aria-expanded").as_deref(),
        Some("true")
    );

    click(&host, ".nav-mobile a[href=\"/#about\"]");
    sleep(0).await;
    assert!(find(&host, ".nav-mobile").is_none());
}

#[wasm_bindgen_test]
async fn fragment_jumps_glide_and_land_flush_while_top_reset_is_instant() {
    install_site_css();
    let host = container();
    host.set_inner_html(
        r#"<div style="height: 3000px"></div>
           <div id="scroll-target" style="height: 10px"></div>
           <div style="height: 3000px"></div>"#,
    );
    let target = find(&host, "#scroll-target").unwrap();
    let target_top = f64::from(target.offset_top());

    // Same call the router makes for a fragment link.
    target.scroll_into_view();
    assert!(scroll_y() < target_top, "jump was not animated");
    sleep(1500).await;
    assert!((scroll_y() - target_top).abs() < 1.0, "anchor not flush with the viewport top");

    scroll_to_origin();
    assert_eq!(scroll_y(), 0.0);

    host.remove();
}
