use leptos::prelude::*;

use crate::components::icons::ICON_CHECK_CIRCLE;
use crate::components::{Icon, SectionHeading};
use crate::content::{FINISHES, MATERIALS, PROCESSES, SHAPES, Tile};

#[component]
pub fn Capabilities() -> impl IntoView {
    view! {
        <section id="capabilities" class="capabilities fade-in">
            <div class="container">
                <SectionHeading subtitle="What We Do" title="Our Core Capabilities" />

                <div class="panel">
                    <h3 class="panel-title">"Finish Types Available"</h3>
                    <div class="finish-grid">
                        {FINISHES
                            .iter()
                            .map(|finish| {
                                view! {
                                    <div class="finish-card">
                                        <div class="finish-thumb">
                                            <img src=finish.image alt=finish.name loading="lazy" />
                                        </div>
                                        <span class="finish-name">{finish.name}</span>
                                        <p class="finish-description">{finish.description}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <TilePanel title="Materials We Work With" tiles=MATERIALS wide=true />
                <TilePanel title="Our Processes" tiles=PROCESSES wide=false />

                <div class="panel">
                    <h3 class="panel-title">"Shapes & Forms We Handle"</h3>
                    <div class="tile-grid wide">
                        {SHAPES
                            .iter()
                            .map(|shape| {
                                view! {
                                    <div class="tile">
                                        <Icon path=ICON_CHECK_CIRCLE size="32" class="tile-icon" />
                                        <span class="tile-name">{*shape}</span>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

/// Grid of round-thumbnail tiles (materials, processes).
#[component]
fn TilePanel(title: &'static str, tiles: &'static [Tile], wide: bool) -> impl IntoView {
    let grid_class = if wide { "tile-grid wide" } else { "tile-grid" };
    view! {
        <div class="panel">
            <h3 class="panel-title">{title}</h3>
            <div class=grid_class>
                {tiles
                    .iter()
                    .map(|tile| {
                        view! {
                            <div class="tile">
                                <div class="tile-thumb">
                                    <img src=tile.image alt=tile.name loading="lazy" />
                                </div>
                                <span class="tile-name">{tile.name}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn lists_every_catalog_entry() {
        let html = view! { <Capabilities /> }.to_html();
        assert!(html.contains("id=\"capabilities\""));
        for name in FINISHES
            .iter()
            .map(|f| f.name)
            .chain(MATERIALS.iter().map(|m| m.name))
            .chain(PROCESSES.iter().map(|p| p.name))
            .chain(SHAPES.iter().copied())
        {
            assert!(html.contains(name), "missing {name}");
        }
    }
}
