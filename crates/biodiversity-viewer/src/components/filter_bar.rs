//! Category filter buttons under the map.

use biodiversity_catalog::SpeciesCategory;
use dioxus::prelude::*;

use crate::state::AppState;

#[component]
pub fn FilterBar(mut state: Signal<AppState>) -> Element {
    let (active, toggle_label, counts) = {
        let app = state.read();
        match app.view.as_ref() {
            Some(view) => {
                let filter = view.filter();
                let active: Vec<bool> = SpeciesCategory::ALL.iter().map(|c| filter.contains(*c)).collect();
                (active, filter.toggle_all_label(), view.counts())
            }
            None => (vec![false; SpeciesCategory::COUNT], "All", (0, 0)),
        }
    };
    let (visible, total) = counts;
    let loading = state.read().loading.campus_species;

    rsx! {
        div {
            class: "filter-bar",

            div {
                class: "filter-buttons",
                for (category, on) in SpeciesCategory::ALL.into_iter().zip(active) {
                    button {
                        key: "{category.as_str()}",
                        class: if on { "filter-button active" } else { "filter-button" },
                        onclick: move |_| state.write().toggle_category(category),
                        "{category.display_name()}"
                    }
                }
                button {
                    class: "filter-button toggle-all",
                    onclick: move |_| state.write().toggle_all(),
                    "{toggle_label}"
                }
            }

            div {
                class: "filter-count",
                if loading {
                    "Loading species..."
                } else {
                    "Showing {visible} of {total} species"
                }
            }
        }
    }
}
