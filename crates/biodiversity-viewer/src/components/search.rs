//! Species search dialog.

use biodiversity_map::{map_href, search, species_link};
use chrono::Utc;
use dioxus::prelude::*;

use crate::state::AppState;

use super::{Modal, use_open};

#[component]
pub fn SearchModal(mut state: Signal<AppState>, on_close: EventHandler<()>) -> Element {
    let open = use_open(state);
    let mut query = use_signal(String::new);

    let text = query.read().clone();
    let results: Vec<_> = {
        let app = state.read();
        app.search_results(&text)
            .into_iter()
            .map(|entry| {
                let campus = search::campus_name(&app.campuses, entry).to_string();
                (entry.clone(), campus)
            })
            .collect()
    };

    let on_enter = {
        let mut open = open.clone();
        move |evt: KeyboardEvent| {
            if evt.key() != Key::Enter {
                return;
            }
            let text = query.read().clone();
            if text.trim().is_empty() {
                return;
            }
            let target = state.write().submit_search(&text, Utc::now());
            if let Some(href) = target {
                query.set(String::new());
                open(href);
                on_close.call(());
            }
        }
    };

    rsx! {
        Modal {
            title: "Search Species",
            on_close: move |_| on_close.call(()),
            div {
                class: "search-dialog",
                input {
                    class: "search-input",
                    r#type: "text",
                    placeholder: "Search species by name...",
                    autofocus: true,
                    value: "{text}",
                    oninput: move |evt| query.set(evt.value()),
                    onkeydown: on_enter,
                }

                div { class: "divider", "Results" }

                div {
                    class: "search-results",
                    if text.trim().is_empty() {
                        div { class: "search-empty", "Enter a search term to find species" }
                    } else if results.is_empty() {
                        div { class: "search-empty", "No species found matching \"{text}\"" }
                    } else {
                        for (entry, campus) in results {
                            {
                                let href = map_href(&species_link(&entry));
                                let mut open = open.clone();
                                rsx! {
                                    button {
                                        key: "{entry.id}",
                                        class: "search-result",
                                        onclick: move |_| {
                                            query.set(String::new());
                                            open(href.clone());
                                            on_close.call(());
                                        },
                                        div { class: "result-name", "{entry.display_name()}" }
                                        if let Some(scientific) = entry.scientific_name() {
                                            div { class: "result-scientific", "{scientific}" }
                                        }
                                        div {
                                            class: "result-meta",
                                            div { span { class: "label", "Campus:" } " {campus}" }
                                            div {
                                                span { class: "label", "Coordinates:" }
                                                " {entry.latitude}, {entry.longitude}"
                                            }
                                            if let Some(category) = entry.species_data.as_ref().and_then(|s| s.category_name.as_deref()) {
                                                div {
                                                    span { class: "label", "Category:" }
                                                    span { class: "capitalize", " {category}" }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
