//! The campus map page: toolbar, side panel, dialogs and the map itself.

use biodiversity_map::{MapLayer, campus_link, map_href};
use dioxus::prelude::*;

use crate::state::AppState;

use super::{FilterBar, MapView, Modal, SearchModal, use_open};

const ABOUT: &str = "The USTP Biodiversity application showcases specimens and observations \
recorded across the university's campuses, with descriptions of each species to support \
the study and conservation of local biodiversity.";

/// Which toolbar dialog is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Dialog {
    Search,
    Campus,
    Layer,
}

#[component]
pub fn MapPage(state: Signal<AppState>) -> Element {
    let mut dialog = use_signal(|| None::<Dialog>);
    let mut show_panel = use_signal(|| false);
    let open = use_open(state);

    if state.read().transitioning {
        return rsx! { TransitionScreen { state } };
    }

    let campus_label = state.read().campus_label().to_string();

    rsx! {
        div {
            class: "map-page",

            if *show_panel.read() {
                InfoPanel {}
            }

            div {
                class: "map-toolbar",

                div {
                    class: "toolbar-left",
                    button {
                        class: "toolbar-button",
                        title: "Menu",
                        onclick: move |_| show_panel.toggle(),
                        if *show_panel.read() { "\u{2715}" } else { "\u{2630}" }
                    }
                    button {
                        class: "toolbar-button",
                        title: "Home",
                        onclick: {
                            let mut open = open.clone();
                            move |_| open("/".to_string())
                        },
                        "\u{2302}"
                    }
                    button {
                        class: "toolbar-button",
                        title: "Search species",
                        onclick: move |_| dialog.set(Some(Dialog::Search)),
                        "\u{1F50D}"
                    }
                    SearchBanner { state }
                }

                div {
                    class: "toolbar-right",
                    button {
                        class: "toolbar-button campus-picker",
                        onclick: move |_| dialog.set(Some(Dialog::Campus)),
                        span { class: "pin", "\u{1F4CD}" }
                        span { "{campus_label}" }
                    }
                    button {
                        class: "toolbar-button",
                        onclick: move |_| dialog.set(Some(Dialog::Layer)),
                        "Map"
                    }
                }
            }

            main {
                class: "map-main",
                MapView { state }
                FilterBar { state }
            }

            {match *dialog.read() {
                Some(Dialog::Search) => rsx! {
                    SearchModal { state, on_close: move |_| dialog.set(None) }
                },
                Some(Dialog::Campus) => rsx! {
                    CampusModal { state, on_close: move |_| dialog.set(None) }
                },
                Some(Dialog::Layer) => rsx! {
                    LayerModal { state, on_close: move |_| dialog.set(None) }
                },
                None => rsx! {},
            }}
        }
    }
}

/// Shown while a campus loads.
#[component]
fn TransitionScreen(state: Signal<AppState>) -> Element {
    let campus = state.read().current_campus().cloned();

    rsx! {
        div {
            class: "transition-screen",
            img { class: "transition-logo", src: "assets/ustp-logo-on-white.png", alt: "USTP Logo" }
            h1 { "USTP Biodiversity" }
            div {
                class: "transition-card",
                {match campus {
                    Some(campus) => rsx! {
                        p { class: "transition-caption", "Transitioning to" }
                        h2 { "{campus.name}" }
                        if let Some(address) = campus.address {
                            p { class: "transition-address", "{address}" }
                        }
                    },
                    None => rsx! {
                        p { "Loading campus information..." }
                        div { class: "loader" }
                    },
                }}
            }
        }
    }
}

#[component]
fn InfoPanel() -> Element {
    rsx! {
        aside {
            class: "info-panel",
            img { class: "info-logo", src: "assets/ustp-logo-on-white.png", alt: "USTP Logo" }
            p { class: "info-university", "University of Science and Technology of Southern Philippines" }
            p { class: "info-about", "{ABOUT}" }
            p {
                class: "info-links",
                "Links: "
                a { href: "https://ustp.edu.ph/", target: "_blank", "USTP Website" }
            }
        }
    }
}

/// The species the URL points at, with a button back to the campus view.
#[component]
fn SearchBanner(state: Signal<AppState>) -> Element {
    let open = use_open(state);
    let searched = state.read().searched_species().cloned();
    let clear_href = state.read().clear_search_href();

    let Some(entry) = searched else {
        return rsx! {};
    };

    rsx! {
        div {
            class: "search-banner",
            div {
                class: "search-banner-text",
                span { class: "search-banner-name", "{entry.display_name()}" }
                if let Some(scientific) = entry.scientific_name() {
                    span { class: "search-banner-scientific", "{scientific}" }
                }
            }
            if let Some(href) = clear_href {
                button {
                    class: "search-banner-clear",
                    title: "Clear search",
                    onclick: {
                        let mut open = open.clone();
                        move |_| open(href.clone())
                    },
                    "\u{2715}"
                }
            }
        }
    }
}

#[component]
fn CampusModal(state: Signal<AppState>, on_close: EventHandler<()>) -> Element {
    let open = use_open(state);
    let campuses = state.read().campuses.clone();
    let selected = state.read().current_campus().map(|campus| campus.id.clone());

    rsx! {
        Modal {
            title: "Select Campus",
            on_close: move |_| on_close.call(()),
            div {
                class: "choice-list",
                for campus in campuses {
                    {
                        let href = map_href(&campus_link(&campus));
                        let class = if selected.as_ref() == Some(&campus.id) { "choice selected" } else { "choice" };
                        let mut open = open.clone();
                        rsx! {
                            button {
                                key: "{campus.id}",
                                class: "{class}",
                                onclick: move |_| {
                                    open(href.clone());
                                    on_close.call(());
                                },
                                div { class: "choice-name", "{campus.name}" }
                                if let Some(address) = &campus.address {
                                    div { class: "choice-description", "{address}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn LayerModal(mut state: Signal<AppState>, on_close: EventHandler<()>) -> Element {
    let current = state.read().layer;

    rsx! {
        Modal {
            title: "Select Map Layer",
            on_close: move |_| on_close.call(()),
            div {
                class: "choice-list",
                for layer in MapLayer::ALL {
                    button {
                        key: "{layer.id()}",
                        class: if layer == current { "choice selected" } else { "choice" },
                        onclick: move |_| {
                            state.write().set_layer(layer);
                            on_close.call(());
                        },
                        div { class: "choice-name", "{layer.name()}" }
                        div { class: "choice-description", "{layer.description()}" }
                    }
                }
            }
        }
    }
}
