//! Campus list landing page.

use biodiversity_map::{campus_link, map_href};
use dioxus::prelude::*;

use crate::state::AppState;

use super::use_open;

const INTRO: &str = "The USTP Biodiversity catalogue documents the flora and fauna found \
across the campuses of the University of Science and Technology of Southern Philippines. \
From native trees and butterflies to birds and frogs, each entry records where a species \
was observed and what is known about it.";

#[component]
pub fn HomePage(state: Signal<AppState>) -> Element {
    let open = use_open(state);
    let loading = state.read().loading.campuses;
    let campuses = state.read().campuses.clone();

    rsx! {
        div {
            class: "home-page",

            header {
                class: "home-header",
                img { class: "home-logo", src: "assets/ustp-logo-on-white.png", alt: "USTP Logo" }
                div {
                    h1 { class: "home-title", "USTP Biodiversity" }
                    p {
                        class: "home-subtitle",
                        "University of Science and Technology of Southern Philippines"
                    }
                }
            }

            main {
                class: "home-main",

                section {
                    class: "home-intro",
                    p { "{INTRO}" }
                }

                section {
                    class: "home-campuses",
                    h2 { "Explore Our Campuses" }
                    p {
                        class: "home-hint",
                        "Select a campus to view its biodiversity map and discover the species found there"
                    }

                    if loading && campuses.is_empty() {
                        div { class: "loader" }
                    } else if campuses.is_empty() {
                        div {
                            class: "home-empty",
                            "No campuses available at the moment."
                        }
                    } else {
                        div {
                            class: "campus-grid",
                            for campus in campuses {
                                {
                                    let href = map_href(&campus_link(&campus));
                                    let mut open = open.clone();
                                    rsx! {
                                        button {
                                            key: "{campus.id}",
                                            class: "campus-card",
                                            onclick: move |_| open(href.clone()),
                                            div { class: "campus-pin", "\u{1F4CD}" }
                                            div {
                                                class: "campus-card-body",
                                                h3 { "{campus.name}" }
                                                if let Some(address) = &campus.address {
                                                    p { class: "campus-address", "{address}" }
                                                }
                                                span { class: "campus-explore", "Explore biodiversity" }
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
