//! Species details shown in the marker modal.

use biodiversity_catalog::ImageSource;
use dioxus::prelude::*;

use crate::state::AppState;

/// A hosted photo that falls back to the bundled image when it fails to load.
#[component]
fn SpeciesPhoto(
    image_id: Option<String>,
    alt: String,
    #[props(default)] class: String,
    on_open: Option<EventHandler<String>>,
) -> Element {
    let mut source = use_signal(|| ImageSource::for_image_id(image_id.as_deref()));
    let url = source.read().url().to_string();
    let clicked = url.clone();

    rsx! {
        img {
            class: "{class}",
            src: "{url}",
            alt: "{alt}",
            onerror: move |_| {
                let current = source.peek().clone();
                if !current.is_fallback() {
                    source.set(current.on_load_error());
                }
            },
            onclick: move |_| {
                if let Some(handler) = &on_open {
                    handler.call(clicked.clone());
                }
            },
        }
    }
}

#[component]
pub fn SpeciesDetailsView(mut state: Signal<AppState>) -> Element {
    let Some(details) = state.read().details.clone() else {
        return rsx! {};
    };
    let loading_images = state.read().loading.images;

    let entry = details.entry;
    let name = entry.display_name().to_string();
    let species = entry.species_data.as_ref();
    let photo_id = species.and_then(|s| s.gdriveid.clone());
    let scientific_name = species.and_then(|s| s.scientific_name.clone());
    let description = species.and_then(|s| s.description.clone());
    let taxonomy: Vec<(&'static str, String)> = species
        .map(|s| {
            s.taxonomy()
                .into_iter()
                .map(|(rank, value)| (rank, value.to_string()))
                .collect()
        })
        .unwrap_or_default();
    let fields = species.map(|s| s.detail_fields()).unwrap_or_default();
    let group_title = species.and_then(|s| s.group()).map(|group| group.title());

    rsx! {
        div {
            class: "species-details",

            div {
                class: "species-summary",
                SpeciesPhoto {
                    key: "{entry.species}",
                    image_id: photo_id,
                    alt: name.clone(),
                    class: "species-thumbnail",
                }

                div {
                    class: "species-text",
                    if let Some(scientific) = scientific_name {
                        p { class: "species-scientific", "{scientific}" }
                    }
                    if let Some(description) = description {
                        p { class: "species-description", "{description}" }
                    }
                }
            }

            table {
                class: "taxonomy-table",
                tbody {
                    for (rank, value) in taxonomy {
                        tr {
                            key: "{rank}",
                            th { "{rank}" }
                            td { "{value}" }
                        }
                    }
                }
            }

            if let Some(title) = group_title {
                if !fields.is_empty() {
                    section {
                        class: "species-group-details",
                        h3 { "{title}" }
                        dl {
                            for (label, value) in fields {
                                div {
                                    key: "{label}",
                                    class: "detail-row",
                                    dt { "{label}" }
                                    dd { "{value}" }
                                }
                            }
                        }
                    }
                }
            }

            section {
                class: "species-gallery",
                h3 { "Captured Images" }
                if loading_images {
                    div { class: "loader" }
                } else if details.images.is_empty() {
                    p { class: "gallery-empty", "No images captured yet." }
                } else {
                    div {
                        class: "gallery-grid",
                        for image in details.images {
                            figure {
                                key: "{image.id}",
                                class: "gallery-item",
                                SpeciesPhoto {
                                    image_id: image.gdriveid.clone(),
                                    alt: image.caption.clone().unwrap_or_else(|| name.clone()),
                                    class: "gallery-image",
                                    on_open: move |url: String| state.write().zoom_image(Some(url)),
                                }
                                if let Some(caption) = &image.caption {
                                    figcaption { "{caption}" }
                                }
                            }
                        }
                    }
                }
            }

            if let Some(url) = details.zoomed_image {
                div {
                    class: "image-zoom",
                    onclick: move |_| state.write().zoom_image(None),
                    img { src: "{url}", alt: "{name}" }
                }
            }
        }
    }
}
