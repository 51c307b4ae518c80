//! Root application component for the biodiversity viewer.

use dioxus::prelude::*;

use crate::loader::{self, ViewerContext};
use crate::state::{AppState, Route};

use super::{HomePage, MapPage, Modal, SpeciesDetailsView, ToastStack};

/// Root application component.
#[component]
pub fn App(mut state: Signal<AppState>) -> Element {
    let is_map = matches!(state.read().route, Route::Map(_));
    let details_title = state
        .read()
        .details
        .as_ref()
        .map(|details| details.entry.display_name().to_string());

    rsx! {
        div {
            class: "biodiversity-viewer",

            if is_map {
                MapPage { state }
            } else {
                HomePage { state }
            }

            if let Some(title) = details_title {
                Modal {
                    title,
                    wide: true,
                    on_close: move |_| state.write().close_details(),
                    SpeciesDetailsView { state }
                }
            }

            ToastStack { state }
        }
    }
}

/// Navigation callback for page components.
pub fn use_open(state: Signal<AppState>) -> impl FnMut(String) + Clone + 'static {
    let ctx = use_context::<ViewerContext>();
    move |href: String| loader::open(ctx.store.clone(), state, href)
}
