//! Fetching catalog data into the app state.
//!
//! Every load takes a ticket from the state before it awaits the store and
//! hands the ticket back with the result, so a slow response cannot
//! overwrite a newer one.

use std::sync::Arc;
use std::time::Duration;

use biodiversity_catalog::{CatalogStore, FetchSlot, RecordId};
use chrono::Utc;
use dioxus::prelude::*;
use tokio::time::sleep;

use crate::state::AppState;

/// How long the campus transition screen stays up.
pub const TRANSITION_DURATION: Duration = Duration::from_secs(3);

/// Shared handle to the catalog store.
/// Equality is by pointer identity.
#[derive(Clone)]
pub struct StoreHandle(pub Arc<dyn CatalogStore>);

impl StoreHandle {
    pub fn new(store: impl CatalogStore + 'static) -> Self {
        Self(Arc::new(store))
    }
}

impl PartialEq for StoreHandle {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

/// Context shared by every page.
#[derive(Clone, PartialEq)]
pub struct ViewerContext {
    pub store: StoreHandle,
    pub maptiler_key: String,
}

pub async fn load_campuses(store: StoreHandle, mut state: Signal<AppState>) {
    let ticket = state.write().begin_fetch(FetchSlot::Campuses);
    let result = store.0.list_campuses().await;
    state.write().finish_campuses(ticket, result, Utc::now());
}

pub async fn load_campus_species(store: StoreHandle, mut state: Signal<AppState>, campus: RecordId) {
    let ticket = state.write().begin_fetch(FetchSlot::CampusSpecies);
    let result = store.0.list_campus_species(&campus).await;
    state.write().finish_campus_species(ticket, result, Utc::now());
}

pub async fn load_all_species(store: StoreHandle, mut state: Signal<AppState>) {
    let ticket = state.write().begin_fetch(FetchSlot::AllCampusSpecies);
    let result = store.0.list_all_campus_species().await;
    state.write().finish_all_species(ticket, result, Utc::now());
}

pub async fn load_species_images(store: StoreHandle, mut state: Signal<AppState>, species: RecordId) {
    let ticket = state.write().begin_fetch(FetchSlot::SpeciesImages);
    let result = store.0.list_species_images(&species).await;
    state.write().finish_species_images(ticket, result, Utc::now());
}

/// Campuses for the home page and the search index, side by side.
pub async fn load_startup(store: StoreHandle, state: Signal<AppState>) {
    futures::join!(
        load_campuses(store.clone(), state),
        load_all_species(store, state),
    );
}

/// Navigates to `href` and starts whatever loads the new page needs.
pub fn open(store: StoreHandle, mut state: Signal<AppState>, href: String) {
    let navigation = state.write().navigate(&href);

    if let Some(campus) = navigation.load_campus {
        let transition = state.write().begin_transition();
        spawn(load_campus_species(store, state, campus));
        spawn(async move {
            sleep(TRANSITION_DURATION).await;
            state.write().end_transition(transition);
        });
    }
}

/// Opens the details modal for an occurrence and loads its gallery.
pub fn show_details(store: StoreHandle, mut state: Signal<AppState>, id: RecordId) {
    let species = state.write().open_details_by_id(&id);
    match species {
        Some(species) => {
            spawn(load_species_images(store, state, species));
        }
        None => tracing::debug!(id = %id, "Marker click for an occurrence no longer loaded"),
    }
}
