//! App state driven by the sample catalog, the way the loader drives it.

use biodiversity_catalog::{CatalogStore, FetchSlot, InMemoryCatalogStore, RecordId};
use biodiversity_map::{MapLayer, ViewPhase};
use biodiversity_viewer::demo::demo_store;
use biodiversity_viewer::state::{AppState, NotificationLevel, Route};
use chrono::Utc;

async fn load_startup(store: &InMemoryCatalogStore, state: &mut AppState) {
    let ticket = state.begin_fetch(FetchSlot::Campuses);
    let result = store.list_campuses().await;
    state.finish_campuses(ticket, result, Utc::now());

    let ticket = state.begin_fetch(FetchSlot::AllCampusSpecies);
    let result = store.list_all_campus_species().await;
    state.finish_all_species(ticket, result, Utc::now());
}

async fn open(store: &InMemoryCatalogStore, state: &mut AppState, href: &str) {
    let navigation = state.navigate(href);
    if let Some(campus) = navigation.load_campus {
        let ticket = state.begin_fetch(FetchSlot::CampusSpecies);
        let result = store.list_campus_species(&campus).await;
        state.finish_campus_species(ticket, result, Utc::now());
    }
}

#[tokio::test]
async fn test_search_then_open_highlights_occurrence() {
    let store = demo_store().unwrap();
    let mut state = AppState::new(MapLayer::Satellite, 1280.0);
    load_startup(&store, &mut state).await;
    assert_eq!(state.campuses.len(), 4);
    assert_eq!(state.all_species.len(), 9);

    let href = state.submit_search("bulbul", Utc::now()).unwrap();
    assert_eq!(
        href,
        "/map?campusId=2&coordinates=124.6561%2C8.4857&category=birds&zoom=20"
    );

    open(&store, &mut state, &href).await;
    let view = state.view.as_ref().unwrap();
    assert_eq!(view.phase(), ViewPhase::SearchTarget);
    assert_eq!(view.highlighted(), Some(&RecordId::new("101")));
    assert_eq!(view.zoom(), 20.0);
    assert_eq!(view.counts(), (2, 5));
    assert_eq!(state.campus_label(), "Cagayan de Oro");
    assert_eq!(
        state.searched_species().map(|entry| entry.display_name()),
        Some("Philippine Bulbul")
    );

    let markers = view.species_markers();
    assert_eq!(markers.iter().filter(|m| m.highlighted).count(), 1);
}

#[tokio::test]
async fn test_clearing_search_keeps_campus_loaded() {
    let store = demo_store().unwrap();
    let mut state = AppState::new(MapLayer::Satellite, 1280.0);
    load_startup(&store, &mut state).await;

    let href = state.submit_search("narra", Utc::now()).unwrap();
    open(&store, &mut state, &href).await;
    assert!(state.view.as_ref().unwrap().highlighted().is_some());

    let clear = state.clear_search_href().unwrap();
    let navigation = state.navigate(&clear);
    assert_eq!(navigation.load_campus, None);

    let view = state.view.as_ref().unwrap();
    assert_eq!(view.highlighted(), None);
    assert_eq!(view.campus_species().len(), 5);
}

#[tokio::test]
async fn test_marker_click_opens_gallery() {
    let store = demo_store().unwrap();
    let mut state = AppState::new(MapLayer::Satellite, 1280.0);
    load_startup(&store, &mut state).await;
    open(&store, &mut state, "/map?campusId=2").await;

    let species = state.open_details_by_id(&RecordId::new("101")).unwrap();
    assert_eq!(species, RecordId::new("11"));

    let ticket = state.begin_fetch(FetchSlot::SpeciesImages);
    assert!(state.loading.images);
    let result = store.list_species_images(&species).await;
    state.finish_species_images(ticket, result, Utc::now());

    let details = state.details.as_ref().unwrap();
    assert!(!state.loading.images);
    assert_eq!(details.images.len(), 2);
    assert_eq!(details.entry.display_name(), "Philippine Bulbul");

    assert!(state.open_details_by_id(&RecordId::new("999")).is_none());
}

#[tokio::test]
async fn test_store_failure_becomes_toast() {
    let store = demo_store().unwrap();
    let mut state = AppState::new(MapLayer::Satellite, 1280.0);

    store.fail_next("catalog offline").await;
    load_startup(&store, &mut state).await;

    assert!(state.campuses.is_empty());
    assert_eq!(state.all_species.len(), 9);
    let toast = state.notifications.last().unwrap();
    assert_eq!(toast.level, NotificationLevel::Error);
    assert_eq!(toast.message, "catalog offline");
}

#[tokio::test]
async fn test_home_link_closes_map() {
    let store = demo_store().unwrap();
    let mut state = AppState::new(MapLayer::Satellite, 1280.0);
    load_startup(&store, &mut state).await;
    open(&store, &mut state, "/map?campusId=1").await;
    assert!(state.view.is_some());

    open(&store, &mut state, "/").await;
    assert_eq!(state.route, Route::Home);
    assert!(state.view.is_none());
    assert!(state.details.is_none());
}
