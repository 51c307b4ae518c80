//! Main application state for the biodiversity viewer.

use biodiversity_catalog::{
    Campus, CampusSpecies, CatalogError, FetchSequencer, FetchSlot, FetchTicket, RecordId,
    SpeciesCategory, SpeciesImage,
};
use biodiversity_map::{
    MapLayer, ViewEvent, ViewState, campus_link, map_href, search, species_link,
};
use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use super::{NotificationLevel, Notifications, Route};

/// Which fetches are in flight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadingFlags {
    pub campuses: bool,
    pub campus_species: bool,
    pub all_species: bool,
    pub images: bool,
}

impl LoadingFlags {
    fn set(&mut self, slot: FetchSlot, value: bool) {
        match slot {
            FetchSlot::Campuses => self.campuses = value,
            FetchSlot::CampusSpecies => self.campus_species = value,
            FetchSlot::AllCampusSpecies => self.all_species = value,
            FetchSlot::SpeciesImages => self.images = value,
        }
    }
}

/// The species details modal.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeciesDetails {
    pub entry: CampusSpecies,
    pub images: Vec<SpeciesImage>,
    /// Image URL shown full size, if any.
    pub zoomed_image: Option<String>,
}

/// What a navigation asks the caller to load.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Navigation {
    /// The map page was entered or switched campus.
    pub load_campus: Option<RecordId>,
}

/// Main application state.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Current page.
    pub route: Route,

    /// Selected base layer.
    pub layer: MapLayer,

    /// Campuses, ordered by name.
    pub campuses: Vec<Campus>,

    /// Every campus species row, for search.
    pub all_species: Vec<CampusSpecies>,

    /// Map view state while the map page is open.
    pub view: Option<ViewState>,

    /// Open species details, if any.
    pub details: Option<SpeciesDetails>,

    pub loading: LoadingFlags,

    pub notifications: Notifications,

    /// Whether the campus transition screen is up.
    pub transitioning: bool,

    transition_seq: u64,
    viewport_width: f64,
    sequencer: FetchSequencer,
}

impl AppState {
    pub fn new(layer: MapLayer, viewport_width: f64) -> Self {
        Self {
            route: Route::Home,
            layer,
            campuses: Vec::new(),
            all_species: Vec::new(),
            view: None,
            details: None,
            loading: LoadingFlags::default(),
            notifications: Notifications::default(),
            transitioning: false,
            transition_seq: 0,
            viewport_width,
            sequencer: FetchSequencer::new(),
        }
    }

    /// Opens the page at `href`.
    pub fn navigate(&mut self, href: &str) -> Navigation {
        let route = Route::parse(href).resolve();
        debug!(href = %route.href(), "Navigating");

        let previous_campus = self
            .route
            .map_query()
            .and_then(|query| query.campus_id.clone());

        let navigation = match &route {
            Route::Home => {
                self.view = None;
                self.details = None;
                Navigation::default()
            }
            Route::Map(query) => {
                let entering = self.view.is_none();
                match self.view.as_mut() {
                    Some(view) => view.apply(ViewEvent::QueryChanged(query.clone())),
                    None => {
                        let mut view = ViewState::new(query.clone(), self.viewport_width);
                        view.apply(ViewEvent::CampusesLoaded(self.campuses.clone()));
                        self.view = Some(view);
                    }
                }

                let campus_changed = previous_campus != query.campus_id;
                if entering || campus_changed {
                    Navigation {
                        load_campus: query.campus_id.clone(),
                    }
                } else {
                    Navigation::default()
                }
            }
        };

        self.route = route;
        navigation
    }

    pub fn href(&self) -> String {
        self.route.href()
    }

    /// Starts a fetch for `slot`, superseding one already in flight.
    pub fn begin_fetch(&mut self, slot: FetchSlot) -> FetchTicket {
        self.loading.set(slot, true);
        self.sequencer.begin(slot)
    }

    /// Common handling for a finished fetch. Stale responses yield `None`
    /// and leave the loading flag to the newer fetch; failures queue an
    /// error toast and keep the previous data.
    fn settle<T>(
        &mut self,
        ticket: FetchTicket,
        result: Result<T, CatalogError>,
        now: DateTime<Utc>,
    ) -> Option<T> {
        if !self.sequencer.is_current(ticket) {
            return None;
        }
        self.loading.set(ticket.slot(), false);

        match result {
            Ok(rows) => Some(rows),
            Err(e) => {
                warn!(slot = ?ticket.slot(), error = %e, "Catalog fetch failed");
                self.notify(NotificationLevel::Error, e.user_message(), now);
                None
            }
        }
    }

    pub fn finish_campuses(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<Campus>, CatalogError>,
        now: DateTime<Utc>,
    ) {
        let Some(campuses) = self.settle(ticket, result, now) else {
            return;
        };
        info!(count = campuses.len(), "Campuses loaded");
        if let Some(view) = self.view.as_mut() {
            view.apply(ViewEvent::CampusesLoaded(campuses.clone()));
        }
        self.campuses = campuses;
    }

    pub fn finish_campus_species(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<CampusSpecies>, CatalogError>,
        now: DateTime<Utc>,
    ) {
        let Some(entries) = self.settle(ticket, result, now) else {
            return;
        };
        info!(count = entries.len(), "Campus species loaded");
        if let Some(view) = self.view.as_mut() {
            view.apply(ViewEvent::CampusSpeciesLoaded(entries));
        }
    }

    pub fn finish_all_species(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<CampusSpecies>, CatalogError>,
        now: DateTime<Utc>,
    ) {
        if let Some(entries) = self.settle(ticket, result, now) {
            debug!(count = entries.len(), "Search index loaded");
            self.all_species = entries;
        }
    }

    pub fn finish_species_images(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<SpeciesImage>, CatalogError>,
        now: DateTime<Utc>,
    ) {
        let Some(images) = self.settle(ticket, result, now) else {
            return;
        };
        if let Some(details) = self.details.as_mut() {
            details.images = images;
        }
    }

    pub fn notify(
        &mut self,
        level: NotificationLevel,
        message: impl Into<String>,
        now: DateTime<Utc>,
    ) -> u64 {
        self.notifications.push(level, message, now)
    }

    /// Opens the details modal; returns the species whose images to load.
    pub fn open_details(&mut self, entry: CampusSpecies) -> RecordId {
        let species = entry.species.clone();
        debug!(species = %species, "Opening species details");
        self.details = Some(SpeciesDetails {
            entry,
            images: Vec::new(),
            zoomed_image: None,
        });
        species
    }

    /// Opens details for a marker by its occurrence id.
    pub fn open_details_by_id(&mut self, id: &RecordId) -> Option<RecordId> {
        let entry = self
            .view
            .as_ref()?
            .campus_species()
            .iter()
            .find(|entry| &entry.id == id)?
            .clone();
        Some(self.open_details(entry))
    }

    pub fn close_details(&mut self) {
        self.details = None;
    }

    pub fn zoom_image(&mut self, url: Option<String>) {
        if let Some(details) = self.details.as_mut() {
            details.zoomed_image = url;
        }
    }

    pub fn toggle_category(&mut self, category: SpeciesCategory) {
        if let Some(view) = self.view.as_mut() {
            view.apply(ViewEvent::ToggleCategory(category));
        }
    }

    pub fn toggle_all(&mut self) {
        if let Some(view) = self.view.as_mut() {
            view.apply(ViewEvent::ToggleAll);
        }
    }

    pub fn resize(&mut self, width: f64) {
        self.viewport_width = width;
        if let Some(view) = self.view.as_mut() {
            view.apply(ViewEvent::Resized { width });
        }
    }

    pub fn set_layer(&mut self, layer: MapLayer) {
        info!(layer = %layer, "Switching base layer");
        self.layer = layer;
    }

    /// Search results across every campus.
    pub fn search_results(&self, query: &str) -> Vec<&CampusSpecies> {
        search::search(&self.all_species, query)
    }

    /// Enter in the search box: the link to the first match, or an info
    /// toast when nothing matches.
    pub fn submit_search(&mut self, query: &str, now: DateTime<Utc>) -> Option<String> {
        match search::first_match(&self.all_species, query) {
            Some(entry) => Some(map_href(&species_link(entry))),
            None => {
                self.notify(NotificationLevel::Info, search::no_match_message(query), now);
                None
            }
        }
    }

    /// The campus the map page is showing.
    pub fn current_campus(&self) -> Option<&Campus> {
        let campus_id = self.route.map_query()?.campus_id.as_ref()?;
        self.campuses.iter().find(|campus| &campus.id == campus_id)
    }

    /// Label of the campus picker.
    pub fn campus_label(&self) -> &str {
        self.current_campus()
            .map(|campus| campus.name.as_str())
            .unwrap_or("Select")
    }

    /// Where the searched-species banner's clear button goes.
    pub fn clear_search_href(&self) -> Option<String> {
        self.current_campus()
            .map(|campus| map_href(&campus_link(campus)))
    }

    /// The loaded occurrence the URL coordinates point at.
    pub fn searched_species(&self) -> Option<&CampusSpecies> {
        self.view.as_ref()?.searched_entry()
    }

    pub fn begin_transition(&mut self) -> u64 {
        self.transition_seq += 1;
        self.transitioning = true;
        self.transition_seq
    }

    /// Ends the transition started as `seq`, unless a newer one began.
    pub fn end_transition(&mut self, seq: u64) {
        if seq == self.transition_seq {
            self.transitioning = false;
        }
    }

    /// "Transitioning to <campus>" once the campus is known.
    pub fn transition_label(&self) -> String {
        match self.current_campus() {
            Some(campus) => format!("Transitioning to {}", campus.name),
            None => "Loading campus information...".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use biodiversity_map::ViewPhase;
    use serde_json::json;

    fn campus(id: u32, name: &str) -> Campus {
        serde_json::from_value(json!({
            "id": id, "campus": name, "latitude": "8.48", "longitude": "124.65", "zoom": 17
        }))
        .unwrap()
    }

    fn occurrence(id: u32, campus: u32, name: &str, category: &str) -> CampusSpecies {
        serde_json::from_value(json!({
            "id": id, "campus": campus, "species": id * 10, "latitude": "8.5", "longitude": "121.0",
            "speciesData": {"id": id * 10, "commonName": name, "category": category}
        }))
        .unwrap()
    }

    fn state() -> AppState {
        AppState::new(MapLayer::Satellite, 1280.0)
    }

    #[test]
    fn test_entering_map_requests_campus_load() {
        let mut state = state();
        let nav = state.navigate("/map?campusId=1");
        assert_eq!(nav.load_campus, Some(RecordId::new("1")));
        assert!(state.view.is_some());

        // same campus, new coordinates: no reload
        let nav = state.navigate("/map?campusId=1&coordinates=121.0,8.5");
        assert_eq!(nav.load_campus, None);

        let nav = state.navigate("/map?campusId=2");
        assert_eq!(nav.load_campus, Some(RecordId::new("2")));
    }

    #[test]
    fn test_map_without_campus_goes_home() {
        let mut state = state();
        state.navigate("/map?zoom=20");
        assert_eq!(state.route, Route::Home);
        assert!(state.view.is_none());
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut state = state();
        let now = Utc::now();
        let first = state.begin_fetch(FetchSlot::Campuses);
        let second = state.begin_fetch(FetchSlot::Campuses);

        state.finish_campuses(second, Ok(vec![campus(2, "Jasaan")]), now);
        state.finish_campuses(first, Ok(vec![campus(1, "Alubijid")]), now);

        assert_eq!(state.campuses.len(), 1);
        assert_eq!(state.campuses[0].name, "Jasaan");
        assert!(!state.loading.campuses);
    }

    #[test]
    fn test_failed_fetch_keeps_previous_data() {
        let mut state = state();
        let now = Utc::now();
        let ticket = state.begin_fetch(FetchSlot::Campuses);
        state.finish_campuses(ticket, Ok(vec![campus(1, "Alubijid")]), now);

        let ticket = state.begin_fetch(FetchSlot::Campuses);
        state.finish_campuses(ticket, Err(CatalogError::status(503, "service unavailable")), now);

        assert_eq!(state.campuses.len(), 1);
        let toast = state.notifications.last().unwrap();
        assert_eq!(toast.level, NotificationLevel::Error);
        assert_eq!(toast.message, "service unavailable");
    }

    #[test]
    fn test_loaded_campuses_reach_open_map() {
        let mut state = state();
        state.navigate("/map?campusId=1");
        let ticket = state.begin_fetch(FetchSlot::Campuses);
        state.finish_campuses(ticket, Ok(vec![campus(1, "Alubijid")]), Utc::now());

        let view = state.view.as_ref().unwrap();
        assert_eq!(view.phase(), ViewPhase::CampusDefault);
        assert_eq!(state.campus_label(), "Alubijid");
        assert_eq!(state.transition_label(), "Transitioning to Alubijid");
    }

    #[test]
    fn test_submit_search() {
        let mut state = state();
        let now = Utc::now();
        let ticket = state.begin_fetch(FetchSlot::AllCampusSpecies);
        state.finish_all_species(
            ticket,
            Ok(vec![
                occurrence(1, 3, "Rufous Hornbill", "Birds"),
                occurrence(2, 3, "Philippine Tarsier", "Bats"),
            ]),
            now,
        );

        let href = state.submit_search("hornbill", now).unwrap();
        assert_eq!(
            href,
            "/map?campusId=3&coordinates=121.0%2C8.5&category=birds&zoom=20"
        );

        assert!(state.submit_search("eagle", now).is_none());
        assert_eq!(
            state.notifications.last().unwrap().message,
            "No species found matching \"eagle\""
        );
    }

    #[test]
    fn test_details_receive_images() {
        let mut state = state();
        let species = state.open_details(occurrence(1, 1, "Narra", "Trees"));
        assert_eq!(species, RecordId::new("10"));

        let image: SpeciesImage =
            serde_json::from_value(json!({"id": 1, "species": 10, "gdriveid": "g1"})).unwrap();
        let ticket = state.begin_fetch(FetchSlot::SpeciesImages);
        state.finish_species_images(ticket, Ok(vec![image]), Utc::now());
        assert_eq!(state.details.as_ref().unwrap().images.len(), 1);

        state.close_details();
        assert!(state.details.is_none());
    }

    #[test]
    fn test_filter_events_reach_view() {
        let mut state = state();
        state.navigate("/map?campusId=1");
        state.toggle_all();
        assert!(state.view.as_ref().unwrap().filter().is_all());
        state.toggle_category(SpeciesCategory::Frogs);
        assert!(!state.view.as_ref().unwrap().filter().contains(SpeciesCategory::Frogs));
    }

    #[test]
    fn test_newer_transition_wins() {
        let mut state = state();
        let first = state.begin_transition();
        let second = state.begin_transition();
        state.end_transition(first);
        assert!(state.transitioning);
        state.end_transition(second);
        assert!(!state.transitioning);
    }
}
