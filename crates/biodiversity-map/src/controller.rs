//! Map view state.
//!
//! [`ViewState`] owns everything the map page renders from: the decoded
//! query, the loaded lists, the category filter, the center and the
//! highlighted occurrence. It only changes through [`reduce`].

use biodiversity_catalog::{Campus, CampusSpecies, RecordId, SpeciesCategory};
use tracing::debug;

use crate::filter::FilterSet;
use crate::geo::GeoPoint;
use crate::locator;
use crate::markers::{CampusMarker, SpeciesMarker};
use crate::params::MapQuery;
use crate::zoom::{DeviceClass, effective_zoom};

/// Which input currently decides the center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewPhase {
    /// Nothing loaded and no target in the URL.
    #[default]
    Uninitialized,
    /// Centered on the first loaded campus.
    CampusDefault,
    /// The URL targets a spot in a category; the filter is narrowed to it.
    SearchTarget,
    /// The URL targets a spot without a category; nothing is highlighted.
    SearchTargetNoCategory,
}

/// Inputs to the view state.
#[derive(Debug, Clone)]
pub enum ViewEvent {
    /// The page navigated to a new query string.
    QueryChanged(MapQuery),
    CampusesLoaded(Vec<Campus>),
    CampusSpeciesLoaded(Vec<CampusSpecies>),
    ToggleCategory(SpeciesCategory),
    ToggleAll,
    /// The viewport width changed, in CSS pixels.
    Resized { width: f64 },
}

#[derive(Debug, Clone)]
pub struct ViewState {
    query: MapQuery,
    campuses: Vec<Campus>,
    campus_species: Vec<CampusSpecies>,
    phase: ViewPhase,
    center: GeoPoint,
    filter: FilterSet,
    highlighted: Option<RecordId>,
    device: DeviceClass,
}

impl ViewState {
    /// State for a freshly opened map page.
    ///
    /// The filter starts at the query's category, or birds.
    pub fn new(query: MapQuery, viewport_width: f64) -> Self {
        let mut state = Self {
            filter: FilterSet::only(query.initial_category()),
            center: query.center(),
            query,
            campuses: Vec::new(),
            campus_species: Vec::new(),
            phase: ViewPhase::Uninitialized,
            highlighted: None,
            device: DeviceClass::from_width(viewport_width),
        };
        state.reevaluate();
        state
    }

    /// Applies one event in place. See [`reduce`].
    pub fn apply(&mut self, event: ViewEvent) {
        match event {
            ViewEvent::QueryChanged(query) => {
                self.query = query;
                self.reevaluate();
            }
            ViewEvent::CampusesLoaded(campuses) => {
                self.campuses = campuses;
                self.reevaluate();
            }
            ViewEvent::CampusSpeciesLoaded(entries) => {
                self.campus_species = entries;
                self.reevaluate();
            }
            ViewEvent::ToggleCategory(category) => self.filter.toggle(category),
            ViewEvent::ToggleAll => self.filter.toggle_all(),
            ViewEvent::Resized { width } => self.device = DeviceClass::from_width(width),
        }
    }

    /// Recomputes phase, center and highlight from the query and the loaded
    /// lists alone. The filter is only overwritten by a category search.
    fn reevaluate(&mut self) {
        let previous = self.phase;

        if self.query.targets_location() {
            self.center = self.query.center();
            match self.query.category {
                Some(category) => {
                    self.phase = ViewPhase::SearchTarget;
                    self.filter = FilterSet::only(category);
                    self.highlighted = locator::locate(
                        &self.campus_species,
                        self.query.coordinates.as_ref(),
                        Some(category),
                    );
                }
                None => {
                    self.phase = ViewPhase::SearchTargetNoCategory;
                    self.highlighted = None;
                }
            }
        } else if let Some(campus) = self.campuses.first() {
            self.phase = ViewPhase::CampusDefault;
            self.center = GeoPoint::new(campus.latitude_value(), campus.longitude_value());
            self.highlighted = None;
        } else {
            self.phase = ViewPhase::Uninitialized;
            self.center = self.query.center();
            self.highlighted = None;
        }

        if previous != self.phase {
            debug!(from = ?previous, to = ?self.phase, "Map view phase changed");
        }
    }

    pub fn query(&self) -> &MapQuery {
        &self.query
    }

    pub fn phase(&self) -> ViewPhase {
        self.phase
    }

    pub fn center(&self) -> GeoPoint {
        self.center
    }

    pub fn filter(&self) -> &FilterSet {
        &self.filter
    }

    pub fn device(&self) -> DeviceClass {
        self.device
    }

    pub fn campuses(&self) -> &[Campus] {
        &self.campuses
    }

    pub fn campus_species(&self) -> &[CampusSpecies] {
        &self.campus_species
    }

    /// The highlighted occurrence, if it is still in the loaded list.
    pub fn highlighted(&self) -> Option<&RecordId> {
        let id = self.highlighted.as_ref()?;
        self.campus_species
            .iter()
            .any(|entry| &entry.id == id)
            .then_some(id)
    }

    /// Zoom to hand the map after responsive adjustment.
    pub fn zoom(&self) -> f64 {
        effective_zoom(self.query.requested_zoom(), self.device)
    }

    /// Occurrences the filter admits.
    pub fn visible_species(&self) -> Vec<&CampusSpecies> {
        self.filter.visible(&self.campus_species)
    }

    /// `(visible, total)` for the filter bar counter.
    pub fn counts(&self) -> (usize, usize) {
        self.filter.counts(&self.campus_species)
    }

    /// The occurrence the URL points at, highlighted or not.
    pub fn searched_entry(&self) -> Option<&CampusSpecies> {
        locator::searched_entry(&self.campus_species, self.query.coordinates.as_ref())
    }

    pub fn species_markers(&self) -> Vec<SpeciesMarker> {
        let highlighted = self.highlighted();
        self.visible_species()
            .into_iter()
            .map(|entry| SpeciesMarker::new(entry, highlighted == Some(&entry.id)))
            .collect()
    }

    pub fn campus_markers(&self) -> Vec<CampusMarker> {
        self.campuses.iter().map(CampusMarker::new).collect()
    }
}

/// `(state, event) -> state`.
pub fn reduce(mut state: ViewState, event: ViewEvent) -> ViewState {
    state.apply(event);
    state
}
