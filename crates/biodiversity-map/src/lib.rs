//! # Biodiversity Map
//!
//! View state for the campus biodiversity map, independent of any UI toolkit.
//!
//! The map page is driven by a navigation query string
//! (`campusId`, `coordinates`, `category`, `zoom`) and by the catalog lists
//! loaded for it. This crate turns those into a center, a zoom, a category
//! filter, a highlighted occurrence and the markers to draw.
//!
//! ## Features
//!
//! - **MapQuery**: typed decoding of the map page query string
//! - **FilterSet**: the active categories, with an all-or-nothing toggle
//! - **ViewState / reduce**: pure `(state, event) -> state` view controller
//! - **RecenterGate**: recenters a [`MapHandle`] only when the center value changes
//! - **Markers**: icon, tooltip and placement for species and campus pins
//! - **Search and links**: species search and the links it navigates to
//!
//! ## Coordinate order
//!
//! `coordinates` is written `lng,lat` and decodes to `(lat, lng)`. The
//! locator compares a row's `latitude` text with the second component and
//! its `longitude` text with the first. Keep both sides in step.
//!
//! ## Example
//!
//! ```rust,ignore
//! use biodiversity_map::{MapQuery, ViewEvent, ViewState, reduce};
//!
//! let query = MapQuery::parse("campusId=C1&coordinates=121.0,8.5&category=birds");
//! let state = ViewState::new(query, 1280.0);
//! let state = reduce(state, ViewEvent::CampusSpeciesLoaded(entries));
//!
//! assert_eq!(state.center().lat, 8.5);
//! ```

pub mod controller;
pub mod filter;
pub mod geo;
pub mod icons;
pub mod layers;
pub mod links;
pub mod locator;
pub mod markers;
pub mod params;
pub mod search;
pub mod viewport;
pub mod zoom;

// Re-exports
pub use controller::{ViewEvent, ViewPhase, ViewState, reduce};
pub use filter::FilterSet;
pub use geo::GeoPoint;
pub use icons::{MarkerIcon, MarkerStyle};
pub use layers::MapLayer;
pub use links::{MAP_PATH, campus_link, map_href, species_link};
pub use locator::{locate, searched_entry};
pub use markers::{CampusMarker, MarkerTooltip, SpeciesMarker};
pub use params::{CoordinateParam, DEFAULT_ZOOM, MapQuery, SEARCH_ZOOM};
pub use search::search;
pub use viewport::{MapHandle, RecenterGate};
pub use zoom::{DeviceClass, MOBILE_BREAKPOINT_PX, MOBILE_DEFAULT_ZOOM, effective_zoom};
