//! Navigation query parameters.
//!
//! The map page is driven by four query parameters:
//!
//! | key           | form                    | absent / malformed       |
//! |---------------|-------------------------|--------------------------|
//! | `campusId`    | opaque id               | no campus                |
//! | `coordinates` | `"lng,lat"`             | center (0,0)             |
//! | `category`    | category name, any case | filter starts at `birds` |
//! | `zoom`        | number                  | zoom 40                  |
//!
//! **Coordinate order.** The `coordinates` value is written longitude first
//! and decoded into (lat, lng). The species locator relies on the same
//! inversion when matching stored rows, so both ends must change together
//! or not at all.
//!
//! Nothing here fails: every bad value decodes to its documented default.

use std::fmt;

use biodiversity_catalog::{RecordId, SpeciesCategory};
use url::form_urlencoded;

use crate::geo::GeoPoint;

/// Zoom used when the URL asks for none. Doubles as the marker for "no
/// explicit zoom" in responsive zoom selection.
pub const DEFAULT_ZOOM: f64 = 40.0;

/// Zoom written into search result links.
pub const SEARCH_ZOOM: f64 = 20.0;

/// A decoded `coordinates` parameter.
///
/// Keeps the verbatim text of both components, since stored rows are
/// matched against the text rather than the parsed numbers.
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinateParam {
    point: GeoPoint,
    lng_text: String,
    lat_text: String,
}

impl CoordinateParam {
    /// Decodes `"lng,lat"` into a (lat, lng) point.
    ///
    /// Returns `None` unless the value has exactly two finite numeric parts.
    pub fn parse(raw: &str) -> Option<Self> {
        let mut parts = raw.split(',');
        let (lng_text, lat_text) = match (parts.next(), parts.next(), parts.next()) {
            (Some(first), Some(second), None) => (first.trim(), second.trim()),
            _ => return None,
        };

        let lng: f64 = lng_text.parse().ok()?;
        let lat: f64 = lat_text.parse().ok()?;
        if !lng.is_finite() || !lat.is_finite() {
            return None;
        }

        Some(Self {
            point: GeoPoint::new(lat, lng),
            lng_text: lng_text.to_string(),
            lat_text: lat_text.to_string(),
        })
    }

    /// Builds a parameter from stored latitude/longitude text.
    pub fn from_stored(latitude: &str, longitude: &str) -> Option<Self> {
        Self::parse(&format!("{},{}", longitude.trim(), latitude.trim()))
    }

    /// The decoded point, (lat, lng).
    pub fn point(&self) -> GeoPoint {
        self.point
    }

    /// First URL component, the longitude, as written.
    pub fn lng_text(&self) -> &str {
        &self.lng_text
    }

    /// Second URL component, the latitude, as written.
    pub fn lat_text(&self) -> &str {
        &self.lat_text
    }

    /// Re-encodes in URL order, `"lng,lat"`.
    pub fn encode(&self) -> String {
        format!("{},{}", self.lng_text, self.lat_text)
    }
}

impl fmt::Display for CoordinateParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

/// The typed form of the map page's query string.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MapQuery {
    pub campus_id: Option<RecordId>,
    pub coordinates: Option<CoordinateParam>,
    pub category: Option<SpeciesCategory>,
    /// Explicitly requested zoom; `None` means [`DEFAULT_ZOOM`].
    pub zoom: Option<f64>,
}

impl MapQuery {
    /// Decodes a query string, with or without the leading `?`. Unknown keys
    /// are ignored; for repeated keys the last one wins.
    pub fn parse(query: &str) -> Self {
        let query = query.trim().trim_start_matches('?');
        let mut parsed = MapQuery::default();

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            let value = value.trim();
            match key.as_ref() {
                "campusId" => {
                    parsed.campus_id = (!value.is_empty()).then(|| RecordId::new(value));
                }
                "coordinates" => parsed.coordinates = CoordinateParam::parse(value),
                "category" => parsed.category = SpeciesCategory::parse_lenient(value),
                "zoom" => parsed.zoom = parse_zoom(value),
                _ => {}
            }
        }

        parsed
    }

    /// Center the URL asks for, or (0,0) when it names none.
    pub fn center(&self) -> GeoPoint {
        self.coordinates
            .as_ref()
            .map(CoordinateParam::point)
            .unwrap_or(GeoPoint::ORIGIN)
    }

    /// The zoom to request from the map before responsive adjustment.
    pub fn requested_zoom(&self) -> f64 {
        self.zoom.unwrap_or(DEFAULT_ZOOM)
    }

    /// Category the filter starts with when the map first opens.
    pub fn initial_category(&self) -> SpeciesCategory {
        self.category.unwrap_or_default()
    }

    /// Whether campus and coordinates are both present, i.e. the URL targets
    /// a specific spot instead of the campus default view.
    pub fn targets_location(&self) -> bool {
        self.campus_id.is_some() && self.coordinates.is_some()
    }

    /// Encodes back into a query string (without `?`), keys in canonical order.
    pub fn to_query_string(&self) -> String {
        let mut out = form_urlencoded::Serializer::new(String::new());
        if let Some(campus_id) = &self.campus_id {
            out.append_pair("campusId", campus_id.as_str());
        }
        if let Some(coordinates) = &self.coordinates {
            out.append_pair("coordinates", &coordinates.encode());
        }
        if let Some(category) = &self.category {
            out.append_pair("category", category.as_str());
        }
        if let Some(zoom) = self.zoom {
            out.append_pair("zoom", &zoom.to_string());
        }
        out.finish()
    }
}

/// Zero, negative, and non-numeric zooms count as absent.
fn parse_zoom(value: &str) -> Option<f64> {
    value
        .parse::<f64>()
        .ok()
        .filter(|zoom| zoom.is_finite() && *zoom > 0.0)
}
