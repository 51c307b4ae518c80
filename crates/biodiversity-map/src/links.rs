//! Navigation links into the map page.
//!
//! Campus links and search links write `coordinates` in different column
//! orders: a campus link writes the stored `latitude,longitude` columns,
//! a search link writes `longitude,latitude`. The decoder always reads the
//! first component as longitude. Stored campus rows have their columns in
//! the order that makes this line up with the campus markers, so both link
//! shapes are kept as they are.

use biodiversity_catalog::{Campus, CampusSpecies};

use crate::params::{CoordinateParam, MapQuery, SEARCH_ZOOM};

/// Path of the map page.
pub const MAP_PATH: &str = "/map";

/// Link opening a campus at its own zoom.
pub fn campus_link(campus: &Campus) -> MapQuery {
    let coordinates = match (campus.latitude.as_deref(), campus.longitude.as_deref()) {
        (Some(latitude), Some(longitude)) => {
            CoordinateParam::parse(&format!("{},{}", latitude.trim(), longitude.trim()))
        }
        _ => None,
    };

    MapQuery {
        campus_id: Some(campus.id.clone()),
        coordinates,
        category: None,
        zoom: Some(campus.zoom_or_default()),
    }
}

/// Link focusing one occurrence, as produced by search.
pub fn species_link(entry: &CampusSpecies) -> MapQuery {
    MapQuery {
        campus_id: Some(entry.campus.clone()),
        coordinates: CoordinateParam::from_stored(&entry.latitude, &entry.longitude),
        category: entry.category(),
        zoom: Some(SEARCH_ZOOM),
    }
}

/// `/map?...` for a query.
pub fn map_href(query: &MapQuery) -> String {
    format!("{}?{}", MAP_PATH, query.to_query_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use biodiversity_catalog::{RecordId, SpeciesCategory};
    use serde_json::json;

    #[test]
    fn test_campus_link_keeps_stored_column_order() {
        let campus: Campus = serde_json::from_value(json!({
            "id": 1, "campus": "Cagayan de Oro", "latitude": "124.65", "longitude": "8.48"
        }))
        .unwrap();
        let link = campus_link(&campus);
        assert_eq!(link.coordinates.as_ref().unwrap().encode(), "124.65,8.48");
        assert_eq!(link.zoom, Some(15.0));
        assert_eq!(link.category, None);
    }

    #[test]
    fn test_species_link_writes_lng_first() {
        let entry: CampusSpecies = serde_json::from_value(json!({
            "id": 9, "campus": 2, "species": 4, "latitude": "8.5", "longitude": "121.0",
            "speciesData": {"id": 4, "category": "Birds"}
        }))
        .unwrap();
        let link = species_link(&entry);
        assert_eq!(link.campus_id, Some(RecordId::new("2")));
        assert_eq!(link.coordinates.as_ref().unwrap().encode(), "121.0,8.5");
        assert_eq!(link.category, Some(SpeciesCategory::Birds));
        assert_eq!(link.zoom, Some(SEARCH_ZOOM));
        assert!(map_href(&link).starts_with("/map?campusId=2&"));
    }
}
