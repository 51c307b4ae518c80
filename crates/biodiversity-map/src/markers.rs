//! Marker descriptions handed to the map renderer.

use biodiversity_catalog::{Campus, CampusSpecies, ImageSource, RecordId};
use serde::Serialize;

use crate::geo::GeoPoint;
use crate::icons::{MarkerIcon, MarkerStyle};

/// Tooltip content for a species marker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerTooltip {
    pub title: String,
    pub scientific_name: Option<String>,
    pub category: Option<String>,
    /// `Lat: 8.500000, Lng: 121.000000`
    pub coordinates: String,
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpeciesMarker {
    pub id: RecordId,
    pub position: GeoPoint,
    pub highlighted: bool,
    pub style: MarkerStyle,
    pub tooltip: MarkerTooltip,
}

impl SpeciesMarker {
    pub fn new(entry: &CampusSpecies, highlighted: bool) -> Self {
        let position = GeoPoint::from(entry.position());
        let species = entry.species_data.as_ref();
        let icon = MarkerIcon::for_category(entry.category());

        Self {
            id: entry.id.clone(),
            position,
            highlighted,
            style: MarkerStyle::species(icon, highlighted),
            tooltip: MarkerTooltip {
                title: entry.display_name().to_string(),
                scientific_name: entry.scientific_name().map(str::to_string),
                category: species.and_then(|s| s.category_name.clone()),
                coordinates: format!("Lat: {:.6}, Lng: {:.6}", position.lat, position.lng),
                image_url: ImageSource::for_image_id(species.and_then(|s| s.gdriveid.as_deref()))
                    .url()
                    .to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CampusMarker {
    pub id: RecordId,
    pub position: GeoPoint,
    pub style: MarkerStyle,
    pub label: String,
}

impl CampusMarker {
    /// Campus pins are placed at (longitude, latitude) of the stored row,
    /// matching the column order campus links are written in.
    pub fn new(campus: &Campus) -> Self {
        Self {
            id: campus.id.clone(),
            position: GeoPoint::new(campus.longitude_value(), campus.latitude_value()),
            style: MarkerStyle::campus(),
            label: format!("{} Campus", campus.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tooltip_formats_coordinates() {
        let entry: CampusSpecies = serde_json::from_value(json!({
            "id": 1, "campus": 1, "species": 1, "latitude": "8.5", "longitude": "121",
            "speciesData": {"id": 1, "commonName": "Narra", "category": "Trees", "gdriveid": "abc"}
        }))
        .unwrap();
        let marker = SpeciesMarker::new(&entry, false);
        assert_eq!(marker.tooltip.coordinates, "Lat: 8.500000, Lng: 121.000000");
        assert_eq!(marker.tooltip.category.as_deref(), Some("Trees"));
        assert!(marker.tooltip.image_url.contains("id=abc"));
        assert_eq!(marker.style.icon_url, MarkerIcon::Tree.asset());
    }

    #[test]
    fn test_unnamed_species_title() {
        let entry: CampusSpecies = serde_json::from_value(json!({
            "id": 1, "campus": 1, "species": 1, "latitude": "1", "longitude": "2"
        }))
        .unwrap();
        let marker = SpeciesMarker::new(&entry, true);
        assert_eq!(marker.tooltip.title, "Unknown Species");
        assert_eq!(marker.style.icon_url, MarkerIcon::DefaultPin.asset());
    }
}
