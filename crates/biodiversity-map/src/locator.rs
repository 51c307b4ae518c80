//! Finding the occurrence a navigation link points at.
//!
//! Links carry `coordinates=lng,lat`. A stored row matches when its
//! `latitude` text equals the link's second component and its `longitude`
//! text equals the first. Matching is textual on purpose: rows are keyed by
//! the exact text they were stored with.

use biodiversity_catalog::{CampusSpecies, RecordId, SpeciesCategory};

use crate::params::CoordinateParam;

/// Whether `entry` sits at the linked coordinates.
pub fn matches_coordinates(entry: &CampusSpecies, coordinates: &CoordinateParam) -> bool {
    entry.latitude.trim() == coordinates.lat_text()
        && entry.longitude.trim() == coordinates.lng_text()
}

/// The first entry at the linked coordinates, regardless of category.
pub fn searched_entry<'a>(
    entries: &'a [CampusSpecies],
    coordinates: Option<&CoordinateParam>,
) -> Option<&'a CampusSpecies> {
    let coordinates = coordinates?;
    entries
        .iter()
        .find(|entry| matches_coordinates(entry, coordinates))
}

/// The occurrence to highlight.
///
/// Only an active search (coordinates *and* category) highlights anything;
/// without a category the highlight is always cleared.
pub fn locate(
    entries: &[CampusSpecies],
    coordinates: Option<&CoordinateParam>,
    category: Option<SpeciesCategory>,
) -> Option<RecordId> {
    category?;
    searched_entry(entries, coordinates).map(|entry| entry.id.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, lat: &str, lng: &str) -> CampusSpecies {
        serde_json::from_value(serde_json::json!({
            "id": id, "campus": 1, "species": 1, "latitude": lat, "longitude": lng
        }))
        .unwrap()
    }

    #[test]
    fn test_match_uses_inverted_order() {
        let entries = vec![entry("a", "121.0", "8.5"), entry("b", "8.5", "121.0")];
        let coords = CoordinateParam::parse("121.0,8.5").unwrap();
        assert_eq!(
            locate(&entries, Some(&coords), Some(SpeciesCategory::Birds)),
            Some(RecordId::new("b"))
        );
    }

    #[test]
    fn test_first_match_wins() {
        let entries = vec![entry("first", "8.5", "121.0"), entry("second", "8.5", "121.0")];
        let coords = CoordinateParam::parse("121.0,8.5").unwrap();
        assert_eq!(
            locate(&entries, Some(&coords), Some(SpeciesCategory::Bats)),
            Some(RecordId::new("first"))
        );
    }

    #[test]
    fn test_no_category_never_highlights() {
        let entries = vec![entry("b", "8.5", "121.0")];
        let coords = CoordinateParam::parse("121.0,8.5").unwrap();
        assert_eq!(locate(&entries, Some(&coords), None), None);
        assert!(searched_entry(&entries, Some(&coords)).is_some());
    }

    #[test]
    fn test_text_must_match_exactly() {
        let entries = vec![entry("b", "8.50", "121.0")];
        let coords = CoordinateParam::parse("121.0,8.5").unwrap();
        assert_eq!(locate(&entries, Some(&coords), Some(SpeciesCategory::Birds)), None);
    }
}
