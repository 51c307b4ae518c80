//! Species search across every campus.

use biodiversity_catalog::{Campus, CampusSpecies};

/// Whether an occurrence matches a lower-cased query by common name,
/// scientific name, or category.
fn matches(entry: &CampusSpecies, needle: &str) -> bool {
    let Some(species) = entry.species_data.as_ref() else {
        return false;
    };
    [
        species.common_name.as_deref(),
        species.scientific_name.as_deref(),
        species.category_name.as_deref(),
    ]
    .into_iter()
    .flatten()
    .any(|field| field.to_lowercase().contains(needle))
}

/// Entries matching `query` as a case-insensitive substring, in input order.
/// A blank query matches nothing.
pub fn search<'a>(entries: &'a [CampusSpecies], query: &str) -> Vec<&'a CampusSpecies> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    entries
        .iter()
        .filter(|entry| matches(entry, &needle))
        .collect()
}

/// The entry Enter jumps to: the first match.
pub fn first_match<'a>(entries: &'a [CampusSpecies], query: &str) -> Option<&'a CampusSpecies> {
    search(entries, query).into_iter().next()
}

/// Name of the campus an entry belongs to, for result rows.
pub fn campus_name<'a>(campuses: &'a [Campus], entry: &CampusSpecies) -> &'a str {
    campuses
        .iter()
        .find(|campus| campus.id == entry.campus)
        .map(|campus| campus.name.as_str())
        .unwrap_or("Unknown Campus")
}

/// Info message shown when Enter finds nothing.
pub fn no_match_message(query: &str) -> String {
    format!("No species found matching \"{}\"", query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entry(id: u32, common: &str, scientific: &str, category: &str) -> CampusSpecies {
        serde_json::from_value(json!({
            "id": id, "campus": 1, "species": id, "latitude": "8.5", "longitude": "124.6",
            "speciesData": {"id": id, "commonName": common, "scientificName": scientific, "category": category}
        }))
        .unwrap()
    }

    fn entries() -> Vec<CampusSpecies> {
        vec![
            entry(1, "Philippine Bulbul", "Hypsipetes philippinus", "Birds"),
            entry(2, "Narra", "Pterocarpus indicus", "trees"),
            entry(3, "Common Rose", "Pachliopta kotzebuea", "butterfly"),
        ]
    }

    #[test]
    fn test_matches_any_name_field_ignoring_case() {
        let entries = entries();
        assert_eq!(search(&entries, "bulbul").len(), 1);
        assert_eq!(search(&entries, "PTEROCARPUS")[0].id.as_str(), "2");
        assert_eq!(search(&entries, "butter")[0].id.as_str(), "3");
    }

    #[test]
    fn test_blank_query_matches_nothing() {
        assert!(search(&entries(), "   ").is_empty());
    }

    #[test]
    fn test_first_match_keeps_input_order() {
        let entries = entries();
        // "in" appears in entries 1 and 2
        assert_eq!(first_match(&entries, "in").unwrap().id.as_str(), "1");
        assert!(first_match(&entries, "tarsier").is_none());
    }

    #[test]
    fn test_campus_name_fallback() {
        assert_eq!(campus_name(&[], &entries()[0]), "Unknown Campus");
    }
}
