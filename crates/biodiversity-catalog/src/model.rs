//! Catalog records as the hosted tables return them.
//!
//! Column names follow the store (`commonName`, `speciesData`, ...), so the
//! serde attributes here are the wire contract.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::category::{SpeciesCategory, SpeciesGroup};
use crate::serde_helpers::{opt_lenient_f64, opt_text_or_number, text_or_number};

/// Opaque record identifier.
///
/// The store hands out numeric keys but navigation links carry them as text,
/// so ids are compared as strings everywhere.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        text_or_number(deserializer).map(RecordId)
    }
}

/// A university campus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Campus {
    pub id: RecordId,

    /// Display name; the column is called `campus`.
    #[serde(rename = "campus")]
    pub name: String,

    #[serde(default)]
    pub address: Option<String>,

    #[serde(default, deserialize_with = "opt_text_or_number")]
    pub latitude: Option<String>,

    #[serde(default, deserialize_with = "opt_text_or_number")]
    pub longitude: Option<String>,

    /// Preferred map zoom when the campus is opened.
    #[serde(default, deserialize_with = "opt_lenient_f64")]
    pub zoom: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Zoom used for campus links when the campus has none.
pub const DEFAULT_CAMPUS_ZOOM: f64 = 15.0;

impl Campus {
    pub fn latitude_value(&self) -> f64 {
        parse_coordinate(self.latitude.as_deref())
    }

    pub fn longitude_value(&self) -> f64 {
        parse_coordinate(self.longitude.as_deref())
    }

    /// The campus zoom, falling back to [`DEFAULT_CAMPUS_ZOOM`] when unset or zero.
    pub fn zoom_or_default(&self) -> f64 {
        match self.zoom {
            Some(zoom) if zoom > 0.0 => zoom,
            _ => DEFAULT_CAMPUS_ZOOM,
        }
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

/// A taxonomic record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Species {
    pub id: RecordId,

    #[serde(rename = "commonName", default)]
    pub common_name: Option<String>,

    #[serde(rename = "scientificName", default)]
    pub scientific_name: Option<String>,

    #[serde(default)]
    pub kingdom: Option<String>,
    #[serde(default)]
    pub phylum: Option<String>,
    #[serde(default)]
    pub class: Option<String>,
    #[serde(default)]
    pub order: Option<String>,
    #[serde(default)]
    pub family: Option<String>,
    #[serde(default)]
    pub genus: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    /// Free-text category as stored; see [`Species::category`].
    #[serde(rename = "category", default)]
    pub category_name: Option<String>,

    /// Hosted image id of the main photo.
    #[serde(default)]
    pub gdriveid: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,

    /// Group-specific columns (habitat, conservation status, ...).
    #[serde(flatten)]
    pub details: BTreeMap<String, serde_json::Value>,
}

/// Bookkeeping columns never shown as species details.
const HIDDEN_DETAIL_KEYS: &[&str] = &["created_at", "updated_at", "created_by", "updated_by"];

impl Species {
    /// The parsed category, if the stored text names a known one.
    pub fn category(&self) -> Option<SpeciesCategory> {
        self.category_name
            .as_deref()
            .and_then(SpeciesCategory::parse_lenient)
    }

    pub fn group(&self) -> Option<SpeciesGroup> {
        self.category().map(|category| category.group())
    }

    /// Common name, or a placeholder for unnamed records.
    pub fn display_name(&self) -> &str {
        match self.common_name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => "Unknown Species",
        }
    }

    /// Taxonomy rows in rank order, blank ranks rendered empty.
    pub fn taxonomy(&self) -> [(&'static str, &str); 6] {
        [
            ("Kingdom", self.kingdom.as_deref().unwrap_or_default()),
            ("Phylum", self.phylum.as_deref().unwrap_or_default()),
            ("Class", self.class.as_deref().unwrap_or_default()),
            ("Order", self.order.as_deref().unwrap_or_default()),
            ("Family", self.family.as_deref().unwrap_or_default()),
            ("Genus", self.genus.as_deref().unwrap_or_default()),
        ]
    }

    /// Non-empty group-specific details as label/value text pairs.
    pub fn detail_fields(&self) -> Vec<(String, String)> {
        self.details
            .iter()
            .filter(|(key, _)| !HIDDEN_DETAIL_KEYS.contains(&key.as_str()))
            .filter_map(|(key, value)| {
                let text = match value {
                    serde_json::Value::Null => return None,
                    serde_json::Value::String(text) if text.trim().is_empty() => return None,
                    serde_json::Value::String(text) => text.clone(),
                    other => other.to_string(),
                };
                Some((humanize_key(key), text))
            })
            .collect()
    }
}

/// One observed occurrence of a species at a point on a campus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampusSpecies {
    pub id: RecordId,

    /// Campus the occurrence belongs to.
    pub campus: RecordId,

    /// Species observed.
    pub species: RecordId,

    /// Decimal text exactly as stored. Kept as text because navigation
    /// matches on it verbatim.
    #[serde(deserialize_with = "text_or_number")]
    pub latitude: String,

    #[serde(deserialize_with = "text_or_number")]
    pub longitude: String,

    #[serde(rename = "campusData", default)]
    pub campus_data: Option<Campus>,

    #[serde(rename = "speciesData", default)]
    pub species_data: Option<Species>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl CampusSpecies {
    pub fn category(&self) -> Option<SpeciesCategory> {
        self.species_data.as_ref().and_then(Species::category)
    }

    pub fn display_name(&self) -> &str {
        self.species_data
            .as_ref()
            .map(Species::display_name)
            .unwrap_or("Unknown Species")
    }

    pub fn scientific_name(&self) -> Option<&str> {
        self.species_data
            .as_ref()
            .and_then(|species| species.scientific_name.as_deref())
    }

    /// Marker position as (lat, lng).
    pub fn position(&self) -> (f64, f64) {
        (
            parse_coordinate(Some(&self.latitude)),
            parse_coordinate(Some(&self.longitude)),
        )
    }
}

/// A captured photo in a species gallery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesImage {
    pub id: RecordId,

    pub species: RecordId,

    #[serde(default)]
    pub gdriveid: Option<String>,

    #[serde(default, alias = "description")]
    pub caption: Option<String>,

    #[serde(rename = "speciesData", default, skip_serializing_if = "Option::is_none")]
    pub species_data: Option<Species>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Numeric value of a stored coordinate. Blank or non-numeric text reads as 0.
fn parse_coordinate(text: Option<&str>) -> f64 {
    text.and_then(|text| text.trim().parse().ok())
        .unwrap_or(0.0)
}

fn humanize_key(key: &str) -> String {
    let mut label = String::with_capacity(key.len() + 4);
    let mut previous_lower = false;
    for (i, ch) in key.chars().enumerate() {
        if ch == '_' {
            label.push(' ');
            previous_lower = false;
            continue;
        }
        if ch.is_uppercase() && previous_lower {
            label.push(' ');
        }
        if i == 0 {
            label.extend(ch.to_uppercase());
        } else {
            label.extend(ch.to_lowercase());
        }
        previous_lower = ch.is_lowercase();
    }
    label
}

#[cfg(test)]
mod tests {
    use super::*;

    const CAMPUS_SPECIES_ROW: &str = r#"{
        "id": 12,
        "campus": 1,
        "species": 4,
        "latitude": "8.5",
        "longitude": 121.0,
        "deleted_at": null,
        "campusData": {"id": 1, "campus": "Cagayan de Oro", "address": "C.M. Recto Ave", "latitude": "8.48", "longitude": "124.65", "zoom": 17},
        "speciesData": {
            "id": 4,
            "commonName": "Philippine Bulbul",
            "scientificName": "Hypsipetes philippinus",
            "kingdom": "Animalia",
            "class": "Aves",
            "category": "Birds",
            "gdriveid": "1AbC",
            "conservationStatus": "Least Concern",
            "created_at": "2024-05-01T00:00:00Z",
            "habitat": ""
        }
    }"#;

    #[test]
    fn test_campus_species_row_decodes() {
        let row: CampusSpecies = serde_json::from_str(CAMPUS_SPECIES_ROW).unwrap();
        assert_eq!(row.id.as_str(), "12");
        assert_eq!(row.latitude, "8.5");
        assert_eq!(row.longitude, "121.0");
        assert_eq!(row.category(), Some(SpeciesCategory::Birds));
        assert_eq!(row.display_name(), "Philippine Bulbul");
        assert_eq!(row.position(), (8.5, 121.0));
        let campus = row.campus_data.as_ref().unwrap();
        assert_eq!(campus.name, "Cagayan de Oro");
        assert_eq!(campus.zoom_or_default(), 17.0);
    }

    #[test]
    fn test_detail_fields_skip_bookkeeping_and_blank() {
        let row: CampusSpecies = serde_json::from_str(CAMPUS_SPECIES_ROW).unwrap();
        let details = row.species_data.unwrap().detail_fields();
        assert_eq!(
            details,
            vec![("Conservation status".to_string(), "Least Concern".to_string())]
        );
    }

    #[test]
    fn test_unknown_category_is_none() {
        let species: Species =
            serde_json::from_str(r#"{"id": "s1", "category": "lichens"}"#).unwrap();
        assert_eq!(species.category(), None);
        assert_eq!(species.display_name(), "Unknown Species");
    }

    #[test]
    fn test_campus_zoom_default() {
        let campus: Campus =
            serde_json::from_str(r#"{"id": 3, "campus": "Jasaan", "zoom": 0}"#).unwrap();
        assert_eq!(campus.zoom_or_default(), DEFAULT_CAMPUS_ZOOM);
        assert_eq!(campus.latitude_value(), 0.0);
    }

    #[test]
    fn test_humanize_key() {
        assert_eq!(humanize_key("conservationStatus"), "Conservation status");
        assert_eq!(humanize_key("leaf_type"), "Leaf type");
        assert_eq!(humanize_key("habitat"), "Habitat");
    }
}
