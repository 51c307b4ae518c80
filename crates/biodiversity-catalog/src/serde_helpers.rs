//! Deserializers for loosely typed store columns.
//!
//! The hosted tables mix numeric and text columns for ids and coordinates
//! depending on how a row was entered, so these accept either form.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(serde_json::Number),
    Text(String),
}

impl NumberOrText {
    fn into_text(self) -> String {
        match self {
            NumberOrText::Number(number) => number.to_string(),
            NumberOrText::Text(text) => text,
        }
    }
}

/// Reads a JSON number or string as its text form.
pub fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    NumberOrText::deserialize(deserializer).map(NumberOrText::into_text)
}

/// Like [`text_or_number`] for nullable columns.
pub fn opt_text_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<NumberOrText>::deserialize(deserializer)?.map(NumberOrText::into_text))
}

/// Reads a JSON number or numeric string as `f64`. Null, empty, and
/// non-numeric text become `None`.
pub fn opt_lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<NumberOrText>::deserialize(deserializer)?;
    Ok(match value {
        Some(NumberOrText::Number(number)) => number.as_f64(),
        Some(NumberOrText::Text(text)) => text.trim().parse().ok(),
        None => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Row {
        #[serde(deserialize_with = "text_or_number")]
        id: String,
        #[serde(default, deserialize_with = "opt_lenient_f64")]
        zoom: Option<f64>,
        #[serde(default, deserialize_with = "opt_text_or_number")]
        lat: Option<String>,
    }

    #[test]
    fn test_accepts_numbers_and_text() {
        let row: Row = serde_json::from_str(r#"{"id": 7, "zoom": "16", "lat": 8.5}"#).unwrap();
        assert_eq!(row.id, "7");
        assert_eq!(row.zoom, Some(16.0));
        assert_eq!(row.lat.as_deref(), Some("8.5"));

        let row: Row = serde_json::from_str(r#"{"id": "abc", "zoom": null}"#).unwrap();
        assert_eq!(row.id, "abc");
        assert_eq!(row.zoom, None);
        assert_eq!(row.lat, None);
    }

    #[test]
    fn test_non_numeric_text_is_none() {
        let row: Row = serde_json::from_str(r#"{"id": 1, "zoom": "far"}"#).unwrap();
        assert_eq!(row.zoom, None);
    }
}
