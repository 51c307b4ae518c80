//! The Leaflet map, driven from Rust through `document::eval`.
//!
//! The widget itself lives in `assets/map.js` as `window.biodiversityMap`.
//! Rust pushes markers, the base layer and the viewport into it; the widget
//! sends marker clicks and window resizes back over the eval channel.

use biodiversity_catalog::RecordId;
use biodiversity_map::{CampusMarker, GeoPoint, MapHandle, RecenterGate, SpeciesMarker};
use dioxus::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::loader::{self, ViewerContext};
use crate::state::AppState;

/// Element id the widget mounts into.
const MAP_ELEMENT_ID: &str = "leaflet-map";

/// Messages the widget sends back.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum MapMessage {
    MarkerClicked { id: RecordId },
    Resized { width: f64 },
}

#[derive(Serialize)]
struct MarkerPayload {
    species: Vec<SpeciesMarker>,
    campuses: Vec<CampusMarker>,
}

/// `MapHandle` over the live widget.
struct LeafletMap;

impl MapHandle for LeafletMap {
    fn set_view(&mut self, center: GeoPoint, zoom: f64) {
        document::eval(&format!(
            "window.biodiversityMap.setView([{}, {}], {});",
            center.lat, center.lng, zoom
        ));
    }
}

/// JSON string literal for embedding in a script.
fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}

#[component]
pub fn MapView(mut state: Signal<AppState>) -> Element {
    let ctx = use_context::<ViewerContext>();
    let store = ctx.store.clone();
    let maptiler_key = ctx.maptiler_key.clone();
    let mut gate = use_signal(RecenterGate::new);

    // Mount the widget once and listen for its messages.
    use_effect(move || {
        let store = store.clone();
        spawn(async move {
            let mut bridge = document::eval(&format!(
                r#"window.biodiversityMap.init({}, (msg) => dioxus.send(msg));
                await new Promise(() => {{}});"#,
                js_string(MAP_ELEMENT_ID)
            ));
            loop {
                match bridge.recv::<MapMessage>().await {
                    Ok(MapMessage::MarkerClicked { id }) => {
                        debug!(id = %id, "Marker clicked");
                        loader::show_details(store.clone(), state, id);
                    }
                    Ok(MapMessage::Resized { width }) => state.write().resize(width),
                    Err(err) => {
                        debug!(error = ?err, "Map bridge closed");
                        break;
                    }
                }
            }
        });
    });

    let markers = use_memo(move || {
        let app = state.read();
        let view = app.view.as_ref()?;
        let payload = MarkerPayload {
            species: view.species_markers(),
            campuses: view.campus_markers(),
        };
        match serde_json::to_string(&payload) {
            Ok(json) => Some(json),
            Err(err) => {
                warn!(error = %err, "Failed to serialize map markers");
                None
            }
        }
    });

    use_effect(move || {
        if let Some(json) = markers.read().as_ref() {
            document::eval(&format!("window.biodiversityMap.setMarkers({});", json));
        }
    });

    let layer = use_memo(move || state.read().layer);
    use_effect(move || {
        let layer = *layer.read();
        document::eval(&format!(
            "window.biodiversityMap.setLayer({}, {});",
            js_string(&layer.tile_url(&maptiler_key)),
            js_string(layer.attribution())
        ));
    });

    let viewport = use_memo(move || {
        let app = state.read();
        app.view.as_ref().map(|view| (view.center(), view.zoom()))
    });

    use_effect(move || {
        if let Some((center, zoom)) = *viewport.read() {
            gate.write().sync(&mut LeafletMap, center, zoom);
        }
    });

    use_drop(|| {
        document::eval("window.biodiversityMap && window.biodiversityMap.destroy();");
    });

    rsx! {
        div {
            class: "map-container",
            div { id: "{MAP_ELEMENT_ID}", class: "leaflet-map" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_click_message() {
        let msg: MapMessage =
            serde_json::from_str(r#"{"type": "marker_clicked", "id": 42}"#).unwrap();
        assert_eq!(msg, MapMessage::MarkerClicked { id: RecordId::new("42") });
    }

    #[test]
    fn test_resize_message() {
        let msg: MapMessage =
            serde_json::from_str(r#"{"type": "resized", "width": 480}"#).unwrap();
        assert_eq!(msg, MapMessage::Resized { width: 480.0 });
    }

    #[test]
    fn test_unknown_message_rejected() {
        let msg = serde_json::from_str::<MapMessage>(r#"{"type": "zoomed", "zoom": 3}"#);
        assert!(msg.is_err());
    }

    #[test]
    fn test_js_string_escapes() {
        assert_eq!(js_string("a\"b"), r#""a\"b""#);
    }
}
