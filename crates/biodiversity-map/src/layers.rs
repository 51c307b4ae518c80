//! Base map tile layers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

const MAPTILER_ATTRIBUTION: &str = r#"<a href="https://www.maptiler.com/copyright/" target="_blank">&copy; MapTiler</a> <a href="https://www.openstreetmap.org/copyright" target="_blank">&copy; OpenStreetMap contributors</a>"#;

/// A MapTiler base layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MapLayer {
    Outdoor,
    #[default]
    Satellite,
    Base,
    Streets,
    Landscape,
    Topo,
    Dataviz,
}

impl MapLayer {
    pub const ALL: [MapLayer; 7] = [
        MapLayer::Outdoor,
        MapLayer::Satellite,
        MapLayer::Base,
        MapLayer::Streets,
        MapLayer::Landscape,
        MapLayer::Topo,
        MapLayer::Dataviz,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            MapLayer::Outdoor => "outdoor",
            MapLayer::Satellite => "satellite",
            MapLayer::Base => "base",
            MapLayer::Streets => "streets",
            MapLayer::Landscape => "landscape",
            MapLayer::Topo => "topo",
            MapLayer::Dataviz => "dataviz",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            MapLayer::Outdoor => "Outdoor",
            MapLayer::Satellite => "Satellite",
            MapLayer::Base => "Base",
            MapLayer::Streets => "Streets",
            MapLayer::Landscape => "Landscape",
            MapLayer::Topo => "Topo",
            MapLayer::Dataviz => "Dataviz",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            MapLayer::Outdoor => "Detailed outdoor map with terrain features",
            MapLayer::Satellite => "Satellite imagery with labels",
            MapLayer::Base => "Simple base map with minimal details",
            MapLayer::Streets => "Street map with roads and labels",
            MapLayer::Landscape => "Natural landscape features and terrain",
            MapLayer::Topo => "Topographic map with contour lines",
            MapLayer::Dataviz => "High contrast map optimized for data visualization",
        }
    }

    /// MapTiler style path and tile format.
    fn style(&self) -> (&'static str, &'static str) {
        match self {
            MapLayer::Outdoor => ("outdoor-v2", "png"),
            MapLayer::Satellite => ("hybrid-v4", "jpg"),
            MapLayer::Base => ("basic-v2", "png"),
            MapLayer::Streets => ("streets-v2", "png"),
            MapLayer::Landscape => ("landscape", "png"),
            MapLayer::Topo => ("topo-v2", "png"),
            MapLayer::Dataviz => ("dataviz", "png"),
        }
    }

    /// Leaflet tile URL template for this layer.
    pub fn tile_url(&self, api_key: &str) -> String {
        let (style, format) = self.style();
        format!(
            "https://api.maptiler.com/maps/{}/256/{{z}}/{{x}}/{{y}}.{}?key={}",
            style, format, api_key
        )
    }

    pub fn attribution(&self) -> &'static str {
        MAPTILER_ATTRIBUTION
    }

    /// Looks a layer up by id; unknown ids fall back to satellite.
    pub fn from_id_or_default(id: &str) -> Self {
        id.parse().unwrap_or_default()
    }
}

impl fmt::Display for MapLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for MapLayer {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|layer| layer.id().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown map layer: {}", s))
    }
}
