//! Marker icons.
//!
//! One icon per category, plus the generic pin for rows whose category is
//! missing or unknown and the campus pin.

use biodiversity_catalog::SpeciesCategory;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerIcon {
    Bird,
    Bat,
    Tree,
    Mangrove,
    Butterfly,
    Dragonfly,
    Damselfly,
    Frog,
    DefaultPin,
    Campus,
}

impl MarkerIcon {
    pub fn for_category(category: Option<SpeciesCategory>) -> Self {
        match category {
            Some(SpeciesCategory::Birds) => MarkerIcon::Bird,
            Some(SpeciesCategory::Bats) => MarkerIcon::Bat,
            Some(SpeciesCategory::Trees) => MarkerIcon::Tree,
            Some(SpeciesCategory::Mangroves) => MarkerIcon::Mangrove,
            Some(SpeciesCategory::Butterfly) => MarkerIcon::Butterfly,
            Some(SpeciesCategory::Dragonfly) => MarkerIcon::Dragonfly,
            Some(SpeciesCategory::Damselfly) => MarkerIcon::Damselfly,
            Some(SpeciesCategory::Frogs) => MarkerIcon::Frog,
            None => MarkerIcon::DefaultPin,
        }
    }

    /// Asset path relative to the viewer's asset root.
    pub fn asset(&self) -> &'static str {
        match self {
            MarkerIcon::Bird => "assets/svgs/bird.svg",
            MarkerIcon::Bat => "assets/svgs/bat.svg",
            MarkerIcon::Tree => "assets/svgs/tree.svg",
            MarkerIcon::Mangrove => "assets/svgs/mangrove.svg",
            MarkerIcon::Butterfly => "assets/svgs/butterfly.svg",
            MarkerIcon::Dragonfly => "assets/svgs/dragonfly.svg",
            MarkerIcon::Damselfly => "assets/svgs/damselfly.svg",
            MarkerIcon::Frog => "assets/svgs/frog.svg",
            MarkerIcon::DefaultPin => "assets/pin2.png",
            MarkerIcon::Campus => "assets/schoolmap-pin.png",
        }
    }
}

/// Leaflet icon geometry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerStyle {
    pub icon_url: &'static str,
    pub icon_size: [i32; 2],
    pub icon_anchor: [i32; 2],
    pub popup_anchor: [i32; 2],
    pub class_name: &'static str,
}

impl MarkerStyle {
    /// Species marker; the highlighted one is drawn larger.
    pub fn species(icon: MarkerIcon, highlighted: bool) -> Self {
        if highlighted {
            Self {
                icon_url: icon.asset(),
                icon_size: [50, 50],
                icon_anchor: [25, 50],
                popup_anchor: [0, -50],
                class_name: "highlighted-marker",
            }
        } else {
            Self {
                icon_url: icon.asset(),
                icon_size: [35, 35],
                icon_anchor: [17, 35],
                popup_anchor: [0, -35],
                class_name: "",
            }
        }
    }

    pub fn campus() -> Self {
        Self {
            icon_url: MarkerIcon::Campus.asset(),
            icon_size: [50, 50],
            icon_anchor: [25, 50],
            popup_anchor: [0, -50],
            class_name: "",
        }
    }
}
