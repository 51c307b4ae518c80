//! Species categories.
//!
//! Categories are a closed set. The store keeps them as free text, so
//! parsing is case-insensitive and anything outside the set is rejected
//! rather than mapped to a default.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::CatalogError;

/// A coarse taxonomic grouping used for filtering and marker icons.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SpeciesCategory {
    #[default]
    Birds,
    Bats,
    Trees,
    Mangroves,
    Butterfly,
    Dragonfly,
    Damselfly,
    Frogs,
}

/// Which detail panel a category uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeciesGroup {
    Animal,
    Plant,
    Insect,
}

impl SpeciesCategory {
    /// Every category, in filter-bar order.
    pub const ALL: [SpeciesCategory; 8] = [
        SpeciesCategory::Birds,
        SpeciesCategory::Bats,
        SpeciesCategory::Trees,
        SpeciesCategory::Mangroves,
        SpeciesCategory::Butterfly,
        SpeciesCategory::Dragonfly,
        SpeciesCategory::Damselfly,
        SpeciesCategory::Frogs,
    ];

    /// Number of categories.
    pub const COUNT: usize = Self::ALL.len();

    /// The lower-case wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            SpeciesCategory::Birds => "birds",
            SpeciesCategory::Bats => "bats",
            SpeciesCategory::Trees => "trees",
            SpeciesCategory::Mangroves => "mangroves",
            SpeciesCategory::Butterfly => "butterfly",
            SpeciesCategory::Dragonfly => "dragonfly",
            SpeciesCategory::Damselfly => "damselfly",
            SpeciesCategory::Frogs => "frogs",
        }
    }

    /// Capitalized name for buttons and labels.
    pub fn display_name(&self) -> &'static str {
        match self {
            SpeciesCategory::Birds => "Birds",
            SpeciesCategory::Bats => "Bats",
            SpeciesCategory::Trees => "Trees",
            SpeciesCategory::Mangroves => "Mangroves",
            SpeciesCategory::Butterfly => "Butterfly",
            SpeciesCategory::Dragonfly => "Dragonfly",
            SpeciesCategory::Damselfly => "Damselfly",
            SpeciesCategory::Frogs => "Frogs",
        }
    }

    pub fn group(&self) -> SpeciesGroup {
        match self {
            SpeciesCategory::Birds | SpeciesCategory::Bats | SpeciesCategory::Frogs => {
                SpeciesGroup::Animal
            }
            SpeciesCategory::Trees | SpeciesCategory::Mangroves => SpeciesGroup::Plant,
            SpeciesCategory::Butterfly
            | SpeciesCategory::Dragonfly
            | SpeciesCategory::Damselfly => SpeciesGroup::Insect,
        }
    }

    /// Parses a category name, ignoring case and surrounding whitespace.
    pub fn parse_lenient(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(value))
    }
}

impl fmt::Display for SpeciesCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SpeciesCategory {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_lenient(s).ok_or_else(|| CatalogError::unknown_category(s))
    }
}

impl Serialize for SpeciesCategory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SpeciesCategory {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

impl SpeciesGroup {
    pub fn title(&self) -> &'static str {
        match self {
            SpeciesGroup::Animal => "Animal details",
            SpeciesGroup::Plant => "Plant details",
            SpeciesGroup::Insect => "Insect details",
        }
    }
}
