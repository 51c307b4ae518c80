//! Category filter for map markers.
//!
//! A marker is shown iff its category is in the set. Rows without a known
//! category are never shown.

use std::collections::BTreeSet;

use biodiversity_catalog::{CampusSpecies, SpeciesCategory};

/// The active species categories.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterSet {
    active: BTreeSet<SpeciesCategory>,
}

impl FilterSet {
    /// No category active; nothing is shown.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Every category active.
    pub fn all() -> Self {
        Self {
            active: SpeciesCategory::ALL.into_iter().collect(),
        }
    }

    /// Exactly one category active.
    pub fn only(category: SpeciesCategory) -> Self {
        Self {
            active: BTreeSet::from([category]),
        }
    }

    /// Adds the category if absent, removes it if present.
    pub fn toggle(&mut self, category: SpeciesCategory) {
        if !self.active.remove(&category) {
            self.active.insert(category);
        }
    }

    /// All-or-nothing: a full set clears, anything else becomes full.
    pub fn toggle_all(&mut self) {
        if self.is_all() {
            self.active.clear();
        } else {
            *self = Self::all();
        }
    }

    pub fn contains(&self, category: SpeciesCategory) -> bool {
        self.active.contains(&category)
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn is_all(&self) -> bool {
        self.active.len() == SpeciesCategory::COUNT
    }

    /// Label for the all-or-nothing button.
    pub fn toggle_all_label(&self) -> &'static str {
        if self.is_all() { "Clear" } else { "All" }
    }

    /// Whether an entry passes the filter.
    pub fn admits(&self, entry: &CampusSpecies) -> bool {
        entry
            .category()
            .is_some_and(|category| self.contains(category))
    }

    /// Entries that pass the filter, in input order.
    pub fn visible<'a>(&self, entries: &'a [CampusSpecies]) -> Vec<&'a CampusSpecies> {
        entries.iter().filter(|entry| self.admits(entry)).collect()
    }

    /// `(visible, total)` for the filter bar counter.
    pub fn counts(&self, entries: &[CampusSpecies]) -> (usize, usize) {
        let visible = entries.iter().filter(|entry| self.admits(entry)).count();
        (visible, entries.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut filter = FilterSet::only(SpeciesCategory::Birds);
        filter.toggle(SpeciesCategory::Bats);
        assert!(filter.contains(SpeciesCategory::Bats));
        assert_eq!(filter.len(), 2);

        filter.toggle(SpeciesCategory::Birds);
        assert!(!filter.contains(SpeciesCategory::Birds));
        assert_eq!(filter.len(), 1);
    }

    #[test]
    fn test_toggle_all_from_partial_fills() {
        let mut filter = FilterSet::only(SpeciesCategory::Trees);
        filter.toggle_all();
        assert!(filter.is_all());
        assert_eq!(filter.toggle_all_label(), "Clear");
    }

    #[test]
    fn test_toggle_all_from_full_clears() {
        let mut filter = FilterSet::all();
        filter.toggle_all();
        assert!(filter.is_empty());
        assert_eq!(filter.toggle_all_label(), "All");
    }

    #[test]
    fn test_toggling_every_category_reaches_full() {
        let mut filter = FilterSet::empty();
        for category in SpeciesCategory::ALL {
            filter.toggle(category);
        }
        assert_eq!(filter, FilterSet::all());
    }
}
