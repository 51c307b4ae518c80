//! Catalog store seam.
//!
//! The viewer reads four queries from the hosted catalog. Implementations
//! return every live (not soft-deleted) row in the documented order; a
//! failure is a [`CatalogError`] whose user message is shown verbatim.

mod memory;
mod postgrest;

pub use memory::InMemoryCatalogStore;
pub use postgrest::{PostgrestStore, TableQuery};

use async_trait::async_trait;

use crate::error::CatalogError;
use crate::model::{Campus, CampusSpecies, RecordId, SpeciesImage};

/// Read access to the biodiversity catalog
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// All campuses ordered by name.
    async fn list_campuses(&self) -> Result<Vec<Campus>, CatalogError>;

    /// Occurrences on one campus, with campus and species snapshots embedded.
    async fn list_campus_species(
        &self,
        campus: &RecordId,
    ) -> Result<Vec<CampusSpecies>, CatalogError>;

    /// Occurrences on every campus, used by search.
    async fn list_all_campus_species(&self) -> Result<Vec<CampusSpecies>, CatalogError>;

    /// Gallery images for one species ordered by id.
    async fn list_species_images(
        &self,
        species: &RecordId,
    ) -> Result<Vec<SpeciesImage>, CatalogError>;
}
