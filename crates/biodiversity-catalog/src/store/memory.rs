//! In-memory catalog store
//!
//! Holds catalog rows in memory and answers the same queries with the same
//! ordering and soft-delete rules as the hosted store. Used by tests and by
//! the viewer's `--demo` mode.

use std::cmp::Ordering;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::trace;

use crate::error::CatalogError;
use crate::model::{Campus, CampusSpecies, RecordId, SpeciesImage};

use super::CatalogStore;

#[derive(Debug, Default)]
struct Tables {
    campuses: Vec<Campus>,
    campus_species: Vec<CampusSpecies>,
    species_images: Vec<SpeciesImage>,
    /// One-shot failure returned by the next query
    next_failure: Option<String>,
}

/// In-memory implementation of [`CatalogStore`]
#[derive(Debug, Default)]
pub struct InMemoryCatalogStore {
    tables: RwLock<Tables>,
}

impl InMemoryCatalogStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store preloaded with rows
    pub fn with_rows(
        campuses: Vec<Campus>,
        campus_species: Vec<CampusSpecies>,
        species_images: Vec<SpeciesImage>,
    ) -> Self {
        Self {
            tables: RwLock::new(Tables {
                campuses,
                campus_species,
                species_images,
                next_failure: None,
            }),
        }
    }

    pub async fn insert_campus(&self, campus: Campus) {
        self.tables.write().await.campuses.push(campus);
    }

    pub async fn insert_campus_species(&self, entry: CampusSpecies) {
        self.tables.write().await.campus_species.push(entry);
    }

    /// Make the next query fail with a store error carrying `message`
    pub async fn fail_next(&self, message: impl Into<String>) {
        self.tables.write().await.next_failure = Some(message.into());
    }

    async fn check_failure(&self) -> Result<(), CatalogError> {
        match self.tables.write().await.next_failure.take() {
            Some(message) => Err(CatalogError::status(500, message)),
            None => Ok(()),
        }
    }
}

/// Numeric ids sort numerically, the way the hosted tables order them.
fn compare_ids(a: &RecordId, b: &RecordId) -> Ordering {
    match (a.as_str().parse::<i64>(), b.as_str().parse::<i64>()) {
        (Ok(a), Ok(b)) => a.cmp(&b),
        _ => a.cmp(b),
    }
}

#[async_trait]
impl CatalogStore for InMemoryCatalogStore {
    async fn list_campuses(&self) -> Result<Vec<Campus>, CatalogError> {
        self.check_failure().await?;
        let tables = self.tables.read().await;
        let mut rows: Vec<Campus> = tables
            .campuses
            .iter()
            .filter(|campus| !campus.is_deleted())
            .cloned()
            .collect();
        rows.sort_by(|a, b| a.name.cmp(&b.name));
        trace!(rows = rows.len(), "Listed campuses");
        Ok(rows)
    }

    async fn list_campus_species(
        &self,
        campus: &RecordId,
    ) -> Result<Vec<CampusSpecies>, CatalogError> {
        self.check_failure().await?;
        let tables = self.tables.read().await;
        let rows: Vec<CampusSpecies> = tables
            .campus_species
            .iter()
            .filter(|entry| entry.deleted_at.is_none() && &entry.campus == campus)
            .cloned()
            .collect();
        trace!(campus = %campus, rows = rows.len(), "Listed campus species");
        Ok(rows)
    }

    async fn list_all_campus_species(&self) -> Result<Vec<CampusSpecies>, CatalogError> {
        self.check_failure().await?;
        let tables = self.tables.read().await;
        let mut rows: Vec<CampusSpecies> = tables
            .campus_species
            .iter()
            .filter(|entry| entry.deleted_at.is_none())
            .cloned()
            .collect();
        rows.sort_by(|a, b| compare_ids(&a.campus, &b.campus));
        Ok(rows)
    }

    async fn list_species_images(
        &self,
        species: &RecordId,
    ) -> Result<Vec<SpeciesImage>, CatalogError> {
        self.check_failure().await?;
        let tables = self.tables.read().await;
        let mut rows: Vec<SpeciesImage> = tables
            .species_images
            .iter()
            .filter(|image| image.deleted_at.is_none() && &image.species == species)
            .cloned()
            .collect();
        rows.sort_by(|a, b| compare_ids(&a.id, &b.id));
        Ok(rows)
    }
}
