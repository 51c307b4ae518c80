//! PostgREST implementation of the catalog store.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, warn};
use url::Url;

use crate::config::StoreConfig;
use crate::error::CatalogError;
use crate::model::{Campus, CampusSpecies, RecordId, SpeciesImage};

use super::CatalogStore;

const CAMPUS_TABLE: &str = "campus";
const CAMPUS_SPECIES_TABLE: &str = "campus_species";
const SPECIES_IMAGES_TABLE: &str = "species_images";

const CAMPUS_SPECIES_SELECT: &str = "*,campusData:campus(*),speciesData:species(*)";
const SPECIES_IMAGES_SELECT: &str = "*,speciesData:species(*)";

/// One read against a table: projection, ordering, equality filters.
///
/// Soft-deleted rows are always excluded.
#[derive(Debug, Clone, PartialEq)]
pub struct TableQuery {
    pub table: &'static str,
    pub select: &'static str,
    pub order: &'static str,
    pub eq: Vec<(&'static str, String)>,
}

impl TableQuery {
    pub fn campuses() -> Self {
        Self {
            table: CAMPUS_TABLE,
            select: "*",
            order: "campus.asc",
            eq: Vec::new(),
        }
    }

    pub fn campus_species(campus: Option<&RecordId>) -> Self {
        Self {
            table: CAMPUS_SPECIES_TABLE,
            select: CAMPUS_SPECIES_SELECT,
            order: "campus.asc",
            eq: campus
                .map(|id| vec![("campus", id.to_string())])
                .unwrap_or_default(),
        }
    }

    pub fn species_images(species: &RecordId) -> Self {
        Self {
            table: SPECIES_IMAGES_TABLE,
            select: SPECIES_IMAGES_SELECT,
            order: "id.asc",
            eq: vec![("species", species.to_string())],
        }
    }

    /// Full request URL under the REST root.
    pub fn url(&self, root: &Url) -> Result<Url, CatalogError> {
        let mut url = root.join(self.table)?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("select", self.select);
            pairs.append_pair("order", self.order);
            for (column, value) in &self.eq {
                pairs.append_pair(column, &format!("eq.{}", value));
            }
            pairs.append_pair("deleted_at", "is.null");
        }
        Ok(url)
    }
}

#[derive(Deserialize)]
struct PostgrestErrorBody {
    message: Option<String>,
}

/// Catalog store backed by a hosted PostgREST endpoint
#[derive(Debug, Clone)]
pub struct PostgrestStore {
    client: Client,
    root: Url,
    anon_key: String,
}

impl PostgrestStore {
    /// Create a store client. Fails if the configuration is invalid.
    pub fn new(config: StoreConfig) -> Result<Self, CatalogError> {
        let root = config.validate()?;
        let client = Client::builder().timeout(config.timeout()).build()?;
        debug!(root = %root, "Catalog store configured");

        Ok(Self {
            client,
            root,
            anon_key: config.anon_key,
        })
    }

    async fn fetch<T: DeserializeOwned>(&self, query: TableQuery) -> Result<Vec<T>, CatalogError> {
        let url = query.url(&self.root)?;
        debug!(table = query.table, "Querying catalog");

        let response = self
            .client
            .get(url)
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = error_message(&body)
                .unwrap_or_else(|| status.canonical_reason().unwrap_or("request failed").to_string());
            warn!(table = query.table, status = status.as_u16(), %message, "Catalog query failed");
            return Err(CatalogError::status(status.as_u16(), message));
        }

        let rows: Vec<T> = serde_json::from_str(&body)?;
        debug!(table = query.table, rows = rows.len(), "Catalog query complete");
        Ok(rows)
    }
}

/// The `message` field of a PostgREST error body, or the raw body text.
fn error_message(body: &str) -> Option<String> {
    if let Ok(PostgrestErrorBody {
        message: Some(message),
    }) = serde_json::from_str::<PostgrestErrorBody>(body)
    {
        return Some(message);
    }
    let trimmed = body.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[async_trait]
impl CatalogStore for PostgrestStore {
    async fn list_campuses(&self) -> Result<Vec<Campus>, CatalogError> {
        self.fetch(TableQuery::campuses()).await
    }

    async fn list_campus_species(
        &self,
        campus: &RecordId,
    ) -> Result<Vec<CampusSpecies>, CatalogError> {
        self.fetch(TableQuery::campus_species(Some(campus))).await
    }

    async fn list_all_campus_species(&self) -> Result<Vec<CampusSpecies>, CatalogError> {
        self.fetch(TableQuery::campus_species(None)).await
    }

    async fn list_species_images(
        &self,
        species: &RecordId,
    ) -> Result<Vec<SpeciesImage>, CatalogError> {
        self.fetch(TableQuery::species_images(species)).await
    }
}
