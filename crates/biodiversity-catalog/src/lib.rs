//! # Biodiversity Catalog
//!
//! Data model and store access for the campus biodiversity viewer.
//!
//! The catalog lives in a hosted PostgREST database. This crate owns the
//! records the viewer renders and the seam it loads them through.
//!
//! ## Features
//!
//! - **Records**: [`Campus`], [`Species`], [`CampusSpecies`], [`SpeciesImage`]
//! - **SpeciesCategory**: the closed set of categories used for filtering and icons
//! - **CatalogStore trait**: async read queries over the catalog
//! - **PostgrestStore**: HTTP implementation backed by `reqwest`
//! - **InMemoryCatalogStore**: in-memory implementation for tests and offline demos
//! - **FetchSequencer**: per-slot request tickets that discard stale responses
//!
//! ## Example
//!
//! ```rust,ignore
//! use biodiversity_catalog::{CatalogStore, PostgrestStore, StoreConfig};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = StoreConfig::new("https://example.supabase.co", "anon-key");
//!     let store = PostgrestStore::new(config).unwrap();
//!
//!     let campuses = store.list_campuses().await.unwrap();
//!     for campus in &campuses {
//!         println!("{}", campus.name);
//!     }
//! }
//! ```

pub mod category;
pub mod config;
pub mod error;
pub mod image;
pub mod model;
pub mod sequence;
pub mod serde_helpers;
pub mod store;

// Re-exports
pub use category::{SpeciesCategory, SpeciesGroup};
pub use config::StoreConfig;
pub use error::CatalogError;
pub use image::{FALLBACK_IMAGE, ImageSource, thumbnail_url};
pub use model::{Campus, CampusSpecies, RecordId, Species, SpeciesImage};
pub use sequence::{FetchSequencer, FetchSlot, FetchTicket};
pub use store::{CatalogStore, InMemoryCatalogStore, PostgrestStore};
