//! Query semantics shared by every catalog store.

use biodiversity_catalog::{
    CampusSpecies, CatalogStore, InMemoryCatalogStore, RecordId, SpeciesCategory, SpeciesImage,
};
use serde_json::json;

fn occurrence(id: u32, campus: u32, lat: &str, lng: &str, category: &str, deleted: bool) -> CampusSpecies {
    serde_json::from_value(json!({
        "id": id,
        "campus": campus,
        "species": id * 10,
        "latitude": lat,
        "longitude": lng,
        "deleted_at": if deleted { json!("2024-01-01T00:00:00Z") } else { json!(null) },
        "speciesData": {
            "id": id * 10,
            "commonName": format!("Species {}", id),
            "category": category
        }
    }))
    .unwrap()
}

fn image(id: u32, species: u32) -> SpeciesImage {
    serde_json::from_value(json!({"id": id, "species": species, "gdriveid": format!("img-{}", id)}))
        .unwrap()
}

fn store() -> InMemoryCatalogStore {
    InMemoryCatalogStore::with_rows(
        vec![
            serde_json::from_value(json!({"id": 2, "campus": "Panaon", "latitude": "8.1", "longitude": "124.9"})).unwrap(),
            serde_json::from_value(json!({"id": 1, "campus": "Cagayan de Oro", "latitude": "8.48", "longitude": "124.65", "zoom": 17})).unwrap(),
            serde_json::from_value(json!({"id": 3, "campus": "Closed", "deleted_at": "2023-06-01T00:00:00Z"})).unwrap(),
        ],
        vec![
            occurrence(1, 1, "8.5", "121.0", "birds", false),
            occurrence(2, 2, "8.2", "124.8", "Trees", false),
            occurrence(3, 1, "8.6", "121.1", "frogs", true),
            occurrence(4, 1, "8.7", "121.2", "bats", false),
        ],
        vec![image(12, 10), image(11, 10), image(13, 20)],
    )
}

#[tokio::test]
async fn test_campuses_exclude_soft_deleted_and_sort_by_name() {
    let campuses = store().list_campuses().await.unwrap();
    let names: Vec<_> = campuses.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Cagayan de Oro", "Panaon"]);
}

#[tokio::test]
async fn test_campus_species_scoped_to_campus() {
    let rows = store()
        .list_campus_species(&RecordId::new("1"))
        .await
        .unwrap();
    let ids: Vec<_> = rows.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "4"]);
    assert_eq!(rows[1].category(), Some(SpeciesCategory::Bats));
}

#[tokio::test]
async fn test_all_campus_species_spans_campuses() {
    let rows = store().list_all_campus_species().await.unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows.last().unwrap().campus.as_str(), "2");
}

#[tokio::test]
async fn test_species_images_ordered_by_id() {
    let images = store()
        .list_species_images(&RecordId::new("10"))
        .await
        .unwrap();
    let ids: Vec<_> = images.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, vec!["11", "12"]);
}

#[tokio::test]
async fn test_failure_surfaces_store_message() {
    let store = store();
    store.fail_next("JWT expired").await;
    let err = store.list_all_campus_species().await.unwrap_err();
    assert_eq!(err.user_message(), "JWT expired");
}
