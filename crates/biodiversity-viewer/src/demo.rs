//! Sample catalog for `--demo`, served from memory.

use biodiversity_catalog::{Campus, CampusSpecies, InMemoryCatalogStore, SpeciesImage};
use serde_json::{Value, json};

// Campus rows keep longitude in the `latitude` column, the way the hosted
// table holds them; links and pins read them in that order.
fn campuses() -> Value {
    json!([
        {"id": 1, "campus": "Alubijid", "address": "Alubijid, Misamis Oriental",
         "latitude": "124.4742", "longitude": "8.5706", "zoom": 17},
        {"id": 2, "campus": "Cagayan de Oro", "address": "C.M. Recto Ave, Lapasan",
         "latitude": "124.6566", "longitude": "8.4855", "zoom": 18},
        {"id": 3, "campus": "Claveria", "address": "Claveria, Misamis Oriental",
         "latitude": "124.9230", "longitude": "8.6112", "zoom": 16},
        {"id": 4, "campus": "Jasaan", "address": "Jasaan, Misamis Oriental",
         "latitude": "124.7531", "longitude": "8.6508", "zoom": null}
    ])
}

fn species() -> Value {
    json!([
        {"id": 11, "commonName": "Philippine Bulbul", "scientificName": "Hypsipetes philippinus",
         "kingdom": "Animalia", "phylum": "Chordata", "class": "Aves", "order": "Passeriformes",
         "family": "Pycnonotidae", "genus": "Hypsipetes", "category": "Birds",
         "description": "A noisy olive-brown bulbul common in secondary forest and campus trees.",
         "diet": "Fruits and insects", "habitat": "Forest edge, gardens"},
        {"id": 12, "commonName": "Greater Musky Fruit Bat", "scientificName": "Ptenochirus jagori",
         "kingdom": "Animalia", "phylum": "Chordata", "class": "Mammalia", "order": "Chiroptera",
         "family": "Pteropodidae", "genus": "Ptenochirus", "category": "Bats",
         "description": "An endemic fruit bat roosting in the campus acacias.",
         "diet": "Fruits", "habitat": "Lowland forest"},
        {"id": 13, "commonName": "Narra", "scientificName": "Pterocarpus indicus",
         "kingdom": "Plantae", "phylum": "Tracheophyta", "class": "Magnoliopsida", "order": "Fabales",
         "family": "Fabaceae", "genus": "Pterocarpus", "category": "Trees",
         "description": "The national tree, planted along the main avenue.",
         "growth_form": "Tree", "flowering_season": "March to May"},
        {"id": 14, "commonName": "Common Rose", "scientificName": "Pachliopta aristolochiae",
         "kingdom": "Animalia", "phylum": "Arthropoda", "class": "Insecta", "order": "Lepidoptera",
         "family": "Papilionidae", "genus": "Pachliopta", "category": "Butterfly",
         "description": "A red-bodied swallowtail seen around the flowering hedges.",
         "host_plant": "Aristolochia"},
        {"id": 15, "commonName": "Philippine Woodland Frog", "scientificName": "Hylarana grandocula",
         "kingdom": "Animalia", "phylum": "Chordata", "class": "Amphibia", "order": "Anura",
         "family": "Ranidae", "genus": "Hylarana", "category": "Frogs",
         "description": "Found along the drainage canals after heavy rain."}
    ])
}

fn occurrence(id: u32, campus: u32, species: &Value, latitude: &str, longitude: &str) -> Value {
    json!({
        "id": id,
        "campus": campus,
        "species": species["id"],
        "latitude": latitude,
        "longitude": longitude,
        "speciesData": species,
    })
}

/// Builds the demo store.
pub fn demo_store() -> Result<InMemoryCatalogStore, serde_json::Error> {
    let campuses: Vec<Campus> = serde_json::from_value(campuses())?;
    let species = species();

    let rows = json!([
        occurrence(101, 2, &species[0], "8.4857", "124.6561"),
        occurrence(102, 2, &species[0], "8.4861", "124.6570"),
        occurrence(103, 2, &species[2], "8.4849", "124.6558"),
        occurrence(104, 2, &species[3], "8.4853", "124.6575"),
        occurrence(105, 2, &species[1], "8.4866", "124.6563"),
        occurrence(106, 1, &species[2], "8.5709", "124.4738"),
        occurrence(107, 1, &species[4], "8.5701", "124.4747"),
        occurrence(108, 3, &species[0], "8.6115", "124.9226"),
        occurrence(109, 4, &species[3], "8.6505", "124.7535"),
    ]);
    let campus_species: Vec<CampusSpecies> = serde_json::from_value(rows)?;

    let images: Vec<SpeciesImage> = serde_json::from_value(json!([
        {"id": 1, "species": 11, "gdriveid": null, "description": "Perched near the library"},
        {"id": 2, "species": 11, "gdriveid": null, "description": "Feeding on fig"},
        {"id": 3, "species": 13, "gdriveid": null, "description": "Flowering, April"}
    ]))?;

    Ok(InMemoryCatalogStore::with_rows(campuses, campus_species, images))
}
