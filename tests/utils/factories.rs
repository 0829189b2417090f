//! Catalog fixtures

use movies_api_lib::modules::search_engine::Index;
use serde_json::{json, Value};

use super::engine::InMemoryEngine;

pub fn person_ref(id: &str, name: &str) -> Value {
    json!({ "id": id, "name": name })
}

pub fn filmwork(id: &str, title: &str, rating: f64) -> Value {
    json!({
        "id": id,
        "title": title,
        "rating": rating,
        "description": format!("{} description", title),
        "release_date": "1977-05-25",
        "type": "movie",
        "genres": ["Sci-Fi"],
        "actors": [],
        "writers": [],
        "directors": [],
    })
}

pub fn credit(mut film: Value, role_path: &str, person: Value) -> Value {
    if let Some(entries) = film[role_path].as_array_mut() {
        entries.push(person);
    }
    film
}

/// Mark Hamill (p1) acts in f1 and directs f2, Leigh Brackett (p3) writes
/// both, Nobody (p4) has no credits.
pub fn sample_catalog() -> InMemoryEngine {
    let mark = person_ref("p1", "Mark Hamill");
    let leigh = person_ref("p3", "Leigh Brackett");

    let f1 = credit(
        credit(filmwork("f1", "Star Wars", 8.0), "actors", mark.clone()),
        "writers",
        leigh.clone(),
    );
    let f2 = credit(
        credit(filmwork("f2", "Corvette Summer", 6.5), "directors", mark),
        "writers",
        leigh,
    );

    InMemoryEngine::new()
        .with_document(Index::Movies, f1)
        .with_document(Index::Movies, f2)
        .with_document(Index::Genres, json!({ "id": "g1", "name": "Comedy", "description": "Funny films" }))
        .with_document(Index::Genres, json!({ "id": "g2", "name": "Drama", "description": null }))
        .with_document(Index::Persons, json!({ "id": "p1", "full_name": "Mark Hamill" }))
        .with_document(Index::Persons, json!({ "id": "p3", "full_name": "Leigh Brackett" }))
        .with_document(Index::Persons, json!({ "id": "p4", "full_name": "Nobody" }))
}

/// `count` generated genres, ids `g0000..`
pub fn many_genres(count: usize) -> InMemoryEngine {
    (0..count).fold(InMemoryEngine::new(), |engine, i| {
        engine.with_document(
            Index::Genres,
            json!({ "id": format!("g{:04}", i), "name": format!("Genre {}", i), "description": "" }),
        )
    })
}
