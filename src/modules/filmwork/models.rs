use serde::Deserialize;

use crate::modules::person::models::PersonRefDocument;
use crate::modules::search_engine::documents::null_as_default;

/// Filmwork projected to `id`, `title`, `rating`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FilmworkSummaryDocument {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub rating: f32,
}

/// Full document stored in the `movies` index
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FilmworkDocument {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub rating: f32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub release_date: String,
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub genres: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub actors: Vec<PersonRefDocument>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub writers: Vec<PersonRefDocument>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub directors: Vec<PersonRefDocument>,
}
