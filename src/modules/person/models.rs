use serde::Deserialize;

use crate::modules::search_engine::documents::null_as_default;

/// Identity document stored in the `persons` index
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PersonDocument {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub full_name: String,
}

/// Person reference nested in a filmwork document
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PersonRefDocument {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

/// Filmwork projected to its credit collections
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CreditedFilmworkDocument {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub actors: Vec<PersonRefDocument>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub directors: Vec<PersonRefDocument>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub writers: Vec<PersonRefDocument>,
}
