use serde::Deserialize;

use crate::modules::search_engine::documents::null_as_default;

/// Document stored in the `genres` index
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct GenreDocument {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
}
