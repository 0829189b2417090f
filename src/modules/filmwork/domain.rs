use serde::{Deserialize, Serialize};

use crate::modules::person::domain::PersonRef;

/// Filmwork as shown in listings, searches and filmographies.
/// Carries no detail fields; see [`FilmworkDetail`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilmworkSummary {
    #[serde(rename = "uuid")]
    pub id: String,
    pub title: String,
    pub rating: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilmworkDetail {
    pub id: String,
    pub title: String,
    pub rating: f32,
    pub description: String,
    pub release_date: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub genres: Vec<String>,
    pub actors: Vec<PersonRef>,
    pub writers: Vec<PersonRef>,
    pub directors: Vec<PersonRef>,
}

impl FilmworkDetail {
    pub fn summary(&self) -> FilmworkSummary {
        FilmworkSummary {
            id: self.id.clone(),
            title: self.title.clone(),
            rating: self.rating,
        }
    }
}
