use super::domain::{FilmworkDetail, FilmworkSummary};
use super::models::{FilmworkDocument, FilmworkSummaryDocument};
use crate::modules::person::mapper::PersonMapper;

pub struct FilmworkMapper;

impl FilmworkMapper {
    pub fn to_summary(doc: FilmworkSummaryDocument) -> FilmworkSummary {
        FilmworkSummary {
            id: doc.id,
            title: doc.title,
            rating: doc.rating,
        }
    }

    pub fn to_detail(doc: FilmworkDocument) -> FilmworkDetail {
        FilmworkDetail {
            id: doc.id,
            title: doc.title,
            rating: doc.rating,
            description: doc.description,
            release_date: doc.release_date,
            kind: doc.kind,
            genres: doc.genres,
            actors: PersonMapper::to_refs(doc.actors),
            writers: PersonMapper::to_refs(doc.writers),
            directors: PersonMapper::to_refs(doc.directors),
        }
    }
}
