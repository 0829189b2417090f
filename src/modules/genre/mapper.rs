use super::domain::Genre;
use super::models::GenreDocument;

pub struct GenreMapper;

impl GenreMapper {
    pub fn to_genre(doc: GenreDocument) -> Genre {
        Genre {
            id: doc.id,
            name: doc.name,
            description: doc.description,
        }
    }
}
