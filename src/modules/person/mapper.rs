use super::domain::{Person, PersonCredits, PersonRef};
use super::models::{PersonDocument, PersonRefDocument};

pub struct PersonMapper;

impl PersonMapper {
    pub fn to_person(doc: PersonDocument, credits: PersonCredits) -> Person {
        Person::new(doc.id, doc.full_name, credits)
    }

    pub fn to_ref(doc: PersonRefDocument) -> PersonRef {
        PersonRef {
            id: doc.id,
            name: doc.name,
        }
    }

    pub fn to_refs(docs: Vec<PersonRefDocument>) -> Vec<PersonRef> {
        docs.into_iter().map(Self::to_ref).collect()
    }
}
