//! Role and filmography derivation
//!
//! A person's roles are not stored on the person document. They are
//! recovered from the credit collections of the filmworks that mention the
//! person.

use std::collections::HashSet;

use tracing::{debug, trace};

use super::domain::{PersonCredits, RoleKind};
use super::models::{CreditedFilmworkDocument, PersonRefDocument};

fn credits_of(doc: &CreditedFilmworkDocument, role: RoleKind) -> &[PersonRefDocument] {
    match role {
        RoleKind::Actor => &doc.actors,
        RoleKind::Director => &doc.directors,
        RoleKind::Writer => &doc.writers,
    }
}

/// Fold credited filmwork documents into the person's roles and filmwork ids.
///
/// Documents are visited in engine order. A document only counts when
/// `person_id` actually appears in one of its collections, and each
/// filmwork id is recorded once.
pub fn derive_credits(person_id: &str, docs: Vec<CreditedFilmworkDocument>) -> PersonCredits {
    let mut credits = PersonCredits::default();
    let mut seen = HashSet::new();

    for doc in docs {
        let mut credited = false;
        for role in RoleKind::ALL {
            if credits_of(&doc, role).iter().any(|p| p.id == person_id) {
                credits.roles.insert(role);
                credited = true;
            }
        }

        if !credited {
            trace!(person_id, filmwork_id = %doc.id, "filmwork does not credit person");
            continue;
        }
        if seen.insert(doc.id.clone()) {
            credits.filmwork_ids.push(doc.id);
        }
    }

    debug!(
        person_id,
        roles = credits.roles.len(),
        filmworks = credits.filmwork_ids.len(),
        "derived person credits"
    );
    credits
}
