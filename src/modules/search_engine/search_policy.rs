//! Search limits, fuzziness and field lists shared by all repositories

/// Result cap for ad-hoc search endpoints; not user configurable
pub const SEARCH_LIMIT: usize = 1000;

/// Cap on the number of filmworks fetched for one person.
/// Persons credited in more works get a truncated, rating-sorted list.
pub const PERSON_FILMWORKS_CAP: usize = 1000;

/// Fallback limit when a caller passes zero
pub const DEFAULT_PERSON_SEARCH_LIMIT: usize = 10;

/// Typo tolerance for fuzzy multi-field matches
pub const FUZZINESS: &str = "AUTO";

pub const FILMWORK_SEARCH_FIELDS: &[&str] = &["title", "description"];
pub const GENRE_SEARCH_FIELDS: &[&str] = &["name", "description"];
pub const PERSON_SEARCH_FIELDS: &[&str] = &["full_name", "full_name.raw"];

/// Nested credit collections inside a filmwork document
pub const CREDIT_PATHS: [&str; 3] = ["actors", "directors", "writers"];
