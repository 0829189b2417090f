//! Query DSL builders
//!
//! Pure, total functions producing structured query documents. Callers
//! validate sizes and page numbers beforehand.

use serde_json::{json, Value};

use super::search_policy::{CREDIT_PATHS, FUZZINESS, PERSON_FILMWORKS_CAP, PERSON_SEARCH_FIELDS};

/// Fields requested from filmwork documents when querying by person
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilmworkProjection {
    /// `id`, `title`, `rating`, sorted by rating descending
    RatedSummary,
    /// `id` plus the three credit collections, in engine order
    Credits,
}

impl FilmworkProjection {
    pub fn source_fields(&self) -> &'static [&'static str] {
        match self {
            FilmworkProjection::RatedSummary => &["id", "title", "rating"],
            FilmworkProjection::Credits => &["id", "actors", "directors", "writers"],
        }
    }
}

fn match_all() -> Value {
    json!({ "match_all": {} })
}

/// Select every document, one page at a time
pub fn build_get_all(offset: u64, size: u64) -> Value {
    json!({
        "query": match_all(),
        "from": offset,
        "size": size,
    })
}

/// Fuzzy best-fields match over `fields`; empty text degrades to a plain listing
pub fn build_fuzzy_search(text: &str, fields: &[&str], limit: usize) -> Value {
    if text.is_empty() {
        return json!({
            "query": match_all(),
            "size": limit,
        });
    }

    json!({
        "query": {
            "multi_match": {
                "query": text,
                "fields": fields,
                "type": "best_fields",
                "fuzziness": FUZZINESS,
            }
        },
        "size": limit,
    })
}

/// Disjunction over the nested credit collections of filmwork documents
pub fn build_person_credits_clause(person_id: &str) -> Value {
    let should: Vec<Value> = CREDIT_PATHS
        .iter()
        .map(|path| {
            json!({
                "nested": {
                    "path": path,
                    "query": {
                        "match": { format!("{}.id", path): person_id }
                    }
                }
            })
        })
        .collect();

    json!({ "bool": { "should": should } })
}

/// Filmworks crediting `person_id` in any capacity, with the requested projection
pub fn build_person_filmworks_query(person_id: &str, projection: FilmworkProjection) -> Value {
    let mut body = json!({
        "query": build_person_credits_clause(person_id),
        "size": PERSON_FILMWORKS_CAP,
        "_source": projection.source_fields(),
    });

    if projection == FilmworkProjection::RatedSummary {
        body["sort"] = json!({ "rating": { "order": "desc" } });
    }

    body
}

/// Full-name search requiring every term, ranked by score
pub fn build_person_search(text: &str, limit: usize) -> Value {
    if text.is_empty() {
        return json!({
            "query": match_all(),
            "size": limit,
        });
    }

    json!({
        "query": {
            "multi_match": {
                "query": text,
                "fields": PERSON_SEARCH_FIELDS,
                "operator": "and",
                "type": "best_fields",
            }
        },
        "size": limit,
        "sort": [
            { "_score": { "order": "desc" } }
        ],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::search_engine::search_policy::FILMWORK_SEARCH_FIELDS;

    #[test]
    fn test_get_all_pagination() {
        let query = build_get_all(200, 100);
        assert_eq!(query["from"], 200);
        assert_eq!(query["size"], 100);
        assert!(query["query"]["match_all"].is_object());
    }

    #[test]
    fn test_fuzzy_search_empty_text_is_listing() {
        let query = build_fuzzy_search("", FILMWORK_SEARCH_FIELDS, 1000);
        assert_eq!(query, json!({ "query": { "match_all": {} }, "size": 1000 }));
    }

    #[test]
    fn test_fuzzy_search_shape() {
        let query = build_fuzzy_search("star wars", FILMWORK_SEARCH_FIELDS, 50);
        let multi_match = &query["query"]["multi_match"];
        assert_eq!(multi_match["query"], "star wars");
        assert_eq!(multi_match["fields"], json!(["title", "description"]));
        assert_eq!(multi_match["type"], "best_fields");
        assert_eq!(multi_match["fuzziness"], "AUTO");
        assert_eq!(query["size"], 50);
        assert!(query.get("sort").is_none());
    }

    #[test]
    fn test_text_is_data_not_syntax() {
        let text = r#"" OR 1=1 {"#;
        let query = build_fuzzy_search(text, FILMWORK_SEARCH_FIELDS, 10);
        assert_eq!(query["query"]["multi_match"]["query"], text);
    }

    #[test]
    fn test_person_filmworks_clause_covers_all_credits() {
        let query = build_person_filmworks_query("p1", FilmworkProjection::Credits);
        let should = query["query"]["bool"]["should"].as_array().unwrap();
        assert_eq!(should.len(), 3);

        let paths: Vec<&str> = should
            .iter()
            .map(|clause| clause["nested"]["path"].as_str().unwrap())
            .collect();
        assert_eq!(paths, vec!["actors", "directors", "writers"]);

        for clause in should {
            let path = clause["nested"]["path"].as_str().unwrap();
            let field = format!("{}.id", path);
            assert_eq!(clause["nested"]["query"]["match"][field.as_str()], "p1");
        }
    }

    #[test]
    fn test_person_filmworks_projections() {
        let rated = build_person_filmworks_query("p1", FilmworkProjection::RatedSummary);
        assert_eq!(rated["_source"], json!(["id", "title", "rating"]));
        assert_eq!(rated["sort"]["rating"]["order"], "desc");
        assert_eq!(rated["size"], 1000);

        let credits = build_person_filmworks_query("p1", FilmworkProjection::Credits);
        assert_eq!(
            credits["_source"],
            json!(["id", "actors", "directors", "writers"])
        );
        assert!(credits.get("sort").is_none());
        assert_eq!(credits["size"], 1000);

        assert_eq!(rated["query"], credits["query"]);
    }

    #[test]
    fn test_person_search_requires_all_terms() {
        let query = build_person_search("George Lucas", 1000);
        let multi_match = &query["query"]["multi_match"];
        assert_eq!(multi_match["operator"], "and");
        assert_eq!(multi_match["fields"], json!(["full_name", "full_name.raw"]));
        assert!(multi_match.get("fuzziness").is_none());
        assert_eq!(query["sort"][0]["_score"]["order"], "desc");
        assert_eq!(query["size"], 1000);
    }

    #[test]
    fn test_person_search_empty_text_is_listing() {
        let query = build_person_search("", 5);
        assert!(query["query"]["match_all"].is_object());
        assert_eq!(query["size"], 5);
    }
}
