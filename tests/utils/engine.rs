//! In-memory search engine interpreting the subset of the query DSL the
//! catalog emits: `match_all`, `multi_match`, nested credit disjunctions,
//! `from`/`size`, `_source` projection and rating sort.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use movies_api_lib::modules::search_engine::{
    EngineError, EngineRequest, EngineResult, Index, SearchEngineClient,
};
use serde_json::{json, Map, Value};

#[derive(Default)]
pub struct InMemoryEngine {
    documents: HashMap<Index, Vec<Value>>,
    failing: Mutex<HashSet<Index>>,
    requests: AtomicUsize,
}

impl InMemoryEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(mut self, index: Index, document: Value) -> Self {
        self.documents.entry(index).or_default().push(document);
        self
    }

    /// Make every request against `index` fail with a 500
    pub fn fail_index(&self, index: Index) {
        self.failing.lock().unwrap().insert(index);
    }

    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }

    fn docs(&self, index: Index) -> &[Value] {
        self.documents.get(&index).map(Vec::as_slice).unwrap_or(&[])
    }

    fn search(&self, index: Index, body: &Value) -> Value {
        let mut hits: Vec<&Value> = self
            .docs(index)
            .iter()
            .filter(|doc| matches(&body["query"], doc))
            .collect();

        if body["sort"]["rating"]["order"] == "desc" {
            hits.sort_by(|a, b| {
                let (a, b) = (a["rating"].as_f64(), b["rating"].as_f64());
                b.unwrap_or(0.0).total_cmp(&a.unwrap_or(0.0))
            });
        }

        let from = body["from"].as_u64().unwrap_or(0) as usize;
        let size = body["size"].as_u64().unwrap_or(10) as usize;

        let hits: Vec<Value> = hits
            .into_iter()
            .skip(from)
            .take(size)
            .map(|doc| json!({ "_source": project(doc, &body["_source"]) }))
            .collect();

        json!({ "hits": { "total": { "value": hits.len() }, "hits": hits } })
    }
}

fn matches(query: &Value, doc: &Value) -> bool {
    if query.get("match_all").is_some() {
        return true;
    }

    if let Some(should) = query["bool"]["should"].as_array() {
        return should.iter().any(|clause| nested_matches(&clause["nested"], doc));
    }

    if let Some(multi) = query.get("multi_match") {
        return multi_matches(multi, doc);
    }

    false
}

fn nested_matches(nested: &Value, doc: &Value) -> bool {
    let Some(path) = nested["path"].as_str() else {
        return false;
    };
    let key = format!("{}.id", path);
    let Some(wanted) = nested["query"]["match"][key.as_str()].as_str() else {
        return false;
    };

    doc[path]
        .as_array()
        .map(|entries| entries.iter().any(|e| e["id"] == wanted))
        .unwrap_or(false)
}

fn multi_matches(multi: &Value, doc: &Value) -> bool {
    let text = multi["query"].as_str().unwrap_or_default().to_lowercase();
    let haystack: Vec<String> = multi["fields"]
        .as_array()
        .into_iter()
        .flatten()
        .filter_map(Value::as_str)
        .map(|field| field.trim_end_matches(".raw"))
        .filter_map(|field| doc[field].as_str())
        .map(str::to_lowercase)
        .collect();

    let term_found = |term: &str| haystack.iter().any(|value| value.contains(term));
    let mut terms = text.split_whitespace();

    if multi["operator"] == "and" {
        terms.all(term_found)
    } else {
        terms.any(term_found)
    }
}

fn project(doc: &Value, fields: &Value) -> Value {
    let Some(fields) = fields.as_array() else {
        return doc.clone();
    };

    let projected: Map<String, Value> = fields
        .iter()
        .filter_map(Value::as_str)
        .filter_map(|field| doc.get(field).map(|v| (field.to_string(), v.clone())))
        .collect();
    Value::Object(projected)
}

#[async_trait]
impl SearchEngineClient for InMemoryEngine {
    async fn execute(&self, index: Index, request: EngineRequest) -> EngineResult {
        self.requests.fetch_add(1, Ordering::SeqCst);

        if self.failing.lock().unwrap().contains(&index) {
            return Err(EngineError::Failure {
                status: Some(500),
                body: "{\"error\":\"all shards failed\"}".to_string(),
            });
        }

        match request {
            EngineRequest::Get { id } => self
                .docs(index)
                .iter()
                .find(|doc| doc["id"] == id.as_str())
                .map(|doc| json!({ "_index": index.as_str(), "found": true, "_source": doc }))
                .ok_or(EngineError::NotFound),
            EngineRequest::Search { body } => Ok(self.search(index, &body)),
        }
    }
}
