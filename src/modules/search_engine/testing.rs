//! Scripted engine double for unit tests

use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{json, Value};

use super::client::{EngineRequest, EngineResult, Index, SearchEngineClient};

type Handler = Box<dyn Fn(Index, &EngineRequest) -> EngineResult + Send + Sync>;

pub struct FakeEngine {
    handler: Handler,
    calls: Mutex<Vec<(Index, EngineRequest)>>,
}

impl FakeEngine {
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(Index, &EngineRequest) -> EngineResult + Send + Sync + 'static,
    {
        Self {
            handler: Box::new(handler),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<(Index, EngineRequest)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Bodies of every search request sent to `index`
    pub fn search_bodies(&self, index: Index) -> Vec<Value> {
        self.calls()
            .into_iter()
            .filter_map(|(i, request)| match request {
                EngineRequest::Search { body } if i == index => Some(body),
                _ => None,
            })
            .collect()
    }
}

#[async_trait]
impl SearchEngineClient for FakeEngine {
    async fn execute(&self, index: Index, request: EngineRequest) -> EngineResult {
        self.calls.lock().unwrap().push((index, request.clone()));
        (self.handler)(index, &request)
    }
}

pub fn get_response(source: Value) -> Value {
    json!({ "found": true, "_source": source })
}

pub fn search_response(sources: Vec<Value>) -> Value {
    let hits: Vec<Value> = sources
        .into_iter()
        .map(|source| json!({ "_source": source }))
        .collect();
    json!({ "hits": { "hits": hits } })
}

/// Person id targeted by a person-filmworks query, if the body is one
pub fn credited_person(body: &Value) -> Option<String> {
    body["query"]["bool"]["should"][0]["nested"]["query"]["match"]["actors.id"]
        .as_str()
        .map(str::to_string)
}

/// Whether the body asks for the credit collections rather than title/rating
pub fn wants_credits(body: &Value) -> bool {
    body["_source"]
        .as_array()
        .map(|fields| fields.iter().any(|f| f == "actors"))
        .unwrap_or(false)
}
