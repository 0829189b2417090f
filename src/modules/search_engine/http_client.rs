//! HTTP client for an Elasticsearch-compatible engine
//!
//! One request per call: no retries and no rate limiting. Failures surface
//! immediately as [`EngineError`].

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, StatusCode};

use super::client::{EngineError, EngineRequest, EngineResult, Index, SearchEngineClient};
use crate::shared::config::ElasticSettings;
use crate::shared::utils::logger::{LogContext, TimedOperation};

const MAX_LOGGED_BODY: usize = 200;

pub struct ElasticClient {
    client: Client,
    base_url: String,
    credentials: Option<(String, String)>,
}

impl ElasticClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            credentials: None,
        }
    }

    pub fn from_settings(settings: &ElasticSettings) -> Self {
        Self::new(settings.base_url()).with_basic_auth(&settings.user, &settings.password)
    }

    pub fn with_basic_auth(mut self, user: &str, password: &str) -> Self {
        if !user.is_empty() {
            self.credentials = Some((user.to_string(), password.to_string()));
        }
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL for a request against `index`
    pub fn url_for(&self, index: Index, request: &EngineRequest) -> String {
        match request {
            EngineRequest::Get { id } => format!(
                "{}/{}/_doc/{}",
                self.base_url,
                index,
                urlencoding::encode(id)
            ),
            EngineRequest::Search { .. } => format!("{}/{}/_search", self.base_url, index),
        }
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        let builder = self
            .client
            .request(method, url)
            .header("Accept", "application/json");

        match &self.credentials {
            Some((user, password)) => builder.basic_auth(user, Some(password)),
            None => builder,
        }
    }

    /// Cluster banner, logged at startup
    pub async fn info(&self) -> EngineResult {
        let response = self
            .request(Method::GET, &self.base_url)
            .send()
            .await
            .map_err(transport_failure)?;
        Self::read_response(response, false).await
    }

    async fn read_response(response: reqwest::Response, is_lookup: bool) -> EngineResult {
        let status = response.status();

        if is_lookup && status == StatusCode::NOT_FOUND {
            return Err(EngineError::NotFound);
        }

        let body = response.text().await.map_err(transport_failure)?;

        if !status.is_success() {
            return Err(EngineError::Failure {
                status: Some(status.as_u16()),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|e| EngineError::Failure {
            status: Some(status.as_u16()),
            body: format!("invalid JSON response: {}. Response: {}", e, truncate(&body)),
        })
    }
}

fn transport_failure(err: reqwest::Error) -> EngineError {
    let body = if err.is_timeout() {
        "request timeout".to_string()
    } else if err.is_connect() {
        format!("failed to connect to search engine: {}", err)
    } else {
        err.to_string()
    };
    EngineError::Failure { status: None, body }
}

fn truncate(body: &str) -> String {
    if body.len() > MAX_LOGGED_BODY {
        let mut end = MAX_LOGGED_BODY;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &body[..end])
    } else {
        body.to_string()
    }
}

#[async_trait]
impl SearchEngineClient for ElasticClient {
    async fn execute(&self, index: Index, request: EngineRequest) -> EngineResult {
        let url = self.url_for(index, &request);
        let operation = request.operation();
        LogContext::engine_call(index.as_str(), operation, "", None);
        let timer = TimedOperation::new(&format!("{} {}", operation, index));

        let result = match &request {
            EngineRequest::Get { .. } => match self.request(Method::GET, &url).send().await {
                Ok(response) => Self::read_response(response, true).await,
                Err(e) => Err(transport_failure(e)),
            },
            EngineRequest::Search { body } => {
                match self.request(Method::POST, &url).json(body).send().await {
                    Ok(response) => Self::read_response(response, false).await,
                    Err(e) => Err(transport_failure(e)),
                }
            }
        };

        let status = match &result {
            Ok(_) => "ok".to_string(),
            Err(EngineError::NotFound) => "not found".to_string(),
            Err(EngineError::Failure { status, body }) => {
                log::warn!(
                    "Engine: {} on {} failed [{:?}]: {}",
                    operation,
                    index,
                    status,
                    truncate(body)
                );
                "failed".to_string()
            }
        };
        LogContext::engine_call(index.as_str(), operation, &status, Some(timer.finish()));

        result
    }
}
