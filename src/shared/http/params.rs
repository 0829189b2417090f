use std::time::Duration;

use serde::Deserialize;
use tokio_util::sync::DropGuard;

use crate::shared::application::{PageRequest, QueryContext};
use crate::shared::errors::AppResult;

/// Raw listing parameters; validated by [`ListParams::page_request`]
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub page_number: Option<String>,
    pub page_size: Option<String>,
}

impl ListParams {
    pub fn page_request(&self) -> AppResult<PageRequest> {
        PageRequest::parse(self.page_number.as_deref(), self.page_size.as_deref())
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

impl SearchParams {
    pub fn text(&self) -> &str {
        self.q.as_deref().map(str::trim).unwrap_or_default()
    }
}

/// Context for one inbound request.
/// The guard cancels in-flight engine calls if the handler future is dropped.
pub fn request_context(timeout: Duration) -> (QueryContext, DropGuard) {
    let ctx = QueryContext::new().with_timeout(timeout);
    let guard = ctx.drop_guard();
    (ctx, guard)
}
