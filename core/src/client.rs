//! Stateless HTTP request builder and response parser for the todo API.
//!
//! # Design
//! `TodoClient` holds only a `base_url` and carries no mutable state between
//! calls. Each operation is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! Both halves are pure, so the locator and the domain mapping can be tested
//! without a transport.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::Deserialize;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{DraftTodo, FilterSortState, StatusFilter, TodoItem, TodoPage};

/// Synchronous, stateless client for the todo API.
#[derive(Debug, Clone)]
pub struct TodoClient {
    base_url: String,
}

/// List envelope as sent by the server. Both fields are optional here so a
/// missing one surfaces as `MalformedResponse` instead of a serde message.
#[derive(Deserialize)]
struct ListEnvelope {
    items: Option<Vec<TodoItem>>,
    total: Option<u64>,
}

impl TodoClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Compute the list locator for a filter snapshot.
    ///
    /// `None` and default filters both produce the bare `/todos` path.
    /// Parameters that carry no constraint (blank search, zero page sizes)
    /// are omitted rather than rejected.
    pub fn list_url(&self, filter: Option<&FilterSortState>) -> String {
        let mut url = format!("{}/todos", self.base_url);
        let Some(filter) = filter else {
            return url;
        };

        let mut params: Vec<(&str, String)> = Vec::new();
        match filter.status {
            StatusFilter::All => {}
            StatusFilter::Active => params.push(("status", "false".to_string())),
            StatusFilter::Completed => params.push(("status", "true".to_string())),
        }
        if let Some(search) = filter.search.as_deref().map(str::trim) {
            if !search.is_empty() {
                params.push(("q", utf8_percent_encode(search, NON_ALPHANUMERIC).to_string()));
            }
        }
        if let Some(sort) = filter.sort {
            params.push(("_sort", sort.as_str().to_string()));
            params.push(("_order", filter.order.as_str().to_string()));
        }
        if let Some(page) = filter.page.filter(|p| *p > 0) {
            params.push(("_page", page.to_string()));
        }
        if let Some(limit) = filter.per_page.filter(|l| *l > 0) {
            params.push(("_limit", limit.to_string()));
        }

        for (i, (key, value)) in params.iter().enumerate() {
            url.push(if i == 0 { '?' } else { '&' });
            url.push_str(key);
            url.push('=');
            url.push_str(value);
        }
        url
    }

    pub fn build_list_todos(&self, filter: Option<&FilterSortState>) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: self.list_url(filter),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create_todo(&self, draft: &DraftTodo) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(draft).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/todos", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    /// Map a list response into the domain page.
    ///
    /// An empty `items` array always yields `total = 0`.
    pub fn parse_list_todos(&self, response: HttpResponse) -> Result<TodoPage, ApiError> {
        check_status(&response, 200)?;
        let envelope: ListEnvelope =
            serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))?;
        let items = envelope
            .items
            .ok_or_else(|| ApiError::MalformedResponse("missing `items`".to_string()))?;
        let total = envelope
            .total
            .ok_or_else(|| ApiError::MalformedResponse("missing `total`".to_string()))?;
        let total = if items.is_empty() { 0 } else { total };
        Ok(TodoPage { items, total })
    }

    pub fn parse_create_todo(&self, response: HttpResponse) -> Result<TodoItem, ApiError> {
        check_status(&response, 201)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
    }
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    if response.status == expected {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}
