//! The todo store: committed state plus the actions that change it.
//!
//! # Design
//! `fetching` moves Idle → Fetching → Idle on every `get_todos` call. A
//! failed fetch returns to Idle with the last good page still in place and
//! the error reported to the diagnostic sink. Overlapping calls are not
//! deduplicated: each drives its own transition, the first to land clears
//! `fetching`, and the last to land decides `items`/`total`.
//!
//! `save_todo` shares the transport but never touches `fetching`, `items`
//! or `total`; a saved todo shows up on the next fetch.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::info;

use crate::client::TodoClient;
use crate::config::ClientConfig;
use crate::context::{StateContext, StatePatch};
use crate::diagnostics::DiagnosticSink;
use crate::error::{ApiError, SaveFailure};
use crate::fetch::FetchService;
use crate::http::Transport;
use crate::types::{DraftTodo, FilterSortState, TodoCollectionState, TodoItem};

/// Cheaply cloneable handle; clones share state and collaborators.
#[derive(Clone)]
pub struct TodoStore {
    ctx: StateContext,
    service: FetchService,
    sink: Arc<dyn DiagnosticSink>,
}

impl TodoStore {
    pub fn new(config: &ClientConfig, transport: Arc<dyn Transport>, sink: Arc<dyn DiagnosticSink>) -> Self {
        let client = TodoClient::new(&config.base_url);
        Self {
            ctx: StateContext::default(),
            service: FetchService::new(client, transport),
            sink,
        }
    }

    pub fn sink(&self) -> &Arc<dyn DiagnosticSink> {
        &self.sink
    }

    pub fn state(&self) -> TodoCollectionState {
        self.ctx.get()
    }

    pub fn subscribe(&self) -> watch::Receiver<TodoCollectionState> {
        self.ctx.subscribe()
    }

    pub fn items(&self) -> Vec<TodoItem> {
        self.ctx.with(|s| s.items.clone())
    }

    pub fn total(&self) -> u64 {
        self.ctx.with(|s| s.total)
    }

    pub fn is_fetching(&self) -> bool {
        self.ctx.with(|s| s.fetching)
    }

    pub fn filter(&self) -> FilterSortState {
        self.ctx.with(|s| s.filter.clone())
    }

    /// Loaded items that are still open.
    pub fn remaining(&self) -> usize {
        self.ctx.with(|s| s.items.iter().filter(|t| !t.status).count())
    }

    /// Loaded items that are done.
    pub fn completed(&self) -> usize {
        self.ctx.with(|s| s.items.iter().filter(|t| t.status).count())
    }

    /// Whether the server counts more matches than are loaded.
    pub fn has_more(&self) -> bool {
        self.ctx.with(|s| s.total > s.items.len() as u64)
    }

    /// Replace the filter used by subsequent fetches. Does not fetch.
    pub fn set_filter(&self, filter: FilterSortState) {
        self.ctx.set(StatePatch {
            filter: Some(filter),
            ..StatePatch::default()
        });
    }

    /// Run one fetch and commit its outcome. Never fails from the caller's
    /// point of view.
    pub async fn get_todos(&self) {
        let announce = {
            let ctx = self.ctx.clone();
            move |patch: StatePatch| ctx.set(patch)
        };
        let snapshot = {
            let ctx = self.ctx.clone();
            move || ctx.with(|s| s.filter.clone())
        };

        match self.service.fetch_todos(announce, snapshot).await {
            Ok(page) => {
                info!(items = page.items.len(), total = page.total, "todos loaded");
                self.ctx.set(StatePatch::loaded(page));
            }
            Err(err) => {
                self.ctx.set(StatePatch::fetching(false));
                self.sink.report(&err);
            }
        }
    }

    /// Persist a draft through `POST /todos`.
    pub async fn save_todo(&self, draft: &DraftTodo) -> Result<TodoItem, SaveFailure> {
        let client = self.service.client();
        let request = client.build_create_todo(draft)?;
        let response = self
            .service
            .transport()
            .execute(request)
            .await
            .map_err(ApiError::from)?;
        let todo = client.parse_create_todo(response)?;
        info!(id = %todo.id, title = %todo.title, "todo saved");
        Ok(todo)
    }
}

impl std::fmt::Debug for TodoStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TodoStore")
            .field("state", &self.state())
            .field("service", &self.service)
            .finish_non_exhaustive()
    }
}
