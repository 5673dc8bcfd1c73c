//! One list round-trip: announce, build the locator, call out, transform.
//!
//! # Design
//! `FetchService` only announces intent (`fetching = true`). Committing the
//! result and clearing the flag belong to the caller, so the service never
//! touches state after its await point. Errors propagate untouched; there
//! is exactly one transport call per invocation.

use std::sync::Arc;

use tracing::debug;

use crate::client::TodoClient;
use crate::context::StatePatch;
use crate::error::ApiError;
use crate::http::Transport;
use crate::types::{FilterSortState, TodoPage};

#[derive(Clone)]
pub struct FetchService {
    client: TodoClient,
    transport: Arc<dyn Transport>,
}

impl FetchService {
    pub fn new(client: TodoClient, transport: Arc<dyn Transport>) -> Self {
        Self { client, transport }
    }

    pub fn client(&self) -> &TodoClient {
        &self.client
    }

    pub fn transport(&self) -> &Arc<dyn Transport> {
        &self.transport
    }

    /// Fetch the todo list for the current filter.
    ///
    /// `on_fetch_start` runs synchronously before the transport future is
    /// created. `state` is read once, after the announcement, to obtain the
    /// filter snapshot the locator is built from.
    pub async fn fetch_todos<F, S>(&self, on_fetch_start: F, state: S) -> Result<TodoPage, ApiError>
    where
        F: FnOnce(StatePatch),
        S: FnOnce() -> FilterSortState,
    {
        on_fetch_start(StatePatch::fetching(true));

        let filter = state();
        let request = self.client.build_list_todos(Some(&filter));
        debug!(url = %request.path, "fetching todos");

        let response = self.transport.execute(request).await?;
        self.client.parse_list_todos(response)
    }
}

impl std::fmt::Debug for FetchService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetchService").field("client", &self.client).finish_non_exhaustive()
    }
}
