//! Read/write access to the store's state, handed to the service layer.
//!
//! # Design
//! The state lives in a `tokio::sync::watch` channel. `set` applies a
//! `StatePatch` inside `send_modify`, so every subscriber sees the patch as
//! one committed snapshot. `items` and `total` travel together in
//! `StatePatch::page`, which keeps them from ever being set independently.

use std::sync::Arc;

use tokio::sync::watch;

use crate::types::{FilterSortState, TodoCollectionState, TodoPage};

/// A partial update to `TodoCollectionState`. `None` fields are left as is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatePatch {
    pub fetching: Option<bool>,
    pub page: Option<TodoPage>,
    pub filter: Option<FilterSortState>,
}

impl StatePatch {
    pub fn fetching(fetching: bool) -> Self {
        Self {
            fetching: Some(fetching),
            ..Self::default()
        }
    }

    pub fn loaded(page: TodoPage) -> Self {
        Self {
            fetching: Some(false),
            page: Some(page),
            ..Self::default()
        }
    }

    fn apply(self, state: &mut TodoCollectionState) {
        if let Some(fetching) = self.fetching {
            state.fetching = fetching;
        }
        if let Some(page) = self.page {
            state.items = page.items;
            state.total = page.total;
        }
        if let Some(filter) = self.filter {
            state.filter = filter;
        }
    }
}

/// Shared handle over the store's state. Clones observe the same state.
#[derive(Debug, Clone)]
pub struct StateContext {
    tx: Arc<watch::Sender<TodoCollectionState>>,
}

impl StateContext {
    pub fn new(initial: TodoCollectionState) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx: Arc::new(tx) }
    }

    /// Snapshot of the last committed state.
    pub fn get(&self) -> TodoCollectionState {
        self.tx.borrow().clone()
    }

    /// Read one projection of the state without cloning the rest.
    pub fn with<R>(&self, f: impl FnOnce(&TodoCollectionState) -> R) -> R {
        f(&self.tx.borrow())
    }

    pub fn set(&self, patch: StatePatch) {
        self.tx.send_modify(|state| patch.apply(state));
    }

    pub fn subscribe(&self) -> watch::Receiver<TodoCollectionState> {
        self.tx.subscribe()
    }
}

impl Default for StateContext {
    fn default() -> Self {
        Self::new(TodoCollectionState::default())
    }
}
