//! Domain types for the todo store.
//!
//! # Design
//! `TodoItem` and `DraftTodo` mirror the mock-server's schema but are defined
//! independently. Integration tests catch any schema drift between the two
//! crates. `FilterSortState` is plain data consumed by the URL builder; the
//! store replaces it wholesale rather than mutating individual fields.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single todo item returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoItem {
    pub id: Uuid,
    pub title: String,
    pub status: bool,
}

/// In-progress form state for a new todo. Also the `POST /todos` payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DraftTodo {
    pub title: String,
    #[serde(default)]
    pub status: bool,
}

/// One page of todos as the server counts them.
///
/// `total` is the server-side count of matching items and may exceed
/// `items.len()` when the listing is paginated.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoPage {
    pub items: Vec<TodoItem>,
    pub total: u64,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Completed,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Title,
    Status,
}

impl SortKey {
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Title => "title",
            SortKey::Status => "status",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// Filter and sort snapshot used to compute the list locator.
///
/// Every field is optional in spirit: a default value means "no
/// constraint", and zero page sizes are dropped rather than rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FilterSortState {
    pub status: StatusFilter,
    pub search: Option<String>,
    pub sort: Option<SortKey>,
    pub order: SortOrder,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

/// The store's full state. Owned by `TodoStore`, observed through
/// `StateContext`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoCollectionState {
    pub items: Vec<TodoItem>,
    pub total: u64,
    pub fetching: bool,
    pub filter: FilterSortState,
}
