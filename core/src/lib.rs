//! Reactive todo store, fetch service and submit-gated form.
//!
//! # Overview
//! A `TodoStore` holds the loaded todos, their server-side total and a
//! `fetching` flag. Its `get_todos` action drives a `FetchService` through
//! one round-trip on a host-supplied `Transport`. A `TodoFormController`
//! keeps a draft, validates it with an `InputValidator` and saves it through
//! the store.
//!
//! # Design
//! - `TodoClient` is stateless. Locator building (`list_url`) and response
//!   mapping (`parse_list_todos`) are pure functions of their inputs.
//! - The host performs all IO through `Transport`; the transport call is the
//!   only await point in the crate.
//! - State is published through a `watch` channel, so subscribers only ever
//!   observe committed snapshots.
//! - Failures that actions swallow are handed to a `DiagnosticSink`.

pub mod client;
pub mod config;
pub mod context;
pub mod diagnostics;
pub mod error;
pub mod fetch;
pub mod form;
pub mod http;
pub mod store;
pub mod types;
pub mod validator;

pub use client::TodoClient;
pub use config::ClientConfig;
pub use context::{StateContext, StatePatch};
pub use diagnostics::{DiagnosticSink, TracingSink};
pub use error::{ApiError, SaveFailure, TransportError};
pub use fetch::FetchService;
pub use form::{SubmitOutcome, TodoFormController};
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use store::TodoStore;
pub use types::{
    DraftTodo, FilterSortState, SortKey, SortOrder, StatusFilter, TodoCollectionState, TodoItem, TodoPage,
};
pub use validator::{InputValidator, MIN_TITLE_LEN};
