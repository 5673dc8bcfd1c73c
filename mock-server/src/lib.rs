use std::{cmp::Ordering, sync::Arc};

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

/// Page size used when `_page` is given without `_limit`.
pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Todo {
    pub id: Uuid,
    pub title: String,
    pub status: bool,
}

#[derive(Deserialize)]
pub struct CreateTodo {
    pub title: String,
    #[serde(default)]
    pub status: bool,
}

/// Query parameters accepted by `GET /todos`.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub status: Option<bool>,
    pub q: Option<String>,
    #[serde(rename = "_sort")]
    pub sort: Option<String>,
    #[serde(rename = "_order")]
    pub order: Option<String>,
    #[serde(rename = "_page")]
    pub page: Option<usize>,
    #[serde(rename = "_limit")]
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TodoList {
    pub items: Vec<Todo>,
    pub total: usize,
}

/// Insertion-ordered so unsorted listings are stable.
pub type Db = Arc<RwLock<Vec<Todo>>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Vec::new()));
    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_todos(State(db): State<Db>, Query(query): Query<ListQuery>) -> Json<TodoList> {
    let todos = db.read().await;
    Json(select(&todos, &query))
}

async fn create_todo(
    State(db): State<Db>,
    Json(input): Json<CreateTodo>,
) -> (StatusCode, Json<Todo>) {
    let todo = Todo {
        id: Uuid::new_v4(),
        title: input.title,
        status: input.status,
    };
    tracing::debug!(id = %todo.id, title = %todo.title, "created todo");
    db.write().await.push(todo.clone());
    (StatusCode::CREATED, Json(todo))
}

/// Filter, then sort, then paginate. `total` counts matches before
/// pagination. Unknown sort keys leave insertion order in place.
pub fn select(todos: &[Todo], query: &ListQuery) -> TodoList {
    let needle = query.q.as_deref().map(str::to_lowercase);
    let mut matched: Vec<Todo> = todos
        .iter()
        .filter(|t| query.status.map_or(true, |s| t.status == s))
        .filter(|t| needle.as_deref().map_or(true, |n| t.title.to_lowercase().contains(n)))
        .cloned()
        .collect();

    let compare: Option<fn(&Todo, &Todo) -> Ordering> = match query.sort.as_deref() {
        Some("title") => Some(|a: &Todo, b: &Todo| a.title.cmp(&b.title)),
        Some("status") => Some(|a: &Todo, b: &Todo| a.status.cmp(&b.status)),
        _ => None,
    };
    if let Some(compare) = compare {
        matched.sort_by(compare);
        if query.order.as_deref() == Some("desc") {
            matched.reverse();
        }
    }

    let total = matched.len();
    let items = match (query.page, query.limit) {
        (None, None) => matched,
        (page, limit) => {
            let limit = limit.filter(|l| *l > 0).unwrap_or(DEFAULT_PAGE_SIZE);
            let page = page.filter(|p| *p > 0).unwrap_or(1);
            match (page - 1).checked_mul(limit) {
                Some(offset) => matched.into_iter().skip(offset).take(limit).collect(),
                None => Vec::new(),
            }
        }
    };
    TodoList { items, total }
}
