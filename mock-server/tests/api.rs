use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, Todo, TodoList};
use tower::{Service, ServiceExt};

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

fn get_request(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

// --- list ---

#[tokio::test]
async fn list_todos_empty_envelope() {
    let app = app();
    let resp = app.oneshot(get_request("/todos")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let list: TodoList = body_json(resp).await;
    assert!(list.items.is_empty());
    assert_eq!(list.total, 0);
}

#[tokio::test]
async fn list_todos_rejects_non_boolean_status() {
    let app = app();
    let resp = app.oneshot(get_request("/todos?status=maybe")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn list_todos_huge_page_returns_empty_page() {
    let app = app();
    let resp = app
        .oneshot(get_request("/todos?_page=18446744073709551615&_limit=10"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let list: TodoList = body_json(resp).await;
    assert!(list.items.is_empty());
}

// --- create ---

#[tokio::test]
async fn create_todo_returns_201() {
    let app = app();
    let resp = app
        .oneshot(json_request("POST", "/todos", r#"{"title":"Buy milk"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let todo: Todo = body_json(resp).await;
    assert_eq!(todo.title, "Buy milk");
    assert!(!todo.status);
}

#[tokio::test]
async fn create_todo_with_status_true() {
    let app = app();
    let resp = app
        .oneshot(json_request(
            "POST",
            "/todos",
            r#"{"title":"Already done","status":true}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let todo: Todo = body_json(resp).await;
    assert!(todo.status);
}

#[tokio::test]
async fn create_todo_malformed_json_returns_422() {
    let app = app();
    let resp = app
        .oneshot(json_request("POST", "/todos", r#"{"not_title":1}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// --- create then query ---

#[tokio::test]
async fn create_then_filter_sort_and_paginate() {
    let mut app = app().into_service();

    for body in [
        r#"{"title":"Walk dog"}"#,
        r#"{"title":"Buy milk","status":true}"#,
        r#"{"title":"Buy bread"}"#,
    ] {
        let resp = ServiceExt::ready(&mut app)
            .await
            .unwrap()
            .call(json_request("POST", "/todos", body))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    // list: all three in insertion order
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get_request("/todos"))
        .await
        .unwrap();
    let list: TodoList = body_json(resp).await;
    assert_eq!(list.total, 3);
    assert_eq!(list.items[0].title, "Walk dog");

    // completed only
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get_request("/todos?status=true"))
        .await
        .unwrap();
    let list: TodoList = body_json(resp).await;
    assert_eq!(list.total, 1);
    assert_eq!(list.items[0].title, "Buy milk");

    // search, sorted by title, second page of one
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get_request("/todos?q=buy&_sort=title&_order=asc&_page=2&_limit=1"))
        .await
        .unwrap();
    let list: TodoList = body_json(resp).await;
    assert_eq!(list.total, 2);
    assert_eq!(list.items.len(), 1);
    assert_eq!(list.items[0].title, "Buy milk");

    // page past the end: empty items, total still counts matches
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get_request("/todos?_page=5&_limit=10"))
        .await
        .unwrap();
    let list: TodoList = body_json(resp).await;
    assert!(list.items.is_empty());
    assert_eq!(list.total, 3);
}
