use axum::{
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use bookshelf_web::db;
use bookshelf_web::infrastructure::AppState;
use bookshelf_web::{seed, server};
use serde_json::Value;
use tower::util::ServiceExt; // for `oneshot`

async fn setup_test_state() -> AppState {
    let db = db::init_db("sqlite::memory:")
        .await
        .expect("Failed to init DB");
    AppState::new(db)
}

async fn get_json(state: AppState, uri: &str) -> (StatusCode, Value) {
    let app = server::build_router(state);

    let req = Request::builder()
        .uri(uri)
        .method("GET")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_list_books_empty() {
    let state = setup_test_state().await;

    let (status, body) = get_json(state, "/books").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!([]));
}

#[tokio::test]
async fn test_list_books_after_seed() {
    let state = setup_test_state().await;
    seed::seed_sample_data(&state).await.unwrap();

    let (status, body) = get_json(state, "/books").await;
    assert_eq!(status, StatusCode::OK);

    let books = body.as_array().expect("array body");
    assert_eq!(books.len(), 2);
    assert!(books.iter().all(|b| b["id"].is_i64()));
    assert!(books.iter().all(|b| b["publisher"].is_i64()));
    assert!(
        books
            .iter()
            .any(|b| b["title"] == "Domain Driven Design" && b["isbn"] == "123123")
    );
}

#[tokio::test]
async fn test_list_authors_after_seed() {
    let state = setup_test_state().await;
    seed::seed_sample_data(&state).await.unwrap();

    let (status, body) = get_json(state, "/authors").await;
    assert_eq!(status, StatusCode::OK);

    let authors = body.as_array().expect("array body");
    assert_eq!(authors.len(), 2);
    assert!(
        authors
            .iter()
            .any(|a| a["first_name"] == "Rod" && a["last_name"] == "Johnson")
    );
    assert!(authors.iter().all(|a| a["books"].as_array().map(Vec::len) == Some(1)));
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let state = setup_test_state().await;
    let app = server::build_router(state);

    let req = Request::builder()
        .uri("/publishers")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
