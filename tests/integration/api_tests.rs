//! API integration tests

use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use bookshelf_server::{api, config::AppConfig, messages::Locale, AppState};

/// Router over a fresh, isolated catalog
fn app() -> Router {
    api::create_router(AppState::new(&AppConfig::default()))
}

fn app_with_locale(locale: Locale) -> Router {
    let mut config = AppConfig::default();
    config.catalog.locale = locale;
    api::create_router(AppState::new(&config))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("Failed to build request");

    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("Failed to send request");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

async fn add(app: &Router, body: Value) -> String {
    let (status, body) = send(app, Method::POST, "/books", Some(body)).await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    body["data"]["bookId"]
        .as_str()
        .expect("No book id in response")
        .to_string()
}

#[tokio::test]
async fn test_health_check() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["books"], 0);
}

#[tokio::test]
async fn test_add_book() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/books",
        Some(json!({
            "name": "Buku A",
            "year": 2010,
            "author": "John Doe",
            "summary": "Lorem ipsum",
            "publisher": "Dicoding",
            "pageCount": 100,
            "readPage": 25,
            "reading": false
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["status"], "success");
    assert_eq!(body["message"], "Buku berhasil ditambahkan");
    assert_eq!(body["data"]["bookId"].as_str().map(str::len), Some(16));
}

#[tokio::test]
async fn test_add_book_without_name() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/books",
        Some(json!({ "pageCount": 100, "readPage": 500 })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "fail");
    assert_eq!(body["message"], "Gagal menambahkan buku. Mohon isi nama buku");
}

#[tokio::test]
async fn test_add_book_read_page_over_page_count() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/books",
        Some(json!({ "name": "A", "pageCount": 80, "readPage": 90 })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        "Gagal menambahkan buku. readPage tidak boleh lebih besar dari pageCount"
    );

    let (_, body) = send(&app, Method::GET, "/books", None).await;
    assert_eq!(body["data"]["books"], json!([]));
}

#[tokio::test]
async fn test_add_book_malformed_body() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/books",
        Some(json!({ "name": "A", "pageCount": "many" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "fail");
}

#[tokio::test]
async fn test_get_book_returns_full_record() {
    let app = app();
    let id = add(
        &app,
        json!({ "name": "A", "publisher": "P", "pageCount": 100, "readPage": 100, "reading": true }),
    )
    .await;

    let (status, body) = send(&app, Method::GET, &format!("/books/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");

    let book = &body["data"]["book"];
    assert_eq!(book["id"], id.as_str());
    assert_eq!(book["name"], "A");
    assert_eq!(book["pageCount"], 100);
    assert_eq!(book["readPage"], 100);
    assert_eq!(book["finished"], true);
    assert_eq!(book["reading"], true);
    assert_eq!(book["insertedAt"], book["updatedAt"]);

    let (_, again) = send(&app, Method::GET, &format!("/books/{}", id), None).await;
    assert_eq!(again, body);
}

#[tokio::test]
async fn test_opaque_fields_are_stored_as_given() {
    let app = app();
    let id = add(
        &app,
        json!({ "name": "A", "year": "2010", "author": 42, "summary": ["x", 1], "publisher": true }),
    )
    .await;

    let (status, body) = send(&app, Method::GET, &format!("/books/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    let book = &body["data"]["book"];
    assert_eq!(book["year"], json!("2010"));
    assert_eq!(book["author"], json!(42));
    assert_eq!(book["summary"], json!(["x", 1]));
    assert_eq!(book["publisher"], json!(true));

    let (_, body) = send(&app, Method::GET, "/books", None).await;
    assert_eq!(body["data"]["books"][0]["publisher"], json!(true));
}

#[tokio::test]
async fn test_get_unknown_book() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/books/xxxxx", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], "fail");
    assert_eq!(body["message"], "Buku tidak ditemukan");
}

#[tokio::test]
async fn test_list_books_projection_and_filters() {
    let app = app();
    let a = add(
        &app,
        json!({ "name": "A", "publisher": "P1", "pageCount": 100, "readPage": 100 }),
    )
    .await;
    let b = add(
        &app,
        json!({ "name": "Harry Potter", "publisher": "P2", "pageCount": 100, "readPage": 50, "reading": true }),
    )
    .await;

    let (status, body) = send(&app, Method::GET, "/books", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["data"]["books"],
        json!([
            { "id": a, "name": "A", "publisher": "P1" },
            { "id": b, "name": "Harry Potter", "publisher": "P2" }
        ])
    );

    let (_, body) = send(&app, Method::GET, "/books?finished=1", None).await;
    assert_eq!(body["data"]["books"], json!([{ "id": a, "name": "A", "publisher": "P1" }]));

    let (_, body) = send(&app, Method::GET, "/books?name=HARRY", None).await;
    assert_eq!(body["data"]["books"][0]["id"], b.as_str());

    let (_, body) = send(&app, Method::GET, "/books?reading=0&finished=0", None).await;
    assert_eq!(body["data"]["books"], json!([]));

    let (status, body) = send(&app, Method::GET, "/books?reading=maybe", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["books"].as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn test_list_books_repeated_query_keys() {
    let app = app();
    add(&app, json!({ "name": "Alpha", "reading": false })).await;
    let b = add(&app, json!({ "name": "Beta", "reading": true })).await;

    let (status, body) = send(&app, Method::GET, "/books?reading=0&reading=1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");
    assert_eq!(body["data"]["books"].as_array().map(Vec::len), Some(1));
    assert_eq!(body["data"]["books"][0]["id"], b.as_str());

    let (status, body) = send(&app, Method::GET, "/books?name=alpha&name=bet", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["books"][0]["name"], "Beta");
}

#[tokio::test]
async fn test_update_book() {
    let app = app();
    let id = add(&app, json!({ "name": "A", "pageCount": 100, "readPage": 10, "reading": true })).await;

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/books/{}", id),
        Some(json!({ "name": "A revised", "publisher": "P", "pageCount": 200, "readPage": 200 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");
    assert_eq!(body["message"], "Buku berhasil diperbarui");

    let (_, body) = send(&app, Method::GET, &format!("/books/{}", id), None).await;
    let book = &body["data"]["book"];
    assert_eq!(book["name"], "A revised");
    assert_eq!(book["publisher"], "P");
    assert_eq!(book["finished"], true);
    assert_eq!(book["reading"], false);
}

#[tokio::test]
async fn test_update_book_coerces_reading() {
    let app = app();
    let id = add(&app, json!({ "name": "A" })).await;

    for (sent, stored) in [
        (json!(1), true),
        (json!("yes"), true),
        (json!(0), false),
        (json!(""), false),
        (Value::Null, false),
    ] {
        let (status, _) = send(
            &app,
            Method::PUT,
            &format!("/books/{}", id),
            Some(json!({ "name": "A", "reading": sent })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (_, body) = send(&app, Method::GET, &format!("/books/{}", id), None).await;
        assert_eq!(body["data"]["book"]["reading"], stored, "reading {sent}");
    }
}

#[tokio::test]
async fn test_update_book_failures() {
    let app = app();
    let id = add(&app, json!({ "name": "A", "pageCount": 100, "readPage": 10 })).await;

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/books/{}", id),
        Some(json!({ "pageCount": 100, "readPage": 10 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Gagal memperbarui buku. Mohon isi nama buku");

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/books/{}", id),
        Some(json!({ "name": "A", "pageCount": 10, "readPage": 100 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        "Gagal memperbarui buku. readPage tidak boleh lebih besar dari pageCount"
    );

    // Validation is reported before the unknown id
    let (status, _) = send(&app, Method::PUT, "/books/xxxxx", Some(json!({ "name": " " }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(&app, Method::PUT, "/books/xxxxx", Some(json!({ "name": "A" }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Gagal memperbarui buku. Id tidak ditemukan");
}

#[tokio::test]
async fn test_delete_book() {
    let app = app();
    let id = add(&app, json!({ "name": "A" })).await;

    let (status, body) = send(&app, Method::DELETE, &format!("/books/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");

    let (status, body) = send(&app, Method::DELETE, &format!("/books/{}", id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Catatan gagal dihapus. Id tidak ditemukan");

    let (status, _) = send(&app, Method::GET, &format!("/books/{}", id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_english_messages() {
    let app = app_with_locale(Locale::En);
    let (status, body) = send(&app, Method::POST, "/books", Some(json!({ "name": "" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Failed to add book. Please provide the book name");

    let (_, body) = send(&app, Method::GET, "/books/xxxxx", None).await;
    assert_eq!(body["message"], "Book not found");
}

#[tokio::test]
async fn test_openapi_document() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/api-docs/openapi.json", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/books"].is_object());
    assert!(body["paths"]["/books/{bookId}"].is_object());
}
