//! Book catalog endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use axum_extra::extract::WithRejection;
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::{AppError, AppResult},
    messages::Operation,
    models::book::{Book, BookFilter, BookPayload, BookQuery, BookShort},
};

use super::SUCCESS;

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatedBook {
    pub book_id: String,
}

#[derive(Serialize, ToSchema)]
pub struct BookList {
    pub books: Vec<BookShort>,
}

#[derive(Serialize, ToSchema)]
pub struct BookDetails {
    pub book: Book,
}

/// Response to a successful `POST /books`
#[derive(Serialize, ToSchema)]
pub struct AddBookResponse {
    pub status: String,
    pub message: String,
    pub data: CreatedBook,
}

#[derive(Serialize, ToSchema)]
pub struct BookListResponse {
    pub status: String,
    pub data: BookList,
}

#[derive(Serialize, ToSchema)]
pub struct BookResponse {
    pub status: String,
    pub data: BookDetails,
}

/// Response to a successful update or delete
#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    pub status: String,
    pub message: String,
}

impl MessageResponse {
    fn success(message: &str) -> Self {
        Self {
            status: SUCCESS.to_string(),
            message: message.to_string(),
        }
    }
}

/// Add a book to the catalog
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = BookPayload,
    responses(
        (status = 201, description = "Book added", body = AddBookResponse),
        (status = 400, description = "Missing name or readPage greater than pageCount", body = crate::error::ErrorResponse)
    )
)]
pub async fn add_book(
    State(state): State<crate::AppState>,
    WithRejection(Json(payload), _): WithRejection<Json<BookPayload>, AppError>,
) -> AppResult<(StatusCode, Json<AddBookResponse>)> {
    let books = &state.services.books;
    let book_id = books.add(payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(AddBookResponse {
            status: SUCCESS.to_string(),
            message: books.locale().success(Operation::Add).to_string(),
            data: CreatedBook { book_id },
        }),
    ))
}

/// List books, optionally filtered
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    params(BookQuery),
    responses(
        (status = 200, description = "Matching books", body = BookListResponse)
    )
)]
pub async fn list_books(
    State(state): State<crate::AppState>,
    pairs: Option<Query<Vec<(String, String)>>>,
) -> Json<BookListResponse> {
    let query = BookQuery::from_pairs(pairs.map(|Query(pairs)| pairs).unwrap_or_default());
    let filter = BookFilter::from(query);
    let books = state.services.books.list_filtered(&filter).await;
    Json(BookListResponse {
        status: SUCCESS.to_string(),
        data: BookList { books },
    })
}

/// Get a book by id
#[utoipa::path(
    get,
    path = "/books/{bookId}",
    tag = "books",
    params(
        ("bookId" = String, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book details", body = BookResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    WithRejection(Path(book_id), _): WithRejection<Path<String>, AppError>,
) -> AppResult<Json<BookResponse>> {
    let book = state.services.books.get_by_id(&book_id).await?;
    Ok(Json(BookResponse {
        status: SUCCESS.to_string(),
        data: BookDetails { book },
    }))
}

/// Replace a book
#[utoipa::path(
    put,
    path = "/books/{bookId}",
    tag = "books",
    params(
        ("bookId" = String, Path, description = "Book ID")
    ),
    request_body = BookPayload,
    responses(
        (status = 200, description = "Book updated", body = MessageResponse),
        (status = 400, description = "Missing name or readPage greater than pageCount", body = crate::error::ErrorResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_book(
    State(state): State<crate::AppState>,
    WithRejection(Path(book_id), _): WithRejection<Path<String>, AppError>,
    WithRejection(Json(payload), _): WithRejection<Json<BookPayload>, AppError>,
) -> AppResult<Json<MessageResponse>> {
    let books = &state.services.books;
    books.update_by_id(&book_id, payload).await?;
    Ok(Json(MessageResponse::success(
        books.locale().success(Operation::Update),
    )))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/books/{bookId}",
    tag = "books",
    params(
        ("bookId" = String, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book deleted", body = MessageResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    WithRejection(Path(book_id), _): WithRejection<Path<String>, AppError>,
) -> AppResult<Json<MessageResponse>> {
    let books = &state.services.books;
    books.remove_by_id(&book_id).await?;
    Ok(Json(MessageResponse::success(
        books.locale().success(Operation::Remove),
    )))
}
