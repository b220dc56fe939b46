//! Book domain methods on Repository

use chrono::Utc;

use super::Repository;
use crate::models::book::{generate_id, Book, BookFilter, BookPayload, BookShort};

impl Repository {
    /// List the projection of every book matching `filter`, in insertion order
    pub async fn books_list(&self, filter: &BookFilter) -> Vec<BookShort> {
        let books = self.books.read().await;
        books
            .iter()
            .filter(|book| filter.matches(book))
            .map(Book::short)
            .collect()
    }

    /// Get book by ID
    pub async fn books_get_by_id(&self, id: &str) -> Option<Book> {
        let books = self.books.read().await;
        books.iter().find(|book| book.id == id).cloned()
    }

    /// Append a new book built from an already validated payload, returning its id
    pub async fn books_insert(&self, payload: BookPayload) -> String {
        let mut books = self.books.write().await;

        let mut id = generate_id(self.id_length);
        while books.iter().any(|book| book.id == id) {
            tracing::warn!("Generated book id {} collides, drawing another", id);
            id = generate_id(self.id_length);
        }

        books.push(Book::new(id.clone(), payload, Utc::now()));
        id
    }

    /// Overwrite a book in place. Returns false when the id is unknown.
    pub async fn books_update(&self, id: &str, payload: BookPayload) -> bool {
        let mut books = self.books.write().await;
        match books.iter_mut().find(|book| book.id == id) {
            Some(book) => {
                book.apply(payload, Utc::now());
                true
            }
            None => false,
        }
    }

    /// Remove a book. Returns false when the id is unknown.
    pub async fn books_delete(&self, id: &str) -> bool {
        let mut books = self.books.write().await;
        match books.iter().position(|book| book.id == id) {
            Some(index) => {
                books.remove(index);
                true
            }
            None => false,
        }
    }

    /// Number of books in the catalog
    pub async fn books_count(&self) -> usize {
        self.books.read().await.len()
    }
}
