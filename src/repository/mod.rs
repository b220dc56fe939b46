//! Repository layer: the in-memory book store

pub mod books;

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::book::{Book, DEFAULT_ID_LENGTH, MIN_ID_LENGTH};

/// Main repository struct holding the book collection.
///
/// Cloning hands out another handle to the same collection. Every write
/// holds the lock for its whole check-then-mutate step.
#[derive(Clone)]
pub struct Repository {
    books: Arc<RwLock<Vec<Book>>>,
    id_length: usize,
}

impl Repository {
    /// Create an empty repository generating ids of `id_length` characters,
    /// raised to `MIN_ID_LENGTH` when shorter
    pub fn new(id_length: usize) -> Self {
        if id_length < MIN_ID_LENGTH {
            tracing::warn!(
                "Book id length {} is too short, using {}",
                id_length,
                MIN_ID_LENGTH
            );
        }
        Self {
            books: Arc::new(RwLock::new(Vec::new())),
            id_length: id_length.max(MIN_ID_LENGTH),
        }
    }
}

impl Default for Repository {
    fn default() -> Self {
        Self::new(DEFAULT_ID_LENGTH)
    }
}
