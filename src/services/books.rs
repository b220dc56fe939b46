//! Book catalog service

use crate::{
    error::{AppError, AppResult},
    messages::{Locale, Operation},
    models::book::{Book, BookFilter, BookPayload, BookShort},
    repository::Repository,
};

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
    locale: Locale,
}

impl BooksService {
    pub fn new(repository: Repository, locale: Locale) -> Self {
        Self { repository, locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Validate and store a new book, returning its generated id
    pub async fn add(&self, payload: BookPayload) -> AppResult<String> {
        self.validate(Operation::Add, &payload)?;

        let id = self.repository.books_insert(payload).await;
        tracing::info!("Book {} added", id);
        Ok(id)
    }

    /// List books matching every constraint present in `filter`
    pub async fn list_filtered(&self, filter: &BookFilter) -> Vec<BookShort> {
        let books = self.repository.books_list(filter).await;
        tracing::debug!("Listed {} books with {:?}", books.len(), filter);
        books
    }

    /// Get a full book record by id
    pub async fn get_by_id(&self, id: &str) -> AppResult<Book> {
        self.repository.books_get_by_id(id).await.ok_or_else(|| {
            tracing::debug!("Book {} not found", id);
            AppError::NotFound(self.locale.not_found(None).to_string())
        })
    }

    /// Replace a book. Validation failures take precedence over an unknown id.
    pub async fn update_by_id(&self, id: &str, payload: BookPayload) -> AppResult<()> {
        self.validate(Operation::Update, &payload)?;

        if !self.repository.books_update(id, payload).await {
            tracing::warn!("Update of unknown book {}", id);
            return Err(AppError::NotFound(
                self.locale.not_found(Some(Operation::Update)).to_string(),
            ));
        }
        tracing::info!("Book {} updated", id);
        Ok(())
    }

    /// Delete a book
    pub async fn remove_by_id(&self, id: &str) -> AppResult<()> {
        if !self.repository.books_delete(id).await {
            tracing::warn!("Removal of unknown book {}", id);
            return Err(AppError::NotFound(
                self.locale.not_found(Some(Operation::Remove)).to_string(),
            ));
        }
        tracing::info!("Book {} removed", id);
        Ok(())
    }

    /// Number of books currently in the catalog
    pub async fn count(&self) -> usize {
        self.repository.books_count().await
    }

    fn validate(&self, op: Operation, payload: &BookPayload) -> AppResult<()> {
        payload.validate().map_err(|err| {
            tracing::warn!("Rejected book payload: {}", err);
            AppError::Validation(self.locale.validation(op, err).to_string())
        })
    }
}
