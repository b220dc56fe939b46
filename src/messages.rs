//! User-facing response messages.
//!
//! The Indonesian table is the wire contract existing clients were written
//! against and must stay byte-for-byte stable.

use serde::Deserialize;

use crate::models::book::BookValidationError;

/// Message language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Id,
    En,
}

/// Catalog write a message refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Update,
    Remove,
}

impl Locale {
    /// Message sent back when an operation succeeds
    pub fn success(self, op: Operation) -> &'static str {
        match (self, op) {
            (Locale::Id, Operation::Add) => "Buku berhasil ditambahkan",
            (Locale::Id, Operation::Update) => "Buku berhasil diperbarui",
            (Locale::Id, Operation::Remove) => "Catatan berhasil dihapus",
            (Locale::En, Operation::Add) => "Book added successfully",
            (Locale::En, Operation::Update) => "Book updated successfully",
            (Locale::En, Operation::Remove) => "Book deleted successfully",
        }
    }

    /// Message for a payload rejected by validation
    pub fn validation(self, op: Operation, err: BookValidationError) -> &'static str {
        let update = op == Operation::Update;
        match (self, update, err) {
            (Locale::Id, false, BookValidationError::MissingName) => {
                "Gagal menambahkan buku. Mohon isi nama buku"
            }
            (Locale::Id, false, BookValidationError::ReadPageExceedsPageCount) => {
                "Gagal menambahkan buku. readPage tidak boleh lebih besar dari pageCount"
            }
            (Locale::Id, true, BookValidationError::MissingName) => {
                "Gagal memperbarui buku. Mohon isi nama buku"
            }
            (Locale::Id, true, BookValidationError::ReadPageExceedsPageCount) => {
                "Gagal memperbarui buku. readPage tidak boleh lebih besar dari pageCount"
            }
            (Locale::En, false, BookValidationError::MissingName) => {
                "Failed to add book. Please provide the book name"
            }
            (Locale::En, false, BookValidationError::ReadPageExceedsPageCount) => {
                "Failed to add book. readPage must not be greater than pageCount"
            }
            (Locale::En, true, BookValidationError::MissingName) => {
                "Failed to update book. Please provide the book name"
            }
            (Locale::En, true, BookValidationError::ReadPageExceedsPageCount) => {
                "Failed to update book. readPage must not be greater than pageCount"
            }
        }
    }

    /// Message for an id that does not exist in the catalog; `None` is a
    /// plain lookup
    pub fn not_found(self, op: Option<Operation>) -> &'static str {
        match (self, op) {
            (Locale::Id, Some(Operation::Update)) => "Gagal memperbarui buku. Id tidak ditemukan",
            (Locale::Id, Some(Operation::Remove)) => "Catatan gagal dihapus. Id tidak ditemukan",
            (Locale::Id, _) => "Buku tidak ditemukan",
            (Locale::En, Some(Operation::Update)) => "Failed to update book. Id not found",
            (Locale::En, Some(Operation::Remove)) => "Failed to delete book. Id not found",
            (Locale::En, _) => "Book not found",
        }
    }

    /// Message for a request body or path that could not be parsed
    pub fn malformed_request(self) -> &'static str {
        match self {
            Locale::Id => "Permintaan tidak valid",
            Locale::En => "Malformed request",
        }
    }
}
