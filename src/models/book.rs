//! Book (catalog entry) model and related types.
//!
//! Wire names are camelCase. `finished` is always derived from the
//! `pageCount`/`readPage` pair and never read from a client payload.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use thiserror::Error;
use utoipa::{IntoParams, ToSchema};

/// Default length of generated book ids
pub const DEFAULT_ID_LENGTH: usize = 16;

/// Shortest id length accepted; below this the id space runs out quickly
pub const MIN_ID_LENGTH: usize = 8;

/// URL-safe alphabet used for book ids
const ID_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789_-";

/// Generate a random, URL-safe book id of the given length
pub fn generate_id(len: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
        .collect()
}

/// Full book record (store + API)
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: String,
    pub name: String,
    #[schema(value_type = Object)]
    pub year: Option<Value>,
    #[schema(value_type = Object)]
    pub author: Option<Value>,
    #[schema(value_type = Object)]
    pub summary: Option<Value>,
    #[schema(value_type = Object)]
    pub publisher: Option<Value>,
    pub page_count: Option<u32>,
    pub read_page: Option<u32>,
    /// True iff `readPage == pageCount` at the last write
    pub finished: bool,
    pub reading: bool,
    pub inserted_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Reduced view of a book used by listings
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct BookShort {
    pub id: String,
    pub name: String,
    #[schema(value_type = Object)]
    pub publisher: Option<Value>,
}

/// Create / update request body.
///
/// Every field is optional at the parsing level so that a missing name is
/// reported as a validation failure rather than a malformed body.
/// `year`, `author`, `summary` and `publisher` are kept exactly as sent.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookPayload {
    pub name: Option<String>,
    #[schema(value_type = Object)]
    pub year: Option<Value>,
    #[schema(value_type = Object)]
    pub author: Option<Value>,
    #[schema(value_type = Object)]
    pub summary: Option<Value>,
    #[schema(value_type = Object)]
    pub publisher: Option<Value>,
    pub page_count: Option<u32>,
    pub read_page: Option<u32>,
    /// Any JSON value; `null`, `false`, `0` and `""` count as false
    #[serde(default, deserialize_with = "truthy")]
    pub reading: Option<bool>,
}

fn truthy<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(Some(match raw {
        None | Some(Value::Null) => false,
        Some(Value::Bool(flag)) => flag,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }))
}

/// Reasons a payload is refused before it reaches the store
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookValidationError {
    #[error("name required")]
    MissingName,

    #[error("readPage exceeds pageCount")]
    ReadPageExceedsPageCount,
}

impl BookPayload {
    /// Check the payload, first failure wins.
    pub fn validate(&self) -> Result<(), BookValidationError> {
        let has_name = self
            .name
            .as_deref()
            .is_some_and(|name| !name.trim().is_empty());
        if !has_name {
            return Err(BookValidationError::MissingName);
        }

        if let (Some(read_page), Some(page_count)) = (self.read_page, self.page_count) {
            if read_page > page_count {
                return Err(BookValidationError::ReadPageExceedsPageCount);
            }
        }

        Ok(())
    }

    /// Whether the book counts as finished for this page pair
    pub fn finished(&self) -> bool {
        self.page_count == self.read_page
    }
}

impl Book {
    /// Build a fresh record from a validated payload
    pub fn new(id: String, payload: BookPayload, now: DateTime<Utc>) -> Self {
        let finished = payload.finished();
        Self {
            id,
            name: payload.name.unwrap_or_default(),
            year: payload.year,
            author: payload.author,
            summary: payload.summary,
            publisher: payload.publisher,
            page_count: payload.page_count,
            read_page: payload.read_page,
            finished,
            reading: payload.reading.unwrap_or(false),
            inserted_at: now,
            updated_at: now,
        }
    }

    /// Overwrite every field except `id` and `inserted_at`
    pub fn apply(&mut self, payload: BookPayload, now: DateTime<Utc>) {
        self.finished = payload.finished();
        self.name = payload.name.unwrap_or_default();
        self.year = payload.year;
        self.author = payload.author;
        self.summary = payload.summary;
        self.publisher = payload.publisher;
        self.page_count = payload.page_count;
        self.read_page = payload.read_page;
        self.reading = payload.reading.unwrap_or(false);
        self.updated_at = now;
    }

    pub fn short(&self) -> BookShort {
        BookShort {
            id: self.id.clone(),
            name: self.name.clone(),
            publisher: self.publisher.clone(),
        }
    }
}

/// Listing filters; every present field must match
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookFilter {
    /// Case-insensitive substring of the book name
    pub name: Option<String>,
    pub reading: Option<bool>,
    pub finished: Option<bool>,
}

impl BookFilter {
    pub fn matches(&self, book: &Book) -> bool {
        if let Some(reading) = self.reading {
            if book.reading != reading {
                return false;
            }
        }
        if let Some(finished) = self.finished {
            if book.finished != finished {
                return false;
            }
        }
        match &self.name {
            Some(needle) => book.name.to_lowercase().contains(&needle.to_lowercase()),
            None => true,
        }
    }
}

/// Query string of `GET /books`.
///
/// Built from raw key/value pairs so that no query string can fail a
/// listing: unknown keys are dropped and a repeated key keeps its last value.
#[derive(Debug, Clone, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BookQuery {
    /// Case-insensitive substring of the book name
    pub name: Option<String>,
    /// `1`/`true` or `0`/`false`; anything else is ignored
    pub reading: Option<bool>,
    /// `1`/`true` or `0`/`false`; anything else is ignored
    pub finished: Option<bool>,
}

impl BookQuery {
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut query = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "name" => query.name = Some(value),
                "reading" => query.reading = parse_flag(&value),
                "finished" => query.finished = parse_flag(&value),
                _ => {}
            }
        }
        query
    }
}

impl From<BookQuery> for BookFilter {
    fn from(query: BookQuery) -> Self {
        Self {
            name: query.name.filter(|name| !name.is_empty()),
            reading: query.reading,
            finished: query.finished,
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" => Some(true),
        "0" | "false" => Some(false),
        _ => None,
    }
}
