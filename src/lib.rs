//! Bookshelf
//!
//! A small REST JSON server that keeps a personal catalog of books in
//! memory: add, list with filters, fetch, update and delete.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod messages;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

use repository::Repository;
use services::Services;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub services: Arc<Services>,
}

impl AppState {
    /// Build the state around a fresh, empty catalog
    pub fn new(config: &AppConfig) -> Self {
        let repository = Repository::new(config.catalog.id_length);
        Self {
            services: Arc::new(Services::new(repository, &config.catalog)),
        }
    }
}
