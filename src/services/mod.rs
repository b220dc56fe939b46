//! Business logic services

pub mod books;

use crate::{config::CatalogConfig, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub books: books::BooksService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, catalog_config: &CatalogConfig) -> Self {
        Self {
            books: books::BooksService::new(repository, catalog_config.locale),
        }
    }
}
