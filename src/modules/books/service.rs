use std::sync::Arc;

use super::error::{CatalogError, CatalogResult};
use super::gateway::UpcomingBooks;
use super::models::{Book, CreateBook};
use super::store::BookStore;

/// Catalog operations over a book store and an upcoming-books provider
#[derive(Clone)]
pub struct CatalogService {
    store: Arc<BookStore>,
    upcoming: Arc<dyn UpcomingBooks>,
}

impl CatalogService {
    pub fn new(store: Arc<BookStore>, upcoming: Arc<dyn UpcomingBooks>) -> Self {
        Self { store, upcoming }
    }

    /// Validate `input` and add it to the catalog.
    pub fn create_book(&self, input: CreateBook) -> CatalogResult<Book> {
        let result = input
            .validate()
            .and_then(|candidate| self.store.insert(candidate));

        match &result {
            Ok(book) => tracing::info!(book_id = book.id, name = %book.name, "book created"),
            Err(CatalogError::Validation { field, reason }) => {
                tracing::info!(field = *field, %reason, "book rejected")
            }
            Err(CatalogError::Conflict { name }) => tracing::info!(name = %name, "book conflict"),
            Err(CatalogError::Gateway(_)) => {}
        }

        result
    }

    pub fn list_books(&self) -> Vec<Book> {
        self.store.list_all()
    }

    /// Number of books in the catalog
    pub fn book_count(&self) -> usize {
        self.store.len()
    }

    /// Titles reported by the upcoming-books provider, unmodified.
    pub async fn get_upcoming(&self) -> CatalogResult<Vec<String>> {
        match self.upcoming.fetch_upcoming().await {
            Ok(titles) => Ok(titles),
            Err(err) => {
                tracing::warn!(status = ?err.status, cause = %err.cause, "upcoming books unavailable");
                Err(err.into())
            }
        }
    }
}
