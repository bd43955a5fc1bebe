//! Application state containing repositories and shared resources

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::domain::{Author, Book, CrudRepository, Publisher};
use crate::infrastructure::{
    SeaOrmAuthorRepository, SeaOrmBookRepository, SeaOrmPublisherRepository,
};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub author_repo: Arc<dyn CrudRepository<Author>>,
    pub book_repo: Arc<dyn CrudRepository<Book>>,
    pub publisher_repo: Arc<dyn CrudRepository<Publisher>>,
}

impl AppState {
    /// Create a new AppState with all repositories initialized
    pub fn new(db: DatabaseConnection) -> Self {
        let author_repo = Arc::new(SeaOrmAuthorRepository::new(db.clone()));
        let book_repo = Arc::new(SeaOrmBookRepository::new(db.clone()));
        let publisher_repo = Arc::new(SeaOrmPublisherRepository::new(db));

        Self {
            author_repo,
            book_repo,
            publisher_repo,
        }
    }
}
