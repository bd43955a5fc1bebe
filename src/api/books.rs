use axum::{Json, extract::State};

use crate::domain::{Book, DomainError};
use crate::infrastructure::AppState;

pub async fn list_books(State(state): State<AppState>) -> Result<Json<Vec<Book>>, DomainError> {
    let books = state.book_repo.find_all().await?;
    tracing::debug!("Listing {} books", books.len());
    Ok(Json(books))
}
