use axum::{Json, extract::State};

use crate::domain::{Author, DomainError};
use crate::infrastructure::AppState;

pub async fn list_authors(State(state): State<AppState>) -> Result<Json<Vec<Author>>, DomainError> {
    let authors = state.author_repo.find_all().await?;
    Ok(Json(authors))
}
