pub mod author;
pub mod books;

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::json;

use crate::domain::DomainError;
use crate::infrastructure::AppState;

impl IntoResponse for DomainError {
    fn into_response(self) -> Response {
        let status = match &self {
            DomainError::NotFound => StatusCode::NOT_FOUND,
            DomainError::ConstraintViolation(_) => StatusCode::CONFLICT,
            DomainError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        tracing::error!("Request failed: {}", self);
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

pub fn api_router_with_state(state: AppState) -> Router {
    Router::new()
        .route("/authors", get(author::list_authors))
        .route("/books", get(books::list_books))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_error_status_codes() {
        assert_eq!(
            DomainError::NotFound.into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            DomainError::ConstraintViolation("fk".into())
                .into_response()
                .status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            DomainError::Database("down".into()).into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
