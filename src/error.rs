// region:    --- Imports
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;

// endregion: --- Imports

// region:    --- Store Error
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

// endregion: --- Store Error

// region:    --- Registry Error
/// Operation that looked a record up and did not find it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Read,
    Update,
    Delete,
}

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("{}", not_found_message(.id, .action))]
    NotFound { id: String, action: Action },

    #[error(transparent)]
    Store(#[from] StoreError),
}

fn not_found_message(id: &str, action: &Action) -> String {
    match action {
        Action::Read => format!("Furniture with id={} not found", id),
        Action::Update => format!(
            "Cannot update furniture with id={}. Furniture not found.",
            id
        ),
        Action::Delete => format!(
            "Cannot delete furniture with id={}. Furniture not found.",
            id
        ),
    }
}

impl RegistryError {
    pub fn not_found(id: impl Into<String>, action: Action) -> Self {
        Self::NotFound {
            id: id.into(),
            action,
        }
    }

    /// Reads answer 404 while update and delete answer 400 for a missing record.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound {
                action: Action::Read,
                ..
            } => StatusCode::NOT_FOUND,
            Self::NotFound { .. } => StatusCode::BAD_REQUEST,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for RegistryError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if let Self::Store(e) = &self {
            error!("{:<12} --> store failure: {}", "Error", e);
        }
        (status, self.to_string()).into_response()
    }
}

// endregion: --- Registry Error

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_status_depends_on_action() {
        assert_eq!(
            RegistryError::not_found("x", Action::Read).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            RegistryError::not_found("x", Action::Update).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            RegistryError::not_found("x", Action::Delete).status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn not_found_message_names_the_id() {
        for action in [Action::Read, Action::Update, Action::Delete] {
            let message = RegistryError::not_found("unknown-id", action).to_string();
            assert!(message.contains("id=unknown-id"), "{message}");
        }
    }

    #[test]
    fn store_errors_map_to_500() {
        let err = RegistryError::from(StoreError::from(sqlx::Error::RowNotFound));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.to_string().starts_with("database error"));
    }
}
