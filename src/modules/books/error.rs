use bookshelf_http::error::AppError;
use thiserror::Error;

/// Failure raised by the upcoming-books provider
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("upcoming books provider failed (status {status:?}): {cause}")]
pub struct GatewayError {
    /// Upstream HTTP status, `None` when no response was received
    pub status: Option<u16>,
    pub cause: String,
}

/// Domain failures of the catalog
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("{field} {reason}")]
    Validation { field: &'static str, reason: String },

    #[error("Book with name {name} already exists")]
    Conflict { name: String },

    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

impl CatalogError {
    pub(crate) fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field,
            reason: reason.into(),
        }
    }
}

pub type CatalogResult<T> = Result<T, CatalogError>;

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        let message = err.to_string();
        match err {
            CatalogError::Validation { field, .. } => AppError::validation(field, message),
            CatalogError::Conflict { .. } => AppError::conflict(message),
            CatalogError::Gateway(GatewayError { status, .. }) => {
                AppError::bad_gateway(message, status)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn conflict_message_names_the_book() {
        let err = CatalogError::Conflict {
            name: "Absalom, Absalom".to_string(),
        };
        assert_eq!(err.to_string(), "Book with name Absalom, Absalom already exists");
    }

    #[test]
    fn maps_to_transport_errors() {
        let validation: AppError = CatalogError::validation("genre", "must not be empty").into();
        assert_eq!(validation.status(), StatusCode::BAD_REQUEST);
        match validation {
            AppError::Validation { field, message, .. } => {
                assert_eq!(field, "genre");
                assert_eq!(message, "genre must not be empty");
            }
            other => panic!("unexpected {other:?}"),
        }

        let conflict: AppError = CatalogError::Conflict {
            name: "Dune".to_string(),
        }
        .into();
        assert_eq!(conflict.status(), StatusCode::CONFLICT);

        let gateway: AppError = CatalogError::from(GatewayError {
            status: Some(500),
            cause: "boom".to_string(),
        })
        .into();
        assert_eq!(gateway.status(), StatusCode::BAD_GATEWAY);
    }
}
