//! Shared HTTP response types

mod validated_json;

pub use validated_json::ValidatedJson;

use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::DomainError;

/// Uniform response envelope for every JSON endpoint.
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// HTTP status for a domain error, following the error taxonomy:
/// validation is recoverable by resubmitting, conflicts require the
/// caller to re-query, storage errors only surface once the fallback
/// path is exhausted.
pub fn status_for(err: &DomainError) -> StatusCode {
    match err {
        DomainError::Validation(_) => StatusCode::BAD_REQUEST,
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::SeatConflict { .. }
        | DomainError::AlreadyCancelled(_)
        | DomainError::DuplicateTicketId(_) => StatusCode::CONFLICT,
        DomainError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
        DomainError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Render a domain error as the standard failure reply.
pub fn error_reply<T>(err: DomainError) -> (StatusCode, Json<ApiResponse<T>>) {
    (status_for(&err), Json(ApiResponse::error(err.to_string())))
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_serializes_without_empty_fields() {
        let ok = serde_json::to_value(ApiResponse::success(1)).unwrap();
        assert_eq!(ok["success"], true);
        assert_eq!(ok["data"], 1);
        assert!(ok.get("error").is_none());

        let err = serde_json::to_value(ApiResponse::<()>::error("nope")).unwrap();
        assert_eq!(err["success"], false);
        assert_eq!(err["error"], "nope");
        assert!(err.get("data").is_none());
    }

    #[test]
    fn status_mapping_follows_taxonomy() {
        assert_eq!(
            status_for(&DomainError::Validation("invalid age".into())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_for(&DomainError::NotFound {
                entity: "Booking",
                field: "ticket_id",
                value: "X".into()
            }),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_for(&DomainError::AlreadyCancelled("X".into())),
            StatusCode::CONFLICT
        );
        assert_eq!(
            status_for(&DomainError::SeatConflict {
                route: "A to B".into(),
                date: "2030-01-01".into(),
                time: "08:00 AM".into(),
                seat: 1
            }),
            StatusCode::CONFLICT
        );
        assert_eq!(
            status_for(&DomainError::Storage("down".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
