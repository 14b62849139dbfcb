//! API response envelope and domain-error mapping

use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde::Serialize;

use shortly_core::error::DomainError;

#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
    pub timestamp: String,
}

#[derive(Serialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            error: None,
            timestamp: Utc::now().to_rfc3339(),
        }
    }

    pub fn success_with_message(data: T, message: &str) -> Self {
        Self {
            message: Some(message.to_string()),
            ..Self::success(data)
        }
    }

    pub fn error(code: &str, message: &str) -> Self {
        Self {
            success: false,
            data: None,
            message: None,
            error: Some(ApiError {
                code: code.to_string(),
                message: message.to_string(),
            }),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

/// Map a domain error onto an HTTP status and error envelope.
///
/// Credential failures stay generic ("Invalid name or password") so the
/// response does not distinguish wrong-password from anything else; storage
/// failures never leak driver detail to clients.
pub fn error_response(err: &DomainError) -> (StatusCode, Json<ApiResponse<()>>) {
    let (status, code, message) = match err {
        DomainError::Validation(msg) => {
            (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
        }
        DomainError::InvalidCredentials => (
            StatusCode::BAD_REQUEST,
            "INVALID_CREDENTIALS",
            "Invalid name or password".to_string(),
        ),
        DomainError::NameTaken(_) | DomainError::SlugTaken(_) => {
            (StatusCode::CONFLICT, "ALREADY_EXISTS", err.to_string())
        }
        DomainError::Unauthorized => {
            (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", "Unauthorized".to_string())
        }
        DomainError::Unavailable(_) => (
            StatusCode::SERVICE_UNAVAILABLE,
            "UNAVAILABLE",
            "Service temporarily unavailable".to_string(),
        ),
        DomainError::Database(_) | DomainError::PasswordHash(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "INTERNAL_ERROR",
            "Internal server error".to_string(),
        ),
    };

    (status, Json(ApiResponse::error(code, &message)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: DomainError) -> StatusCode {
        error_response(&err).0
    }

    #[test]
    fn test_validation_maps_to_400() {
        assert_eq!(status_of(DomainError::Validation("bad".into())), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_credential_failure_is_generic_400() {
        let (status, Json(body)) = error_response(&DomainError::InvalidCredentials);
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error.unwrap().message, "Invalid name or password");
    }

    #[test]
    fn test_conflicts_map_to_409() {
        assert_eq!(status_of(DomainError::SlugTaken("abc".into())), StatusCode::CONFLICT);
        assert_eq!(status_of(DomainError::NameTaken("yash".into())), StatusCode::CONFLICT);
    }

    #[test]
    fn test_unauthorized_maps_to_401() {
        assert_eq!(status_of(DomainError::Unauthorized), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_storage_outage_maps_to_503_without_detail() {
        let (status, Json(body)) = error_response(&DomainError::Unavailable("pool timed out".into()));
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert!(!body.error.unwrap().message.contains("pool"));
    }

    #[test]
    fn test_database_error_maps_to_500() {
        assert_eq!(
            status_of(DomainError::Database("boom".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
