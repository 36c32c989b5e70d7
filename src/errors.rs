use actix_web::HttpResponse;
use thiserror::Error;

use crate::domain::errors::DomainError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    UpstreamUnavailable(String),

    #[error("{0}")]
    UpstreamTimeout(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        let msg = e.to_string();
        match e {
            DomainError::StoreUnavailable { .. } => AppError::UpstreamUnavailable(msg),
            DomainError::StoreTimeout { .. } => AppError::UpstreamTimeout(msg),
            DomainError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::UpstreamUnavailable(_) => HttpResponse::BadGateway().json(serde_json::json!({
                "error": "upstream store unavailable"
            })),
            AppError::UpstreamTimeout(_) => {
                HttpResponse::ServiceUnavailable().json(serde_json::json!({
                    "error": "upstream store unavailable"
                }))
            }
            AppError::Internal(_) => HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Internal server error"
            })),
        }
    }
}

#[cfg(test)]
mod tests {
    use actix_web::ResponseError;

    use super::*;

    #[test]
    fn upstream_unavailable_returns_502() {
        let resp = AppError::UpstreamUnavailable("boom".to_string()).error_response();
        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn upstream_timeout_returns_503() {
        let resp = AppError::UpstreamTimeout("slow".to_string()).error_response();
        assert_eq!(resp.status(), actix_web::http::StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn internal_error_returns_500() {
        let err = AppError::Internal("something went wrong".to_string());
        assert_eq!(
            err.error_response().status(),
            actix_web::http::StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn store_unavailable_maps_to_upstream_unavailable() {
        let app_err: AppError = DomainError::StoreUnavailable {
            store: "document",
            reason: "connection refused".to_string(),
        }
        .into();
        assert!(matches!(app_err, AppError::UpstreamUnavailable(_)));
        assert_eq!(
            app_err.to_string(),
            "document store unavailable: connection refused"
        );
    }

    #[test]
    fn store_timeout_maps_to_upstream_timeout() {
        let app_err: AppError = DomainError::StoreTimeout { store: "document" }.into();
        assert!(matches!(app_err, AppError::UpstreamTimeout(_)));
    }

    #[test]
    fn domain_internal_maps_to_app_internal() {
        let app_err: AppError = DomainError::Internal("oops".to_string()).into();
        assert!(matches!(app_err, AppError::Internal(_)));
    }
}
