//! HTTP adapter mapping for domain failures.
//!
//! Purpose: keep [`ApiError`] transport-agnostic while giving every failure
//! path a client-visible JSON body and a status line derived from the
//! error. No business logic lives here.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use tracing::{debug, error};

use crate::domain::ApiError;
use crate::middleware::RequestId;

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, ApiError>;

fn status_for(api_error: &ApiError) -> StatusCode {
    let status = api_error.status();
    if (100..=599).contains(&status) {
        StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        status_for(self)
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            error!(
                status = status.as_u16(),
                message = self.message(),
                request_id = ?RequestId::current(),
                "request failed"
            );
        } else {
            debug!(
                status = status.as_u16(),
                message = self.message(),
                request_id = ?RequestId::current(),
                "request rejected"
            );
        }
        HttpResponse::build(status).json(self)
    }
}
