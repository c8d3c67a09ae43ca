use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::{core::error::DispatchError, document::validator::ValidationError, prelude::*};

/// Request handling failure, rendered as a JSON error response.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}

impl ApiError {
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Dispatch(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    pub const fn code(&self) -> &'static str {
        match self {
            Self::Validation(error) => error.code(),
            Self::Dispatch(error) => error.code(),
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        warn!(code = self.code(), error = %self, "failed to produce the plan");
        let body = ErrorBody { error: self.code(), message: self.to_string() };
        (self.status_code(), Json(body)).into_response()
    }
}
