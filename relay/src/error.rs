use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use text_provider::ProviderError;
use thiserror::Error;

/// Body of every non-2xx answer from the relay.
#[derive(serde::Serialize, Debug, Clone)]
pub struct ErrorBody {
    pub detail: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{}", .0.body_text())]
    Validation(#[from] JsonRejection),

    #[error("The 'message' field cannot be empty.")]
    EmptyMessage,

    #[error(transparent)]
    Provider(#[from] ProviderError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            // Body buffering failures (e.g. over the size limit) keep their own status.
            AppError::Validation(rejection @ JsonRejection::BytesRejection(_)) => {
                rejection.status()
            }
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::EmptyMessage => StatusCode::BAD_REQUEST,
            AppError::Provider(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            detail: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
