use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use reel_api::http::ApiErrorResult;
use reel_api::http::FieldError;

#[derive(Clone, Debug)]
pub struct ReelError {
    errors: Option<ApiErrorResult>,
    status_code: StatusCode,
}

impl ReelError {
    pub fn not_found() -> Self {
        Self {
            errors: None,
            status_code: StatusCode::NOT_FOUND,
        }
    }

    pub fn validation(errors: Vec<FieldError>) -> Self {
        Self {
            errors: Some(errors.into()),
            status_code: StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ReelError {
    fn into_response(self) -> axum::response::Response {
        match self.errors {
            Some(errors) => (self.status_code, Json(errors)).into_response(),
            None => self.status_code.into_response(),
        }
    }
}
