use axum::extract::rejection::FormRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::chart::ChartError;
use service::errors::ServiceError;
use tracing::{error, warn};

/// Error response rendered as `{"error": <title>, "message": <detail>}`.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub title: &'static str,
    pub detail: Option<String>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, title: &'static str, detail: Option<String>) -> Self {
        Self { status, title, detail }
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({"error": self.title, "message": self.detail});
        (self.status, Json(body)).into_response()
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        let code = e.code();
        match e {
            ServiceError::Validation(_) => {
                warn!(code, err = %e, "rejected request");
                Self::new(StatusCode::BAD_REQUEST, "Validation Error", Some(e.to_string()))
            }
            ServiceError::Render(ChartError::EmptySeries(_)) => {
                warn!(code, err = %e, "resource not found");
                Self::new(StatusCode::NOT_FOUND, "Not Found", Some(e.to_string()))
            }
            ServiceError::Render(_) => {
                error!(code, err = %e, "chart rendering failed");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Render Failed", Some(e.to_string()))
            }
            ServiceError::Db(_) => {
                error!(code, err = %e, "storage failure");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Storage Error", Some(e.to_string()))
            }
        }
    }
}

impl From<FormRejection> for JsonApiError {
    fn from(e: FormRejection) -> Self {
        warn!(status = %e.status(), err = %e.body_text(), "rejected form body");
        Self::new(StatusCode::BAD_REQUEST, "Validation Error", Some(e.body_text()))
    }
}

impl From<minijinja::Error> for JsonApiError {
    fn from(e: minijinja::Error) -> Self {
        error!(err = %e, "template rendering failed");
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Template Error", Some(e.to_string()))
    }
}
