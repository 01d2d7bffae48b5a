//! HTTP 请求处理器

pub mod health;
pub mod summarize;

pub use health::handle_health;
pub use summarize::{handle_method_not_allowed, handle_summarize};

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

/// 对外错误契约：固定形状的 `{ "error": "<message>" }`
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

fn error_response(status: StatusCode, message: impl Into<String>) -> axum::response::Response {
    let error = ErrorResponse {
        error: message.into(),
    };
    (status, Json(error)).into_response()
}
