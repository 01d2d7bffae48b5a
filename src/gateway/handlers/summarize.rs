//! 摘要请求处理器
//!
//! 线性流水线：校验 → 拼接提示词 → 调用 Gemini → 翻译响应。
//! 每条路径都恰好终止于一个响应，上游细节永远不回传给调用方。

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::gateway::{handlers::error_response, state::AppState};
use crate::prompt::{self, ProfileInput};

/// 成功响应体
#[derive(Serialize)]
struct SummaryResponse {
    summary: String,
}

/// POST /api/summarize 处理器
pub async fn handle_summarize(State(state): State<AppState>, body: Bytes) -> Response {
    // 凭证缺失：对外只报配置错误，真实原因只进服务端日志
    let Some(provider) = state.provider() else {
        tracing::error!("GEMINI_API_KEY is not set; cannot call the Gemini API");
        return error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Server configuration error.",
        );
    };

    // 解码资料。字段缺省为空串，解码失败等同于必填字段缺失
    let profile: ProfileInput = match serde_json::from_slice(&body) {
        Ok(profile) => profile,
        Err(err) => {
            tracing::debug!("Failed to decode profile payload: {}", err);
            return error_response(StatusCode::BAD_REQUEST, "Missing required profile data.");
        }
    };

    if !profile.has_required_fields() {
        return error_response(StatusCode::BAD_REQUEST, "Missing required profile data.");
    }

    let summary_prompt = prompt::build_prompt(&profile);

    tracing::info!(
        provider = provider.name(),
        model = provider.model(),
        content_len = summary_prompt.content.len(),
        "request"
    );

    match provider.generate(&summary_prompt).await {
        Ok(summary) => {
            tracing::info!(summary_len = summary.len(), "response");
            (StatusCode::OK, Json(SummaryResponse { summary })).into_response()
        }
        Err(err) => {
            tracing::error!("Failed to generate summary: {:#}", err);
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to generate summary.",
            )
        }
    }
}

/// /api/summarize 的非 POST fallback
///
/// 契约要求 405 带 `Allow: POST` 头，错误信息里注明实际使用的方法
pub async fn handle_method_not_allowed(method: Method) -> Response {
    let mut response = error_response(
        StatusCode::METHOD_NOT_ALLOWED,
        format!("Method {} Not Allowed", method),
    );
    response
        .headers_mut()
        .insert(header::ALLOW, HeaderValue::from_static("POST"));
    response
}
