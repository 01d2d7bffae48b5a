//! 健康检查和版本信息处理器

use axum::{extract::State, Json};
use serde::Serialize;
use serde_json::json;

use crate::gateway::state::AppState;

/// Provider 状态信息
#[derive(Serialize)]
struct ProviderStatus {
    name: String,
    model: String,
}

/// 健康检查响应
#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    provider: Option<ProviderStatus>,
}

/// GET /health
pub async fn handle_health(State(state): State<AppState>) -> Json<serde_json::Value> {
    let provider = state.provider().map(|p| ProviderStatus {
        name: p.name().to_string(),
        model: p.model().to_string(),
    });

    Json(json!(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        provider,
    }))
}
