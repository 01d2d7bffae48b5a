//! Gateway 应用层
//!
//! HTTP 服务器和请求处理

mod handlers;
mod middleware;
mod state;

pub use state::AppState;

use anyhow::Result;
use axum::{
    http::StatusCode,
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::time::Duration;
use tokio::signal;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::Config;
use crate::providers;

const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 120;

pub async fn serve(config: Config) -> Result<()> {
    // 凭证只记录有无，不记录值
    let api_key_state = if config.gemini_api_key.is_some() {
        "present"
    } else {
        "missing"
    };
    tracing::info!(api_key = api_key_state, model = %config.gemini_model, "Gemini credential");

    let provider = providers::from_config(&config);
    let state = AppState::new(provider);
    let app = build_router(state);
    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    tracing::info!("Starting server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

pub fn build_router(state: AppState) -> Router {
    // 非 POST 方法走 fallback，按契约返回 405 + Allow 头
    let api_routes = Router::new().route(
        "/api/summarize",
        post(handlers::handle_summarize).fallback(handlers::handle_method_not_allowed),
    );
    let public_routes = Router::new().route("/health", get(handlers::handle_health));

    Router::new()
        .merge(api_routes)
        .merge(public_routes)
        .layer(
            ServiceBuilder::new()
                .layer(axum_middleware::from_fn(middleware::request_logger))
                .layer(TraceLayer::new_for_http())
                .layer(TimeoutLayer::with_status_code(
                    StatusCode::REQUEST_TIMEOUT,
                    Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
                ))
                // 调用方是浏览器前端
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(unix)]
    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    #[cfg(not(unix))]
    tokio::select! {
        _ = ctrl_c => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown...");
}
