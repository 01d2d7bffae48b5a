//! Gateway 应用状态

use std::sync::Arc;

use crate::providers::Provider;

/// Gateway 应用状态
///
/// Provider 在构建时注入；`None` 表示凭证未配置，
/// 摘要处理器会据此返回配置错误。
#[derive(Clone)]
pub struct AppState {
    provider: Option<Arc<dyn Provider>>,
}

impl AppState {
    pub fn new(provider: Option<Arc<dyn Provider>>) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> Option<Arc<dyn Provider>> {
        self.provider.clone()
    }
}
