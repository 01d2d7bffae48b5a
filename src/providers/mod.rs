//! Provider 抽象层
//!
//! 定义文本生成 Provider 的统一接口。出站调用以 trait 对象注入，
//! 测试里可以用确定性的替身代替真实网络请求。

pub mod gemini;

use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

use crate::config::Config;
use crate::prompt::SummaryPrompt;
use gemini::GeminiProvider;

/// Provider Trait - 文本生成服务的统一接口
#[async_trait]
pub trait Provider: Send + Sync {
    /// Provider 名称（用于日志和标识）
    fn name(&self) -> &str;
    /// 使用的模型名称
    fn model(&self) -> &str;
    /// 发起一次生成调用，返回生成的摘要文本
    async fn generate(&self, prompt: &SummaryPrompt) -> Result<String>;
}

/// 根据配置创建 Provider
///
/// 未配置 `GEMINI_API_KEY` 时返回 `None`，服务照常启动，
/// 摘要请求会收到配置错误响应。
pub fn from_config(config: &Config) -> Option<Arc<dyn Provider>> {
    match &config.gemini_api_key {
        Some(api_key) => Some(Arc::new(GeminiProvider::new(
            api_key.clone(),
            config.gemini_model.clone(),
            config.gemini_base_url.clone(),
        ))),
        None => {
            tracing::warn!(
                "GEMINI_API_KEY is not set. Summary requests will be answered with a configuration error."
            );
            None
        }
    }
}
