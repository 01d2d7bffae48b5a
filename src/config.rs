//! 应用配置模块
//!
//! 负责从环境变量加载应用配置，包括：
//! - 服务器监听地址和端口
//! - Gemini API key（可缺失，缺失时按请求上报配置错误）
//! - Gemini 模型名称和接口地址

use anyhow::{Context, Result};

/// Gemini 接口默认地址
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// 默认使用的 Gemini 模型
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";

/// 应用配置
///
/// 包含服务器运行所需的所有配置项
#[derive(Debug, Clone)]
pub struct Config {
    /// 服务器监听地址（如 "0.0.0.0" 或 "127.0.0.1"）
    pub host: String,
    /// 服务器监听端口
    pub port: u16,
    /// Gemini API key
    ///
    /// `None` 表示未配置。服务仍会启动，摘要请求会收到配置错误响应。
    pub gemini_api_key: Option<String>,
    /// Gemini 模型名称
    pub gemini_model: String,
    /// Gemini 接口基础地址（测试时可指向本地 mock 服务器）
    pub gemini_base_url: String,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// # 环境变量
    ///
    /// - `BLURB_HOST`: 服务器监听地址（默认: "0.0.0.0"）
    /// - `BLURB_PORT`: 服务器监听端口（默认: 8080）
    /// - `GEMINI_API_KEY`: Gemini API key（可选，空值视为未配置）
    /// - `BLURB_GEMINI_MODEL`: Gemini 模型名称（默认: "gemini-2.5-flash"）
    /// - `BLURB_GEMINI_BASE_URL`: Gemini 接口基础地址
    ///
    /// # 错误
    ///
    /// - 如果 `BLURB_PORT` 不是有效的端口号
    pub fn from_env() -> Result<Self> {
        let host = std::env::var("BLURB_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port = std::env::var("BLURB_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .context("BLURB_PORT must be a valid port number")?;

        // 空字符串等同于未设置，和前端原型的 falsy 判断保持一致
        let gemini_api_key = std::env::var("GEMINI_API_KEY")
            .ok()
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());

        let gemini_model = std::env::var("BLURB_GEMINI_MODEL")
            .unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.to_string());

        let gemini_base_url = std::env::var("BLURB_GEMINI_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_GEMINI_BASE_URL.to_string());

        Ok(Self {
            host,
            port,
            gemini_api_key,
            gemini_model,
            gemini_base_url,
        })
    }
}
