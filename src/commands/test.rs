//! Test 命令 - 发送测试请求到本地服务器
//!
//! 此模块实现 `test` 命令，用于向本地运行的 Blurb 服务器提交一份
//! 示例资料，验证服务是否正常工作。

use anyhow::{Context, Result};

use crate::config::Config;

/// 执行测试命令
///
/// # 参数
///
/// * `config` - 应用配置，用于获取服务器地址
///
/// # 功能
///
/// - 向本地服务器的 `/api/summarize` 端点提交一份示例资料
/// - 显示响应状态和生成的摘要
///
/// # 返回
///
/// 成功时返回 Ok(())，失败时返回错误信息
pub async fn test_command(config: Config) -> Result<()> {
    println!("Sending test profile to local server...");

    // 构造示例资料
    let test_body = serde_json::json!({
        "aboutText1": "I am a backend engineer who enjoys building reliable network services.",
        "aboutText2": "Outside of work I contribute to open source observability tooling.",
        "skills": "Rust, Tokio, Axum, PostgreSQL, Kubernetes",
        "experience": "7 years building payment and messaging infrastructure.",
        "projects": "A self-hosted feature flag service used by three startups."
    });

    let url = format!("http://{}:{}/api/summarize", config.host, config.port);

    println!("Request URL: {}", url);

    // 发送请求
    let response = reqwest::Client::new()
        .post(&url)
        .json(&test_body)
        .send()
        .await
        .context("Request failed. Make sure the server is running.")?;

    let status = response.status();
    println!("Response status: {}", status);

    // 检查响应状态
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        anyhow::bail!("Request failed: {}", body);
    }

    // 显示响应内容
    let body = response
        .text()
        .await
        .context("Failed to read response body")?;

    println!("Response:");
    println!("{}", body);

    Ok(())
}
