//! Gemini Provider
//!
//! 通过 generateContent 接口调用 Google Gemini。
//! API key 以查询参数形式携带，任何日志里都只出现有无，不出现值。

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use crate::prompt::SummaryPrompt;
use crate::providers::Provider;

/// API 请求超时（秒）
const API_TIMEOUT_SECS: u64 = 120;

/// 共享的 API 客户端
static API_CLIENT: OnceLock<Client> = OnceLock::new();

fn get_api_client() -> &'static Client {
    API_CLIENT.get_or_init(|| {
        Client::builder()
            .timeout(std::time::Duration::from_secs(API_TIMEOUT_SECS))
            .build()
            .expect("Failed to create Gemini API client")
    })
}

/// Gemini 文本生成 Provider
pub struct GeminiProvider {
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiProvider {
    pub fn new(api_key: String, model: String, base_url: String) -> Self {
        Self {
            api_key,
            model,
            base_url,
        }
    }

    /// 拼接 generateContent 的完整 URL
    ///
    /// 返回值包含 API key，绝不能写进日志。
    fn api_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url,
            self.model,
            urlencoding::encode(&self.api_key),
        )
    }
}

#[async_trait]
impl Provider for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn generate(&self, prompt: &SummaryPrompt) -> Result<String> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.content.clone(),
                }],
            }],
            system_instruction: Content {
                parts: vec![Part {
                    text: prompt.instruction.clone(),
                }],
            },
        };

        tracing::debug!(
            model = %self.model,
            content_len = prompt.content.len(),
            "Sending request to Gemini API"
        );

        let response = get_api_client()
            .post(self.api_url())
            .json(&request)
            .send()
            .await
            .context("Failed to send request to Gemini API")?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            anyhow::bail!("Gemini API error {}: {}", status, error_body);
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .context("Failed to parse Gemini API response")?;

        match extract_text(body) {
            Some(text) => Ok(text),
            None => anyhow::bail!("Gemini API returned an empty or invalid response"),
        }
    }
}

/// 从响应中取出 candidates[0].content.parts[0].text
///
/// 任何一层缺失或文本为空都视为无效响应
fn extract_text(response: GenerateContentResponse) -> Option<String> {
    response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content.parts.into_iter().next())
        .map(|part| part.text)
        .filter(|text| !text.is_empty())
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    system_instruction: Content,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Content,
}
