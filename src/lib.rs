//! Blurb - 个人主页摘要中继服务
//!
//! 一个轻量级的 API 中继，把前端提交的个人资料转发给 Gemini 文本生成接口，
//! 并把生成的招聘官风格摘要回传给调用方。Gemini API key 只存在于服务端，
//! 前端永远接触不到。
//!
//! # 功能特性
//!
//! - `POST /api/summarize`: 校验资料字段、拼接提示词、调用 Gemini 并中继结果
//! - 统一的错误契约：调用方只会看到固定的 JSON 错误体，不泄露内部细节
//! - 凭证缺失时按请求上报配置错误，服务本身不会崩溃
//!
//! # 命令行接口
//!
//! - `serve`: 启动 API 服务器
//! - `test`: 向本地服务器发送一份示例资料

pub mod commands;
pub mod config;
pub mod gateway;
pub mod prompt;
pub mod providers;
