//! 提示词构造
//!
//! 入站资料（Profile Input）的数据形状，以及发给 Gemini 的
//! 指令 + 正文两段提示词的拼接逻辑。

use serde::Deserialize;

/// 固定的系统指令：招聘官口吻、单段落、纯文本
pub const SYSTEM_INSTRUCTION: &str = "Act as a world-class tech recruiter. \
Your task is to provide a concise, professional, and enthusiastic summary of a \
software engineer's profile based on the information provided. The summary \
should be one paragraph and highlight their key strengths, experience level, \
and technical abilities in a way that would impress a hiring manager. Do not \
use markdown, just plain text.";

/// 调用方提交的个人资料
///
/// 所有字段缺省为空字符串。`about_text2` 和 `projects` 本来就是可选的；
/// 其余三个字段为空会被校验拒绝。
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileInput {
    pub about_text1: String,
    pub about_text2: String,
    pub skills: String,
    pub experience: String,
    pub projects: String,
}

impl ProfileInput {
    /// 必填字段（about_text1 / skills / experience）是否都非空
    pub fn has_required_fields(&self) -> bool {
        !self.about_text1.is_empty() && !self.skills.is_empty() && !self.experience.is_empty()
    }
}

/// 一次摘要调用的完整提示词
#[derive(Debug, Clone)]
pub struct SummaryPrompt {
    /// 系统指令（systemInstruction）
    pub instruction: String,
    /// 用户正文（contents）
    pub content: String,
}

/// 把资料拼成固定顺序、固定标签的正文段落
///
/// 顺序不可变：ABOUT（两段）→ SKILLS → EXPERIENCE → PROJECTS，
/// 字段内容原样插入，不做任何裁剪或转写。
pub fn build_prompt(profile: &ProfileInput) -> SummaryPrompt {
    let content = format!(
        "Here is the profile of a software engineer:\n\
         ---\n\
         ABOUT:\n\
         {}\n\
         {}\n\
         ---\n\
         SKILLS:\n\
         {}\n\
         ---\n\
         EXPERIENCE:\n\
         {}\n\
         ---\n\
         PROJECTS:\n\
         {}\n",
        profile.about_text1,
        profile.about_text2,
        profile.skills,
        profile.experience,
        profile.projects,
    );

    SummaryPrompt {
        instruction: SYSTEM_INSTRUCTION.to_string(),
        content,
    }
}
