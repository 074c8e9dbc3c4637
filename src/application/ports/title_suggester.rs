//! Title Suggester Port - 标题建议
//!
//! 目前只有本地占位实现，接口保持与后端生成服务一致的形状

use async_trait::async_trait;

/// 标题建议请求
#[derive(Debug, Clone, Default)]
pub struct TitleRequest {
    /// 题材（如 玄幻、科幻）
    pub genre: String,
    /// 风格（如 轻松、黑暗）
    pub style: Option<String>,
}

impl TitleRequest {
    pub fn new(genre: impl Into<String>) -> Self {
        Self {
            genre: genre.into(),
            style: None,
        }
    }

    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }
}

/// Title Suggester Port
#[async_trait]
pub trait TitleSuggester: Send + Sync {
    async fn suggest_titles(&self, request: &TitleRequest) -> Vec<String>;
}
