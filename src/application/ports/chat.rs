//! Chat Port - 作品 AI 对话抽象

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;

use super::ApiError;
use crate::domain::EntityId;

/// 消息角色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
    System,
}

/// 对话消息
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
            created_at: Some(Utc::now()),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
            created_at: Some(Utc::now()),
        }
    }
}

/// 服务端维护的对话上下文
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChatContext {
    pub messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_count: Option<u32>,
}

/// 流式对话请求体
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chapter_id: Option<EntityId>,
}

impl ChatRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            chapter_id: None,
        }
    }
}

/// 流式回调
///
/// 约定：`on_chunk` 每个非空行调用一次；结束时 `on_complete` 与
/// `on_error` 二者恰好调用其一，之后不再有任何回调
pub trait ChatStreamSink: Send {
    fn on_chunk(&mut self, chunk: &str);

    fn on_complete(&mut self);

    fn on_error(&mut self, error: ApiError);
}

/// Chat Port
#[async_trait]
pub trait ChatPort: Send + Sync {
    /// 发送消息并逐行回调流式回复
    async fn stream_chat(
        &self,
        project_id: &EntityId,
        request: &ChatRequest,
        sink: &mut dyn ChatStreamSink,
        cancel: CancellationToken,
    );

    /// 获取最近的对话历史
    async fn chat_history(
        &self,
        project_id: &EntityId,
        limit: u32,
    ) -> Result<Vec<ChatMessage>, ApiError>;

    /// 获取对话上下文
    async fn chat_context(&self, project_id: &EntityId) -> Result<ChatContext, ApiError>;

    /// 清空对话上下文
    async fn clear_chat_context(&self, project_id: &EntityId) -> Result<(), ApiError>;
}
