//! 作品 AI 对话面板状态

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::application::error::ApplicationError;
use crate::application::ports::{
    ApiError, ChatContext, ChatMessage, ChatPort, ChatRequest, ChatStreamSink,
};
use crate::domain::EntityId;

/// 默认历史条数
pub const DEFAULT_HISTORY_LIMIT: u32 = 50;

/// 对话面板
pub struct ChatPanel {
    chat: Arc<dyn ChatPort>,
    project_id: EntityId,
    history_limit: u32,
    messages: Vec<ChatMessage>,
    streaming: bool,
    error: Option<String>,
}

/// 流式结果
enum StreamOutcome {
    Completed,
    Failed(ApiError),
}

/// 把流式分块追加到助手消息上
struct ReplySink<'a, F: FnMut(&str) + Send + ?Sized> {
    reply: &'a mut ChatMessage,
    on_chunk: &'a mut F,
    outcome: Option<StreamOutcome>,
}

impl<F: FnMut(&str) + Send + ?Sized> ChatStreamSink for ReplySink<'_, F> {
    fn on_chunk(&mut self, chunk: &str) {
        if !self.reply.content.is_empty() {
            self.reply.content.push('\n');
        }
        self.reply.content.push_str(chunk);
        (self.on_chunk)(chunk);
    }

    fn on_complete(&mut self) {
        self.outcome.get_or_insert(StreamOutcome::Completed);
    }

    fn on_error(&mut self, error: ApiError) {
        self.outcome.get_or_insert(StreamOutcome::Failed(error));
    }
}

impl ChatPanel {
    pub fn new(chat: Arc<dyn ChatPort>, project_id: EntityId) -> Self {
        Self {
            chat,
            project_id,
            history_limit: DEFAULT_HISTORY_LIMIT,
            messages: Vec::new(),
            streaming: false,
            error: None,
        }
    }

    pub fn with_history_limit(mut self, limit: u32) -> Self {
        self.history_limit = limit;
        self
    }

    pub fn project_id(&self) -> &EntityId {
        &self.project_id
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_streaming(&self) -> bool {
        self.streaming
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// 加载最近的历史消息（整体替换）
    pub async fn load_history(&mut self) -> Result<(), ApplicationError> {
        self.error = None;
        match self.chat.chat_history(&self.project_id, self.history_limit).await {
            Ok(messages) => {
                tracing::debug!(
                    project_id = %self.project_id,
                    count = messages.len(),
                    "Chat history loaded"
                );
                self.messages = messages;
                Ok(())
            }
            Err(e) => {
                tracing::warn!(
                    project_id = %self.project_id,
                    error = %e,
                    "Failed to load chat history"
                );
                self.error = Some(e.user_message("获取对话历史失败"));
                Err(e.into())
            }
        }
    }

    /// 查看服务端保存的对话上下文
    pub async fn context(&mut self) -> Result<ChatContext, ApplicationError> {
        self.error = None;
        self.chat.chat_context(&self.project_id).await.map_err(|e| {
            self.error = Some(e.user_message("获取对话上下文失败"));
            e.into()
        })
    }

    /// 清空上下文与本地消息
    pub async fn clear_context(&mut self) -> Result<(), ApplicationError> {
        self.error = None;
        match self.chat.clear_chat_context(&self.project_id).await {
            Ok(()) => {
                tracing::info!(project_id = %self.project_id, "Chat context cleared");
                self.messages.clear();
                Ok(())
            }
            Err(e) => {
                self.error = Some(e.user_message("清空对话上下文失败"));
                Err(e.into())
            }
        }
    }

    /// 发送消息，回复按行流式追加到同一条助手消息中
    pub async fn send(
        &mut self,
        text: &str,
        cancel: CancellationToken,
    ) -> Result<(), ApplicationError> {
        self.send_with(text, cancel, &mut |_: &str| {}).await
    }

    /// 同 `send`，每收到一行额外回调 `on_chunk`
    pub async fn send_with(
        &mut self,
        text: &str,
        cancel: CancellationToken,
        on_chunk: &mut (dyn FnMut(&str) + Send),
    ) -> Result<(), ApplicationError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ApplicationError::validation("message", "消息不能为空"));
        }
        if self.streaming {
            return Err(ApplicationError::invalid_state("上一条回复仍在生成中"));
        }

        self.error = None;
        self.messages.push(ChatMessage::user(text));
        self.messages.push(ChatMessage::assistant(""));
        self.streaming = true;

        let chat = Arc::clone(&self.chat);
        let request = ChatRequest::new(text);
        let outcome = {
            let reply = self
                .messages
                .last_mut()
                .ok_or_else(|| ApplicationError::invalid_state("助手消息丢失"))?;
            let mut sink = ReplySink {
                reply,
                on_chunk,
                outcome: None,
            };
            chat.stream_chat(&self.project_id, &request, &mut sink, cancel)
                .await;
            sink.outcome
        };
        self.streaming = false;

        match outcome {
            Some(StreamOutcome::Completed) | None => Ok(()),
            Some(StreamOutcome::Failed(ApiError::Cancelled)) => {
                tracing::info!(project_id = %self.project_id, "Chat stream cancelled");
                self.drop_empty_reply();
                Ok(())
            }
            Some(StreamOutcome::Failed(e)) => {
                tracing::warn!(project_id = %self.project_id, error = %e, "Chat stream failed");
                self.error = Some(e.user_message("AI 回复失败"));
                self.drop_empty_reply();
                Err(e.into())
            }
        }
    }

    fn drop_empty_reply(&mut self) {
        if self
            .messages
            .last()
            .is_some_and(|m| m.content.is_empty())
        {
            self.messages.pop();
        }
    }
}
