//! AI 对话接口
//!
//! `POST /projects/{id}/chat/stream` 返回按行分隔的纯文本，
//! 每读到一行完整文本就交给 sink；其余接口走统一包装。

use async_trait::async_trait;
use futures_util::StreamExt;
use reqwest::Method;
use serde_json::Value;
use tokio_util::sync::CancellationToken;

use super::client::map_transport_error;
use super::HttpApiClient;
use crate::application::ports::{
    ApiError, ChatContext, ChatMessage, ChatPort, ChatRequest, ChatStreamSink,
};
use crate::domain::{EntityId, LineSplitter};

fn chat_path(project_id: &EntityId, tail: &str) -> String {
    format!("/projects/{}/chat/{}", project_id, tail)
}

impl HttpApiClient {
    /// 读取整个流，逐行回调；正常结束返回 Ok
    async fn pump_chat_stream(
        &self,
        project_id: &EntityId,
        request: &ChatRequest,
        sink: &mut dyn ChatStreamSink,
        cancel: &CancellationToken,
    ) -> Result<(), ApiError> {
        let path = chat_path(project_id, "stream");

        let response = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(ApiError::Cancelled),
            response = self.open_stream(&path, request) => response?,
        };

        let mut body = response.bytes_stream();
        let mut splitter = LineSplitter::new();
        let mut lines = 0usize;

        loop {
            let next = tokio::select! {
                biased;
                _ = cancel.cancelled() => return Err(ApiError::Cancelled),
                next = body.next() => next,
            };

            match next {
                Some(Ok(bytes)) => {
                    for line in splitter.push(&bytes) {
                        lines += 1;
                        sink.on_chunk(&line);
                    }
                }
                Some(Err(e)) if e.is_timeout() => return Err(map_transport_error(e)),
                Some(Err(e)) => {
                    tracing::warn!(error = %e, "Chat stream body unreadable");
                    return Err(ApiError::StreamUnavailable);
                }
                None => break,
            }
        }

        if let Some(tail) = splitter.finish() {
            lines += 1;
            sink.on_chunk(&tail);
        }

        tracing::debug!(project_id = %project_id, lines = lines, "Chat stream finished");
        Ok(())
    }
}

#[async_trait]
impl ChatPort for HttpApiClient {
    async fn stream_chat(
        &self,
        project_id: &EntityId,
        request: &ChatRequest,
        sink: &mut dyn ChatStreamSink,
        cancel: CancellationToken,
    ) {
        match self.pump_chat_stream(project_id, request, sink, &cancel).await {
            Ok(()) => sink.on_complete(),
            Err(e) => {
                if e != ApiError::Cancelled {
                    tracing::warn!(project_id = %project_id, error = %e, "Chat stream failed");
                }
                sink.on_error(e);
            }
        }
    }

    async fn chat_history(
        &self,
        project_id: &EntityId,
        limit: u32,
    ) -> Result<Vec<ChatMessage>, ApiError> {
        let history: Option<Vec<ChatMessage>> = self
            .get_json(&chat_path(project_id, "history"), &[("limit", limit.to_string())])
            .await?;
        Ok(history.unwrap_or_default())
    }

    async fn chat_context(&self, project_id: &EntityId) -> Result<ChatContext, ApiError> {
        let context: Option<ChatContext> =
            self.get_json(&chat_path(project_id, "context"), &[]).await?;
        Ok(context.unwrap_or_default())
    }

    async fn clear_chat_context(&self, project_id: &EntityId) -> Result<(), ApiError> {
        self.send_empty::<Value>(Method::DELETE, &chat_path(project_id, "context"))
            .await?;
        tracing::info!(project_id = %project_id, "Chat context cleared");
        Ok(())
    }
}
