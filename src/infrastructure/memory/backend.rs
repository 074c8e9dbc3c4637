//! In-Memory Backend - 离线模式下的完整后端替身

use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

use super::InMemoryStore;
use crate::application::ports::{
    ApiError, ChatContext, ChatMessage, ChatPort, ChatRequest, ChatStreamSink, NewResource,
    ResourceGateway,
};
use crate::domain::project::{Chapter, ChapterStatus, NovelProject};
use crate::domain::world::{World, WorldElement, WorldElementType};
use crate::domain::{count_words, EntityId};

/// 内存后端
///
/// 持有世界观、作品、按作品划分的章节，以及每部作品的对话记录。
/// 对话回复为回显，按行推送。
pub struct InMemoryBackend {
    worlds: Arc<InMemoryStore<World>>,
    projects: Arc<InMemoryStore<NovelProject>>,
    /// project_id -> 章节仓库
    chapters: DashMap<String, Arc<InMemoryStore<Chapter>>>,
    /// project_id -> 对话记录
    conversations: DashMap<String, Vec<ChatMessage>>,
    /// 两行回复之间的间隔
    reply_delay: Duration,
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self {
            worlds: InMemoryStore::new().arc(),
            projects: InMemoryStore::new().arc(),
            chapters: DashMap::new(),
            conversations: DashMap::new(),
            reply_delay: Duration::from_millis(50),
        }
    }

    pub fn with_reply_delay(mut self, delay: Duration) -> Self {
        self.reply_delay = delay;
        self
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// 带示例数据的后端
    pub fn with_sample_data() -> Result<Self, ApiError> {
        let backend = Self::new();

        let mut azeroth = World::new("艾泽拉斯", "剑与魔法交织的大陆");
        azeroth.elements = vec![
            WorldElement::new(WorldElementType::Location, "暴风城").with_description("人类王国的都城"),
            WorldElement::new(WorldElementType::Organization, "肯瑞托").with_description("法师议会"),
            WorldElement::new(WorldElementType::Magic, "奥术"),
        ];
        backend.worlds.insert(NewResource::new(azeroth))?;

        let mut steam = World::new("蒸汽之城", "齿轮与黄铜构成的悬浮都市");
        steam.elements = vec![WorldElement::new(WorldElementType::Technology, "差分机")];
        steam.notes = "第三卷再展开城邦政治".to_string();
        backend.worlds.insert(NewResource::new(steam))?;

        let mut project = NovelProject::new("星海远航", "科幻");
        project.metadata.synopsis = "一艘殖民舰在深空中醒来".to_string();
        project.metadata.tags = vec!["太空".to_string(), "群像".to_string()];
        project.metadata.word_count_goal = 300_000;
        let project_id = backend.projects.insert(NewResource::new(project))?;

        let chapters = backend.chapters_store(&project_id);
        let mut first = Chapter::new("第一章 苏醒", 1);
        first.content = "舰船的警报声在空荡的走廊里回响。".to_string();
        first.status = ChapterStatus::Completed;
        first.recount_words();
        chapters.insert(NewResource::new(first))?;

        let mut second = Chapter::new("第二章 航迹", 2);
        second.status = ChapterStatus::InProgress;
        second.target_word_count = Some(5000);
        chapters.insert(NewResource::new(second))?;

        Ok(backend)
    }

    pub fn worlds(&self) -> Arc<dyn ResourceGateway<World>> {
        self.worlds.clone()
    }

    pub fn projects(&self) -> Arc<dyn ResourceGateway<NovelProject>> {
        self.projects.clone()
    }

    /// 某部作品的章节网关，不存在时创建空仓库
    pub fn chapters(&self, project_id: &EntityId) -> Arc<dyn ResourceGateway<Chapter>> {
        self.chapters_store(project_id)
    }

    fn chapters_store(&self, project_id: &EntityId) -> Arc<InMemoryStore<Chapter>> {
        self.chapters
            .entry(project_id.to_string())
            .or_insert_with(|| InMemoryStore::new().arc())
            .clone()
    }

    fn reply_lines(message: &str) -> Vec<String> {
        vec![
            format!("收到：{}", message.trim()),
            "（离线模式下的回显回复）".to_string(),
        ]
    }
}

impl Default for InMemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatPort for InMemoryBackend {
    async fn stream_chat(
        &self,
        project_id: &EntityId,
        request: &ChatRequest,
        sink: &mut dyn ChatStreamSink,
        cancel: CancellationToken,
    ) {
        let lines = Self::reply_lines(&request.message);

        for line in &lines {
            tokio::select! {
                biased;
                _ = cancel.cancelled() => {
                    sink.on_error(ApiError::Cancelled);
                    return;
                }
                _ = tokio::time::sleep(self.reply_delay) => sink.on_chunk(line),
            }
        }

        self.conversations
            .entry(project_id.to_string())
            .or_default()
            .extend([
                ChatMessage::user(request.message.clone()),
                ChatMessage::assistant(lines.join("\n")),
            ]);
        sink.on_complete();
    }

    async fn chat_history(
        &self,
        project_id: &EntityId,
        limit: u32,
    ) -> Result<Vec<ChatMessage>, ApiError> {
        let history = self
            .conversations
            .get(project_id.as_str())
            .map(|entry| entry.value().clone())
            .unwrap_or_default();

        let skip = history.len().saturating_sub(limit as usize);
        Ok(history.into_iter().skip(skip).collect())
    }

    async fn chat_context(&self, project_id: &EntityId) -> Result<ChatContext, ApiError> {
        let messages = self
            .conversations
            .get(project_id.as_str())
            .map(|entry| entry.value().clone())
            .unwrap_or_default();
        let token_count = messages.iter().map(|m| count_words(&m.content)).sum();

        Ok(ChatContext {
            messages,
            summary: None,
            token_count: Some(token_count),
        })
    }

    async fn clear_chat_context(&self, project_id: &EntityId) -> Result<(), ApiError> {
        self.conversations.remove(project_id.as_str());
        tracing::info!(project_id = %project_id, "Chat context cleared in memory");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::PageRequest;

    #[derive(Default)]
    struct Collect {
        chunks: Vec<String>,
        completed: bool,
        error: Option<ApiError>,
    }

    impl ChatStreamSink for Collect {
        fn on_chunk(&mut self, chunk: &str) {
            self.chunks.push(chunk.to_string());
        }

        fn on_complete(&mut self) {
            self.completed = true;
        }

        fn on_error(&mut self, error: ApiError) {
            self.error = Some(error);
        }
    }

    #[tokio::test]
    async fn test_sample_data() {
        let backend = InMemoryBackend::with_sample_data().unwrap();

        let worlds = backend.worlds().list(PageRequest::default()).await.unwrap();
        assert_eq!(worlds.len(), 2);
        assert_eq!(worlds[0].name, "艾泽拉斯");

        let projects = backend.projects().list(PageRequest::default()).await.unwrap();
        let chapters = backend
            .chapters(&projects[0].id)
            .list(PageRequest::default())
            .await
            .unwrap();
        assert_eq!(chapters.len(), 2);
        assert!(chapters[0].word_count > 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_echo_chat_records_history() {
        let backend = InMemoryBackend::new();
        let project_id = EntityId::new("1");
        let mut sink = Collect::default();

        backend
            .stream_chat(
                &project_id,
                &ChatRequest::new("写一段开场"),
                &mut sink,
                CancellationToken::new(),
            )
            .await;

        assert!(sink.completed);
        assert_eq!(sink.chunks[0], "收到：写一段开场");

        let history = backend.chat_history(&project_id, 50).await.unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(backend.chat_history(&project_id, 1).await.unwrap().len(), 1);

        backend.clear_chat_context(&project_id).await.unwrap();
        assert!(backend.chat_context(&project_id).await.unwrap().messages.is_empty());
    }

    #[tokio::test]
    async fn test_cancelled_chat_reports_cancelled_once() {
        let backend = InMemoryBackend::new();
        let cancel = CancellationToken::new();
        cancel.cancel();
        let mut sink = Collect::default();

        backend
            .stream_chat(&EntityId::new("1"), &ChatRequest::new("你好"), &mut sink, cancel)
            .await;

        assert!(!sink.completed);
        assert!(sink.chunks.is_empty());
        assert_eq!(sink.error, Some(ApiError::Cancelled));
    }
}
