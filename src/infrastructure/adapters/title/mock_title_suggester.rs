//! Mock Title Suggester - 书名建议的占位实现
//!
//! 按题材/风格关键字查固定词表，在固定延迟后返回，不调用任何模型

use async_trait::async_trait;
use std::time::Duration;

use crate::application::ports::{TitleRequest, TitleSuggester};

/// 关键字 -> 候选书名
const TITLE_TABLE: &[(&[&str], &[&str])] = &[
    (
        &["玄幻", "奇幻"],
        &["苍穹之上", "万古剑尊", "星辰变", "龙渊", "九域神皇"],
    ),
    (
        &["科幻"],
        &["星海远航", "深空回响", "量子黎明", "最后的殖民舰", "硅基纪元"],
    ),
    (
        &["悬疑", "推理"],
        &["无声证词", "第十三个房间", "雾港疑案", "消失的证人", "暗夜追踪"],
    ),
    (
        &["言情", "爱情"],
        &["余生请多指教", "春风十里", "你是我的例外", "星光落满怀", "半城烟雨"],
    ),
    (
        &["历史"],
        &["大明风华", "长安十二时辰", "山河故人", "烽火三国", "盛唐夜宴"],
    ),
    (
        &["武侠"],
        &["江湖夜雨", "剑啸九州", "侠客行歌", "刀光如雪", "青衫落拓"],
    ),
];

/// 没有关键字命中时的候选书名
const DEFAULT_TITLES: &[&str] = &["未命名的远方", "第一页", "故事开始的地方", "无尽之书", "晨光序章"];

/// Mock Title Suggester 配置
#[derive(Debug, Clone)]
pub struct MockTitleSuggesterConfig {
    /// 模拟的生成耗时
    pub delay: Duration,
}

impl Default for MockTitleSuggesterConfig {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(800),
        }
    }
}

impl MockTitleSuggesterConfig {
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

/// Mock Title Suggester
pub struct MockTitleSuggester {
    config: MockTitleSuggesterConfig,
}

impl MockTitleSuggester {
    pub fn new(config: MockTitleSuggesterConfig) -> Self {
        Self { config }
    }

    pub fn with_defaults() -> Self {
        Self::new(MockTitleSuggesterConfig::default())
    }

    /// 查表：题材优先，其次风格
    fn lookup(request: &TitleRequest) -> &'static [&'static str] {
        let candidates = std::iter::once(request.genre.as_str()).chain(request.style.as_deref());

        for text in candidates {
            let hit = TITLE_TABLE
                .iter()
                .find(|(keywords, _)| keywords.iter().any(|k| text.contains(k)));
            if let Some((_, titles)) = hit {
                return *titles;
            }
        }
        DEFAULT_TITLES
    }
}

#[async_trait]
impl TitleSuggester for MockTitleSuggester {
    async fn suggest_titles(&self, request: &TitleRequest) -> Vec<String> {
        tokio::time::sleep(self.config.delay).await;

        let titles: Vec<String> = Self::lookup(request).iter().map(|t| t.to_string()).collect();
        tracing::debug!(
            genre = %request.genre,
            style = ?request.style,
            count = titles.len(),
            "Title suggestions generated"
        );
        titles
    }
}
