//! Project Context - Entities

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ChapterStatus, PlotElementType};
use crate::domain::{count_words, EntityId};

/// 章节
///
/// id 与时间戳由服务端分配；草稿阶段时间戳为空
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chapter {
    pub id: EntityId,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default)]
    pub status: ChapterStatus,
    #[serde(default)]
    pub word_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_word_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub chapter_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Chapter {
    pub fn new(title: impl Into<String>, sort_order: i32) -> Self {
        Self {
            id: EntityId::placeholder(),
            title: title.into(),
            sort_order,
            ..Default::default()
        }
    }

    /// 根据正文重新统计字数
    pub fn recount_words(&mut self) {
        self.word_count = count_words(&self.content);
    }

    /// 完成度百分比（无目标字数时为 None）
    pub fn progress_percent(&self) -> Option<u8> {
        match self.target_word_count {
            Some(target) if target > 0 => {
                let percent = (u64::from(self.word_count) * 100 / u64::from(target)).min(100);
                Some(percent as u8)
            }
            _ => None,
        }
    }
}

/// 大纲节点
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutlineNode {
    pub id: EntityId,
    pub title: String,
    #[serde(rename = "type", default)]
    pub node_type: PlotElementType,
    #[serde(default, alias = "position")]
    pub order: u32,
    #[serde(default)]
    pub description: String,
}

impl OutlineNode {
    pub fn new(title: impl Into<String>, node_type: PlotElementType, order: u32) -> Self {
        Self {
            id: EntityId::placeholder(),
            title: title.into(),
            node_type,
            order,
            description: String::new(),
        }
    }
}
