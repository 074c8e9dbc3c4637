//! Project Context - Aggregate Root

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ProjectStatus;
use crate::domain::EntityId;

/// 默认封面渐变色
pub const DEFAULT_COVER_GRADIENT: [&str; 2] = ["#6366f1", "#8b5cf6"];

/// 作品元信息
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectMetadata {
    pub synopsis: String,
    pub tags: Vec<String>,
    pub target_audience: String,
    pub word_count_goal: u32,
    pub status: ProjectStatus,
    pub highlights: Vec<String>,
    pub writing_requirements: Vec<String>,
}

/// NovelProject 聚合根
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NovelProject {
    pub id: EntityId,
    pub title: String,
    #[serde(default)]
    pub genre: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(default)]
    pub metadata: ProjectMetadata,
    #[serde(default = "default_cover_gradient")]
    pub cover_gradient: [String; 2],
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

fn default_cover_gradient() -> [String; 2] {
    DEFAULT_COVER_GRADIENT.map(String::from)
}

impl Default for NovelProject {
    fn default() -> Self {
        Self {
            id: EntityId::placeholder(),
            title: String::new(),
            genre: String::new(),
            style: None,
            metadata: ProjectMetadata::default(),
            cover_gradient: default_cover_gradient(),
            created_at: None,
            updated_at: None,
        }
    }
}

impl NovelProject {
    pub fn new(title: impl Into<String>, genre: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            genre: genre.into(),
            ..Default::default()
        }
    }

    pub fn status(&self) -> ProjectStatus {
        self.metadata.status
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.metadata.tags.iter().any(|t| t == tag)
    }
}
