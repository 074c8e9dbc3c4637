//! World Context - Entities

use serde::{Deserialize, Serialize};

use super::WorldElementType;
use crate::domain::EntityId;

/// 世界设定元素（地点、文化、历史等）
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorldElement {
    #[serde(default)]
    pub id: EntityId,
    #[serde(rename = "type", default)]
    pub element_type: WorldElementType,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl WorldElement {
    /// 创建带占位 ID 的新元素
    pub fn new(element_type: WorldElementType, name: impl Into<String>) -> Self {
        Self {
            id: EntityId::placeholder(),
            element_type,
            name: name.into(),
            description: String::new(),
            details: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}
