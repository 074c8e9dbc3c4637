//! World Context - Aggregate Root

use serde::{Deserialize, Serialize};

use super::{WorldElement, WorldElementType};
use crate::domain::EntityId;

/// World 聚合根
///
/// 不变量:
/// - elements 保持用户录入顺序
/// - 编辑总是整体替换，按 id 定位
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct World {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub elements: Vec<WorldElement>,
    #[serde(default)]
    pub notes: String,
}

impl World {
    /// 创建新世界草稿（占位 ID）
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: EntityId::placeholder(),
            name: name.into(),
            description: description.into(),
            elements: Vec::new(),
            notes: String::new(),
        }
    }

    pub fn element(&self, id: &EntityId) -> Option<&WorldElement> {
        self.elements.iter().find(|e| &e.id == id)
    }

    pub fn elements_of_type(
        &self,
        element_type: WorldElementType,
    ) -> impl Iterator<Item = &WorldElement> + '_ {
        self.elements
            .iter()
            .filter(move |e| e.element_type == element_type)
    }

    pub fn element_count(&self) -> usize {
        self.elements.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_world_deserializes_server_payload() {
        let json = r#"{
            "id": 42,
            "name": "艾泽拉斯",
            "description": "剑与魔法",
            "elements": [
                {"id": 1, "type": "location", "name": "暴风城", "description": "人类王都"},
                {"id": 2, "type": "magic", "name": "奥术", "description": "", "details": "高危"}
            ],
            "notes": ""
        }"#;

        let world: World = serde_json::from_str(json).unwrap();
        assert_eq!(world.id.as_str(), "42");
        assert_eq!(world.element_count(), 2);
        assert_eq!(world.elements[1].details.as_deref(), Some("高危"));
        assert_eq!(world.elements_of_type(WorldElementType::Location).count(), 1);
    }

    #[test]
    fn test_summary_without_elements() {
        let world: World = serde_json::from_str(r#"{"id": "7", "name": "蒸汽之城"}"#).unwrap();
        assert!(world.elements.is_empty());
        assert!(world.notes.is_empty());
    }

    #[test]
    fn test_element_lookup() {
        let mut world = World::new("测试", "");
        let element = WorldElement::new(WorldElementType::Culture, "茶道");
        let id = element.id.clone();
        world.elements.push(element);

        assert_eq!(world.element(&id).map(|e| e.name.as_str()), Some("茶道"));
        assert!(world.element(&EntityId::from("missing")).is_none());
    }
}
