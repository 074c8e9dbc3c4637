//! World Context - Value Objects

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::domain::DomainError;

/// 世界元素类型
///
/// 未知类型统一解析为 `Other`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorldElementType {
    Location,
    Culture,
    History,
    Technology,
    Magic,
    Organization,
    Character,
    #[default]
    #[serde(other)]
    Other,
}

impl WorldElementType {
    pub const ALL: [WorldElementType; 8] = [
        WorldElementType::Location,
        WorldElementType::Culture,
        WorldElementType::History,
        WorldElementType::Technology,
        WorldElementType::Magic,
        WorldElementType::Organization,
        WorldElementType::Character,
        WorldElementType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WorldElementType::Location => "location",
            WorldElementType::Culture => "culture",
            WorldElementType::History => "history",
            WorldElementType::Technology => "technology",
            WorldElementType::Magic => "magic",
            WorldElementType::Organization => "organization",
            WorldElementType::Character => "character",
            WorldElementType::Other => "other",
        }
    }

    /// 界面显示名称
    pub fn label(&self) -> &'static str {
        match self {
            WorldElementType::Location => "地点",
            WorldElementType::Culture => "文化",
            WorldElementType::History => "历史",
            WorldElementType::Technology => "科技",
            WorldElementType::Magic => "魔法",
            WorldElementType::Organization => "组织",
            WorldElementType::Character => "人物",
            WorldElementType::Other => "其他",
        }
    }
}

impl FromStr for WorldElementType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s || t.label() == s)
            .ok_or_else(|| DomainError::InvalidElementType(s.to_string()))
    }
}

impl std::fmt::Display for WorldElementType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_type_decodes_as_other() {
        let t: WorldElementType = serde_json::from_str("\"religion\"").unwrap();
        assert_eq!(t, WorldElementType::Other);
    }

    #[test]
    fn test_from_str_accepts_label() {
        assert_eq!("地点".parse::<WorldElementType>().unwrap(), WorldElementType::Location);
        assert_eq!("magic".parse::<WorldElementType>().unwrap(), WorldElementType::Magic);
        assert!("religion".parse::<WorldElementType>().is_err());
    }
}
