//! Project Context - Value Objects

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::domain::DomainError;

/// 章节状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChapterStatus {
    #[default]
    Draft,
    InProgress,
    Completed,
    Edited,
}

impl ChapterStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChapterStatus::Draft => "draft",
            ChapterStatus::InProgress => "in-progress",
            ChapterStatus::Completed => "completed",
            ChapterStatus::Edited => "edited",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ChapterStatus::Draft => "草稿",
            ChapterStatus::InProgress => "写作中",
            ChapterStatus::Completed => "已完成",
            ChapterStatus::Edited => "已修订",
        }
    }
}

impl FromStr for ChapterStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(ChapterStatus::Draft),
            "in-progress" => Ok(ChapterStatus::InProgress),
            "completed" => Ok(ChapterStatus::Completed),
            "edited" => Ok(ChapterStatus::Edited),
            _ => Err(DomainError::InvalidChapterStatus(s.to_string())),
        }
    }
}

/// 作品状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    #[default]
    Draft,
    InProgress,
    Completed,
    Published,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Draft => "draft",
            ProjectStatus::InProgress => "in-progress",
            ProjectStatus::Completed => "completed",
            ProjectStatus::Published => "published",
        }
    }
}

impl FromStr for ProjectStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(ProjectStatus::Draft),
            "in-progress" => Ok(ProjectStatus::InProgress),
            "completed" => Ok(ProjectStatus::Completed),
            "published" => Ok(ProjectStatus::Published),
            _ => Err(DomainError::InvalidProjectStatus(s.to_string())),
        }
    }
}

/// 大纲情节类型
///
/// 线上格式即中文标签本身
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PlotElementType {
    #[serde(rename = "起始")]
    Beginning,
    #[serde(rename = "发展")]
    Development,
    #[serde(rename = "高潮")]
    Climax,
    #[serde(rename = "结局")]
    Ending,
    #[default]
    #[serde(rename = "其他")]
    Other,
}

impl PlotElementType {
    pub const ALL: [PlotElementType; 5] = [
        PlotElementType::Beginning,
        PlotElementType::Development,
        PlotElementType::Climax,
        PlotElementType::Ending,
        PlotElementType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PlotElementType::Beginning => "起始",
            PlotElementType::Development => "发展",
            PlotElementType::Climax => "高潮",
            PlotElementType::Ending => "结局",
            PlotElementType::Other => "其他",
        }
    }
}

impl FromStr for PlotElementType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| DomainError::InvalidPlotType(s.to_string()))
    }
}

impl std::fmt::Display for PlotElementType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_format() {
        assert_eq!(
            serde_json::to_string(&ChapterStatus::InProgress).unwrap(),
            "\"in-progress\""
        );
        let status: ProjectStatus = serde_json::from_str("\"published\"").unwrap();
        assert_eq!(status, ProjectStatus::Published);
    }

    #[test]
    fn test_plot_type_uses_chinese_labels() {
        assert_eq!(serde_json::to_string(&PlotElementType::Climax).unwrap(), "\"高潮\"");
        let t: PlotElementType = serde_json::from_str("\"结局\"").unwrap();
        assert_eq!(t, PlotElementType::Ending);
        assert!("序章".parse::<PlotElementType>().is_err());
    }

    #[test]
    fn test_chapter_status_parse() {
        assert_eq!("edited".parse::<ChapterStatus>().unwrap(), ChapterStatus::Edited);
        assert!("archived".parse::<ChapterStatus>().is_err());
    }
}
