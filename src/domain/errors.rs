//! Domain Errors

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("无效的章节状态: {0}")]
    InvalidChapterStatus(String),

    #[error("无效的作品状态: {0}")]
    InvalidProjectStatus(String),

    #[error("无效的世界元素类型: {0}")]
    InvalidElementType(String),

    #[error("无效的情节类型: {0}")]
    InvalidPlotType(String),
}
