//! Project Context - 作品限界上下文
//!
//! 职责:
//! - NovelProject 聚合与元信息
//! - 章节、大纲节点实体

mod aggregate;
mod entities;
mod value_objects;

pub use aggregate::{NovelProject, ProjectMetadata, DEFAULT_COVER_GRADIENT};
pub use entities::{Chapter, OutlineNode};
pub use value_objects::{ChapterStatus, PlotElementType, ProjectStatus};
