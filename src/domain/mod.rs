//! Domain Layer - 领域层
//!
//! 包含两个限界上下文:
//! - World Context: 世界观设定
//! - Project Context: 作品、章节、大纲

pub mod project;
pub mod world;

mod entity_id;
mod errors;
mod line_splitter;
mod word_count;

pub use entity_id::EntityId;
pub use errors::DomainError;
pub use line_splitter::LineSplitter;
pub use word_count::count_words;
