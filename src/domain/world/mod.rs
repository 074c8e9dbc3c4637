//! World Context - 世界观设定限界上下文
//!
//! 职责:
//! - World 聚合（名称、描述、备注）
//! - 有序的世界元素列表

mod aggregate;
mod entities;
mod value_objects;

pub use aggregate::World;
pub use entities::WorldElement;
pub use value_objects::WorldElementType;
