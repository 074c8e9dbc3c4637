//! Memory Layer - In-Memory Backend
//!
//! 离线模式与测试使用的内存实现，行为与 HTTP 后端保持一致

mod backend;
mod store;

pub use backend::InMemoryBackend;
pub use store::InMemoryStore;
