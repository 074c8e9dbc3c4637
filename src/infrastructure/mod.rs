//! Infrastructure Layer - 基础设施层
//!
//! 提供所有端口的具体实现

pub mod adapters;
pub mod api;
pub mod memory;

pub use adapters::{MockTitleSuggester, MockTitleSuggesterConfig};
pub use api::{HttpApiClient, HttpApiClientConfig, HttpResourceGateway};
pub use memory::{InMemoryBackend, InMemoryStore};
