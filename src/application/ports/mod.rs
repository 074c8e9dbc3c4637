//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod api_error;
mod chat;
mod resource;
mod title_suggester;

pub use api_error::ApiError;
pub use chat::{ChatContext, ChatMessage, ChatPort, ChatRequest, ChatRole, ChatStreamSink};
pub use resource::{NewResource, PageRequest, Resource, ResourceGateway};
pub use title_suggester::{TitleRequest, TitleSuggester};
