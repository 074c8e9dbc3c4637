//! Backend API Adapter
//!
//! 通过 reqwest 访问写作后端，实现资源网关与对话端口

mod chat;
mod client;
pub mod envelope;
mod resources;

pub use client::{HttpApiClient, HttpApiClientConfig};
pub use envelope::{ApiEnvelope, Paged};
pub use resources::HttpResourceGateway;
