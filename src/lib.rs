//! Inkdesk - AI 小说写作工作台客户端
//!
//! 架构设计: DDD + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - World Context: 世界观与设定元素
//! - Project Context: 作品、章节、大纲
//!
//! 应用层 (application/):
//! - Ports: 端口定义（ResourceGateway, ChatPort, TitleSuggester）
//! - Pages: 列表页 + 弹窗状态机、AI 对话面板
//! - Forms: 表单草稿、校验与提交
//!
//! 基础设施层 (infrastructure/):
//! - Api: 基于 reqwest 的 REST 客户端与流式对话
//! - Memory: 离线模式的内存后端
//! - Adapters: 书名建议占位实现

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
