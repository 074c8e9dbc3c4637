//! 应用层 - 页面与表单编排
//!
//! 包含：
//! - ports: 出站端口（资源网关、AI 对话、标题建议）
//! - pages: 页面状态容器（列表页 + 弹窗、对话面板）
//! - forms: 表单草稿与提交
//! - numeric_input / navigation: 独立的小型界面逻辑
//! - error: 应用层错误定义

pub mod error;
pub mod forms;
pub mod navigation;
pub mod numeric_input;
pub mod pages;
pub mod ports;

pub use error::ApplicationError;

pub use forms::{submit, ChapterForm, Form, OutlineForm, ProjectForm, WorldForm};
pub use navigation::{active_item, default_nav_items, is_active, NavItem};
pub use numeric_input::NumericInput;
pub use pages::{
    ChapterListPage, ChatPanel, ListPage, ListPageConfig, ModalMode, ModalState, ProjectListPage,
    SortOrder, TransientBanner, WorldListPage,
};
pub use ports::{
    ApiError, ChatContext, ChatMessage, ChatPort, ChatRequest, ChatRole, ChatStreamSink,
    NewResource, PageRequest, Resource, ResourceGateway, TitleRequest, TitleSuggester,
};
