//! 页面状态容器
//!
//! 每个页面一个结构体，持有加载/错误/成功提示/弹窗等本地状态，
//! 通过 async 方法驱动；页面之间不共享状态

mod banner;
mod chat_panel;
mod list_page;
mod modal;

pub use banner::{TransientBanner, DEFAULT_BANNER_TTL};
pub use chat_panel::{ChatPanel, DEFAULT_HISTORY_LIMIT};
pub use list_page::{
    ChapterListPage, ListPage, ListPageConfig, ProjectListPage, SortOrder, WorldListPage,
};
pub use modal::{ModalMode, ModalState};
