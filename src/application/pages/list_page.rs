//! 资源列表页状态
//!
//! 流程：拉取列表 → 打开弹窗 → 表单提交 → 网关写入 → 重新拉取列表。
//! 列表只通过整体重新拉取来更新，从不在本地拼接，失败时保留原数据。

use std::sync::Arc;
use std::time::Duration;

use crate::application::error::ApplicationError;
use crate::application::forms::Form;
use crate::application::pages::banner::{TransientBanner, DEFAULT_BANNER_TTL};
use crate::application::pages::modal::{ModalMode, ModalState};
use crate::application::ports::{ApiError, NewResource, PageRequest, Resource, ResourceGateway};
use crate::domain::project::{Chapter, NovelProject};
use crate::domain::world::World;
use crate::domain::EntityId;

/// 世界列表页
pub type WorldListPage = ListPage<World>;

/// 作品列表页
pub type ProjectListPage = ListPage<NovelProject>;

/// 章节列表页
pub type ChapterListPage = ListPage<Chapter>;

/// 列表页配置
#[derive(Debug, Clone)]
pub struct ListPageConfig {
    /// 每页条数
    pub page_size: u32,
    /// 成功提示显示时长
    pub banner_ttl: Duration,
}

impl Default for ListPageConfig {
    fn default() -> Self {
        Self {
            page_size: 50,
            banner_ttl: DEFAULT_BANNER_TTL,
        }
    }
}

/// 列表排序方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// 服务端返回顺序
    #[default]
    Default,
    NameAsc,
    NameDesc,
}

impl std::str::FromStr for SortOrder {
    type Err = ApplicationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(SortOrder::Default),
            "name" | "name-asc" => Ok(SortOrder::NameAsc),
            "name-desc" => Ok(SortOrder::NameDesc),
            other => Err(ApplicationError::validation(
                "sort",
                format!("未知的排序方式: {}", other),
            )),
        }
    }
}

/// 资源列表页
pub struct ListPage<T: Resource> {
    gateway: Arc<dyn ResourceGateway<T>>,
    config: ListPageConfig,
    items: Vec<T>,
    loading: bool,
    error: Option<String>,
    alert: Option<String>,
    success: Option<TransientBanner>,
    modal: ModalState<T>,
    filter: String,
    sort: SortOrder,
}

impl<T: Resource> ListPage<T> {
    pub fn new(gateway: Arc<dyn ResourceGateway<T>>, config: ListPageConfig) -> Self {
        Self {
            gateway,
            config,
            items: Vec::new(),
            loading: false,
            error: None,
            alert: None,
            success: None,
            modal: ModalState::Closed,
            filter: String::new(),
            sort: SortOrder::Default,
        }
    }

    // ------------------------------------------------------------------
    // 读取状态
    // ------------------------------------------------------------------

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// 持续显示的错误，直到下一次操作
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// 弹出式提示（获取详情失败时使用）
    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    /// 成功提示，超时后自动消失
    pub fn success_message(&self) -> Option<&str> {
        self.success.as_ref().and_then(TransientBanner::message)
    }

    pub fn modal(&self) -> &ModalState<T> {
        &self.modal
    }

    pub fn find(&self, id: &EntityId) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    // ------------------------------------------------------------------
    // 视图状态（只影响展示，不改动列表数据）
    // ------------------------------------------------------------------

    pub fn set_filter(&mut self, filter: impl Into<String>) {
        self.filter = filter.into();
    }

    pub fn set_sort(&mut self, sort: SortOrder) {
        self.sort = sort;
    }

    /// 按筛选与排序得到的展示列表
    pub fn visible_items(&self) -> Vec<&T> {
        let needle = self.filter.trim().to_lowercase();
        let mut visible: Vec<&T> = self
            .items
            .iter()
            .filter(|item| {
                needle.is_empty() || item.display_name().to_lowercase().contains(&needle)
            })
            .collect();

        match self.sort {
            SortOrder::Default => {}
            SortOrder::NameAsc => {
                visible.sort_by(|a, b| a.display_name().cmp(b.display_name()))
            }
            SortOrder::NameDesc => {
                visible.sort_by(|a, b| b.display_name().cmp(a.display_name()))
            }
        }

        visible
    }

    // ------------------------------------------------------------------
    // 列表
    // ------------------------------------------------------------------

    /// 拉取第一页并整体替换列表；失败时设置错误信息
    pub async fn fetch_list(&mut self) -> Result<(), ApplicationError> {
        self.clear_messages();
        self.load().await.map_err(ApplicationError::from)
    }

    async fn load(&mut self) -> Result<(), ApiError> {
        self.loading = true;
        let result = self
            .gateway
            .list(PageRequest::first(self.config.page_size))
            .await;
        self.loading = false;

        match result {
            Ok(items) => {
                tracing::debug!(resource = T::LABEL, count = items.len(), "List fetched");
                self.items = items;
                Ok(())
            }
            Err(e) => {
                tracing::warn!(resource = T::LABEL, error = %e, "Failed to fetch list");
                self.error = Some(e.user_message(&format!("获取{}列表失败", T::LABEL)));
                Err(e)
            }
        }
    }

    // ------------------------------------------------------------------
    // 弹窗
    // ------------------------------------------------------------------

    pub fn open_add(&mut self) {
        self.clear_messages();
        self.modal = ModalState::Add;
    }

    /// 先获取完整详情再打开编辑弹窗（列表中只有摘要）
    pub async fn handle_edit(&mut self, id: &EntityId) -> Result<(), ApplicationError> {
        self.clear_messages();

        match self.gateway.get(id).await {
            Ok(entity) => {
                self.modal = ModalState::Edit(entity);
                Ok(())
            }
            Err(e) => {
                tracing::warn!(resource = T::LABEL, id = %id, error = %e, "Failed to fetch detail");
                self.alert = Some(e.user_message(&format!("获取{}详情失败", T::LABEL)));
                self.modal = ModalState::Closed;
                Err(e.into())
            }
        }
    }

    pub fn open_delete(&mut self, entity: T) {
        self.clear_messages();
        self.modal = ModalState::Delete(entity);
    }

    /// 关闭弹窗，总是回到 `Add` 模式且不再指向任何实体
    pub fn close_modal(&mut self) {
        self.modal.close();
    }

    // ------------------------------------------------------------------
    // 写操作
    // ------------------------------------------------------------------

    /// 保存表单草稿
    ///
    /// - Add：去掉客户端 id 后新建
    /// - Edit：按 id 整体替换
    pub async fn handle_save(&mut self, draft: T) -> Result<(), ApplicationError> {
        self.clear_messages();

        let mode = self.modal.mode();
        let result = match &self.modal {
            ModalState::Add => self.gateway.create(NewResource::new(draft)).await,
            ModalState::Edit(current) => {
                if draft.id() != current.id() {
                    return Err(ApplicationError::invalid_state(format!(
                        "草稿 id {} 与正在编辑的{} {} 不一致",
                        draft.id(),
                        T::LABEL,
                        current.id()
                    )));
                }
                self.gateway.update(&draft).await
            }
            ModalState::Closed | ModalState::Delete(_) => {
                return Err(ApplicationError::invalid_state("没有打开的新建或编辑弹窗"));
            }
        };

        match result {
            Ok(()) => {
                let message = match mode {
                    ModalMode::Edit => format!("{}更新成功", T::LABEL),
                    _ => format!("{}创建成功", T::LABEL),
                };
                tracing::info!(resource = T::LABEL, mode = ?mode, "Saved");
                self.finish_mutation(message).await;
                Ok(())
            }
            Err(e) => {
                tracing::warn!(resource = T::LABEL, mode = ?mode, error = %e, "Save failed");
                self.error = Some(e.user_message(&format!("保存{}失败", T::LABEL)));
                Err(e.into())
            }
        }
    }

    /// 校验表单后按当前弹窗模式保存，校验失败时不发请求
    pub async fn submit_form<Fm>(&mut self, form: &Fm) -> Result<(), ApplicationError>
    where
        Fm: Form<Draft = T>,
    {
        let draft = form.validated().inspect_err(|e| {
            self.error = Some(e.user_message(&format!("保存{}失败", T::LABEL)));
        })?;
        self.handle_save(draft).await
    }

    /// 确认删除弹窗中的实体
    pub async fn handle_confirm_delete(&mut self) -> Result<(), ApplicationError> {
        self.clear_messages();

        let id = match &self.modal {
            ModalState::Delete(entity) => entity.id().clone(),
            _ => return Err(ApplicationError::invalid_state("没有打开的删除确认弹窗")),
        };

        match self.gateway.delete(&id).await {
            Ok(()) => {
                tracing::info!(resource = T::LABEL, id = %id, "Deleted");
                self.finish_mutation(format!("{}删除成功", T::LABEL)).await;
                Ok(())
            }
            Err(e) => {
                tracing::warn!(resource = T::LABEL, id = %id, error = %e, "Delete failed");
                self.error = Some(e.user_message(&format!("删除{}失败", T::LABEL)));
                Err(e.into())
            }
        }
    }

    /// 写操作成功：关闭弹窗、显示提示、重新拉取列表
    async fn finish_mutation(&mut self, message: String) {
        self.modal.close();
        self.success = Some(TransientBanner::new(message, self.config.banner_ttl));
        // 刷新失败时错误已写入页面状态
        let _ = self.load().await;
    }

    fn clear_messages(&mut self) {
        self.error = None;
        self.alert = None;
        self.success = None;
    }
}
