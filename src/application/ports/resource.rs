//! Resource Gateway Port - 资源增删改查抽象
//!
//! 世界、作品、章节列表页共用同一套网关接口；
//! 具体实现在 infrastructure 层（HTTP 客户端、离线内存后端）

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Serialize, Serializer};
use serde_json::Value;

use super::ApiError;
use crate::domain::project::{Chapter, NovelProject};
use crate::domain::world::World;
use crate::domain::EntityId;

/// 可通过列表页管理的资源
pub trait Resource:
    Clone + std::fmt::Debug + Send + Sync + Serialize + DeserializeOwned + 'static
{
    /// 资源中文名称（用于提示文案）
    const LABEL: &'static str;

    fn id(&self) -> &EntityId;

    /// 列表中显示的名称（筛选、排序依据）
    fn display_name(&self) -> &str;
}

impl Resource for World {
    const LABEL: &'static str = "世界";

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }
}

impl Resource for NovelProject {
    const LABEL: &'static str = "作品";

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.title
    }
}

impl Resource for Chapter {
    const LABEL: &'static str = "章节";

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.title
    }
}

/// 新建请求体
///
/// 序列化时去掉 `id` 字段，ID 由服务端分配
#[derive(Debug, Clone)]
pub struct NewResource<T>(T);

impl<T: Resource> NewResource<T> {
    pub fn new(entity: T) -> Self {
        Self(entity)
    }

    pub fn get(&self) -> &T {
        &self.0
    }

    pub fn into_inner(self) -> T {
        self.0
    }

    /// 转换为 JSON 请求体（不含 id）
    pub fn to_json(&self) -> Result<Value, serde_json::Error> {
        let mut value = serde_json::to_value(&self.0)?;
        if let Value::Object(map) = &mut value {
            map.remove("id");
        }
        Ok(value)
    }
}

impl<T: Resource> Serialize for NewResource<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json()
            .map_err(serde::ser::Error::custom)?
            .serialize(serializer)
    }
}

/// 分页参数
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub page_size: u32,
}

impl PageRequest {
    pub fn first(page_size: u32) -> Self {
        Self { page: 1, page_size }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::first(50)
    }
}

/// Resource Gateway Port
///
/// 写操作不返回实体：调用方总是重新拉取列表
#[async_trait]
pub trait ResourceGateway<T: Resource>: Send + Sync {
    /// 分页获取列表（列表项可能只含摘要字段）
    async fn list(&self, page: PageRequest) -> Result<Vec<T>, ApiError>;

    /// 获取完整详情
    async fn get(&self, id: &EntityId) -> Result<T, ApiError>;

    /// 新建
    async fn create(&self, payload: NewResource<T>) -> Result<(), ApiError>;

    /// 整体替换
    async fn update(&self, entity: &T) -> Result<(), ApiError>;

    /// 删除
    async fn delete(&self, id: &EntityId) -> Result<(), ApiError>;
}
