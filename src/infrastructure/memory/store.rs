//! In-Memory Resource Store

use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::application::ports::{ApiError, NewResource, PageRequest, Resource, ResourceGateway};
use crate::domain::EntityId;

/// 内存资源仓库
///
/// 模拟后端的行为：创建时分配自增数字 ID，找不到记录时返回业务码 404。
pub struct InMemoryStore<T> {
    items: DashMap<String, T>,
    next_id: AtomicU64,
}

impl<T: Resource> InMemoryStore<T> {
    pub fn new() -> Self {
        Self {
            items: DashMap::new(),
            next_id: AtomicU64::new(1),
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// 直接写入一条记录，返回分配的 ID
    pub fn insert(&self, payload: NewResource<T>) -> Result<EntityId, ApiError> {
        let id = EntityId::from(self.next_id.fetch_add(1, Ordering::SeqCst));

        let mut value = payload
            .to_json()
            .map_err(|e| ApiError::MalformedResponse(e.to_string()))?;
        if let serde_json::Value::Object(map) = &mut value {
            map.insert("id".to_string(), serde_json::Value::String(id.to_string()));
        }
        let entity: T =
            serde_json::from_value(value).map_err(|e| ApiError::MalformedResponse(e.to_string()))?;

        self.items.insert(id.to_string(), entity);
        Ok(id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn not_found(id: &EntityId) -> ApiError {
        ApiError::Application {
            code: 404,
            message: format!("{}不存在: {}", T::LABEL, id),
        }
    }
}

impl<T: Resource> Default for InMemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// 数字 ID 按数值排序，其余排在后面
fn sort_key(id: &EntityId) -> (u64, String) {
    (id.as_str().parse().unwrap_or(u64::MAX), id.to_string())
}

#[async_trait]
impl<T: Resource> ResourceGateway<T> for InMemoryStore<T> {
    async fn list(&self, page: PageRequest) -> Result<Vec<T>, ApiError> {
        let mut items: Vec<T> = self.items.iter().map(|entry| entry.value().clone()).collect();
        items.sort_by_key(|item| sort_key(item.id()));

        let skip = page.page.saturating_sub(1) as usize * page.page_size as usize;
        Ok(items
            .into_iter()
            .skip(skip)
            .take(page.page_size as usize)
            .collect())
    }

    async fn get(&self, id: &EntityId) -> Result<T, ApiError> {
        self.items
            .get(id.as_str())
            .map(|entry| entry.value().clone())
            .ok_or_else(|| Self::not_found(id))
    }

    async fn create(&self, payload: NewResource<T>) -> Result<(), ApiError> {
        let id = self.insert(payload)?;
        tracing::info!(label = T::LABEL, id = %id, "Resource created in memory");
        Ok(())
    }

    async fn update(&self, entity: &T) -> Result<(), ApiError> {
        let mut slot = self
            .items
            .get_mut(entity.id().as_str())
            .ok_or_else(|| Self::not_found(entity.id()))?;
        *slot = entity.clone();
        tracing::info!(label = T::LABEL, id = %entity.id(), "Resource updated in memory");
        Ok(())
    }

    async fn delete(&self, id: &EntityId) -> Result<(), ApiError> {
        self.items
            .remove(id.as_str())
            .map(|_| {
                tracing::info!(label = T::LABEL, id = %id, "Resource deleted in memory");
            })
            .ok_or_else(|| Self::not_found(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::world::World;

    #[tokio::test]
    async fn test_store_lifecycle() {
        let store = InMemoryStore::<World>::new();

        // Create
        store
            .create(NewResource::new(World::new("艾泽拉斯", "剑与魔法")))
            .await
            .unwrap();
        let worlds = store.list(PageRequest::default()).await.unwrap();
        assert_eq!(worlds.len(), 1);
        let id = worlds[0].id.clone();
        assert_eq!(id.as_str(), "1");

        // Update
        let mut world = store.get(&id).await.unwrap();
        world.description = "部落与联盟".to_string();
        store.update(&world).await.unwrap();
        assert_eq!(store.get(&id).await.unwrap().description, "部落与联盟");

        // Delete
        store.delete(&id).await.unwrap();
        assert!(store.is_empty());
        let err = store.delete(&id).await.unwrap_err();
        assert_eq!(err.user_message("删除世界失败"), "世界不存在: 1");
    }

    #[tokio::test]
    async fn test_list_is_ordered_and_paged() {
        let store = InMemoryStore::<World>::new();
        for i in 0..12 {
            store
                .insert(NewResource::new(World::new(format!("世界{}", i), "")))
                .unwrap();
        }

        let first = store.list(PageRequest::first(5)).await.unwrap();
        let ids: Vec<&str> = first.iter().map(|w| w.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3", "4", "5"]);

        let last = store
            .list(PageRequest {
                page: 3,
                page_size: 5,
            })
            .await
            .unwrap();
        assert_eq!(last.len(), 2);
        assert_eq!(last[1].name, "世界11");
    }

    #[tokio::test]
    async fn test_update_unknown_id_fails() {
        let store = InMemoryStore::<World>::new();
        let mut world = World::new("蒸汽之城", "");
        world.id = EntityId::new("99");
        assert!(matches!(
            store.update(&world).await,
            Err(ApiError::Application { code: 404, .. })
        ));
    }
}
