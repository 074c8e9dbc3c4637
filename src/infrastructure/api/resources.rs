//! REST 资源网关
//!
//! 同一套 CRUD 约定覆盖世界观、作品与章节：
//! `GET {base}?page&pageSize`、`GET/PUT/DELETE {base}/{id}`、`POST {base}`

use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;
use std::marker::PhantomData;

use super::envelope::Paged;
use super::HttpApiClient;
use crate::application::ports::{ApiError, NewResource, PageRequest, Resource, ResourceGateway};
use crate::domain::project::{Chapter, NovelProject};
use crate::domain::world::World;
use crate::domain::EntityId;

/// 基于 HTTP 的资源网关
pub struct HttpResourceGateway<T> {
    client: HttpApiClient,
    collection: String,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Resource> HttpResourceGateway<T> {
    pub fn new(client: HttpApiClient, collection: impl Into<String>) -> Self {
        Self {
            client,
            collection: collection.into(),
            _marker: PhantomData,
        }
    }

    pub fn collection(&self) -> &str {
        &self.collection
    }

    fn item_path(&self, id: &EntityId) -> String {
        format!("{}/{}", self.collection, id)
    }
}

impl HttpResourceGateway<World> {
    pub fn worlds(client: HttpApiClient) -> Self {
        Self::new(client, "/worlds")
    }
}

impl HttpResourceGateway<NovelProject> {
    pub fn projects(client: HttpApiClient) -> Self {
        Self::new(client, "/projects")
    }
}

impl HttpResourceGateway<Chapter> {
    /// 某部作品下的章节
    pub fn chapters(client: HttpApiClient, project_id: &EntityId) -> Self {
        Self::new(client, format!("/projects/{}/chapters", project_id))
    }
}

#[async_trait]
impl<T: Resource> ResourceGateway<T> for HttpResourceGateway<T> {
    async fn list(&self, page: PageRequest) -> Result<Vec<T>, ApiError> {
        let query = [
            ("page", page.page.to_string()),
            ("pageSize", page.page_size.to_string()),
        ];
        let data: Option<Paged<T>> = self.client.get_json(&self.collection, &query).await?;
        Ok(data.map(Paged::into_records).unwrap_or_default())
    }

    async fn get(&self, id: &EntityId) -> Result<T, ApiError> {
        self.client
            .get_json(&self.item_path(id), &[])
            .await?
            .ok_or_else(|| ApiError::MalformedResponse(format!("{} {} has no data", T::LABEL, id)))
    }

    async fn create(&self, payload: NewResource<T>) -> Result<(), ApiError> {
        self.client
            .send_json::<_, Value>(Method::POST, &self.collection, &payload)
            .await?;
        tracing::info!(
            collection = %self.collection,
            name = %payload.get().display_name(),
            "Resource created"
        );
        Ok(())
    }

    async fn update(&self, entity: &T) -> Result<(), ApiError> {
        self.client
            .send_json::<_, Value>(Method::PUT, &self.item_path(entity.id()), entity)
            .await?;
        tracing::info!(collection = %self.collection, id = %entity.id(), "Resource updated");
        Ok(())
    }

    async fn delete(&self, id: &EntityId) -> Result<(), ApiError> {
        self.client
            .send_empty::<Value>(Method::DELETE, &self.item_path(id))
            .await?;
        tracing::info!(collection = %self.collection, id = %id, "Resource deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::api::HttpApiClientConfig;

    fn client() -> HttpApiClient {
        HttpApiClient::new(HttpApiClientConfig::default()).unwrap()
    }

    #[test]
    fn test_collection_paths() {
        assert_eq!(HttpResourceGateway::worlds(client()).collection(), "/worlds");
        assert_eq!(HttpResourceGateway::projects(client()).collection(), "/projects");

        let chapters = HttpResourceGateway::chapters(client(), &EntityId::from(7u64));
        assert_eq!(chapters.collection(), "/projects/7/chapters");
        assert_eq!(chapters.item_path(&EntityId::new("3")), "/projects/7/chapters/3");
    }
}
