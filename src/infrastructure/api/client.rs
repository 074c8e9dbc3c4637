//! HTTP API Client - 调用写作后端 REST 接口
//!
//! 所有 JSON 接口返回统一包装 `{code, message, data}`，
//! 由 [`super::envelope`] 解析；对话流接口单独处理（见 `chat.rs`）。

use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

use super::envelope;
use crate::application::ports::ApiError;
use crate::config::ApiConfig;

/// HTTP API 客户端配置
#[derive(Debug, Clone)]
pub struct HttpApiClientConfig {
    /// 后端基础 URL（含 `/api` 前缀）
    pub base_url: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

impl Default for HttpApiClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080/api".to_string(),
            timeout_secs: 30,
        }
    }
}

impl HttpApiClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl From<&ApiConfig> for HttpApiClientConfig {
    fn from(config: &ApiConfig) -> Self {
        Self::new(config.base_url.clone()).with_timeout(config.timeout_secs)
    }
}

/// HTTP API 客户端
///
/// 内部 `reqwest::Client` 自带连接池，克隆开销很小，可在各网关间共享。
#[derive(Debug, Clone)]
pub struct HttpApiClient {
    client: Client,
    config: HttpApiClientConfig,
}

impl HttpApiClient {
    /// 创建新的客户端
    ///
    /// 只设置连接超时；整体超时按请求设置，流式对话不受其限制。
    pub fn new(config: HttpApiClientConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// 使用默认配置创建客户端
    pub fn with_default_config() -> Result<Self, ApiError> {
        Self::new(HttpApiClientConfig::default())
    }

    pub fn config(&self) -> &HttpApiClientConfig {
        &self.config
    }

    /// 拼接完整 URL，`path` 以 `/` 开头
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    fn timeout(&self) -> Duration {
        Duration::from_secs(self.config.timeout_secs)
    }

    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client.request(method, self.url(path))
    }

    /// GET 并解析包装，返回 `data`
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<Option<T>, ApiError> {
        let request = self.request(Method::GET, path).query(query);
        self.execute(Method::GET, path, request).await
    }

    /// 发送带 JSON 请求体的请求
    pub(crate) async fn send_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<Option<T>, ApiError> {
        let request = self.request(method.clone(), path).json(body);
        self.execute(method, path, request).await
    }

    /// 发送不带请求体的请求（DELETE 等）
    pub(crate) async fn send_empty<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
    ) -> Result<Option<T>, ApiError> {
        let request = self.request(method.clone(), path);
        self.execute(method, path, request).await
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        request: RequestBuilder,
    ) -> Result<Option<T>, ApiError> {
        tracing::debug!(method = %method, path = %path, "Sending API request");

        let response = request
            .timeout(self.timeout())
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.text().await.map_err(map_transport_error)?;

        let result = envelope::decode(status.as_u16(), &body);
        if let Err(e) = &result {
            tracing::warn!(
                method = %method,
                path = %path,
                status = status.as_u16(),
                error = %e,
                "API request failed"
            );
        }
        result
    }

    /// 打开一个流式响应，非 2xx 状态转为错误
    pub(crate) async fn open_stream<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Response, ApiError> {
        tracing::debug!(path = %path, "Opening response stream");

        let response = self
            .request(Method::POST, path)
            .json(body)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(envelope::status_error(status.as_u16(), &body));
        }
        Ok(response)
    }
}

/// 传输层错误映射
pub(crate) fn map_transport_error(e: reqwest::Error) -> ApiError {
    if e.is_timeout() {
        ApiError::Timeout
    } else if e.is_connect() {
        ApiError::Network(format!("Cannot connect to backend: {}", e))
    } else {
        ApiError::Network(e.to_string())
    }
}
