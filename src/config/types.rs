//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;
use std::time::Duration;

use crate::application::pages::ListPageConfig;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 后端接口配置
    #[serde(default)]
    pub api: ApiConfig,

    /// 界面行为配置
    #[serde(default)]
    pub ui: UiConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 后端接口配置
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// 接口基础 URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// 请求超时时间（秒）
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:8080/api".to_string()
}

fn default_timeout() -> u64 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

/// 界面行为配置
#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    /// 列表每页条数
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// 成功提示显示时长（毫秒）
    #[serde(default = "default_banner_ttl")]
    pub banner_ttl_ms: u64,

    /// 对话历史条数
    #[serde(default = "default_chat_history_limit")]
    pub chat_history_limit: u32,

    /// 标题建议的模拟延迟（毫秒）
    #[serde(default = "default_suggestion_delay")]
    pub suggestion_delay_ms: u64,
}

fn default_page_size() -> u32 {
    50
}

fn default_banner_ttl() -> u64 {
    2000
}

fn default_chat_history_limit() -> u32 {
    50
}

fn default_suggestion_delay() -> u64 {
    800
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            banner_ttl_ms: default_banner_ttl(),
            chat_history_limit: default_chat_history_limit(),
            suggestion_delay_ms: default_suggestion_delay(),
        }
    }
}

impl UiConfig {
    /// 列表页配置
    pub fn list_page(&self) -> ListPageConfig {
        ListPageConfig {
            page_size: self.page_size,
            banner_ttl: Duration::from_millis(self.banner_ttl_ms),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}
