//! 自动消失的提示条

use std::time::Duration;
use tokio::time::Instant;

/// 默认显示时长
pub const DEFAULT_BANNER_TTL: Duration = Duration::from_secs(2);

/// 限时提示
#[derive(Debug, Clone)]
pub struct TransientBanner {
    message: String,
    expires_at: Instant,
}

impl TransientBanner {
    pub fn new(message: impl Into<String>, ttl: Duration) -> Self {
        Self {
            message: message.into(),
            expires_at: Instant::now() + ttl,
        }
    }

    pub fn is_live(&self) -> bool {
        Instant::now() < self.expires_at
    }

    /// 未过期时返回文案
    pub fn message(&self) -> Option<&str> {
        self.is_live().then_some(self.message.as_str())
    }
}
