//! API Error - 远端接口调用错误

use thiserror::Error;

/// 后端接口错误
///
/// 覆盖传输失败、HTTP 非 2xx、业务码非 200、响应体异常四类
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timeout")]
    Timeout,

    #[error("HTTP {status}: {message}")]
    HttpStatus { status: u16, message: String },

    #[error("API error {code}: {message}")]
    Application { code: i64, message: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Response body is not readable")]
    StreamUnavailable,

    #[error("Request cancelled")]
    Cancelled,
}

impl ApiError {
    /// 服务端返回的提示信息（如有）
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Application { message, .. } | ApiError::HttpStatus { message, .. }
                if !message.trim().is_empty() =>
            {
                Some(message.as_str())
            }
            _ => None,
        }
    }

    /// 面向用户的提示文案：优先使用服务端信息，否则使用本地化兜底文案
    pub fn user_message(&self, fallback: &str) -> String {
        self.server_message()
            .map(str::to_string)
            .unwrap_or_else(|| fallback.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefers_server_message() {
        let err = ApiError::Application {
            code: 400,
            message: "名称已存在".into(),
        };
        assert_eq!(err.user_message("保存世界失败"), "名称已存在");
    }

    #[test]
    fn test_user_message_falls_back() {
        assert_eq!(ApiError::Timeout.user_message("保存世界失败"), "保存世界失败");

        let err = ApiError::HttpStatus {
            status: 500,
            message: "  ".into(),
        };
        assert_eq!(err.user_message("删除世界失败"), "删除世界失败");
    }
}
