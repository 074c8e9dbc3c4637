//! 应用层错误定义
//!
//! 表单、页面状态与命令行共用的错误类型

use thiserror::Error;

use crate::application::ports::ApiError;
use crate::domain::DomainError;

/// 应用层错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApplicationError {
    /// 表单校验失败
    #[error("Validation error: {field}: {message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    /// 当前页面状态不允许该操作
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// 领域值解析失败
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// 远端接口错误
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl ApplicationError {
    /// 创建校验错误
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }

    /// 创建状态无效错误
    pub fn invalid_state(message: impl Into<String>) -> Self {
        Self::InvalidState(message.into())
    }

    /// 面向用户的提示文案
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApplicationError::Validation { message, .. } => message.clone(),
            ApplicationError::InvalidState(message) => message.clone(),
            ApplicationError::Domain(err) => err.to_string(),
            ApplicationError::Api(err) => err.user_message(fallback),
        }
    }
}
