//! 应用层错误定义
//!
//! 视图动作的统一错误类型

use thiserror::Error;

use crate::application::ports::BookApiError;
use crate::domain::BookError;

/// 应用层错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApplicationError {
    /// 远端资源调用失败
    #[error(transparent)]
    Api(#[from] BookApiError),

    /// 表单校验错误
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 当前视图状态不允许该操作
    #[error("Invalid state: {0}")]
    InvalidState(String),
}

impl ApplicationError {
    /// 创建状态无效错误
    pub fn invalid_state(message: impl Into<String>) -> Self {
        Self::InvalidState(message.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Api(e) if e.is_not_found())
    }
}

impl From<BookError> for ApplicationError {
    fn from(err: BookError) -> Self {
        match err {
            BookError::InvalidId(id) => Self::Api(BookApiError::NotFound(id)),
            other => Self::ValidationError(other.to_string()),
        }
    }
}
