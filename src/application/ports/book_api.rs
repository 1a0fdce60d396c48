//! Book API Port - 远端图书资源抽象
//!
//! 定义图书集合的 HTTP 资源接口，具体实现在 infrastructure/adapters 层
//!
//! 远端 API:
//! - GET    /books                列出全部
//! - GET    /books/{id}           按 id 获取
//! - GET    /books/genre/{genre}  按类型筛选
//! - GET    /books/title/{title}  按标题搜索
//! - POST   /books                新建（返回 `{ id }`）
//! - PUT    /books/{id}           全量更新
//! - DELETE /books/{id}           删除

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{Book, BookDraft, BookId};

/// Book API 错误
///
/// 不做重试：单次失败直接返回给调用方
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookApiError {
    /// 记录不存在或 id 无效
    #[error("Book not found: {0}")]
    NotFound(String),

    /// 请求未能完成（连接失败、超时等）
    #[error("Network error: {0}")]
    Network(String),

    /// 非成功状态码
    #[error("Server error: HTTP {status}: {message}")]
    Server { status: u16, message: String },

    /// 响应体无法解析
    #[error("Invalid response: {0}")]
    Decode(String),
}

impl BookApiError {
    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Self::Server {
            status,
            message: message.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Book API Port
///
/// 图书资源客户端的抽象接口
#[async_trait]
pub trait BookApiPort: Send + Sync {
    /// 获取全部图书
    async fn list(&self) -> Result<Vec<Book>, BookApiError>;

    /// 按 id 获取
    async fn get(&self, id: BookId) -> Result<Book, BookApiError>;

    /// 按类型筛选
    async fn list_by_genre(&self, genre: &str) -> Result<Vec<Book>, BookApiError>;

    /// 按标题搜索
    async fn search_by_title(&self, title: &str) -> Result<Vec<Book>, BookApiError>;

    /// 新建图书，返回服务端分配的 id
    async fn create(&self, draft: &BookDraft) -> Result<BookId, BookApiError>;

    /// 全量替换
    async fn update(&self, book: &Book) -> Result<(), BookApiError>;

    /// 删除
    async fn delete(&self, id: BookId) -> Result<(), BookApiError>;
}
