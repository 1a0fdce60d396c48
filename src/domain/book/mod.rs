//! Book Context - 图书限界上下文
//!
//! 职责:
//! - Book 记录（服务端分配 id）
//! - 阅读进度百分比解析与规范化
//! - 表单校验

mod aggregate;
mod errors;
mod value_objects;

pub use aggregate::{Book, BookDraft};
pub use errors::BookError;
pub use value_objects::{
    normalize_progress, parse_chapters, progress_percentage, BookId, GENRES,
};
