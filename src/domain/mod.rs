//! Domain Layer - 领域层
//!
//! Book Context: 图书记录及阅读进度规则

pub mod book;

pub use book::{Book, BookDraft, BookError, BookId};
