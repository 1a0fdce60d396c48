//! Book Context - Book record

use serde::{Deserialize, Serialize};

use super::{progress_percentage, BookId};

/// 图书记录
///
/// 不变量:
/// - id 由服务端分配，创建后不可变（只读访问）
/// - reading_progress 形如 `74%`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    id: BookId,
    pub title: String,
    pub author: String,
    pub genre: String,
    #[serde(default)]
    pub chapters: Vec<u32>,
    #[serde(default)]
    pub summary: String,
    #[serde(default = "default_progress")]
    pub reading_progress: String,
    #[serde(default)]
    pub favorite: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
}

fn default_progress() -> String {
    "0%".to_string()
}

impl Book {
    /// 由服务端返回的 id 与草稿组装记录
    pub fn from_draft(id: BookId, draft: BookDraft) -> Self {
        Self {
            id,
            title: draft.title,
            author: draft.author,
            genre: draft.genre,
            chapters: draft.chapters,
            summary: draft.summary,
            reading_progress: draft.reading_progress,
            favorite: draft.favorite,
            cover_image: draft.cover_image,
        }
    }

    pub fn id(&self) -> BookId {
        self.id
    }

    /// 去掉 id 的可编辑副本
    pub fn to_draft(&self) -> BookDraft {
        BookDraft {
            title: self.title.clone(),
            author: self.author.clone(),
            genre: self.genre.clone(),
            chapters: self.chapters.clone(),
            summary: self.summary.clone(),
            reading_progress: self.reading_progress.clone(),
            favorite: self.favorite,
            cover_image: self.cover_image.clone(),
        }
    }

    /// 返回 favorite 取反后的完整副本（用于 PUT 全量更新）
    pub fn with_favorite_toggled(&self) -> Self {
        Self {
            favorite: !self.favorite,
            ..self.clone()
        }
    }

    /// 阅读进度整数值
    pub fn progress_percent(&self) -> u32 {
        progress_percentage(&self.reading_progress)
    }
}

/// 新建图书的请求体（不含 id）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookDraft {
    pub title: String,
    pub author: String,
    pub genre: String,
    #[serde(default)]
    pub chapters: Vec<u32>,
    #[serde(default)]
    pub summary: String,
    #[serde(default = "default_progress")]
    pub reading_progress: String,
    #[serde(default)]
    pub favorite: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
}

impl Default for BookDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            author: String::new(),
            genre: String::new(),
            chapters: Vec::new(),
            summary: String::new(),
            reading_progress: default_progress(),
            favorite: false,
            cover_image: None,
        }
    }
}
