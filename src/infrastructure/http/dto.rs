//! Data Transfer Objects - 表单提交数据

use serde::Deserialize;

use crate::application::BookForm;

/// 编辑/新建表单（`application/x-www-form-urlencoded`）
///
/// 复选框未勾选时浏览器不提交该字段；`submission` 不属于表单内容
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct BookFormInput {
    pub title: String,
    pub author: String,
    pub genre: String,
    pub chapters: String,
    pub summary: String,
    pub reading_progress: String,
    pub favorite: Option<String>,
    pub cover_image: String,
    /// 一次性提交令牌
    pub submission: String,
}

impl From<BookFormInput> for BookForm {
    fn from(input: BookFormInput) -> Self {
        Self {
            title: input.title,
            author: input.author,
            genre: input.genre,
            chapters: input.chapters,
            summary: input.summary,
            reading_progress: input.reading_progress,
            favorite: input.favorite.is_some(),
            cover_image: input.cover_image,
        }
    }
}

/// 详情页搜索框
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SearchInput {
    pub query: String,
}
