//! Edit/Create View - 编辑与新建
//!
//! 模式由路由 id 决定：无 id 为新建模式（空表单），有 id 为编辑模式（拉取并回填）。
//! 删除分两步：先进入确认状态，确认后才发送 DELETE。

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{BookApiPort, NavigatorPort};
use crate::domain::book::{normalize_progress, parse_chapters};
use crate::domain::{Book, BookDraft, BookError, BookId};

/// 视图模式
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditMode {
    Create,
    /// 路由中的原始 id
    Edit(String),
}

/// 删除流程阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditStage {
    Editing,
    ConfirmingDelete,
}

/// 表单工作副本（字段均为用户输入的原始文本）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookForm {
    pub title: String,
    pub author: String,
    pub genre: String,
    /// 逗号分隔的章节编号
    pub chapters: String,
    pub summary: String,
    pub reading_progress: String,
    pub favorite: bool,
    pub cover_image: String,
}

impl BookForm {
    pub fn from_book(book: &Book) -> Self {
        Self {
            title: book.title.clone(),
            author: book.author.clone(),
            genre: book.genre.clone(),
            chapters: book
                .chapters
                .iter()
                .map(u32::to_string)
                .collect::<Vec<_>>()
                .join(", "),
            summary: book.summary.clone(),
            reading_progress: book.reading_progress.clone(),
            favorite: book.favorite,
            cover_image: book.cover_image.clone().unwrap_or_default(),
        }
    }

    /// 校验并转换为请求体
    pub fn to_draft(&self) -> Result<BookDraft, ApplicationError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(BookError::MissingTitle.into());
        }
        let author = self.author.trim();
        if author.is_empty() {
            return Err(BookError::MissingAuthor.into());
        }

        let cover_image = self.cover_image.trim();
        Ok(BookDraft {
            title: title.to_string(),
            author: author.to_string(),
            genre: self.genre.trim().to_string(),
            chapters: parse_chapters(&self.chapters)?,
            summary: self.summary.trim().to_string(),
            reading_progress: normalize_progress(&self.reading_progress)?,
            favorite: self.favorite,
            cover_image: (!cover_image.is_empty()).then(|| cover_image.to_string()),
        })
    }
}

/// 编辑/新建视图状态
pub struct EditView {
    api: Arc<dyn BookApiPort>,
    navigator: Arc<dyn NavigatorPort>,
    mode: EditMode,
    form: BookForm,
    stage: EditStage,
    loading: bool,
    error: Option<String>,
}

impl EditView {
    pub fn new(
        api: Arc<dyn BookApiPort>,
        navigator: Arc<dyn NavigatorPort>,
        route_id: Option<&str>,
    ) -> Self {
        let mode = match route_id {
            Some(id) => EditMode::Edit(id.to_string()),
            None => EditMode::Create,
        };
        let loading = matches!(mode, EditMode::Edit(_));

        Self {
            api,
            navigator,
            mode,
            form: BookForm::default(),
            stage: EditStage::Editing,
            loading,
            error: None,
        }
    }

    /// 挂载：编辑模式拉取记录并回填表单，失败时跳转 `/`；新建模式不发请求
    pub async fn mount(&mut self) -> Result<(), ApplicationError> {
        if self.mode == EditMode::Create {
            return Ok(());
        }

        let result = match self.target_id() {
            Ok(id) => self.api.get(id).await.map_err(ApplicationError::from),
            Err(e) => Err(e),
        };

        match result {
            Ok(book) => {
                self.form = BookForm::from_book(&book);
                self.loading = false;
                Ok(())
            }
            Err(err) => {
                tracing::warn!(mode = ?self.mode, error = %err, "Cannot load book for editing");
                self.navigator.push("/");
                Err(err)
            }
        }
    }

    /// 提交表单：新建模式 POST，编辑模式 PUT；成功后跳转详情页
    pub async fn submit(&mut self) -> Result<(), ApplicationError> {
        let result = self.save().await;
        match &result {
            Ok(id) => {
                self.error = None;
                self.navigator.push(&format!("/book/{}", id));
            }
            Err(err) => {
                tracing::warn!(mode = ?self.mode, error = %err, "Failed to save book");
                self.error = Some(err.to_string());
            }
        }
        result.map(|_| ())
    }

    async fn save(&self) -> Result<BookId, ApplicationError> {
        let draft = self.form.to_draft()?;
        match &self.mode {
            EditMode::Create => {
                let id = self.api.create(&draft).await?;
                tracing::info!(book_id = %id, title = %draft.title, "Book created");
                Ok(id)
            }
            EditMode::Edit(_) => {
                let id = self.target_id()?;
                self.api.update(&Book::from_draft(id, draft)).await?;
                tracing::info!(book_id = %id, "Book updated");
                Ok(id)
            }
        }
    }

    /// 点击删除：仅进入确认状态，不发送请求
    pub fn request_delete(&mut self) -> Result<(), ApplicationError> {
        if self.mode == EditMode::Create {
            return Err(ApplicationError::invalid_state(
                "Cannot delete a book that has not been created",
            ));
        }
        self.stage = EditStage::ConfirmingDelete;
        Ok(())
    }

    /// 取消删除：回到表单，表单内容不变
    pub fn cancel_delete(&mut self) {
        self.stage = EditStage::Editing;
    }

    /// 确认删除：发送 DELETE 并跳转 `/`；不在确认状态时不做任何事
    pub async fn confirm_delete(&mut self) -> Result<(), ApplicationError> {
        if self.stage != EditStage::ConfirmingDelete {
            return Err(ApplicationError::invalid_state("Delete was not requested"));
        }

        let result = match self.target_id() {
            Ok(id) => self.api.delete(id).await.map_err(ApplicationError::from),
            Err(e) => Err(e),
        };

        match result {
            Ok(()) => {
                tracing::info!(mode = ?self.mode, "Book deleted");
                self.navigator.push("/");
                Ok(())
            }
            Err(err) => {
                tracing::warn!(mode = ?self.mode, error = %err, "Failed to delete book");
                self.stage = EditStage::Editing;
                self.error = Some(err.to_string());
                Err(err)
            }
        }
    }

    fn target_id(&self) -> Result<BookId, ApplicationError> {
        match &self.mode {
            EditMode::Edit(raw) => raw.parse::<BookId>().map_err(ApplicationError::from),
            EditMode::Create => Err(ApplicationError::invalid_state("No book id in create mode")),
        }
    }

    pub fn heading(&self) -> &'static str {
        match self.mode {
            EditMode::Create => "Add New Book",
            EditMode::Edit(_) => "Edit Book",
        }
    }

    pub fn form_mut(&mut self) -> &mut BookForm {
        &mut self.form
    }

    /// 整体替换表单（HTTP 层提交的表单数据）
    pub fn set_form(&mut self, form: BookForm) {
        self.form = form;
    }

    // Getters
    pub fn mode(&self) -> &EditMode {
        &self.mode
    }

    pub fn form(&self) -> &BookForm {
        &self.form
    }

    pub fn stage(&self) -> EditStage {
        self.stage
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
