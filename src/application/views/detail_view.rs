//! Detail View - 图书详情
//!
//! 挂载时按路由 id 拉取图书，任何失败都回到列表首页。
//! 收藏切换在服务端确认后才更新本地副本。

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{BookApiPort, NavigatorPort};
use crate::domain::{Book, BookId};

/// 详情视图状态
pub struct DetailView {
    api: Arc<dyn BookApiPort>,
    navigator: Arc<dyn NavigatorPort>,
    route_id: String,
    book: Option<Book>,
    loading: bool,
    search_query: String,
    error: Option<String>,
}

impl DetailView {
    pub fn new(
        api: Arc<dyn BookApiPort>,
        navigator: Arc<dyn NavigatorPort>,
        route_id: impl Into<String>,
    ) -> Self {
        Self {
            api,
            navigator,
            route_id: route_id.into(),
            book: None,
            loading: true,
            search_query: String::new(),
            error: None,
        }
    }

    /// 挂载：拉取图书；id 无效、不存在或请求失败时跳转 `/`
    pub async fn mount(&mut self) -> Result<(), ApplicationError> {
        let result = match self.route_id.parse::<BookId>() {
            Ok(id) => self.api.get(id).await.map_err(ApplicationError::from),
            Err(e) => Err(e.into()),
        };

        match result {
            Ok(book) => {
                self.book = Some(book);
                self.loading = false;
                Ok(())
            }
            Err(err) => {
                tracing::warn!(route_id = %self.route_id, error = %err, "Book unavailable, returning to list");
                self.navigator.push("/");
                Err(err)
            }
        }
    }

    /// 切换收藏：提交取反后的完整记录，成功后才更新本地副本
    pub async fn toggle_favorite(&mut self) -> Result<(), ApplicationError> {
        let updated = self
            .book
            .as_ref()
            .map(Book::with_favorite_toggled)
            .ok_or_else(|| ApplicationError::invalid_state("Book is not loaded"))?;

        match self.api.update(&updated).await {
            Ok(()) => {
                tracing::info!(book_id = %updated.id(), favorite = updated.favorite, "Favorite toggled");
                self.error = None;
                self.book = Some(updated);
                Ok(())
            }
            Err(err) => {
                tracing::warn!(book_id = %updated.id(), error = %err, "Failed to toggle favorite");
                self.error = Some(err.to_string());
                Err(err.into())
            }
        }
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    /// 提交搜索：跳转到 `/?search=<编码后的文本>`
    pub fn submit_search(&self) {
        let query = self.search_query.trim();
        if query.is_empty() {
            self.navigator.push("/");
        } else {
            self.navigator
                .push(&format!("/?search={}", urlencoding::encode(query)));
        }
    }

    /// 收藏按钮文案（反映当前已确认的状态）
    pub fn favorite_label(&self) -> &'static str {
        match &self.book {
            Some(book) if book.favorite => "Remove from Favorites",
            _ => "Add to Favorites",
        }
    }

    /// 进度条宽度（百分比，最大 100）
    pub fn progress_width(&self) -> u32 {
        self.book
            .as_ref()
            .map(|b| b.progress_percent().min(100))
            .unwrap_or(0)
    }

    pub fn edit_path(&self) -> Option<String> {
        self.book.as_ref().map(|b| format!("/edit/{}", b.id()))
    }

    // Getters
    pub fn book(&self) -> Option<&Book> {
        self.book.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::BookApiError;
    use crate::domain::BookDraft;
    use crate::infrastructure::memory::{ApiCall, InMemoryBookApi, RecordingNavigator};

    fn book(id: u64, favorite: bool, progress: &str) -> Book {
        Book::from_draft(
            BookId::new(id),
            BookDraft {
                title: "Test Book".to_string(),
                author: "Test Author".to_string(),
                genre: "Fiction".to_string(),
                chapters: vec![1, 2, 3, 4, 5],
                summary: "Test summary".to_string(),
                reading_progress: progress.to_string(),
                favorite,
                cover_image: None,
            },
        )
    }

    fn setup(books: Vec<Book>, route_id: &str) -> (Arc<InMemoryBookApi>, Arc<RecordingNavigator>, DetailView) {
        let api = InMemoryBookApi::with_books(books).arc();
        let navigator = Arc::new(RecordingNavigator::new());
        let view = DetailView::new(api.clone(), navigator.clone(), route_id);
        (api, navigator, view)
    }

    #[tokio::test]
    async fn test_mount_loads_book() {
        let (api, navigator, mut view) = setup(vec![book(157, false, "74%")], "157");
        assert!(view.is_loading());

        view.mount().await.unwrap();

        assert!(!view.is_loading());
        assert_eq!(view.book().unwrap().title, "Test Book");
        assert_eq!(view.progress_width(), 74);
        assert_eq!(view.edit_path().as_deref(), Some("/edit/157"));
        assert_eq!(api.calls(), vec![ApiCall::Get(BookId::new(157))]);
        assert!(navigator.history().is_empty());
    }

    #[tokio::test]
    async fn test_not_found_redirects_home() {
        let (_api, navigator, mut view) = setup(vec![], "157");

        let err = view.mount().await.unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(navigator.last().as_deref(), Some("/"));
    }

    #[tokio::test]
    async fn test_network_failure_redirects_home() {
        let (api, navigator, mut view) = setup(vec![book(157, false, "0%")], "157");
        api.fail_next(BookApiError::Network("connection reset".to_string()));

        assert!(view.mount().await.is_err());
        assert_eq!(navigator.last().as_deref(), Some("/"));
    }

    #[tokio::test]
    async fn test_invalid_id_redirects_without_request() {
        let (api, navigator, mut view) = setup(vec![], "not-a-number");

        assert!(view.mount().await.is_err());
        assert!(api.calls().is_empty());
        assert_eq!(navigator.last().as_deref(), Some("/"));
    }

    #[tokio::test]
    async fn test_toggle_favorite_sends_flipped_value() {
        let (api, _navigator, mut view) = setup(vec![book(157, false, "0%")], "157");
        view.mount().await.unwrap();
        assert_eq!(view.favorite_label(), "Add to Favorites");

        view.toggle_favorite().await.unwrap();

        let calls = api.calls();
        match calls.last() {
            Some(ApiCall::Update(sent)) => {
                assert_eq!(sent.id(), BookId::new(157));
                assert!(sent.favorite);
            }
            other => panic!("expected update call, got {:?}", other),
        }
        assert!(view.book().unwrap().favorite);
        assert_eq!(view.favorite_label(), "Remove from Favorites");

        view.toggle_favorite().await.unwrap();
        assert!(!api.book(BookId::new(157)).unwrap().favorite);
    }

    #[tokio::test]
    async fn test_failed_toggle_keeps_confirmed_state() {
        let (api, _navigator, mut view) = setup(vec![book(157, false, "0%")], "157");
        view.mount().await.unwrap();

        api.fail_next(BookApiError::server(500, "boom"));
        assert!(view.toggle_favorite().await.is_err());

        assert!(!view.book().unwrap().favorite);
        assert_eq!(view.favorite_label(), "Add to Favorites");
        assert!(view.error().is_some());
    }

    #[tokio::test]
    async fn test_toggle_before_load_is_rejected() {
        let (api, _navigator, mut view) = setup(vec![], "157");

        let err = view.toggle_favorite().await.unwrap_err();

        assert!(matches!(err, ApplicationError::InvalidState(_)));
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_search_navigates_with_encoded_query() {
        let (_api, navigator, mut view) = setup(vec![book(157, false, "0%")], "157");
        view.mount().await.unwrap();

        view.set_search_query("Animal Farm");
        view.submit_search();
        assert_eq!(navigator.last().as_deref(), Some("/?search=Animal%20Farm"));

        view.set_search_query("  ");
        view.submit_search();
        assert_eq!(navigator.last().as_deref(), Some("/"));
    }

    #[tokio::test]
    async fn test_progress_width_is_capped() {
        let (_api, _navigator, mut view) = setup(vec![book(1, false, "250%")], "1");
        view.mount().await.unwrap();
        assert_eq!(view.progress_width(), 100);
    }
}
