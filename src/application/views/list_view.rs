//! List View - 图书列表
//!
//! 挂载时拉取全部图书；支持按类型筛选、按标题搜索（显式提交）、清除筛选

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{BookApiError, BookApiPort};
use crate::domain::book::progress_percentage;
use crate::domain::Book;

/// 当前生效的筛选方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListFilter {
    All,
    Genre,
    Search,
}

impl ListFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListFilter::All => "all",
            ListFilter::Genre => "genre",
            ListFilter::Search => "search",
        }
    }
}

/// 列表视图状态
pub struct ListView {
    api: Arc<dyn BookApiPort>,
    books: Vec<Book>,
    loading: bool,
    search_query: String,
    selected_genre: String,
    current_filter: ListFilter,
    genre_modal_open: bool,
    error: Option<String>,
}

impl ListView {
    pub fn new(api: Arc<dyn BookApiPort>) -> Self {
        Self {
            api,
            books: Vec::new(),
            loading: true,
            search_query: String::new(),
            selected_genre: String::new(),
            current_filter: ListFilter::All,
            genre_modal_open: false,
            error: None,
        }
    }

    /// 挂载：带 `search` 参数时直接执行标题搜索，否则拉取全部
    pub async fn mount(&mut self, initial_search: Option<&str>) -> Result<(), ApplicationError> {
        match initial_search.map(str::trim).filter(|q| !q.is_empty()) {
            Some(query) => {
                self.search_query = query.to_string();
                self.search().await
            }
            None => self.load_all().await,
        }
    }

    /// 拉取全部图书，同时清空类型与搜索条件
    pub async fn load_all(&mut self) -> Result<(), ApplicationError> {
        self.loading = true;
        self.selected_genre.clear();
        self.search_query.clear();
        self.current_filter = ListFilter::All;
        let result = self.api.list().await;
        self.apply(result)
    }

    /// 按类型筛选，同时关闭类型选择框并清空搜索框
    pub async fn filter_by_genre(&mut self, genre: &str) -> Result<(), ApplicationError> {
        self.loading = true;
        self.selected_genre = genre.to_string();
        self.search_query.clear();
        self.current_filter = ListFilter::Genre;
        self.genre_modal_open = false;

        tracing::debug!(genre = %genre, "Filtering books by genre");
        let result = self.api.list_by_genre(genre).await;
        self.apply(result)
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    /// 提交标题搜索；空查询回退为全部列表
    pub async fn search(&mut self) -> Result<(), ApplicationError> {
        let query = self.search_query.trim().to_string();
        if query.is_empty() {
            return self.load_all().await;
        }

        self.loading = true;
        self.selected_genre.clear();
        self.current_filter = ListFilter::Search;

        tracing::debug!(query = %query, "Searching books by title");
        let result = self.api.search_by_title(&query).await;
        self.apply(result)
    }

    /// 清除类型筛选并重新拉取全部
    pub async fn clear_genre_filter(&mut self) -> Result<(), ApplicationError> {
        self.genre_modal_open = false;
        self.load_all().await
    }

    pub fn show_genre_modal(&mut self) {
        self.genre_modal_open = true;
    }

    /// 点击遮罩层关闭
    pub fn close_genre_modal(&mut self) {
        self.genre_modal_open = false;
    }

    /// 解析进度百分比字符串，空串或格式错误返回 0
    pub fn progress_percentage(progress: &str) -> u32 {
        progress_percentage(progress)
    }

    fn apply(&mut self, result: Result<Vec<Book>, BookApiError>) -> Result<(), ApplicationError> {
        self.loading = false;
        match result {
            Ok(books) => {
                self.error = None;
                self.books = books;
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, filter = self.current_filter.as_str(), "Failed to load books");
                self.books.clear();
                self.error = Some(err.to_string());
                Err(err.into())
            }
        }
    }

    // Getters
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// 加载完成且结果为空时显示空状态
    pub fn is_empty(&self) -> bool {
        !self.loading && self.books.is_empty()
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn selected_genre(&self) -> &str {
        &self.selected_genre
    }

    pub fn current_filter(&self) -> ListFilter {
        self.current_filter
    }

    pub fn is_genre_modal_open(&self) -> bool {
        self.genre_modal_open
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
