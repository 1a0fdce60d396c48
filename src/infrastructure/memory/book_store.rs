//! In-Memory Book API Implementation
//!
//! 进程内的图书资源，实现 BookApiPort：
//! - `api.backend = "memory"` 时作为离线后端
//! - 测试中作为替身，记录每次调用并支持注入失败

use async_trait::async_trait;
use dashmap::DashMap;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use crate::application::ports::{BookApiError, BookApiPort};
use crate::domain::{Book, BookDraft, BookId};

/// 调用记录最多保留的条数（超出后丢弃最早的记录）
pub const CALL_LOG_CAPACITY: usize = 256;

/// 已发生的 API 调用
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    List,
    Get(BookId),
    ListByGenre(String),
    SearchByTitle(String),
    Create(BookDraft),
    Update(Book),
    Delete(BookId),
}

/// 内存图书资源
pub struct InMemoryBookApi {
    books: DashMap<BookId, Book>,
    next_id: AtomicU64,
    calls: Mutex<VecDeque<ApiCall>>,
    pending_failure: Mutex<Option<BookApiError>>,
}

impl InMemoryBookApi {
    pub fn new() -> Self {
        Self {
            books: DashMap::new(),
            next_id: AtomicU64::new(1),
            calls: Mutex::new(VecDeque::new()),
            pending_failure: Mutex::new(None),
        }
    }

    /// 使用给定记录初始化，新 id 从现有最大 id 之后开始分配
    pub fn with_books(books: impl IntoIterator<Item = Book>) -> Self {
        let store = Self::new();
        for book in books {
            store.insert(book);
        }
        store
    }

    /// 带示例数据的实例（离线后端使用）
    pub fn seeded() -> Self {
        let sample = |id: u64, title: &str, author: &str, genre: &str, chapters: u32, progress: &str, favorite: bool| {
            Book::from_draft(
                BookId::new(id),
                BookDraft {
                    title: title.to_string(),
                    author: author.to_string(),
                    genre: genre.to_string(),
                    chapters: (1..=chapters).collect(),
                    summary: String::new(),
                    reading_progress: progress.to_string(),
                    favorite,
                    cover_image: None,
                },
            )
        };

        Self::with_books([
            sample(1, "1984", "George Orwell", "Dystopian", 3, "12%", true),
            sample(2, "The Hobbit", "J.R.R. Tolkien", "Fantasy", 19, "100%", false),
            sample(3, "Dune", "Frank Herbert", "Science Fiction", 48, "35%", false),
            sample(157, "Animal Farm", "George Orwell", "Political Satire", 10, "74%", false),
        ])
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// 直接写入记录（不计入调用记录）
    pub fn insert(&self, book: Book) {
        let id = book.id().value();
        self.next_id.fetch_max(id + 1, Ordering::SeqCst);
        self.books.insert(book.id(), book);
    }

    /// 直接读取记录（不计入调用记录）
    pub fn book(&self, id: BookId) -> Option<Book> {
        self.books.get(&id).map(|b| b.clone())
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// 让下一次调用以给定错误失败
    pub fn fail_next(&self, error: BookApiError) {
        *self
            .pending_failure
            .lock()
            .unwrap_or_else(|e| e.into_inner()) = Some(error);
    }

    /// 最近的调用记录（按发生顺序）
    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .cloned()
            .collect()
    }

    pub fn clear_calls(&self) {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clear();
    }

    fn record(&self, call: ApiCall) -> Result<(), BookApiError> {
        tracing::debug!(call = ?call, "In-memory book api call");
        {
            let mut calls = self.calls.lock().unwrap_or_else(|e| e.into_inner());
            if calls.len() == CALL_LOG_CAPACITY {
                calls.pop_front();
            }
            calls.push_back(call);
        }

        match self
            .pending_failure
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .take()
        {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn sorted(&self, filter: impl Fn(&Book) -> bool) -> Vec<Book> {
        let mut books: Vec<Book> = self
            .books
            .iter()
            .filter(|entry| filter(entry.value()))
            .map(|entry| entry.value().clone())
            .collect();
        books.sort_by_key(|b| b.id());
        books
    }
}

impl Default for InMemoryBookApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BookApiPort for InMemoryBookApi {
    async fn list(&self) -> Result<Vec<Book>, BookApiError> {
        self.record(ApiCall::List)?;
        Ok(self.sorted(|_| true))
    }

    async fn get(&self, id: BookId) -> Result<Book, BookApiError> {
        self.record(ApiCall::Get(id))?;
        self.book(id)
            .ok_or_else(|| BookApiError::NotFound(id.to_string()))
    }

    async fn list_by_genre(&self, genre: &str) -> Result<Vec<Book>, BookApiError> {
        self.record(ApiCall::ListByGenre(genre.to_string()))?;
        Ok(self.sorted(|b| b.genre.eq_ignore_ascii_case(genre)))
    }

    async fn search_by_title(&self, title: &str) -> Result<Vec<Book>, BookApiError> {
        self.record(ApiCall::SearchByTitle(title.to_string()))?;
        let needle = title.to_lowercase();
        Ok(self.sorted(|b| b.title.to_lowercase().contains(&needle)))
    }

    async fn create(&self, draft: &BookDraft) -> Result<BookId, BookApiError> {
        self.record(ApiCall::Create(draft.clone()))?;
        let id = BookId::new(self.next_id.fetch_add(1, Ordering::SeqCst));
        self.books.insert(id, Book::from_draft(id, draft.clone()));
        tracing::info!(book_id = %id, "Book created");
        Ok(id)
    }

    async fn update(&self, book: &Book) -> Result<(), BookApiError> {
        self.record(ApiCall::Update(book.clone()))?;
        let mut entry = self
            .books
            .get_mut(&book.id())
            .ok_or_else(|| BookApiError::NotFound(book.id().to_string()))?;
        *entry = book.clone();
        tracing::info!(book_id = %book.id(), "Book updated");
        Ok(())
    }

    async fn delete(&self, id: BookId) -> Result<(), BookApiError> {
        self.record(ApiCall::Delete(id))?;
        self.books
            .remove(&id)
            .map(|_| {
                tracing::info!(book_id = %id, "Book deleted");
            })
            .ok_or_else(|| BookApiError::NotFound(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str, genre: &str) -> BookDraft {
        BookDraft {
            title: title.to_string(),
            author: "Author".to_string(),
            genre: genre.to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_book_lifecycle() {
        let store = InMemoryBookApi::new();

        // Create
        let id = store.create(&draft("Dune", "Science Fiction")).await.unwrap();
        assert_eq!(store.len(), 1);

        // Get
        let mut book = store.get(id).await.unwrap();
        assert_eq!(book.title, "Dune");

        // Update
        book.reading_progress = "50%".to_string();
        store.update(&book).await.unwrap();
        assert_eq!(store.book(id).unwrap().reading_progress, "50%");

        // Delete
        store.delete(id).await.unwrap();
        assert!(store.is_empty());
        assert!(store.get(id).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_ids_continue_after_seeded_records() {
        let store = InMemoryBookApi::seeded();
        let id = store.create(&draft("New", "Fiction")).await.unwrap();
        assert_eq!(id, BookId::new(158));
    }

    #[tokio::test]
    async fn test_filters() {
        let store = InMemoryBookApi::seeded();

        let dystopian = store.list_by_genre("dystopian").await.unwrap();
        assert_eq!(dystopian.len(), 1);
        assert_eq!(dystopian[0].title, "1984");

        let found = store.search_by_title("animal").await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id(), BookId::new(157));

        assert_eq!(
            store.calls(),
            vec![
                ApiCall::ListByGenre("dystopian".to_string()),
                ApiCall::SearchByTitle("animal".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_call_log_is_bounded() {
        let store = InMemoryBookApi::seeded();

        for _ in 0..CALL_LOG_CAPACITY {
            store.list().await.unwrap();
        }
        store.get(BookId::new(157)).await.unwrap();

        let calls = store.calls();
        assert_eq!(calls.len(), CALL_LOG_CAPACITY);
        assert_eq!(calls.last(), Some(&ApiCall::Get(BookId::new(157))));
    }

    #[tokio::test]
    async fn test_fail_next_applies_once() {
        let store = InMemoryBookApi::seeded();
        store.fail_next(BookApiError::Network("offline".to_string()));

        assert!(matches!(
            store.list().await,
            Err(BookApiError::Network(_))
        ));
        assert_eq!(store.list().await.unwrap().len(), 4);
    }
}
