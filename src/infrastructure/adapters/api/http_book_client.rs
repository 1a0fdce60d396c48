//! HTTP Book Client - 调用远端图书 API
//!
//! 实现 BookApiPort trait，通过 HTTP 调用远端图书服务
//!
//! 路径段统一做 URL 编码（空格 -> `%20`）；不做重试

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

use crate::application::ports::{BookApiError, BookApiPort};
use crate::domain::{Book, BookDraft, BookId};

/// 新建接口响应体
#[derive(Debug, Deserialize)]
struct CreatedResponse {
    id: BookId,
}

/// HTTP 图书客户端配置
#[derive(Debug, Clone)]
pub struct HttpBookClientConfig {
    /// 图书服务基础 URL
    pub base_url: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

impl Default for HttpBookClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://booknestweb.onrender.com".to_string(),
            timeout_secs: 30,
        }
    }
}

impl HttpBookClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// HTTP 图书客户端
pub struct HttpBookClient {
    client: Client,
    config: HttpBookClientConfig,
}

impl HttpBookClient {
    /// 创建新的 HTTP 图书客户端
    pub fn new(config: HttpBookClientConfig) -> Result<Self, BookApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| BookApiError::Network(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// 集合 URL：`{base}/books`
    pub fn books_url(&self) -> String {
        format!("{}/books", self.config.base_url.trim_end_matches('/'))
    }

    /// 子资源 URL，每个段单独编码：`{base}/books/genre/Political%20Satire`
    pub fn books_url_with(&self, segments: &[&str]) -> String {
        let mut url = self.books_url();
        for segment in segments {
            url.push('/');
            url.push_str(&urlencoding::encode(segment));
        }
        url
    }

    /// 筛选值为空或为 `.`/`..` 时无法作为路径段表达（会被 URL 规范化吞掉）
    fn is_unroutable_segment(value: &str) -> bool {
        matches!(value, "" | "." | "..")
    }

    async fn list_filtered(&self, kind: &str, value: &str) -> Result<Vec<Book>, BookApiError> {
        if Self::is_unroutable_segment(value) {
            tracing::debug!(filter = kind, value = %value, "Filter value cannot be routed, returning no books");
            return Ok(Vec::new());
        }
        self.get_json(self.books_url_with(&[kind, value])).await
    }

    fn book_url(&self, id: BookId) -> String {
        self.books_url_with(&[&id.to_string()])
    }

    /// 发送请求并检查状态码；404 -> NotFound，其余非 2xx -> Server
    async fn send(&self, request: RequestBuilder, method: Method, url: &str) -> Result<Response, BookApiError> {
        tracing::debug!(method = %method, url = %url, "Sending book api request");

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                BookApiError::Network(format!("Request timeout: {}", url))
            } else if e.is_connect() {
                BookApiError::Network(format!("Cannot connect to book service: {}", e))
            } else {
                BookApiError::Network(e.to_string())
            }
        })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(BookApiError::NotFound(url.to_string()));
        }
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            tracing::warn!(method = %method, url = %url, status = status.as_u16(), "Book api request failed");
            return Err(BookApiError::server(status.as_u16(), error_text));
        }

        Ok(response)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T, BookApiError> {
        let response = self.send(self.client.get(&url), Method::GET, &url).await?;
        decode(response).await
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, BookApiError> {
    let bytes = response
        .bytes()
        .await
        .map_err(|e| BookApiError::Network(format!("Failed to read body: {}", e)))?;
    serde_json::from_slice(&bytes).map_err(|e| BookApiError::Decode(e.to_string()))
}

#[async_trait]
impl BookApiPort for HttpBookClient {
    async fn list(&self) -> Result<Vec<Book>, BookApiError> {
        self.get_json(self.books_url()).await
    }

    async fn get(&self, id: BookId) -> Result<Book, BookApiError> {
        self.get_json(self.book_url(id)).await
    }

    async fn list_by_genre(&self, genre: &str) -> Result<Vec<Book>, BookApiError> {
        self.list_filtered("genre", genre).await
    }

    async fn search_by_title(&self, title: &str) -> Result<Vec<Book>, BookApiError> {
        self.list_filtered("title", title).await
    }

    async fn create(&self, draft: &BookDraft) -> Result<BookId, BookApiError> {
        let url = self.books_url();
        let response = self
            .send(self.client.post(&url).json(draft), Method::POST, &url)
            .await?;
        let created: CreatedResponse = decode(response).await?;

        tracing::info!(book_id = %created.id, title = %draft.title, "Book created on server");
        Ok(created.id)
    }

    async fn update(&self, book: &Book) -> Result<(), BookApiError> {
        let url = self.book_url(book.id());
        self.send(self.client.put(&url).json(book), Method::PUT, &url)
            .await?;

        tracing::info!(book_id = %book.id(), "Book updated on server");
        Ok(())
    }

    async fn delete(&self, id: BookId) -> Result<(), BookApiError> {
        let url = self.book_url(id);
        self.send(self.client.delete(&url), Method::DELETE, &url)
            .await?;

        tracing::info!(book_id = %id, "Book deleted on server");
        Ok(())
    }
}
