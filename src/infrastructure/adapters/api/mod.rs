//! Book API Adapter - 远端图书 HTTP 客户端

mod http_book_client;

pub use http_book_client::{HttpBookClient, HttpBookClientConfig};
