//! HTTP Layer - 服务端渲染页面 + 表单动作
//!
//! 视图模型在 application 层，这里只负责 HTTP 适配与 HTML 渲染

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod pages;
pub mod routes;
pub mod server;
pub mod state;
pub mod submission;

pub use error::ApiError;
pub use routes::create_routes;
pub use server::{HttpServer, ServerConfig};
pub use state::AppState;
pub use submission::SubmissionLedger;
