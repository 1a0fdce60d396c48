//! HTTP Handlers
//!
//! 每个请求新建视图模型，执行动作后：
//! - 视图发起了跳转 -> 303 重定向
//! - 否则 -> 渲染当前视图状态

mod book;
mod edit;
mod page;
mod ping;

pub use book::*;
pub use edit::*;
pub use page::*;
pub use ping::*;

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};

use crate::infrastructure::memory::RecordingNavigator;

/// 按导航记录决定重定向或渲染
pub(crate) fn respond(navigator: &RecordingNavigator, status: StatusCode, render: impl FnOnce() -> String) -> Response {
    match navigator.last() {
        Some(location) => Redirect::to(&location).into_response(),
        None => (status, Html(render())).into_response(),
    }
}
