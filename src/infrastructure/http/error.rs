//! HTTP Error Handling
//!
//! 页面请求的错误统一渲染为带状态码的 HTML 页面

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use super::pages::error_page;

/// 页面错误
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    MethodNotAllowed(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            ApiError::NotFound(msg) => {
                tracing::warn!(status = status.as_u16(), error = %msg, "Page not found");
                msg
            }
            ApiError::MethodNotAllowed(msg) => {
                tracing::warn!(status = status.as_u16(), error = %msg, "Method not allowed");
                msg
            }
        };

        (status, Html(error_page(status, message))).into_response()
    }
}
