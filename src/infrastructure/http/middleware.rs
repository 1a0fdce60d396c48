//! HTTP Middleware
//!
//! 响应状态码日志中间件

use axum::{extract::Request, middleware::Next, response::Response};

/// 4xx 记 warn，5xx 记 error；重定向与成功响应不记录
pub async fn error_logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;
    let status = response.status();

    if status.is_server_error() {
        tracing::error!(
            method = %method,
            uri = %uri,
            status = %status.as_u16(),
            "Page request failed"
        );
    } else if status.is_client_error() {
        tracing::warn!(
            method = %method,
            uri = %uri,
            status = %status.as_u16(),
            "Page request rejected"
        );
    }

    response
}
