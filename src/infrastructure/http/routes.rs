//! HTTP Routes
//!
//! 页面与表单动作:
//! - GET  (任意路径)                  经客户端路由表解析后渲染页面
//! - POST /book/:id/favorite          切换收藏
//! - POST /book/:id/search            详情页搜索跳转
//! - POST /newbook                    新建
//! - POST /edit/:id                   更新
//! - POST /edit/:id/delete            打开删除确认
//! - POST /edit/:id/delete/confirm    确认删除
//! - POST /edit/:id/delete/cancel     取消删除
//! - GET  /api/ping                   健康检查

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/ping", get(handlers::ping))
        .merge(book_routes())
        .merge(edit_routes())
        .fallback(handlers::render_page)
}

/// 详情页动作
fn book_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/book/:id/favorite", post(handlers::toggle_favorite))
        .route("/book/:id/search", post(handlers::search_from_detail))
}

/// 新建/编辑页：GET 走页面渲染，POST 为表单动作
fn edit_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/newbook",
            get(handlers::render_page).post(handlers::create_book),
        )
        .route(
            "/edit/:id",
            get(handlers::render_page).post(handlers::update_book),
        )
        .route("/edit/:id/delete", post(handlers::request_delete))
        .route("/edit/:id/delete/confirm", post(handlers::confirm_delete))
        .route("/edit/:id/delete/cancel", post(handlers::cancel_delete))
}
