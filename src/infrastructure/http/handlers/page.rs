//! Page Handler - GET 页面渲染
//!
//! 通过客户端路由表解析路径，挂载对应视图并渲染

use axum::{
    extract::{OriginalUri, State},
    http::{Method, StatusCode},
    response::{Html, IntoResponse, Response},
};
use std::sync::Arc;

use crate::application::{DetailView, EditView, ListView, RouteMatch, ViewKind};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::pages::{detail_page, edit_page, list_page};
use crate::infrastructure::http::state::AppState;
use crate::infrastructure::memory::RecordingNavigator;

use super::respond;

/// 所有未单独注册的 GET 路径
pub async fn render_page(
    State(state): State<Arc<AppState>>,
    method: Method,
    OriginalUri(uri): OriginalUri,
) -> Result<Response, ApiError> {
    if method != Method::GET && method != Method::HEAD {
        return Err(ApiError::MethodNotAllowed(format!("{} {}", method, uri.path())));
    }

    let location = uri.path_and_query().map(|pq| pq.as_str()).unwrap_or("/");
    let matched = state
        .router
        .resolve(location)
        .ok_or_else(|| ApiError::NotFound(format!("No page at {}", uri.path())))?;

    let navigator = Arc::new(RecordingNavigator::new());
    let response = match matched.view {
        ViewKind::List => render_list(&state, &matched).await,
        ViewKind::Detail => {
            let mut view = DetailView::new(
                state.api.clone(),
                navigator.clone(),
                matched.param("id").unwrap_or_default(),
            );
            if let Err(e) = view.mount().await {
                tracing::debug!(error = %e, "Detail view mount failed");
            }
            respond(&navigator, StatusCode::OK, || detail_page(&view))
        }
        ViewKind::Edit => {
            let mut view = EditView::new(state.api.clone(), navigator.clone(), matched.param("id"));
            if let Err(e) = view.mount().await {
                tracing::debug!(error = %e, "Edit view mount failed");
            }
            respond(&navigator, StatusCode::OK, || {
                edit_page(&view, &state.submissions.issue())
            })
        }
    };

    Ok(response)
}

/// 列表页查询参数：`search`、`genre`（空值清除筛选）、`genres=open`
async fn render_list(state: &AppState, matched: &RouteMatch) -> Response {
    let mut view = ListView::new(state.api.clone());

    let result = match matched.query("genre") {
        Some("") => view.clear_genre_filter().await,
        Some(genre) => view.filter_by_genre(genre).await,
        None => view.mount(matched.query("search")).await,
    };
    if let Err(e) = result {
        tracing::debug!(error = %e, "List view load failed");
    }

    if matched.query("genres") == Some("open") {
        view.show_genre_modal();
    }

    let status = if view.error().is_some() {
        StatusCode::BAD_GATEWAY
    } else {
        StatusCode::OK
    };
    (status, Html(list_page(&view))).into_response()
}
