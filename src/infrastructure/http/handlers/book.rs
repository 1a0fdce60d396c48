//! Book Detail Actions - 收藏切换与搜索跳转

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
    Form,
};
use std::sync::Arc;

use crate::application::{DetailView, NavigatorPort};
use crate::infrastructure::http::dto::SearchInput;
use crate::infrastructure::http::pages::detail_page;
use crate::infrastructure::http::state::AppState;
use crate::infrastructure::memory::RecordingNavigator;

use super::respond;

/// 切换收藏，成功后回到详情页
pub async fn toggle_favorite(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Response {
    let navigator = Arc::new(RecordingNavigator::new());
    let mut view = DetailView::new(state.api.clone(), navigator.clone(), id.as_str());

    if view.mount().await.is_err() {
        return respond(&navigator, StatusCode::OK, || detail_page(&view));
    }

    match view.toggle_favorite().await {
        Ok(()) => {
            navigator.push(&format!("/book/{}", urlencoding::encode(&id)));
            respond(&navigator, StatusCode::OK, || detail_page(&view))
        }
        Err(e) => {
            tracing::debug!(error = %e, "Favorite toggle failed");
            respond(&navigator, StatusCode::BAD_GATEWAY, || detail_page(&view))
        }
    }
}

/// 详情页搜索框提交，跳转到 `/?search=...`
pub async fn search_from_detail(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Form(input): Form<SearchInput>,
) -> Response {
    let navigator = Arc::new(RecordingNavigator::new());
    let mut view = DetailView::new(state.api.clone(), navigator.clone(), id);

    view.set_search_query(input.query);
    view.submit_search();

    respond(&navigator, StatusCode::OK, || detail_page(&view))
}
