//! Edit/Create Actions - 表单提交与两步删除

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use std::sync::Arc;

use crate::application::{ApplicationError, EditView};
use crate::infrastructure::http::dto::BookFormInput;
use crate::infrastructure::http::pages::edit_page;
use crate::infrastructure::http::state::AppState;
use crate::infrastructure::memory::RecordingNavigator;

use super::respond;

/// 新建图书（POST /newbook）
pub async fn create_book(
    State(state): State<Arc<AppState>>,
    Form(input): Form<BookFormInput>,
) -> Response {
    submit(&state, None, input).await
}

/// 更新图书（POST /edit/:id）
pub async fn update_book(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Form(input): Form<BookFormInput>,
) -> Response {
    submit(&state, Some(id.as_str()), input).await
}

/// 提交表单数据作为完整记录，不再预先拉取
///
/// 带令牌的提交按令牌去重：同一令牌只保存一次，重复提交跳转到首次结果
async fn submit(state: &AppState, id: Option<&str>, mut input: BookFormInput) -> Response {
    let token = std::mem::take(&mut input.submission);
    let navigator = Arc::new(RecordingNavigator::new());
    let mut view = EditView::new(state.api.clone(), navigator.clone(), id);
    view.set_form(input.into());

    let outcome = if token.is_empty() {
        save(&mut view, &navigator).await
    } else {
        let slot = state.submissions.slot(&token);
        let view = &mut view;
        let navigator = navigator.as_ref();
        let location = slot
            .get_or_try_init(move || save(view, navigator))
            .await
            .cloned();
        location
    };

    match outcome {
        Ok(location) => Redirect::to(&location).into_response(),
        Err(err) => {
            let status = match err {
                ApplicationError::ValidationError(_) => StatusCode::UNPROCESSABLE_ENTITY,
                _ => StatusCode::BAD_GATEWAY,
            };
            (status, Html(edit_page(&view, &state.submissions.issue()))).into_response()
        }
    }
}

/// 执行保存，返回视图请求的跳转地址
async fn save(view: &mut EditView, navigator: &RecordingNavigator) -> Result<String, ApplicationError> {
    view.submit().await?;
    Ok(navigator.last().unwrap_or_else(|| "/".to_string()))
}

/// 点击删除：渲染确认框，不发送 DELETE
pub async fn request_delete(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Response {
    let navigator = Arc::new(RecordingNavigator::new());
    let mut view = EditView::new(state.api.clone(), navigator.clone(), Some(id.as_str()));

    if view.mount().await.is_ok() {
        if let Err(e) = view.request_delete() {
            tracing::debug!(error = %e, "Delete request rejected");
        }
    }
    respond(&navigator, StatusCode::OK, || edit_page(&view, &state.submissions.issue()))
}

/// 确认删除：发送 DELETE，成功后回到列表
pub async fn confirm_delete(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Response {
    let navigator = Arc::new(RecordingNavigator::new());
    let mut view = EditView::new(state.api.clone(), navigator.clone(), Some(id.as_str()));

    if view.mount().await.is_err() {
        return respond(&navigator, StatusCode::OK, || edit_page(&view, &state.submissions.issue()));
    }

    let result = match view.request_delete() {
        Ok(()) => view.confirm_delete().await,
        Err(e) => Err(e),
    };
    let status = match result {
        Ok(()) => StatusCode::OK,
        Err(e) => {
            tracing::debug!(error = %e, "Delete failed");
            StatusCode::BAD_GATEWAY
        }
    };
    respond(&navigator, status, || edit_page(&view, &state.submissions.issue()))
}

/// 取消删除：回到表单，不发送 DELETE
pub async fn cancel_delete(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Response {
    let navigator = Arc::new(RecordingNavigator::new());
    let mut view = EditView::new(state.api.clone(), navigator.clone(), Some(id.as_str()));

    if view.mount().await.is_ok() {
        view.cancel_delete();
    }
    respond(&navigator, StatusCode::OK, || edit_page(&view, &state.submissions.issue()))
}
