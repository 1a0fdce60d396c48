//! Integration tests for the server-rendered pages and form actions

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    response::Response,
    Router,
};
use booknest::domain::BookId;
use booknest::infrastructure::http::{AppState, HttpServer};
use booknest::infrastructure::memory::{ApiCall, InMemoryBookApi};
use std::sync::Arc;
use tower::util::ServiceExt;

fn create_app(api: Arc<InMemoryBookApi>) -> Router {
    HttpServer::with_default_config(AppState::with_default_routes(api)).router()
}

fn seeded() -> (Arc<InMemoryBookApi>, Router) {
    let api = InMemoryBookApi::seeded().arc();
    let app = create_app(api.clone());
    (api, app)
}

async fn get(app: &Router, uri: &str) -> Response {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.clone().oneshot(request).await.unwrap()
}

async fn post_form(app: &Router, uri: &str, form: &str) -> Response {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form.to_string()))
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

async fn body_text(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// 表单中隐藏的一次性提交令牌
fn submission_token(html: &str) -> String {
    let marker = r#"name="submission" value=""#;
    let start = html.find(marker).expect("form carries a submission token") + marker.len();
    let end = start + html[start..].find('"').unwrap();
    html[start..end].to_string()
}

fn location(response: &Response) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}

#[tokio::test]
async fn test_ping() {
    let (_api, app) = seeded();
    let response = get(&app, "/api/ping").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("\"status\":\"ok\""));
}

#[tokio::test]
async fn test_detail_page_renders_book() {
    let (_api, app) = seeded();

    let response = get(&app, "/book/157").await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains(r#"<h1 class="book-title">Animal Farm</h1>"#));
    assert!(html.contains(r#"<p class="book-author">by George Orwell</p>"#));
    assert!(html.contains(r#"<span class="progress-text">74%</span>"#));
    assert!(html.contains(r#"style="width: 74%""#));
    assert!(html.contains(r#"<a class="edit-btn" href="/edit/157">"#));
    assert!(html.contains("Add to Favorites"));
    assert_eq!(html.matches(r#"class="chapter-badge""#).count(), 10);
    assert!(html.contains(r#"<span class="chapter-badge">Chapter 1</span>"#));
}

#[tokio::test]
async fn test_detail_page_redirects_home_when_missing() {
    let (_api, app) = seeded();

    let response = get(&app, "/book/999").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");

    let response = get(&app, "/book/not-a-number").await;
    assert_eq!(location(&response), "/");
}

#[tokio::test]
async fn test_favorite_toggle_sends_update() {
    let (api, app) = seeded();

    let response = post_form(&app, "/book/157/favorite", "").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/book/157");

    match api.calls().last() {
        Some(ApiCall::Update(book)) => {
            assert_eq!(book.id(), BookId::new(157));
            assert!(book.favorite);
        }
        other => panic!("expected update call, got {:?}", other),
    }

    let html = body_text(get(&app, "/book/157").await).await;
    assert!(html.contains("Remove from Favorites"));
}

#[tokio::test]
async fn test_detail_search_redirects_to_list() {
    let (api, app) = seeded();

    let response = post_form(&app, "/book/157/search", "query=Animal+Farm").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/?search=Animal%20Farm");
    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn test_list_page() {
    let (api, app) = seeded();

    let html = body_text(get(&app, "/").await).await;
    assert_eq!(html.matches(r#"class="book-card""#).count(), 4);
    assert!(html.contains(r#"<h3 class="book-title">1984</h3>"#));
    assert!(html.contains(r#"class="favorite-indicator""#));
    assert_eq!(api.calls(), vec![ApiCall::List]);

    let html = body_text(get(&app, "/books").await).await;
    assert_eq!(html.matches(r#"class="book-card""#).count(), 4);
}

#[tokio::test]
async fn test_list_page_filters_and_search() {
    let (api, app) = seeded();

    let html = body_text(get(&app, "/?genre=Fantasy").await).await;
    assert_eq!(html.matches(r#"class="book-card""#).count(), 1);
    assert!(html.contains("The Hobbit"));

    let html = body_text(get(&app, "/?search=Animal%20Farm").await).await;
    assert!(html.contains(r#"value="Animal Farm""#));
    assert_eq!(html.matches(r#"class="book-card""#).count(), 1);

    get(&app, "/?genre=").await;

    assert_eq!(
        api.calls(),
        vec![
            ApiCall::ListByGenre("Fantasy".to_string()),
            ApiCall::SearchByTitle("Animal Farm".to_string()),
            ApiCall::List,
        ]
    );
}

#[tokio::test]
async fn test_list_page_genre_modal() {
    let (_api, app) = seeded();

    let html = body_text(get(&app, "/").await).await;
    assert!(!html.contains(r#"class="genre-modal-overlay""#));

    let html = body_text(get(&app, "/?genre=Fantasy&genres=open").await).await;
    assert!(html.contains(r#"<a class="genre-modal-overlay" href="/?genre=Fantasy"></a>"#));
    assert!(html.contains(r#"class="genre-option selected""#));
}

#[tokio::test]
async fn test_list_page_empty_state() {
    let app = create_app(InMemoryBookApi::new().arc());

    let html = body_text(get(&app, "/").await).await;
    assert!(html.contains(r#"class="no-books""#));
    assert!(html.contains(r#"<div class="empty-icon">🌟</div>"#));
    assert!(!html.contains(r#"class="book-card""#));
}

#[tokio::test]
async fn test_new_book_page_is_blank() {
    let (api, app) = seeded();

    let html = body_text(get(&app, "/newbook").await).await;
    assert!(html.contains("Add New Book"));
    assert!(html.contains(r#"<input id="title" name="title" type="text" value="""#));
    assert!(html.contains(r#"<input id="author" name="author" type="text" value="""#));
    assert!(html.contains(r#"<input type="hidden" name="submission" value=""#));
    assert!(!html.contains("delete-btn"));
    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn test_create_book_redirects_to_detail() {
    let (api, app) = seeded();

    let response = post_form(
        &app,
        "/newbook",
        "title=New+Book&author=New+Author&genre=Fiction&reading_progress=10",
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/book/158");

    let created = api.book(BookId::new(158)).unwrap();
    assert_eq!(created.title, "New Book");
    assert_eq!(created.reading_progress, "10%");
    assert!(!created.favorite);
}

#[tokio::test]
async fn test_repeated_create_submission_creates_once() {
    let (api, app) = seeded();

    let html = body_text(get(&app, "/newbook").await).await;
    let token = submission_token(&html);
    assert!(!token.is_empty());

    let form = format!("title=New+Book&author=New+Author&genre=Fiction&submission={}", token);
    let first = post_form(&app, "/newbook", &form).await;
    let second = post_form(&app, "/newbook", &form).await;

    assert_eq!(first.status(), StatusCode::SEE_OTHER);
    assert_eq!(second.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&first), "/book/158");
    assert_eq!(location(&second), "/book/158");

    let creates = api
        .calls()
        .iter()
        .filter(|c| matches!(c, ApiCall::Create(_)))
        .count();
    assert_eq!(creates, 1);
    assert!(api.book(BookId::new(159)).is_none());
}

#[tokio::test]
async fn test_concurrent_create_submissions_create_once() {
    let (api, app) = seeded();
    let form = "title=New+Book&author=New+Author&submission=double-click";

    let (first, second) = tokio::join!(
        post_form(&app, "/newbook", form),
        post_form(&app, "/newbook", form)
    );

    assert_eq!(location(&first), "/book/158");
    assert_eq!(location(&second), "/book/158");
    assert_eq!(
        api.calls()
            .iter()
            .filter(|c| matches!(c, ApiCall::Create(_)))
            .count(),
        1
    );
}

#[tokio::test]
async fn test_rejected_submission_can_be_retried() {
    let (api, app) = seeded();

    let response = post_form(&app, "/newbook", "author=Someone&submission=retry").await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let response = post_form(&app, "/newbook", "title=Fixed&author=Someone&submission=retry").await;
    assert_eq!(location(&response), "/book/158");
    assert_eq!(api.book(BookId::new(158)).unwrap().title, "Fixed");
}

#[tokio::test]
async fn test_repeated_update_submission_updates_once() {
    let (api, app) = seeded();
    let form = "title=Updated&author=George+Orwell&submission=edit-once";

    post_form(&app, "/edit/157", form).await;
    let second = post_form(&app, "/edit/157", form).await;

    assert_eq!(location(&second), "/book/157");
    assert_eq!(
        api.calls()
            .iter()
            .filter(|c| matches!(c, ApiCall::Update(_)))
            .count(),
        1
    );
}

#[tokio::test]
async fn test_create_book_validation_error() {
    let (api, app) = seeded();

    let response = post_form(&app, "/newbook", "author=Someone").await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let html = body_text(response).await;
    assert!(html.contains(r#"class="error-banner""#));
    assert!(html.contains("Title is required"));
    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn test_edit_page_and_update() {
    let (api, app) = seeded();

    let html = body_text(get(&app, "/edit/157").await).await;
    assert!(html.contains("Edit Book"));
    assert!(html.contains(r#"value="Animal Farm""#));
    assert!(html.contains(r#"<option value="Political Satire" selected>"#));
    assert!(html.contains("delete-btn"));

    let response = post_form(
        &app,
        "/edit/157",
        "title=Updated+Title&author=George+Orwell&genre=Political+Satire&chapters=1%2C+2&reading_progress=80%25&favorite=on",
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/book/157");

    let updated = api.book(BookId::new(157)).unwrap();
    assert_eq!(updated.title, "Updated Title");
    assert_eq!(updated.chapters, vec![1, 2]);
    assert_eq!(updated.reading_progress, "80%");
    assert!(updated.favorite);
}

#[tokio::test]
async fn test_delete_flow() {
    let (api, app) = seeded();
    let delete_calls = |api: &InMemoryBookApi| {
        api.calls()
            .iter()
            .filter(|c| matches!(c, ApiCall::Delete(_)))
            .count()
    };

    let response = post_form(&app, "/edit/157/delete", "").await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains(r#"class="delete-confirmation""#));
    assert_eq!(delete_calls(&api), 0);

    let response = post_form(&app, "/edit/157/delete/cancel", "").await;
    let html = body_text(response).await;
    assert!(!html.contains(r#"class="delete-confirmation""#));
    assert_eq!(delete_calls(&api), 0);
    assert!(api.book(BookId::new(157)).is_some());

    let response = post_form(&app, "/edit/157/delete/confirm", "").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");
    assert_eq!(delete_calls(&api), 1);
    assert!(api.book(BookId::new(157)).is_none());
}

#[tokio::test]
async fn test_unknown_page_is_not_found() {
    let (_api, app) = seeded();

    let response = get(&app, "/settings").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_text(response).await.contains("<h1>404</h1>"));
}
