//! Page Rendering - 视图模型到 HTML
//!
//! 只读取视图状态，不发请求；所有文本经过 HTML 转义

mod detail;
mod edit;
mod list;

pub use detail::detail_page;
pub use edit::edit_page;
pub use list::list_page;

use axum::http::StatusCode;

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; background: #f6f4ef; color: #2d2a26; }
header { display: flex; justify-content: space-between; align-items: center; padding: 1rem 2rem; background: #3d5a4c; }
header a { color: #fff; text-decoration: none; font-weight: 600; }
main { max-width: 960px; margin: 0 auto; padding: 1.5rem; }
.book-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(220px, 1fr)); gap: 1rem; }
.book-card { background: #fff; border-radius: 8px; padding: 1rem; box-shadow: 0 1px 3px rgba(0,0,0,.1); }
.book-card a { color: inherit; text-decoration: none; }
.genre-badge, .chapter-badge, .filter-chip { display: inline-block; padding: .15rem .6rem; border-radius: 999px; background: #e3ece6; font-size: .8rem; margin: .1rem; }
.progress-bar { height: 8px; background: #ddd; border-radius: 4px; overflow: hidden; }
.progress-fill { height: 100%; background: #3d5a4c; }
.favorite-indicator { color: #d4a017; }
.no-books, .loading { text-align: center; padding: 3rem; }
.empty-icon { font-size: 3rem; }
.loading-spinner { width: 32px; height: 32px; margin: 0 auto; border: 4px solid #ddd; border-top-color: #3d5a4c; border-radius: 50%; }
.genre-modal-overlay { position: fixed; inset: 0; background: rgba(0,0,0,.4); display: block; }
.genre-modal { position: fixed; top: 20%; left: 50%; transform: translateX(-50%); background: #fff; padding: 1.5rem; border-radius: 8px; }
.error-banner { background: #fde2e1; color: #8a1c17; padding: .75rem 1rem; border-radius: 6px; margin-bottom: 1rem; }
.delete-confirmation { background: #fff7e6; border: 1px solid #f0c36d; padding: 1rem; border-radius: 6px; margin-top: 1rem; }
form.inline { display: inline; }
label { display: block; margin-top: .75rem; font-weight: 600; }
input, select, textarea { width: 100%; padding: .4rem; box-sizing: border-box; }
"#;

/// 页面骨架
pub(crate) fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} · Booknest</title>
<style>{STYLE}</style>
</head>
<body>
<header><a href="/">Booknest</a><a href="/newbook">Add Book</a></header>
<main>
{body}
</main>
</body>
</html>
"#,
        title = text(title),
    )
}

/// 错误页
pub fn error_page(status: StatusCode, message: &str) -> String {
    let body = format!(
        r#"<div class="error-page"><h1>{code}</h1><p class="error-banner">{message}</p><a href="/">Back to library</a></div>"#,
        code = status.as_u16(),
        message = text(message),
    );
    layout(status.canonical_reason().unwrap_or("Error"), &body)
}

pub(crate) fn text(value: &str) -> String {
    html_escape::encode_text(value).into_owned()
}

pub(crate) fn attr(value: &str) -> String {
    html_escape::encode_double_quoted_attribute(value).into_owned()
}

pub(crate) fn error_banner(error: Option<&str>) -> String {
    error
        .map(|msg| format!(r#"<div class="error-banner" role="alert">{}</div>"#, text(msg)))
        .unwrap_or_default()
}

pub(crate) fn progress_bar(reading_progress: &str, width: u32) -> String {
    format!(
        r#"<div class="progress"><div class="progress-bar"><div class="progress-fill" style="width: {width}%"></div></div><span class="progress-text">{label}</span></div>"#,
        label = text(reading_progress),
    )
}
