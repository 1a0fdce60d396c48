//! 详情页

use crate::application::DetailView;
use crate::domain::Book;

use super::{attr, error_banner, layout, progress_bar, text};

pub fn detail_page(view: &DetailView) -> String {
    let Some(book) = view.book() else {
        let body = r#"<div class="loading"><div class="loading-spinner"></div><p>Loading book…</p></div>"#;
        return layout("Loading", body);
    };

    let mut body = String::new();
    body.push_str(&format!(
        r#"<form class="search-form" method="post" action="/book/{id}/search">
<input class="search-input" type="search" name="query" placeholder="Search books" value="{query}">
</form>
"#,
        id = book.id(),
        query = attr(view.search_query()),
    ));
    body.push_str(&error_banner(view.error()));
    body.push_str(&book_details(view, book));

    layout(&book.title, &body)
}

fn book_details(view: &DetailView, book: &Book) -> String {
    let cover = book
        .cover_image
        .as_deref()
        .map(|url| format!(r#"<img class="book-cover" src="{}" alt="{}">"#, attr(url), attr(&book.title)))
        .unwrap_or_default();
    let favorite = if book.favorite {
        r#"<span class="favorite-indicator" title="Favorite">★</span>"#
    } else {
        ""
    };

    let chapters = if book.chapters.is_empty() {
        r#"<p class="no-chapters">No chapters listed.</p>"#.to_string()
    } else {
        let badges: String = book
            .chapters
            .iter()
            .map(|n| format!(r#"<span class="chapter-badge">Chapter {}</span>"#, n))
            .collect();
        format!(r#"<div class="chapter-list">{}</div>"#, badges)
    };

    format!(
        r#"<article class="book-detail">
{cover}
<h1 class="book-title">{title}</h1>
<p class="book-author">by {author}</p>
<span class="genre-badge">{genre}</span>{favorite}
<section class="reading-progress"><h2>Reading progress</h2>{progress}</section>
<section class="summary"><h2>Summary</h2><p class="book-summary">{summary}</p></section>
<section class="chapters"><h2>Chapters</h2>{chapters}</section>
<div class="actions">
<form class="inline" method="post" action="/book/{id}/favorite"><button class="favorite-btn" type="submit">{label}</button></form>
<a class="edit-btn" href="{edit}">Edit</a>
</div>
</article>"#,
        title = text(&book.title),
        author = text(&book.author),
        genre = text(&book.genre),
        progress = progress_bar(&book.reading_progress, view.progress_width()),
        summary = text(&book.summary),
        id = book.id(),
        label = view.favorite_label(),
        edit = attr(&view.edit_path().unwrap_or_default()),
    )
}
