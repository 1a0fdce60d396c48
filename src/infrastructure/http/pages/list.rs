//! 列表页

use crate::application::{ListFilter, ListView};
use crate::domain::book::GENRES;
use crate::domain::Book;

use super::{attr, error_banner, layout, progress_bar, text};

pub fn list_page(view: &ListView) -> String {
    let mut body = String::new();

    body.push_str(&format!(
        r#"<section class="toolbar">
<form class="search-form" method="get" action="/">
<input class="search-input" type="search" name="search" placeholder="Search by title" value="{query}">
<button type="submit">Search</button>
</form>
<a class="genre-btn" href="{picker}">Genres</a>
{chips}
</section>
"#,
        query = attr(view.search_query()),
        picker = attr(&picker_href(view)),
        chips = filter_chips(view),
    ));

    body.push_str(&error_banner(view.error()));

    if view.is_loading() {
        body.push_str(r#"<div class="loading"><div class="loading-spinner"></div><p>Loading books…</p></div>"#);
    } else if view.is_empty() {
        body.push_str(r#"<div class="no-books"><div class="empty-icon">🌟</div><p>No books found.</p><a href="/newbook">Add your first book</a></div>"#);
    } else {
        body.push_str(r#"<div class="book-grid">"#);
        for book in view.books() {
            body.push_str(&book_card(book));
        }
        body.push_str("</div>");
    }

    if view.is_genre_modal_open() {
        body.push_str(&genre_modal(view));
    }

    layout("My Books", &body)
}

fn book_card(book: &Book) -> String {
    let favorite = if book.favorite {
        r#"<span class="favorite-indicator" title="Favorite">★</span>"#
    } else {
        ""
    };
    format!(
        r#"<article class="book-card"><a href="/book/{id}">
<h3 class="book-title">{title}</h3>
<p class="book-author">by {author}</p>
<span class="genre-badge">{genre}</span>{favorite}
{progress}
</a></article>"#,
        id = book.id(),
        title = text(&book.title),
        author = text(&book.author),
        genre = text(&book.genre),
        progress = progress_bar(&book.reading_progress, ListView::progress_percentage(&book.reading_progress).min(100)),
    )
}

/// 当前筛选对应的查询串，用于打开/关闭类型选择框时保持结果不变
fn current_query(view: &ListView) -> String {
    match view.current_filter() {
        ListFilter::Genre => format!("genre={}", urlencoding::encode(view.selected_genre())),
        ListFilter::Search => format!("search={}", urlencoding::encode(view.search_query())),
        ListFilter::All => String::new(),
    }
}

fn picker_href(view: &ListView) -> String {
    match current_query(view).as_str() {
        "" => "/?genres=open".to_string(),
        query => format!("/?{}&genres=open", query),
    }
}

fn filter_chips(view: &ListView) -> String {
    match view.current_filter() {
        ListFilter::Genre => format!(
            r#"<span class="filter-chip" data-filter="genre">{genre} <a class="clear-filter" href="/?genre=">×</a></span>"#,
            genre = text(view.selected_genre()),
        ),
        ListFilter::Search => format!(
            r#"<span class="filter-chip" data-filter="search">“{query}” <a class="clear-filter" href="/?genre=">×</a></span>"#,
            query = text(view.search_query()),
        ),
        ListFilter::All => String::new(),
    }
}

fn genre_modal(view: &ListView) -> String {
    let close_href = match current_query(view).as_str() {
        "" => "/".to_string(),
        query => format!("/?{}", query),
    };

    let mut options = String::new();
    for genre in GENRES {
        let class = if *genre == view.selected_genre() {
            "genre-option selected"
        } else {
            "genre-option"
        };
        options.push_str(&format!(
            r#"<li><a class="{class}" href="/?genre={href}">{label}</a></li>"#,
            href = attr(&urlencoding::encode(genre)),
            label = text(genre),
        ));
    }

    format!(
        r#"<a class="genre-modal-overlay" href="{close}"></a>
<div class="genre-modal" role="dialog"><h2>Filter by genre</h2><ul class="genre-list">{options}</ul><a class="clear-genre" href="/?genre=">Show all</a></div>"#,
        close = attr(&close_href),
    )
}
