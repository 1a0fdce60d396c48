//! 编辑/新建页

use crate::application::{EditMode, EditStage, EditView};
use crate::domain::book::GENRES;

use super::{attr, error_banner, layout, text};

/// `submission` 为本次渲染签发的一次性提交令牌
pub fn edit_page(view: &EditView, submission: &str) -> String {
    let action = match view.mode() {
        EditMode::Create => "/newbook".to_string(),
        EditMode::Edit(id) => format!("/edit/{}", urlencoding::encode(id)),
    };
    let form = view.form();

    let mut body = format!(
        r#"<h1 class="page-heading">{heading}</h1>{error}
<form class="book-form" method="post" action="{action}">
<input type="hidden" name="submission" value="{submission}">
<label for="title">Title</label><input id="title" name="title" type="text" value="{title}" required>
<label for="author">Author</label><input id="author" name="author" type="text" value="{author}" required>
<label for="genre">Genre</label><select id="genre" name="genre">{genres}</select>
<label for="chapters">Chapters</label><input id="chapters" name="chapters" type="text" placeholder="1, 2, 3" value="{chapters}">
<label for="reading_progress">Reading progress</label><input id="reading_progress" name="reading_progress" type="text" placeholder="0%" value="{progress}">
<label for="cover_image">Cover image URL</label><input id="cover_image" name="cover_image" type="url" value="{cover}">
<label for="summary">Summary</label><textarea id="summary" name="summary" rows="5">{summary}</textarea>
<label class="checkbox"><input id="favorite" name="favorite" type="checkbox"{checked}> Favorite</label>
<button class="save-btn" type="submit">Save</button>
</form>
"#,
        heading = view.heading(),
        error = error_banner(view.error()),
        action = attr(&action),
        submission = attr(submission),
        title = attr(&form.title),
        author = attr(&form.author),
        genres = genre_options(&form.genre),
        chapters = attr(&form.chapters),
        progress = attr(&form.reading_progress),
        cover = attr(&form.cover_image),
        summary = text(&form.summary),
        checked = if form.favorite { " checked" } else { "" },
    );

    if let EditMode::Edit(_) = view.mode() {
        match view.stage() {
            EditStage::Editing => body.push_str(&format!(
                r#"<form class="inline" method="post" action="{action}/delete"><button class="delete-btn" type="submit">Delete</button></form>"#,
                action = attr(&action),
            )),
            EditStage::ConfirmingDelete => body.push_str(&format!(
                r#"<div class="delete-confirmation" role="dialog">
<p>Delete “{title}”? This cannot be undone.</p>
<form class="inline" method="post" action="{action}/delete/confirm"><button class="confirm-delete-btn" type="submit">Delete</button></form>
<form class="inline" method="post" action="{action}/delete/cancel"><button class="cancel-delete-btn" type="submit">Cancel</button></form>
</div>"#,
                title = text(&form.title),
                action = attr(&action),
            )),
        }
    }

    layout(view.heading(), &body)
}

/// 类型下拉选项；当前值不在预设列表中时追加一项保留原值
fn genre_options(current: &str) -> String {
    let mut options = String::from(r#"<option value="">Select a genre</option>"#);
    let mut genres: Vec<&str> = GENRES.to_vec();
    if !current.is_empty() && !GENRES.iter().any(|g| *g == current) {
        genres.push(current);
    }

    for genre in genres {
        let selected = if genre == current { " selected" } else { "" };
        options.push_str(&format!(
            r#"<option value="{value}"{selected}>{label}</option>"#,
            value = attr(genre),
            label = text(genre),
        ));
    }
    options
}
