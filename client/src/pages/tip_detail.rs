//! Tip detail page: the tip named by `?id=`, its bookmark button, and
//! related tips from the same category.

#[cfg(test)]
#[path = "tip_detail_test.rs"]
mod tip_detail_test;

use records::Tip;

use super::detail;
use crate::components::cards::{ItemKind, tag_list, tip_card};
use crate::components::status::{ListMessages, render_list};
use crate::state::load::LoadState;
use crate::util::date::display_date;
use crate::util::html::escape;

pub const CONTENT_ID: &str = "tip-content";
pub const RELATED_ID: &str = "related-tips-container";

pub const RELATED_MESSAGES: ListMessages =
    ListMessages { error: "Error loading content", empty: "No related tips available" };

#[must_use]
pub fn find_tip<'a>(all: &'a LoadState<Tip>, id: Option<&str>) -> Option<&'a Tip> {
    detail::find_by_id(all, id, |tip| tip.id.as_str())
}

#[must_use]
pub fn related_tips(all: &LoadState<Tip>, current: &Tip) -> LoadState<Tip> {
    detail::related(all.records(), &current.id, |tip| tip.id.as_str(), |tip| tip.category == current.category)
}

/// Article body. `content` is trusted fixture HTML and is inserted as is.
#[must_use]
pub fn render_tip(tip: &Tip, bookmarked: bool) -> String {
    format!(
        concat!(
            r#"<nav class="breadcrumb"><a href="tips.html">Tips</a> / "#,
            r#"<span id="breadcrumb-category">{category}</span> / <span id="breadcrumb-title">{title}</span></nav>"#,
            r#"<header class="tip-header">"#,
            r#"<div class="card-meta"><span class="category">{category}</span><span class="date">{date}</span>"#,
            r#"<span class="author">by {author}</span></div>"#,
            r#"<h1 class="tip-title">{title}</h1>{button}</header>"#,
            r#"<img class="tip-image" src="{image}" alt="{title}">"#,
            r#"<p class="tip-summary">{summary}</p>"#,
            r#"<div class="tip-body">{content}</div>"#,
            r#"<div class="card-tags">{tags}</div>"#,
        ),
        category = escape(&tip.category),
        title = escape(&tip.title),
        date = escape(&display_date(&tip.date)),
        author = escape(&tip.author),
        button = detail::bookmark_button(ItemKind::Tip, bookmarked),
        image = escape(&tip.image),
        summary = escape(&tip.summary),
        content = tip.content,
        tags = tag_list(&tip.tags),
    )
}

#[must_use]
pub fn render_related(state: &LoadState<Tip>) -> String {
    render_list(state, &RELATED_MESSAGES, |tip| tip_card(tip, None))
}

#[cfg(feature = "hydrate")]
pub async fn start(session: super::Session) {
    use crate::net::api::{TIPS_URL, fetch_json};
    use crate::util::dom;

    let id = dom::query_param("id");
    if id.is_none() {
        detail::show_outcome(CONTENT_ID, false);
        return;
    }
    let all = LoadState::from_fetch(fetch_json::<Vec<Tip>>(TIPS_URL).await);
    let Some(tip) = find_tip(&all, id.as_deref()) else {
        detail::show_outcome(CONTENT_ID, false);
        return;
    };
    session.paint(CONTENT_ID, &render_tip(tip, session.prefs.is_bookmarked(&tip.id)));
    detail::show_outcome(CONTENT_ID, true);
    session.paint(RELATED_ID, &render_related(&related_tips(&all, tip)));
    if let Some(document) = dom::document() {
        document.set_title(&detail::page_title(&tip.title));
    }
    detail::attach_bookmark(&session, ItemKind::Tip, tip.id.clone());
}
