//! Community page: forum threads with likes, study groups with join/leave,
//! and the contact form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Threads and groups are fetched concurrently and painted once both have
//! settled. Like and join toggles patch a single card, deriving the shown
//! count from the fixture count plus this browser's own like or membership.

#[cfg(test)]
#[path = "community_test.rs"]
mod community_test;

use records::{Group, Thread};

use crate::components::cards::heart_icon;
use crate::components::patch::{JOINED_CLASS, join_label, members_label};
use crate::components::status::{ListMessages, render_list};
use crate::state::load::LoadState;
use crate::state::preferences::PreferenceSnapshot;
use crate::util::date::display_date;
use crate::util::html::escape;

pub const FORUMS_ID: &str = "forums-container";
pub const GROUPS_ID: &str = "groups-container";
pub const ACCORDION_IDS: [&str; 3] = ["forums-accordion", "groups-accordion", "contact-accordion"];

pub const THREAD_MESSAGES: ListMessages =
    ListMessages { error: "Error loading content", empty: "No discussions available" };
pub const GROUP_MESSAGES: ListMessages =
    ListMessages { error: "Error loading content", empty: "No study groups available" };

fn thread_card(thread: &Thread, liked: bool) -> String {
    format!(
        concat!(
            r#"<div class="forum-thread" data-thread-id="{id}">"#,
            r#"<div class="thread-header"><h3 class="thread-title">{title}</h3>"#,
            r#"<div class="thread-meta"><span class="author">by {author}</span><span class="date">{date}</span></div></div>"#,
            r#"<div class="thread-content"><p>{content}</p></div>"#,
            r#"<div class="thread-footer">"#,
            r#"<button class="like-btn" data-thread-id="{id}" aria-label="Like this thread">"#,
            r#"<span class="like-icon">{icon}</span><span class="like-count">{count}</span></button>"#,
            r#"<span class="replies-count">{replies} replies</span><span class="category">{category}</span>"#,
            "</div></div>",
        ),
        id = escape(&thread.id),
        title = escape(&thread.title),
        author = escape(&thread.author),
        date = escape(&display_date(&thread.date)),
        content = escape(&thread.content),
        icon = heart_icon(liked),
        count = thread.displayed_likes(liked),
        replies = thread.replies,
        category = escape(&thread.category),
    )
}

fn group_card(group: &Group, joined: bool) -> String {
    format!(
        concat!(
            r#"<div class="study-group" data-group-id="{id}">"#,
            r#"<div class="group-header"><h3 class="group-name">{name}</h3>"#,
            r#"<div class="group-meta"><span class="category">{category}</span><span class="members">{members}</span></div></div>"#,
            r#"<div class="group-content"><p class="group-description">{description}</p>"#,
            r#"<div class="group-details">"#,
            "<p><strong>Meeting Day:</strong> {day}</p>",
            "<p><strong>Meeting Time:</strong> {time}</p>",
            "<p><strong>Location:</strong> {location}</p>",
            "</div></div>",
            r#"<div class="group-footer">"#,
            r#"<button class="join-btn{joined_class}" data-group-id="{id}">{label}</button>"#,
            r#"<span class="contact">Contact: {contact}</span>"#,
            "</div></div>",
        ),
        id = escape(&group.id),
        name = escape(&group.name),
        category = escape(&group.category),
        members = members_label(group, joined),
        description = escape(&group.description),
        day = escape(&group.meeting_day),
        time = escape(&group.meeting_time),
        location = escape(&group.location),
        joined_class = if joined { format!(" {JOINED_CLASS}") } else { String::new() },
        label = join_label(joined),
        contact = escape(&group.contact),
    )
}

#[must_use]
pub fn render_threads(state: &LoadState<Thread>, prefs: &PreferenceSnapshot) -> String {
    render_list(state, &THREAD_MESSAGES, |thread| thread_card(thread, prefs.is_liked(&thread.id)))
}

#[must_use]
pub fn render_groups(state: &LoadState<Group>, prefs: &PreferenceSnapshot) -> String {
    render_list(state, &GROUP_MESSAGES, |group| group_card(group, prefs.is_group_member(&group.id)))
}

#[must_use]
pub fn find_thread<'a>(state: &'a LoadState<Thread>, id: &str) -> Option<&'a Thread> {
    state.records().iter().find(|thread| thread.id == id)
}

#[must_use]
pub fn find_group<'a>(state: &'a LoadState<Group>, id: &str) -> Option<&'a Group> {
    state.records().iter().find(|group| group.id == id)
}

#[cfg(feature = "hydrate")]
pub async fn start(session: super::Session) {
    use std::rc::Rc;

    use crate::components::patch::{group_patches, like_patches};
    use crate::net::api::{GROUPS_URL, THREADS_URL, fetch_json};
    use crate::util::dom;

    for id in ACCORDION_IDS {
        dom::init_accordion(id);
    }
    super::contact_form::attach(&session);

    let (threads, groups) =
        futures::join!(fetch_json::<Vec<Thread>>(THREADS_URL), fetch_json::<Vec<Group>>(GROUPS_URL));
    let threads = Rc::new(LoadState::from_fetch(threads));
    let groups = Rc::new(LoadState::from_fetch(groups));
    let snapshot = session.prefs.snapshot();
    session.paint(FORUMS_ID, &render_threads(&threads, &snapshot));
    session.paint(GROUPS_ID, &render_groups(&groups, &snapshot));

    let prefs = Rc::clone(&session.prefs);
    dom::on_click(".like-btn", move |button| {
        let Some(id) = button.get_attribute("data-thread-id") else {
            return;
        };
        let Some(thread) = find_thread(&threads, &id) else {
            return;
        };
        match prefs.toggle_like(&id) {
            Ok(liked) => dom::apply_patches(&like_patches(thread, liked)),
            Err(err) => log::warn!("like {id} not saved: {err}"),
        }
    });
    let prefs = Rc::clone(&session.prefs);
    dom::on_click(".join-btn", move |button| {
        let Some(id) = button.get_attribute("data-group-id") else {
            return;
        };
        let Some(group) = find_group(&groups, &id) else {
            return;
        };
        match prefs.toggle_group_membership(&id) {
            Ok(joined) => dom::apply_patches(&group_patches(group, joined)),
            Err(err) => log::warn!("membership {id} not saved: {err}"),
        }
    });
}
