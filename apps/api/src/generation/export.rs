//! Plain-text export of generated drafts.

use std::fmt::Write;

use crate::models::post::PostDraft;

/// Download filename offered to clients.
pub const EXPORT_FILENAME: &str = "linkedin_posts.txt";

/// Renders one draft as title, body and hashtag lines.
/// Empty title and hashtag lines are omitted.
pub fn render_post(post: &PostDraft) -> String {
    let mut rendered = post.title.trim().to_string();
    if !rendered.is_empty() {
        rendered.push('\n');
    }
    rendered.push_str(post.body.trim());
    if !post.hashtags.is_empty() {
        rendered.push('\n');
        rendered.push_str(&post.hashtags.join(" "));
    }
    rendered.trim().to_string()
}

/// Concatenates drafts into `=== Post <n> ===` blocks, numbered from 1.
pub fn render_export(posts: &[PostDraft]) -> String {
    let mut out = String::new();
    for (idx, post) in posts.iter().enumerate() {
        // Writing to a String cannot fail.
        let _ = write!(out, "=== Post {} ===\n{}\n\n", idx + 1, render_post(post));
    }
    out
}
