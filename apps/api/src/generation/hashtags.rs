use std::collections::HashSet;

/// Maximum hashtags kept per post.
pub const MAX_HASHTAGS: usize = 6;

/// Removes case-insensitive duplicate hashtags, keeping the first spelling and order.
pub fn dedupe_hashtags<S: AsRef<str>>(tags: &[S]) -> Vec<String> {
    let mut seen = HashSet::new();
    tags.iter()
        .map(|tag| AsRef::<str>::as_ref(tag))
        .filter(|tag| seen.insert(tag.to_lowercase()))
        .map(str::to_string)
        .collect()
}

/// Keeps string tags that start with `#` (trimmed), dedupes them and caps the list.
pub fn clean_hashtags(raw: &[String]) -> Vec<String> {
    let tagged: Vec<&str> = raw
        .iter()
        .filter(|tag| tag.starts_with('#'))
        .map(|tag| tag.trim())
        .collect();

    let mut tags = dedupe_hashtags(&tagged);
    tags.truncate(MAX_HASHTAGS);
    tags
}
