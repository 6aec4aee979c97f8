//! Soft word limit for post bodies.
//!
//! The body is first cut to `max_words` whitespace-separated tokens, then shortened
//! further to the earliest sentence ending inside that cut. Because the sentence search
//! runs on the already-cut text, the limit is approximate: it prefers a clean ending
//! over using the whole budget.

/// Trims `text` to at most `max_words` words, ending on a sentence boundary if one exists.
///
/// Text already within the budget is returned unchanged (including its whitespace).
pub fn enforce_word_limit(text: &str, max_words: usize) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.len() <= max_words {
        return text.to_string();
    }

    let trimmed = words[..max_words].join(" ");
    match first_sentence_end(&trimmed) {
        Some(end) => trimmed[..end].trim().to_string(),
        None => trimmed.trim().to_string(),
    }
}

/// Byte offset just past the first `.`, `!` or `?` that is followed by whitespace
/// or the end of the string.
fn first_sentence_end(text: &str) -> Option<usize> {
    let mut chars = text.char_indices().peekable();
    while let Some((idx, c)) = chars.next() {
        if matches!(c, '.' | '!' | '?') {
            let at_boundary = match chars.peek() {
                None => true,
                Some((_, next)) => next.is_whitespace(),
            };
            if at_boundary {
                return Some(idx + c.len_utf8());
            }
        }
    }
    None
}
