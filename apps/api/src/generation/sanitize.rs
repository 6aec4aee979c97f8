//! Text sanitizer — softens flagged words and normalizes whitespace in model output.

use std::sync::LazyLock;

use regex::{NoExpand, Regex};

/// Flagged term → replacement. Replacements are inserted verbatim.
const PROFANITY: &[(&str, &str)] = &[
    ("damn", "darn"),
    ("hell", "heck"),
    ("shit", "bad"),
    ("fuck", "bad"),
];

/// One whole-word, case-insensitive matcher per flagged term, paired with its replacement.
static PROFANITY_REGEXES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    PROFANITY
        .iter()
        .map(|(term, replacement)| {
            let regex = Regex::new(&format!(r"(?i)\b{}\b", regex::escape(term)))
                .expect("profanity regex should compile");
            (regex, *replacement)
        })
        .collect()
});

static TRAILING_SPACE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]+\n").expect("trailing space regex should compile"));

static BLANK_RUN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("blank run regex should compile"));

/// Rewrites flagged words and tidies whitespace.
///
/// - flagged words are replaced whole-word, ignoring case
/// - spaces/tabs before a newline are dropped
/// - three or more newlines collapse to one blank line
/// - the result is trimmed
pub fn sanitize(text: &str) -> String {
    let mut out = text.to_string();
    for (regex, replacement) in PROFANITY_REGEXES.iter() {
        out = regex.replace_all(&out, NoExpand(replacement)).into_owned();
    }
    let out = TRAILING_SPACE_REGEX.replace_all(&out, "\n");
    let out = BLANK_RUN_REGEX.replace_all(&out, "\n\n");
    out.trim().to_string()
}
