//! Post generation — orchestrates the full pipeline for one request.
//!
//! Flow: validate request → build prompt → single LLM call → parse_response →
//!       PostDraft::from_record → sanitize / word limit / hashtags → drop empties →
//!       truncate to `count`.
//!
//! Nothing is persisted and nothing is retried: a failed LLM call fails the request.

use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::errors::AppError;
use crate::generation::hashtags::clean_hashtags;
use crate::generation::parser::parse_response;
use crate::generation::prompts::{
    DEFAULT_AUDIENCE, GENERATION_PROMPT_TEMPLATE, NONE_PLACEHOLDER, SYSTEM_RULES,
};
use crate::generation::sanitize::sanitize;
use crate::generation::tone::Tone;
use crate::generation::word_limit::enforce_word_limit;
use crate::llm_client::prompts::JSON_ONLY_INSTRUCTION;
use crate::llm_client::TextGenerator;
use crate::models::post::PostDraft;

pub const DEFAULT_POST_COUNT: usize = 3;
pub const MIN_POST_COUNT: usize = 1;
pub const MAX_POST_COUNT: usize = 6;

pub const DEFAULT_MAX_WORDS: usize = 180;
pub const MIN_MAX_WORDS: usize = 120;
pub const MAX_MAX_WORDS: usize = 350;
pub const MAX_WORDS_STEP: usize = 10;

// ────────────────────────────────────────────────────────────────────────────
// Request models
// ────────────────────────────────────────────────────────────────────────────

/// Request body for post generation, as received over the wire.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateRequest {
    pub topic: String,
    #[serde(default)]
    pub tone: Tone,
    #[serde(default)]
    pub audience: Option<String>,
    #[serde(default = "default_count")]
    pub count: usize,
    #[serde(default)]
    pub include_hashtags: bool,
    #[serde(default)]
    pub include_cta: bool,
    #[serde(default = "default_max_words")]
    pub max_words: usize,
    #[serde(default)]
    pub seed: Option<String>,
    #[serde(default)]
    pub style_notes: Option<String>,
}

fn default_count() -> usize {
    DEFAULT_POST_COUNT
}

fn default_max_words() -> usize {
    DEFAULT_MAX_WORDS
}

/// A validated generation request. Only constructible through `TryFrom<GenerateRequest>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    topic: String,
    tone: Tone,
    audience: Option<String>,
    count: usize,
    include_hashtags: bool,
    include_cta: bool,
    max_words: usize,
    seed: Option<String>,
    style_notes: Option<String>,
}

impl TryFrom<GenerateRequest> for GenerationRequest {
    type Error = AppError;

    /// Trims free-text fields (blank optionals become `None`) and checks bounds.
    fn try_from(request: GenerateRequest) -> Result<Self, Self::Error> {
        let topic = request.topic.trim();
        if topic.is_empty() {
            return Err(AppError::Validation("topic cannot be empty".to_string()));
        }

        if !(MIN_POST_COUNT..=MAX_POST_COUNT).contains(&request.count) {
            return Err(AppError::Validation(format!(
                "count must be between {MIN_POST_COUNT} and {MAX_POST_COUNT}, got {}",
                request.count
            )));
        }

        if request.max_words == 0 || request.max_words > MAX_MAX_WORDS {
            return Err(AppError::Validation(format!(
                "max_words must be between 1 and {MAX_MAX_WORDS}, got {}",
                request.max_words
            )));
        }

        Ok(Self {
            topic: topic.to_string(),
            tone: request.tone,
            audience: non_blank(request.audience),
            count: request.count,
            include_hashtags: request.include_hashtags,
            include_cta: request.include_cta,
            max_words: request.max_words,
            seed: non_blank(request.seed),
            style_notes: non_blank(request.style_notes),
        })
    }
}

impl GenerationRequest {
    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn tone(&self) -> Tone {
        self.tone
    }

    pub fn count(&self) -> usize {
        self.count
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

// ────────────────────────────────────────────────────────────────────────────
// Generation pipeline
// ────────────────────────────────────────────────────────────────────────────

/// Runs the full generation pipeline for one request.
///
/// Returns at most `request.count()` drafts, each with a non-empty body.
/// An empty list is a valid outcome (the model produced nothing usable).
pub async fn generate_posts(
    generator: &dyn TextGenerator,
    request: &GenerationRequest,
) -> Result<Vec<PostDraft>, AppError> {
    let prompt = build_generation_prompt(request);
    debug!("Generation prompt built ({} chars)", prompt.len());

    let raw = generator.generate_text(&prompt).await?;

    let parsed = parse_response(&raw);
    info!(
        "Parsed model output: tier={:?}, records={}",
        parsed.tier,
        parsed.records.len()
    );

    let mut drafts: Vec<PostDraft> = parsed
        .records
        .iter()
        .filter_map(PostDraft::from_record)
        .map(|draft| clean_draft(draft, request.max_words, request.include_hashtags))
        .filter(|draft| !draft.body.is_empty())
        .collect();

    let produced = drafts.len();
    drafts.truncate(request.count);

    if drafts.is_empty() {
        warn!("No usable posts produced for topic {:?}", request.topic);
    } else if produced > request.count {
        debug!("Model produced {produced} drafts; keeping {}", request.count);
    }

    Ok(drafts)
}

/// Sanitizes title and body, applies the soft word limit, and cleans hashtags.
pub fn clean_draft(mut draft: PostDraft, max_words: usize, include_hashtags: bool) -> PostDraft {
    draft.title = sanitize(&draft.title);
    draft.body = enforce_word_limit(&sanitize(&draft.body), max_words);
    draft.hashtags = if include_hashtags {
        clean_hashtags(&draft.hashtags)
    } else {
        Vec::new()
    };
    draft
}

/// Builds the generation prompt by filling the template with the request fields.
pub fn build_generation_prompt(request: &GenerationRequest) -> String {
    let system_rules = fill_template(
        SYSTEM_RULES,
        &[("json_only_instruction", JSON_ONLY_INSTRUCTION)],
    );
    let count = request.count.to_string();
    let max_words = request.max_words.to_string();

    fill_template(
        GENERATION_PROMPT_TEMPLATE,
        &[
            ("system_rules", system_rules.as_str()),
            ("count", count.as_str()),
            ("topic", request.topic.as_str()),
            ("tone", request.tone.as_str()),
            (
                "audience",
                request.audience.as_deref().unwrap_or(DEFAULT_AUDIENCE),
            ),
            ("max_words", max_words.as_str()),
            ("include_hashtags", yes_no(request.include_hashtags)),
            ("include_cta", yes_no(request.include_cta)),
            (
                "emojis",
                if request.tone.allows_emojis() {
                    "Allowed (max 2)"
                } else {
                    "Not allowed"
                },
            ),
            ("seed", request.seed.as_deref().unwrap_or(NONE_PLACEHOLDER)),
            (
                "style_notes",
                request.style_notes.as_deref().unwrap_or(NONE_PLACEHOLDER),
            ),
        ],
    )
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

/// Single-pass `{name}` substitution. Unknown `{...}` sequences are copied as-is,
/// and substituted values are never re-scanned.
fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let replacement = after.find('}').and_then(|close| {
            let name = &after[..close];
            values
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value, close))
        });

        match replacement {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
