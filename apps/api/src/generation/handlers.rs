//! Axum route handlers for the Posts API.

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::generation::export::{render_export, EXPORT_FILENAME};
use crate::generation::generator::{
    generate_posts, GenerateRequest, GenerationRequest, DEFAULT_MAX_WORDS, DEFAULT_POST_COUNT,
    MAX_MAX_WORDS, MAX_POST_COUNT, MAX_WORDS_STEP, MIN_MAX_WORDS, MIN_POST_COUNT,
};
use crate::generation::tone::Tone;
use crate::models::post::PostDraft;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct RangeOption {
    pub min: usize,
    pub max: usize,
    pub default: usize,
    pub step: usize,
}

#[derive(Debug, Serialize)]
pub struct OptionsResponse {
    pub tones: Vec<Tone>,
    pub default_tone: Tone,
    pub count: RangeOption,
    pub max_words: RangeOption,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub generation_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub post_count: usize,
    pub posts: Vec<PostDraft>,
}

#[derive(Debug, Deserialize)]
pub struct DownloadRequest {
    pub posts: Vec<PostDraft>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/posts/options
///
/// Form catalogue: available tones and the bounds for count and max words.
pub async fn handle_options() -> Json<OptionsResponse> {
    Json(OptionsResponse {
        tones: Tone::ALL.to_vec(),
        default_tone: Tone::default(),
        count: RangeOption {
            min: MIN_POST_COUNT,
            max: MAX_POST_COUNT,
            default: DEFAULT_POST_COUNT,
            step: 1,
        },
        max_words: RangeOption {
            min: MIN_MAX_WORDS,
            max: MAX_MAX_WORDS,
            default: DEFAULT_MAX_WORDS,
            step: MAX_WORDS_STEP,
        },
    })
}

/// POST /api/v1/posts/generate
///
/// Full pipeline: validate → prompt → LLM → parse → clean.
/// An empty `posts` list means the model produced nothing usable; it is not an error.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    let request = GenerationRequest::try_from(request)?;
    let generation_id = Uuid::new_v4();

    info!(
        "Generation {generation_id}: topic={:?}, tone={}, count={}",
        request.topic(),
        request.tone(),
        request.count()
    );

    let posts = generate_posts(state.generator.as_ref(), &request).await?;

    info!("Generation {generation_id}: returned {} posts", posts.len());

    Ok(Json(GenerateResponse {
        generation_id,
        generated_at: Utc::now(),
        post_count: posts.len(),
        posts,
    }))
}

/// POST /api/v1/posts/download
///
/// Renders the given drafts as a plain-text attachment.
pub async fn handle_download(Json(request): Json<DownloadRequest>) -> Response {
    let body = render_export(&request.posts);
    (
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{EXPORT_FILENAME}\""),
            ),
        ],
        body,
    )
        .into_response()
}
