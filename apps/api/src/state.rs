use std::sync::Arc;

use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Text generation backend. The Gemini `LlmClient` in production, a stub in tests.
    pub generator: Arc<dyn TextGenerator>,
}
