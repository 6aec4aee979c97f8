// Post generation: prompt → single LLM call → parse → clean.
// All LLM calls go through llm_client — no direct Gemini calls here.

pub mod export;
pub mod generator;
pub mod handlers;
pub mod hashtags;
pub mod parser;
pub mod prompts;
pub mod sanitize;
pub mod tone;
pub mod word_limit;
