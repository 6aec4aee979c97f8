// All LLM prompt constants for the Generation module.
// Reuses cross-cutting fragments from llm_client::prompts.

/// Audience used when the request names none.
pub const DEFAULT_AUDIENCE: &str = "General LinkedIn professionals";

/// Placeholder for optional prompt fields the user left blank.
pub const NONE_PLACEHOLDER: &str = "None";

/// Writing rules prepended to every generation prompt.
/// Replace `{json_only_instruction}` before sending.
pub const SYSTEM_RULES: &str = "You are an expert LinkedIn content writer and editor.
Rules:
- Write for LinkedIn: short paragraphs, clear, scannable structure.
- Keep a professional yet human tone (avoid jargon & clichés).
- No profanity, hate, or sensitive claims.
- Prefer actionable insights and examples.
- If hashtags requested, include 3–6 relevant, specific hashtags.
- If CTA requested, add a natural call-to-action at the end.
- Emojis only if tone is Casual or Inspirational (max 2).
- {json_only_instruction}";

/// Post generation prompt template.
/// Replace: {system_rules}, {count}, {topic}, {tone}, {audience}, {max_words},
///          {include_hashtags}, {include_cta}, {emojis}, {seed}, {style_notes}
pub const GENERATION_PROMPT_TEMPLATE: &str = r##"{system_rules}

Task: Generate {count} distinct LinkedIn posts on the topic: "{topic}".

Tone: {tone}
Audience: {audience}
MaxWordsPerPost: {max_words}
IncludeHashtags: {include_hashtags}
IncludeCTA: {include_cta}
Emojis: {emojis}

AdditionalSeed: {seed}
StyleNotes: {style_notes}

Return JSON ONLY in this schema:
{
  "posts": [
    {
      "title": "Short, scroll-stopping line (max 10 words)",
      "body": "Main post body (<= {max_words} words, 2–5 short paragraphs)",
      "hashtags": ["#tag1", "#tag2"]  // include only if hashtags requested
    }
  ]
}"##;
