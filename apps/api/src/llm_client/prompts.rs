// Cross-cutting prompt fragments shared by every LLM caller.
// Feature-specific prompts live next to their feature (see generation/prompts.rs).

/// Instruction that enforces JSON-only output.
pub const JSON_ONLY_INSTRUCTION: &str = "Always return **valid JSON only** (no markdown).";
