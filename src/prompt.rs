/// System prompt for the chat-completion call.
pub const SYSTEM_PROMPT: &str = "You are an expert meeting notes assistant. \
Given a raw transcript and a user instruction, produce a clean, structured \
summary. Use clear headings, bullet points, and include an 'Action Items' \
section when applicable. Be faithful to the transcript. Keep it crisp and \
skimmable.";

/// Instruction used when the caller supplies none.
pub const DEFAULT_INSTRUCTION: &str =
    "Provide a concise bullet-point summary and list action items.";

/// Resolve the instruction to send upstream.
///
/// An absent or blank instruction falls back to [`DEFAULT_INSTRUCTION`].
#[must_use]
pub fn effective_instruction(instruction: Option<&str>) -> &str {
    match instruction {
        Some(s) if !s.trim().is_empty() => s,
        _ => DEFAULT_INSTRUCTION,
    }
}

/// Build the user message: instruction first, transcript verbatim below.
#[must_use]
pub fn build_user_message(instruction: &str, transcript: &str) -> String {
    format!("Instruction:\n{instruction}\n\nTranscript:\n{transcript}")
}
