use crate::io_struct::ChatMessage;

/// Substrings that cause an automatic refusal when found in any message.
/// This is a deliberately crude case-insensitive scan, not a security
/// boundary; "code" also matches words like "encode".
pub const MISUSE_TRIGGERS: &[&str] = &[
    "write an essay",
    "code",
    "act as",
    "ignore previous",
    "jailbreak",
];

pub const REFUSAL_MESSAGE: &str =
    "❌ Sorry, I can’t help with that. This assistant is just for LC’s AI services 😊";

pub const FALLBACK_MESSAGE: &str = "⚠️ Oops! Something went wrong. Please try again later.";

pub fn matches_misuse(content: &str) -> bool {
    let lowered = content.to_lowercase();
    MISUSE_TRIGGERS
        .iter()
        .any(|trigger| lowered.contains(trigger))
}

/// Scans the whole conversation in order; the response is the same whichever
/// message matched, so first match wins.
pub fn any_misuse(messages: &[ChatMessage]) -> bool {
    messages.iter().any(|msg| matches_misuse(&msg.content))
}

/// Loose email heuristic: both `@` and `.` present anywhere in the content.
/// Kept as-is for parity with the front-end contract rather than replaced
/// with a real email grammar.
pub fn looks_like_email(content: &str) -> bool {
    content.contains('@') && content.contains('.')
}
