use super::Candidate;

/// Maximum number of characters forwarded to the sentiment model. Anything
/// beyond this is dropped silently.
pub const MAX_INPUT_CHARS: usize = 500;

/// Truncate `text` to at most `max_chars` characters, respecting char
/// boundaries.
pub fn truncate(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Pick the highest-scoring candidate. Ties keep the first-seen entry, which
/// preserves the upstream ranking order.
pub fn top_candidate(candidates: &[Candidate]) -> Option<&Candidate> {
    candidates
        .iter()
        .reduce(|best, c| if c.score > best.score { c } else { best })
}
