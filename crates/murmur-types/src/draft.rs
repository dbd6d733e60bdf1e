//! Draft length rules for the composer.
//!
//! The limit counts characters after trimming leading/trailing whitespace,
//! matching what actually gets stored. The editing surface additionally caps
//! raw input at [`MAX_THOUGHT_CHARS`] so a draft can never grow past the
//! limit in the first place.

/// Hard limit on thought length, in characters.
pub const MAX_THOUGHT_CHARS: usize = 280;

/// Character count past which the composer shows the counter as a warning.
pub const NEAR_LIMIT_CHARS: usize = 250;

/// Whether a draft is postable: trimmed length in `[1, MAX_THOUGHT_CHARS]`.
pub fn can_submit(draft: &str) -> bool {
    let len = draft.trim().chars().count();
    (1..=MAX_THOUGHT_CHARS).contains(&len)
}

/// Clip raw input to the first [`MAX_THOUGHT_CHARS`] characters.
pub fn clip(text: &str) -> &str {
    match text.char_indices().nth(MAX_THOUGHT_CHARS) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
