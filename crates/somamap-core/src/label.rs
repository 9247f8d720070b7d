//! Selection label text.

use std::borrow::Cow;

/// Longest name shown without truncation, in characters.
pub const LABEL_MAX_CHARS: usize = 15;

/// Characters kept before the ellipsis when a name is truncated.
pub const LABEL_KEEP_CHARS: usize = 13;

/// Shorten `name` for display next to a selected region.
///
/// Names longer than [`LABEL_MAX_CHARS`] keep their first
/// [`LABEL_KEEP_CHARS`] characters followed by `"..."`. Counts are in
/// Unicode scalar values so multi-byte names never split mid-character.
#[must_use]
pub fn truncate_label(name: &str) -> Cow<'_, str> {
    if name.chars().count() <= LABEL_MAX_CHARS {
        return Cow::Borrowed(name);
    }
    let kept: String = name.chars().take(LABEL_KEEP_CHARS).collect();
    Cow::Owned(format!("{kept}..."))
}
