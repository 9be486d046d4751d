//! Markdown code-fence removal.

use std::sync::LazyLock;

use regex::Regex;

/// A triple backtick with an optional language tag. Bare closers match with
/// an empty tag, so one pattern covers both marker kinds.
static FENCE_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"```\w*").expect("fence pattern is valid"));

/// Remove every code-fence marker from `raw` and trim surrounding whitespace.
///
/// Idempotent, and the result never contains a triple backtick: markers are
/// consumed leftmost-first, so any leftover backticks sit after a non-backtick
/// character and cannot join into a new marker.
pub fn strip_code_fences(raw: &str) -> String {
    FENCE_MARKER.replace_all(raw, "").trim().to_string()
}
