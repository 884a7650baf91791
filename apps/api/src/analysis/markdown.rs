//! Cleanup of markdown artifacts the summarizer emits despite being asked not to.

use std::sync::LazyLock;

use regex::Regex;

static EMPHASIS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*+").unwrap());
static HEADING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"#{1,6}\s").unwrap());
static CODE_FENCE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`{1,3}").unwrap());
// Horizontal whitespace only, so bullets never merge adjacent lines.
static BULLET: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^[ \t]*[-•][ \t]*").unwrap());

/// Strips emphasis asterisks, heading markers, backtick fences and leading
/// bullet markers, then trims. May return an empty string.
pub fn strip_markdown(text: &str) -> String {
    let text = EMPHASIS.replace_all(text, "");
    let text = HEADING.replace_all(&text, "");
    let text = CODE_FENCE.replace_all(&text, "");
    let text = BULLET.replace_all(&text, "");
    text.trim().to_string()
}
