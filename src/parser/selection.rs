//! Board selection parsing.
//!
//! A board is opened from an ordered list of item IDs. The list arrives either
//! as a comma-separated string (a navigation parameter) or embedded in an
//! assistant reply as a `STYLE_BOARD: id1, id2` tag.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

static BOARD_TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\[?STYLE_BOARD:\s*([^\]\n]*)(?:\]|\n)?").expect("Invalid regex")
});

/// An assistant reply split into visible text and an optional board selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplySelection {
    /// Reply text with every board tag removed
    pub text: String,
    /// IDs from the first board tag, if the reply had one
    pub ids: Option<Vec<String>>,
}

/// Parses a comma-separated ID list.
///
/// Segments are trimmed and empty segments are skipped, so `"a, b,,c "`
/// yields `["a", "b", "c"]`.
pub fn parse_id_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Extracts a board selection from an assistant reply.
///
/// The tag is matched case-insensitively and may be wrapped in square
/// brackets. It ends at the closing bracket, the end of the line, or the end
/// of the reply. Only the first tag contributes IDs; every tag is stripped
/// from the returned text.
///
/// # Examples
///
/// ```
/// use styleboard::parser::selection::extract_board_tag;
///
/// let reply = extract_board_tag("Try this look! [STYLE_BOARD: a1, b2]");
/// assert_eq!(reply.text, "Try this look!");
/// assert_eq!(reply.ids, Some(vec!["a1".to_string(), "b2".to_string()]));
/// ```
pub fn extract_board_tag(reply: &str) -> ReplySelection {
    let ids = BOARD_TAG_RE
        .captures(reply)
        .and_then(|caps| caps.get(1))
        .map(|ids| parse_id_list(ids.as_str()));

    let text = BOARD_TAG_RE.replace_all(reply, "").trim().to_string();

    ReplySelection { text, ids }
}
