//! Text canonicalization used for address and area-name matching

use regex::Regex;
use std::sync::LazyLock;

static NON_ALNUM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9\s]").expect("valid punctuation pattern"));
static MULTI_WS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace pattern"));

/// Canonicalize free text for substring matching.
///
/// Lowercases, drops everything that is not `[a-z0-9]` or whitespace, collapses
/// whitespace runs to a single space and trims. `None` yields an empty string.
pub fn normalize(text: Option<&str>) -> String {
    let Some(text) = text else {
        return String::new();
    };

    let lower = text.to_lowercase();
    let stripped = NON_ALNUM_RE.replace_all(&lower, "");
    MULTI_WS_RE.replace_all(&stripped, " ").trim().to_string()
}
