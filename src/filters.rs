//! Pure value filters exposed to templates.
//!
//! Every filter is a total function: missing or malformed input degrades to
//! a safe default (empty string, `1`) instead of failing. Templates call
//! these through the wire names in [`registry`](crate::registry); Rust
//! callers use them directly.
//!
//! The regexes are compiled once on first use and shared from then on.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use maud::PreEscaped;
use regex::Regex;
use std::sync::LazyLock;

static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid tag regex"));
static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));
static DISALLOWED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9-]").expect("valid slug charset regex"));

/// Reading speed the estimate divides by.
const WORDS_PER_MINUTE: usize = 200;

/// Identity passthrough with null-safety, marked as pre-escaped.
///
/// The `PreEscaped` wrapper is the signal to the rendering side that the
/// value must bypass auto-escaping; the value itself is unchanged, or the
/// empty string when absent.
pub fn raw(value: Option<&str>) -> PreEscaped<String> {
    PreEscaped(value.unwrap_or_default().to_string())
}

/// Estimated reading time in minutes, always at least 1.
///
/// Markup tags are stripped, the remainder is split on whitespace runs,
/// and the word count is divided by 200 words per minute, rounding up.
pub fn reading_time(content: Option<&str>) -> u32 {
    let stripped = TAG_RE.replace_all(content.unwrap_or_default(), "");
    let words = stripped.split_whitespace().count();
    words.div_ceil(WORDS_PER_MINUTE).max(1) as u32
}

/// ISO calendar date (`YYYY-MM-DD`) of a timestamp, or `""` if unparseable.
///
/// Accepts RFC 3339 timestamps (converted to UTC before truncation, so a
/// late-evening offset timestamp lands on the UTC day), bare dates, and
/// offset-less `YYYY-MM-DDTHH:MM:SS` timestamps. The time of day never
/// survives into the output.
pub fn readable_date(value: Option<&str>) -> String {
    let Some(text) = value.map(str::trim).filter(|t| !t.is_empty()) else {
        return String::new();
    };
    parse_calendar_date(text)
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

fn parse_calendar_date(text: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc).date_naive());
    }
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt.date());
    }
    None
}

/// Normalize a label into its URL-safe slug form.
///
/// Lowercase, trimmed, whitespace runs collapsed to single hyphens,
/// anything outside `[a-z0-9-]` stripped. Idempotent: slugging a slug
/// changes nothing.
pub fn slugify(value: &str) -> String {
    let lowered = value.to_lowercase();
    let hyphenated = WHITESPACE_RE.replace_all(lowered.trim(), "-");
    DISALLOWED_RE.replace_all(&hyphenated, "").into_owned()
}
