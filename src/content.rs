//! Content item model and the provider seam.
//!
//! The build framework owns content discovery: it walks the content
//! directory, parses front matter, and hands this layer fully-formed
//! [`Article`] values through the [`CollectionApi`] trait. Nothing here
//! touches the filesystem.
//!
//! ## Front matter
//!
//! Front matter is a typed record with the fields the index layer actually
//! reads — `series`, `seriesPart`, `topics` — plus a flattened extension
//! map that preserves every other key untouched. A post like:
//!
//! ```yaml
//! title: Parsing without fear
//! series: parser-diaries
//! seriesPart: 2
//! topics: [Rust, parsing]
//! ```
//!
//! keeps `title` available to templates through the extension map while the
//! known fields drive series and topic derivations.
//!
//! ## Series parts
//!
//! `seriesPart` accepts a number or a string (`2`, `"2"`, `"2b"` all occur
//! in the wild). Ordering uses the numeric value; a string that does not
//! parse, or a missing part, orders as 0.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FrontMatterError {
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// A single content item, as discovered and parsed by the build framework.
///
/// Read-only to this layer: every operation derives a new view (a sorted
/// sequence, a formatted string) and leaves the items themselves alone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    /// Creation date, used for recency ordering and series tie-breaking.
    pub date: DateTime<Utc>,
    /// Parsed front matter.
    #[serde(default)]
    pub data: FrontMatter,
    /// Body text (rendered or raw), used only for the reading-time estimate.
    #[serde(default)]
    pub content: String,
    /// Source file the framework discovered this item at, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_path: Option<PathBuf>,
}

impl Article {
    pub fn new(date: DateTime<Utc>, data: FrontMatter, content: impl Into<String>) -> Self {
        Self {
            date,
            data,
            content: content.into(),
            file_path: None,
        }
    }
}

/// Typed front-matter record.
///
/// Known fields are optional; unrecognized keys land in `extra` with their
/// raw YAML values so templates can still reach them. Malformed metadata is
/// treated as absent rather than rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FrontMatter {
    /// Series this item belongs to, if any. Matched exactly.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series: Option<String>,
    /// Position within the series. See [`SeriesPart`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series_part: Option<SeriesPart>,
    /// Topic labels, in author order. May repeat across items.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub topics: Vec<String>,
    /// Every other front-matter key, preserved as-is.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

impl FrontMatter {
    /// Parse a front-matter block.
    ///
    /// An empty or whitespace-only block is valid and yields the default
    /// record, matching how frameworks treat files without front matter.
    pub fn from_yaml(yaml: &str) -> Result<Self, FrontMatterError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Like [`from_yaml`](Self::from_yaml), but malformed input resolves to
    /// the default record instead of an error.
    pub fn from_yaml_lenient(yaml: &str) -> Self {
        Self::from_yaml(yaml).unwrap_or_default()
    }

    /// Numeric ordering value of `seriesPart`. Missing parts order as 0.
    pub fn part_order(&self) -> f64 {
        self.series_part.as_ref().map(SeriesPart::order).unwrap_or(0.0)
    }
}

/// A series position: authors write `seriesPart: 2` or `seriesPart: "2"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SeriesPart {
    Number(f64),
    Text(String),
}

impl SeriesPart {
    /// Numeric value used for ordering. Unparseable text orders as 0.
    pub fn order(&self) -> f64 {
        match self {
            SeriesPart::Number(n) => *n,
            SeriesPart::Text(s) => s.trim().parse().unwrap_or(0.0),
        }
    }
}

/// The collection provider the build framework implements.
///
/// Mirrors the framework's own collection API: given a glob over the
/// content root, return every matched item in discovery order. Collection
/// builders in [`collections`](crate::collections) start from this and
/// derive their views.
pub trait CollectionApi {
    /// All content items matched by `pattern`, in discovery order.
    fn filtered_by_glob(&self, pattern: &str) -> Vec<Article>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    // =========================================================================
    // FrontMatter::from_yaml
    // =========================================================================

    #[test]
    fn parses_known_fields() {
        let fm = FrontMatter::from_yaml(
            "series: parser-diaries\nseriesPart: 2\ntopics:\n  - Rust\n  - parsing\n",
        )
        .unwrap();
        assert_eq!(fm.series.as_deref(), Some("parser-diaries"));
        assert_eq!(fm.part_order(), 2.0);
        assert_eq!(fm.topics, vec!["Rust", "parsing"]);
    }

    #[test]
    fn unknown_keys_land_in_extra() {
        let fm = FrontMatter::from_yaml("title: Hello\ndraft: true\n").unwrap();
        assert_eq!(
            fm.extra.get("title"),
            Some(&serde_yaml::Value::String("Hello".into()))
        );
        assert_eq!(fm.extra.get("draft"), Some(&serde_yaml::Value::Bool(true)));
        assert!(fm.series.is_none());
    }

    #[test]
    fn empty_block_is_default() {
        let fm = FrontMatter::from_yaml("   \n").unwrap();
        assert!(fm.series.is_none());
        assert!(fm.topics.is_empty());
        assert!(fm.extra.is_empty());
    }

    #[test]
    fn malformed_yaml_is_an_error() {
        assert!(FrontMatter::from_yaml("topics: [unclosed").is_err());
    }

    #[test]
    fn lenient_parse_falls_back_to_default() {
        let fm = FrontMatter::from_yaml_lenient("topics: [unclosed");
        assert!(fm.topics.is_empty());
    }

    // =========================================================================
    // SeriesPart ordering
    // =========================================================================

    #[test]
    fn numeric_part_orders_by_value() {
        let fm = FrontMatter::from_yaml("seriesPart: 3").unwrap();
        assert_eq!(fm.part_order(), 3.0);
    }

    #[test]
    fn string_part_parses_as_number() {
        let fm = FrontMatter::from_yaml("seriesPart: \"7\"").unwrap();
        assert_eq!(fm.part_order(), 7.0);
    }

    #[test]
    fn unparseable_string_part_orders_as_zero() {
        let fm = FrontMatter::from_yaml("seriesPart: finale").unwrap();
        assert_eq!(fm.part_order(), 0.0);
    }

    #[test]
    fn missing_part_orders_as_zero() {
        assert_eq!(FrontMatter::default().part_order(), 0.0);
    }

    // =========================================================================
    // Article round-trip through the Value interchange
    // =========================================================================

    #[test]
    fn article_survives_json_round_trip() {
        let date = Utc.with_ymd_and_hms(2024, 3, 5, 10, 0, 0).unwrap();
        let article = Article::new(
            date,
            FrontMatter::from_yaml("series: s\nseriesPart: \"2b\"\ntopics: [Go]\n").unwrap(),
            "body",
        );
        let value = serde_json::to_value(&article).unwrap();
        let back: Article = serde_json::from_value(value).unwrap();
        assert_eq!(back.date, date);
        assert_eq!(back.data.series.as_deref(), Some("s"));
        assert_eq!(back.data.topics, vec!["Go"]);
        assert_eq!(back.content, "body");
    }
}
