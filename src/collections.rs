//! Derived collection views.
//!
//! Each function takes framework-owned items and derives a new sequence;
//! nothing here mutates its input. The two named collections (`articles`,
//! `topics`) pull their items through [`CollectionApi`]; the series and
//! topic helpers operate on sequences templates already hold.

use crate::content::{Article, CollectionApi};
use crate::filters::slugify;
use log::debug;
use std::cmp::Ordering;
use std::collections::BTreeSet;

/// All items matched by `pattern`, newest first.
///
/// The sort is stable, so items sharing a timestamp keep discovery order.
pub fn articles(api: &dyn CollectionApi, pattern: &str) -> Vec<Article> {
    let mut items = api.filtered_by_glob(pattern);
    items.sort_by(|a, b| b.date.cmp(&a.date));
    debug!("articles collection: {} items from {pattern}", items.len());
    items
}

/// Every distinct topic across the items matched by `pattern`, sorted
/// lexicographically ascending.
///
/// Dedup is exact-string: `"Go"` and `"go"` are two entries. (Topic
/// *filtering* works on slugs instead — see [`by_topic`] — so both entries
/// answer to the same filter. Deliberately left that way.)
pub fn topics(api: &dyn CollectionApi, pattern: &str) -> Vec<String> {
    let mut seen = BTreeSet::new();
    for item in api.filtered_by_glob(pattern) {
        seen.extend(item.data.topics);
    }
    debug!("topics collection: {} distinct topics", seen.len());
    seen.into_iter().collect()
}

/// Items whose `series` equals `series` exactly, input order preserved.
///
/// An absent or empty series yields nothing — there is no "all series"
/// view.
pub fn in_series(items: &[Article], series: Option<&str>) -> Vec<Article> {
    let Some(series) = series.filter(|s| !s.is_empty()) else {
        return Vec::new();
    };
    items
        .iter()
        .filter(|item| item.data.series.as_deref() == Some(series))
        .cloned()
        .collect()
}

/// A copy of `items` ordered ascending by series part, ties broken by
/// ascending date.
///
/// Items without a part order as 0, which floats intros written before the
/// series had numbering to the front.
pub fn sort_by_series_part(items: &[Article]) -> Vec<Article> {
    let mut sorted = items.to_vec();
    sorted.sort_by(|a, b| {
        a.data
            .part_order()
            .partial_cmp(&b.data.part_order())
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.date.cmp(&b.date))
    });
    sorted
}

/// Items tagged with `topic`, compared slug-to-slug.
///
/// `"RUST"`, `"rust"`, and `" Rust "` all name the same topic once
/// slugified, so authors never have to normalize their tags.
pub fn by_topic(items: &[Article], topic: Option<&str>) -> Vec<Article> {
    let Some(topic) = topic.filter(|t| !t.is_empty()) else {
        return Vec::new();
    };
    let wanted = slugify(topic);
    items
        .iter()
        .filter(|item| item.data.topics.iter().any(|t| slugify(t) == wanted))
        .cloned()
        .collect()
}
