//! Shared test utilities for the post-index test suite.
//!
//! Provides article builders and an in-memory [`CollectionApi`] so unit
//! tests can exercise collection derivations without a build framework.

use chrono::{DateTime, TimeZone, Utc};
use std::cell::RefCell;

use crate::content::{Article, CollectionApi, FrontMatter};

/// Noon UTC on the given day — a stable, order-comparable timestamp.
pub fn day(year: i32, month: u32, dom: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, dom, 12, 0, 0).unwrap()
}

/// Build an article from a date and a front-matter YAML snippet.
///
/// Panics on malformed YAML — fixture bugs should fail loudly.
pub fn article(date: DateTime<Utc>, front: &str) -> Article {
    Article::new(date, FrontMatter::from_yaml(front).unwrap(), "")
}

/// In-memory collection provider that returns a fixed item set and records
/// every glob it was asked for.
pub struct StaticApi {
    items: Vec<Article>,
    patterns: RefCell<Vec<String>>,
}

impl StaticApi {
    pub fn new(items: Vec<Article>) -> Self {
        Self {
            items,
            patterns: RefCell::new(Vec::new()),
        }
    }

    /// Every glob pattern queried so far, in call order.
    pub fn patterns(&self) -> Vec<String> {
        self.patterns.borrow().clone()
    }
}

impl CollectionApi for StaticApi {
    fn filtered_by_glob(&self, pattern: &str) -> Vec<Article> {
        self.patterns.borrow_mut().push(pattern.to_string());
        self.items.clone()
    }
}
