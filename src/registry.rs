//! Filter and collection registration.
//!
//! The build framework talks to this layer through two static tables and
//! one entry point:
//!
//! - [`FILTERS`] maps each wire name templates use (`slug`, `readingTime`,
//!   …) to an adapter over the dynamic [`Value`] interchange. Adapters are
//!   thin: they coerce arguments, call the typed function in
//!   [`filters`](crate::filters) or [`collections`](crate::collections),
//!   and degrade malformed input to the operation's safe default.
//! - [`COLLECTIONS`] maps each named collection (`articles`, `topics`) to
//!   a builder the framework invokes with its [`CollectionApi`] and the
//!   site configuration.
//! - [`configure`] injects both tables, the passthrough-copy directive,
//!   and the Liquid options into a [`BuildHost`], then returns the
//!   immutable [`SiteConfig`]. Hosts call it exactly once at build-start.
//!
//! There is no mutable registry object: the tables are `const`, so what a
//! template can call is fixed at compile time.

use crate::collections;
use crate::config::{LiquidOptions, SiteConfig};
use crate::content::{Article, CollectionApi};
use crate::filters;
use chrono::DateTime;
use log::debug;
use serde_json::Value;
use std::path::Path;

/// Dynamic filter signature. `args[0]` is the piped value; the rest are
/// filter arguments in template order.
pub type FilterFn = fn(&[Value]) -> Value;

/// Collection builder signature.
pub type CollectionFn = fn(&dyn CollectionApi, &SiteConfig) -> Value;

/// A template filter registration.
pub struct Filter {
    /// Name templates call the filter by.
    pub name: &'static str,
    pub apply: FilterFn,
    /// When set, the engine must not auto-escape the filter's output.
    pub raw_output: bool,
}

/// A named collection registration.
pub struct Collection {
    pub name: &'static str,
    pub build: CollectionFn,
}

pub const FILTERS: &[Filter] = &[
    Filter {
        name: "unsafe",
        apply: unsafe_filter,
        raw_output: true,
    },
    Filter {
        name: "readingTime",
        apply: reading_time_filter,
        raw_output: false,
    },
    Filter {
        name: "readableDate",
        apply: readable_date_filter,
        raw_output: false,
    },
    Filter {
        name: "getSeries",
        apply: get_series_filter,
        raw_output: false,
    },
    Filter {
        name: "sortBySeriesPart",
        apply: sort_by_series_part_filter,
        raw_output: false,
    },
    Filter {
        name: "filterByTopic",
        apply: filter_by_topic_filter,
        raw_output: false,
    },
    Filter {
        name: "slug",
        apply: slug_filter,
        raw_output: false,
    },
];

pub const COLLECTIONS: &[Collection] = &[
    Collection {
        name: "articles",
        build: articles_collection,
    },
    Collection {
        name: "topics",
        build: topics_collection,
    },
];

/// The registration surface the build framework implements.
pub trait BuildHost {
    /// Forward the Liquid engine options.
    fn set_liquid_options(&mut self, options: &LiquidOptions);

    /// Make a filter callable from templates under its wire name.
    fn add_filter(&mut self, filter: &'static Filter);

    /// Expose a named collection to templates.
    fn add_collection(&mut self, collection: &'static Collection);

    /// Copy `source` to the output root unchanged, without templating.
    fn add_passthrough_copy(&mut self, source: &Path);
}

/// Wire everything into the host and hand back the site configuration.
pub fn configure(host: &mut dyn BuildHost) -> SiteConfig {
    let config = SiteConfig::default();
    host.set_liquid_options(&config.liquid);
    for filter in FILTERS {
        host.add_filter(filter);
    }
    for source in &config.passthrough {
        host.add_passthrough_copy(source);
    }
    for collection in COLLECTIONS {
        host.add_collection(collection);
    }
    debug!(
        "registered {} filters, {} collections, {} passthrough sources",
        FILTERS.len(),
        COLLECTIONS.len(),
        config.passthrough.len()
    );
    config
}

// =========================================================================
// Argument coercion
// =========================================================================

fn text_arg(args: &[Value], index: usize) -> Option<&str> {
    args.get(index).and_then(Value::as_str)
}

/// Deserialize an argument back into items. Entries that do not look like
/// articles are dropped individually; a non-array argument yields nothing.
fn items_arg(args: &[Value], index: usize) -> Vec<Article> {
    match args.get(index) {
        Some(Value::Array(values)) => values
            .iter()
            .filter_map(|value| serde_json::from_value(value.clone()).ok())
            .collect(),
        _ => Vec::new(),
    }
}

fn items_value(items: Vec<Article>) -> Value {
    serde_json::to_value(items).unwrap_or_else(|_| Value::Array(Vec::new()))
}

// =========================================================================
// Filter adapters
// =========================================================================

fn unsafe_filter(args: &[Value]) -> Value {
    match args.first() {
        None | Some(Value::Null) => Value::String(filters::raw(None).into_string()),
        Some(Value::String(text)) => Value::String(filters::raw(Some(text)).into_string()),
        // Non-string values pass through untouched; escaping is a string
        // concern.
        Some(value) => value.clone(),
    }
}

fn reading_time_filter(args: &[Value]) -> Value {
    Value::from(filters::reading_time(text_arg(args, 0)))
}

fn readable_date_filter(args: &[Value]) -> Value {
    let formatted = match args.first() {
        Some(Value::String(text)) => filters::readable_date(Some(text)),
        // Epoch milliseconds, the other shape item dates show up in.
        Some(Value::Number(n)) => n
            .as_i64()
            .and_then(DateTime::from_timestamp_millis)
            .map(|dt| dt.format("%Y-%m-%d").to_string())
            .unwrap_or_default(),
        _ => String::new(),
    };
    Value::String(formatted)
}

fn get_series_filter(args: &[Value]) -> Value {
    items_value(collections::in_series(&items_arg(args, 0), text_arg(args, 1)))
}

fn sort_by_series_part_filter(args: &[Value]) -> Value {
    items_value(collections::sort_by_series_part(&items_arg(args, 0)))
}

fn filter_by_topic_filter(args: &[Value]) -> Value {
    items_value(collections::by_topic(&items_arg(args, 0), text_arg(args, 1)))
}

fn slug_filter(args: &[Value]) -> Value {
    let slug = match args.first() {
        Some(Value::String(text)) => filters::slugify(text),
        // Templates sometimes pipe numbers (years, part counters).
        Some(Value::Number(n)) => filters::slugify(&n.to_string()),
        _ => String::new(),
    };
    Value::String(slug)
}

// =========================================================================
// Collection builders
// =========================================================================

fn articles_collection(api: &dyn CollectionApi, config: &SiteConfig) -> Value {
    items_value(collections::articles(api, &config.posts_glob))
}

fn topics_collection(api: &dyn CollectionApi, config: &SiteConfig) -> Value {
    Value::from(collections::topics(api, &config.posts_glob))
}
