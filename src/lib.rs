//! # Post Index
//!
//! The content-indexing and template-transform layer of a blog-style
//! static site. The build framework owns file discovery, front-matter
//! parsing, template rendering, and output writing; this crate supplies
//! everything the site defines on top of it: pure value filters, derived
//! collections, a passthrough asset rule, and the static site
//! configuration.
//!
//! # Architecture: Derive, Never Own
//!
//! Every operation here is a pure function over framework-owned items.
//! Items flow in through the [`content::CollectionApi`] seam, views flow
//! out as fresh sequences or strings, and nothing in between performs I/O
//! or keeps state. That buys three things:
//!
//! - **Testability**: every derivation runs against in-memory fixtures,
//!   no build framework required.
//! - **Totality**: filters and collections never fail — missing or
//!   malformed metadata degrades to a safe default, and build-level
//!   errors stay the framework's problem.
//! - **One wiring point**: [`registry::configure`] is the only place the
//!   framework and this layer meet.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | Immutable [`SiteConfig`](config::SiteConfig): directory layout, content glob, passthrough sources, template formats, Liquid options |
//! | [`content`] | [`Article`](content::Article) model, typed front matter with an open extension map, the `CollectionApi` provider seam |
//! | [`filters`] | Pure value filters: `raw`, `reading_time`, `readable_date`, `slugify` |
//! | [`collections`] | Derived views: `articles`, `topics`, `in_series`, `by_topic`, `sort_by_series_part` |
//! | [`registry`] | Static filter/collection tables, the `BuildHost` trait, `configure()` |
//!
//! # Design Decisions
//!
//! ## Static Tables Over a Mutable Registry
//!
//! Filters and collections are `const` tables of function pointers
//! ([`registry::FILTERS`], [`registry::COLLECTIONS`]) injected into the
//! host at startup. What templates can call is fixed at compile time —
//! there is no registry object to mutate, and no ambient global state.
//!
//! ## Typed Front Matter With an Escape Hatch
//!
//! The layer only reads three front-matter keys (`series`, `seriesPart`,
//! `topics`), so those are typed fields; every other key is preserved in a
//! flattened map of raw YAML values. Templates keep their freedom, the
//! index code gets real types.
//!
//! ## Wire Names Stay camelCase
//!
//! Templates call `readingTime`, `getSeries`, `filterByTopic` — renaming
//! them would break every layout that uses them. The registry preserves
//! the wire names; the Rust API underneath is ordinary snake_case.

pub mod collections;
pub mod config;
pub mod content;
pub mod filters;
pub mod registry;

#[cfg(test)]
pub(crate) mod test_helpers;
