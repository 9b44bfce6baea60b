//! Static site configuration.
//!
//! The build framework consumes one immutable [`SiteConfig`], built at
//! process start and passed by reference wherever it is needed. There is no
//! config file, no environment lookup, and no mutation after construction —
//! [`SiteConfig::default()`] carries the canonical values and a host that
//! wants different paths constructs the struct directly.
//!
//! ## Site Layout
//!
//! The defaults describe this content tree:
//!
//! ```text
//! web/                          # Input root
//! ├── _includes/                # Layouts and partials
//! ├── assets/                   # Passthrough-copied to the output root
//! └── posts/
//!     ├── 2024-03-05-hello.md   # Articles matched by web/posts/*.md
//!     └── ...
//! _site/                        # Rendered output
//! ```
//!
//! ## Template Handling
//!
//! Source content arrives in two formats (`md`, `liquid`); Liquid renders
//! both markdown bodies and plain templated files. Output trimming strips
//! the leading/trailing whitespace template tags leave behind.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Site configuration handed to the build framework.
///
/// All fields have defaults matching the canonical site layout. Unknown
/// keys are rejected to catch typos early.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Directory layout: input root, output root, includes.
    pub dir: DirConfig,
    /// Glob matching the article source files, relative to the project root.
    pub posts_glob: String,
    /// Directories copied to the output root unchanged, without templating.
    pub passthrough: Vec<PathBuf>,
    /// Source formats the framework should pick up.
    pub template_formats: Vec<TemplateFormat>,
    /// Engine used for markdown bodies.
    pub markdown_template_engine: TemplateFormat,
    /// Engine used for plain templated files.
    pub html_template_engine: TemplateFormat,
    /// Liquid engine options.
    pub liquid: LiquidOptions,
}

fn default_posts_glob() -> String {
    "web/posts/*.md".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            dir: DirConfig::default(),
            posts_glob: default_posts_glob(),
            passthrough: vec![PathBuf::from("web/assets")],
            template_formats: vec![TemplateFormat::Md, TemplateFormat::Liquid],
            markdown_template_engine: TemplateFormat::Liquid,
            html_template_engine: TemplateFormat::Liquid,
            liquid: LiquidOptions::default(),
        }
    }
}

/// Input, output, and includes directories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DirConfig {
    /// Content root the framework walks.
    pub input: PathBuf,
    /// Where the rendered site is written.
    pub output: PathBuf,
    /// Layouts and partials, relative to the input root.
    pub includes: PathBuf,
}

impl Default for DirConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("web"),
            output: PathBuf::from("_site"),
            includes: PathBuf::from("_includes"),
        }
    }
}

/// A template source format / engine name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateFormat {
    Md,
    Liquid,
}

/// Options forwarded to the Liquid engine.
///
/// Both trim flags default on: template tags on their own lines would
/// otherwise leave blank lines throughout the rendered output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LiquidOptions {
    pub trim_output_left: bool,
    pub trim_output_right: bool,
}

impl Default for LiquidOptions {
    fn default() -> Self {
        Self {
            trim_output_left: true,
            trim_output_right: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_site_layout() {
        let config = SiteConfig::default();
        assert_eq!(config.dir.input, PathBuf::from("web"));
        assert_eq!(config.dir.output, PathBuf::from("_site"));
        assert_eq!(config.dir.includes, PathBuf::from("_includes"));
        assert_eq!(config.posts_glob, "web/posts/*.md");
        assert_eq!(config.passthrough, vec![PathBuf::from("web/assets")]);
    }

    #[test]
    fn defaults_use_liquid_for_both_engines() {
        let config = SiteConfig::default();
        assert_eq!(config.markdown_template_engine, TemplateFormat::Liquid);
        assert_eq!(config.html_template_engine, TemplateFormat::Liquid);
        assert_eq!(
            config.template_formats,
            vec![TemplateFormat::Md, TemplateFormat::Liquid]
        );
    }

    #[test]
    fn trim_flags_default_on() {
        let liquid = LiquidOptions::default();
        assert!(liquid.trim_output_left);
        assert!(liquid.trim_output_right);
    }

    #[test]
    fn sparse_override_keeps_other_defaults() {
        let config: SiteConfig =
            serde_json::from_str(r#"{ "posts_glob": "content/*.md" }"#).unwrap();
        assert_eq!(config.posts_glob, "content/*.md");
        assert_eq!(config.dir, DirConfig::default());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result: Result<SiteConfig, _> = serde_json::from_str(r#"{ "post_glob": "x" }"#);
        assert!(result.is_err());
    }

    #[test]
    fn template_formats_serialize_lowercase() {
        assert_eq!(
            serde_json::to_string(&TemplateFormat::Md).unwrap(),
            r#""md""#
        );
        assert_eq!(
            serde_json::to_string(&TemplateFormat::Liquid).unwrap(),
            r#""liquid""#
        );
    }
}
