//! Article rendering: resource lookup, markdown rendering, direction.

use anyhow::{Context, Result};
use maud::{Markup, PreEscaped, html};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, warn};

use crate::catalog::{Catalog, Direction};
use crate::markdown::{LinkResolver, MarkdownRenderer};
use crate::path::{LinkMode, is_contained};

/// Turns a markdown resource path and a direction hint into markup.
///
/// Resources are read from the content root. A resource that does not
/// exist, or whose path would escape the root, renders as a "missing
/// article" fragment instead of failing; only read and render errors on
/// existing files are reported as errors.
pub struct ArticleRenderer<'a> {
    content_root: PathBuf,
    markdown: MarkdownRenderer<'a>,
}

impl<'a> ArticleRenderer<'a> {
    /// Creates renderer reading from `content_root`, without link rewriting.
    pub fn new(content_root: impl Into<PathBuf>) -> Self {
        Self {
            content_root: content_root.into(),
            markdown: MarkdownRenderer::new(),
        }
    }

    /// Creates renderer that rewrites links between catalog articles.
    pub fn with_catalog(content_root: impl Into<PathBuf>, catalog: Arc<Catalog>, mode: LinkMode) -> Self {
        Self {
            content_root: content_root.into(),
            markdown: MarkdownRenderer::with_link_resolver(LinkResolver::new(catalog, mode)),
        }
    }

    pub fn content_root(&self) -> &Path {
        &self.content_root
    }

    /// Locates a resource inside the content root.
    ///
    /// # Returns
    ///
    /// Full path of the resource, or None if it is not a contained
    /// relative path or no such file exists
    pub fn locate(&self, resource_path: &str) -> Option<PathBuf> {
        if !is_contained(resource_path) {
            return None;
        }
        let path = self.content_root.join(resource_path);
        path.is_file().then_some(path)
    }

    /// Renders the resource with the given direction hint.
    ///
    /// An absent or unrecognized hint renders left-to-right.
    ///
    /// # Arguments
    ///
    /// * `resource_path`: Markdown file relative to the content root
    /// * `direction_hint`: Raw `dir` value, if any
    ///
    /// # Errors
    ///
    /// Returns error if an existing resource cannot be read or rendered
    pub fn render(&self, resource_path: &str, direction_hint: Option<&str>) -> Result<Markup> {
        let direction = Direction::from_hint(direction_hint);

        let Some(path) = self.locate(resource_path) else {
            warn!(resource = resource_path, "article resource not found");
            return Ok(missing_article(resource_path));
        };

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read article: {}", path.display()))?;
        let rendered = self
            .markdown
            .render(&content, direction)
            .with_context(|| format!("Failed to render article: {}", resource_path))?;

        debug!(resource = resource_path, %direction, bytes = content.len(), "rendered article");

        Ok(html! {
            article class="markdown-body" dir=(direction.as_str()) {
                (PreEscaped(rendered))
            }
        })
    }
}

/// Fragment shown when a resource cannot be found.
fn missing_article(resource_path: &str) -> Markup {
    html! {
        div class="article-missing" {
            p { "Article not found: " code { (resource_path) } }
        }
    }
}
