//! List view: one activatable link per catalog entry.

use maud::{Markup, html};
use std::sync::Arc;
use tracing::debug;

use super::ViewError;
use crate::catalog::{ArticleEntry, Catalog};
use crate::navigation::{Navigator, Route};
use crate::path::{LinkMode, article_location};

/// A rendered catalog link.
#[derive(Debug, Clone, Copy)]
pub struct ArticleLink<'a> {
    entry: &'a ArticleEntry,
}

impl<'a> ArticleLink<'a> {
    pub fn entry(&self) -> &'a ArticleEntry {
        self.entry
    }

    /// Route surface URL, `/<identifier>?dir=<dir>`, with the identifier
    /// percent-encoded.
    pub fn href(&self) -> String {
        article_location(self.entry.identifier(), self.entry.direction()).to_url_string()
    }
}

/// Renders the catalog as navigable links and turns activations into
/// navigator transitions.
#[derive(Debug, Clone)]
pub struct ListView {
    catalog: Arc<Catalog>,
}

impl ListView {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Links in catalog order.
    pub fn links(&self) -> Vec<ArticleLink<'_>> {
        self.catalog.iter().map(|entry| ArticleLink { entry }).collect()
    }

    /// Activates the link for `identifier`.
    ///
    /// Navigates to the identifier's path segment with the entry's
    /// direction attached as the `dir` query parameter. Activating the
    /// link of the current article again produces the same snapshots.
    ///
    /// # Errors
    ///
    /// Returns error if the identifier is not in the catalog or the
    /// navigator rejects the transition.
    pub fn activate(&self, identifier: &str, navigator: &mut Navigator) -> Result<Route, ViewError> {
        let entry = self
            .catalog
            .get(identifier)
            .ok_or_else(|| ViewError::UnknownArticle(identifier.to_string()))?;

        debug!(identifier, direction = %entry.direction(), "link activated");
        let location = article_location(entry.identifier(), entry.direction());
        Ok(navigator.navigate_location(location)?)
    }

    /// Renders the link list for a page at `depth`.
    pub fn render(&self, mode: LinkMode, depth: usize) -> Markup {
        html! {
            @if self.catalog.is_empty() {
                p class="empty-state" { "No articles yet" }
            } @else {
                ul class="article-list" {
                    @for link in self.links() {
                        @let entry = link.entry();
                        li class="article-row" {
                            a href=(mode.article_href(entry.identifier(), entry.direction(), depth))
                                dir=(entry.direction().as_str())
                                class="article-link" {
                                (entry.label())
                            }
                        }
                    }
                }
            }
        }
    }
}
