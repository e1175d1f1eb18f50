//! Article view: derives the markdown resource and direction from the
//! navigator's parameter streams.

use anyhow::Result;
use maud::{Markup, html};
use tracing::debug;

use crate::catalog::Direction;
use crate::navigation::{DIR_PARAM, Navigator, ParamMap, Subscription, TITLE_PARAM};
use crate::render::ArticleRenderer;

/// Suffix turning an identifier into its markdown resource.
pub const RESOURCE_SUFFIX: &str = ".md";

/// State derived from the latest parameter snapshots.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DerivedArticleState {
    resource_path: Option<String>,
    active_direction: Option<String>,
}

impl DerivedArticleState {
    /// Markdown resource to render, or None when no identifier was supplied.
    pub fn resource_path(&self) -> Option<&str> {
        self.resource_path.as_deref()
    }

    /// Raw `dir` value from the latest query snapshot.
    pub fn active_direction(&self) -> Option<&str> {
        self.active_direction.as_deref()
    }

    /// Direction the content renders with once defaults are applied.
    pub fn direction(&self) -> Direction {
        Direction::from_hint(self.active_direction())
    }

    /// Identifier the resource path was derived from.
    pub fn identifier(&self) -> Option<&str> {
        self.resource_path()
            .and_then(|p| p.strip_suffix(RESOURCE_SUFFIX))
    }

    pub fn is_not_found(&self) -> bool {
        self.resource_path.is_none()
    }
}

/// Mounted article view.
///
/// Holds one subscription per parameter stream. Each stream updates only
/// the field derived from it, so the two may briefly disagree while one
/// stream has emitted and the other has not. Dropping the view releases
/// both subscriptions.
#[derive(Debug)]
pub struct ArticleView {
    params: Subscription,
    query_params: Subscription,
    state: DerivedArticleState,
}

impl ArticleView {
    /// Subscribes to the navigator and applies the current snapshots.
    pub fn mount(navigator: &Navigator) -> Self {
        let mut view = Self {
            params: navigator.subscribe_params(),
            query_params: navigator.subscribe_query_params(),
            state: DerivedArticleState::default(),
        };
        view.sync();
        debug!(state = ?view.state, "article view mounted");
        view
    }

    /// Applies every pending snapshot, each stream in its own order.
    ///
    /// # Returns
    ///
    /// Whether the derived state changed
    pub fn sync(&mut self) -> bool {
        let before = self.state.clone();

        for snapshot in self.params.drain() {
            self.apply_path_params(&snapshot);
        }
        for snapshot in self.query_params.drain() {
            self.apply_query_params(&snapshot);
        }

        self.state != before
    }

    /// Recomputes the resource path from a path parameter snapshot.
    ///
    /// A missing or empty `title` puts the view in the not-found state.
    pub fn apply_path_params(&mut self, params: &ParamMap) {
        self.state.resource_path = params
            .get(TITLE_PARAM)
            .filter(|title| !title.is_empty())
            .map(|title| format!("{}{}", title, RESOURCE_SUFFIX));
    }

    /// Recomputes the active direction from a query parameter snapshot.
    pub fn apply_query_params(&mut self, query: &ParamMap) {
        self.state.active_direction = query.get(DIR_PARAM).cloned();
    }

    pub fn state(&self) -> &DerivedArticleState {
        &self.state
    }

    /// Renders the article through the rendering collaborator.
    ///
    /// # Errors
    ///
    /// Returns error if the collaborator fails on an existing resource
    pub fn render(&self, renderer: &ArticleRenderer<'_>) -> Result<Markup> {
        match self.state.resource_path() {
            Some(resource) => renderer.render(resource, self.state.active_direction()),
            None => Ok(not_found()),
        }
    }

    /// Releases both subscriptions.
    pub fn unmount(self) {
        debug!(state = ?self.state, "article view unmounted");
    }
}

fn not_found() -> Markup {
    html! {
        div class="article-missing" {
            p { "No article selected." }
        }
    }
}
