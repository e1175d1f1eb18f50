//! Browser shell: owns the navigator and mounts views per route.

use anyhow::{Context, Result};
use maud::Markup;
use std::sync::Arc;
use tracing::debug;

use crate::catalog::Catalog;
use crate::navigation::{Navigator, Route, RouteTable};
use crate::pages::{article::article_page, list::list_page};
use crate::path::LinkMode;
use crate::render::ArticleRenderer;
use crate::views::article::{ArticleView, DerivedArticleState};
use crate::views::list::ListView;

/// The article browser.
///
/// The list view lives as long as the shell. The article view is mounted
/// when the article route becomes active and dropped, releasing its
/// subscriptions, when the user navigates back to the list.
pub struct App<'a> {
    site_title: String,
    mode: LinkMode,
    navigator: Navigator,
    list: ListView,
    article: Option<ArticleView>,
    renderer: ArticleRenderer<'a>,
}

impl<'a> App<'a> {
    /// Creates the shell positioned at the list page.
    ///
    /// # Errors
    ///
    /// Returns error if the standard routes fail to resolve the root.
    pub fn new(
        catalog: Arc<Catalog>,
        renderer: ArticleRenderer<'a>,
        site_title: impl Into<String>,
        mode: LinkMode,
    ) -> Result<Self> {
        let navigator =
            Navigator::new(RouteTable::standard()).context("Failed to initialize navigator")?;

        Ok(Self {
            site_title: site_title.into(),
            mode,
            navigator,
            list: ListView::new(catalog),
            article: None,
            renderer,
        })
    }

    /// Navigates to a URL, as if typed into the address bar.
    ///
    /// # Errors
    ///
    /// Returns error if the URL cannot be parsed.
    pub fn visit(&mut self, url: &str) -> Result<Route> {
        self.navigator
            .navigate(url)
            .with_context(|| format!("Failed to navigate to {}", url))?;
        Ok(self.settle())
    }

    /// Activates the list link for `identifier`.
    ///
    /// # Errors
    ///
    /// Returns error if the identifier is not in the catalog.
    pub fn activate(&mut self, identifier: &str) -> Result<Route> {
        self.list
            .activate(identifier, &mut self.navigator)
            .with_context(|| format!("Failed to open article {}", identifier))?;
        Ok(self.settle())
    }

    /// Goes back in history. Returns None at the first entry.
    pub fn back(&mut self) -> Option<Route> {
        self.navigator.back()?;
        Some(self.settle())
    }

    /// Goes forward in history. Returns None at the last entry.
    pub fn forward(&mut self) -> Option<Route> {
        self.navigator.forward()?;
        Some(self.settle())
    }

    pub fn active_route(&self) -> Route {
        self.navigator.active_route()
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn list(&self) -> &ListView {
        &self.list
    }

    pub fn renderer(&self) -> &ArticleRenderer<'a> {
        &self.renderer
    }

    /// Derived state of the mounted article view.
    pub fn article_state(&self) -> Option<&DerivedArticleState> {
        self.article.as_ref().map(ArticleView::state)
    }

    /// Renders the page for the active route.
    ///
    /// # Errors
    ///
    /// Returns error if the article resource exists but cannot be rendered.
    pub fn render(&self) -> Result<Markup> {
        match &self.article {
            Some(view) => {
                let content = view.render(&self.renderer)?;
                let entry = view
                    .state()
                    .identifier()
                    .and_then(|id| self.list.catalog().get(id));
                Ok(article_page(&self.site_title, entry, content, self.mode))
            }
            None => Ok(list_page(&self.site_title, &self.list, self.mode)),
        }
    }

    /// Mounts or unmounts the article view to match the active route.
    fn settle(&mut self) -> Route {
        let route = self.navigator.active_route();
        match route {
            Route::Article => {
                if let Some(view) = self.article.as_mut() {
                    if view.sync() {
                        debug!(state = ?view.state(), "article state updated");
                    }
                } else {
                    self.article = Some(ArticleView::mount(&self.navigator));
                }
            }
            Route::List => {
                if let Some(view) = self.article.take() {
                    view.unmount();
                }
            }
        }
        route
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ArticleEntry, Direction};
    use tempfile::TempDir;

    fn app(dir: &TempDir) -> App<'static> {
        let catalog = Arc::new(
            Catalog::new(vec![
                ArticleEntry::new("a", "Alpha", Direction::LeftToRight),
                ArticleEntry::new("b", "Beta", Direction::RightToLeft),
            ])
            .expect("Catalog"),
        );
        std::fs::write(dir.path().join("a.md"), "# Alpha").expect("Write a.md");
        std::fs::write(dir.path().join("b.md"), "# Beta").expect("Write b.md");
        let renderer = ArticleRenderer::with_catalog(dir.path(), catalog.clone(), LinkMode::Route);
        App::new(catalog, renderer, "Notes", LinkMode::Route).expect("App")
    }

    #[test]
    fn test_starts_on_list() {
        // Arrange
        let dir = TempDir::new().expect("Temp dir");

        // Act
        let app = app(&dir);

        // Assert
        assert_eq!(app.active_route(), Route::List);
        assert!(app.article_state().is_none());
        let html = app.render().expect("Render").into_string();
        assert!(html.contains("Alpha") && html.contains("Beta"));
    }

    #[test]
    fn test_activate_mounts_article() {
        // Arrange
        let dir = TempDir::new().expect("Temp dir");
        let mut app = app(&dir);

        // Act
        let route = app.activate("b").expect("Activate");

        // Assert
        assert_eq!(route, Route::Article);
        let state = app.article_state().expect("Article view mounted");
        assert_eq!(state.resource_path(), Some("b.md"));
        assert_eq!(state.active_direction(), Some("rtl"));
        let html = app.render().expect("Render").into_string();
        assert!(html.contains("<title>Beta - Notes</title>"), "{}", html);
        assert!(html.contains("dir=\"rtl\""));
    }

    #[test]
    fn test_returning_to_list_unmounts_article() {
        // Arrange
        let dir = TempDir::new().expect("Temp dir");
        let mut app = app(&dir);
        app.activate("a").expect("Activate");

        // Act
        app.visit("/").expect("Visit");
        app.visit("/b").expect("Visit");

        // Assert: only the freshly mounted view's subscriptions remain
        assert_eq!(app.navigator().subscriber_count(), 2);
    }

    #[test]
    fn test_back_restores_previous_article() {
        // Arrange
        let dir = TempDir::new().expect("Temp dir");
        let mut app = app(&dir);
        app.activate("a").expect("Activate");
        app.activate("b").expect("Activate");

        // Act
        let route = app.back();

        // Assert
        assert_eq!(route, Some(Route::Article));
        let state = app.article_state().expect("Mounted");
        assert_eq!(state.resource_path(), Some("a.md"));
        assert_eq!(state.active_direction(), Some("ltr"));
        assert_eq!(app.back(), Some(Route::List));
        assert!(app.article_state().is_none());
        assert_eq!(app.forward(), Some(Route::Article));
    }

    #[test]
    fn test_activate_unknown_fails() {
        let dir = TempDir::new().expect("Temp dir");
        let mut app = app(&dir);
        assert!(app.activate("zzz").is_err());
        assert_eq!(app.active_route(), Route::List);
    }
}
