//! Static site generation.
//!
//! Walks every catalog link through the browser shell, exactly as a user
//! clicking through the list would, and writes each rendered page to disk.

use anyhow::{Context, Result, bail};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};

use crate::app::App;
use crate::assets::write_css_assets;
use crate::catalog::{ArticleEntry, Catalog};
use crate::path::{LinkMode, article_output_path, is_contained};
use crate::render::ArticleRenderer;

/// Summary of a generated site.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteReport {
    /// Index page path.
    pub index: PathBuf,
    /// Article pages written, in catalog order.
    pub articles: Vec<PathBuf>,
    /// Identifiers whose markdown resource was missing.
    pub missing: Vec<String>,
}

/// Generates the static site for `catalog` into `output`.
///
/// Writes `index.html`, one `<identifier>/index.html` per article, and the
/// bundled CSS under `assets/`. Articles whose markdown file is missing
/// still get a page showing the missing-article notice.
///
/// # Arguments
///
/// * `catalog`: Articles to publish
/// * `content`: Directory holding `<identifier>.md` files
/// * `output`: Output directory, created if needed
/// * `site_title`: Site name for headings and page titles
///
/// # Errors
///
/// Returns error if an identifier cannot be used as a directory name,
/// or if rendering or writing any page fails
pub fn generate_site(
    catalog: Arc<Catalog>,
    content: &Path,
    output: &Path,
    site_title: &str,
) -> Result<SiteReport> {
    for entry in catalog.iter() {
        if !is_contained(entry.identifier()) || entry.identifier().contains('/') {
            bail!(
                "Article identifier cannot be used as an output directory: {}",
                entry.identifier()
            );
        }
    }

    fs::create_dir_all(output).context("Failed to create output directory")?;
    let assets_dir = output.join("assets");
    fs::create_dir_all(&assets_dir).context("Failed to create assets directory")?;
    write_css_assets(&assets_dir)?;

    let renderer = ArticleRenderer::with_catalog(content, catalog.clone(), LinkMode::Static);
    let mut app = App::new(catalog.clone(), renderer, site_title, LinkMode::Static)?;
    let mut report = SiteReport::default();

    let index = output.join("index.html");
    write_page(&index, &app.render()?.into_string())?;
    info!(path = %index.display(), "generated list page");
    report.index = index;

    for entry in catalog.iter() {
        write_article(&mut app, entry, output, &mut report)?;
    }

    Ok(report)
}

/// Opens one article from the list, writes its page, then returns to the
/// list so history stays at two entries however large the catalog is.
fn write_article(
    app: &mut App<'_>,
    entry: &ArticleEntry,
    output: &Path,
    report: &mut SiteReport,
) -> Result<()> {
    app.activate(entry.identifier())?;

    let resource_exists = app
        .article_state()
        .and_then(|state| state.resource_path())
        .and_then(|resource| app.renderer().locate(resource))
        .is_some();
    if !resource_exists {
        warn!(identifier = entry.identifier(), "markdown file missing");
        report.missing.push(entry.identifier().to_string());
    }

    let path = output.join(article_output_path(entry.identifier()));
    let html = app
        .render()
        .with_context(|| format!("Failed to render article {}", entry.identifier()))?;
    write_page(&path, &html.into_string())?;
    info!(path = %path.display(), direction = %entry.direction(), "generated article page");
    report.articles.push(path);

    app.back();
    Ok(())
}

fn write_page(path: &Path, html: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(path, html).with_context(|| format!("Failed to write page: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Direction;
    use crate::navigation::Route;
    use tempfile::TempDir;

    #[test]
    fn test_write_article_returns_to_list() {
        // Arrange
        let dir = TempDir::new().expect("Temp dir");
        let catalog = Arc::new(
            Catalog::new(vec![
                ArticleEntry::new("a", "Alpha", Direction::LeftToRight),
                ArticleEntry::new("b", "Beta", Direction::RightToLeft),
            ])
            .expect("Catalog"),
        );
        fs::write(dir.path().join("a.md"), "# Alpha\n").expect("Write a.md");
        let renderer = ArticleRenderer::new(dir.path());
        let mut app = App::new(catalog.clone(), renderer, "Notes", LinkMode::Static).expect("App");
        let output = dir.path().join("out");
        let mut report = SiteReport::default();

        // Act
        for entry in catalog.iter() {
            write_article(&mut app, entry, &output, &mut report).expect("Write article");
        }

        // Assert
        assert_eq!(app.active_route(), Route::List);
        assert!(app.article_state().is_none(), "Article view should be unmounted");
        assert_eq!(app.navigator().history_len(), 2);
        assert_eq!(report.articles.len(), 2);
        assert_eq!(report.missing, vec!["b".to_string()]);
        assert!(output.join("b").join("index.html").is_file());
    }
}
