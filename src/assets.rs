//! CSS asset bundling

use anyhow::{Context, Result};
use std::{fs, path::Path};

const BASE: &str = include_str!("../assets/base.css");
const LAYOUT: &str = include_str!("../assets/components/layout.css");
const NAV: &str = include_str!("../assets/components/nav.css");

const LIST_PAGE: &str = include_str!("../assets/page-list.css");
const ARTICLE_PAGE: &str = include_str!("../assets/page-article.css");
const MARKDOWN: &str = include_str!("../assets/markdown.css");

/// Writes all bundled CSS assets to output directory
pub fn write_css_assets(assets_dir: &Path) -> Result<()> {
    write_bundled(assets_dir, "list.css", &[BASE, LAYOUT, LIST_PAGE])?;
    write_bundled(assets_dir, "article.css", &[BASE, LAYOUT, NAV, ARTICLE_PAGE])?;
    write_bundled(assets_dir, "markdown.css", &[MARKDOWN])?;
    Ok(())
}

fn write_bundled(dir: &Path, name: &str, parts: &[&str]) -> Result<()> {
    let css = parts.join("\n");
    fs::write(dir.join(name), css)
        .with_context(|| format!("Failed to write CSS asset: {}", name))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_css_assets() {
        // Arrange
        let dir = TempDir::new().expect("Temp dir");

        // Act
        write_css_assets(dir.path()).expect("Should write assets");

        // Assert
        for name in ["list.css", "article.css", "markdown.css"] {
            let css = fs::read_to_string(dir.path().join(name)).expect("Asset exists");
            assert!(!css.is_empty(), "{} should not be empty", name);
        }
        let article = fs::read_to_string(dir.path().join("article.css")).expect("article.css");
        assert!(article.contains(".breadcrumb"), "Article bundle includes nav styles");
    }
}
