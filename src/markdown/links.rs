//! Link resolution for references between articles.

use anyhow::{Result, bail};
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use crate::catalog::Catalog;
use crate::path::{ARTICLE_DEPTH, LinkMode};

/// Resolves relative markdown links between articles to article routes.
///
/// A link such as `./rxjs-operators.md` or `../ngrx-store.md#effects`
/// whose file stem names a catalog entry is rewritten to that article's
/// route, carrying the entry's direction. Everything else is left alone.
pub struct LinkResolver {
    catalog: Arc<Catalog>,
    mode: LinkMode,
}

impl LinkResolver {
    /// Creates link resolver for pages rendered in `mode`.
    ///
    /// # Arguments
    ///
    /// * `catalog`: Articles that links may point to
    /// * `mode`: Link style of the page being rendered
    pub fn new(catalog: Arc<Catalog>, mode: LinkMode) -> Self {
        Self { catalog, mode }
    }

    /// Resolves link to an article URL.
    ///
    /// Handles different link types:
    /// - Absolute URLs (http://, https://, mailto:) remain unchanged
    /// - Anchor links (#section) remain unchanged
    /// - Images remain unchanged
    /// - Relative `.md` links naming a catalog entry resolve to its route
    /// - Other relative links remain unchanged
    ///
    /// # Arguments
    ///
    /// * `link`: Link href from markdown
    /// * `is_image`: Whether link is for image
    ///
    /// # Returns
    ///
    /// Resolved URL for the page's link mode
    ///
    /// # Errors
    ///
    /// Returns error if the link is an absolute path
    pub fn resolve(&self, link: &str, is_image: bool) -> Result<String> {
        if is_image || link.starts_with('#') || link.contains("://") || link.starts_with("mailto:") {
            return Ok(link.to_string());
        }

        let (path_part, fragment) = match link.split_once('#') {
            Some((path, fragment)) => (path, Some(fragment)),
            None => (link, None),
        };

        let Some(stem) = path_part.strip_suffix(".md") else {
            return Ok(link.to_string());
        };

        let normalized = normalize_path(Path::new(stem))?;
        let Some(identifier) = normalized.to_str() else {
            return Ok(link.to_string());
        };

        let Some(entry) = self.catalog.get(identifier) else {
            return Ok(link.to_string());
        };

        let mut href = self
            .mode
            .article_href(entry.identifier(), entry.direction(), ARTICLE_DEPTH);
        if let Some(fragment) = fragment {
            href.push('#');
            href.push_str(fragment);
        }
        Ok(href)
    }
}

/// Normalizes path by resolving `..` and `.` components.
///
/// Articles live in a flat content directory, so `../x.md` seen from
/// another article is still `x`. Absolute paths are rejected.
fn normalize_path(path: &Path) -> Result<PathBuf> {
    let mut components = Vec::new();

    for component in path.components() {
        match component {
            Component::Normal(c) => components.push(c),
            Component::ParentDir => {
                components.pop();
            }
            Component::RootDir => bail!("Absolute article link: {}", path.display()),
            Component::CurDir | Component::Prefix(_) => {}
        }
    }

    Ok(components.iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ArticleEntry, Direction};

    fn resolver(mode: LinkMode) -> LinkResolver {
        let catalog = Catalog::new(vec![
            ArticleEntry::new("api", "API", Direction::LeftToRight),
            ArticleEntry::new("arabic", "Arabic", Direction::RightToLeft),
        ])
        .expect("Test catalog is valid");
        LinkResolver::new(Arc::new(catalog), mode)
    }

    #[test]
    fn test_resolve_relative_link() {
        // Arrange
        let resolver = resolver(LinkMode::Route);

        // Act
        let result = resolver.resolve("./api.md", false).expect("Should resolve");

        // Assert
        assert_eq!(result, "/api?dir=ltr");
    }

    #[test]
    fn test_resolve_carries_direction() {
        let resolver = resolver(LinkMode::Route);
        let result = resolver.resolve("arabic.md", false).expect("Should resolve");
        assert_eq!(result, "/arabic?dir=rtl");
    }

    #[test]
    fn test_resolve_static_mode() {
        // Arrange
        let resolver = resolver(LinkMode::Static);

        // Act
        let result = resolver.resolve("../api.md", false).expect("Should resolve");

        // Assert
        assert_eq!(result, "../api/index.html?dir=ltr");
    }

    #[test]
    fn test_resolve_keeps_fragment() {
        let resolver = resolver(LinkMode::Route);
        let result = resolver.resolve("./api.md#usage", false).expect("Should resolve");
        assert_eq!(result, "/api?dir=ltr#usage");
    }

    #[test]
    fn test_resolve_absolute_url_unchanged() {
        // Arrange
        let resolver = resolver(LinkMode::Route);

        // Act
        let result = resolver
            .resolve("https://example.com/api.md", false)
            .expect("Should pass through");

        // Assert
        assert_eq!(result, "https://example.com/api.md");
    }

    #[test]
    fn test_resolve_anchor_link_unchanged() {
        let resolver = resolver(LinkMode::Route);
        assert_eq!(resolver.resolve("#section", false).expect("Anchor"), "#section");
    }

    #[test]
    fn test_resolve_image_unchanged() {
        let resolver = resolver(LinkMode::Static);
        assert_eq!(
            resolver.resolve("./api.md", true).expect("Image"),
            "./api.md",
            "Images are never rewritten"
        );
    }

    #[test]
    fn test_resolve_unknown_article_unchanged() {
        let resolver = resolver(LinkMode::Route);
        assert_eq!(
            resolver.resolve("./missing.md", false).expect("Unknown"),
            "./missing.md"
        );
    }

    #[test]
    fn test_resolve_non_markdown_unchanged() {
        let resolver = resolver(LinkMode::Route);
        assert_eq!(resolver.resolve("./api.txt", false).expect("Other"), "./api.txt");
    }

    #[test]
    fn test_resolve_rejects_absolute_path() {
        let resolver = resolver(LinkMode::Route);
        assert!(resolver.resolve("/api.md", false).is_err());
    }
}
