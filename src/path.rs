//! Link and output path utilities for HTML generation.

use std::path::{Component, Path, PathBuf};

use crate::catalog::Direction;
use crate::navigation::{DIR_PARAM, Location, ParamMap};

/// Page depth of the list page (`index.html`).
pub const LIST_DEPTH: usize = 0;

/// Page depth of article pages (`<identifier>/index.html`).
pub const ARTICLE_DEPTH: usize = 1;

/// How rendered pages link to each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LinkMode {
    /// Absolute route surface URLs: `/`, `/<identifier>?dir=<dir>`.
    #[default]
    Route,
    /// Relative links between generated files, usable from `file://`.
    Static,
}

impl LinkMode {
    /// Link to the list page from a page at `depth`.
    pub fn list_href(self, depth: usize) -> String {
        match self {
            Self::Route => "/".to_string(),
            Self::Static => format!("{}index.html", "../".repeat(depth)),
        }
    }

    /// Link to an article from a page at `depth`, carrying its direction.
    pub fn article_href(self, identifier: &str, direction: Direction, depth: usize) -> String {
        match self {
            Self::Route => article_location(identifier, direction).to_url_string(),
            Self::Static => format!(
                "{}{}/index.html?{}={}",
                "../".repeat(depth),
                urlencoding::encode(identifier),
                DIR_PARAM,
                direction
            ),
        }
    }

    /// Link to a bundled asset from a page at `depth`.
    pub fn asset_href(self, name: &str, depth: usize) -> String {
        match self {
            Self::Route => format!("/assets/{}", name),
            Self::Static => format!("{}assets/{}", "../".repeat(depth), name),
        }
    }
}

/// Route surface location of an article.
pub fn article_location(identifier: &str, direction: Direction) -> Location {
    let query = ParamMap::from([(DIR_PARAM.to_string(), direction.to_string())]);
    Location::segment(identifier, query)
}

/// Checks that a path is a plain relative path inside its root.
///
/// Rejects absolute paths, `..` components, and anything else that could
/// escape the directory it is joined onto.
pub fn is_contained(path: &str) -> bool {
    if path.is_empty() || path.contains('\\') {
        return false;
    }
    Path::new(path)
        .components()
        .all(|c| matches!(c, Component::Normal(_)))
}

/// Output file for an article page, relative to the site root.
pub fn article_output_path(identifier: &str) -> PathBuf {
    Path::new(identifier).join("index.html")
}
