//! Article catalog: the ordered, immutable list of browsable articles.

use serde::Deserialize;
use std::collections::HashSet;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

use crate::navigation::{Location, ParamMap};

/// Errors raised while building a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// An entry has an empty identifier.
    #[error("article at position {0} has an empty identifier")]
    EmptyIdentifier(usize),

    /// An entry has an empty label.
    #[error("article '{0}' has an empty label")]
    EmptyLabel(String),

    /// An identifier does not survive a round trip through an article URL,
    /// e.g. `.` or `..`.
    #[error("article identifier cannot be routed: {0}")]
    UnroutableIdentifier(String),

    /// Two entries share an identifier.
    #[error("duplicate article identifier: {0}")]
    DuplicateIdentifier(String),

    /// A direction token is neither `ltr` nor `rtl`.
    #[error("invalid direction '{0}', expected 'ltr' or 'rtl'")]
    InvalidDirection(String),

    /// Catalog file is not valid TOML.
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] toml::de::Error),

    /// Catalog file could not be read.
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Text direction of an article's content.
///
/// Catalog files accept the same tokens as the `dir` query parameter,
/// case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum Direction {
    #[default]
    LeftToRight,
    RightToLeft,
}

impl Direction {
    /// Returns the token used in `dir` query parameters and HTML attributes.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::LeftToRight => "ltr",
            Self::RightToLeft => "rtl",
        }
    }

    /// Interprets an optional direction hint.
    ///
    /// Absent or unrecognized hints fall back to left-to-right, so a
    /// missing `dir` parameter never fails a render.
    pub fn from_hint(hint: Option<&str>) -> Self {
        hint.and_then(|h| h.parse().ok()).unwrap_or_default()
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ltr" => Ok(Self::LeftToRight),
            "rtl" => Ok(Self::RightToLeft),
            _ => Err(CatalogError::InvalidDirection(s.to_string())),
        }
    }
}

impl TryFrom<String> for Direction {
    type Error = CatalogError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// One navigable article.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ArticleEntry {
    identifier: String,
    label: String,
    #[serde(default)]
    direction: Direction,
}

impl ArticleEntry {
    pub fn new(identifier: impl Into<String>, label: impl Into<String>, direction: Direction) -> Self {
        Self {
            identifier: identifier.into(),
            label: label.into(),
            direction,
        }
    }

    /// Stable slug naming the article and its markdown resource.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }
}

#[derive(Deserialize)]
struct CatalogFile {
    #[serde(default, rename = "article")]
    articles: Vec<ArticleEntry>,
}

/// Ordered article list. Insertion order is display order.
///
/// Construction validates every entry, so a `Catalog` value always holds
/// non-empty, uniquely identified articles.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<ArticleEntry>,
}

impl Catalog {
    /// Builds a catalog from entries in display order.
    ///
    /// # Errors
    ///
    /// Returns error if an identifier or label is empty, if an identifier
    /// would not come back unchanged from its article URL, or if two
    /// entries share an identifier.
    pub fn new(entries: Vec<ArticleEntry>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(entries.len());

        for (position, entry) in entries.iter().enumerate() {
            if entry.identifier.trim().is_empty() {
                return Err(CatalogError::EmptyIdentifier(position));
            }
            if !is_routable(&entry.identifier) {
                return Err(CatalogError::UnroutableIdentifier(entry.identifier.clone()));
            }
            if entry.label.trim().is_empty() {
                return Err(CatalogError::EmptyLabel(entry.identifier.clone()));
            }
            if !seen.insert(entry.identifier.as_str()) {
                return Err(CatalogError::DuplicateIdentifier(entry.identifier.clone()));
            }
        }

        Ok(Self { entries })
    }

    /// Parses a TOML catalog made of `[[article]]` tables.
    ///
    /// ```toml
    /// [[article]]
    /// identifier = "tree-shaking"
    /// label = "Tree-shaking"
    /// direction = "ltr"
    /// ```
    ///
    /// `direction` defaults to `ltr` when omitted.
    ///
    /// # Errors
    ///
    /// Returns error on malformed TOML or invalid entries.
    pub fn from_toml_str(source: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(source)?;
        Self::new(file.articles)
    }

    /// Reads and parses a TOML catalog file.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or is not a valid catalog.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    /// Catalog shipped with the binary.
    pub fn builtin() -> Self {
        use Direction::{LeftToRight as Ltr, RightToLeft as Rtl};

        const BUILTIN: &[(&str, &str, Direction)] = &[
            ("tree-shaking", "Tree-shaking", Ltr),
            ("dotnet-backend", "ASP.NET Core", Ltr),
            ("oop-python", "OOP with python example", Ltr),
            ("simple-app", "Simple app (HTML, CSS, JS)", Rtl),
            ("routing-in-angular", "Routing in Angular", Ltr),
            ("problems", "Problems", Ltr),
            ("solutions", "Solutions", Ltr),
            ("important-topics-in-css", "Important topics CSS", Ltr),
            ("angular-advanced", "Angular advanced", Ltr),
            ("angular-performance", "Angular performance", Ltr),
            ("angular-tips-tricks", "Angular tips and tricks", Ltr),
            ("angular-topics", "Angular topics", Ltr),
            ("dot-net", "ASP.NET Guide", Ltr),
            ("ngrx-store", "ngrx store", Ltr),
            ("rxjs-operators", "RxJS Operators", Ltr),
            ("change-detection", "Change detection in Angular", Ltr),
            ("reactive-forms", "Reactive forms in Angular", Ltr),
            ("ngmodel", "NgModel in Angular", Ltr),
            ("dependency-injection", "Dependency injection in Angular", Ltr),
            ("scalable-project", "Scalable Angular project", Ltr),
            ("problem-solving-practice", "Problem Solving Practice", Ltr),
            ("sorting-algo-pseudocode", "Sorting Algo pseudocode", Ltr),
            ("sass-guide-with-angular-material", "SASS with angular material", Ltr),
            (
                "practical-guide-to-bem-methodology-in-css",
                "Practical Guide to BEM Methodology in CSS",
                Ltr,
            ),
            (
                "practical-guide-to-mobile-first-design-strategy",
                "Practical Guide to Mobile-First Design Strategy",
                Ltr,
            ),
            (
                "habits-of-highly-productive-developers",
                "14 Habits of Highly Productive Developers",
                Ltr,
            ),
            (
                "habits-of-highly-productive-developers-arabic",
                "عادات المبرمج الشاطر",
                Rtl,
            ),
        ];

        // Static data is unique and non-empty; built directly without validation.
        Self {
            entries: BUILTIN
                .iter()
                .map(|&(id, label, dir)| ArticleEntry::new(id, label, dir))
                .collect(),
        }
    }

    pub fn entries(&self) -> &[ArticleEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ArticleEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up an entry by identifier.
    pub fn get(&self, identifier: &str) -> Option<&ArticleEntry> {
        self.entries.iter().find(|e| e.identifier == identifier)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a ArticleEntry;
    type IntoIter = std::slice::Iter<'a, ArticleEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Whether `identifier` is recovered intact from the URL it is linked by.
fn is_routable(identifier: &str) -> bool {
    let url = Location::segment(identifier, ParamMap::new()).to_url_string();
    Location::parse(&url).is_ok_and(|location| location.segments() == [identifier])
}
