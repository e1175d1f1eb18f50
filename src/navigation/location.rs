//! URL locations understood by the navigator.

use std::collections::BTreeMap;
use std::fmt;
use url::{Position, Url};

use super::NavigationError;

/// Ordered key/value snapshot of path or query parameters.
pub type ParamMap = BTreeMap<String, String>;

/// Placeholder origin used to resolve relative inputs; never rendered.
const BASE_URL: &str = "http://mdshelf.invalid/";

/// A navigable location: decoded path segments plus query parameters.
///
/// Locations are values. A navigation creates a new one instead of
/// mutating the current one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Location {
    segments: Vec<String>,
    query: ParamMap,
}

impl Location {
    /// The empty path, `/`.
    pub fn root() -> Self {
        Self::default()
    }

    pub fn new(segments: Vec<String>, query: ParamMap) -> Self {
        Self { segments, query }
    }

    /// Location of a single path segment with query parameters attached.
    pub fn segment(segment: impl Into<String>, query: ParamMap) -> Self {
        Self::new(vec![segment.into()], query)
    }

    /// Parses user input such as `/foo?dir=rtl`, `foo`, or a full URL.
    ///
    /// Anything without `://` is a path from the site root, so `//a/b` and
    /// `c:notes` stay paths rather than becoming a host or a scheme. Empty
    /// segments (from doubled or trailing slashes) are dropped and the rest
    /// are percent-decoded. Repeated query keys keep the last value.
    ///
    /// # Errors
    ///
    /// Returns error if input is not a valid URL reference or a segment
    /// decodes to invalid UTF8.
    pub fn parse(input: &str) -> Result<Self, NavigationError> {
        let invalid = |source| NavigationError::InvalidUrl {
            input: input.to_string(),
            source,
        };

        let trimmed = input.trim();
        let url = if trimmed.contains("://") {
            Url::parse(trimmed).map_err(invalid)?
        } else {
            let path = format!("/{}", trimmed.trim_start_matches('/'));
            Url::parse(BASE_URL)
                .and_then(|base| base.join(&path))
                .map_err(invalid)?
        };

        let mut segments = Vec::new();
        for raw in url.path_segments().into_iter().flatten() {
            if raw.is_empty() {
                continue;
            }
            let decoded = urlencoding::decode(raw)
                .map_err(|_| NavigationError::InvalidEncoding(raw.to_string()))?;
            segments.push(decoded.into_owned());
        }

        let query = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();

        Ok(Self { segments, query })
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn query(&self) -> &ParamMap {
        &self.query
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Formats the location as an absolute path with query string.
    ///
    /// Segments are percent-encoded, so identifiers containing spaces,
    /// slashes or non-ASCII text survive a round trip through [`parse`].
    ///
    /// [`parse`]: Location::parse
    pub fn to_url_string(&self) -> String {
        let Ok(mut url) = Url::parse(BASE_URL) else {
            return "/".to_string();
        };

        if let Ok(mut path) = url.path_segments_mut() {
            path.clear().extend(self.segments.iter());
        }

        if !self.query.is_empty() {
            url.query_pairs_mut().extend_pairs(self.query.iter());
        }

        url[Position::BeforePath..].to_string()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_url_string())
    }
}
