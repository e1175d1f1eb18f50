//! Route declarations and matching.

use super::{Location, ParamMap, TITLE_PARAM};

/// View a matched location activates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    List,
    Article,
}

/// Outcome of resolving a location against the route table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteMatch {
    /// A declared pattern matched; `params` holds the bound path parameters.
    Matched { route: Route, params: ParamMap },
    /// Nothing matched; navigation continues at the given location.
    Redirect(Location),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum PatternSegment {
    Literal(String),
    Param(String),
}

#[derive(Debug, Clone)]
struct RouteDecl {
    pattern: Vec<PatternSegment>,
    route: Route,
}

/// Ordered route declarations plus a catch-all redirect target.
///
/// Patterns are slash separated. A segment starting with `:` binds a path
/// parameter, anything else must match literally. The empty pattern
/// matches the root. Declarations are tried in order and the first match
/// wins.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<RouteDecl>,
    fallback: Location,
}

impl RouteTable {
    /// Creates an empty table redirecting everything to the root.
    pub fn new() -> Self {
        Self {
            routes: Vec::new(),
            fallback: Location::root(),
        }
    }

    /// The article browser's routes: `/` lists, `/:title` shows an article,
    /// anything else goes back to `/`.
    pub fn standard() -> Self {
        Self::new()
            .route("", Route::List)
            .route(&format!(":{}", TITLE_PARAM), Route::Article)
    }

    /// Declares a pattern for a route.
    pub fn route(mut self, pattern: &str, route: Route) -> Self {
        let pattern = pattern
            .split('/')
            .filter(|s| !s.is_empty())
            .map(|s| match s.strip_prefix(':') {
                Some(name) => PatternSegment::Param(name.to_string()),
                None => PatternSegment::Literal(s.to_string()),
            })
            .collect();
        self.routes.push(RouteDecl { pattern, route });
        self
    }

    /// Sets the location unmatched paths redirect to.
    pub fn redirect_unmatched(mut self, target: Location) -> Self {
        self.fallback = target;
        self
    }

    /// Resolves a location to a route or a redirect.
    pub fn resolve(&self, location: &Location) -> RouteMatch {
        for decl in &self.routes {
            if let Some(params) = match_pattern(&decl.pattern, location.segments()) {
                return RouteMatch::Matched {
                    route: decl.route,
                    params,
                };
            }
        }

        RouteMatch::Redirect(self.fallback.clone())
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::standard()
    }
}

fn match_pattern(pattern: &[PatternSegment], segments: &[String]) -> Option<ParamMap> {
    if pattern.len() != segments.len() {
        return None;
    }

    let mut params = ParamMap::new();
    for (expected, actual) in pattern.iter().zip(segments) {
        match expected {
            PatternSegment::Literal(literal) if literal == actual => {}
            PatternSegment::Literal(_) => return None,
            PatternSegment::Param(name) => {
                params.insert(name.clone(), actual.clone());
            }
        }
    }

    Some(params)
}
