//! Current location, history, and parameter emission.

use tracing::{debug, warn};

use super::{
    Location, NavigationError, ParamMap, ParamStream, Route, RouteMatch, RouteTable, Subscription,
};

/// Redirect hops allowed before a navigation is rejected.
const MAX_REDIRECTS: usize = 8;

#[derive(Debug, Clone)]
struct HistoryEntry {
    location: Location,
    route: Route,
    params: ParamMap,
}

/// Owns the current location and publishes it to subscribers.
///
/// Each transition emits the matched path parameters on one stream and the
/// query parameters on another. History behaves like a browser: navigating
/// discards forward entries, and [`back`](Self::back) and
/// [`forward`](Self::forward) replay stored entries through the same
/// streams. Redirected locations are never recorded.
#[derive(Debug)]
pub struct Navigator {
    routes: RouteTable,
    history: Vec<HistoryEntry>,
    history_index: usize,
    params: ParamStream,
    query_params: ParamStream,
}

impl Navigator {
    /// Creates a navigator positioned at the root location.
    ///
    /// # Errors
    ///
    /// Returns error if the root location cannot be resolved by `routes`.
    pub fn new(routes: RouteTable) -> Result<Self, NavigationError> {
        let start = resolve(&routes, Location::root())?;

        let mut navigator = Self {
            routes,
            history: vec![start],
            history_index: 0,
            params: ParamStream::new(),
            query_params: ParamStream::new(),
        };
        navigator.publish();
        Ok(navigator)
    }

    /// Navigates to a URL string such as `/foo?dir=rtl`.
    ///
    /// # Errors
    ///
    /// Returns error if the URL cannot be parsed or redirects loop.
    pub fn navigate(&mut self, url: &str) -> Result<Route, NavigationError> {
        let location = Location::parse(url)?;
        self.navigate_location(location)
    }

    /// Navigates to a single path segment with query parameters attached.
    ///
    /// # Errors
    ///
    /// Returns error if redirects loop.
    pub fn navigate_to(&mut self, segment: &str, query: ParamMap) -> Result<Route, NavigationError> {
        self.navigate_location(Location::segment(segment, query))
    }

    /// Navigates to an already built location.
    ///
    /// # Errors
    ///
    /// Returns error if redirects loop.
    pub fn navigate_location(&mut self, location: Location) -> Result<Route, NavigationError> {
        let entry = resolve(&self.routes, location)?;
        let route = entry.route;

        // Remove any forward history when navigating to a new location
        self.history.truncate(self.history_index + 1);
        self.history.push(entry);
        self.history_index = self.history.len() - 1;

        self.publish();
        Ok(route)
    }

    /// Steps back in history, returning the route now active.
    pub fn back(&mut self) -> Option<Route> {
        if self.history_index == 0 {
            return None;
        }
        self.history_index -= 1;
        self.publish();
        Some(self.active_route())
    }

    /// Steps forward in history, returning the route now active.
    pub fn forward(&mut self) -> Option<Route> {
        if self.history_index + 1 >= self.history.len() {
            return None;
        }
        self.history_index += 1;
        self.publish();
        Some(self.active_route())
    }

    pub fn current(&self) -> &Location {
        &self.entry().location
    }

    pub fn active_route(&self) -> Route {
        self.entry().route
    }

    /// Path parameters bound by the active route.
    pub fn params(&self) -> &ParamMap {
        &self.entry().params
    }

    /// Subscribes to path parameter snapshots.
    pub fn subscribe_params(&self) -> Subscription {
        self.params.subscribe()
    }

    /// Subscribes to query parameter snapshots.
    pub fn subscribe_query_params(&self) -> Subscription {
        self.query_params.subscribe()
    }

    /// Live subscriptions across both streams.
    pub fn subscriber_count(&self) -> usize {
        self.params.subscriber_count() + self.query_params.subscriber_count()
    }

    /// Entries recorded in history, including the current one.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    fn entry(&self) -> &HistoryEntry {
        &self.history[self.history_index]
    }

    fn publish(&mut self) {
        let entry = self.history[self.history_index].clone();
        debug!(location = %entry.location, route = ?entry.route, "navigated");
        self.params.emit(entry.params);
        self.query_params.emit(entry.location.query().clone());
    }
}

fn resolve(routes: &RouteTable, requested: Location) -> Result<HistoryEntry, NavigationError> {
    let mut location = requested;

    for _ in 0..=MAX_REDIRECTS {
        match routes.resolve(&location) {
            RouteMatch::Matched { route, params } => {
                return Ok(HistoryEntry {
                    location,
                    route,
                    params,
                });
            }
            RouteMatch::Redirect(target) => {
                warn!(from = %location, to = %target, "unmatched location, redirecting");
                location = target;
            }
        }
    }

    Err(NavigationError::RedirectLoop(location.to_string()))
}
