//! Navigation engine: locations, route table, parameter streams, history.
//!
//! The [`Navigator`] owns the current location. Every transition publishes
//! one snapshot on the path parameter stream and one on the query parameter
//! stream. Views subscribe to those streams independently and derive their
//! state from whatever snapshots they have seen.

mod location;
mod navigator;
mod routes;
mod stream;

use thiserror::Error;

pub use location::{Location, ParamMap};
pub use navigator::Navigator;
pub use routes::{Route, RouteMatch, RouteTable};
pub use stream::{ParamStream, Subscription};

/// Path parameter bound to the article identifier.
pub const TITLE_PARAM: &str = "title";

/// Query parameter carrying the article's text direction.
pub const DIR_PARAM: &str = "dir";

/// Errors raised by the navigation engine.
#[derive(Debug, Error)]
pub enum NavigationError {
    /// Input could not be parsed as a URL or path.
    #[error("invalid url '{input}': {source}")]
    InvalidUrl {
        input: String,
        #[source]
        source: url::ParseError,
    },

    /// A path segment is not valid percent-encoded UTF8.
    #[error("invalid percent-encoding in path segment '{0}'")]
    InvalidEncoding(String),

    /// Redirects kept pointing at unmatched locations.
    #[error("redirect loop while resolving '{0}'")]
    RedirectLoop(String),
}
