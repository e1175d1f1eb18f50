//! The list view and the article view.
//!
//! The list view turns catalog entries into navigation transitions. The
//! article view listens to the navigator's parameter streams and derives
//! which markdown resource to render and in which direction.

pub mod article;
pub mod list;

use thiserror::Error;

use crate::navigation::NavigationError;

/// Errors raised by view operations.
#[derive(Debug, Error)]
pub enum ViewError {
    /// Activation named an identifier that is not in the catalog.
    #[error("no article with identifier '{0}'")]
    UnknownArticle(String),

    /// The navigator rejected the transition.
    #[error(transparent)]
    Navigation(#[from] NavigationError),
}
