//! Markdown rendering with GitHub Flavored Markdown support.
//!
//! Articles are parsed with comrak, links between catalog articles are
//! resolved on the syntax tree, and code is highlighted with syntect and
//! kept left-to-right inside right-to-left articles.

mod links;
mod renderer;

pub use links::LinkResolver;
pub use renderer::MarkdownRenderer;
