//! Static markdown article browser.

pub mod app;
mod assets;
pub mod catalog;
pub mod components;
mod config;
mod markdown;
pub mod navigation;
pub mod pages;
pub mod path;
pub mod render;
pub mod site;
pub mod views;

pub use app::App;
pub use assets::write_css_assets;
pub use catalog::{ArticleEntry, Catalog, CatalogError, Direction};
pub use config::Config;
pub use markdown::{LinkResolver, MarkdownRenderer};
pub use navigation::{Location, NavigationError, Navigator, ParamMap, Route, RouteTable};
pub use path::LinkMode;
pub use render::ArticleRenderer;
pub use site::{SiteReport, generate_site};
pub use views::ViewError;
pub use views::article::{ArticleView, DerivedArticleState};
pub use views::list::ListView;
