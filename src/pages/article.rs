//! Article detail page

use maud::{Markup, html};

use crate::catalog::ArticleEntry;
use crate::components::layout::page_wrapper;
use crate::components::nav::breadcrumb;
use crate::path::{ARTICLE_DEPTH, LinkMode};

/// Generates an article page around already rendered content.
///
/// # Arguments
///
/// * `site_title`: Site name for the breadcrumb and page title
/// * `entry`: Catalog entry of the article, if the identifier is known
/// * `content`: Markup produced by the article view
/// * `mode`: Link style for navigation and assets
///
/// # Returns
///
/// Complete HTML document
pub fn article_page(
    site_title: &str,
    entry: Option<&ArticleEntry>,
    content: Markup,
    mode: LinkMode,
) -> Markup {
    let stylesheets = vec![
        mode.asset_href("article.css", ARTICLE_DEPTH),
        mode.asset_href("markdown.css", ARTICLE_DEPTH),
    ];
    let title = entry.map_or("Article", ArticleEntry::label);
    let current = entry.map(|e| (e.label(), e.direction().as_str()));

    page_wrapper(
        title,
        site_title,
        &stylesheets,
        html! {
            (breadcrumb(site_title, &mode.list_href(ARTICLE_DEPTH), current))
            main class="article-card" {
                (content)
            }
        },
    )
}
