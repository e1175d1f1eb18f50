//! Article list page

use maud::{Markup, html};

use crate::components::layout::page_wrapper;
use crate::path::{LIST_DEPTH, LinkMode};
use crate::views::list::ListView;

/// Generates the list page.
///
/// # Arguments
///
/// * `site_title`: Site name shown as heading and page title
/// * `view`: List view holding the catalog
/// * `mode`: Link style for article links and assets
///
/// # Returns
///
/// Complete HTML document
pub fn list_page(site_title: &str, view: &ListView, mode: LinkMode) -> Markup {
    let stylesheets = vec![mode.asset_href("list.css", LIST_DEPTH)];

    page_wrapper(
        site_title,
        site_title,
        &stylesheets,
        html! {
            header class="site-header" {
                h1 class="site-title" { (site_title) }
                span class="article-count" { (view.catalog().len()) " articles" }
            }
            main class="list-card" {
                (view.render(mode, LIST_DEPTH))
            }
        },
    )
}
