//! Page layout wrapper component

use maud::{DOCTYPE, Markup, html};

/// Wraps page content with standard HTML structure
///
/// Provides consistent DOCTYPE, html, head, and container structure across
/// both page types. The wrapper handles viewport configuration, charset,
/// and stylesheet loading while the caller provides page-specific body
/// content.
///
/// # Arguments
///
/// * `title`: Page title text
/// * `site_title`: Site name appended to the page title
/// * `stylesheets`: CSS file paths to include
/// * `body`: Page-specific body markup
///
/// # Returns
///
/// Complete HTML document with wrapped content
pub fn page_wrapper(title: &str, site_title: &str, stylesheets: &[String], body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                @if title == site_title {
                    title { (site_title) }
                } @else {
                    title { (title) " - " (site_title) }
                }
                @for stylesheet in stylesheets {
                    link rel="stylesheet" href=(stylesheet);
                }
            }
            body {
                div class="container" {
                    (body)
                }
                footer {
                    p { "Generated by mdshelf" }
                }
            }
        }
    }
}
