//! Navigation breadcrumb component

use maud::{Markup, html};

/// Renders breadcrumb navigation
///
/// Displays the site title as a link back to the article list followed by
/// the current article label. The label carries the article's direction so
/// right-to-left titles lay out correctly.
///
/// # Arguments
///
/// * `site_title`: Site name for the root breadcrumb link
/// * `list_href`: Link back to the list page
/// * `current`: Label and direction of the current article, if known
///
/// # Returns
///
/// Breadcrumb navigation markup
pub fn breadcrumb(site_title: &str, list_href: &str, current: Option<(&str, &str)>) -> Markup {
    html! {
        header {
            nav class="breadcrumb" {
                a href=(list_href) class="breadcrumb-link" { (site_title) }
                @if let Some((label, dir)) = current {
                    span class="breadcrumb-separator" { "/" }
                    span class="breadcrumb-current" dir=(dir) { (label) }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breadcrumb_with_current() {
        // Act
        let html = breadcrumb("Articles", "../index.html", Some(("Problems", "ltr"))).into_string();

        // Assert
        assert!(html.contains("href=\"../index.html\""));
        assert!(html.contains("Articles"));
        assert!(html.contains("breadcrumb-current"));
        assert!(html.contains("Problems"));
    }

    #[test]
    fn test_breadcrumb_without_current() {
        let html = breadcrumb("Articles", "/", None).into_string();
        assert!(!html.contains("breadcrumb-separator"));
    }
}
