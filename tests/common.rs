//! Shared test utilities for integration tests.
//!
//! Provides helpers for creating temporary content directories and
//! browser shells used across multiple test files.

#![allow(dead_code)]

use anyhow::Result;
use mdshelf::{App, ArticleRenderer, Catalog, LinkMode};
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;

/// Creates temporary content directory with one markdown file per
/// catalog entry.
///
/// Each file starts with a heading naming the identifier so tests can
/// tell rendered articles apart.
///
/// # Errors
///
/// Returns error if directory creation or file writes fail
pub fn create_content_dir(catalog: &Catalog) -> Result<TempDir> {
    let dir = TempDir::new()?;
    for entry in catalog.iter() {
        write_file(
            dir.path(),
            &format!("{}.md", entry.identifier()),
            &format!("# {}\n\nBody of `{}`.\n", entry.label(), entry.identifier()),
        )?;
    }
    Ok(dir)
}

/// Creates a browser shell over `catalog` reading from `content`.
///
/// # Errors
///
/// Returns error if the shell cannot be initialized
pub fn create_app(catalog: Arc<Catalog>, content: &Path, mode: LinkMode) -> Result<App<'static>> {
    let renderer = ArticleRenderer::with_catalog(content, catalog.clone(), mode);
    App::new(catalog, renderer, "Articles", mode)
}

/// Writes file, creating parent directories as needed.
///
/// # Errors
///
/// Returns error if directory creation or file write fails
pub fn write_file(root: &Path, path: &str, content: &str) -> Result<()> {
    let file_path = root.join(path);
    if let Some(parent) = file_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(file_path, content)?;
    Ok(())
}
