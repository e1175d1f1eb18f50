//! Command line configuration.

use anyhow::{Context, Result, bail};
use clap::Parser;
use std::path::PathBuf;

use crate::catalog::Catalog;

/// Command line configuration for mdshelf.
#[derive(Debug, Clone, Parser)]
#[command(name = "mdshelf", version, about, long_about = None)]
pub struct Config {
    /// Directory holding `<identifier>.md` article files
    #[arg(default_value = "content")]
    pub content: PathBuf,

    /// TOML catalog file (built-in catalog when omitted)
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Output directory
    #[arg(short, long, default_value = "dist")]
    pub output: PathBuf,

    /// Site title
    #[arg(long, default_value = "Articles")]
    pub title: String,

    /// Print the page reached by navigating to this URL instead of
    /// generating the site (e.g. "/simple-app?dir=rtl")
    #[arg(long)]
    pub visit: Option<String>,

    /// Open the generated index page in the default browser
    #[arg(long)]
    pub open: bool,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the content directory or catalog file does not
    /// exist, or if the title is blank.
    pub fn validate(&self) -> Result<()> {
        if !self.content.is_dir() {
            bail!("Content directory does not exist: {}", self.content.display());
        }

        if let Some(catalog) = &self.catalog
            && !catalog.is_file()
        {
            bail!("Catalog file does not exist: {}", catalog.display());
        }

        if self.title.trim().is_empty() {
            bail!("Site title must not be empty");
        }

        Ok(())
    }

    /// Loads the configured catalog, or the built-in one.
    ///
    /// # Errors
    ///
    /// Returns error if the catalog file cannot be read or is invalid.
    pub fn load_catalog(&self) -> Result<Catalog> {
        match &self.catalog {
            Some(path) => Catalog::load(path)
                .with_context(|| format!("Failed to load catalog: {}", path.display())),
            None => Ok(Catalog::builtin()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn config(content: PathBuf) -> Config {
        Config {
            content,
            catalog: None,
            output: PathBuf::from("dist"),
            title: "Articles".to_string(),
            visit: None,
            open: false,
        }
    }

    #[test]
    fn test_validate_existing_content_dir() {
        // Arrange
        let config = config(PathBuf::from("."));

        // Act
        let result = config.validate();

        // Assert
        assert!(result.is_ok(), "Current directory should be valid");
    }

    #[test]
    fn test_validate_missing_content_dir() {
        let config = config(PathBuf::from("/definitely/not/here"));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_missing_catalog_file() {
        // Arrange
        let mut config = config(PathBuf::from("."));
        config.catalog = Some(PathBuf::from("no-such-catalog.toml"));

        // Act
        let result = config.validate();

        // Assert
        assert!(result.is_err(), "Missing catalog file should fail validation");
    }

    #[test]
    fn test_validate_blank_title() {
        let mut config = config(PathBuf::from("."));
        config.title = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_builtin_catalog() {
        // Arrange
        let config = config(PathBuf::from("."));

        // Act
        let catalog = config.load_catalog().expect("Builtin catalog");

        // Assert
        assert_eq!(catalog, Catalog::builtin());
    }

    #[test]
    fn test_load_catalog_file() {
        // Arrange
        let dir = TempDir::new().expect("Temp dir");
        let path = dir.path().join("catalog.toml");
        std::fs::write(
            &path,
            "[[article]]\nidentifier = \"x\"\nlabel = \"X\"\ndirection = \"rtl\"\n",
        )
        .expect("Write catalog");
        let mut config = config(dir.path().to_path_buf());
        config.catalog = Some(path);

        // Act
        let catalog = config.load_catalog().expect("Should load catalog");

        // Assert
        assert_eq!(catalog.len(), 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_arguments() {
        // Arrange & Act
        let config = Config::try_parse_from([
            "mdshelf",
            "docs",
            "--visit",
            "/simple-app?dir=rtl",
            "--title",
            "Notes",
        ])
        .expect("Should parse");

        // Assert
        assert_eq!(config.content, PathBuf::from("docs"));
        assert_eq!(config.visit.as_deref(), Some("/simple-app?dir=rtl"));
        assert_eq!(config.title, "Notes");
        assert_eq!(config.output, PathBuf::from("dist"));
        assert!(!config.open);
    }
}
