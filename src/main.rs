use anyhow::{Context, Result};
use mdshelf::{App, ArticleRenderer, Config, LinkMode};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config = Config::parse();
    config.validate().context("Invalid configuration")?;

    let catalog = Arc::new(config.load_catalog()?);
    tracing::debug!(articles = catalog.len(), "catalog loaded");

    if let Some(url) = &config.visit {
        let renderer =
            ArticleRenderer::with_catalog(&config.content, catalog.clone(), LinkMode::Route);
        let mut app = App::new(catalog, renderer, config.title.clone(), LinkMode::Route)?;
        let route = app.visit(url)?;
        tracing::info!(url = %url, location = %app.navigator().current(), ?route, "visited");
        println!("{}", app.render()?.into_string());
        return Ok(());
    }

    let report = mdshelf::generate_site(catalog, &config.content, &config.output, &config.title)
        .context("Failed to generate site")?;

    println!("Generated: {}", report.index.display());
    println!("Generated {} article pages", report.articles.len());
    if !report.missing.is_empty() {
        eprintln!(
            "Warning: {} articles have no markdown file: {}",
            report.missing.len(),
            report.missing.join(", ")
        );
    }

    if config.open {
        open::that(&report.index)
            .with_context(|| format!("Failed to open {}", report.index.display()))?;
    }

    Ok(())
}
