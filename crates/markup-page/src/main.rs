//! markup-page - render a document tree to a file

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use markup_dom::describe;
use markup_page::{Page, PageConfig, sample};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "markup-page")]
#[command(about = "Render a markup document tree to a file", version)]
struct Args {
    /// File to write the rendered page to
    output: PathBuf,

    /// JSON tree description; the demo page is used when omitted
    #[arg(long)]
    tree: Option<PathBuf>,

    /// JSON page configuration
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => PageConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => PageConfig::default(),
    };

    let root = match &args.tree {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            describe::element_from_str(&raw)
                .with_context(|| format!("building tree from {}", path.display()))?
        }
        None => sample::sample_document().context("building sample document")?,
    };

    let page = Page::with_config(root, config);
    match page.validate() {
        Ok(()) => tracing::info!("Document is valid"),
        Err(violation) => tracing::warn!("Document is invalid: {}", violation),
    }

    page.write_to_file(&args.output)
        .with_context(|| format!("writing {}", args.output.display()))?;
    Ok(())
}
