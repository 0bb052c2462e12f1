use anyhow::{bail, Result};
use icon_vectorizer::{run, IconLayout};
use std::env;
use std::path::PathBuf;
use tracing::info;

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = env::args().collect();
    let project_dir = match args.len() {
        1 => IconLayout::default_project_dir(),
        2 => PathBuf::from(&args[1]),
        _ => bail!("Usage: icon-vectorizer [project-dir]"),
    };

    let layout = IconLayout::in_project(&project_dir);
    if !layout.source_png.exists() {
        bail!("Input file not found: {}", layout.source_png.display());
    }

    info!("Vectorizing {}", layout.source_png.display());
    run(&layout)
}
