use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::extract::{PathExtractor, Selection, SvgFrame};
use crate::layout::IconLayout;
use crate::silhouette::write_silhouette;
use crate::trace::{trace_file, TraceProfile};

/// Full color trace of the source icon
pub fn convert_to_color_svg(layout: &IconLayout) -> Result<()> {
    trace_file(&layout.source_png, &layout.color_svg, TraceProfile::Color)?;
    info!("Created color SVG: {}", layout.color_svg.display());
    Ok(())
}

/// Theme-adaptive silhouette of the source icon
pub fn convert_to_monochrome_svg(layout: &IconLayout) -> Result<()> {
    let result = build_monochrome(layout);
    layout.remove_temporaries();
    result
}

fn build_monochrome(layout: &IconLayout) -> Result<()> {
    let stats = write_silhouette(&layout.source_png, &layout.silhouette_png)?;
    debug!(
        "Silhouette {}x{} with {} foreground pixel(s) at {}",
        stats.width,
        stats.height,
        stats.foreground_pixels,
        layout.silhouette_png.display()
    );

    trace_file(&layout.silhouette_png, &layout.silhouette_svg, TraceProfile::Binary)?;

    let traced = std::fs::read_to_string(&layout.silhouette_svg)
        .context("Failed to read binary trace")?;

    let extractor = PathExtractor::new()?;
    let document = extractor
        .extract(&traced, SvgFrame::default())
        .with_context(|| format!("No usable shapes in {}", layout.silhouette_svg.display()))?;

    if document.selection == Selection::NotBackground {
        warn!("No black paths in binary trace, kept every non-white path instead");
    }

    std::fs::write(&layout.monochrome_svg, document.to_string()).with_context(|| {
        format!(
            "Failed to write monochrome SVG {}",
            layout.monochrome_svg.display()
        )
    })?;

    info!(
        "Created monochrome SVG: {} ({} path(s))",
        layout.monochrome_svg.display(),
        document.paths.len()
    );
    Ok(())
}

/// Produce both outputs; the first failure aborts
pub fn run(layout: &IconLayout) -> Result<()> {
    convert_to_color_svg(layout)?;
    convert_to_monochrome_svg(layout)?;
    info!("Done!");
    Ok(())
}
