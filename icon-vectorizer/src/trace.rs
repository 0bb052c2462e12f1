use anyhow::Result;
use std::path::Path;
use visioncortex::PathSimplifyMode;
use vtracer::{convert_image_to_svg, ColorMode, Config, Hierarchical};

/// Which VTracer configuration to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceProfile {
    /// Stacked full-color tracing
    Color,
    /// Black and white tracing of a silhouette mask
    Binary,
}

impl TraceProfile {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Color => "color",
            Self::Binary => "binary",
        }
    }

    /// Build the VTracer config for this profile
    pub fn config(&self) -> Config {
        let defaults = Config::default();

        let (color_mode, color_precision, layer_difference) = match self {
            Self::Color => (ColorMode::Color, 6, 16),
            // Color-only knobs are ignored in binary mode
            Self::Binary => (
                ColorMode::Binary,
                defaults.color_precision,
                defaults.layer_difference,
            ),
        };

        Config {
            color_mode,
            hierarchical: Hierarchical::Stacked,
            mode: PathSimplifyMode::Spline, // Smooth curves for icon outlines
            filter_speckle: 4,              // Remove small artifacts
            color_precision,
            layer_difference,
            corner_threshold: 60,
            length_threshold: 4.0,
            max_iterations: 10,
            splice_threshold: 45,
            path_precision: Some(3),
        }
    }
}

/// Vectorize the bitmap at `input` into an SVG at `output`
pub fn trace_file(input: &Path, output: &Path, profile: TraceProfile) -> Result<()> {
    tracing::debug!(
        "Tracing {} -> {} ({} mode)",
        input.display(),
        output.display(),
        profile.name()
    );

    convert_image_to_svg(input, output, profile.config()).map_err(|e| {
        anyhow::anyhow!(
            "VTracer {} conversion of {} failed: {}",
            profile.name(),
            input.display(),
            e
        )
    })?;

    Ok(())
}
