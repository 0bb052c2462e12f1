use std::path::{Path, PathBuf};

/// Source bitmap, relative to the project directory
pub const SOURCE_PNG: &str = "icon.png";
/// Full color output, relative to the project directory
pub const COLOR_SVG: &str = "icon.svg";
/// Monochrome activity bar output, relative to the project directory
pub const MONOCHROME_SVG: &str = "activitybar-icon.svg";

/// Every file the conversion reads or writes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconLayout {
    pub source_png: PathBuf,
    pub color_svg: PathBuf,
    pub monochrome_svg: PathBuf,
    /// Two-color mask fed to binary tracing (temporary)
    pub silhouette_png: PathBuf,
    /// Raw binary trace before path extraction (temporary)
    pub silhouette_svg: PathBuf,
}

impl IconLayout {
    /// Resolve the fixed file names inside `project_dir`
    pub fn in_project(project_dir: &Path) -> Self {
        let pid = std::process::id();
        let temp_dir = std::env::temp_dir();

        Self {
            source_png: project_dir.join(SOURCE_PNG),
            color_svg: project_dir.join(COLOR_SVG),
            monochrome_svg: project_dir.join(MONOCHROME_SVG),
            silhouette_png: temp_dir.join(format!("icon_silhouette_{}.png", pid)),
            silhouette_svg: temp_dir.join(format!("silhouette_{}.svg", pid)),
        }
    }

    /// Workspace root: one level above this crate's manifest
    pub fn default_project_dir() -> PathBuf {
        let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
        manifest_dir
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| manifest_dir.to_path_buf())
    }

    /// Remove the temporary files; missing files are not an error
    pub fn remove_temporaries(&self) {
        let _ = std::fs::remove_file(&self.silhouette_png);
        let _ = std::fs::remove_file(&self.silhouette_svg);
    }
}

impl Default for IconLayout {
    fn default() -> Self {
        Self::in_project(&Self::default_project_dir())
    }
}
