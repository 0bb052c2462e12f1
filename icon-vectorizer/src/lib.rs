//! Turns `icon.png` into two SVGs: a full color trace (`icon.svg`) and a
//! `currentColor` silhouette for themed toolbars (`activitybar-icon.svg`).

pub mod extract;
pub mod layout;
pub mod pipeline;
pub mod silhouette;
pub mod trace;

pub use extract::{ExtractError, MonochromeDocument, PathExtractor, SvgFrame, PLACEHOLDER_FILL};
pub use layout::IconLayout;
pub use pipeline::{convert_to_color_svg, convert_to_monochrome_svg, run};
pub use trace::TraceProfile;
