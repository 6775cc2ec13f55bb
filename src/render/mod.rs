//! Rendering module for converting laid-out documents to output formats.

mod json;
mod options;
mod svg;
mod text;

pub use json::{to_json, JsonFormat};
pub use options::{PageSelection, RegionHeight, SvgOptions, TextOptions};
pub use svg::{render_page, render_svg, to_svg_page, to_svg_pages};
pub use text::to_text;
