//! # tategaki
//!
//! Japanese vertical text (tategaki) layout for Rust.
//!
//! This library splits text into fixed-width vertical lines following the
//! kinsoku shori line-breaking rules, groups the lines into numbered pages,
//! and renders each page as a standalone SVG document.
//!
//! ## Quick Start
//!
//! ```
//! use tategaki::{layout, render};
//!
//! fn main() -> tategaki::Result<()> {
//!     // 5 characters per line, 2 lines per page
//!     let doc = layout("今日は、良い天気です。", 10, 5)?;
//!     assert_eq!(doc.page_count(), 1);
//!
//!     // `、` never opens a line
//!     let lines: Vec<&str> = doc.pages()[0].lines().iter().map(|l| l.text()).collect();
//!     assert_eq!(lines, ["今日は、良", "い天気です。"]);
//!
//!     let svg = render::to_svg_page(&doc, 1, &render::SvgOptions::default())?;
//!     assert!(svg.contains("vertical-rl"));
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Kinsoku shori**: hanging (pull forward) or push-back correction
//! - **Two compositions**: kinsoku line grid, or raw character stream
//! - **Deterministic**: pure layout functions, safe to call concurrently
//! - **Export**: SVG per page, JSON and plain text previews
//! - **Parallel processing**: Uses Rayon to render and write pages

pub mod error;
pub mod export;
pub mod layout;
pub mod model;
pub mod render;
pub mod service;

#[cfg(feature = "ffi")]
pub mod ffi;

// Re-export commonly used types
pub use error::{Error, Result};
pub use export::{
    DocumentRepository, ExportOptions, ExportTarget, ExportedPage, MemoryRepository,
    SvgDirectoryRepository,
};
pub use layout::{
    break_lines, break_text, paginate, paginate_lines, Composition, KinsokuPolicy, KinsokuRules,
    LayoutOptions,
};
pub use model::{Document, Line, LineEnd, Page, TextContent};
pub use render::{JsonFormat, PageSelection, RegionHeight, SvgOptions, TextOptions};
pub use service::DocumentService;

/// Lay out text with the given page and line widths and default rules.
///
/// # Arguments
///
/// * `text` - Source text; must not be empty
/// * `chars_per_page` - Page budget in characters
/// * `chars_per_line` - Characters per vertical line
///
/// # Example
///
/// ```
/// let doc = tategaki::layout(&"あ".repeat(401), 400, 20).unwrap();
/// assert_eq!(doc.page_count(), 2);
/// ```
pub fn layout(text: &str, chars_per_page: usize, chars_per_line: usize) -> Result<Document> {
    let options = LayoutOptions::new()
        .with_chars_per_page(chars_per_page)
        .with_chars_per_line(chars_per_line);
    Document::from_text(text, &options)
}

/// Lay out text with custom options.
///
/// # Example
///
/// ```
/// use tategaki::{layout_with_options, KinsokuPolicy, LayoutOptions};
///
/// let options = LayoutOptions::new()
///     .with_chars_per_line(5)
///     .with_kinsoku(KinsokuPolicy::PushBack);
/// let doc = layout_with_options("あいうえ「おか」", &options).unwrap();
/// assert_eq!(doc.pages()[0].lines()[1].text(), "「おか」");
/// ```
pub fn layout_with_options(text: &str, options: &LayoutOptions) -> Result<Document> {
    Document::from_text(text, options)
}

/// Lay out text on the default 20 × 20 grid and render every page to SVG.
///
/// # Example
///
/// ```
/// let pages = tategaki::to_svg_pages("縦書きのテキスト").unwrap();
/// assert_eq!(pages.len(), 1);
/// ```
pub fn to_svg_pages(text: &str) -> Result<Vec<String>> {
    let doc = Document::from_text(text, &LayoutOptions::default())?;
    Ok(render::to_svg_pages(&doc, &SvgOptions::default()))
}

/// Lay out text and convert the document to JSON.
pub fn to_json(text: &str, format: JsonFormat) -> Result<String> {
    let doc = Document::from_text(text, &LayoutOptions::default())?;
    render::to_json(&doc, format)
}

/// Builder for laying out and rendering vertical text.
///
/// # Example
///
/// ```
/// use tategaki::{KinsokuPolicy, Tategaki};
///
/// let result = Tategaki::new()
///     .chars_per_line(10)
///     .chars_per_page(100)
///     .kinsoku(KinsokuPolicy::PullForward)
///     .font_size(24.0)
///     .layout("吾輩は猫である。名前はまだ無い。")?;
/// assert_eq!(result.document().page_count(), 1);
/// let svgs = result.to_svg_pages();
/// assert!(svgs[0].contains("font-size:24px"));
/// # Ok::<(), tategaki::Error>(())
/// ```
pub struct Tategaki {
    layout_options: LayoutOptions,
    svg_options: SvgOptions,
}

impl Tategaki {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            layout_options: LayoutOptions::default(),
            svg_options: SvgOptions::default(),
        }
    }

    /// Set characters per vertical line.
    pub fn chars_per_line(mut self, chars: usize) -> Self {
        self.layout_options = self.layout_options.with_chars_per_line(chars);
        self
    }

    /// Set the page budget in characters.
    pub fn chars_per_page(mut self, chars: usize) -> Self {
        self.layout_options = self.layout_options.with_chars_per_page(chars);
        self
    }

    /// Override lines per page.
    pub fn lines_per_page(mut self, lines: usize) -> Self {
        self.layout_options = self.layout_options.with_lines_per_page(lines);
        self
    }

    /// Set the kinsoku policy.
    pub fn kinsoku(mut self, policy: KinsokuPolicy) -> Self {
        self.layout_options = self.layout_options.with_kinsoku(policy);
        self
    }

    /// Set the composition mode.
    pub fn composition(mut self, composition: Composition) -> Self {
        self.layout_options = self.layout_options.with_composition(composition);
        self
    }

    /// Set the font family used in SVG output.
    pub fn font_family(mut self, family: impl Into<String>) -> Self {
        self.svg_options = self.svg_options.with_font_family(family);
        self
    }

    /// Set the font size used in SVG output.
    pub fn font_size(mut self, px: f32) -> Self {
        self.svg_options = self.svg_options.with_font_size(px);
        self
    }

    /// Replace all SVG options.
    pub fn svg_options(mut self, options: SvgOptions) -> Self {
        self.svg_options = options;
        self
    }

    /// Validate and lay out `text`.
    pub fn layout(self, text: &str) -> Result<LayoutResult> {
        let document = Document::from_text(text, &self.layout_options)?;
        Ok(LayoutResult {
            document,
            svg_options: self.svg_options,
        })
    }
}

impl Default for Tategaki {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of laying out text.
pub struct LayoutResult {
    /// The laid-out document
    pub document: Document,
    /// SVG options to use
    svg_options: SvgOptions,
}

impl LayoutResult {
    /// Render every page to SVG.
    pub fn to_svg_pages(&self) -> Vec<String> {
        render::to_svg_pages(&self.document, &self.svg_options)
    }

    /// Render one page to SVG.
    pub fn to_svg_page(&self, page_num: u32) -> Result<String> {
        render::to_svg_page(&self.document, page_num, &self.svg_options)
    }

    /// Convert to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.document, format)
    }

    /// Plain text preview with page separators.
    pub fn to_text(&self) -> String {
        render::to_text(&self.document, &TextOptions::default())
    }

    /// Get the document.
    pub fn document(&self) -> &Document {
        &self.document
    }
}
