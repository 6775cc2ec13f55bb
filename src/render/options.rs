//! Rendering options and configuration.

use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::error::Error;

/// Options for rendering a page as an SVG document.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgOptions {
    /// Outer canvas width
    pub width: u32,

    /// Outer canvas height
    pub height: u32,

    /// Width of the vertical writing region
    pub region_width: u32,

    /// Height of the vertical writing region
    pub region_height: RegionHeight,

    /// CSS font family
    pub font_family: String,

    /// Font size in pixels
    pub font_size_px: f32,

    /// Line height as a multiple of the font size
    pub line_height: f32,

    /// CSS padding around the writing region
    pub padding: String,

    /// CSS background of the page
    pub background: String,
}

impl SvgOptions {
    /// Create new SVG options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the outer canvas size.
    pub fn with_canvas(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the writing region width.
    pub fn with_region_width(mut self, width: u32) -> Self {
        self.region_width = width;
        self
    }

    /// Set how the writing region height is chosen.
    pub fn with_region_height(mut self, height: RegionHeight) -> Self {
        self.region_height = height;
        self
    }

    /// Set the font family.
    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = family.into();
        self
    }

    /// Set the font size in pixels.
    pub fn with_font_size(mut self, px: f32) -> Self {
        self.font_size_px = px;
        self
    }

    /// Set the line height factor.
    pub fn with_line_height(mut self, factor: f32) -> Self {
        self.line_height = factor;
        self
    }

    /// Set the page background.
    pub fn with_background(mut self, background: impl Into<String>) -> Self {
        self.background = background.into();
        self
    }

    /// Writing region height in pixels for lines of `chars_per_line`.
    pub fn resolve_region_height(&self, chars_per_line: usize) -> f32 {
        match self.region_height {
            RegionHeight::Fixed(px) => px as f32,
            RegionHeight::Derived => chars_per_line as f32 * self.font_size_px * self.line_height,
        }
    }
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self {
            width: 800,
            height: 1000,
            region_width: 680,
            region_height: RegionHeight::Fixed(800),
            font_family: "'Noto Serif JP',serif".to_string(),
            font_size_px: 20.0,
            line_height: 1.7,
            padding: "2rem".to_string(),
            background: "white".to_string(),
        }
    }
}

/// Height of the vertical writing region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionHeight {
    /// Fixed height in pixels
    Fixed(u32),
    /// `chars_per_line × font_size × line_height`
    Derived,
}

/// Options for the plain text preview.
#[derive(Debug, Clone)]
pub struct TextOptions {
    /// Emit a separator line before every page
    pub page_separators: bool,

    /// Mark wrapped line breaks with this character (newlines otherwise)
    pub wrap_marker: Option<char>,

    /// Page selection
    pub page_selection: PageSelection,
}

impl TextOptions {
    /// Create new text options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable page separators.
    pub fn with_page_separators(mut self, enabled: bool) -> Self {
        self.page_separators = enabled;
        self
    }

    /// Set the wrapped line marker.
    pub fn with_wrap_marker(mut self, marker: char) -> Self {
        self.wrap_marker = Some(marker);
        self
    }

    /// Set page selection.
    pub fn with_pages(mut self, selection: PageSelection) -> Self {
        self.page_selection = selection;
        self
    }
}

impl Default for TextOptions {
    fn default() -> Self {
        Self {
            page_separators: true,
            wrap_marker: None,
            page_selection: PageSelection::All,
        }
    }
}

/// Page selection for rendering and export.
#[derive(Debug, Clone, Default)]
pub enum PageSelection {
    /// Render all pages
    #[default]
    All,
    /// Render a range of pages (inclusive, 1-indexed)
    Range(RangeInclusive<u32>),
    /// Render specific pages (1-indexed)
    Pages(Vec<u32>),
}

impl PageSelection {
    /// Check if a page number should be included.
    pub fn includes(&self, page: u32) -> bool {
        match self {
            PageSelection::All => true,
            PageSelection::Range(range) => range.contains(&page),
            PageSelection::Pages(pages) => pages.contains(&page),
        }
    }

    /// Parse a page selection string (e.g., "1-10", "1,3,5,7-10").
    pub fn parse(s: &str) -> Result<Self, String> {
        let s = s.trim();

        if s.is_empty() || s == "all" {
            return Ok(PageSelection::All);
        }

        if let Some((start, end)) = s.split_once('-') {
            if !start.contains(',') && !end.contains(',') {
                let start: u32 = start.trim().parse().map_err(|_| "Invalid start page")?;
                let end: u32 = end.trim().parse().map_err(|_| "Invalid end page")?;
                if start > end {
                    return Err(format!("Range start {} is after end {}", start, end));
                }
                return Ok(PageSelection::Range(start..=end));
            }
        }

        let mut pages = Vec::new();
        for part in s.split(',') {
            let part = part.trim();
            if let Some((start, end)) = part.split_once('-') {
                let start: u32 = start.trim().parse().map_err(|_| "Invalid page number")?;
                let end: u32 = end.trim().parse().map_err(|_| "Invalid page number")?;
                for p in start..=end {
                    if !pages.contains(&p) {
                        pages.push(p);
                    }
                }
            } else {
                let p: u32 = part.parse().map_err(|_| "Invalid page number")?;
                if !pages.contains(&p) {
                    pages.push(p);
                }
            }
        }

        pages.sort();
        Ok(PageSelection::Pages(pages))
    }
}

impl FromStr for PageSelection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PageSelection::parse(s).map_err(Error::InvalidPageRange)
    }
}
