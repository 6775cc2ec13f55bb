//! Document-level types.

use serde::Serialize;

use super::{Page, TextContent};
use crate::error::{Error, Result};
use crate::layout::{self, Composition, KinsokuPolicy, LayoutOptions};

/// A laid-out document: the source text partitioned into pages.
///
/// Built once from a [`TextContent`]; an edit produces a new `Document`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    chars_per_page: usize,
    chars_per_line: usize,
    lines_per_page: usize,
    kinsoku: KinsokuPolicy,
    composition: Composition,
    pages: Vec<Page>,
}

impl Document {
    /// Lay out `content` with the given options.
    pub fn new(content: &TextContent, options: &LayoutOptions) -> Result<Self> {
        options.validate()?;

        let text = if options.normalize_unicode {
            layout::normalize(content.as_str())
        } else {
            content.as_str().into()
        };

        let pages = match options.composition {
            Composition::LineGrid => {
                let lines = layout::break_normalized(&text, options);
                layout::paginate_grid(&lines, options.lines_per_page())
            }
            Composition::CharacterStream => {
                layout::paginate_stream(&text, options.chars_per_page, options.chars_per_line)
            }
        };

        log::debug!(
            "Laid out {} chars into {} pages ({:?}, {:?})",
            text.chars().count(),
            pages.len(),
            options.composition,
            options.kinsoku
        );

        Ok(Self {
            chars_per_page: options.chars_per_page,
            chars_per_line: options.chars_per_line,
            lines_per_page: options.lines_per_page(),
            kinsoku: options.kinsoku,
            composition: options.composition,
            pages,
        })
    }

    /// Lay out `content` with the default 20 × 20 grid.
    pub fn with_defaults(content: &TextContent) -> Result<Self> {
        Self::new(content, &LayoutOptions::default())
    }

    /// Validate raw text and lay it out.
    pub fn from_text(text: &str, options: &LayoutOptions) -> Result<Self> {
        let content = TextContent::new(text)?;
        Self::new(&content, options)
    }

    /// Pages in order.
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Get the number of pages in the document.
    pub fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    /// Get a page by number (1-indexed).
    pub fn get_page(&self, page_num: u32) -> Option<&Page> {
        if page_num == 0 {
            return None;
        }
        self.pages.get((page_num - 1) as usize)
    }

    /// Get a page by number, failing when it does not exist.
    pub fn page(&self, page_num: u32) -> Result<&Page> {
        self.get_page(page_num)
            .ok_or(Error::PageOutOfRange(page_num, self.page_count()))
    }

    /// Check if the document has any pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Concatenated page contents; equals the normalized source text.
    pub fn plain_text(&self) -> String {
        self.pages.iter().map(Page::content).collect()
    }

    /// Total number of laid-out lines.
    pub fn line_count(&self) -> usize {
        self.pages.iter().map(Page::line_count).sum()
    }

    /// Page budget in characters.
    pub fn chars_per_page(&self) -> usize {
        self.chars_per_page
    }

    /// Characters per vertical line.
    pub fn chars_per_line(&self) -> usize {
        self.chars_per_line
    }

    /// Lines per page.
    pub fn lines_per_page(&self) -> usize {
        self.lines_per_page
    }

    /// Kinsoku policy the document was laid out with.
    pub fn kinsoku(&self) -> KinsokuPolicy {
        self.kinsoku
    }

    /// Composition mode the document was laid out with.
    pub fn composition(&self) -> Composition {
        self.composition
    }

    /// Capacity used by [`Page::is_valid_length`].
    pub fn page_capacity(&self) -> usize {
        self.chars_per_line * self.lines_per_page
    }

    /// Pages whose content exceeds the page capacity.
    pub fn oversized_pages(&self) -> impl Iterator<Item = &Page> + '_ {
        let capacity = self.page_capacity();
        self.pages
            .iter()
            .filter(move |page| !page.is_valid_length(capacity))
    }
}
