//! Page export and document persistence.
//!
//! A [`DocumentRepository`] stores documents and turns pages into
//! downloadable SVG resources. Pages are independent: exporting every page
//! yields one result per page, and one failure never stops the others.
//!
//! # Example
//!
//! ```no_run
//! use tategaki::export::{DocumentRepository, ExportOptions, SvgDirectoryRepository};
//! use tategaki::{Document, LayoutOptions};
//!
//! fn main() -> tategaki::Result<()> {
//!     let doc = Document::from_text("吾輩は猫である。", &LayoutOptions::default())?;
//!     let repo = SvgDirectoryRepository::new("./pages", ExportOptions::default());
//!     for result in repo.export_all_pages(&doc) {
//!         let exported = result?;
//!         println!("{}", exported.file_name);
//!     }
//!     Ok(())
//! }
//! ```

mod directory;
mod memory;

pub use directory::{SvgDirectoryRepository, DOCUMENT_FILE_NAME};
pub use memory::MemoryRepository;

use std::path::PathBuf;

use crate::error::Result;
use crate::model::{Document, Page};
use crate::render::{PageSelection, SvgOptions};

/// Options for exporting pages.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// SVG rendering options
    pub svg: SvgOptions,

    /// File name prefix; the page number and `.svg` are appended
    pub file_prefix: String,

    /// Which pages `export_all_pages` exports
    pub pages: PageSelection,

    /// Render and write pages in parallel
    pub parallel: bool,
}

impl ExportOptions {
    /// Create new export options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set SVG rendering options.
    pub fn with_svg_options(mut self, svg: SvgOptions) -> Self {
        self.svg = svg;
        self
    }

    /// Set the file name prefix.
    pub fn with_file_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.file_prefix = prefix.into();
        self
    }

    /// Set page selection.
    pub fn with_pages(mut self, pages: PageSelection) -> Self {
        self.pages = pages;
        self
    }

    /// Enable or disable parallel export.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Disable parallel export.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// File name for page `number`.
    pub fn file_name(&self, number: u32) -> String {
        format!("{}{}.svg", self.file_prefix, number)
    }
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            svg: SvgOptions::default(),
            file_prefix: "vertical-text-page-".to_string(),
            pages: PageSelection::All,
            parallel: true,
        }
    }
}

/// Where an exported page ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportTarget {
    /// SVG markup held in memory
    Memory(String),
    /// SVG file on disk
    File(PathBuf),
}

/// A successfully exported page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedPage {
    /// Page number (1-indexed)
    pub number: u32,

    /// Suggested download file name
    pub file_name: String,

    /// Exported resource
    pub target: ExportTarget,
}

impl ExportedPage {
    /// SVG markup, when held in memory.
    pub fn svg(&self) -> Option<&str> {
        match &self.target {
            ExportTarget::Memory(svg) => Some(svg),
            ExportTarget::File(_) => None,
        }
    }

    /// File path, when written to disk.
    pub fn path(&self) -> Option<&PathBuf> {
        match &self.target {
            ExportTarget::File(path) => Some(path),
            ExportTarget::Memory(_) => None,
        }
    }
}

/// Trait for document stores and page exporters.
///
/// Implement this trait to send pages somewhere new.
pub trait DocumentRepository: Send + Sync {
    /// Get the name of this repository.
    fn name(&self) -> &str;

    /// Persist a document. No durability is promised.
    fn save(&self, doc: &Document) -> Result<()>;

    /// Export a single page of `doc`.
    fn export_page(&self, doc: &Document, page: &Page) -> Result<ExportedPage>;

    /// Export every page, one result per page in page order.
    fn export_all_pages(&self, doc: &Document) -> Vec<Result<ExportedPage>> {
        doc.pages()
            .iter()
            .map(|page| log_failure(self.export_page(doc, page)))
            .collect()
    }
}

/// Report a failed export on the diagnostic channel and pass it through.
pub(crate) fn log_failure(result: Result<ExportedPage>) -> Result<ExportedPage> {
    if let Err(ref e) = result {
        log::warn!("{}", e);
    }
    result
}
