//! In-memory repository.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::error::Result;
use crate::model::{Document, Page};
use crate::render::render_page;

use super::{log_failure, DocumentRepository, ExportOptions, ExportTarget, ExportedPage};

/// Repository that keeps exported SVG markup in memory.
///
/// Saving only counts and logs the document.
#[derive(Debug, Default)]
pub struct MemoryRepository {
    options: ExportOptions,
    saves: AtomicUsize,
}

impl MemoryRepository {
    /// Create a new in-memory repository.
    pub fn new(options: ExportOptions) -> Self {
        Self {
            options,
            saves: AtomicUsize::new(0),
        }
    }

    /// Number of documents saved so far.
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::Relaxed)
    }
}

impl DocumentRepository for MemoryRepository {
    fn name(&self) -> &str {
        "memory"
    }

    fn save(&self, doc: &Document) -> Result<()> {
        self.saves.fetch_add(1, Ordering::Relaxed);
        log::info!("Saved document with {} page(s)", doc.page_count());
        Ok(())
    }

    fn export_page(&self, doc: &Document, page: &Page) -> Result<ExportedPage> {
        let svg = render_page(page, doc.chars_per_line(), &self.options.svg);
        Ok(ExportedPage {
            number: page.number(),
            file_name: self.options.file_name(page.number()),
            target: ExportTarget::Memory(svg),
        })
    }

    fn export_all_pages(&self, doc: &Document) -> Vec<Result<ExportedPage>> {
        doc.pages()
            .iter()
            .filter(|page| self.options.pages.includes(page.number()))
            .map(|page| log_failure(self.export_page(doc, page)))
            .collect()
    }
}
