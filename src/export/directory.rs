//! Repository writing SVG files into a directory.

use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::model::{Document, Page};
use crate::render::{render_page, to_json, JsonFormat};

use super::{log_failure, DocumentRepository, ExportOptions, ExportTarget, ExportedPage};

/// File name used by [`SvgDirectoryRepository::save`].
pub const DOCUMENT_FILE_NAME: &str = "document.json";

/// Writes one `.svg` file per page into an output directory.
#[derive(Debug, Clone)]
pub struct SvgDirectoryRepository {
    dir: PathBuf,
    options: ExportOptions,
}

impl SvgDirectoryRepository {
    /// Create a repository for `dir`; the directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>, options: ExportOptions) -> Self {
        Self {
            dir: dir.into(),
            options,
        }
    }

    /// Output directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Export options in use.
    pub fn options(&self) -> &ExportOptions {
        &self.options
    }

    fn selected<'a>(&self, doc: &'a Document) -> Vec<&'a Page> {
        doc.pages()
            .iter()
            .filter(|page| self.options.pages.includes(page.number()))
            .collect()
    }

    fn write_page(&self, doc: &Document, page: &Page) -> Result<ExportedPage> {
        let number = page.number();
        fs::create_dir_all(&self.dir).map_err(|e| Error::export(number, e))?;

        let svg = render_page(page, doc.chars_per_line(), &self.options.svg);
        let file_name = self.options.file_name(number);
        let path = self.dir.join(&file_name);
        fs::write(&path, svg).map_err(|e| Error::export(number, e))?;

        log::debug!("Wrote page {} to {}", number, path.display());
        Ok(ExportedPage {
            number,
            file_name,
            target: ExportTarget::File(path),
        })
    }
}

impl DocumentRepository for SvgDirectoryRepository {
    fn name(&self) -> &str {
        "svg-directory"
    }

    fn save(&self, doc: &Document) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        let json = to_json(doc, JsonFormat::Pretty)?;
        let path = self.dir.join(DOCUMENT_FILE_NAME);
        fs::write(&path, json)?;
        log::info!("Saved document to {}", path.display());
        Ok(())
    }

    fn export_page(&self, doc: &Document, page: &Page) -> Result<ExportedPage> {
        self.write_page(doc, page)
    }

    fn export_all_pages(&self, doc: &Document) -> Vec<Result<ExportedPage>> {
        let pages = self.selected(doc);
        if self.options.parallel {
            pages
                .par_iter()
                .map(|page| log_failure(self.write_page(doc, page)))
                .collect()
        } else {
            pages
                .iter()
                .map(|page| log_failure(self.write_page(doc, page)))
                .collect()
        }
    }
}

#[cfg(feature = "async")]
impl SvgDirectoryRepository {
    /// Export the selected pages using async file I/O, one page at a time.
    pub async fn export_all_pages_async(&self, doc: &Document) -> Vec<Result<ExportedPage>> {
        let mut results = Vec::new();
        for page in self.selected(doc) {
            results.push(log_failure(self.write_page_async(doc, page).await));
        }
        results
    }

    async fn write_page_async(&self, doc: &Document, page: &Page) -> Result<ExportedPage> {
        let number = page.number();
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| Error::export(number, e))?;

        let svg = render_page(page, doc.chars_per_line(), &self.options.svg);
        let file_name = self.options.file_name(number);
        let path = self.dir.join(&file_name);
        tokio::fs::write(&path, svg)
            .await
            .map_err(|e| Error::export(number, e))?;

        Ok(ExportedPage {
            number,
            file_name,
            target: ExportTarget::File(path),
        })
    }
}
