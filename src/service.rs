//! Document use cases: create, save and export.

use crate::error::Result;
use crate::export::{DocumentRepository, ExportedPage};
use crate::layout::LayoutOptions;
use crate::model::{Document, TextContent};

/// Coordinates layout with a [`DocumentRepository`].
///
/// # Example
///
/// ```
/// use tategaki::export::MemoryRepository;
/// use tategaki::{DocumentService, LayoutOptions};
///
/// let service = DocumentService::new(MemoryRepository::default());
/// let doc = service
///     .create_document("今日は、良い天気です。", &LayoutOptions::default())
///     .unwrap();
/// let page = service.export_page(&doc, 1).unwrap();
/// assert_eq!(page.file_name, "vertical-text-page-1.svg");
/// ```
pub struct DocumentService<R: DocumentRepository> {
    repository: R,
}

impl<R: DocumentRepository> DocumentService<R> {
    /// Create a service backed by `repository`.
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Get the repository.
    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Validate `text`, lay it out and save the resulting document.
    pub fn create_document(&self, text: &str, options: &LayoutOptions) -> Result<Document> {
        let content = TextContent::new(text)?;
        let document = Document::new(&content, options)?;
        self.repository.save(&document)?;
        Ok(document)
    }

    /// Export page `page_num` (1-indexed).
    pub fn export_page(&self, doc: &Document, page_num: u32) -> Result<ExportedPage> {
        let page = doc.page(page_num)?;
        self.repository.export_page(doc, page)
    }

    /// Export every page; one result per page.
    pub fn export_all_pages(&self, doc: &Document) -> Vec<Result<ExportedPage>> {
        self.repository.export_all_pages(doc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::export::MemoryRepository;

    #[test]
    fn test_create_document_saves() {
        let service = DocumentService::new(MemoryRepository::default());
        let doc = service
            .create_document("縦書き", &LayoutOptions::default())
            .unwrap();
        assert_eq!(doc.page_count(), 1);
        assert_eq!(service.repository().save_count(), 1);
    }

    #[test]
    fn test_create_document_rejects_empty() {
        let service = DocumentService::new(MemoryRepository::default());
        let result = service.create_document("", &LayoutOptions::default());
        assert!(matches!(result, Err(Error::EmptyContent)));
        assert_eq!(service.repository().save_count(), 0);
    }

    #[test]
    fn test_create_document_rejects_bad_config() {
        let service = DocumentService::new(MemoryRepository::default());
        let options = LayoutOptions::new().with_chars_per_page(0);
        let result = service.create_document("縦書き", &options);
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
        assert_eq!(service.repository().save_count(), 0);
    }

    #[test]
    fn test_export_page_out_of_range() {
        let service = DocumentService::new(MemoryRepository::default());
        let doc = service
            .create_document("縦書き", &LayoutOptions::default())
            .unwrap();
        assert!(matches!(
            service.export_page(&doc, 3),
            Err(Error::PageOutOfRange(3, 1))
        ));
    }

    #[test]
    fn test_export_all_pages() {
        let service = DocumentService::new(MemoryRepository::default());
        let text = "あ".repeat(401);
        let doc = service
            .create_document(&text, &LayoutOptions::default())
            .unwrap();
        let results = service.export_all_pages(&doc);
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.is_ok()));
    }
}
