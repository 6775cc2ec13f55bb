//! Plain text preview of a laid-out document.

use crate::model::{Document, LineEnd};

use super::TextOptions;

/// Render the document's lines as plain text, one physical line per row.
pub fn to_text(doc: &Document, options: &TextOptions) -> String {
    let mut output = String::new();

    for page in doc.pages() {
        if !options.page_selection.includes(page.number()) {
            continue;
        }
        if options.page_separators {
            output.push_str(&format!(
                "--- {} / {} ---\n",
                page.number(),
                doc.page_count()
            ));
        }
        for line in page.lines() {
            output.push_str(line.text());
            match (line.end(), options.wrap_marker) {
                (LineEnd::Wrap, Some(marker)) => {
                    output.push(marker);
                    output.push('\n');
                }
                _ => output.push('\n'),
            }
        }
    }

    output
}
