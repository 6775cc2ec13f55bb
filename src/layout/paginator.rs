//! Pagination: grouping text into numbered pages.

use super::kinsoku::{KinsokuPolicy, KinsokuRules};
use super::line_breaker::{push_segment, split_segment};
use crate::error::{Error, Result};
use crate::model::{Line, LineEnd, Page};

/// Split raw text into pages by counting character cells.
///
/// Every character takes one cell. A newline pads the running count up to
/// the next multiple of `chars_per_line`, so text after it starts a fresh
/// line, while adding a single `\n` to the page content. Once the count
/// reaches `chars_per_page` the page is sealed and the next character opens
/// a new one. Empty text yields no pages.
pub fn paginate(text: &str, chars_per_page: usize, chars_per_line: usize) -> Result<Vec<Page>> {
    if chars_per_page == 0 || chars_per_line == 0 {
        return Err(Error::InvalidConfig(format!(
            "chars_per_page ({}) and chars_per_line ({}) must be positive",
            chars_per_page, chars_per_line
        )));
    }
    Ok(paginate_stream(text, chars_per_page, chars_per_line))
}

/// Group laid-out lines into pages of `lines_per_page` lines.
///
/// A trailing blank final line that would open a page of its own is dropped.
pub fn paginate_lines(lines: &[Line], lines_per_page: usize) -> Result<Vec<Page>> {
    if lines_per_page == 0 {
        return Err(Error::InvalidConfig(
            "lines_per_page must be positive".to_string(),
        ));
    }
    Ok(paginate_grid(lines, lines_per_page))
}

pub(crate) fn paginate_stream(
    text: &str,
    chars_per_page: usize,
    chars_per_line: usize,
) -> Vec<Page> {
    let mut pages = Vec::new();
    let mut buffer = String::new();
    let mut char_count = 0;

    for ch in text.chars() {
        if char_count >= chars_per_page {
            let content = std::mem::take(&mut buffer);
            pages.push(seal(pages.len(), &content, chars_per_line, false));
            char_count = 0;
        }

        if ch == '\n' {
            char_count += chars_per_line - char_count % chars_per_line;
        } else {
            char_count += 1;
        }
        buffer.push(ch);
    }

    if !buffer.is_empty() {
        pages.push(seal(pages.len(), &buffer, chars_per_line, true));
    }

    log::debug!("Paginated character stream into {} page(s)", pages.len());
    pages
}

pub(crate) fn paginate_grid(lines: &[Line], lines_per_page: usize) -> Vec<Page> {
    let mut pages = Vec::new();
    for chunk in lines.chunks(lines_per_page) {
        let page = Page::from_lines(next_number(pages.len()), chunk.to_vec());
        if page.is_empty() {
            break;
        }
        pages.push(page);
    }

    log::debug!(
        "Paginated {} line(s) into {} page(s) of {} line(s)",
        lines.len(),
        pages.len(),
        lines_per_page
    );
    pages
}

fn next_number(sealed: usize) -> u32 {
    sealed as u32 + 1
}

/// Build a page from stream content, splitting it into grid lines.
fn seal(sealed: usize, content: &str, chars_per_line: usize, is_last: bool) -> Page {
    let rules = KinsokuRules::empty();
    let segments: Vec<&str> = content.split('\n').collect();
    let last = segments.len() - 1;
    let mut lines = Vec::new();

    for (i, segment) in segments.iter().enumerate() {
        let end = if i < last {
            LineEnd::Newline
        } else if segment.is_empty() {
            // content ended with a newline, already carried by the previous line
            break;
        } else if is_last {
            LineEnd::End
        } else {
            LineEnd::Wrap
        };
        let broken = split_segment(segment, chars_per_line, KinsokuPolicy::Disabled, &rules);
        push_segment(&mut lines, broken, end);
    }

    Page::from_lines(next_number(sealed), lines)
}
