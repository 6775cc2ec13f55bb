//! Page-level types.

use serde::Serialize;

/// How a physical line ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineEnd {
    /// Broken by the layout; no character in the source
    Wrap,
    /// Followed by a newline in the source
    Newline,
    /// Last line of the text
    End,
}

/// A single laid-out vertical line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Line {
    text: String,
    end: LineEnd,
}

impl Line {
    /// Create a new line.
    pub fn new(text: impl Into<String>, end: LineEnd) -> Self {
        Self {
            text: text.into(),
            end,
        }
    }

    /// Characters on the line, excluding its terminator.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// How the line ends.
    pub fn end(&self) -> LineEnd {
        self.end
    }

    /// Number of characters (code points) on the line.
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Check if the line holds no characters.
    pub fn is_blank(&self) -> bool {
        self.text.is_empty()
    }

    /// First character of the line.
    pub fn first_char(&self) -> Option<char> {
        self.text.chars().next()
    }

    /// Last character of the line.
    pub fn last_char(&self) -> Option<char> {
        self.text.chars().next_back()
    }

    /// Append the line and its source terminator to `out`.
    fn write_source(&self, out: &mut String) {
        out.push_str(&self.text);
        if self.end == LineEnd::Newline {
            out.push('\n');
        }
    }
}

/// A single page in the document.
///
/// `content` is a contiguous slice of the normalized source text: wrapped
/// line breaks add nothing to it, source newlines are kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page {
    number: u32,
    content: String,
    lines: Vec<Line>,
}

impl Page {
    /// Create a page from its lines; the content is reconstructed from them.
    pub fn from_lines(number: u32, lines: Vec<Line>) -> Self {
        let mut content = String::new();
        for line in &lines {
            line.write_source(&mut content);
        }
        Self {
            number,
            content,
            lines,
        }
    }

    /// Page number (1-indexed).
    pub fn number(&self) -> u32 {
        self.number
    }

    /// Source text held by this page.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Laid-out lines, in reading order (right to left).
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Get the number of lines on the page.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Number of characters (code points) in the content, newlines included.
    pub fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    /// Check if the page holds no text.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Diagnostic check that the content fits `capacity` characters.
    ///
    /// Kinsoku hanging and newlines may legitimately push a page over.
    pub fn is_valid_length(&self, capacity: usize) -> bool {
        self.char_count() <= capacity
    }
}
