//! Kinsoku-aware line breaking.
//!
//! Breaking is by character count: every code point occupies one cell
//! regardless of script or visual width. Each newline-delimited segment is
//! broken independently, so no character ever moves across a source newline.

use super::kinsoku::{self, Adjustment, KinsokuPolicy, KinsokuRules};
use super::{normalize, LayoutOptions};
use crate::error::{Error, Result};
use crate::model::{Line, LineEnd};

/// Break-loop state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BreakState {
    /// Appending characters to the open line
    Filling,
    /// The open line is full; decide the kinsoku correction
    OverflowCheck,
    /// Commit the open line and start a new one
    Flushed,
}

/// Break one newline-free segment into lines of `chars_per_line` characters.
///
/// An empty segment yields no lines. A segment shorter than the line width
/// yields itself. A no-start character at the very beginning of the segment
/// stays where it is, as there is no previous line to hang it on.
///
/// # Errors
///
/// Returns [`Error::InvalidConfig`] when `chars_per_line` is zero.
pub fn break_segment(
    segment: &str,
    chars_per_line: usize,
    policy: KinsokuPolicy,
    rules: &KinsokuRules,
) -> Result<Vec<String>> {
    if chars_per_line == 0 {
        return Err(Error::InvalidConfig(
            "chars_per_line must be positive".to_string(),
        ));
    }
    Ok(split_segment(segment, chars_per_line, policy, rules))
}

/// Break loop behind [`break_segment`]; `chars_per_line` must be positive.
pub(crate) fn split_segment(
    segment: &str,
    chars_per_line: usize,
    policy: KinsokuPolicy,
    rules: &KinsokuRules,
) -> Vec<String> {
    let chars: Vec<char> = segment.chars().collect();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut cursor = 0;
    let mut state = BreakState::Filling;

    loop {
        match state {
            BreakState::Filling => {
                if cursor == chars.len() {
                    if cursor > start {
                        lines.push(chars[start..cursor].iter().collect());
                    }
                    break;
                }
                cursor += 1;
                if cursor - start == chars_per_line {
                    state = BreakState::OverflowCheck;
                }
            }
            BreakState::OverflowCheck => {
                if cursor < chars.len() {
                    let line = &chars[start..cursor];
                    match kinsoku::adjust(policy, line, &chars[cursor..], rules) {
                        Adjustment::Keep => {}
                        Adjustment::Pull(n) => {
                            log::trace!("kinsoku: hanging {} char(s) at {}", n, cursor);
                            cursor += n;
                        }
                        Adjustment::Push(n) => {
                            log::trace!("kinsoku: pushing {} char(s) at {}", n, cursor);
                            cursor -= n;
                        }
                    }
                }
                state = BreakState::Flushed;
            }
            BreakState::Flushed => {
                lines.push(chars[start..cursor].iter().collect());
                start = cursor;
                state = BreakState::Filling;
            }
        }
    }

    lines
}

/// Break `text` into laid-out lines.
///
/// The text is normalized first when the options ask for it. Blank source
/// lines appear as blank [`Line`]s so that source newlines survive.
pub fn break_lines(text: &str, options: &LayoutOptions) -> Result<Vec<Line>> {
    options.validate()?;
    if options.normalize_unicode {
        Ok(break_normalized(&normalize(text), options))
    } else {
        Ok(break_normalized(text, options))
    }
}

/// Break `text` with the default kinsoku rules and return the line strings.
pub fn break_text(text: &str, chars_per_line: usize) -> Result<Vec<String>> {
    let options = LayoutOptions::new()
        .with_chars_per_line(chars_per_line)
        .with_chars_per_page(chars_per_line);
    Ok(break_lines(text, &options)?
        .into_iter()
        .map(|line| line.text().to_string())
        .collect())
}

/// Break already-normalized text; options must be valid.
pub(crate) fn break_normalized(text: &str, options: &LayoutOptions) -> Vec<Line> {
    let segments: Vec<&str> = text.split('\n').collect();
    let last = segments.len() - 1;
    let mut lines = Vec::new();

    for (i, segment) in segments.iter().enumerate() {
        let end = if i == last { LineEnd::End } else { LineEnd::Newline };
        let broken = split_segment(
            segment,
            options.chars_per_line,
            options.kinsoku,
            &options.rules,
        );
        push_segment(&mut lines, broken, end);
    }

    log::debug!(
        "Broke {} segment(s) into {} line(s)",
        segments.len(),
        lines.len()
    );
    lines
}

/// Append a broken segment, marking its last line with `end`.
pub(crate) fn push_segment(lines: &mut Vec<Line>, broken: Vec<String>, end: LineEnd) {
    if broken.is_empty() {
        lines.push(Line::new(String::new(), end));
        return;
    }
    let count = broken.len();
    for (j, text) in broken.into_iter().enumerate() {
        let line_end = if j + 1 == count { end } else { LineEnd::Wrap };
        lines.push(Line::new(text, line_end));
    }
}
