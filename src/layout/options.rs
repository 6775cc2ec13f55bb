//! Layout options and configuration.

use serde::{Deserialize, Serialize};

use super::{KinsokuPolicy, KinsokuRules};
use crate::error::{Error, Result};

/// Default page capacity in characters (20 × 20 grid).
pub const DEFAULT_CHARS_PER_PAGE: usize = 400;

/// Default line width in characters.
pub const DEFAULT_CHARS_PER_LINE: usize = 20;

/// Options for laying out text into lines and pages.
#[derive(Debug, Clone)]
pub struct LayoutOptions {
    /// Page budget in character cells
    pub chars_per_page: usize,

    /// Characters per vertical line
    pub chars_per_line: usize,

    /// Explicit lines per page (derived from the two above when unset)
    pub lines_per_page: Option<usize>,

    /// Kinsoku correction applied at line boundaries
    pub kinsoku: KinsokuPolicy,

    /// Forbidden character sets
    pub rules: KinsokuRules,

    /// How lines and pages are composed
    pub composition: Composition,

    /// Normalize line endings and apply Unicode NFC before layout
    pub normalize_unicode: bool,
}

impl LayoutOptions {
    /// Create new layout options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page budget in characters.
    pub fn with_chars_per_page(mut self, chars: usize) -> Self {
        self.chars_per_page = chars;
        self
    }

    /// Set the line width in characters.
    pub fn with_chars_per_line(mut self, chars: usize) -> Self {
        self.chars_per_line = chars;
        self
    }

    /// Override the derived number of lines per page.
    pub fn with_lines_per_page(mut self, lines: usize) -> Self {
        self.lines_per_page = Some(lines);
        self
    }

    /// Set the kinsoku policy.
    pub fn with_kinsoku(mut self, policy: KinsokuPolicy) -> Self {
        self.kinsoku = policy;
        self
    }

    /// Set custom forbidden character sets.
    pub fn with_rules(mut self, rules: KinsokuRules) -> Self {
        self.rules = rules;
        self
    }

    /// Set the composition mode.
    pub fn with_composition(mut self, composition: Composition) -> Self {
        self.composition = composition;
        self
    }

    /// Enable or disable input normalization.
    pub fn with_normalization(mut self, normalize: bool) -> Self {
        self.normalize_unicode = normalize;
        self
    }

    /// Lines that fit on one page.
    pub fn lines_per_page(&self) -> usize {
        self.lines_per_page
            .unwrap_or(self.chars_per_page / self.chars_per_line.max(1))
    }

    /// Character capacity used by the page length diagnostic.
    pub fn page_capacity(&self) -> usize {
        self.chars_per_line * self.lines_per_page()
    }

    /// Reject configurations that cannot produce a layout.
    pub fn validate(&self) -> Result<()> {
        if self.chars_per_line == 0 {
            return Err(Error::InvalidConfig(
                "chars_per_line must be positive".to_string(),
            ));
        }
        if self.chars_per_page == 0 {
            return Err(Error::InvalidConfig(
                "chars_per_page must be positive".to_string(),
            ));
        }
        if self.lines_per_page == Some(0) {
            return Err(Error::InvalidConfig(
                "lines_per_page must be positive".to_string(),
            ));
        }
        if self.lines_per_page() == 0 {
            return Err(Error::InvalidConfig(format!(
                "chars_per_page ({}) is smaller than chars_per_line ({})",
                self.chars_per_page, self.chars_per_line
            )));
        }
        Ok(())
    }
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            chars_per_page: DEFAULT_CHARS_PER_PAGE,
            chars_per_line: DEFAULT_CHARS_PER_LINE,
            lines_per_page: None,
            kinsoku: KinsokuPolicy::default(),
            rules: KinsokuRules::default(),
            composition: Composition::default(),
            normalize_unicode: true,
        }
    }
}

/// How line breaking and pagination are composed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Composition {
    /// Break into kinsoku-corrected lines first, then fill pages with
    /// `lines_per_page` lines each.
    #[default]
    LineGrid,
    /// Walk the raw text counting character cells, padding each newline to
    /// the next line boundary. No kinsoku correction is applied.
    CharacterStream,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_options_builder() {
        let options = LayoutOptions::new()
            .with_chars_per_line(10)
            .with_chars_per_page(100)
            .with_kinsoku(KinsokuPolicy::PushBack)
            .with_composition(Composition::CharacterStream)
            .with_normalization(false);

        assert_eq!(options.chars_per_line, 10);
        assert_eq!(options.chars_per_page, 100);
        assert_eq!(options.kinsoku, KinsokuPolicy::PushBack);
        assert_eq!(options.composition, Composition::CharacterStream);
        assert!(!options.normalize_unicode);
        assert_eq!(options.lines_per_page(), 10);
    }

    #[test]
    fn test_default_options() {
        let options = LayoutOptions::default();
        assert_eq!(options.chars_per_page, 400);
        assert_eq!(options.chars_per_line, 20);
        assert_eq!(options.lines_per_page(), 20);
        assert_eq!(options.page_capacity(), 400);
        assert_eq!(options.kinsoku, KinsokuPolicy::PullForward);
        assert_eq!(options.composition, Composition::LineGrid);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_lines_per_page_override() {
        let options = LayoutOptions::new().with_lines_per_page(5);
        assert_eq!(options.lines_per_page(), 5);
        assert_eq!(options.page_capacity(), 100);
    }

    #[test]
    fn test_validate_rejects_zero() {
        let err = LayoutOptions::new().with_chars_per_line(0).validate();
        assert!(matches!(err, Err(Error::InvalidConfig(_))));

        let err = LayoutOptions::new().with_chars_per_page(0).validate();
        assert!(matches!(err, Err(Error::InvalidConfig(_))));

        let err = LayoutOptions::new().with_lines_per_page(0).validate();
        assert!(matches!(err, Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_validate_rejects_page_smaller_than_line() {
        let err = LayoutOptions::new()
            .with_chars_per_line(20)
            .with_chars_per_page(19)
            .validate();
        assert!(matches!(err, Err(Error::InvalidConfig(_))));
    }
}
