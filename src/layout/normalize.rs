//! Input normalization applied before layout.

use std::borrow::Cow;

use unicode_normalization::{is_nfc_quick, IsNormalized, UnicodeNormalization};

/// Normalize line endings to `\n` and compose the text to Unicode NFC.
///
/// Every code point of the result counts as one layout unit, so composing
/// `か` + `゙` into `が` keeps voiced kana in a single cell.
pub fn normalize(text: &str) -> Cow<'_, str> {
    let text = normalize_line_endings(text);
    if is_nfc_quick(text.chars()) == IsNormalized::Yes {
        return text;
    }
    Cow::Owned(text.chars().nfc().collect())
}

/// Convert `\r\n` and lone `\r` to `\n`.
pub fn normalize_line_endings(text: &str) -> Cow<'_, str> {
    if !text.contains('\r') {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
}
