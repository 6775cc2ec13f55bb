//! C-ABI FFI bindings for cross-language integration.
//!
//! This module provides a C-compatible API for using tategaki from other
//! languages such as C#, Python, and Node.js. Integer parameters are signed
//! so that callers passing zero or negative sizes get a configuration error
//! instead of undefined behavior.

use std::ffi::{c_char, CStr, CString};
use std::ptr;

use crate::render::{self, JsonFormat, SvgOptions};
use crate::{Document, Error, LayoutOptions};

/// Result structure returned by FFI functions.
#[repr(C)]
pub struct TategakiResult {
    /// Whether the operation succeeded.
    pub success: bool,
    /// The result data (null if failed). Must be freed with `tategaki_free_result`.
    pub data: *mut c_char,
    /// Error message (null if succeeded). Must be freed with `tategaki_free_result`.
    pub error: *mut c_char,
}

impl TategakiResult {
    fn success(data: String) -> Self {
        Self {
            success: true,
            data: CString::new(data).unwrap_or_default().into_raw(),
            error: ptr::null_mut(),
        }
    }

    fn error(message: String) -> Self {
        Self {
            success: false,
            data: ptr::null_mut(),
            error: CString::new(message).unwrap_or_default().into_raw(),
        }
    }
}

fn to_size(value: i64, name: &str) -> crate::Result<usize> {
    if value <= 0 {
        return Err(Error::InvalidConfig(format!(
            "{} must be positive, got {}",
            name, value
        )));
    }
    usize::try_from(value).map_err(|_| Error::InvalidConfig(format!("{} is too large", name)))
}

fn layout_internal(text: &str, chars_per_page: i64, chars_per_line: i64) -> crate::Result<Document> {
    let options = LayoutOptions::new()
        .with_chars_per_page(to_size(chars_per_page, "chars_per_page")?)
        .with_chars_per_line(to_size(chars_per_line, "chars_per_line")?);
    Document::from_text(text, &options)
}

unsafe fn read_text<'a>(text: *const c_char) -> Result<&'a str, String> {
    if text.is_null() {
        return Err("Text cannot be null".to_string());
    }
    CStr::from_ptr(text)
        .to_str()
        .map_err(|_| "Invalid UTF-8 text".to_string())
}

/// Lay out text and return the document as JSON.
///
/// # Safety
///
/// The `text` must be a valid null-terminated UTF-8 string.
/// The returned result must be freed with `tategaki_free_result`.
#[no_mangle]
pub unsafe extern "C" fn tategaki_layout_json(
    text: *const c_char,
    chars_per_page: i64,
    chars_per_line: i64,
    pretty: bool,
) -> TategakiResult {
    let text = match read_text(text) {
        Ok(s) => s,
        Err(e) => return TategakiResult::error(e),
    };

    let format = if pretty {
        JsonFormat::Pretty
    } else {
        JsonFormat::Compact
    };

    match layout_internal(text, chars_per_page, chars_per_line)
        .and_then(|doc| render::to_json(&doc, format))
    {
        Ok(json) => TategakiResult::success(json),
        Err(e) => TategakiResult::error(e.to_string()),
    }
}

/// Lay out text and render page `page` (1-indexed) as SVG.
///
/// # Safety
///
/// The `text` must be a valid null-terminated UTF-8 string.
/// The `font_family` must be null (default font) or a valid null-terminated UTF-8 string.
/// The returned result must be freed with `tategaki_free_result`.
#[no_mangle]
pub unsafe extern "C" fn tategaki_render_page_svg(
    text: *const c_char,
    chars_per_page: i64,
    chars_per_line: i64,
    page: u32,
    font_family: *const c_char,
    font_size_px: f32,
) -> TategakiResult {
    let text = match read_text(text) {
        Ok(s) => s,
        Err(e) => return TategakiResult::error(e),
    };

    let mut options = SvgOptions::default();
    if !font_family.is_null() {
        match CStr::from_ptr(font_family).to_str() {
            Ok(family) => options = options.with_font_family(family),
            Err(_) => return TategakiResult::error("Invalid UTF-8 font_family".to_string()),
        }
    }
    if font_size_px > 0.0 {
        options = options.with_font_size(font_size_px);
    }

    match layout_internal(text, chars_per_page, chars_per_line)
        .and_then(|doc| render::to_svg_page(&doc, page, &options))
    {
        Ok(svg) => TategakiResult::success(svg),
        Err(e) => TategakiResult::error(e.to_string()),
    }
}

/// Get the number of pages text lays out to.
///
/// # Safety
///
/// The `text` must be a valid null-terminated UTF-8 string.
/// Returns -1 on error.
#[no_mangle]
pub unsafe extern "C" fn tategaki_page_count(
    text: *const c_char,
    chars_per_page: i64,
    chars_per_line: i64,
) -> i32 {
    let text = match read_text(text) {
        Ok(s) => s,
        Err(_) => return -1,
    };

    match layout_internal(text, chars_per_page, chars_per_line) {
        Ok(doc) => doc.page_count() as i32,
        Err(_) => -1,
    }
}

/// Free a result returned by any tategaki function.
///
/// # Safety
///
/// The `result` must have been returned by a tategaki function.
/// This function should only be called once per result.
#[no_mangle]
pub unsafe extern "C" fn tategaki_free_result(result: TategakiResult) {
    if !result.data.is_null() {
        drop(CString::from_raw(result.data));
    }
    if !result.error.is_null() {
        drop(CString::from_raw(result.error));
    }
}

/// Get the version of the tategaki library.
///
/// The returned string is statically allocated and should not be freed.
#[no_mangle]
pub extern "C" fn tategaki_version() -> *const c_char {
    static VERSION: &[u8] = concat!(env!("CARGO_PKG_VERSION"), "\0").as_bytes();
    VERSION.as_ptr() as *const c_char
}
