//! SVG rendering for laid-out pages.
//!
//! A page becomes a self-contained SVG document: a fixed canvas holding a
//! `foreignObject` with an XHTML block in `writing-mode: vertical-rl`. No
//! layout decisions are made here; lines are emitted as they were broken.

use std::fmt::Write;

use rayon::prelude::*;

use super::SvgOptions;
use crate::error::Result;
use crate::model::{Document, Line, Page};

/// Render arbitrary content; each `\n` starts a new vertical line.
pub fn render_svg(content: &str, options: &SvgOptions) -> String {
    let longest = content
        .split('\n')
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0);
    render_lines(content.split('\n'), longest, options)
}

/// Render a page line by line, wrapped breaks included.
pub fn render_page(page: &Page, chars_per_line: usize, options: &SvgOptions) -> String {
    render_lines(page.lines().iter().map(Line::text), chars_per_line, options)
}

/// Render one page of a document by number (1-indexed).
pub fn to_svg_page(doc: &Document, page_num: u32, options: &SvgOptions) -> Result<String> {
    let page = doc.page(page_num)?;
    Ok(render_page(page, doc.chars_per_line(), options))
}

/// Render every page of a document, in page order.
pub fn to_svg_pages(doc: &Document, options: &SvgOptions) -> Vec<String> {
    doc.pages()
        .par_iter()
        .map(|page| render_page(page, doc.chars_per_line(), options))
        .collect()
}

fn render_lines<'a>(
    lines: impl Iterator<Item = &'a str>,
    chars_per_line: usize,
    options: &SvgOptions,
) -> String {
    let mut body = String::new();
    for (i, line) in lines.enumerate() {
        if i > 0 {
            body.push_str("<br/>");
        }
        body.push_str(&escape_text(line));
    }

    let mut svg = String::with_capacity(body.len() + 640);
    svg.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    let _ = writeln!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">",
        w = options.width,
        h = options.height
    );
    svg.push_str("  <foreignObject width=\"100%\" height=\"100%\">\n");
    let _ = writeln!(
        svg,
        "    <div xmlns=\"http://www.w3.org/1999/xhtml\" style=\"width:100%;height:100%;padding:{};background:{};box-sizing:border-box;\">",
        escape_attr(&options.padding),
        escape_attr(&options.background)
    );
    let _ = writeln!(
        svg,
        "      <div style=\"writing-mode:vertical-rl;text-orientation:mixed;font-family:{};line-height:{};height:{}px;width:{}px;font-size:{}px;\">{}</div>",
        escape_attr(&options.font_family),
        options.line_height,
        options.resolve_region_height(chars_per_line),
        options.region_width,
        options.font_size_px,
        body
    );
    svg.push_str("    </div>\n");
    svg.push_str("  </foreignObject>\n");
    svg.push_str("</svg>\n");
    svg
}

fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            c if is_xml_char(c) => out.push(c),
            _ => {}
        }
    }
    out
}

fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '"' => out.push_str("&quot;"),
            c if is_xml_char(c) => out.push(c),
            _ => {}
        }
    }
    out
}

/// Characters allowed in an XML 1.0 document.
fn is_xml_char(c: char) -> bool {
    !matches!(
        c,
        '\u{0}'..='\u{8}' | '\u{b}' | '\u{c}' | '\u{e}'..='\u{1f}' | '\u{fffe}' | '\u{ffff}'
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::LayoutOptions;
    use crate::render::RegionHeight;

    #[test]
    fn test_render_svg_frame() {
        let svg = render_svg("縦書き", &SvgOptions::default());
        assert!(svg.starts_with("<?xml"));
        assert!(svg.contains("width=\"800\" height=\"1000\""));
        assert!(svg.contains("writing-mode:vertical-rl"));
        assert!(svg.contains("font-family:'Noto Serif JP',serif"));
        assert!(svg.contains("height:800px;width:680px;font-size:20px"));
        assert!(svg.contains(">縦書き</div>"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_render_svg_escapes_markup() {
        let svg = render_svg("<b>&</b>", &SvgOptions::default());
        assert!(svg.contains("&lt;b&gt;&amp;&lt;/b&gt;"));
        assert!(!svg.contains("<b>"));
    }

    #[test]
    fn test_render_svg_drops_control_chars() {
        let svg = render_svg("縦\u{0}書\u{7}き\u{1b}\t", &SvgOptions::default());
        assert!(svg.contains(">縦書き\t</div>"));
        assert!(!svg.chars().any(|c| c < ' ' && !matches!(c, '\t' | '\n' | '\r')));

        let options = SvgOptions::new().with_font_family("serif\u{8}");
        let svg = render_svg("あ", &options);
        assert!(svg.contains("font-family:serif;"));
    }

    #[test]
    fn test_render_svg_newlines() {
        let svg = render_svg("一\n二", &SvgOptions::default());
        assert!(svg.contains("一<br/>二"));
    }

    #[test]
    fn test_render_options_applied() {
        let options = SvgOptions::new()
            .with_font_family("serif")
            .with_font_size(16.0)
            .with_line_height(2.0)
            .with_region_height(RegionHeight::Derived);
        let svg = render_svg("あいう", &options);
        assert!(svg.contains("font-family:serif"));
        assert!(svg.contains("font-size:16px"));
        // 3 chars × 16px × 2.0
        assert!(svg.contains("height:96px"));
    }

    #[test]
    fn test_render_page_uses_lines() {
        let options = LayoutOptions::new().with_chars_per_line(3);
        let doc = Document::from_text("あいうえお", &options).unwrap();
        let svg = to_svg_page(&doc, 1, &SvgOptions::default()).unwrap();
        assert!(svg.contains("あいう<br/>えお"));
    }

    #[test]
    fn test_to_svg_pages_in_order() {
        let options = LayoutOptions::new()
            .with_chars_per_line(2)
            .with_chars_per_page(2);
        let doc = Document::from_text("一二三四五六", &options).unwrap();
        let pages = to_svg_pages(&doc, &SvgOptions::default());
        assert_eq!(pages.len(), 3);
        assert!(pages[0].contains("一二"));
        assert!(pages[1].contains("三四"));
        assert!(pages[2].contains("五六"));
    }

    #[test]
    fn test_to_svg_page_out_of_range() {
        let doc = Document::from_text("あ", &LayoutOptions::default()).unwrap();
        assert!(to_svg_page(&doc, 2, &SvgOptions::default()).is_err());
    }
}
