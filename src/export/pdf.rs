//! Paginated PDF rendering of summary text.
//!
//! Layout: A4 portrait, Helvetica 12pt, 10 mm margins, 10 mm line height,
//! automatic page break 15 mm above the bottom edge. Lines wrap at spaces
//! across the full text width; words wider than a line are broken.

use crate::config::UnsupportedCharPolicy;
use crate::error::{NotesError, Result};
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};
use tracing::debug;

use super::encoding::encode_win_ansi;

const MM: f64 = 72.0 / 25.4;

const PAGE_WIDTH_MM: f64 = 210.0;
const PAGE_HEIGHT_MM: f64 = 297.0;
const MARGIN_MM: f64 = 10.0;
const CELL_MARGIN_MM: f64 = 1.0;
const PAGE_BREAK_MARGIN_MM: f64 = 15.0;
const LINE_HEIGHT_MM: f64 = 10.0;
const FONT_SIZE_PT: f64 = 12.0;

const FONT_NAME: &str = "F1";

/// Helvetica advance widths (1/1000 em) for every WinAnsiEncoding byte.
const HELVETICA_WIDTHS: [u16; 256] = [
    278, 278, 278, 278, 278, 278, 278, 278, 278, 278, 278, 278, 278, 278, 278, 278, // 0x00
    278, 278, 278, 278, 278, 278, 278, 278, 278, 278, 278, 278, 278, 278, 278, 278, // 0x10
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, // '0'..'?'
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, // '@'..'O'
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, // 'P'..'_'
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // '`'..'o'
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, 350, // 'p'..0x7F
    556, 350, 222, 556, 333, 1000, 556, 556, 333, 1000, 667, 333, 1000, 350, 611, 350, // 0x80
    350, 222, 222, 333, 333, 350, 556, 1000, 333, 1000, 500, 333, 944, 350, 500, 667, // 0x90
    278, 333, 556, 556, 556, 556, 260, 556, 333, 737, 370, 556, 584, 333, 737, 333, // 0xA0
    400, 584, 333, 333, 333, 556, 537, 278, 333, 333, 365, 556, 834, 834, 834, 611, // 0xB0
    667, 667, 667, 667, 667, 667, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278, // 0xC0
    722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611, // 0xD0
    556, 556, 556, 556, 556, 556, 889, 500, 556, 556, 556, 556, 278, 278, 278, 278, // 0xE0
    556, 556, 556, 556, 556, 556, 556, 584, 611, 556, 556, 556, 556, 500, 556, 500, // 0xF0
];

fn glyph_width(byte: u8) -> u32 {
    HELVETICA_WIDTHS[byte as usize] as u32
}

/// Maximum line width in glyph units at the configured font size.
fn max_line_units() -> u32 {
    let usable_mm = PAGE_WIDTH_MM - 2.0 * MARGIN_MM - 2.0 * CELL_MARGIN_MM;
    (usable_mm * MM * 1000.0 / FONT_SIZE_PT) as u32
}

fn line_units(line: &[u8]) -> u32 {
    line.iter().map(|&b| glyph_width(b)).sum()
}

/// Split encoded text into lines no wider than `max_units`.
///
/// Explicit newlines always end a line. A line that overflows is broken at
/// its last space (which is dropped), or before the overflowing byte when it
/// has no space.
pub(crate) fn wrap_lines(text: &[u8], max_units: u32) -> Vec<Vec<u8>> {
    let mut lines = Vec::new();
    let mut current: Vec<u8> = Vec::new();
    let mut width = 0u32;
    let mut last_space: Option<usize> = None;

    for &byte in text {
        if byte == b'\n' {
            lines.push(std::mem::take(&mut current));
            width = 0;
            last_space = None;
            continue;
        }

        let w = glyph_width(byte);
        if byte == b' ' && width + w > max_units && !current.is_empty() {
            // The overflowing space is the break point and is dropped.
            lines.push(std::mem::take(&mut current));
            width = 0;
            last_space = None;
            continue;
        }
        while width + w > max_units && !current.is_empty() {
            match last_space.take() {
                Some(space) => {
                    let rest = current.split_off(space + 1);
                    current.pop();
                    lines.push(std::mem::replace(&mut current, rest));
                    width = line_units(&current);
                }
                None => {
                    lines.push(std::mem::take(&mut current));
                    width = 0;
                }
            }
        }

        if byte == b' ' {
            last_space = Some(current.len());
        }
        current.push(byte);
        width += w;
    }

    lines.push(current);
    lines
}

/// Group lines into pages according to the page-break margin.
fn paginate(lines: Vec<Vec<u8>>) -> Vec<Vec<Vec<u8>>> {
    let limit = PAGE_HEIGHT_MM - PAGE_BREAK_MARGIN_MM;
    let mut pages = vec![Vec::new()];
    let mut y = MARGIN_MM;

    for line in lines {
        if y + LINE_HEIGHT_MM > limit {
            pages.push(Vec::new());
            y = MARGIN_MM;
        }
        if let Some(page) = pages.last_mut() {
            page.push(line);
        }
        y += LINE_HEIGHT_MM;
    }

    pages
}

fn real(value: f64) -> Object {
    // Two decimals keep the output stable and compact.
    Object::Real(((value * 100.0).round() / 100.0) as _)
}

fn page_content(lines: &[Vec<u8>]) -> Result<Vec<u8>> {
    let x = (MARGIN_MM + CELL_MARGIN_MM) * MM;
    let font_size_mm = FONT_SIZE_PT / MM;
    let mut operations = Vec::with_capacity(lines.len() * 5);

    for (i, line) in lines.iter().enumerate() {
        if line.is_empty() {
            continue;
        }
        let top = MARGIN_MM + i as f64 * LINE_HEIGHT_MM;
        let baseline_mm = top + 0.5 * LINE_HEIGHT_MM + 0.3 * font_size_mm;
        let y = (PAGE_HEIGHT_MM - baseline_mm) * MM;

        operations.push(Operation::new("BT", vec![]));
        operations.push(Operation::new(
            "Tf",
            vec![FONT_NAME.into(), real(FONT_SIZE_PT)],
        ));
        operations.push(Operation::new("Td", vec![real(x), real(y)]));
        operations.push(Operation::new(
            "Tj",
            vec![Object::string_literal(line.clone())],
        ));
        operations.push(Operation::new("ET", vec![]));
    }

    Content { operations }
        .encode()
        .map_err(|e| NotesError::Export(format!("Failed to encode page content: {}", e)))
}

/// Render summary text as a PDF document.
pub fn render(text: &str, policy: UnsupportedCharPolicy) -> Result<Vec<u8>> {
    let encoded = encode_win_ansi(text, policy)?;
    let pages = paginate(wrap_lines(&encoded, max_line_units()));
    debug!("Rendering PDF with {} page(s)", pages.len());

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            FONT_NAME => font_id,
        },
    });

    let mut kids = Vec::with_capacity(pages.len());
    for lines in &pages {
        let content_id = doc.add_object(Stream::new(dictionary! {}, page_content(lines)?));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(Object::Reference(page_id));
    }

    let page_count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => page_count,
            "Resources" => resources_id,
            "MediaBox" => vec![
                Object::Integer(0),
                Object::Integer(0),
                real(PAGE_WIDTH_MM * MM),
                real(PAGE_HEIGHT_MM * MM),
            ],
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.compress();

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer)
        .map_err(|e| NotesError::Export(format!("Failed to write PDF: {}", e)))?;

    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_is_one_line() {
        let lines = wrap_lines(b"Hello world", max_line_units());
        assert_eq!(lines, vec![b"Hello world".to_vec()]);
    }

    #[test]
    fn test_explicit_newlines_are_kept() {
        let lines = wrap_lines(b"a\n\nb", max_line_units());
        assert_eq!(lines, vec![b"a".to_vec(), Vec::new(), b"b".to_vec()]);
    }

    #[test]
    fn test_wraps_at_last_space() {
        // "aaa" is 1668 units, a space 278.
        let lines = wrap_lines(b"aaa aaa aaa", 4000);
        assert_eq!(lines, vec![b"aaa aaa".to_vec(), b"aaa".to_vec()]);
    }

    #[test]
    fn test_breaks_at_space_after_full_line() {
        // 3614 units is exactly "aaa aaa".
        let lines = wrap_lines(b"aaa aaa aaa", 3614);
        assert_eq!(lines, vec![b"aaa aaa".to_vec(), b"aaa".to_vec()]);
    }

    #[test]
    fn test_wide_winansi_glyphs_fit() {
        let encoded =
            encode_win_ansi(&"—".repeat(200), UnsupportedCharPolicy::Strict).unwrap();
        let max = max_line_units();
        let lines = wrap_lines(&encoded, max);

        assert_eq!(glyph_width(0x97), 1000);
        assert_eq!(lines[0].len(), (max / 1000) as usize);
        assert!(lines.iter().all(|l| line_units(l) <= max));

        let mixed = encode_win_ansi(
            &"Œuvre … 50‰ Æsir™ “notes” – ".repeat(30),
            UnsupportedCharPolicy::Strict,
        )
        .unwrap();
        assert!(wrap_lines(&mixed, max).iter().all(|l| line_units(l) <= max));
    }

    #[test]
    fn test_breaks_long_words() {
        let lines = wrap_lines(b"aaaaa", 1200);
        assert_eq!(lines, vec![b"aa".to_vec(), b"aa".to_vec(), b"a".to_vec()]);
    }

    #[test]
    fn test_wrapped_lines_fit() {
        let text = "The quick brown fox jumps over the lazy dog. ".repeat(40);
        let max = max_line_units();
        let lines = wrap_lines(text.as_bytes(), max);
        assert!(lines.len() > 1);
        assert!(lines.iter().all(|l| line_units(l) <= max));
    }

    #[test]
    fn test_pagination_respects_break_margin() {
        let lines = vec![b"x".to_vec(); 28];
        let pages = paginate(lines);
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].len(), 27);
        assert_eq!(pages[1].len(), 1);
    }

    #[test]
    fn test_render_produces_pdf() {
        let bytes = render("Hello (world) \\ notes", UnsupportedCharPolicy::Strict).unwrap();
        assert!(bytes.starts_with(b"%PDF-1.5"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let text = "Line one\nLine two – with “quotes”\n".repeat(50);
        let first = render(&text, UnsupportedCharPolicy::Strict).unwrap();
        let second = render(&text, UnsupportedCharPolicy::Strict).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_render_empty_text() {
        let bytes = render("", UnsupportedCharPolicy::Strict).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_render_strict_rejects_emoji() {
        assert!(matches!(
            render("done ✅", UnsupportedCharPolicy::Strict),
            Err(NotesError::Encoding { character: '✅', .. })
        ));
        assert!(render("done ✅", UnsupportedCharPolicy::Replace).is_ok());
    }
}
