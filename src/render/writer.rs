//! Paginated PDF writer
//!
//! Flows a block sequence down A4 pages: a cursor walks from the top
//! margin toward the bottom, a block that does not fit starts a new page,
//! and page-break blocks force one. Pages are emitted as raw content
//! streams and assembled into a document with shared base-14 Helvetica
//! font resources.

use std::fmt::Write as _;

use lopdf::{Dictionary, Document, Object, Stream};

use crate::compose::{HeadingLevel, ParagraphStyle, RenderBlock, TableStyle};

use super::metrics::{line_width, string_width, winansi_bytes, wrap_spans, FontFace, Line};
use super::RenderError;

/// A4 page size in points
const PAGE_WIDTH: f32 = 595.28;
const PAGE_HEIGHT: f32 = 841.89;

/// 0.75-inch margins on all sides
const MARGIN: f32 = 54.0;

const CONTENT_WIDTH: f32 = PAGE_WIDTH - 2.0 * MARGIN;

/// RGB fill/stroke color, components in 0..=1
#[derive(Debug, Clone, Copy)]
struct Color(f32, f32, f32);

const BRAND_BLUE: Color = Color(0.098, 0.365, 0.902); // #195de6
const INK: Color = Color(0.067, 0.075, 0.094); // #111318
const BLACK: Color = Color(0.0, 0.0, 0.0);
const GREY: Color = Color(0.388, 0.435, 0.533); // #636f88
const LIGHT_GREY: Color = Color(0.941, 0.949, 0.957); // #f0f2f4
const WHITE: Color = Color(1.0, 1.0, 1.0);

/// Resolved presentation for a paragraph or heading
struct TextStyle {
    face: FontFace,
    emphasis_face: FontFace,
    size: f32,
    leading: f32,
    color: Color,
    emphasis_color: Color,
    indent: f32,
    centered: bool,
}

fn paragraph_style(style: ParagraphStyle) -> TextStyle {
    match style {
        ParagraphStyle::Body => TextStyle {
            face: FontFace::Regular,
            emphasis_face: FontFace::Bold,
            size: 11.0,
            leading: 16.0,
            color: BLACK,
            emphasis_color: BRAND_BLUE,
            indent: 10.0,
            centered: false,
        },
        ParagraphStyle::Subtitle => TextStyle {
            face: FontFace::Oblique,
            emphasis_face: FontFace::Bold,
            size: 14.0,
            leading: 18.0,
            color: GREY,
            emphasis_color: GREY,
            indent: 0.0,
            centered: true,
        },
        ParagraphStyle::KeyTerm => TextStyle {
            face: FontFace::Bold,
            emphasis_face: FontFace::Bold,
            size: 10.0,
            leading: 13.0,
            color: BRAND_BLUE,
            emphasis_color: BRAND_BLUE,
            indent: 20.0,
            centered: false,
        },
        ParagraphStyle::Note => TextStyle {
            face: FontFace::Oblique,
            emphasis_face: FontFace::Bold,
            size: 8.0,
            leading: 11.0,
            color: GREY,
            emphasis_color: GREY,
            indent: 10.0,
            centered: false,
        },
    }
}

fn heading_style(level: HeadingLevel) -> TextStyle {
    match level {
        HeadingLevel::Title => TextStyle {
            face: FontFace::Bold,
            emphasis_face: FontFace::Bold,
            size: 28.0,
            leading: 34.0,
            color: BRAND_BLUE,
            emphasis_color: BRAND_BLUE,
            indent: 0.0,
            centered: true,
        },
        HeadingLevel::Chapter => TextStyle {
            face: FontFace::Bold,
            emphasis_face: FontFace::Bold,
            size: 20.0,
            leading: 26.0,
            color: BRAND_BLUE,
            emphasis_color: BRAND_BLUE,
            indent: 10.0,
            centered: false,
        },
        HeadingLevel::Topic => TextStyle {
            face: FontFace::Bold,
            emphasis_face: FontFace::Bold,
            size: 16.0,
            leading: 21.0,
            color: INK,
            emphasis_color: INK,
            indent: 10.0,
            centered: false,
        },
    }
}

/// Render a block sequence into finished PDF bytes.
pub fn render(blocks: &[RenderBlock]) -> Result<Vec<u8>, RenderError> {
    let mut writer = PageWriter::new();

    for block in blocks {
        match block {
            RenderBlock::Heading { level, text } => writer.heading(*level, text),
            RenderBlock::Paragraph { style, spans } => {
                let style = paragraph_style(*style);
                let lines = wrap_spans(
                    spans,
                    style.size,
                    CONTENT_WIDTH - style.indent,
                    style.face,
                    style.emphasis_face,
                );
                writer.text_lines(&lines, &style);
            }
            RenderBlock::Spacer { points } => writer.spacer(*points),
            RenderBlock::PageBreak => writer.break_page(),
            RenderBlock::Table { style, widths, rows } => writer.table(*style, widths, rows),
        }
    }

    writer.finish()
}

/// Escape WinAnsi bytes into a PDF literal string body
fn escape_literal(text: &str) -> String {
    let mut out = String::new();
    for byte in winansi_bytes(text) {
        match byte {
            b'(' => out.push_str("\\("),
            b')' => out.push_str("\\)"),
            b'\\' => out.push_str("\\\\"),
            0x20..=0x7E => out.push(byte as char),
            _ => {
                let _ = write!(out, "\\{byte:03o}");
            }
        }
    }
    out
}

struct PageWriter {
    /// Finished page content streams
    pages: Vec<String>,
    /// Current page operators
    content: String,
    /// Baseline ceiling for the next line
    cursor: f32,
}

impl PageWriter {
    fn new() -> Self {
        Self {
            pages: Vec::new(),
            content: String::new(),
            cursor: PAGE_HEIGHT - MARGIN,
        }
    }

    fn dirty(&self) -> bool {
        !self.content.is_empty()
    }

    /// Force a page break, even on an empty page
    fn break_page(&mut self) {
        self.pages.push(std::mem::take(&mut self.content));
        self.cursor = PAGE_HEIGHT - MARGIN;
    }

    /// Start a new page if `height` points no longer fit
    fn ensure_space(&mut self, height: f32) {
        if self.cursor - height < MARGIN && self.dirty() {
            self.break_page();
        }
    }

    fn spacer(&mut self, points: f32) {
        self.cursor = (self.cursor - points).max(MARGIN);
    }

    fn set_fill(&mut self, color: Color) {
        let _ = writeln!(self.content, "{:.3} {:.3} {:.3} rg", color.0, color.1, color.2);
    }

    fn set_stroke(&mut self, color: Color) {
        let _ = writeln!(self.content, "{:.3} {:.3} {:.3} RG", color.0, color.1, color.2);
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        self.set_fill(color);
        let _ = writeln!(self.content, "{x:.2} {y:.2} {w:.2} {h:.2} re f");
    }

    fn stroke_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color, line_width: f32) {
        self.set_stroke(color);
        let _ = writeln!(self.content, "{line_width:.2} w");
        let _ = writeln!(self.content, "{x:.2} {y:.2} {w:.2} {h:.2} re S");
    }

    fn text_run(&mut self, x: f32, y: f32, face: FontFace, size: f32, color: Color, text: &str) {
        self.set_fill(color);
        self.content.push_str("BT\n");
        let _ = writeln!(self.content, "/{} {size:.1} Tf", face.resource_name());
        let _ = writeln!(self.content, "{x:.2} {y:.2} Td");
        let _ = writeln!(self.content, "({}) Tj", escape_literal(text));
        self.content.push_str("ET\n");
    }

    /// Emit wrapped lines with per-word face/color, handling pagination
    fn text_lines(&mut self, lines: &[Line], style: &TextStyle) {
        let space = string_width(" ", style.face, style.size);

        for line in lines {
            self.ensure_space(style.leading);
            self.cursor -= style.leading;
            if line.is_empty() {
                continue;
            }
            let baseline = self.cursor;

            let mut x = if style.centered {
                let w = line_width(line, style.size, style.face, style.emphasis_face);
                MARGIN + (CONTENT_WIDTH - w) / 2.0
            } else {
                MARGIN + style.indent
            };

            for (i, word) in line.iter().enumerate() {
                if i > 0 && !word.joined {
                    x += space;
                }
                let (face, color) = if word.emphasis {
                    (style.emphasis_face, style.emphasis_color)
                } else {
                    (style.face, style.color)
                };
                self.text_run(x, baseline, face, style.size, color, &word.text);
                x += string_width(&word.text, face, style.size);
            }
        }
    }

    fn heading(&mut self, level: HeadingLevel, text: &str) {
        let style = heading_style(level);
        let spans = [crate::compose::Span::plain(text)];
        let lines = wrap_spans(
            &spans,
            style.size,
            CONTENT_WIDTH - 2.0 * style.indent,
            style.face,
            style.emphasis_face,
        );

        if level == HeadingLevel::Chapter {
            // Banner behind the chapter title
            let pad = 10.0;
            let banner_height = lines.len() as f32 * style.leading + 2.0 * pad;
            self.ensure_space(banner_height);
            let top = self.cursor;
            self.fill_rect(
                MARGIN,
                top - banner_height,
                CONTENT_WIDTH,
                banner_height,
                LIGHT_GREY,
            );
            self.stroke_rect(
                MARGIN,
                top - banner_height,
                CONTENT_WIDTH,
                banner_height,
                BRAND_BLUE,
                2.0,
            );
            self.cursor -= pad;
            self.text_lines(&lines, &style);
            self.cursor = top - banner_height;
        } else {
            self.text_lines(&lines, &style);
        }
    }

    fn table(&mut self, style: TableStyle, widths: &[f32], rows: &[Vec<String>]) {
        const CELL_SIZE: f32 = 10.0;
        const CELL_LEADING: f32 = 13.0;
        const CELL_PAD: f32 = 8.0;

        let total_width: f32 = widths.iter().sum();
        let table_x = MARGIN + ((CONTENT_WIDTH - total_width) / 2.0).max(0.0);

        for (row_index, row) in rows.iter().enumerate() {
            // Wrap each cell to its column width
            let mut cells: Vec<Vec<Line>> = Vec::with_capacity(row.len());
            let mut row_lines = 1usize;
            for (col, text) in row.iter().enumerate() {
                let face = self.cell_face(style, row_index, col);
                let width = widths.get(col).copied().unwrap_or(72.0) - 2.0 * CELL_PAD;
                let spans = [crate::compose::Span::plain(text.clone())];
                let lines = wrap_spans(&spans, CELL_SIZE, width.max(10.0), face, face);
                row_lines = row_lines.max(lines.len());
                cells.push(lines);
            }
            let row_height = row_lines as f32 * CELL_LEADING + 2.0 * CELL_PAD;

            self.ensure_space(row_height);
            let top = self.cursor;

            // Backgrounds and grid
            let mut x = table_x;
            for (col, _) in row.iter().enumerate() {
                let width = widths.get(col).copied().unwrap_or(72.0);
                if let Some(background) = self.cell_background(style, row_index) {
                    self.fill_rect(x, top - row_height, width, row_height, background);
                }
                let (grid, grid_width) = match style {
                    TableStyle::Info => (BRAND_BLUE, 1.0),
                    TableStyle::Listing => (GREY, 0.5),
                };
                self.stroke_rect(x, top - row_height, width, row_height, grid, grid_width);
                x += width;
            }

            // Cell text
            let mut x = table_x;
            for (col, lines) in cells.iter().enumerate() {
                let width = widths.get(col).copied().unwrap_or(72.0);
                let face = self.cell_face(style, row_index, col);
                let color = self.cell_color(style, row_index);
                let mut baseline = top - CELL_PAD - CELL_SIZE;
                for line in lines {
                    let text: Vec<String> = line.iter().map(|w| w.text.clone()).collect();
                    self.text_run(
                        x + CELL_PAD,
                        baseline,
                        face,
                        CELL_SIZE,
                        color,
                        &text.join(" "),
                    );
                    baseline -= CELL_LEADING;
                }
                x += width;
            }

            self.cursor = top - row_height;
        }
    }

    fn cell_face(&self, style: TableStyle, row: usize, col: usize) -> FontFace {
        match style {
            // Label column in bold
            TableStyle::Info if col == 0 => FontFace::Bold,
            TableStyle::Info => FontFace::Regular,
            // Header row in bold
            TableStyle::Listing if row == 0 => FontFace::Bold,
            TableStyle::Listing => FontFace::Regular,
        }
    }

    fn cell_color(&self, style: TableStyle, row: usize) -> Color {
        match style {
            TableStyle::Listing if row == 0 => WHITE,
            _ => BLACK,
        }
    }

    fn cell_background(&self, style: TableStyle, row: usize) -> Option<Color> {
        match style {
            TableStyle::Info => Some(LIGHT_GREY),
            TableStyle::Listing if row == 0 => Some(BRAND_BLUE),
            TableStyle::Listing => None,
        }
    }

    /// Assemble the collected pages into a PDF document.
    fn finish(mut self) -> Result<Vec<u8>, RenderError> {
        // Flush the trailing page; an empty document still gets one page
        if self.dirty() || self.pages.is_empty() {
            self.pages.push(std::mem::take(&mut self.content));
        }

        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        // Shared base-14 font resources, WinAnsi encoded
        let mut font_dict = Dictionary::new();
        for face in [FontFace::Regular, FontFace::Bold, FontFace::Oblique] {
            let font_id = doc.add_object(Dictionary::from_iter(vec![
                ("Type", Object::Name(b"Font".to_vec())),
                ("Subtype", Object::Name(b"Type1".to_vec())),
                ("BaseFont", Object::Name(face.base_font().as_bytes().to_vec())),
                ("Encoding", Object::Name(b"WinAnsiEncoding".to_vec())),
            ]));
            font_dict.set(face.resource_name(), Object::Reference(font_id));
        }
        let resources_id = doc.add_object(Dictionary::from_iter(vec![(
            "Font",
            Object::Dictionary(font_dict),
        )]));

        let mut kids = Vec::with_capacity(self.pages.len());
        for content in &self.pages {
            let content_id =
                doc.add_object(Stream::new(Dictionary::new(), content.as_bytes().to_vec()));
            let page_id = doc.add_object(Dictionary::from_iter(vec![
                ("Type", Object::Name(b"Page".to_vec())),
                ("Parent", Object::Reference(pages_id)),
                ("Contents", Object::Reference(content_id)),
                ("Resources", Object::Reference(resources_id)),
                (
                    "MediaBox",
                    Object::Array(vec![
                        0.into(),
                        0.into(),
                        Object::Real(PAGE_WIDTH),
                        Object::Real(PAGE_HEIGHT),
                    ]),
                ),
            ]));
            kids.push(Object::Reference(page_id));
        }

        let page_count = kids.len();
        doc.objects.insert(
            pages_id,
            Object::Dictionary(Dictionary::from_iter(vec![
                ("Type", Object::Name(b"Pages".to_vec())),
                ("Kids", Object::Array(kids)),
                ("Count", Object::Integer(page_count as i64)),
            ])),
        );

        let catalog_id = doc.add_object(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Catalog".to_vec())),
            ("Pages", Object::Reference(pages_id)),
        ]));
        doc.trailer.set("Root", Object::Reference(catalog_id));
        doc.compress();

        let mut output = Vec::new();
        doc.save_to(&mut output)?;
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::{ParagraphStyle, RenderBlock, Span};

    fn page_count(bytes: &[u8]) -> usize {
        let doc = Document::load_mem(bytes).unwrap();
        doc.get_pages().len()
    }

    #[test]
    fn empty_document_has_one_page() {
        let bytes = render(&[]).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
        assert_eq!(page_count(&bytes), 1);
    }

    #[test]
    fn page_break_forces_a_new_page() {
        let blocks = vec![
            RenderBlock::paragraph(ParagraphStyle::Body, "first page"),
            RenderBlock::PageBreak,
            RenderBlock::paragraph(ParagraphStyle::Body, "second page"),
        ];
        let bytes = render(&blocks).unwrap();
        assert_eq!(page_count(&bytes), 2);
    }

    #[test]
    fn overflowing_content_breaks_automatically() {
        // Far more lines than fit on one A4 page at 16pt leading
        let long_body = vec!["line of body text"; 120].join("\n");
        let blocks = vec![RenderBlock::paragraph(ParagraphStyle::Body, long_body)];
        let bytes = render(&blocks).unwrap();
        assert!(page_count(&bytes) >= 2);
    }

    #[test]
    fn renders_all_block_kinds() {
        let blocks = vec![
            RenderBlock::heading(crate::compose::HeadingLevel::Title, "Title"),
            RenderBlock::paragraph(ParagraphStyle::Subtitle, "Subtitle"),
            RenderBlock::spacer(20.0),
            RenderBlock::Table {
                style: TableStyle::Info,
                widths: vec![144.0, 252.0],
                rows: vec![
                    vec!["Label".to_string(), "Value".to_string()],
                    vec!["Other".to_string(), "Thing with ö".to_string()],
                ],
            },
            RenderBlock::heading(crate::compose::HeadingLevel::Chapter, "Chapter 1: Waves"),
            RenderBlock::Paragraph {
                style: ParagraphStyle::Body,
                spans: vec![
                    Span::plain("plain and "),
                    Span::emphasized("highlighted"),
                    Span::plain(" text"),
                ],
            },
            RenderBlock::paragraph(ParagraphStyle::KeyTerm, "- superposition"),
            RenderBlock::paragraph(ParagraphStyle::Note, "Exam Note: appeared 3 times."),
        ];
        let bytes = render(&blocks).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
        assert_eq!(page_count(&bytes), 1);
    }

    #[test]
    fn escapes_literal_string_delimiters() {
        assert_eq!(escape_literal("psi(x,t)"), "psi\\(x,t\\)");
        assert_eq!(escape_literal("back\\slash"), "back\\\\slash");
        assert_eq!(escape_literal("Schrödinger"), "Schr\\366dinger");
    }

    #[test]
    fn table_rows_paginate_when_overflowing() {
        let rows: Vec<Vec<String>> = (0..80)
            .map(|i| vec![format!("Row {i}"), "value".to_string()])
            .collect();
        let blocks = vec![RenderBlock::Table {
            style: TableStyle::Listing,
            widths: vec![144.0, 144.0],
            rows,
        }];
        let bytes = render(&blocks).unwrap();
        assert!(page_count(&bytes) >= 2);
    }
}
