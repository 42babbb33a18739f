//! Font metrics and text measurement
//!
//! The writer uses the base-14 Helvetica faces, so widths come from the
//! standard AFM tables (ASCII range; everything else falls back to an
//! average letter width). Text is emitted in WinAnsi encoding.

use crate::compose::Span;

/// Base-14 font face used by the writer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontFace {
    Regular,
    Bold,
    Oblique,
}

impl FontFace {
    /// PDF BaseFont name
    pub fn base_font(&self) -> &'static str {
        match self {
            Self::Regular => "Helvetica",
            Self::Bold => "Helvetica-Bold",
            Self::Oblique => "Helvetica-Oblique",
        }
    }

    /// Resource name inside the page's font dictionary
    pub fn resource_name(&self) -> &'static str {
        match self {
            Self::Regular => "F1",
            Self::Bold => "F2",
            Self::Oblique => "F3",
        }
    }
}

/// Helvetica AFM widths for characters 0x20..=0x7E, in 1/1000 em
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // 0x20-0x2F
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, // 0x30-0x3F
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, // 0x40-0x4F
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, // 0x50-0x5F
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // 0x60-0x6F
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, // 0x70-0x7E
];

/// Helvetica-Bold AFM widths for characters 0x20..=0x7E, in 1/1000 em
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278, // 0x20-0x2F
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611, // 0x30-0x3F
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778, // 0x40-0x4F
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556, // 0x50-0x5F
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611, // 0x60-0x6F
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584, // 0x70-0x7E
];

/// Fallback width for characters outside the table (accented letters etc.)
const DEFAULT_WIDTH: u16 = 556;

fn char_width_milli(c: char, face: FontFace) -> u16 {
    let table = match face {
        FontFace::Bold => &HELVETICA_BOLD_WIDTHS,
        // Oblique shares the regular metrics
        FontFace::Regular | FontFace::Oblique => &HELVETICA_WIDTHS,
    };
    let code = c as u32;
    if (0x20..=0x7E).contains(&code) {
        table[(code - 0x20) as usize]
    } else {
        DEFAULT_WIDTH
    }
}

/// Width of a string at the given size, in points
pub fn string_width(text: &str, face: FontFace, size: f32) -> f32 {
    let milli: u32 = text.chars().map(|c| u32::from(char_width_milli(c, face))).sum();
    milli as f32 * size / 1000.0
}

/// Encode text as WinAnsi bytes for a PDF literal string.
///
/// Latin-1 characters map directly; a handful of common punctuation marks
/// get their WinAnsi slots; anything else becomes '?'.
pub fn winansi_bytes(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| {
            let code = c as u32;
            match c {
                '\u{2018}' => 0x91, // left single quote
                '\u{2019}' => 0x92, // right single quote
                '\u{201C}' => 0x93, // left double quote
                '\u{201D}' => 0x94, // right double quote
                '\u{2013}' => 0x96, // en dash
                '\u{2014}' => 0x97, // em dash
                '\u{2022}' => 0x95, // bullet
                _ if code <= 0xFF => code as u8,
                _ => b'?',
            }
        })
        .collect()
}

/// A word carrying its emphasis flag, as produced by the line breaker
#[derive(Debug, Clone, PartialEq)]
pub struct Word {
    pub text: String,
    pub emphasis: bool,
    /// Continues the previous word with no space between them; set when an
    /// emphasis boundary falls mid-token ("collapse" + "s")
    pub joined: bool,
}

/// A wrapped line; empty means a blank source line (paragraph gap)
pub type Line = Vec<Word>;

/// Break spans into lines that fit `max_width` points.
///
/// Embedded newlines force breaks; consecutive whitespace collapses to a
/// single space. Emphasized words are measured with `emphasized_face`,
/// plain words with `regular_face`.
pub fn wrap_spans(
    spans: &[Span],
    size: f32,
    max_width: f32,
    regular_face: FontFace,
    emphasized_face: FontFace,
) -> Vec<Line> {
    let space_width = string_width(" ", regular_face, size);

    // Tokenize: words tagged with emphasis, plus forced breaks. A span
    // boundary with no whitespace on either side splits one source token
    // in two; the second half is marked joined so no space is reinserted.
    enum Token {
        Word(Word),
        Break,
    }
    let mut tokens = Vec::new();
    let mut glue_next = false;
    for span in spans {
        let mut first_segment = true;
        for segment in span.text.split('\n') {
            if !first_segment {
                tokens.push(Token::Break);
                glue_next = false;
            }
            first_segment = false;
            let leading_ws = segment.starts_with(char::is_whitespace);
            let mut first_word = true;
            for word in segment.split_whitespace() {
                tokens.push(Token::Word(Word {
                    text: word.to_string(),
                    emphasis: span.emphasis,
                    joined: first_word && !leading_ws && glue_next,
                }));
                first_word = false;
            }
            if !segment.is_empty() {
                glue_next = !segment.ends_with(char::is_whitespace);
            }
        }
    }

    let mut lines: Vec<Line> = Vec::new();
    let mut current: Line = Vec::new();
    let mut current_width: f32 = 0.0;

    for token in tokens {
        match token {
            Token::Break => {
                lines.push(std::mem::take(&mut current));
                current_width = 0.0;
            }
            Token::Word(word) => {
                let face = if word.emphasis { emphasized_face } else { regular_face };
                let word_width = string_width(&word.text, face, size);
                let needed = if current.is_empty() || word.joined {
                    word_width
                } else {
                    space_width + word_width
                };
                // A joined word never starts a line; it would split its
                // source token across a line break
                if !current.is_empty() && !word.joined && current_width + needed > max_width {
                    lines.push(std::mem::take(&mut current));
                    current_width = word_width;
                } else {
                    current_width += needed;
                }
                current.push(word);
            }
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }

    lines
}

/// Measured width of a wrapped line, in points
pub fn line_width(line: &Line, size: f32, regular_face: FontFace, emphasized_face: FontFace) -> f32 {
    let space_width = string_width(" ", regular_face, size);
    let mut width = 0.0;
    for (i, word) in line.iter().enumerate() {
        if i > 0 && !word.joined {
            width += space_width;
        }
        let face = if word.emphasis { emphasized_face } else { regular_face };
        width += string_width(&word.text, face, size);
    }
    width
}
