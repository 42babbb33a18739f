//! Renderer-agnostic document blocks
//!
//! The composers emit a flat ordered sequence of these; the PDF writer is
//! the only consumer. Blocks are produced once and never mutated, and they
//! compare structurally so identical inputs can be asserted to yield
//! identical documents.

/// A single unit of document content
#[derive(Debug, Clone, PartialEq)]
pub enum RenderBlock {
    /// A heading line
    Heading { level: HeadingLevel, text: String },

    /// Flowing text made of styled spans
    Paragraph {
        style: ParagraphStyle,
        spans: Vec<Span>,
    },

    /// Fixed vertical gap, in points
    Spacer { points: f32 },

    /// Forced page break
    PageBreak,

    /// A simple grid of text cells
    Table {
        style: TableStyle,
        /// Column widths in points
        widths: Vec<f32>,
        rows: Vec<Vec<String>>,
    },
}

/// Heading prominence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingLevel {
    /// Document title (cover / closing page), centered
    Title,
    /// Chapter heading with a banner background
    Chapter,
    /// Numbered topic heading
    Topic,
}

/// Paragraph presentation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParagraphStyle {
    /// Main content text
    Body,
    /// Centered italic subtitle under a title
    Subtitle,
    /// Indented bold key-term bullet
    KeyTerm,
    /// Small italic source/exam note
    Note,
}

/// A run of text with an optional emphasis flag
///
/// Emphasis renders bold in the brand color; how that looks is entirely
/// the renderer's business.
#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub text: String,
    pub emphasis: bool,
}

impl Span {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            emphasis: false,
        }
    }

    pub fn emphasized(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            emphasis: true,
        }
    }
}

/// Table presentation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableStyle {
    /// Cover metadata box: shaded background, bold label column, no header
    Info,
    /// Listing with a colored header row (table of contents)
    Listing,
}

impl RenderBlock {
    /// Paragraph from a single unstyled string
    pub fn paragraph(style: ParagraphStyle, text: impl Into<String>) -> Self {
        RenderBlock::Paragraph {
            style,
            spans: vec![Span::plain(text)],
        }
    }

    pub fn heading(level: HeadingLevel, text: impl Into<String>) -> Self {
        RenderBlock::Heading {
            level,
            text: text.into(),
        }
    }

    pub fn spacer(points: f32) -> Self {
        RenderBlock::Spacer { points }
    }
}
