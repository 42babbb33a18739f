//! PDF rendering
//!
//! Consumes the composer's block sequence and produces a paginated PDF.
//! Page geometry, fonts, and colors live here; the composers never see
//! them.

mod metrics;
mod writer;

pub use writer::render;

/// Errors from PDF assembly
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("failed to serialize PDF: {0}")]
    Pdf(#[from] lopdf::Error),

    #[error("failed to write PDF: {0}")]
    Io(#[from] std::io::Error),
}
