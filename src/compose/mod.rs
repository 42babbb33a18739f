//! Document composition
//!
//! The core pipeline: match questions to textbook sections, organize them
//! by chapter, and compose a renderer-agnostic block sequence for either
//! booklet kind. Data flows one direction and nothing here mutates its
//! inputs.

mod answer_key;
mod blocks;
mod highlight;
mod matcher;
mod notes;
mod organizer;

pub use answer_key::{
    compose_answer_key, AnswerKeySummary, HIGH_WEIGHTAGE_MARKS, REPEAT_THRESHOLD,
};
pub use blocks::{HeadingLevel, ParagraphStyle, RenderBlock, Span, TableStyle};
pub use matcher::{match_question, MatchEntry};
pub use notes::{compose_notes, ComposeSettings, NotesSummary};
pub use organizer::{organize, OrganizedContent};
