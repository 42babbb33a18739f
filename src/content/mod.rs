//! Content store
//!
//! Canned textbook and question data keyed by subject, plus the types the
//! rest of the pipeline consumes.

mod demo;
mod store;
mod types;

pub use store::{ContentStore, SubjectKey};
pub use types::{Chapter, Difficulty, Question, Section, Textbook};
