//! Core content types
//!
//! Textbook structure and exam-question records as supplied by the
//! content store. All of these are immutable inputs to a generation
//! request; nothing downstream mutates them.

use serde::{Deserialize, Serialize};

/// A textbook with its chapter/section hierarchy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Textbook {
    /// Book title
    pub title: String,

    /// Primary author
    pub author: String,

    /// ISBN (10 or 13)
    pub isbn: String,

    /// Edition (e.g., "3rd Edition"); absent editions render as "N/A"
    pub edition: Option<String>,

    /// Chapters in listed order
    pub chapters: Vec<Chapter>,
}

/// A chapter within a textbook
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chapter {
    /// Chapter number; unique within the book, not necessarily contiguous
    pub number: u32,

    /// Chapter title
    pub title: String,

    /// Sections in listed order
    pub sections: Vec<Section>,
}

/// A titled unit of textbook content
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    /// Section title; topic tags are matched against this
    pub title: String,

    /// Body text; may contain embedded newlines
    pub body: String,

    /// Key terms; occurrences in the body text get highlighted
    pub key_terms: Vec<String>,

    /// Page number in the source book
    pub page: u32,
}

/// An exam question record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    /// Unique identifier
    pub id: String,

    /// Question text
    pub text: String,

    /// Exam year
    pub year: u32,

    /// Exam label (e.g., "Final Exam", "Midterm")
    pub exam: String,

    /// Marks assigned to the question in its original exam
    pub weightage: u32,

    /// Count of historical appearances in past papers
    pub frequency: u32,

    /// Difficulty rating
    pub difficulty: Difficulty,

    /// Free-text topic tags, matched case-insensitively
    pub topics: Vec<String>,
}

/// Question difficulty rating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "Low"),
            Self::Medium => write!(f, "Medium"),
            Self::High => write!(f, "High"),
        }
    }
}
