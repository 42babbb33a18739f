//! Topic matcher
//!
//! Assigns a question to the first textbook section whose title contains
//! one of the question's topic tags, scanning chapters then sections in
//! document order. Matching is case-insensitive plain substring
//! containment with no word-boundary check, so a tag that happens to sit
//! inside an unrelated word still matches. First match wins; a question
//! with several matching sections is assigned only to the earliest.

use crate::content::{Chapter, Question, Section, Textbook};

/// A question bound to the chapter/section it was assigned to
#[derive(Debug, Clone, Copy)]
pub struct MatchEntry<'a> {
    pub question: &'a Question,
    pub chapter: &'a Chapter,
    pub section: &'a Section,
}

/// Find the first (chapter, section) pair matching any of the question's
/// topic tags, or `None` if the question matches nothing.
pub fn match_question<'a>(
    question: &'a Question,
    textbook: &'a Textbook,
) -> Option<MatchEntry<'a>> {
    let topics: Vec<String> = question.topics.iter().map(|t| t.to_lowercase()).collect();
    if topics.is_empty() {
        return None;
    }

    for chapter in &textbook.chapters {
        for section in &chapter.sections {
            let title = section.title.to_lowercase();
            if topics.iter().any(|topic| title.contains(topic.as_str())) {
                return Some(MatchEntry {
                    question,
                    chapter,
                    section,
                });
            }
        }
    }

    None
}
