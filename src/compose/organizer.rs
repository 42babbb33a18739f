//! Content organizer
//!
//! Runs the topic matcher over the question list in input order and groups
//! successful matches by chapter number. Chapters with zero matches do not
//! appear in the result at all. Questions that match nothing are collected
//! separately so callers can observe coverage gaps instead of losing them.

use std::collections::BTreeMap;

use crate::content::{Question, Textbook};

use super::matcher::{match_question, MatchEntry};

/// Questions grouped under the chapters they were assigned to
///
/// The map iterates in ascending chapter-number order; entries within a
/// chapter keep the order the questions were processed in.
pub struct OrganizedContent<'a> {
    pub chapters: BTreeMap<u32, Vec<MatchEntry<'a>>>,
    /// Questions whose topic tags matched no section title
    pub unmatched: Vec<&'a Question>,
}

impl<'a> OrganizedContent<'a> {
    /// Total number of matched entries across all chapters
    pub fn total_topics(&self) -> usize {
        self.chapters.values().map(Vec::len).sum()
    }
}

/// Organize questions into chapters based on topic/section-title matches.
pub fn organize<'a>(questions: &'a [Question], textbook: &'a Textbook) -> OrganizedContent<'a> {
    let mut chapters: BTreeMap<u32, Vec<MatchEntry<'a>>> = BTreeMap::new();
    let mut unmatched = Vec::new();

    for question in questions {
        match match_question(question, textbook) {
            Some(entry) => chapters.entry(entry.chapter.number).or_default().push(entry),
            None => unmatched.push(question),
        }
    }

    OrganizedContent { chapters, unmatched }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Chapter, Difficulty, Section};

    fn book() -> Textbook {
        Textbook {
            title: "Test Book".to_string(),
            author: "Author".to_string(),
            isbn: "isbn".to_string(),
            edition: None,
            chapters: vec![
                Chapter {
                    number: 1,
                    title: "Waves".to_string(),
                    sections: vec![Section {
                        title: "Quantum Superposition".to_string(),
                        body: "body".to_string(),
                        key_terms: vec!["superposition".to_string()],
                        page: 12,
                    }],
                },
                Chapter {
                    number: 4,
                    title: "Operators".to_string(),
                    sections: vec![Section {
                        title: "Hermitian Operators".to_string(),
                        body: "body".to_string(),
                        key_terms: vec![],
                        page: 80,
                    }],
                },
            ],
        }
    }

    fn question(id: &str, topics: &[&str]) -> Question {
        Question {
            id: id.to_string(),
            text: format!("question {id}"),
            year: 2023,
            exam: "Final Exam".to_string(),
            weightage: 10,
            frequency: 2,
            difficulty: Difficulty::Medium,
            topics: topics.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn single_match_scenario() {
        let book = book();
        let questions = vec![question("q1", &["Quantum Superposition"])];
        let organized = organize(&questions, &book);

        assert_eq!(organized.chapters.len(), 1);
        assert_eq!(organized.chapters[&1].len(), 1);
        assert_eq!(organized.total_topics(), 1);
        assert!(organized.unmatched.is_empty());
    }

    #[test]
    fn unmatched_question_is_excluded_but_reported() {
        let book = book();
        let questions = vec![question("q1", &["Nonexistent Topic"])];
        let organized = organize(&questions, &book);

        assert!(organized.chapters.is_empty());
        assert_eq!(organized.total_topics(), 0);
        assert_eq!(organized.unmatched.len(), 1);
        assert_eq!(organized.unmatched[0].id, "q1");
    }

    #[test]
    fn entries_keep_input_order_within_a_chapter() {
        let book = book();
        let questions = vec![
            question("q1", &["Superposition"]),
            question("q2", &["Quantum"]),
        ];
        let organized = organize(&questions, &book);

        let entries = &organized.chapters[&1];
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].question.id, "q1");
        assert_eq!(entries[1].question.id, "q2");
    }

    #[test]
    fn iteration_is_ascending_by_chapter_number() {
        let book = book();
        // Chapter 4 question listed before chapter 1 question
        let questions = vec![
            question("q1", &["Hermitian"]),
            question("q2", &["Superposition"]),
        ];
        let organized = organize(&questions, &book);

        let keys: Vec<u32> = organized.chapters.keys().copied().collect();
        assert_eq!(keys, vec![1, 4]);
    }

    #[test]
    fn keys_are_exactly_chapters_with_matches() {
        let book = book();
        let questions = vec![question("q1", &["Superposition"])];
        let organized = organize(&questions, &book);

        assert!(organized.chapters.contains_key(&1));
        assert!(!organized.chapters.contains_key(&4));
    }
}
