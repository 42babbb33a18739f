//! Answer-key composer
//!
//! Walks the question bank in input order and produces a comprehensive
//! answer key: each question with its exam metadata, priority tags for
//! repeated and high-weightage questions, and the matched textbook
//! section's body as the answer.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};

use crate::content::{Question, Textbook};

use super::blocks::{HeadingLevel, ParagraphStyle, RenderBlock, Span, TableStyle};
use super::matcher::match_question;

const INCH: f32 = 72.0;

/// A question is flagged "repeated" at this many historical appearances
pub const REPEAT_THRESHOLD: u32 = 3;

/// A question is flagged "high weightage" at this many marks
pub const HIGH_WEIGHTAGE_MARKS: u32 = 10;

/// Side record accumulated while composing an answer key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerKeySummary {
    pub total_questions: usize,
    /// Questions with frequency >= [`REPEAT_THRESHOLD`]
    pub repeated_questions: usize,
    /// Questions with weightage >= [`HIGH_WEIGHTAGE_MARKS`]
    pub high_weightage: usize,
    /// Distinct textbook titles cited; empty when citations are disabled
    pub sources_used: BTreeSet<String>,
}

/// Compose the answer-key block sequence.
pub fn compose_answer_key(
    subject_name: &str,
    textbook: &Textbook,
    questions: &[Question],
    include_citations: bool,
    generated_at: DateTime<Utc>,
) -> (Vec<RenderBlock>, AnswerKeySummary) {
    let mut blocks = Vec::new();
    let mut sources_used = BTreeSet::new();
    let mut repeated_questions = 0usize;
    let mut high_weightage = 0usize;
    let generated_on = generated_at.format("%B %d, %Y").to_string();

    // Cover page
    blocks.push(RenderBlock::spacer(1.5 * INCH));
    blocks.push(RenderBlock::heading(HeadingLevel::Title, subject_name));
    blocks.push(RenderBlock::paragraph(
        ParagraphStyle::Subtitle,
        "Comprehensive Answer Key",
    ));
    blocks.push(RenderBlock::spacer(0.3 * INCH));
    blocks.push(RenderBlock::Table {
        style: TableStyle::Info,
        widths: vec![2.0 * INCH, 3.5 * INCH],
        rows: vec![
            vec!["Source Material".to_string(), textbook.title.clone()],
            vec!["Author".to_string(), textbook.author.clone()],
            vec![
                "Edition".to_string(),
                textbook.edition.clone().unwrap_or_else(|| "N/A".to_string()),
            ],
            vec!["Generated".to_string(), generated_on.clone()],
            vec!["Questions Covered".to_string(), questions.len().to_string()],
        ],
    });
    blocks.push(RenderBlock::PageBreak);

    for (index, question) in questions.iter().enumerate() {
        let number = index + 1;
        let is_repeated = question.frequency >= REPEAT_THRESHOLD;
        let is_high_weightage = question.weightage >= HIGH_WEIGHTAGE_MARKS;
        if is_repeated {
            repeated_questions += 1;
        }
        if is_high_weightage {
            high_weightage += 1;
        }

        blocks.push(RenderBlock::heading(
            HeadingLevel::Topic,
            format!("Q{number}: {}", question.text),
        ));
        blocks.push(RenderBlock::paragraph(
            ParagraphStyle::Note,
            format!(
                "{} {} | Difficulty: {} | {} marks | Appeared {} times",
                question.exam, question.year, question.difficulty, question.weightage,
                question.frequency
            ),
        ));

        let mut tags = Vec::new();
        if is_repeated {
            tags.push("Repeated Question");
        }
        if is_high_weightage {
            tags.push("High Weightage");
        }
        if !tags.is_empty() {
            blocks.push(RenderBlock::Paragraph {
                style: ParagraphStyle::KeyTerm,
                spans: vec![Span::emphasized(tags.join(" | "))],
            });
        }

        match match_question(question, textbook) {
            Some(entry) => {
                blocks.push(RenderBlock::Paragraph {
                    style: ParagraphStyle::Body,
                    spans: vec![
                        Span::emphasized("Answer: "),
                        Span::plain(entry.section.body.clone()),
                    ],
                });
                if include_citations {
                    blocks.push(RenderBlock::Paragraph {
                        style: ParagraphStyle::Note,
                        spans: vec![
                            Span::emphasized("Source: "),
                            Span::plain(format!(
                                "{}, Chapter {}, Page {}",
                                textbook.title, entry.chapter.number, entry.section.page
                            )),
                        ],
                    });
                    sources_used.insert(textbook.title.clone());
                }
            }
            None => {
                blocks.push(RenderBlock::paragraph(
                    ParagraphStyle::Body,
                    "Answer not available in source material.",
                ));
            }
        }

        blocks.push(RenderBlock::spacer(0.25 * INCH));
    }

    // Closing page
    blocks.push(RenderBlock::PageBreak);
    blocks.push(RenderBlock::spacer(1.0 * INCH));
    blocks.push(RenderBlock::heading(HeadingLevel::Title, "End of Answer Key"));
    blocks.push(RenderBlock::spacer(0.5 * INCH));
    blocks.push(RenderBlock::paragraph(
        ParagraphStyle::Note,
        format!("Generated by AcadIntel AI - Exam-Focused Study Material - {generated_on}"),
    ));

    let summary = AnswerKeySummary {
        total_questions: questions.len(),
        repeated_questions,
        high_weightage,
        sources_used,
    };

    (blocks, summary)
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
            edition: Some("2nd Edition".to_string()),
            chapters: vec![Chapter {
                number: 1,
                title: "Waves".to_string(),
                sections: vec![Section {
                    title: "Quantum Superposition".to_string(),
                    body: "answer body".to_string(),
                    key_terms: vec![],
                    page: 12,
                }],
            }],
        }
    }

    fn question(id: &str, topic: &str, weightage: u32, frequency: u32) -> Question {
        Question {
            id: id.to_string(),
            text: format!("question {id}"),
            year: 2023,
            exam: "Final Exam".to_string(),
            weightage,
            frequency,
            difficulty: Difficulty::Medium,
            topics: vec![topic.to_string()],
        }
    }

    fn timestamp() -> DateTime<Utc> {
        "2024-03-01T12:00:00Z".parse().unwrap()
    }

    #[test]
    fn counts_repeated_and_high_weightage() {
        let book = book();
        let questions = vec![
            question("q1", "Superposition", 15, 5), // both
            question("q2", "Superposition", 5, 2),  // neither
            question("q3", "Superposition", 10, 1), // high weightage only
        ];
        let (_, summary) = compose_answer_key("Physics", &book, &questions, true, timestamp());
        assert_eq!(summary.total_questions, 3);
        assert_eq!(summary.repeated_questions, 1);
        assert_eq!(summary.high_weightage, 2);
        assert!(summary.sources_used.contains("Test Book"));
    }

    #[test]
    fn unmatched_question_gets_fallback_answer() {
        let book = book();
        let questions = vec![question("q1", "Nonexistent Topic", 5, 1)];
        let (blocks, summary) =
            compose_answer_key("Physics", &book, &questions, true, timestamp());

        assert!(blocks.iter().any(|b| matches!(
            b,
            RenderBlock::Paragraph { spans, .. }
                if spans.iter().any(|s| s.text.contains("not available"))
        )));
        // Nothing was cited
        assert!(summary.sources_used.is_empty());
    }

    #[test]
    fn question_numbering_follows_input_order() {
        let book = book();
        let questions = vec![
            question("q1", "Superposition", 5, 1),
            question("q2", "Superposition", 5, 1),
        ];
        let (blocks, _) = compose_answer_key("Physics", &book, &questions, false, timestamp());

        let headings: Vec<&str> = blocks
            .iter()
            .filter_map(|b| match b {
                RenderBlock::Heading {
                    level: HeadingLevel::Topic,
                    text,
                } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(headings, vec!["Q1: question q1", "Q2: question q2"]);
    }

    #[test]
    fn citations_disabled_leaves_sources_empty() {
        let book = book();
        let questions = vec![question("q1", "Superposition", 15, 5)];
        let (_, summary) = compose_answer_key("Physics", &book, &questions, false, timestamp());
        assert!(summary.sources_used.is_empty());
    }
}
