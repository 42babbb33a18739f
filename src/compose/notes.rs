//! Study-notes composer
//!
//! Turns organized content into the flat block sequence of a study-notes
//! booklet: cover, table of contents, one section per chapter, closing
//! page. Layout is the renderer's job; this module only decides what the
//! document says and in what order.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};

use crate::content::Textbook;

use super::blocks::{HeadingLevel, ParagraphStyle, RenderBlock, Span, TableStyle};
use super::highlight::{emphasize_terms, plain_spans};
use super::organizer::OrganizedContent;

const INCH: f32 = 72.0;

/// Generation settings shared by both booklet kinds
#[derive(Debug, Clone)]
pub struct ComposeSettings {
    /// Emit source citations and record sources used
    pub include_citations: bool,
    /// Wrap key terms in the body text with emphasis
    pub smart_highlights: bool,
    /// Reserved; accepted but unused by layout logic
    pub dark_export: bool,
}

impl Default for ComposeSettings {
    fn default() -> Self {
        Self {
            include_citations: true,
            smart_highlights: true,
            dark_export: false,
        }
    }
}

/// Side record accumulated while composing notes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotesSummary {
    /// Chapters that received at least one topic
    pub total_chapters: usize,
    /// Matched topics across the whole document
    pub total_topics: usize,
    /// Distinct textbook titles cited; empty when citations are disabled
    pub sources_used: BTreeSet<String>,
}

/// Compose the study-notes block sequence.
///
/// `generated_at` comes from the injected clock so identical inputs
/// produce structurally identical output.
pub fn compose_notes(
    subject_name: &str,
    textbook: &Textbook,
    organized: &OrganizedContent<'_>,
    settings: &ComposeSettings,
    generated_at: DateTime<Utc>,
) -> (Vec<RenderBlock>, NotesSummary) {
    let mut blocks = Vec::new();
    let mut sources_used = BTreeSet::new();
    let generated_on = generated_at.format("%B %d, %Y").to_string();

    // Cover page
    blocks.push(RenderBlock::spacer(1.5 * INCH));
    blocks.push(RenderBlock::heading(HeadingLevel::Title, subject_name));
    blocks.push(RenderBlock::paragraph(
        ParagraphStyle::Subtitle,
        "Exam-Ready Study Notes",
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
            vec![
                "Topics Covered".to_string(),
                organized.chapters.len().to_string(),
            ],
        ],
    });
    blocks.push(RenderBlock::spacer(0.5 * INCH));
    blocks.push(RenderBlock::paragraph(
        ParagraphStyle::Subtitle,
        "Structured for exam preparation - Source-verified content - AI-enhanced organization",
    ));
    blocks.push(RenderBlock::PageBreak);

    // Table of contents
    blocks.push(RenderBlock::heading(HeadingLevel::Chapter, "Table of Contents"));
    blocks.push(RenderBlock::spacer(0.2 * INCH));
    let mut toc_rows = vec![vec![
        "Chapter".to_string(),
        "Title".to_string(),
        "Topics".to_string(),
    ]];
    for (chapter_number, entries) in &organized.chapters {
        let chapter = entries[0].chapter;
        toc_rows.push(vec![
            format!("Chapter {chapter_number}"),
            chapter.title.clone(),
            format!("{} topics", entries.len()),
        ]);
    }
    blocks.push(RenderBlock::Table {
        style: TableStyle::Listing,
        widths: vec![1.2 * INCH, 3.5 * INCH, 1.0 * INCH],
        rows: toc_rows,
    });
    blocks.push(RenderBlock::PageBreak);

    // Chapters; the topic counter runs across the whole document
    let mut total_topics = 0usize;

    for (chapter_number, entries) in &organized.chapters {
        let chapter = entries[0].chapter;

        blocks.push(RenderBlock::spacer(0.3 * INCH));
        blocks.push(RenderBlock::heading(
            HeadingLevel::Chapter,
            format!("Chapter {chapter_number}: {}", chapter.title),
        ));
        blocks.push(RenderBlock::spacer(0.3 * INCH));

        for entry in entries {
            total_topics += 1;
            let section = entry.section;
            let question = entry.question;

            blocks.push(RenderBlock::heading(
                HeadingLevel::Topic,
                format!("Topic {total_topics}: {}", section.title),
            ));

            let body_spans = if settings.smart_highlights && !section.key_terms.is_empty() {
                emphasize_terms(&section.body, &section.key_terms)
            } else {
                plain_spans(&section.body)
            };
            blocks.push(RenderBlock::Paragraph {
                style: ParagraphStyle::Body,
                spans: body_spans,
            });

            if !section.key_terms.is_empty() {
                blocks.push(RenderBlock::spacer(0.1 * INCH));
                blocks.push(RenderBlock::Paragraph {
                    style: ParagraphStyle::Body,
                    spans: vec![Span::emphasized("Key Terms:")],
                });
                for term in &section.key_terms {
                    blocks.push(RenderBlock::paragraph(
                        ParagraphStyle::KeyTerm,
                        format!("- {term}"),
                    ));
                }
            }

            blocks.push(RenderBlock::spacer(0.1 * INCH));
            blocks.push(RenderBlock::paragraph(
                ParagraphStyle::Note,
                format!(
                    "Exam Note: This topic appeared {} times in past papers with {} marks weightage.",
                    question.frequency, question.weightage
                ),
            ));

            if settings.include_citations {
                blocks.push(RenderBlock::Paragraph {
                    style: ParagraphStyle::Note,
                    spans: vec![
                        Span::emphasized("Source: "),
                        Span::plain(format!(
                            "{}, Chapter {chapter_number}, Page {}",
                            textbook.title, section.page
                        )),
                    ],
                });
                sources_used.insert(textbook.title.clone());
            }

            blocks.push(RenderBlock::spacer(0.2 * INCH));
        }

        // Chapter summary
        blocks.push(RenderBlock::spacer(0.2 * INCH));
        blocks.push(RenderBlock::Paragraph {
            style: ParagraphStyle::Body,
            spans: vec![
                Span::emphasized(format!("Chapter {chapter_number} Summary: ")),
                Span::plain(format!(
                    "This chapter covered {} important exam topics. Focus on understanding \
                     the key concepts and practice related problems.",
                    entries.len()
                )),
            ],
        });
        blocks.push(RenderBlock::PageBreak);
    }

    // Closing page
    blocks.push(RenderBlock::spacer(1.0 * INCH));
    blocks.push(RenderBlock::heading(HeadingLevel::Title, "End of Study Notes"));
    blocks.push(RenderBlock::spacer(0.3 * INCH));
    blocks.push(RenderBlock::paragraph(
        ParagraphStyle::Body,
        "- Review all key terms highlighted in blue\n\
         - Practice questions from each chapter\n\
         - Focus on high-frequency topics\n\
         - Refer to source material for deeper understanding",
    ));
    blocks.push(RenderBlock::spacer(0.5 * INCH));
    blocks.push(RenderBlock::paragraph(
        ParagraphStyle::Note,
        format!("Generated by AcadIntel AI - Exam-Focused Study Material - {generated_on}"),
    ));

    let summary = NotesSummary {
        total_chapters: organized.chapters.len(),
        total_topics,
        sources_used,
    };

    (blocks, summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::organizer::organize;
    use crate::content::{Chapter, Difficulty, Question, Section};

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
                        body: "superposition appears here, and superposition again".to_string(),
                        key_terms: vec!["superposition".to_string()],
                        page: 12,
                    }],
                },
                Chapter {
                    number: 2,
                    title: "Equations".to_string(),
                    sections: vec![Section {
                        title: "Schrödinger Equation".to_string(),
                        body: "equation body".to_string(),
                        key_terms: vec![],
                        page: 45,
                    }],
                },
            ],
        }
    }

    fn question(id: &str, topic: &str) -> Question {
        Question {
            id: id.to_string(),
            text: format!("question {id}"),
            year: 2023,
            exam: "Final Exam".to_string(),
            weightage: 10,
            frequency: 3,
            difficulty: Difficulty::Medium,
            topics: vec![topic.to_string()],
        }
    }

    fn timestamp() -> DateTime<Utc> {
        "2024-03-01T12:00:00Z".parse().unwrap()
    }

    fn topic_headings(blocks: &[RenderBlock]) -> Vec<String> {
        blocks
            .iter()
            .filter_map(|b| match b {
                RenderBlock::Heading {
                    level: HeadingLevel::Topic,
                    text,
                } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn topic_counter_runs_across_chapters() {
        let book = book();
        let questions = vec![
            question("q1", "Superposition"),
            question("q2", "Superposition"),
            question("q3", "Schrödinger"),
        ];
        let organized = organize(&questions, &book);
        let (blocks, summary) =
            compose_notes("Physics", &book, &organized, &ComposeSettings::default(), timestamp());

        let headings = topic_headings(&blocks);
        assert_eq!(headings.len(), 3);
        assert!(headings[0].starts_with("Topic 1:"));
        assert!(headings[1].starts_with("Topic 2:"));
        // Counter does not reset at the chapter 2 boundary
        assert!(headings[2].starts_with("Topic 3:"));
        assert_eq!(summary.total_topics, 3);
        assert_eq!(summary.total_chapters, 2);
    }

    #[test]
    fn sources_empty_when_citations_disabled() {
        let book = book();
        let questions = vec![question("q1", "Superposition")];
        let organized = organize(&questions, &book);

        let settings = ComposeSettings {
            include_citations: false,
            ..Default::default()
        };
        let (_, summary) = compose_notes("Physics", &book, &organized, &settings, timestamp());
        assert!(summary.sources_used.is_empty());

        let (_, summary) = compose_notes(
            "Physics",
            &book,
            &organized,
            &ComposeSettings::default(),
            timestamp(),
        );
        assert_eq!(
            summary.sources_used.iter().collect::<Vec<_>>(),
            vec!["Test Book"]
        );
    }

    #[test]
    fn highlights_every_occurrence_when_enabled() {
        let book = book();
        let questions = vec![question("q1", "Superposition")];
        let organized = organize(&questions, &book);
        let (blocks, _) = compose_notes(
            "Physics",
            &book,
            &organized,
            &ComposeSettings::default(),
            timestamp(),
        );

        let emphasized: Vec<&str> = blocks
            .iter()
            .filter_map(|b| match b {
                RenderBlock::Paragraph {
                    style: ParagraphStyle::Body,
                    spans,
                } => Some(spans),
                _ => None,
            })
            .flatten()
            .filter(|s| s.emphasis && s.text == "superposition")
            .map(|s| s.text.as_str())
            .collect();
        assert_eq!(emphasized.len(), 2);
    }

    #[test]
    fn missing_edition_renders_fallback() {
        let book = book();
        let questions = vec![question("q1", "Superposition")];
        let organized = organize(&questions, &book);
        let (blocks, _) = compose_notes(
            "Physics",
            &book,
            &organized,
            &ComposeSettings::default(),
            timestamp(),
        );

        let info_rows = blocks.iter().find_map(|b| match b {
            RenderBlock::Table {
                style: TableStyle::Info,
                rows,
                ..
            } => Some(rows),
            _ => None,
        });
        let rows = info_rows.unwrap();
        assert!(rows.iter().any(|r| r[0] == "Edition" && r[1] == "N/A"));
    }

    #[test]
    fn identical_inputs_compose_identical_blocks() {
        let book = book();
        let questions = vec![
            question("q1", "Superposition"),
            question("q2", "Schrödinger"),
        ];
        let organized = organize(&questions, &book);
        let settings = ComposeSettings::default();

        let (first, _) = compose_notes("Physics", &book, &organized, &settings, timestamp());
        let (second, _) = compose_notes("Physics", &book, &organized, &settings, timestamp());
        assert_eq!(first, second);
    }

    #[test]
    fn chapters_close_with_page_breaks() {
        let book = book();
        let questions = vec![
            question("q1", "Superposition"),
            question("q2", "Schrödinger"),
        ];
        let organized = organize(&questions, &book);
        let (blocks, _) = compose_notes(
            "Physics",
            &book,
            &organized,
            &ComposeSettings::default(),
            timestamp(),
        );

        // Cover, TOC, and one per chapter
        let breaks = blocks.iter().filter(|b| **b == RenderBlock::PageBreak).count();
        assert_eq!(breaks, 4);
    }
}
