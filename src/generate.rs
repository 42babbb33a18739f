//! Generation orchestration
//!
//! One call per request: resolve the subject, pull the dataset, organize,
//! compose, render, and write the PDF to the output directory. Everything
//! is built fresh per call and discarded afterwards; only the output file
//! survives.

use std::path::{Path, PathBuf};
use std::time::Instant;

use serde::Serialize;

use crate::clock::Clock;
use crate::compose::{
    compose_answer_key, compose_notes, organize, ComposeSettings,
};
use crate::content::{ContentStore, SubjectKey};
use crate::render::{render, RenderError};

/// Errors terminating a generation request
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("render failed: {0}")]
    Render(#[from] RenderError),

    #[error("failed to write output file: {0}")]
    Io(#[from] std::io::Error),
}

/// Where the finished booklet landed
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedFile {
    pub file_path: PathBuf,
    pub filename: String,
}

/// Caller-facing summary for a study-notes booklet
#[derive(Debug, Clone, Serialize)]
pub struct NotesReport {
    pub total_chapters: usize,
    pub total_topics: usize,
    /// Sentinel: the writer does not expose a count before finalizing
    pub total_pages: &'static str,
    pub sources_used: Vec<String>,
    /// Ids of questions whose topics matched no section
    pub unmatched_questions: Vec<String>,
    /// Wall-clock seconds for the whole call, rounded to 2 decimals
    pub generation_time: f64,
}

/// Caller-facing summary for an answer key
#[derive(Debug, Clone, Serialize)]
pub struct AnswerKeyReport {
    pub total_questions: usize,
    pub repeated_questions: usize,
    pub high_weightage: usize,
    pub total_pages: &'static str,
    pub sources_used: Vec<String>,
    pub generation_time: f64,
}

/// Generate a study-notes booklet for a subject.
pub fn generate_notes(
    subject_name: &str,
    store: &ContentStore,
    clock: &dyn Clock,
    output_dir: &Path,
    settings: &ComposeSettings,
) -> Result<(GeneratedFile, NotesReport), GenerateError> {
    let started = Instant::now();

    let key = SubjectKey::resolve(subject_name);
    let textbook = store.textbook(key);
    let questions = store.questions(key);

    let organized = organize(questions, textbook);
    let (blocks, summary) =
        compose_notes(subject_name, textbook, &organized, settings, clock.now());
    let bytes = render(&blocks)?;

    let file = write_booklet(subject_name, "StudyNotes", &bytes, clock, output_dir)?;
    tracing::info!(
        subject = subject_name,
        chapters = summary.total_chapters,
        topics = summary.total_topics,
        file = %file.filename,
        "generated study notes"
    );

    let report = NotesReport {
        total_chapters: summary.total_chapters,
        total_topics: summary.total_topics,
        total_pages: "N/A",
        sources_used: summary.sources_used.into_iter().collect(),
        unmatched_questions: organized.unmatched.iter().map(|q| q.id.clone()).collect(),
        generation_time: round_seconds(started.elapsed().as_secs_f64()),
    };

    Ok((file, report))
}

/// Generate an answer key for a subject.
pub fn generate_answer_key(
    subject_name: &str,
    store: &ContentStore,
    clock: &dyn Clock,
    output_dir: &Path,
    settings: &ComposeSettings,
) -> Result<(GeneratedFile, AnswerKeyReport), GenerateError> {
    let started = Instant::now();

    let key = SubjectKey::resolve(subject_name);
    let textbook = store.textbook(key);
    let questions = store.questions(key);

    let (blocks, summary) = compose_answer_key(
        subject_name,
        textbook,
        questions,
        settings.include_citations,
        clock.now(),
    );
    let bytes = render(&blocks)?;

    let file = write_booklet(subject_name, "AnswerKey", &bytes, clock, output_dir)?;
    tracing::info!(
        subject = subject_name,
        questions = summary.total_questions,
        file = %file.filename,
        "generated answer key"
    );

    let report = AnswerKeyReport {
        total_questions: summary.total_questions,
        repeated_questions: summary.repeated_questions,
        high_weightage: summary.high_weightage,
        total_pages: "N/A",
        sources_used: summary.sources_used.into_iter().collect(),
        generation_time: round_seconds(started.elapsed().as_secs_f64()),
    };

    Ok((file, report))
}

fn write_booklet(
    subject_name: &str,
    kind: &str,
    bytes: &[u8],
    clock: &dyn Clock,
    output_dir: &Path,
) -> Result<GeneratedFile, GenerateError> {
    // Timestamp plus a request-scoped nonce: two requests for the same
    // subject in the same second still get distinct names.
    let stamp = clock.now().format("%Y%m%d_%H%M%S");
    let filename = format!(
        "AcadIntel_{kind}_{}_{stamp}_{}.pdf",
        sanitize_subject(subject_name),
        clock.nonce()
    );

    std::fs::create_dir_all(output_dir)?;
    let file_path = output_dir.join(&filename);
    std::fs::write(&file_path, bytes)?;

    Ok(GeneratedFile { file_path, filename })
}

/// Reduce a subject name to a filename-safe token
fn sanitize_subject(subject_name: &str) -> String {
    let cleaned: String = subject_name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    if cleaned.is_empty() {
        "Subject".to_string()
    } else {
        cleaned
    }
}

fn round_seconds(seconds: f64) -> f64 {
    (seconds * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;

    fn fixed_clock() -> FixedClock {
        FixedClock {
            timestamp: "2024-03-01T12:00:00Z".parse().unwrap(),
            nonce: "deadbeef".to_string(),
        }
    }

    #[test]
    fn writes_notes_pdf_with_expected_name() {
        let dir = tempfile::tempdir().unwrap();
        let store = ContentStore::demo();
        let (file, report) = generate_notes(
            "Quantum Physics I",
            &store,
            &fixed_clock(),
            dir.path(),
            &ComposeSettings::default(),
        )
        .unwrap();

        assert_eq!(
            file.filename,
            "AcadIntel_StudyNotes_Quantum_Physics_I_20240301_120000_deadbeef.pdf"
        );
        let bytes = std::fs::read(&file.file_path).unwrap();
        assert!(bytes.starts_with(b"%PDF"));

        // qp5's topics match no section title; everything else lands
        assert_eq!(report.total_chapters, 2);
        assert_eq!(report.total_topics, 5);
        assert_eq!(report.total_pages, "N/A");
        assert_eq!(report.sources_used, vec!["Introduction to Quantum Mechanics"]);
        assert_eq!(report.unmatched_questions, vec!["qp5"]);
        assert!(report.generation_time >= 0.0);
    }

    #[test]
    fn unknown_subject_silently_uses_default_dataset() {
        let dir = tempfile::tempdir().unwrap();
        let store = ContentStore::demo();
        let (_, report) = generate_notes(
            "Underwater Basket Weaving",
            &store,
            &fixed_clock(),
            dir.path(),
            &ComposeSettings::default(),
        )
        .unwrap();

        // Falls back to the quantum dataset rather than erroring
        assert_eq!(report.sources_used, vec!["Introduction to Quantum Mechanics"]);
    }

    #[test]
    fn answer_key_report_counts_priorities() {
        let dir = tempfile::tempdir().unwrap();
        let store = ContentStore::demo();
        let (file, report) = generate_answer_key(
            "Machine Learning",
            &store,
            &fixed_clock(),
            dir.path(),
            &ComposeSettings::default(),
        )
        .unwrap();

        assert!(file.filename.starts_with("AcadIntel_AnswerKey_Machine_Learning_"));
        assert_eq!(report.total_questions, 4);
        // ml1 (f=4), ml2 (f=5), ml3 (f=3), ml4 (f=5) are all repeated
        assert_eq!(report.repeated_questions, 4);
        // All four ML questions carry >= 10 marks
        assert_eq!(report.high_weightage, 4);
    }

    #[test]
    fn nonces_keep_same_second_filenames_distinct() {
        let dir = tempfile::tempdir().unwrap();
        let store = ContentStore::demo();
        let clock = crate::clock::SystemClock;
        let settings = ComposeSettings::default();

        let (a, _) =
            generate_notes("Physics", &store, &clock, dir.path(), &settings).unwrap();
        let (b, _) =
            generate_notes("Physics", &store, &clock, dir.path(), &settings).unwrap();
        assert_ne!(a.filename, b.filename);
    }

    #[test]
    fn sanitizes_subject_names() {
        assert_eq!(sanitize_subject("Quantum Physics I"), "Quantum_Physics_I");
        assert_eq!(sanitize_subject("a/b\\c"), "a_b_c");
        assert_eq!(sanitize_subject(""), "Subject");
    }
}
