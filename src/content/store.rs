//! In-memory content store
//!
//! Maps a free-text subject name to one of the canned datasets. Subject
//! resolution is an explicit enumerated lookup: unrecognized subjects take
//! the documented default branch rather than erroring.

use super::demo;
use super::types::{Question, Textbook};

/// Known subject datasets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubjectKey {
    QuantumPhysics,
    MachineLearning,
}

impl SubjectKey {
    /// Dataset used for subjects that match no known key
    pub const DEFAULT: SubjectKey = SubjectKey::QuantumPhysics;

    /// Resolve a subject name to a dataset key.
    ///
    /// Matching is case-insensitive on well-known markers ("quantum" or
    /// "physics" for the quantum dataset, "machine learning" or the
    /// standalone word "ml" for the ML dataset; substring matching for
    /// "ml" would capture unrelated subjects like "HTML"). Anything else
    /// falls back to [`Self::DEFAULT`].
    pub fn resolve(subject_name: &str) -> Self {
        let normalized = subject_name.to_lowercase();
        if normalized.contains("quantum") || normalized.contains("physics") {
            SubjectKey::QuantumPhysics
        } else if normalized.contains("machine learning")
            || normalized.split_whitespace().any(|word| word == "ml")
        {
            SubjectKey::MachineLearning
        } else {
            Self::DEFAULT
        }
    }
}

/// In-memory store of demo textbooks and question banks
///
/// Datasets are built once at startup; generation requests only ever
/// borrow from them.
pub struct ContentStore {
    quantum_textbook: Textbook,
    quantum_questions: Vec<Question>,
    ml_textbook: Textbook,
    ml_questions: Vec<Question>,
}

impl ContentStore {
    /// Create a store populated with the demo datasets
    pub fn demo() -> Self {
        Self {
            quantum_textbook: demo::quantum_physics_textbook(),
            quantum_questions: demo::quantum_physics_questions(),
            ml_textbook: demo::machine_learning_textbook(),
            ml_questions: demo::machine_learning_questions(),
        }
    }

    /// Get the textbook for a subject key
    pub fn textbook(&self, key: SubjectKey) -> &Textbook {
        match key {
            SubjectKey::QuantumPhysics => &self.quantum_textbook,
            SubjectKey::MachineLearning => &self.ml_textbook,
        }
    }

    /// Get the question bank for a subject key
    pub fn questions(&self, key: SubjectKey) -> &[Question] {
        match key {
            SubjectKey::QuantumPhysics => &self.quantum_questions,
            SubjectKey::MachineLearning => &self.ml_questions,
        }
    }
}
