//! The question catalog: an immutable, ordered sequence of questions, plus
//! the loading paths that produce one.
//!
//! Loading is deliberately strict. A malformed or empty set is rejected with
//! a typed error, and a failed load of an explicitly named file is never
//! silently replaced by the built-in sample set. That substitution happens
//! only when the caller asked for [`QuestionSource::Sample`] in the first
//! place.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::QuizError;
use crate::question::{Question, QuestionKind};

/// Where a question set comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionSource {
    /// The built-in sample set shipped with the engine.
    Sample,
    /// A JSON file on disk, in the `{ "questions": [...] }` wire shape.
    File(PathBuf),
}

/// On-disk / on-wire envelope for a question set.
#[derive(Debug, Deserialize)]
struct QuestionSetFile {
    questions: Vec<Question>,
}

/// An immutable, ordered sequence of questions.
///
/// Sequence position is the authoritative address of a question; the `id`
/// carried inside each [`Question`] is informational only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionCatalog {
    questions: Vec<Question>,
}

impl QuestionCatalog {
    /// Loads a catalog from the given source.
    ///
    /// # Errors
    ///
    /// - [`QuizError::QuestionSourceUnreadable`] when a file source cannot be
    ///   read.
    /// - [`QuizError::MalformedQuestionSet`] when the payload is not valid
    ///   JSON, lacks the `questions` key, or a non-theme question has no
    ///   answer.
    /// - [`QuizError::EmptyQuestionSet`] when the set parses but is empty.
    pub fn load(source: &QuestionSource) -> Result<Self, QuizError> {
        match source {
            QuestionSource::Sample => Ok(Self::sample()),
            QuestionSource::File(path) => Self::from_file(path),
        }
    }

    /// Loads and validates a catalog from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, QuizError> {
        let raw = std::fs::read_to_string(path).map_err(|e| QuizError::QuestionSourceUnreadable {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let catalog = Self::from_json(&raw)?;
        debug!(
            path = %path.display(),
            questions = catalog.len(),
            "loaded question catalog from file"
        );
        Ok(catalog)
    }

    /// Parses and validates a catalog from a JSON string in the
    /// `{ "questions": [...] }` wire shape.
    pub fn from_json(json: &str) -> Result<Self, QuizError> {
        let file: QuestionSetFile =
            serde_json::from_str(json).map_err(|e| QuizError::MalformedQuestionSet {
                reason: e.to_string(),
            })?;
        Self::from_questions(file.questions)
    }

    /// Builds a validated catalog from an already-assembled question list.
    pub fn from_questions(questions: Vec<Question>) -> Result<Self, QuizError> {
        if questions.is_empty() {
            return Err(QuizError::EmptyQuestionSet);
        }
        for (index, question) in questions.iter().enumerate() {
            let missing = question
                .answer
                .as_ref()
                .is_none_or(|a| a.trim().is_empty());
            if question.kind.requires_answer() && missing {
                return Err(QuizError::MalformedQuestionSet {
                    reason: format!(
                        "question at index {} (id {}) has no answer but is not a theme",
                        index, question.id
                    ),
                });
            }
        }
        Ok(Self { questions })
    }

    /// The built-in sample set: three normal questions, a bonus block, three
    /// more normal questions, and a lightning block.
    #[must_use]
    pub fn sample() -> Self {
        let q = |id: u32, text: &str, answer: &str, kind: QuestionKind| Question {
            id,
            text: text.to_owned(),
            answer: Some(answer.to_owned()),
            kind,
        };
        let theme = |id: u32, text: &str, kind: QuestionKind| Question {
            id,
            text: text.to_owned(),
            answer: None,
            kind,
        };
        use QuestionKind::{Bonus, BonusTheme, Lightning, LightningTheme, Normal};
        Self {
            questions: vec![
                q(1, "What is the capital of France?", "Paris", Normal),
                q(2, "Who wrote 'Romeo and Juliet'?", "William Shakespeare", Normal),
                q(3, "What is the chemical symbol for gold?", "Au", Normal),
                theme(4, "BONUS THEME: Solar System", BonusTheme),
                q(5, "What is the largest planet in our solar system?", "Jupiter", Bonus),
                q(6, "Which planet is known as the Red Planet?", "Mars", Bonus),
                q(7, "Which planet has the most moons?", "Saturn", Bonus),
                q(8, "What is the smallest planet in our solar system?", "Mercury", Bonus),
                q(9, "Which country is home to the kangaroo?", "Australia", Normal),
                q(10, "What is the largest mammal in the world?", "Blue Whale", Normal),
                q(11, "Who painted the Mona Lisa?", "Leonardo da Vinci", Normal),
                theme(12, "LIGHTNING ROUND: World Capitals", LightningTheme),
                q(13, "Capital of Japan?", "Tokyo", Lightning),
                q(14, "Capital of Egypt?", "Cairo", Lightning),
                q(15, "Capital of Australia?", "Canberra", Lightning),
                q(16, "Capital of Brazil?", "Brasília", Lightning),
                q(17, "Capital of Canada?", "Ottawa", Lightning),
                q(18, "Capital of Spain?", "Madrid", Lightning),
                q(19, "Capital of South Korea?", "Seoul", Lightning),
                q(20, "Capital of Italy?", "Rome", Lightning),
                q(21, "Capital of Argentina?", "Buenos Aires", Lightning),
                q(22, "Capital of India?", "New Delhi", Lightning),
            ],
        }
    }

    /// Returns the question at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    /// Returns the full ordered question list.
    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Number of questions in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Returns `true` when the catalog holds no questions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Index of the final question, or `None` for an empty catalog.
    #[must_use]
    pub fn last_index(&self) -> Option<usize> {
        self.questions.len().checked_sub(1)
    }
}
