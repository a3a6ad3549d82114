//! Error types returned by the engine's fallible operations.

use std::error::Error;
use std::fmt;
use std::fmt::Display;

use crate::{PlayerId, TeamId};

/// This enum contains all error messages this library can return. Most API
/// functions will generally return a [`Result<T, QuizError>`].
///
/// [`Result<T, QuizError>`]: std::result::Result
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QuizError {
    /// A question set was loaded successfully but contained no questions.
    EmptyQuestionSet,
    /// A question set could not be parsed or failed validation.
    MalformedQuestionSet {
        /// Further specifies what was wrong with the set.
        reason: String,
    },
    /// An external question source could not be read.
    QuestionSourceUnreadable {
        /// The path that was requested.
        path: String,
        /// The underlying I/O failure.
        reason: String,
    },
    /// An operation referenced a team id the roster does not hold.
    UnknownTeam {
        /// The offending team id.
        team_id: TeamId,
    },
    /// An operation referenced a player that is not on the given team.
    UnknownPlayer {
        /// The team that was searched.
        team_id: TeamId,
        /// The offending player id.
        player_id: PlayerId,
    },
    /// A roster operation was given an empty name.
    EmptyName {
        /// Which name was empty ("team" or "player").
        field: &'static str,
    },
    /// An answer was submitted for a question index that no longer matches
    /// the engine's current question. The submission is rejected rather than
    /// applied, preserving the score/history invariant.
    StaleAnswer {
        /// The index the client believed was current.
        submitted: usize,
        /// The index that is actually current.
        current: usize,
    },
    /// An answer was submitted for a theme question. Theme questions are
    /// non-interactive announcements and are never answerable.
    ThemeNotAnswerable {
        /// The index of the theme question.
        index: usize,
    },
    /// The active question has already been resolved and accepts no further
    /// answers until the session advances.
    QuestionResolved {
        /// The index of the resolved question.
        index: usize,
    },
    /// A progression operation was attempted before any question set was
    /// loaded.
    NoQuestionsLoaded,
    /// A mutation was attempted after the quiz reached its terminal state.
    QuizFinished,
    /// [`advance`] was called while the session is already at the final
    /// question. Advancing is a terminal no-op; call [`finish`] instead.
    ///
    /// [`advance`]: crate::QuizSession::advance
    /// [`finish`]: crate::QuizSession::finish
    AtFinalQuestion {
        /// The final question index.
        index: usize,
    },
    /// [`finish`] was called before the session reached the final question.
    ///
    /// [`finish`]: crate::QuizSession::finish
    NotAtFinalQuestion {
        /// The current question index.
        current: usize,
        /// The final question index.
        last: usize,
    },
}

/// Coarse classification of a [`QuizError`], for callers that map errors onto
/// transport-level responses (e.g. HTTP 400/404/409) without matching every
/// variant.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The request itself was invalid (malformed input, stale submission).
    Validation,
    /// The request referenced an entity or source that does not exist.
    NotFound,
    /// The request was well-formed but not legal in the session's current
    /// state.
    State,
}

impl QuizError {
    /// Returns the coarse [`ErrorKind`] classification of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            QuizError::EmptyQuestionSet
            | QuizError::MalformedQuestionSet { .. }
            | QuizError::EmptyName { .. }
            | QuizError::StaleAnswer { .. }
            | QuizError::ThemeNotAnswerable { .. } => ErrorKind::Validation,
            QuizError::QuestionSourceUnreadable { .. }
            | QuizError::UnknownTeam { .. }
            | QuizError::UnknownPlayer { .. } => ErrorKind::NotFound,
            QuizError::QuestionResolved { .. }
            | QuizError::NoQuestionsLoaded
            | QuizError::QuizFinished
            | QuizError::AtFinalQuestion { .. }
            | QuizError::NotAtFinalQuestion { .. } => ErrorKind::State,
        }
    }
}

impl Display for QuizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuizError::EmptyQuestionSet => {
                write!(f, "Question set contains no questions.")
            }
            QuizError::MalformedQuestionSet { reason } => {
                write!(f, "Malformed question set: {}", reason)
            }
            QuizError::QuestionSourceUnreadable { path, reason } => {
                write!(f, "Could not read question source {}: {}", path, reason)
            }
            QuizError::UnknownTeam { team_id } => {
                write!(f, "No team with id {}", team_id)
            }
            QuizError::UnknownPlayer { team_id, player_id } => {
                write!(f, "No player with id {} on team {}", player_id, team_id)
            }
            QuizError::EmptyName { field } => {
                write!(f, "A {} name must not be empty", field)
            }
            QuizError::StaleAnswer { submitted, current } => {
                write!(
                    f,
                    "Stale answer submission: submitted for question {} but question {} is current",
                    submitted, current
                )
            }
            QuizError::ThemeNotAnswerable { index } => {
                write!(
                    f,
                    "Question {} is a theme announcement and cannot be answered",
                    index
                )
            }
            QuizError::QuestionResolved { index } => {
                write!(
                    f,
                    "Question {} is already resolved and accepts no further answers",
                    index
                )
            }
            QuizError::NoQuestionsLoaded => {
                write!(f, "No question set has been loaded.")
            }
            QuizError::QuizFinished => {
                write!(f, "The quiz has finished; reset the session to play again.")
            }
            QuizError::AtFinalQuestion { index } => {
                write!(
                    f,
                    "Already at the final question (index {}); cannot advance further",
                    index
                )
            }
            QuizError::NotAtFinalQuestion { current, last } => {
                write!(
                    f,
                    "Cannot finish at question {}; the final question is {}",
                    current, last
                )
            }
        }
    }
}

impl Error for QuizError {}
