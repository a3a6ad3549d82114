//! Convenient re-exports for common usage.
//!
//! This module provides a "prelude" that re-exports the most commonly used
//! types from the engine, allowing you to import them all at once.
//!
//! # Usage
//!
//! ```rust
//! use trivia_engine::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Session types**: [`QuizSession`], [`SharedQuizSession`], [`SessionBuilder`]
//! - **Fundamental types**: [`TeamId`], [`PlayerId`], [`Question`], [`QuestionKind`], [`Round`]
//! - **Catalog**: [`QuestionCatalog`], [`QuestionSource`]
//! - **Answers**: [`AnswerSubmission`], [`AnswerRecord`], [`AnswerOutcome`], [`QuestionStatus`]
//! - **Statistics**: [`TeamStats`], [`PlayerStats`], [`AnswerSummary`]
//! - **Error handling**: [`QuizError`], [`ErrorKind`]

// Session types
pub use crate::session::builder::SessionBuilder;
pub use crate::session::quiz_session::{
    AnswerOutcome, Progress, QuestionStatus, QuizSession, QuizSnapshot,
};
pub use crate::session::shared::SharedQuizSession;

// Fundamental types
pub use crate::catalog::{QuestionCatalog, QuestionSource};
pub use crate::history::{AnswerRecord, AnswerSubmission};
pub use crate::question::{Question, QuestionKind, Round};
pub use crate::roster::{Player, Roster, Team};
pub use crate::{PlayerId, TeamId};

// Scoring and statistics
pub use crate::scoring::{score_delta, ScoreOutcome};
pub use crate::stats::{compute_stats, AnswerSummary, PlayerStats, TeamStats};

// Error handling
pub use crate::error::{ErrorKind, QuizError};
