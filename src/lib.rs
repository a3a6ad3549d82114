//! # Trivia Engine
//!
//! A deterministic progression and scoring engine for turn-based trivia
//! contests between two teams.
//!
//! The engine tracks which question is active, classifies questions into
//! scoring regimes (rounds), applies the correct point delta for every
//! answer, advances state deterministically, and derives per-team and
//! per-player statistics from an append-only answer history. Rendering,
//! transport and persistence are deliberately out of scope: callers drive
//! the engine through a small operation set and shuttle its serializable
//! snapshots over whatever transport they choose.
//!
//! ## Quick start
//!
//! ```
//! use trivia_engine::{AnswerSubmission, QuestionSource, SessionBuilder, TeamId};
//!
//! let mut session = SessionBuilder::new()
//!     .with_team_name(TeamId::new(1), "The Quizzards")
//!     .with_player(TeamId::new(1), "Ada")
//!     .with_player(TeamId::new(2), "Grace")
//!     .start()
//!     .unwrap();
//!
//! session.load_questions(&QuestionSource::Sample).unwrap();
//!
//! let player = session.snapshot().teams[0].players[0].id;
//! let outcome = session
//!     .record_answer(AnswerSubmission {
//!         team_id: TeamId::new(1),
//!         player_id: player,
//!         is_correct: true,
//!         question_index: 0,
//!     })
//!     .unwrap();
//! assert_eq!(outcome.record.points, 5);
//! ```
//!
//! ## Design notes
//!
//! - Scores on teams and players are a running cache: the answer history is
//!   the sole source of truth, and every mutation keeps the two in lockstep.
//! - Whether the active question accepts further answers is engine state
//!   ([`QuestionStatus`]), not a UI inference; the "steal" retry after an
//!   incorrect normal answer and the single-attempt lightning rule both fall
//!   out of it.
//! - Every rejected operation surfaces a typed [`QuizError`]; nothing is
//!   silently swallowed, and a rejected operation never mutates the session.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::fmt;

pub use bonus::BonusTracker;
pub use catalog::{QuestionCatalog, QuestionSource};
pub use error::{ErrorKind, QuizError};
pub use history::{AnswerRecord, AnswerSubmission};
pub use question::{Question, QuestionKind, Round};
pub use roster::{Player, Roster, Team};
pub use scoring::{score_delta, ScoreOutcome};
pub use session::builder::SessionBuilder;
pub use session::quiz_session::{
    AnswerOutcome, Progress, QuestionStatus, QuizSession, QuizSnapshot,
};
pub use session::shared::SharedQuizSession;
pub use stats::{compute_stats, AnswerSummary, PlayerStats, TeamStats};

pub mod bonus;
pub mod catalog;
pub mod error;
pub mod history;
pub mod prelude;
pub mod question;
pub mod roster;
pub mod scoring;
pub mod stats;
/// Session orchestration: the progression engine, its builder, and the
/// thread-safe shared handle.
pub mod session {
    pub mod builder;
    pub mod quiz_session;
    pub mod shared;
}

// #############
// # CONSTANTS #
// #############

/// Number of teams in a contest. Fixed for the lifetime of a session.
pub const TEAM_COUNT: usize = 2;

/// Points awarded for a correct answer, in every round.
pub const CORRECT_POINTS: i32 = 5;

/// Points subtracted for an incorrect answer in a lightning round.
pub const LIGHTNING_PENALTY: i32 = 5;

/// Length of the question block that gates bonus eligibility: a correct
/// answer on the last question of a block of this many questions makes the
/// answering team eligible for the next bonus round.
pub const BONUS_BLOCK_LEN: usize = 4;

/// Identifier of one of the two fixed teams.
///
/// Team identity is stable for the lifetime of a session: the roster always
/// holds exactly two teams, with ids `1` and `2`. The newtype exists so that
/// team ids and player ids cannot be accidentally interchanged.
///
/// # Examples
///
/// ```
/// use trivia_engine::TeamId;
///
/// let team = TeamId::new(1);
/// assert_eq!(team.as_u32(), 1);
/// assert_ne!(team, TeamId::new(2));
/// ```
#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct TeamId(u32);

impl TeamId {
    /// Creates a new `TeamId` from a raw integer.
    ///
    /// This does not validate the id against the roster; operations taking a
    /// `TeamId` return [`QuizError::UnknownTeam`] for ids the roster does not
    /// hold.
    #[inline]
    #[must_use]
    pub const fn new(id: u32) -> Self {
        TeamId(id)
    }

    /// Returns the underlying integer value.
    #[inline]
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        self.0
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a player, unique within the owning team.
///
/// Player ids are allocated by the roster from a monotonic counter, so they
/// are unique across the whole session and never reused, even after a player
/// is removed.
#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct PlayerId(u64);

impl PlayerId {
    /// Creates a new `PlayerId` from a raw integer.
    #[inline]
    #[must_use]
    pub const fn new(id: u64) -> Self {
        PlayerId(id)
    }

    /// Returns the underlying integer value.
    #[inline]
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
