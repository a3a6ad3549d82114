//! Builder for [`QuizSession`]s.
//!
//! Collects team names, an initial roster and optionally a pre-loaded
//! catalog, then validates everything in one place when the session starts.

use tracing::debug;

use crate::catalog::QuestionCatalog;
use crate::error::QuizError;
use crate::roster::Roster;
use crate::session::quiz_session::QuizSession;
use crate::TeamId;

/// Builds a [`QuizSession`].
///
/// After setting all appropriate values, use [`start`](SessionBuilder::start)
/// to consume the builder and create the session. Name and roster validation
/// happens at `start`, so an invalid team id or blank name surfaces as a
/// single [`QuizError`] instead of panicking mid-chain.
///
/// # Examples
///
/// ```
/// use trivia_engine::{QuestionCatalog, SessionBuilder, TeamId};
///
/// let session = SessionBuilder::new()
///     .with_team_name(TeamId::new(1), "The Quizzards")
///     .with_team_name(TeamId::new(2), "Trivia Titans")
///     .with_player(TeamId::new(1), "Ada")
///     .with_player(TeamId::new(2), "Grace")
///     .with_questions(QuestionCatalog::sample())
///     .start()
///     .unwrap();
/// assert_eq!(session.catalog().len(), 22);
/// ```
#[must_use = "SessionBuilder must be consumed by calling start()"]
#[derive(Debug, Default)]
pub struct SessionBuilder {
    team_names: Vec<(TeamId, String)>,
    players: Vec<(TeamId, String)>,
    catalog: Option<QuestionCatalog>,
}

impl SessionBuilder {
    /// Creates a builder with default team names, no players and no catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the display name of a team.
    pub fn with_team_name(mut self, team_id: TeamId, name: impl Into<String>) -> Self {
        self.team_names.push((team_id, name.into()));
        self
    }

    /// Adds a player to a team's initial roster.
    pub fn with_player(mut self, team_id: TeamId, name: impl Into<String>) -> Self {
        self.players.push((team_id, name.into()));
        self
    }

    /// Seeds the session with an already-loaded catalog. Without one the
    /// session starts empty and questions are loaded later through
    /// [`QuizSession::load_questions`].
    pub fn with_questions(mut self, catalog: QuestionCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Consumes the builder and starts the session.
    ///
    /// # Errors
    ///
    /// [`QuizError::UnknownTeam`] or [`QuizError::EmptyName`] when any queued
    /// rename or player addition is invalid.
    pub fn start(self) -> Result<QuizSession, QuizError> {
        let mut roster = Roster::new();
        for (team_id, name) in &self.team_names {
            roster.rename_team(*team_id, name)?;
        }
        for (team_id, name) in &self.players {
            roster.add_player(*team_id, name)?;
        }
        debug!(
            players = self.players.len(),
            preloaded = self.catalog.is_some(),
            "starting quiz session"
        );
        Ok(QuizSession::with_parts(
            self.catalog.unwrap_or_default(),
            roster,
        ))
    }
}
