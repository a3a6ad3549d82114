//! The roster: exactly two teams and their players.
//!
//! Team identity is fixed for the lifetime of a session (ids 1 and 2);
//! membership and names stay mutable, including mid-game. Scores live here as
//! a running cache but are mutated only by the progression engine, which
//! keeps them consistent with the answer history.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use crate::error::QuizError;
use crate::{PlayerId, TeamId, TEAM_COUNT};

/// A contestant on one of the two teams.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Identifier, unique within the session.
    pub id: PlayerId,
    /// Display name.
    pub name: String,
    /// Running score cache; the sum of this player's answer-record deltas.
    pub score: i32,
}

/// One of the two fixed teams.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    /// Stable identifier (1 or 2).
    pub id: TeamId,
    /// Display name, mutable through [`Roster::rename_team`].
    pub name: String,
    /// Ordered membership. Most teams fit in the inline capacity.
    pub players: SmallVec<[Player; 4]>,
    /// Running score cache; the sum of this team's answer-record deltas.
    pub score: i32,
}

impl Team {
    fn new(id: TeamId, name: &str) -> Self {
        Self {
            id,
            name: name.to_owned(),
            players: SmallVec::new(),
            score: 0,
        }
    }

    /// Looks up a player on this team by id.
    #[must_use]
    pub fn player(&self, player_id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == player_id)
    }
}

/// Holder of the two teams, mutable only through explicit roster operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    teams: [Team; TEAM_COUNT],
    next_player_id: u64,
}

impl Default for Roster {
    fn default() -> Self {
        Self::new()
    }
}

impl Roster {
    /// The two fixed team ids.
    pub const TEAM_IDS: [TeamId; TEAM_COUNT] = [TeamId::new(1), TeamId::new(2)];

    /// Creates a roster with the default team names and no players.
    #[must_use]
    pub fn new() -> Self {
        Self {
            teams: [
                Team::new(TeamId::new(1), "Team A"),
                Team::new(TeamId::new(2), "Team B"),
            ],
            next_player_id: 1,
        }
    }

    /// Returns both teams in id order.
    #[must_use]
    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    /// Looks up a team by id.
    pub fn team(&self, team_id: TeamId) -> Result<&Team, QuizError> {
        self.teams
            .iter()
            .find(|t| t.id == team_id)
            .ok_or(QuizError::UnknownTeam { team_id })
    }

    fn team_mut(&mut self, team_id: TeamId) -> Result<&mut Team, QuizError> {
        self.teams
            .iter_mut()
            .find(|t| t.id == team_id)
            .ok_or(QuizError::UnknownTeam { team_id })
    }

    /// Looks up a player on the given team.
    pub fn player(&self, team_id: TeamId, player_id: PlayerId) -> Result<&Player, QuizError> {
        self.team(team_id)?
            .player(player_id)
            .ok_or(QuizError::UnknownPlayer { team_id, player_id })
    }

    /// Adds a player to a team and returns a copy of the new record.
    ///
    /// # Errors
    ///
    /// [`QuizError::EmptyName`] for a blank name,
    /// [`QuizError::UnknownTeam`] for an id the roster does not hold.
    pub fn add_player(&mut self, team_id: TeamId, name: &str) -> Result<Player, QuizError> {
        if name.trim().is_empty() {
            return Err(QuizError::EmptyName { field: "player" });
        }
        // Validate the team before consuming an id from the counter.
        self.team(team_id)?;
        let player = Player {
            id: PlayerId::new(self.next_player_id),
            name: name.to_owned(),
            score: 0,
        };
        self.next_player_id += 1;
        let team = self.team_mut(team_id)?;
        team.players.push(player.clone());
        debug!(%team_id, player_id = %player.id, "added player to roster");
        Ok(player)
    }

    /// Removes a player from a team.
    ///
    /// The player's past answer records remain in the history and keep
    /// counting toward team statistics; only the roster entry goes away.
    pub fn remove_player(&mut self, team_id: TeamId, player_id: PlayerId) -> Result<(), QuizError> {
        let team = self.team_mut(team_id)?;
        let before = team.players.len();
        team.players.retain(|p| p.id != player_id);
        if team.players.len() == before {
            return Err(QuizError::UnknownPlayer { team_id, player_id });
        }
        debug!(%team_id, %player_id, "removed player from roster");
        Ok(())
    }

    /// Renames a team.
    pub fn rename_team(&mut self, team_id: TeamId, name: &str) -> Result<(), QuizError> {
        if name.trim().is_empty() {
            return Err(QuizError::EmptyName { field: "team" });
        }
        let team = self.team_mut(team_id)?;
        team.name = name.to_owned();
        Ok(())
    }

    /// Applies a score delta to a player and the owning team.
    ///
    /// Called only by the progression engine, which pairs every call with an
    /// appended answer record so the running caches stay equal to the history
    /// sums.
    pub(crate) fn apply_score(
        &mut self,
        team_id: TeamId,
        player_id: PlayerId,
        delta: i32,
    ) -> Result<(), QuizError> {
        let team = self.team_mut(team_id)?;
        let player = team
            .players
            .iter_mut()
            .find(|p| p.id == player_id)
            .ok_or(QuizError::UnknownPlayer { team_id, player_id })?;
        player.score += delta;
        team.score += delta;
        Ok(())
    }

    /// Zeroes every team and player score. Membership and names stay intact.
    pub(crate) fn reset_scores(&mut self) {
        for team in &mut self.teams {
            team.score = 0;
            for player in &mut team.players {
                player.score = 0;
            }
        }
    }
}
