//! Derived statistics for teams and players.
//!
//! Everything here is a pure fold over the answer history plus the roster:
//! there are no hidden counters, so the summaries are always consistent with
//! the score caches and trivially recomputable.
//!
//! Field naming is canonical snake_case at both team and player level; the
//! two levels share one [`AnswerSummary`] shape.

use serde::{Deserialize, Serialize};

use crate::history::AnswerRecord;
use crate::question::Round;
use crate::roster::Roster;
use crate::{PlayerId, TeamId};

/// Summary of a set of answer records, used identically at team and player
/// scope.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AnswerSummary {
    /// Number of records in scope.
    pub total_answered: usize,
    /// Number of records judged correct.
    pub correct_answers: usize,
    /// `correct_answers / total_answered * 100`, or `0.0` when nothing has
    /// been answered. Always within `[0, 100]`.
    pub accuracy: f64,
    /// Sum of applied deltas over records from normal rounds.
    pub normal_points: i32,
    /// Sum of applied deltas over records from bonus rounds.
    pub bonus_points: i32,
    /// Sum of applied deltas over records from lightning rounds.
    pub lightning_points: i32,
}

impl AnswerSummary {
    /// Folds a set of records into a summary.
    fn from_records<'a>(records: impl Iterator<Item = &'a AnswerRecord>) -> Self {
        let mut summary = Self::default();
        for record in records {
            summary.total_answered += 1;
            if record.is_correct {
                summary.correct_answers += 1;
            }
            match record.round {
                Round::Normal => summary.normal_points += record.points,
                Round::Bonus => summary.bonus_points += record.points,
                Round::Lightning => summary.lightning_points += record.points,
            }
        }
        if summary.total_answered > 0 {
            summary.accuracy =
                summary.correct_answers as f64 / summary.total_answered as f64 * 100.0;
        }
        summary
    }
}

/// Per-player statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerStats {
    /// The player's id.
    pub id: PlayerId,
    /// The player's display name.
    pub name: String,
    /// The player's current score cache.
    pub score: i32,
    /// Summary of this player's own records.
    pub summary: AnswerSummary,
}

/// Per-team statistics, including a breakdown for every rostered player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamStats {
    /// The team's id.
    pub id: TeamId,
    /// The team's display name.
    pub name: String,
    /// The team's current score cache.
    pub score: i32,
    /// Per-player breakdowns, in roster order.
    pub players: Vec<PlayerStats>,
    /// Summary of all of this team's records, including records from players
    /// who have since been removed from the roster.
    pub summary: AnswerSummary,
}

/// Computes per-team and per-player summaries from the roster and history.
///
/// Pure and recomputed on demand; callers typically expose the result as a
/// stats endpoint payload.
#[must_use]
pub fn compute_stats(roster: &Roster, history: &[AnswerRecord]) -> Vec<TeamStats> {
    roster
        .teams()
        .iter()
        .map(|team| {
            let team_records = || history.iter().filter(|r| r.team_id == team.id);
            let players = team
                .players
                .iter()
                .map(|player| PlayerStats {
                    id: player.id,
                    name: player.name.clone(),
                    score: player.score,
                    summary: AnswerSummary::from_records(
                        team_records().filter(|r| r.player_id == player.id),
                    ),
                })
                .collect();
            TeamStats {
                id: team.id,
                name: team.name.clone(),
                score: team.score,
                players,
                summary: AnswerSummary::from_records(team_records()),
            }
        })
        .collect()
}
