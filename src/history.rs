//! Answer records and submissions.
//!
//! The append-only sequence of [`AnswerRecord`]s is the sole source of truth
//! for statistics; the score fields on teams and players are caches that the
//! engine keeps equal to the sums implied here.

use serde::{Deserialize, Serialize};
use web_time::{SystemTime, UNIX_EPOCH};

use crate::question::Round;
use crate::{PlayerId, TeamId};

/// One recorded answer. Append-only; never mutated or deleted except by a
/// full session reset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerRecord {
    /// Catalog index of the question that was answered.
    pub question_index: usize,
    /// The answering team.
    pub team_id: TeamId,
    /// The answering player.
    pub player_id: PlayerId,
    /// Whether the answer was judged correct.
    pub is_correct: bool,
    /// The point delta that was applied for this answer. Stored so that
    /// statistics are a pure fold over the history.
    pub points: i32,
    /// The scoring regime the question belonged to.
    pub round: Round,
    /// Unix timestamp (seconds) at which the answer was recorded.
    pub recorded_at: u64,
}

/// A client's claim that a particular player answered the current question.
///
/// The submission carries the question index the client believed was current
/// so the engine can reject stale submissions (for example a second judge's
/// duplicate click arriving after the session advanced) instead of silently
/// mis-applying them.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerSubmission {
    /// The answering team.
    pub team_id: TeamId,
    /// The answering player.
    pub player_id: PlayerId,
    /// Whether the answer was judged correct.
    pub is_correct: bool,
    /// The question index the client believes is current.
    pub question_index: usize,
}

/// Current unix time in whole seconds, for stamping answer records.
pub(crate) fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
