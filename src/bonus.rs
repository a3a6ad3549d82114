//! Bonus eligibility: which team, if any, has earned the upcoming bonus
//! block.
//!
//! Eligibility is derived purely from the answer history: a correct answer on
//! the final question of a block of [`BONUS_BLOCK_LEN`] questions makes the
//! answering team eligible, and it stays eligible until another team earns a
//! later boundary or the session resets. The engine never restricts which
//! team actually answers a bonus question; eligibility is advisory to the
//! caller, and when no team has earned it the bonus is open to both.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::history::AnswerRecord;
use crate::{TeamId, BONUS_BLOCK_LEN};

/// Tracks which team is authorized to answer the next bonus block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BonusTracker {
    eligible: Option<TeamId>,
}

impl BonusTracker {
    /// Creates a tracker with no eligible team.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The team currently eligible for the next bonus block, if any.
    #[must_use]
    pub const fn eligible_team(&self) -> Option<TeamId> {
        self.eligible
    }

    /// Feeds one recorded answer to the tracker.
    ///
    /// A correct answer on a block boundary (`(question_index + 1)` divisible
    /// by [`BONUS_BLOCK_LEN`]) makes the answering team eligible; every other
    /// record leaves eligibility unchanged.
    pub fn observe(&mut self, record: &AnswerRecord) {
        if record.is_correct && (record.question_index + 1) % BONUS_BLOCK_LEN == 0 {
            debug!(
                team_id = %record.team_id,
                question_index = record.question_index,
                "team earned bonus eligibility"
            );
            self.eligible = Some(record.team_id);
        }
    }

    /// Clears eligibility. Used by session reset and question reload.
    pub(crate) fn clear(&mut self) {
        self.eligible = None;
    }
}
