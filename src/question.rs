//! Question records and their classification into scoring regimes.
//!
//! A question's [`QuestionKind`] is authoritative for everything the engine
//! decides about it: which [`Round`] is in effect while it is active, whether
//! it can be answered at all, and which row of the scoring table applies.

use serde::{Deserialize, Serialize};

/// The kind of a question, as carried in the question-set wire format.
///
/// The two `*Theme` kinds are non-interactive separators: they announce the
/// scoring block that follows and advance immediately, without ever being
/// answerable themselves.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    /// A standard question. An incorrect answer leaves the question open so
    /// the opposing team may attempt a steal.
    Normal,
    /// Announcement introducing a bonus block.
    BonusTheme,
    /// A bonus question: exactly one attempt, no steal.
    Bonus,
    /// Announcement introducing a lightning block.
    LightningTheme,
    /// A lightning question: single-shot, with a penalty for a miss.
    Lightning,
}

impl QuestionKind {
    /// Returns the scoring regime in effect while a question of this kind is
    /// active. Theme kinds map to the round they introduce.
    #[must_use]
    pub const fn round(self) -> Round {
        match self {
            QuestionKind::Normal => Round::Normal,
            QuestionKind::BonusTheme | QuestionKind::Bonus => Round::Bonus,
            QuestionKind::LightningTheme | QuestionKind::Lightning => Round::Lightning,
        }
    }

    /// Returns `true` for the non-interactive theme announcements.
    #[must_use]
    pub const fn is_theme(self) -> bool {
        matches!(self, QuestionKind::BonusTheme | QuestionKind::LightningTheme)
    }

    /// Returns `true` when a question of this kind must carry an `answer`
    /// field in the wire format. Only theme announcements are exempt.
    #[must_use]
    pub const fn requires_answer(self) -> bool {
        !self.is_theme()
    }
}

/// The scoring regime currently in effect, derived from the active question's
/// kind.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Round {
    /// Standard scoring: +5 for a correct answer, steal on a miss.
    Normal,
    /// Bonus scoring: +5 for a correct answer, single attempt.
    Bonus,
    /// Lightning scoring: +5 for a correct answer, −5 for a miss.
    Lightning,
}

/// A single question record.
///
/// Questions are immutable once loaded. The `id` field is informational only;
/// the position within the catalog's ordered sequence is authoritative for
/// progression and for bonus-eligibility arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Informational identifier carried from the source data.
    pub id: u32,
    /// The question (or announcement) text shown to contestants.
    pub text: String,
    /// The expected answer. Absent for theme announcements.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    /// The kind of question, serialized as `type` on the wire.
    #[serde(rename = "type")]
    pub kind: QuestionKind,
}
