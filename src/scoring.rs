//! The scoring rules: a pure mapping from (question kind, correctness) to a
//! point delta and a turn-resolution flag.
//!
//! | kind | correct | delta | resolves turn |
//! |---|---|---|---|
//! | normal | yes | +5 | yes |
//! | normal | no | 0 | no (steal: the opposing team may attempt) |
//! | bonus | yes | +5 | yes |
//! | bonus | no | 0 | yes (exactly one attempt, no steal) |
//! | lightning | yes | +5 | yes |
//! | lightning | no | −5 | yes (single-shot with a penalty) |
//! | themes | — | 0 | yes (announcement only) |

use crate::question::QuestionKind;
use crate::{CORRECT_POINTS, LIGHTNING_PENALTY};

/// The outcome of scoring one answer.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ScoreOutcome {
    /// Points to apply to the answering player and their team.
    pub delta: i32,
    /// Whether the question is now resolved. When `false` the question stays
    /// open so the opposing team may attempt a steal.
    pub resolves_turn: bool,
}

/// Computes the point delta and resolution flag for an answer.
///
/// Pure and stateless: the progression engine owns all the state and feeds
/// this function the kind of the question that was actually current.
///
/// # Examples
///
/// ```
/// use trivia_engine::{score_delta, QuestionKind};
///
/// let miss = score_delta(QuestionKind::Lightning, false);
/// assert_eq!(miss.delta, -5);
/// assert!(miss.resolves_turn);
/// ```
#[must_use]
pub const fn score_delta(kind: QuestionKind, is_correct: bool) -> ScoreOutcome {
    match (kind, is_correct) {
        (QuestionKind::Normal, true)
        | (QuestionKind::Bonus, true)
        | (QuestionKind::Lightning, true) => ScoreOutcome {
            delta: CORRECT_POINTS,
            resolves_turn: true,
        },
        (QuestionKind::Normal, false) => ScoreOutcome {
            delta: 0,
            resolves_turn: false,
        },
        (QuestionKind::Bonus, false) => ScoreOutcome {
            delta: 0,
            resolves_turn: true,
        },
        (QuestionKind::Lightning, false) => ScoreOutcome {
            delta: -LIGHTNING_PENALTY,
            resolves_turn: true,
        },
        (QuestionKind::BonusTheme | QuestionKind::LightningTheme, _) => ScoreOutcome {
            delta: 0,
            resolves_turn: true,
        },
    }
}
