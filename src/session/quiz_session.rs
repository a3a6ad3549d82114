//! The progression engine: owns the quiz state and drives every component.
//!
//! [`QuizSession`] holds the current-question pointer, the current round
//! label, the per-question open/resolved sub-state, the bonus tracker and the
//! append-only answer history, and exposes the full operation set a transport
//! layer needs. All writes flow one way: caller intent comes in through an
//! operation, the engine validates it completely, then mutates the roster
//! scores and appends to the history in lockstep. A rejected operation never
//! mutates anything.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::bonus::BonusTracker;
use crate::catalog::{QuestionCatalog, QuestionSource};
use crate::error::QuizError;
use crate::history::{unix_now, AnswerRecord, AnswerSubmission};
use crate::question::{Question, Round};
use crate::roster::{Player, Roster, Team};
use crate::scoring::score_delta;
use crate::stats::{compute_stats, TeamStats};
use crate::{PlayerId, TeamId};

/// Whether the active question accepts further answers.
///
/// This is engine state, not a UI inference: an incorrect normal answer
/// leaves the question [`Open`] so the opposing team may attempt a steal,
/// while bonus and lightning questions resolve on their single attempt.
///
/// [`Open`]: QuestionStatus::Open
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionStatus {
    /// The question accepts (further) answers.
    Open,
    /// The question is settled; the next accepted mutation is an advance.
    Resolved,
}

/// Result of a successful [`QuizSession::record_answer`] call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOutcome {
    /// The record that was appended to the history.
    pub record: AnswerRecord,
    /// A snapshot of the answering team after the delta was applied.
    pub team: Team,
}

/// Result of a successful [`QuizSession::advance`] call.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    /// The new current question index.
    pub index: usize,
    /// The round in effect at the new index.
    pub round: Round,
}

/// A serializable snapshot of the whole session, the payload behind a
/// `current_state` read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizSnapshot {
    /// The current question index.
    pub current_question_index: usize,
    /// The round currently in effect.
    pub current_round: Round,
    /// Whether the current question still accepts answers.
    pub question_status: QuestionStatus,
    /// The question at the current index, `None` when no set is loaded or
    /// the quiz has finished.
    pub current_question: Option<Question>,
    /// The team eligible for the next bonus block, if any.
    pub bonus_team_id: Option<TeamId>,
    /// Both teams, with players and score caches.
    pub teams: Vec<Team>,
    /// The full ordered question list.
    pub questions: Vec<Question>,
    /// Total number of questions loaded.
    pub total_questions: usize,
    /// Whether the quiz has reached its terminal state.
    pub finished: bool,
}

/// A single quiz session: two teams, one ordered question catalog, one
/// deterministic progression.
///
/// A fresh session has a full roster but no questions; progression operations
/// return [`QuizError::NoQuestionsLoaded`] until [`load_questions`] succeeds.
/// Construct directly with [`new`], or through [`SessionBuilder`] to seed
/// team names, players and a catalog in one go.
///
/// [`load_questions`]: QuizSession::load_questions
/// [`new`]: QuizSession::new
/// [`SessionBuilder`]: crate::SessionBuilder
#[derive(Debug, Clone, PartialEq)]
pub struct QuizSession {
    catalog: QuestionCatalog,
    roster: Roster,
    current_index: usize,
    current_round: Round,
    question_status: QuestionStatus,
    bonus: BonusTracker,
    history: Vec<AnswerRecord>,
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizSession {
    /// Creates a session with default team names, no players and no
    /// questions.
    #[must_use]
    pub fn new() -> Self {
        Self::with_parts(QuestionCatalog::default(), Roster::new())
    }

    pub(crate) fn with_parts(catalog: QuestionCatalog, roster: Roster) -> Self {
        let current_round = catalog
            .get(0)
            .map_or(Round::Normal, |question| question.kind.round());
        Self {
            catalog,
            roster,
            current_index: 0,
            current_round,
            question_status: QuestionStatus::Open,
            bonus: BonusTracker::new(),
            history: Vec::new(),
        }
    }

    // ###########
    // # LOADING #
    // ###########

    /// Loads a question set, replacing the current catalog and resetting all
    /// progression state. Roster membership and names are preserved.
    ///
    /// Loading is strict: a failure leaves the session untouched, and a
    /// failed file load is never substituted by the sample set.
    pub fn load_questions(&mut self, source: &QuestionSource) -> Result<&[Question], QuizError> {
        let catalog = QuestionCatalog::load(source)?;
        info!(questions = catalog.len(), "question catalog loaded");
        self.catalog = catalog;
        self.reset();
        Ok(self.catalog.questions())
    }

    // ###############
    // # PROGRESSION #
    // ###############

    /// Records an answer to the current question.
    ///
    /// The submission must target the engine's current question index; a
    /// mismatch is rejected as stale so duplicate or out-of-order clicks from
    /// concurrent clients cannot corrupt the score invariant. On success the
    /// computed delta is applied to the player and team, the record is
    /// appended to the history and fed to the bonus tracker, and the question
    /// is marked resolved when the scoring rules say the turn is over.
    ///
    /// Recording never advances the question pointer; advancing is its own
    /// explicit operation, which is what makes UI-level steal retries on
    /// normal misses possible.
    pub fn record_answer(
        &mut self,
        submission: AnswerSubmission,
    ) -> Result<AnswerOutcome, QuizError> {
        if self.catalog.is_empty() {
            return Err(QuizError::NoQuestionsLoaded);
        }
        if self.is_finished() {
            return Err(QuizError::QuizFinished);
        }
        if submission.question_index != self.current_index {
            return Err(QuizError::StaleAnswer {
                submitted: submission.question_index,
                current: self.current_index,
            });
        }
        let question = self
            .catalog
            .get(self.current_index)
            .ok_or(QuizError::NoQuestionsLoaded)?;
        if question.kind.is_theme() {
            return Err(QuizError::ThemeNotAnswerable {
                index: self.current_index,
            });
        }
        if self.question_status == QuestionStatus::Resolved {
            return Err(QuizError::QuestionResolved {
                index: self.current_index,
            });
        }
        // Validate the roster reference before any mutation.
        self.roster
            .player(submission.team_id, submission.player_id)?;

        let kind = question.kind;
        let outcome = score_delta(kind, submission.is_correct);
        self.roster
            .apply_score(submission.team_id, submission.player_id, outcome.delta)?;
        let record = AnswerRecord {
            question_index: self.current_index,
            team_id: submission.team_id,
            player_id: submission.player_id,
            is_correct: submission.is_correct,
            points: outcome.delta,
            round: kind.round(),
            recorded_at: unix_now(),
        };
        self.history.push(record.clone());
        self.bonus.observe(&record);
        if outcome.resolves_turn {
            self.question_status = QuestionStatus::Resolved;
        }
        debug!(
            team_id = %submission.team_id,
            player_id = %submission.player_id,
            question_index = self.current_index,
            is_correct = submission.is_correct,
            delta = outcome.delta,
            resolved = outcome.resolves_turn,
            "answer recorded"
        );
        let team = self.roster.team(submission.team_id)?.clone();
        Ok(AnswerOutcome { record, team })
    }

    /// Advances to the next question and recomputes the round label from its
    /// kind. The question sub-state reopens.
    ///
    /// At the final question this is a state error: advancing past the end is
    /// never implicit, the caller signals completion with [`finish`].
    ///
    /// [`finish`]: QuizSession::finish
    pub fn advance(&mut self) -> Result<Progress, QuizError> {
        if self.catalog.is_empty() {
            return Err(QuizError::NoQuestionsLoaded);
        }
        if self.is_finished() {
            return Err(QuizError::QuizFinished);
        }
        let last = self.catalog.last_index().unwrap_or(0);
        if self.current_index >= last {
            return Err(QuizError::AtFinalQuestion {
                index: self.current_index,
            });
        }
        self.current_index += 1;
        // The new question's kind is authoritative for the round label.
        if let Some(question) = self.catalog.get(self.current_index) {
            self.current_round = question.kind.round();
        }
        self.question_status = QuestionStatus::Open;
        debug!(
            index = self.current_index,
            round = ?self.current_round,
            "advanced to next question"
        );
        Ok(Progress {
            index: self.current_index,
            round: self.current_round,
        })
    }

    /// Marks the quiz finished. Valid only at the final question; afterwards
    /// every progression mutation is a state error until [`reset`].
    ///
    /// [`reset`]: QuizSession::reset
    pub fn finish(&mut self) -> Result<(), QuizError> {
        if self.catalog.is_empty() {
            return Err(QuizError::NoQuestionsLoaded);
        }
        if self.is_finished() {
            return Err(QuizError::QuizFinished);
        }
        let last = self.catalog.last_index().unwrap_or(0);
        if self.current_index != last {
            return Err(QuizError::NotAtFinalQuestion {
                current: self.current_index,
                last,
            });
        }
        // The only state in which the pointer equals the catalog length.
        self.current_index = self.catalog.len();
        info!("quiz finished");
        Ok(())
    }

    /// Resets progression: pointer to the first question, round recomputed
    /// from it, bonus eligibility cleared, history cleared, every score
    /// zeroed. The catalog and roster membership are preserved.
    pub fn reset(&mut self) {
        self.current_index = 0;
        self.current_round = self
            .catalog
            .get(0)
            .map_or(Round::Normal, |question| question.kind.round());
        self.question_status = QuestionStatus::Open;
        self.bonus.clear();
        self.history.clear();
        self.roster.reset_scores();
        info!("session reset");
    }

    // ##########
    // # ROSTER #
    // ##########

    /// Adds a player to a team. Allowed mid-game.
    pub fn add_player(&mut self, team_id: TeamId, name: &str) -> Result<Player, QuizError> {
        self.roster.add_player(team_id, name)
    }

    /// Removes a player from a team. Their past records stay in the history.
    pub fn remove_player(&mut self, team_id: TeamId, player_id: PlayerId) -> Result<(), QuizError> {
        self.roster.remove_player(team_id, player_id)
    }

    /// Renames a team.
    pub fn rename_team(&mut self, team_id: TeamId, name: &str) -> Result<(), QuizError> {
        self.roster.rename_team(team_id, name)
    }

    // #########
    // # READS #
    // #########

    /// The current question index. Equals the catalog length only after
    /// [`finish`](QuizSession::finish).
    #[must_use]
    pub const fn current_question_index(&self) -> usize {
        self.current_index
    }

    /// The round currently in effect.
    #[must_use]
    pub const fn current_round(&self) -> Round {
        self.current_round
    }

    /// Whether the current question still accepts answers.
    #[must_use]
    pub const fn question_status(&self) -> QuestionStatus {
        self.question_status
    }

    /// The question at the current index, if the session is active.
    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.catalog.get(self.current_index)
    }

    /// The team eligible for the next bonus block, if any.
    #[must_use]
    pub const fn bonus_team(&self) -> Option<TeamId> {
        self.bonus.eligible_team()
    }

    /// `true` once [`finish`](QuizSession::finish) has been called.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        !self.catalog.is_empty() && self.current_index >= self.catalog.len()
    }

    /// The append-only answer history.
    #[must_use]
    pub fn history(&self) -> &[AnswerRecord] {
        &self.history
    }

    /// The loaded question catalog.
    #[must_use]
    pub const fn catalog(&self) -> &QuestionCatalog {
        &self.catalog
    }

    /// The roster of both teams.
    #[must_use]
    pub const fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Builds a full serializable snapshot of the session.
    #[must_use]
    pub fn snapshot(&self) -> QuizSnapshot {
        QuizSnapshot {
            current_question_index: self.current_index,
            current_round: self.current_round,
            question_status: self.question_status,
            current_question: self.current_question().cloned(),
            bonus_team_id: self.bonus.eligible_team(),
            teams: self.roster.teams().to_vec(),
            questions: self.catalog.questions().to_vec(),
            total_questions: self.catalog.len(),
            finished: self.is_finished(),
        }
    }

    /// Computes per-team and per-player statistics from the history.
    #[must_use]
    pub fn stats(&self) -> Vec<TeamStats> {
        compute_stats(&self.roster, &self.history)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::question::QuestionKind;

    fn five_question_set() -> QuestionCatalog {
        QuestionCatalog::from_json(
            r#"{"questions": [
                {"id": 1, "text": "Q1?", "answer": "A1", "type": "normal"},
                {"id": 2, "text": "Q2?", "answer": "A2", "type": "normal"},
                {"id": 3, "text": "Q3?", "answer": "A3", "type": "normal"},
                {"id": 4, "text": "BONUS THEME", "type": "bonus_theme"},
                {"id": 5, "text": "Q5?", "answer": "A5", "type": "bonus"}
            ]}"#,
        )
        .unwrap()
    }

    struct Fixture {
        session: QuizSession,
        ada: PlayerId,
        grace: PlayerId,
    }

    fn fixture(catalog: QuestionCatalog) -> Fixture {
        let mut session = QuizSession::with_parts(catalog, Roster::new());
        let ada = session.add_player(TeamId::new(1), "Ada").unwrap().id;
        let grace = session.add_player(TeamId::new(2), "Grace").unwrap().id;
        Fixture {
            session,
            ada,
            grace,
        }
    }

    fn answer(team: TeamId, player: PlayerId, is_correct: bool, index: usize) -> AnswerSubmission {
        AnswerSubmission {
            team_id: team,
            player_id: player,
            is_correct,
            question_index: index,
        }
    }

    #[test]
    fn steal_scenario_plays_out_across_the_five_question_set() {
        let Fixture {
            mut session,
            ada,
            grace,
        } = fixture(five_question_set());
        let team_a = TeamId::new(1);
        let team_b = TeamId::new(2);

        // Team A answers Q1 correctly: +5.
        let outcome = session.record_answer(answer(team_a, ada, true, 0)).unwrap();
        assert_eq!(outcome.team.score, 5);
        assert_eq!(session.question_status(), QuestionStatus::Resolved);
        session.advance().unwrap();

        // Team B misses Q2: no delta, question stays open for the steal.
        let outcome = session
            .record_answer(answer(team_b, grace, false, 1))
            .unwrap();
        assert_eq!(outcome.team.score, 0);
        assert_eq!(session.question_status(), QuestionStatus::Open);

        // Team A steals Q2 without the pointer having moved: +5.
        let outcome = session.record_answer(answer(team_a, ada, true, 1)).unwrap();
        assert_eq!(outcome.team.score, 10);

        // Three advances land on the bonus question with the bonus round.
        session.advance().unwrap();
        session.advance().unwrap();
        let progress = session.advance().unwrap();
        assert_eq!(progress.index, 4);
        assert_eq!(progress.round, Round::Bonus);
        assert_eq!(
            session.current_question().unwrap().kind,
            QuestionKind::Bonus
        );
    }

    #[test]
    fn theme_question_is_not_answerable() {
        let Fixture {
            mut session, ada, ..
        } = fixture(five_question_set());
        for _ in 0..3 {
            session.advance().unwrap();
        }
        assert_eq!(session.current_round(), Round::Bonus);
        let err = session
            .record_answer(answer(TeamId::new(1), ada, true, 3))
            .unwrap_err();
        assert_eq!(err, QuizError::ThemeNotAnswerable { index: 3 });
    }

    #[test]
    fn stale_submission_is_rejected_without_mutation() {
        let Fixture {
            mut session, ada, ..
        } = fixture(five_question_set());
        session.advance().unwrap();
        let before = session.clone();
        let err = session
            .record_answer(answer(TeamId::new(1), ada, true, 0))
            .unwrap_err();
        assert_eq!(
            err,
            QuizError::StaleAnswer {
                submitted: 0,
                current: 1
            }
        );
        assert_eq!(session, before);
    }

    #[test]
    fn resolved_question_accepts_no_further_answers() {
        let Fixture {
            mut session,
            ada,
            grace,
        } = fixture(five_question_set());
        session
            .record_answer(answer(TeamId::new(1), ada, true, 0))
            .unwrap();
        let err = session
            .record_answer(answer(TeamId::new(2), grace, true, 0))
            .unwrap_err();
        assert_eq!(err, QuizError::QuestionResolved { index: 0 });
    }

    #[test]
    fn unknown_entities_are_rejected_before_any_mutation() {
        let Fixture { mut session, .. } = fixture(five_question_set());
        let before = session.clone();
        let err = session
            .record_answer(answer(TeamId::new(1), PlayerId::new(404), true, 0))
            .unwrap_err();
        assert!(matches!(err, QuizError::UnknownPlayer { .. }));
        let err = session
            .record_answer(answer(TeamId::new(3), PlayerId::new(1), true, 0))
            .unwrap_err();
        assert!(matches!(err, QuizError::UnknownTeam { .. }));
        assert_eq!(session, before);
    }

    #[test]
    fn progression_before_loading_is_a_state_error() {
        let mut session = QuizSession::new();
        let ada = session.add_player(TeamId::new(1), "Ada").unwrap().id;
        assert_eq!(session.advance().unwrap_err(), QuizError::NoQuestionsLoaded);
        assert_eq!(
            session
                .record_answer(answer(TeamId::new(1), ada, true, 0))
                .unwrap_err(),
            QuizError::NoQuestionsLoaded
        );
        assert_eq!(session.finish().unwrap_err(), QuizError::NoQuestionsLoaded);
    }

    #[test]
    fn advance_walks_every_index_once_with_matching_rounds() {
        let Fixture { mut session, .. } = fixture(QuestionCatalog::sample());
        let total = session.catalog().len();
        let mut visited = vec![session.current_question_index()];
        while let Ok(progress) = session.advance() {
            visited.push(progress.index);
            let kind = session.catalog().get(progress.index).unwrap().kind;
            assert_eq!(progress.round, kind.round());
        }
        assert_eq!(visited, (0..total).collect::<Vec<_>>());
        assert_eq!(
            session.advance().unwrap_err(),
            QuizError::AtFinalQuestion { index: total - 1 }
        );
    }

    #[test]
    fn finish_is_only_valid_at_the_final_question() {
        let Fixture {
            mut session, ada, ..
        } = fixture(five_question_set());
        assert_eq!(
            session.finish().unwrap_err(),
            QuizError::NotAtFinalQuestion { current: 0, last: 4 }
        );
        for _ in 0..4 {
            session.advance().unwrap();
        }
        session.finish().unwrap();
        assert!(session.is_finished());
        assert_eq!(session.current_question_index(), 5);
        assert!(session.current_question().is_none());
        assert_eq!(
            session
                .record_answer(answer(TeamId::new(1), ada, true, 5))
                .unwrap_err(),
            QuizError::QuizFinished
        );
        assert_eq!(session.advance().unwrap_err(), QuizError::QuizFinished);
    }

    #[test]
    fn reset_clears_progression_but_preserves_roster_and_catalog() {
        let Fixture {
            mut session, ada, ..
        } = fixture(five_question_set());
        session.rename_team(TeamId::new(1), "Keepers").unwrap();
        session
            .record_answer(answer(TeamId::new(1), ada, true, 0))
            .unwrap();
        session.advance().unwrap();
        session.reset();

        assert_eq!(session.current_question_index(), 0);
        assert_eq!(session.current_round(), Round::Normal);
        assert_eq!(session.bonus_team(), None);
        assert!(session.history().is_empty());
        assert_eq!(session.catalog().len(), 5);
        let team = session.roster().team(TeamId::new(1)).unwrap();
        assert_eq!(team.name, "Keepers");
        assert_eq!(team.score, 0);
        assert_eq!(team.players.len(), 1);
        for stats in session.stats() {
            assert_eq!(stats.summary.total_answered, 0);
            assert_eq!(stats.summary.accuracy, 0.0);
        }
    }

    #[test]
    fn reset_derives_round_from_the_first_question() {
        let catalog = QuestionCatalog::from_json(
            r#"{"questions": [
                {"id": 1, "text": "LIGHTNING", "type": "lightning_theme"},
                {"id": 2, "text": "Q?", "answer": "A", "type": "lightning"}
            ]}"#,
        )
        .unwrap();
        let Fixture { mut session, .. } = fixture(catalog);
        session.advance().unwrap();
        session.reset();
        assert_eq!(session.current_round(), Round::Lightning);
    }

    #[test]
    fn bonus_eligibility_follows_the_block_boundary() {
        let Fixture {
            mut session, grace, ..
        } = fixture(QuestionCatalog::sample());
        let team_a = TeamId::new(1);
        let team_b = TeamId::new(2);

        for index in 0..3 {
            session
                .record_answer(answer(team_b, grace, true, index))
                .unwrap();
            session.advance().unwrap();
            assert_eq!(session.bonus_team(), None);
        }
        // Index 3 is the bonus theme in the sample set; eligibility instead
        // comes from a custom all-normal block.
        let catalog = QuestionCatalog::from_json(
            r#"{"questions": [
                {"id": 1, "text": "Q1?", "answer": "A", "type": "normal"},
                {"id": 2, "text": "Q2?", "answer": "A", "type": "normal"},
                {"id": 3, "text": "Q3?", "answer": "A", "type": "normal"},
                {"id": 4, "text": "Q4?", "answer": "A", "type": "normal"},
                {"id": 5, "text": "Q5?", "answer": "A", "type": "normal"}
            ]}"#,
        )
        .unwrap();
        let Fixture {
            mut session, ada, ..
        } = fixture(catalog);
        for index in 0..3 {
            session
                .record_answer(answer(team_a, ada, true, index))
                .unwrap();
            session.advance().unwrap();
        }
        session.record_answer(answer(team_a, ada, true, 3)).unwrap();
        assert_eq!(session.bonus_team(), Some(team_a));
        // A later non-boundary answer does not disturb it.
        session.advance().unwrap();
        session
            .record_answer(answer(team_a, ada, false, 4))
            .unwrap();
        assert_eq!(session.bonus_team(), Some(team_a));
    }

    #[test]
    fn load_questions_failure_leaves_the_session_untouched() {
        let Fixture {
            mut session, ada, ..
        } = fixture(five_question_set());
        session
            .record_answer(answer(TeamId::new(1), ada, true, 0))
            .unwrap();
        let before = session.clone();
        let err = session
            .load_questions(&QuestionSource::File("/no/such/file.json".into()))
            .unwrap_err();
        assert!(matches!(err, QuizError::QuestionSourceUnreadable { .. }));
        assert_eq!(session, before);
    }

    #[test]
    fn load_questions_resets_progression_but_keeps_roster() {
        let Fixture {
            mut session, ada, ..
        } = fixture(five_question_set());
        session
            .record_answer(answer(TeamId::new(1), ada, true, 0))
            .unwrap();
        session.advance().unwrap();
        let questions = session.load_questions(&QuestionSource::Sample).unwrap();
        assert_eq!(questions.len(), 22);
        assert_eq!(session.current_question_index(), 0);
        assert!(session.history().is_empty());
        assert_eq!(session.roster().team(TeamId::new(1)).unwrap().score, 0);
        assert_eq!(
            session.roster().team(TeamId::new(1)).unwrap().players.len(),
            1
        );
    }

    #[test]
    fn snapshot_reflects_session_state() {
        let Fixture {
            mut session, ada, ..
        } = fixture(five_question_set());
        session
            .record_answer(answer(TeamId::new(1), ada, true, 0))
            .unwrap();
        let snapshot = session.snapshot();
        assert_eq!(snapshot.current_question_index, 0);
        assert_eq!(snapshot.current_round, Round::Normal);
        assert_eq!(snapshot.question_status, QuestionStatus::Resolved);
        assert_eq!(snapshot.total_questions, 5);
        assert_eq!(snapshot.teams[0].score, 5);
        assert!(!snapshot.finished);
        // Snapshots serialize for transport layers.
        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains(r#""current_round":"normal""#));
    }

    #[test]
    fn score_caches_always_equal_history_sums() {
        let Fixture {
            mut session,
            ada,
            grace,
        } = fixture(QuestionCatalog::sample());
        let team_a = TeamId::new(1);
        let team_b = TeamId::new(2);
        let submissions = [
            (team_a, ada, true),
            (team_b, grace, false),
            (team_a, ada, false),
        ];
        let mut step = 0;
        loop {
            let (team, player, correct) = submissions[step % submissions.len()];
            let index = session.current_question_index();
            let _ = session.record_answer(answer(team, player, correct, index));
            step += 1;
            if session.advance().is_err() {
                break;
            }
        }
        for team in session.roster().teams() {
            let implied: i32 = session
                .history()
                .iter()
                .filter(|r| r.team_id == team.id)
                .map(|r| r.points)
                .sum();
            assert_eq!(team.score, implied);
            for player in &team.players {
                let implied: i32 = session
                    .history()
                    .iter()
                    .filter(|r| r.player_id == player.id)
                    .map(|r| r.points)
                    .sum();
                assert_eq!(player.score, implied);
            }
        }
    }
}
