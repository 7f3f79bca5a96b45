//! Contest Session Aggregate
//!
//! The single logical owner of the contest, the case registry, and
//! all score records. Every operation is a synchronous method; callers
//! (the repository implementation) serialize access, which makes each
//! method an atomic critical section - no partially-applied tick or
//! score update is ever observable.
//!
//! All time-sensitive methods take an explicit `now` so tests can
//! drive a simulated clock.

use crate::domain::entities::{Case, CaseDraft, Contest, HintCharge, ScoreRecord};
use crate::domain::services::{self, Standing};
use crate::domain::value_objects::{Attachment, Difficulty, Phase, Role};
use crate::error::{ContestError, ContestResult};
use chrono::{DateTime, Utc};
use kernel::id::{CaseId, HintId, ParticipantId};
use std::collections::HashMap;

/// Snapshot of the contest state returned by every control operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContestState {
    pub phase: Phase,
    pub remaining_seconds: i64,
}

/// Role-dependent projection of a hint. Unreleased hint text is
/// withheld from detectives; the deduction is always visible so a
/// detective can decide whether the hint is worth its price.
#[derive(Debug, Clone)]
pub struct HintView {
    pub id: HintId,
    pub point_deduction: u32,
    pub released: bool,
    pub text: Option<String>,
}

/// Role-dependent projection of a case. The secret flag is only
/// present in the chief view.
#[derive(Debug, Clone)]
pub struct CaseView {
    pub id: CaseId,
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub points: u32,
    pub attachment: Option<Attachment>,
    pub hints: Vec<HintView>,
    pub flag: Option<String>,
}

/// Semantic outcome of a flag submission. An incorrect flag is a
/// successful call, not an error; so is re-submitting a correct flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// First correct submission: points awarded.
    Correct { points_awarded: u32, score: i64 },
    /// Case already solved by this participant; nothing changed.
    AlreadySolved { score: i64 },
    /// Wrong flag; no state mutated, retries are free.
    Incorrect,
}

/// Result of consuming a hint. `deduction_applied` is zero when the
/// hint was already used (idempotent repeat).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HintOutcome {
    pub text: String,
    pub deduction_applied: u32,
    pub already_used: bool,
    pub score: i64,
}

/// One participant's own score summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreSummary {
    pub score: i64,
    pub solved_count: usize,
}

/// The contest session: contest clock + case registry + score records.
///
/// Explicitly owned and explicitly injected (never a hidden static),
/// so tests get clean isolation from fresh instances.
pub struct ContestSession {
    contest: Contest,
    cases: Vec<Case>,
    records: HashMap<(ParticipantId, CaseId), ScoreRecord>,
    names: HashMap<ParticipantId, String>,
}

impl ContestSession {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            contest: Contest::new(now),
            cases: Vec::new(),
            records: HashMap::new(),
            names: HashMap::new(),
        }
    }

    fn state_snapshot(&self) -> ContestState {
        ContestState {
            phase: self.contest.phase,
            remaining_seconds: self.contest.remaining_seconds,
        }
    }

    fn tick(&mut self, now: DateTime<Utc>) {
        if self.contest.tick(now) {
            tracing::info!("Contest clock reached zero, contest ended");
        }
    }

    // ========================================================================
    // Clock / lifecycle
    // ========================================================================

    /// Current phase and remaining seconds, after applying clock decay.
    pub fn state(&mut self, now: DateTime<Utc>) -> ContestState {
        self.tick(now);
        self.state_snapshot()
    }

    /// Start the contest. Only legal from `NotStarted` with a positive
    /// timer.
    pub fn start(&mut self, initial_seconds: i64, now: DateTime<Utc>) -> ContestResult<ContestState> {
        if self.contest.phase != Phase::NotStarted {
            return Err(ContestError::InvalidState(
                "contest has already been started",
            ));
        }
        if initial_seconds <= 0 {
            return Err(ContestError::InvalidState("timer must be positive"));
        }

        self.contest.set_remaining(initial_seconds);
        self.contest.last_tick_at = now;
        self.contest.phase = Phase::Running;

        tracing::info!(initial_seconds, "Contest started");
        Ok(self.state_snapshot())
    }

    /// Stop the contest early. Only legal while `Running`; the clock
    /// may also force this transition on its own when it hits zero.
    pub fn stop(&mut self, now: DateTime<Utc>) -> ContestResult<ContestState> {
        self.tick(now);
        if !self.contest.is_running() {
            return Err(ContestError::InvalidState("contest is not running"));
        }

        self.contest.phase = Phase::Ended;
        tracing::info!(
            remaining_seconds = self.contest.remaining_seconds,
            "Contest stopped"
        );
        Ok(self.state_snapshot())
    }

    /// Add (or subtract) time. Legal in any phase prior to `Ended`.
    /// Subtracting down to zero while running ends the contest.
    pub fn adjust_time(&mut self, delta_seconds: i64, now: DateTime<Utc>) -> ContestResult<ContestState> {
        self.tick(now);
        if self.contest.phase == Phase::Ended {
            return Err(ContestError::InvalidState("contest has ended"));
        }

        self.contest
            .set_remaining(self.contest.remaining_seconds.saturating_add(delta_seconds));
        if self.contest.is_running() && self.contest.remaining_seconds == 0 {
            self.contest.phase = Phase::Ended;
        }

        tracing::info!(
            delta_seconds,
            remaining_seconds = self.contest.remaining_seconds,
            "Contest timer adjusted"
        );
        Ok(self.state_snapshot())
    }

    // ========================================================================
    // Case registry
    // ========================================================================

    /// Create a case from a validated draft. Hints start unreleased.
    pub fn add_case(&mut self, draft: CaseDraft, now: DateTime<Utc>) -> CaseView {
        let case = Case::new(draft, now);
        tracing::info!(case_id = %case.id, points = case.points, "Case added");
        let view = chief_view(&case);
        self.cases.push(case);
        view
    }

    /// Remove a case from future visibility. Historical score records
    /// keep the points and deductions they captured.
    pub fn remove_case(&mut self, case_id: CaseId) -> ContestResult<()> {
        let idx = self
            .cases
            .iter()
            .position(|c| c.id == case_id)
            .ok_or(ContestError::NotFound("case"))?;
        self.cases.remove(idx);
        tracing::info!(case_id = %case_id, "Case removed");
        Ok(())
    }

    /// Release a hint to detectives. Idempotent: releasing an already
    /// released hint is a no-op success.
    pub fn release_hint(&mut self, case_id: CaseId, hint_id: HintId) -> ContestResult<()> {
        let case = self
            .cases
            .iter_mut()
            .find(|c| c.id == case_id)
            .ok_or(ContestError::NotFound("case"))?;
        let hint = case
            .hint_mut(hint_id)
            .ok_or(ContestError::NotFound("hint"))?;

        if !hint.released {
            hint.released = true;
            tracing::info!(case_id = %case_id, hint_id = %hint_id, "Hint released");
        }
        Ok(())
    }

    /// List cases for the given role. Detectives never see secret
    /// flags, and unreleased hints appear as metadata only (deduction
    /// visible, text withheld).
    pub fn list_cases(&self, role: Role) -> Vec<CaseView> {
        self.cases
            .iter()
            .map(|case| match role {
                Role::Chief => chief_view(case),
                Role::Detective => detective_view(case),
            })
            .collect()
    }

    // ========================================================================
    // Play
    // ========================================================================

    /// Validate a flag submission and score it. Idempotent per
    /// (participant, case): a second correct submission reports
    /// success with zero additional points.
    pub fn submit_flag(
        &mut self,
        participant_id: ParticipantId,
        participant_name: &str,
        case_id: CaseId,
        candidate: &str,
        now: DateTime<Utc>,
    ) -> ContestResult<SubmitOutcome> {
        self.tick(now);
        if !self.contest.is_running() {
            return Err(ContestError::InvalidState("contest is not running"));
        }

        let case = self
            .cases
            .iter()
            .find(|c| c.id == case_id)
            .ok_or(ContestError::NotFound("case"))?;
        let (secret, points) = (case.flag.clone(), case.points);

        self.remember_name(participant_id, participant_name);
        let record = self
            .records
            .entry((participant_id, case_id))
            .or_insert_with(|| ScoreRecord::new(now));

        if record.solved {
            tracing::debug!(
                participant_id = %participant_id,
                case_id = %case_id,
                "Repeat submission for a solved case"
            );
            return Ok(SubmitOutcome::AlreadySolved {
                score: self.score_of(participant_id),
            });
        }

        if !services::flag_matches(&secret, candidate) {
            tracing::debug!(
                participant_id = %participant_id,
                case_id = %case_id,
                "Incorrect flag"
            );
            return Ok(SubmitOutcome::Incorrect);
        }

        record.solved = true;
        record.solved_at = Some(now);
        record.points_awarded = points;

        tracing::info!(
            participant_id = %participant_id,
            case_id = %case_id,
            points_awarded = points,
            "Case solved"
        );
        Ok(SubmitOutcome::Correct {
            points_awarded: points,
            score: self.score_of(participant_id),
        })
    }

    /// Consume a released hint, charging its deduction at most once
    /// per participant. Repeats return the text again without a second
    /// charge.
    pub fn use_hint(
        &mut self,
        participant_id: ParticipantId,
        participant_name: &str,
        case_id: CaseId,
        hint_id: HintId,
        now: DateTime<Utc>,
    ) -> ContestResult<HintOutcome> {
        self.tick(now);
        if !self.contest.is_running() {
            return Err(ContestError::InvalidState("contest is not running"));
        }

        let case = self
            .cases
            .iter()
            .find(|c| c.id == case_id)
            .ok_or(ContestError::NotFound("case"))?;
        let hint = case.hint(hint_id).ok_or(ContestError::NotFound("hint"))?;
        if !hint.released {
            return Err(ContestError::HintLocked);
        }
        let (text, deduction) = (hint.text.clone(), hint.point_deduction);

        self.remember_name(participant_id, participant_name);
        let record = self
            .records
            .entry((participant_id, case_id))
            .or_insert_with(|| ScoreRecord::new(now));

        if record.hints_used.contains_key(&hint_id) {
            tracing::debug!(
                participant_id = %participant_id,
                hint_id = %hint_id,
                "Repeat hint use, no additional charge"
            );
            return Ok(HintOutcome {
                text,
                deduction_applied: 0,
                already_used: true,
                score: self.score_of(participant_id),
            });
        }

        record.hints_used.insert(
            hint_id,
            HintCharge {
                deduction,
                used_at: now,
            },
        );

        tracing::info!(
            participant_id = %participant_id,
            case_id = %case_id,
            hint_id = %hint_id,
            deduction,
            "Hint consumed"
        );
        Ok(HintOutcome {
            text,
            deduction_applied: deduction,
            already_used: false,
            score: self.score_of(participant_id),
        })
    }

    // ========================================================================
    // Standings
    // ========================================================================

    /// Full leaderboard recomputation from the score history. No
    /// incremental cache: contests are small and a single source of
    /// truth wins.
    pub fn leaderboard(&self) -> Vec<Standing> {
        let mut by_participant: HashMap<ParticipantId, Vec<&ScoreRecord>> = HashMap::new();
        for ((participant_id, _), record) in &self.records {
            by_participant.entry(*participant_id).or_default().push(record);
        }

        let entries = by_participant
            .into_iter()
            .filter_map(|(participant_id, records)| {
                let tally = services::tally(records)?;
                let name = self
                    .names
                    .get(&participant_id)
                    .cloned()
                    .unwrap_or_else(|| participant_id.to_string());
                Some((participant_id, name, tally))
            })
            .collect();

        services::rank_standings(entries)
    }

    /// One participant's score. Zero-valued for an empty history,
    /// never an error.
    pub fn my_score(&self, participant_id: ParticipantId) -> ScoreSummary {
        let records = self
            .records
            .iter()
            .filter(|((pid, _), _)| *pid == participant_id)
            .map(|(_, record)| record);

        match services::tally(records) {
            Some(t) => ScoreSummary {
                score: t.score,
                solved_count: t.solved_count,
            },
            None => ScoreSummary {
                score: 0,
                solved_count: 0,
            },
        }
    }

    fn score_of(&self, participant_id: ParticipantId) -> i64 {
        self.my_score(participant_id).score
    }

    fn remember_name(&mut self, participant_id: ParticipantId, name: &str) {
        if !name.is_empty() {
            self.names.insert(participant_id, name.to_string());
        }
    }
}

fn chief_view(case: &Case) -> CaseView {
    CaseView {
        id: case.id,
        title: case.title.clone(),
        description: case.description.clone(),
        difficulty: case.difficulty(),
        points: case.points,
        attachment: case.attachment.clone(),
        hints: case
            .hints
            .iter()
            .map(|h| HintView {
                id: h.id,
                point_deduction: h.point_deduction,
                released: h.released,
                text: Some(h.text.clone()),
            })
            .collect(),
        flag: Some(case.flag.clone()),
    }
}

fn detective_view(case: &Case) -> CaseView {
    CaseView {
        id: case.id,
        title: case.title.clone(),
        description: case.description.clone(),
        difficulty: case.difficulty(),
        points: case.points,
        attachment: case.attachment.clone(),
        hints: case
            .hints
            .iter()
            .map(|h| HintView {
                id: h.id,
                point_deduction: h.point_deduction,
                released: h.released,
                // Released hints ship their text in the feed; the
                // deduction is still only charged through use_hint.
                text: h.released.then(|| h.text.clone()),
            })
            .collect(),
        flag: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::HintDraft;
    use chrono::Duration;

    fn vault_draft() -> CaseDraft {
        CaseDraft {
            title: "Vault".to_string(),
            description: "Open the vault".to_string(),
            points: 200,
            flag: "FLAG{x}".to_string(),
            attachment: None,
            hints: vec![HintDraft {
                text: "Check the keypad".to_string(),
                point_deduction: 20,
            }],
        }
    }

    fn running_session_with_vault(now: DateTime<Utc>) -> (ContestSession, CaseId, HintId) {
        let mut session = ContestSession::new(now);
        let view = session.add_case(vault_draft(), now);
        let hint_id = view.hints[0].id;
        session.start(600, now).unwrap();
        (session, view.id, hint_id)
    }

    #[test]
    fn test_phase_transitions_are_monotonic() {
        let now = Utc::now();
        let mut session = ContestSession::new(now);

        assert_eq!(session.state(now).phase, Phase::NotStarted);
        session.start(600, now).unwrap();
        assert_eq!(session.state(now).phase, Phase::Running);

        // Second start is illegal
        assert!(matches!(
            session.start(600, now),
            Err(ContestError::InvalidState(_))
        ));

        session.stop(now).unwrap();
        assert_eq!(session.state(now).phase, Phase::Ended);

        // Ended is terminal
        assert!(matches!(
            session.start(600, now),
            Err(ContestError::InvalidState(_))
        ));
        assert!(matches!(
            session.stop(now),
            Err(ContestError::InvalidState(_))
        ));
    }

    #[test]
    fn test_start_rejects_non_positive_timer() {
        let now = Utc::now();
        let mut session = ContestSession::new(now);
        assert!(matches!(
            session.start(0, now),
            Err(ContestError::InvalidState(_))
        ));
        assert!(matches!(
            session.start(-10, now),
            Err(ContestError::InvalidState(_))
        ));
    }

    #[test]
    fn test_timer_expiry_forces_ended_and_blocks_submissions() {
        let now = Utc::now();
        let (mut session, case_id, _) = running_session_with_vault(now);

        let later = now + Duration::seconds(610);
        let state = session.state(later);
        assert_eq!(state.phase, Phase::Ended);
        assert_eq!(state.remaining_seconds, 0);

        let participant = ParticipantId::new();
        let result = session.submit_flag(participant, "holmes", case_id, "FLAG{x}", later);
        assert!(matches!(result, Err(ContestError::InvalidState(_))));
    }

    #[test]
    fn test_adjust_time_before_and_during_but_not_after() {
        let now = Utc::now();
        let mut session = ContestSession::new(now);

        // Initial configuration before start
        let state = session.adjust_time(300, now).unwrap();
        assert_eq!(state.remaining_seconds, 300);
        assert_eq!(state.phase, Phase::NotStarted);

        session.start(600, now).unwrap();
        let state = session.adjust_time(60, now).unwrap();
        assert_eq!(state.remaining_seconds, 660);

        session.stop(now).unwrap();
        assert!(matches!(
            session.adjust_time(60, now),
            Err(ContestError::InvalidState(_))
        ));
    }

    #[test]
    fn test_adjust_time_saturates_on_extreme_deltas() {
        let now = Utc::now();
        let (mut session, _, _) = running_session_with_vault(now);

        // No overflow panic; the clock pegs instead of wrapping
        let state = session.adjust_time(i64::MAX, now).unwrap();
        assert!(state.remaining_seconds > 0);
        assert_eq!(state.phase, Phase::Running);

        let state = session.adjust_time(i64::MIN, now).unwrap();
        assert_eq!(state.remaining_seconds, 0);
        assert_eq!(state.phase, Phase::Ended);
    }

    #[test]
    fn test_adjust_time_to_zero_while_running_ends_contest() {
        let now = Utc::now();
        let (mut session, _, _) = running_session_with_vault(now);

        let state = session.adjust_time(-10_000, now).unwrap();
        assert_eq!(state.remaining_seconds, 0);
        assert_eq!(state.phase, Phase::Ended);
    }

    #[test]
    fn test_submission_rejected_before_start() {
        let now = Utc::now();
        let mut session = ContestSession::new(now);
        let view = session.add_case(vault_draft(), now);

        let result = session.submit_flag(ParticipantId::new(), "holmes", view.id, "FLAG{x}", now);
        assert!(matches!(result, Err(ContestError::InvalidState(_))));
    }

    #[test]
    fn test_submit_unknown_case_is_not_found() {
        let now = Utc::now();
        let (mut session, _, _) = running_session_with_vault(now);

        let result =
            session.submit_flag(ParticipantId::new(), "holmes", CaseId::new(), "FLAG{x}", now);
        assert!(matches!(result, Err(ContestError::NotFound("case"))));
    }

    #[test]
    fn test_correct_flag_awards_points_exactly_once() {
        let now = Utc::now();
        let (mut session, case_id, _) = running_session_with_vault(now);
        let participant = ParticipantId::new();

        let outcome = session
            .submit_flag(participant, "holmes", case_id, "FLAG{x}", now)
            .unwrap();
        assert_eq!(
            outcome,
            SubmitOutcome::Correct {
                points_awarded: 200,
                score: 200
            }
        );

        // Re-submission: success, zero additional points
        let outcome = session
            .submit_flag(participant, "holmes", case_id, "FLAG{x}", now)
            .unwrap();
        assert_eq!(outcome, SubmitOutcome::AlreadySolved { score: 200 });
        assert_eq!(session.my_score(participant).score, 200);
        assert_eq!(session.my_score(participant).solved_count, 1);
    }

    #[test]
    fn test_wrong_flag_mutates_nothing_and_allows_retries() {
        let now = Utc::now();
        let (mut session, case_id, _) = running_session_with_vault(now);
        let participant = ParticipantId::new();

        for _ in 0..5 {
            let outcome = session
                .submit_flag(participant, "holmes", case_id, "flag{X}", now)
                .unwrap();
            assert_eq!(outcome, SubmitOutcome::Incorrect);
        }
        assert_eq!(session.my_score(participant).score, 0);

        // Retry with the right flag still works at full points
        let outcome = session
            .submit_flag(participant, "holmes", case_id, "FLAG{x}", now)
            .unwrap();
        assert!(matches!(outcome, SubmitOutcome::Correct { points_awarded: 200, .. }));
    }

    #[test]
    fn test_unreleased_hint_is_locked_no_matter_how_often() {
        let now = Utc::now();
        let (mut session, case_id, hint_id) = running_session_with_vault(now);
        let participant = ParticipantId::new();

        for _ in 0..3 {
            let result = session.use_hint(participant, "holmes", case_id, hint_id, now);
            assert!(matches!(result, Err(ContestError::HintLocked)));
        }
        assert_eq!(session.my_score(participant).score, 0);
    }

    #[test]
    fn test_hint_deduction_charged_at_most_once() {
        let now = Utc::now();
        let (mut session, case_id, hint_id) = running_session_with_vault(now);
        let participant = ParticipantId::new();

        session.release_hint(case_id, hint_id).unwrap();
        // Releasing again is an idempotent no-op
        session.release_hint(case_id, hint_id).unwrap();

        let outcome = session
            .use_hint(participant, "holmes", case_id, hint_id, now)
            .unwrap();
        assert_eq!(outcome.deduction_applied, 20);
        assert!(!outcome.already_used);
        assert_eq!(outcome.text, "Check the keypad");
        assert_eq!(outcome.score, -20);

        let outcome = session
            .use_hint(participant, "holmes", case_id, hint_id, now)
            .unwrap();
        assert_eq!(outcome.deduction_applied, 0);
        assert!(outcome.already_used);
        assert_eq!(outcome.score, -20);
    }

    #[test]
    fn test_vault_scenario_end_to_end() {
        // Chief creates "Vault" (200 pts, one 20-pt hint, unreleased).
        let now = Utc::now();
        let mut session = ContestSession::new(now);
        let view = session.add_case(vault_draft(), now);
        let (case_id, hint_id) = (view.id, view.hints[0].id);
        session.start(600, now).unwrap();

        let detective = ParticipantId::new();

        // Wrong flag: InvalidFlag outcome, score unchanged.
        let outcome = session
            .submit_flag(detective, "holmes", case_id, "wrong", now)
            .unwrap();
        assert_eq!(outcome, SubmitOutcome::Incorrect);
        assert_eq!(session.my_score(detective).score, 0);

        // Chief releases the hint; detective consumes it: score -20.
        session.release_hint(case_id, hint_id).unwrap();
        let hint = session
            .use_hint(detective, "holmes", case_id, hint_id, now)
            .unwrap();
        assert_eq!(hint.score, -20);

        // Correct flag: score becomes 180.
        let outcome = session
            .submit_flag(detective, "holmes", case_id, "FLAG{x}", now)
            .unwrap();
        assert_eq!(
            outcome,
            SubmitOutcome::Correct {
                points_awarded: 200,
                score: 180
            }
        );

        // Same submission again: success, score stays 180.
        let outcome = session
            .submit_flag(detective, "holmes", case_id, "FLAG{x}", now)
            .unwrap();
        assert_eq!(outcome, SubmitOutcome::AlreadySolved { score: 180 });
    }

    #[test]
    fn test_leaderboard_order_is_consistent_with_score() {
        let now = Utc::now();
        let mut session = ContestSession::new(now);
        let easy = session.add_case(CaseDraft {
            title: "Cipher".to_string(),
            description: String::new(),
            points: 100,
            flag: "FLAG{a}".to_string(),
            attachment: None,
            hints: vec![],
        }, now);
        let hard = session.add_case(CaseDraft {
            title: "Heist".to_string(),
            description: String::new(),
            points: 400,
            flag: "FLAG{b}".to_string(),
            attachment: None,
            hints: vec![],
        }, now);
        session.start(600, now).unwrap();

        let alice = ParticipantId::new();
        let bob = ParticipantId::new();

        session
            .submit_flag(alice, "alice", easy.id, "FLAG{a}", now)
            .unwrap();
        session
            .submit_flag(bob, "bob", hard.id, "FLAG{b}", now + Duration::seconds(30))
            .unwrap();

        let standings = session.leaderboard();
        assert_eq!(standings.len(), 2);
        assert_eq!(standings[0].name, "bob");
        assert_eq!(standings[0].rank, 1);
        assert_eq!(standings[0].score, 400);
        assert_eq!(standings[1].name, "alice");
        assert_eq!(standings[1].rank, 2);
        assert_eq!(standings[1].score, 100);

        for pair in standings.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn test_leaderboard_ties_broken_by_earlier_solve() {
        let now = Utc::now();
        let (mut session, case_id, _) = running_session_with_vault(now);

        let first = ParticipantId::new();
        let second = ParticipantId::new();

        session
            .submit_flag(first, "first", case_id, "FLAG{x}", now + Duration::seconds(10))
            .unwrap();
        session
            .submit_flag(second, "second", case_id, "FLAG{x}", now + Duration::seconds(20))
            .unwrap();

        let standings = session.leaderboard();
        assert_eq!(standings[0].name, "first");
        assert_eq!(standings[1].name, "second");
    }

    #[test]
    fn test_my_score_for_unknown_participant_is_zero() {
        let now = Utc::now();
        let session = ContestSession::new(now);
        let summary = session.my_score(ParticipantId::new());
        assert_eq!(summary.score, 0);
        assert_eq!(summary.solved_count, 0);
    }

    #[test]
    fn test_detective_view_redacts_flag_and_unreleased_hint_text() {
        let now = Utc::now();
        let mut session = ContestSession::new(now);
        let view = session.add_case(vault_draft(), now);

        let detective_cases = session.list_cases(Role::Detective);
        assert_eq!(detective_cases.len(), 1);
        let case = &detective_cases[0];
        assert!(case.flag.is_none());
        // Deduction metadata visible, text withheld while unreleased
        assert_eq!(case.hints[0].point_deduction, 20);
        assert!(!case.hints[0].released);
        assert!(case.hints[0].text.is_none());

        // Once released, the text ships in the detective feed too
        session.release_hint(view.id, view.hints[0].id).unwrap();
        let detective_cases = session.list_cases(Role::Detective);
        assert!(detective_cases[0].hints[0].released);
        assert_eq!(
            detective_cases[0].hints[0].text.as_deref(),
            Some("Check the keypad")
        );
        assert!(detective_cases[0].flag.is_none());

        let chief_cases = session.list_cases(Role::Chief);
        assert_eq!(chief_cases[0].flag.as_deref(), Some("FLAG{x}"));
        assert_eq!(chief_cases[0].hints[0].text.as_deref(), Some("Check the keypad"));
    }

    #[test]
    fn test_case_removal_preserves_awarded_history() {
        let now = Utc::now();
        let (mut session, case_id, _) = running_session_with_vault(now);
        let participant = ParticipantId::new();

        session
            .submit_flag(participant, "holmes", case_id, "FLAG{x}", now)
            .unwrap();
        session.remove_case(case_id).unwrap();

        assert!(session.list_cases(Role::Chief).is_empty());
        assert_eq!(session.my_score(participant).score, 200);
        assert_eq!(session.leaderboard()[0].score, 200);

        // Removed case is no longer solvable
        let result = session.submit_flag(participant, "holmes", case_id, "FLAG{x}", now);
        assert!(matches!(result, Err(ContestError::NotFound("case"))));
    }

    #[test]
    fn test_remove_unknown_case_is_not_found() {
        let now = Utc::now();
        let mut session = ContestSession::new(now);
        assert!(matches!(
            session.remove_case(CaseId::new()),
            Err(ContestError::NotFound("case"))
        ));
    }

    #[test]
    fn test_release_hint_unknown_ids() {
        let now = Utc::now();
        let mut session = ContestSession::new(now);
        let view = session.add_case(vault_draft(), now);

        assert!(matches!(
            session.release_hint(CaseId::new(), HintId::new()),
            Err(ContestError::NotFound("case"))
        ));
        assert!(matches!(
            session.release_hint(view.id, HintId::new()),
            Err(ContestError::NotFound("hint"))
        ));
    }

    #[test]
    fn test_failed_attempt_puts_participant_on_board_with_zero() {
        let now = Utc::now();
        let (mut session, case_id, _) = running_session_with_vault(now);
        let participant = ParticipantId::new();

        session
            .submit_flag(participant, "holmes", case_id, "nope", now)
            .unwrap();

        let standings = session.leaderboard();
        assert_eq!(standings.len(), 1);
        assert_eq!(standings[0].score, 0);
        assert_eq!(standings[0].name, "holmes");
    }
}
