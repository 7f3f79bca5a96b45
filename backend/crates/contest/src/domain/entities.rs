//! Domain Entities
//!
//! Core business entities for the contest domain.

use crate::domain::value_objects::{Attachment, Difficulty, Phase};
use chrono::{DateTime, Duration, Utc};
use kernel::id::{CaseId, HintId};
use std::collections::HashMap;

/// Contest entity - the single timed session with its countdown clock.
///
/// `remaining_seconds` only decays while the phase is `Running`; the
/// decay is applied lazily on [`Contest::tick`], so readers see time
/// advance independent of any client connection.
#[derive(Debug, Clone)]
pub struct Contest {
    pub phase: Phase,
    pub remaining_seconds: i64,
    pub last_tick_at: DateTime<Utc>,
}

impl Contest {
    /// Create a fresh contest in `NotStarted` with an empty clock.
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            phase: Phase::NotStarted,
            remaining_seconds: 0,
            last_tick_at: now,
        }
    }

    /// Advance the clock to `now`. While `Running`, whole elapsed
    /// seconds are subtracted from the remaining time, clamped at 0;
    /// reaching 0 forces the transition to `Ended`.
    ///
    /// Returns `true` if this tick ended the contest.
    pub fn tick(&mut self, now: DateTime<Utc>) -> bool {
        if self.phase != Phase::Running {
            self.last_tick_at = now;
            return false;
        }

        let elapsed = (now - self.last_tick_at).num_seconds();
        if elapsed <= 0 {
            // Clock went backwards or sub-second poll; nothing to consume.
            return false;
        }

        self.remaining_seconds = (self.remaining_seconds - elapsed).max(0);
        self.last_tick_at += Duration::seconds(elapsed);

        if self.remaining_seconds == 0 {
            self.phase = Phase::Ended;
            return true;
        }
        false
    }

    /// Absolute set of the remaining time, clamped at 0.
    pub fn set_remaining(&mut self, seconds: i64) {
        self.remaining_seconds = seconds.max(0);
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }
}

/// Hint entity - belongs to exactly one case. `released` is the
/// chief-controlled gate; the text is only revealed to a detective
/// through `use_hint`.
#[derive(Debug, Clone)]
pub struct Hint {
    pub id: HintId,
    pub text: String,
    pub point_deduction: u32,
    pub released: bool,
}

impl Hint {
    pub fn new(text: impl Into<String>, point_deduction: u32) -> Self {
        Self {
            id: HintId::new(),
            text: text.into(),
            point_deduction,
            released: false,
        }
    }
}

/// Case entity - a puzzle with a secret flag, point value, and
/// optional hints. The flag never appears in detective-facing reads.
#[derive(Debug, Clone)]
pub struct Case {
    pub id: CaseId,
    pub title: String,
    pub description: String,
    pub points: u32,
    pub flag: String,
    pub attachment: Option<Attachment>,
    pub hints: Vec<Hint>,
    pub created_at: DateTime<Utc>,
}

impl Case {
    pub fn new(draft: CaseDraft, now: DateTime<Utc>) -> Self {
        Self {
            id: CaseId::new(),
            title: draft.title,
            description: draft.description,
            points: draft.points,
            flag: draft.flag,
            attachment: draft.attachment,
            hints: draft
                .hints
                .into_iter()
                .map(|h| Hint::new(h.text, h.point_deduction))
                .collect(),
            created_at: now,
        }
    }

    /// Difficulty is derived from points, never stored.
    pub fn difficulty(&self) -> Difficulty {
        Difficulty::from_points(self.points)
    }

    pub fn hint(&self, hint_id: HintId) -> Option<&Hint> {
        self.hints.iter().find(|h| h.id == hint_id)
    }

    pub fn hint_mut(&mut self, hint_id: HintId) -> Option<&mut Hint> {
        self.hints.iter_mut().find(|h| h.id == hint_id)
    }
}

/// Unvalidated input for case creation. Validation lives in the
/// application layer; the draft is just the shape.
#[derive(Debug, Clone)]
pub struct CaseDraft {
    pub title: String,
    pub description: String,
    pub points: u32,
    pub flag: String,
    pub attachment: Option<Attachment>,
    pub hints: Vec<HintDraft>,
}

#[derive(Debug, Clone)]
pub struct HintDraft {
    pub text: String,
    pub point_deduction: u32,
}

/// A hint consumption charged to a participant. The deduction amount
/// is captured at use time so removing the case later never rewrites
/// history.
#[derive(Debug, Clone, Copy)]
pub struct HintCharge {
    pub deduction: u32,
    pub used_at: DateTime<Utc>,
}

/// ScoreRecord - per (participant, case) ledger of solve status and
/// consumed hints. Created lazily on the first flag attempt or hint
/// use; never deleted during a contest.
#[derive(Debug, Clone)]
pub struct ScoreRecord {
    pub solved: bool,
    /// First success only; repeat correct submissions do not move it.
    pub solved_at: Option<DateTime<Utc>>,
    /// Points captured at solve time (survives case removal).
    pub points_awarded: u32,
    pub hints_used: HashMap<HintId, HintCharge>,
    pub created_at: DateTime<Utc>,
}

impl ScoreRecord {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            solved: false,
            solved_at: None,
            points_awarded: 0,
            hints_used: HashMap::new(),
            created_at: now,
        }
    }

    /// Net contribution of this record: awarded points minus charged
    /// deductions. May be negative.
    pub fn net_score(&self) -> i64 {
        let deductions: i64 = self.hints_used.values().map(|c| c.deduction as i64).sum();
        self.points_awarded as i64 - deductions
    }

    /// Most recent scoring activity on this record, falling back to
    /// creation time when nothing has been scored yet.
    pub fn last_activity(&self) -> DateTime<Utc> {
        let mut last = self.created_at;
        if let Some(solved_at) = self.solved_at {
            last = last.max(solved_at);
        }
        for charge in self.hints_used.values() {
            last = last.max(charge.used_at);
        }
        last
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> CaseDraft {
        CaseDraft {
            title: "Vault".to_string(),
            description: "Open the vault".to_string(),
            points: 200,
            flag: "FLAG{x}".to_string(),
            attachment: None,
            hints: vec![HintDraft {
                text: "Look behind the painting".to_string(),
                point_deduction: 20,
            }],
        }
    }

    #[test]
    fn test_contest_tick_decrements_and_ends() {
        let now = Utc::now();
        let mut contest = Contest::new(now);
        contest.phase = Phase::Running;
        contest.remaining_seconds = 600;

        let ended = contest.tick(now + Duration::seconds(10));
        assert!(!ended);
        assert_eq!(contest.remaining_seconds, 590);

        let ended = contest.tick(now + Duration::seconds(610));
        assert!(ended);
        assert_eq!(contest.remaining_seconds, 0);
        assert_eq!(contest.phase, Phase::Ended);
    }

    #[test]
    fn test_contest_tick_ignores_backwards_clock() {
        let now = Utc::now();
        let mut contest = Contest::new(now);
        contest.phase = Phase::Running;
        contest.remaining_seconds = 600;

        assert!(!contest.tick(now - Duration::seconds(5)));
        assert_eq!(contest.remaining_seconds, 600);
    }

    #[test]
    fn test_contest_tick_outside_running_only_moves_anchor() {
        let now = Utc::now();
        let mut contest = Contest::new(now);
        contest.remaining_seconds = 300;

        assert!(!contest.tick(now + Duration::seconds(60)));
        assert_eq!(contest.remaining_seconds, 300);
        assert_eq!(contest.phase, Phase::NotStarted);
        assert_eq!(contest.last_tick_at, now + Duration::seconds(60));
    }

    #[test]
    fn test_case_creation_from_draft() {
        let case = Case::new(draft(), Utc::now());
        assert_eq!(case.title, "Vault");
        assert_eq!(case.points, 200);
        assert_eq!(case.difficulty(), Difficulty::Medium);
        assert_eq!(case.hints.len(), 1);
        assert!(!case.hints[0].released);
    }

    #[test]
    fn test_score_record_net_and_activity() {
        let now = Utc::now();
        let mut record = ScoreRecord::new(now);
        assert_eq!(record.net_score(), 0);
        assert_eq!(record.last_activity(), now);

        let hint_id = HintId::new();
        record.hints_used.insert(
            hint_id,
            HintCharge {
                deduction: 20,
                used_at: now + Duration::seconds(5),
            },
        );
        assert_eq!(record.net_score(), -20);

        record.solved = true;
        record.solved_at = Some(now + Duration::seconds(30));
        record.points_awarded = 200;
        assert_eq!(record.net_score(), 180);
        assert_eq!(record.last_activity(), now + Duration::seconds(30));
    }
}
