//! Domain Services
//!
//! Pure scoring and ranking logic. Everything here is deterministic
//! over its inputs; the session aggregate supplies the state.

use crate::domain::entities::ScoreRecord;
use chrono::{DateTime, Utc};
use kernel::id::ParticipantId;

/// Exact, case-sensitive flag comparison. No partial credit, no
/// normalization; trimming is the submitting client's business.
pub fn flag_matches(secret: &str, candidate: &str) -> bool {
    secret == candidate
}

/// Aggregate of one participant's score history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    pub score: i64,
    pub solved_count: usize,
    pub last_updated: DateTime<Utc>,
}

/// Fold a participant's records into a tally: sum of awarded points
/// minus sum of charged deductions (no floor; the total may go
/// negative), the number of solved cases, and the most recent
/// scoring activity.
///
/// Returns `None` for an empty history.
pub fn tally<'a>(records: impl IntoIterator<Item = &'a ScoreRecord>) -> Option<Tally> {
    let mut iter = records.into_iter();
    let first = iter.next()?;

    let mut out = Tally {
        score: first.net_score(),
        solved_count: usize::from(first.solved),
        last_updated: first.last_activity(),
    };
    for record in iter {
        out.score += record.net_score();
        out.solved_count += usize::from(record.solved);
        out.last_updated = out.last_updated.max(record.last_activity());
    }
    Some(out)
}

/// One ranked leaderboard row.
#[derive(Debug, Clone)]
pub struct Standing {
    pub rank: u32,
    pub participant_id: ParticipantId,
    pub name: String,
    pub score: i64,
    pub last_updated: DateTime<Utc>,
}

/// Order participants into standings: rank 1 = highest score, ties
/// broken by earlier `last_updated` (whoever reached the score first
/// ranks higher).
pub fn rank_standings(
    mut entries: Vec<(ParticipantId, String, Tally)>,
) -> Vec<Standing> {
    entries.sort_by(|a, b| {
        b.2.score
            .cmp(&a.2.score)
            .then_with(|| a.2.last_updated.cmp(&b.2.last_updated))
    });

    entries
        .into_iter()
        .enumerate()
        .map(|(i, (participant_id, name, t))| Standing {
            rank: i as u32 + 1,
            participant_id,
            name,
            score: t.score,
            last_updated: t.last_updated,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::HintCharge;
    use chrono::Duration;
    use kernel::id::HintId;

    #[test]
    fn test_flag_matches_is_exact() {
        assert!(flag_matches("FLAG{x}", "FLAG{x}"));
        assert!(!flag_matches("FLAG{x}", "flag{x}"));
        assert!(!flag_matches("FLAG{x}", "FLAG{x} "));
        assert!(!flag_matches("FLAG{x}", ""));
    }

    #[test]
    fn test_tally_empty_history() {
        assert_eq!(tally(std::iter::empty()), None);
    }

    #[test]
    fn test_tally_sums_awards_and_deductions() {
        let now = Utc::now();

        let mut solved = ScoreRecord::new(now);
        solved.solved = true;
        solved.solved_at = Some(now + Duration::seconds(60));
        solved.points_awarded = 200;

        let mut hinted = ScoreRecord::new(now);
        hinted.hints_used.insert(
            HintId::new(),
            HintCharge {
                deduction: 50,
                used_at: now + Duration::seconds(90),
            },
        );

        let t = tally([&solved, &hinted]).unwrap();
        assert_eq!(t.score, 150);
        assert_eq!(t.solved_count, 1);
        assert_eq!(t.last_updated, now + Duration::seconds(90));
    }

    #[test]
    fn test_tally_may_go_negative() {
        let now = Utc::now();
        let mut record = ScoreRecord::new(now);
        record.hints_used.insert(
            HintId::new(),
            HintCharge {
                deduction: 20,
                used_at: now,
            },
        );

        assert_eq!(tally([&record]).unwrap().score, -20);
    }

    #[test]
    fn test_rank_orders_by_score_then_earlier_activity() {
        let now = Utc::now();
        let t = |score: i64, at: i64| Tally {
            score,
            solved_count: 0,
            last_updated: now + Duration::seconds(at),
        };

        let a = ParticipantId::new();
        let b = ParticipantId::new();
        let c = ParticipantId::new();

        let standings = rank_standings(vec![
            (a, "alice".to_string(), t(100, 50)),
            (b, "bob".to_string(), t(300, 10)),
            (c, "carol".to_string(), t(100, 20)),
        ]);

        assert_eq!(standings.len(), 3);
        assert_eq!(standings[0].participant_id, b);
        assert_eq!(standings[0].rank, 1);
        // carol and alice tie at 100; carol got there first
        assert_eq!(standings[1].participant_id, c);
        assert_eq!(standings[1].rank, 2);
        assert_eq!(standings[2].participant_id, a);
        assert_eq!(standings[2].rank, 3);
    }
}
