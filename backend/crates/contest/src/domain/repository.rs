//! Repository Traits
//!
//! Interface to the contest session store. Implementation is in the
//! infrastructure layer. Every method is atomic with respect to every
//! other: the implementation serializes access to the session
//! aggregate (one critical section per call).

use crate::domain::entities::CaseDraft;
use crate::domain::services::Standing;
use crate::domain::session::{
    CaseView, ContestState, HintOutcome, ScoreSummary, SubmitOutcome,
};
use crate::domain::value_objects::Role;
use crate::error::ContestResult;
use kernel::id::{CaseId, HintId, ParticipantId};

/// Contest session repository trait
#[trait_variant::make(SessionRepository: Send)]
pub trait LocalSessionRepository {
    /// Current phase and remaining seconds (applies clock decay)
    async fn state(&self) -> ContestResult<ContestState>;

    /// Start the contest with the given timer
    async fn start(&self, initial_seconds: i64) -> ContestResult<ContestState>;

    /// Stop the contest early
    async fn stop(&self) -> ContestResult<ContestState>;

    /// Add (or subtract) remaining time
    async fn adjust_time(&self, delta_seconds: i64) -> ContestResult<ContestState>;

    /// Create a case from a validated draft
    async fn add_case(&self, draft: CaseDraft) -> ContestResult<CaseView>;

    /// Remove a case from future visibility (history is preserved)
    async fn remove_case(&self, case_id: CaseId) -> ContestResult<()>;

    /// Release a hint to detectives (idempotent)
    async fn release_hint(&self, case_id: CaseId, hint_id: HintId) -> ContestResult<()>;

    /// List cases, redacted according to the given role
    async fn list_cases(&self, role: Role) -> ContestResult<Vec<CaseView>>;

    /// Validate and score a flag submission
    async fn submit_flag(
        &self,
        participant_id: ParticipantId,
        participant_name: &str,
        case_id: CaseId,
        candidate: &str,
    ) -> ContestResult<SubmitOutcome>;

    /// Consume a released hint (deduction charged at most once)
    async fn use_hint(
        &self,
        participant_id: ParticipantId,
        participant_name: &str,
        case_id: CaseId,
        hint_id: HintId,
    ) -> ContestResult<HintOutcome>;

    /// Recompute the full leaderboard
    async fn leaderboard(&self) -> ContestResult<Vec<Standing>>;

    /// One participant's score summary (never NotFound)
    async fn my_score(&self, participant_id: ParticipantId) -> ContestResult<ScoreSummary>;
}
