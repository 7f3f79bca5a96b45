//! In-Memory Repository Implementation
//!
//! The contest engine's store is the session aggregate behind a single
//! async mutex: one lock per operation makes every repository call an
//! atomic critical section, which is exactly the "one serialized
//! actor" model the engine's idempotence guarantees rely on. Readers
//! poll; staleness up to one polling interval is expected.

use crate::domain::entities::CaseDraft;
use crate::domain::repository::SessionRepository;
use crate::domain::services::Standing;
use crate::domain::session::{
    CaseView, ContestSession, ContestState, HintOutcome, ScoreSummary, SubmitOutcome,
};
use crate::domain::value_objects::Role;
use crate::error::ContestResult;
use chrono::Utc;
use kernel::id::{CaseId, HintId, ParticipantId};
use std::sync::Arc;
use tokio::sync::Mutex;

/// In-memory session store. Cloning shares the same session.
#[derive(Clone)]
pub struct InMemorySessionRepository {
    inner: Arc<Mutex<ContestSession>>,
}

impl InMemorySessionRepository {
    /// Create a store owning a fresh `NotStarted` contest.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(ContestSession::new(Utc::now()))),
        }
    }

    /// Discard all state and begin a fresh contest instance.
    pub async fn reset(&self) {
        let mut session = self.inner.lock().await;
        *session = ContestSession::new(Utc::now());
        tracing::info!("Contest session reset");
    }
}

impl Default for InMemorySessionRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionRepository for InMemorySessionRepository {
    async fn state(&self) -> ContestResult<ContestState> {
        let mut session = self.inner.lock().await;
        Ok(session.state(Utc::now()))
    }

    async fn start(&self, initial_seconds: i64) -> ContestResult<ContestState> {
        let mut session = self.inner.lock().await;
        session.start(initial_seconds, Utc::now())
    }

    async fn stop(&self) -> ContestResult<ContestState> {
        let mut session = self.inner.lock().await;
        session.stop(Utc::now())
    }

    async fn adjust_time(&self, delta_seconds: i64) -> ContestResult<ContestState> {
        let mut session = self.inner.lock().await;
        session.adjust_time(delta_seconds, Utc::now())
    }

    async fn add_case(&self, draft: CaseDraft) -> ContestResult<CaseView> {
        let mut session = self.inner.lock().await;
        Ok(session.add_case(draft, Utc::now()))
    }

    async fn remove_case(&self, case_id: CaseId) -> ContestResult<()> {
        let mut session = self.inner.lock().await;
        session.remove_case(case_id)
    }

    async fn release_hint(&self, case_id: CaseId, hint_id: HintId) -> ContestResult<()> {
        let mut session = self.inner.lock().await;
        session.release_hint(case_id, hint_id)
    }

    async fn list_cases(&self, role: Role) -> ContestResult<Vec<CaseView>> {
        let session = self.inner.lock().await;
        Ok(session.list_cases(role))
    }

    async fn submit_flag(
        &self,
        participant_id: ParticipantId,
        participant_name: &str,
        case_id: CaseId,
        candidate: &str,
    ) -> ContestResult<SubmitOutcome> {
        let mut session = self.inner.lock().await;
        session.submit_flag(participant_id, participant_name, case_id, candidate, Utc::now())
    }

    async fn use_hint(
        &self,
        participant_id: ParticipantId,
        participant_name: &str,
        case_id: CaseId,
        hint_id: HintId,
    ) -> ContestResult<HintOutcome> {
        let mut session = self.inner.lock().await;
        session.use_hint(participant_id, participant_name, case_id, hint_id, Utc::now())
    }

    async fn leaderboard(&self) -> ContestResult<Vec<Standing>> {
        let session = self.inner.lock().await;
        Ok(session.leaderboard())
    }

    async fn my_score(&self, participant_id: ParticipantId) -> ContestResult<ScoreSummary> {
        let session = self.inner.lock().await;
        Ok(session.my_score(participant_id))
    }
}
