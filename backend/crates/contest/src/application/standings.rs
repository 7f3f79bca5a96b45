//! Standings Use Case
//!
//! Leaderboard reads. The board is recomputed in full on every call;
//! clients poll it, nothing is pushed.

use crate::application::require_detective;
use crate::domain::repository::SessionRepository;
use crate::domain::services::Standing;
use crate::domain::session::ScoreSummary;
use crate::domain::value_objects::Actor;
use crate::error::ContestResult;
use std::sync::Arc;

/// Standings Use Case
pub struct StandingsUseCase<R>
where
    R: SessionRepository,
{
    repo: Arc<R>,
}

impl<R> StandingsUseCase<R>
where
    R: SessionRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Readable by any role.
    pub async fn leaderboard(&self) -> ContestResult<Vec<Standing>> {
        self.repo.leaderboard().await
    }

    /// A detective's own running score.
    pub async fn my_score(&self, actor: &Actor) -> ContestResult<ScoreSummary> {
        require_detective(actor)?;
        self.repo.my_score(actor.subject_id).await
    }
}
