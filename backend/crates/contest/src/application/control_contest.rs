//! Contest Control Use Case
//!
//! Start/stop transitions and timer adjustments (chief-only), plus the
//! state read every client polls.

use crate::application::config::ContestConfig;
use crate::application::require_chief;
use crate::domain::repository::SessionRepository;
use crate::domain::session::ContestState;
use crate::domain::value_objects::Actor;
use crate::error::{ContestError, ContestResult};
use std::sync::Arc;

/// Contest Control Use Case
pub struct ControlContestUseCase<R>
where
    R: SessionRepository,
{
    repo: Arc<R>,
    config: Arc<ContestConfig>,
}

impl<R> ControlContestUseCase<R>
where
    R: SessionRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<ContestConfig>) -> Self {
        Self { repo, config }
    }

    /// Readable by any role; clients poll this.
    pub async fn get_state(&self) -> ContestResult<ContestState> {
        self.repo.state().await
    }

    pub async fn start(&self, actor: &Actor, initial_seconds: i64) -> ContestResult<ContestState> {
        require_chief(actor)?;

        if initial_seconds > self.config.max_timer_seconds() {
            return Err(ContestError::Validation(format!(
                "timer exceeds the maximum of {} seconds",
                self.config.max_timer_seconds()
            )));
        }

        let state = self.repo.start(initial_seconds).await?;
        tracing::info!(chief = %actor.subject_id, initial_seconds, "Contest start accepted");
        Ok(state)
    }

    pub async fn stop(&self, actor: &Actor) -> ContestResult<ContestState> {
        require_chief(actor)?;
        let state = self.repo.stop().await?;
        tracing::info!(chief = %actor.subject_id, "Contest stop accepted");
        Ok(state)
    }

    pub async fn adjust_time(&self, actor: &Actor, delta_seconds: i64) -> ContestResult<ContestState> {
        require_chief(actor)?;

        if delta_seconds.checked_abs().is_none_or(|d| d > self.config.max_timer_seconds()) {
            return Err(ContestError::Validation(format!(
                "adjustment exceeds the maximum of {} seconds",
                self.config.max_timer_seconds()
            )));
        }

        let state = self.repo.adjust_time(delta_seconds).await?;
        tracing::info!(
            chief = %actor.subject_id,
            delta_seconds,
            remaining = state.remaining_seconds,
            "Timer adjustment accepted"
        );
        Ok(state)
    }
}
