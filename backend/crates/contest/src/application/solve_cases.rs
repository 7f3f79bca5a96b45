//! Case Solving Use Case
//!
//! Detective-only play operations: flag submission and hint
//! consumption. Idempotence lives in the domain; this layer only
//! authorizes and forwards.

use crate::application::require_detective;
use crate::domain::repository::SessionRepository;
use crate::domain::session::{HintOutcome, SubmitOutcome};
use crate::domain::value_objects::Actor;
use crate::error::ContestResult;
use kernel::id::{CaseId, HintId};
use std::sync::Arc;

/// Input DTO for submit flag
#[derive(Debug, Clone)]
pub struct SubmitFlagInput {
    pub case_id: CaseId,
    pub flag: String,
}

/// Case Solving Use Case
pub struct SolveCasesUseCase<R>
where
    R: SessionRepository,
{
    repo: Arc<R>,
}

impl<R> SolveCasesUseCase<R>
where
    R: SessionRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn submit_flag(
        &self,
        actor: &Actor,
        input: SubmitFlagInput,
    ) -> ContestResult<SubmitOutcome> {
        require_detective(actor)?;

        let outcome = self
            .repo
            .submit_flag(actor.subject_id, &actor.name, input.case_id, &input.flag)
            .await?;

        if let SubmitOutcome::Correct { points_awarded, .. } = &outcome {
            tracing::info!(
                detective = %actor.subject_id,
                case_id = %input.case_id,
                points_awarded,
                "Flag accepted"
            );
        }
        Ok(outcome)
    }

    pub async fn use_hint(
        &self,
        actor: &Actor,
        case_id: CaseId,
        hint_id: HintId,
    ) -> ContestResult<HintOutcome> {
        require_detective(actor)?;

        self.repo
            .use_hint(actor.subject_id, &actor.name, case_id, hint_id)
            .await
    }
}
