//! Case Curation Use Case
//!
//! Chief-owned registry mutations (add/remove cases, release hints)
//! and the role-redacted case listing both dashboards poll.

use crate::application::config::ContestConfig;
use crate::application::require_chief;
use crate::domain::entities::{CaseDraft, HintDraft};
use crate::domain::repository::SessionRepository;
use crate::domain::session::CaseView;
use crate::domain::value_objects::{Actor, Attachment};
use crate::error::{ContestError, ContestResult};
use kernel::id::{CaseId, HintId};
use std::sync::Arc;

/// Input DTO for add case
#[derive(Debug, Clone)]
pub struct AddCaseInput {
    pub title: String,
    pub description: String,
    pub points: u32,
    pub flag: String,
    pub attachment: Option<Attachment>,
    pub hints: Vec<AddHintInput>,
}

#[derive(Debug, Clone)]
pub struct AddHintInput {
    pub text: String,
    pub point_deduction: u32,
}

/// Case Curation Use Case
pub struct CurateCasesUseCase<R>
where
    R: SessionRepository,
{
    repo: Arc<R>,
    config: Arc<ContestConfig>,
}

impl<R> CurateCasesUseCase<R>
where
    R: SessionRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<ContestConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn add_case(&self, actor: &Actor, input: AddCaseInput) -> ContestResult<CaseView> {
        require_chief(actor)?;
        let draft = self.validate(input)?;

        let view = self.repo.add_case(draft).await?;
        tracing::info!(chief = %actor.subject_id, case_id = %view.id, "Case creation accepted");
        Ok(view)
    }

    pub async fn remove_case(&self, actor: &Actor, case_id: CaseId) -> ContestResult<()> {
        require_chief(actor)?;
        self.repo.remove_case(case_id).await?;
        tracing::info!(chief = %actor.subject_id, case_id = %case_id, "Case removal accepted");
        Ok(())
    }

    pub async fn release_hint(
        &self,
        actor: &Actor,
        case_id: CaseId,
        hint_id: HintId,
    ) -> ContestResult<()> {
        require_chief(actor)?;
        self.repo.release_hint(case_id, hint_id).await?;
        tracing::info!(
            chief = %actor.subject_id,
            case_id = %case_id,
            hint_id = %hint_id,
            "Hint release accepted"
        );
        Ok(())
    }

    /// Any role may list; redaction follows the caller's role.
    pub async fn list_cases(&self, actor: &Actor) -> ContestResult<Vec<CaseView>> {
        self.repo.list_cases(actor.role).await
    }

    fn validate(&self, input: AddCaseInput) -> ContestResult<CaseDraft> {
        let title = input.title.trim().to_string();
        if title.is_empty() {
            return Err(ContestError::Validation("title must not be empty".into()));
        }
        if title.chars().count() > self.config.max_title_len {
            return Err(ContestError::Validation(format!(
                "title exceeds {} characters",
                self.config.max_title_len
            )));
        }
        if input.description.chars().count() > self.config.max_description_len {
            return Err(ContestError::Validation(format!(
                "description exceeds {} characters",
                self.config.max_description_len
            )));
        }
        if input.points == 0 {
            return Err(ContestError::Validation("points must be positive".into()));
        }
        if input.flag.trim().is_empty() {
            return Err(ContestError::Validation("flag must not be empty".into()));
        }
        if input.flag.chars().count() > self.config.max_flag_len {
            return Err(ContestError::Validation(format!(
                "flag exceeds {} characters",
                self.config.max_flag_len
            )));
        }
        if input.hints.len() > self.config.max_hints_per_case {
            return Err(ContestError::Validation(format!(
                "at most {} hints per case",
                self.config.max_hints_per_case
            )));
        }

        let mut hints = Vec::with_capacity(input.hints.len());
        for hint in input.hints {
            let text = hint.text.trim().to_string();
            if text.is_empty() {
                return Err(ContestError::Validation(
                    "hint text must not be empty".into(),
                ));
            }
            hints.push(HintDraft {
                text,
                point_deduction: hint.point_deduction,
            });
        }

        Ok(CaseDraft {
            title,
            description: input.description,
            points: input.points,
            // The flag is stored exactly as entered; matching is exact.
            flag: input.flag,
            attachment: input.attachment,
            hints,
        })
    }
}
