//! HTTP Handlers

use crate::application::config::ContestConfig;
use crate::application::control_contest::ControlContestUseCase;
use crate::application::curate_cases::{AddCaseInput, AddHintInput, CurateCasesUseCase};
use crate::application::solve_cases::{SolveCasesUseCase, SubmitFlagInput};
use crate::application::standings::StandingsUseCase;
use crate::domain::repository::SessionRepository;
use crate::domain::value_objects::Actor;
use crate::error::ContestResult;
use crate::presentation::dto::{
    AckResponse, AddCaseRequest, AdjustRequest, CaseCreatedResponse, CaseDto, CasesResponse,
    GameStateResponse, LeaderboardResponse, MyScoreResponse, StartRequest, SubmitRequest,
    SubmitResponse, UseHintRequest, UseHintResponse,
};
use axum::Json;
use axum::extract::{Path, State};
use kernel::id::{CaseId, HintId};
use std::sync::Arc;

/// Shared state for contest handlers
#[derive(Clone)]
pub struct ContestAppState<R>
where
    R: SessionRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<ContestConfig>,
}

/// GET /api/game
pub async fn get_game_state<R>(
    State(state): State<ContestAppState<R>>,
) -> ContestResult<Json<GameStateResponse>>
where
    R: SessionRepository + Clone + Send + Sync + 'static,
{
    let use_case = ControlContestUseCase::new(state.repo.clone(), state.config.clone());
    let current = use_case.get_state().await?;
    Ok(Json(current.into()))
}

/// POST /api/game/start
pub async fn start_contest<R>(
    State(state): State<ContestAppState<R>>,
    axum::Extension(actor): axum::Extension<Actor>,
    Json(req): Json<StartRequest>,
) -> ContestResult<Json<GameStateResponse>>
where
    R: SessionRepository + Clone + Send + Sync + 'static,
{
    let use_case = ControlContestUseCase::new(state.repo.clone(), state.config.clone());
    let current = use_case.start(&actor, req.timer_seconds).await?;
    Ok(Json(current.into()))
}

/// POST /api/game/stop
pub async fn stop_contest<R>(
    State(state): State<ContestAppState<R>>,
    axum::Extension(actor): axum::Extension<Actor>,
) -> ContestResult<Json<GameStateResponse>>
where
    R: SessionRepository + Clone + Send + Sync + 'static,
{
    let use_case = ControlContestUseCase::new(state.repo.clone(), state.config.clone());
    let current = use_case.stop(&actor).await?;
    Ok(Json(current.into()))
}

/// POST /api/game/adjust
pub async fn adjust_timer<R>(
    State(state): State<ContestAppState<R>>,
    axum::Extension(actor): axum::Extension<Actor>,
    Json(req): Json<AdjustRequest>,
) -> ContestResult<Json<GameStateResponse>>
where
    R: SessionRepository + Clone + Send + Sync + 'static,
{
    let use_case = ControlContestUseCase::new(state.repo.clone(), state.config.clone());
    let current = use_case.adjust_time(&actor, req.delta_seconds).await?;
    Ok(Json(current.into()))
}

/// GET /api/cases
pub async fn list_cases<R>(
    State(state): State<ContestAppState<R>>,
    axum::Extension(actor): axum::Extension<Actor>,
) -> ContestResult<Json<CasesResponse>>
where
    R: SessionRepository + Clone + Send + Sync + 'static,
{
    let use_case = CurateCasesUseCase::new(state.repo.clone(), state.config.clone());
    let cases = use_case.list_cases(&actor).await?;
    Ok(Json(CasesResponse {
        success: true,
        cases: cases.into_iter().map(CaseDto::from).collect(),
    }))
}

/// POST /api/cases
pub async fn add_case<R>(
    State(state): State<ContestAppState<R>>,
    axum::Extension(actor): axum::Extension<Actor>,
    Json(req): Json<AddCaseRequest>,
) -> ContestResult<Json<CaseCreatedResponse>>
where
    R: SessionRepository + Clone + Send + Sync + 'static,
{
    let use_case = CurateCasesUseCase::new(state.repo.clone(), state.config.clone());
    let input = AddCaseInput {
        title: req.title,
        description: req.description,
        points: req.points,
        flag: req.flag,
        attachment: req.attachment,
        hints: req
            .hints
            .into_iter()
            .map(|h| AddHintInput {
                text: h.text,
                point_deduction: h.point_deduction,
            })
            .collect(),
    };
    let created = use_case.add_case(&actor, input).await?;
    Ok(Json(CaseCreatedResponse {
        success: true,
        case: created.into(),
    }))
}

/// DELETE /api/cases/{case_id}
pub async fn remove_case<R>(
    State(state): State<ContestAppState<R>>,
    axum::Extension(actor): axum::Extension<Actor>,
    Path(case_id): Path<CaseId>,
) -> ContestResult<Json<AckResponse>>
where
    R: SessionRepository + Clone + Send + Sync + 'static,
{
    let use_case = CurateCasesUseCase::new(state.repo.clone(), state.config.clone());
    use_case.remove_case(&actor, case_id).await?;
    Ok(Json(AckResponse { success: true }))
}

/// POST /api/cases/{case_id}/hints/{hint_id}/release
pub async fn release_hint<R>(
    State(state): State<ContestAppState<R>>,
    axum::Extension(actor): axum::Extension<Actor>,
    Path((case_id, hint_id)): Path<(CaseId, HintId)>,
) -> ContestResult<Json<AckResponse>>
where
    R: SessionRepository + Clone + Send + Sync + 'static,
{
    let use_case = CurateCasesUseCase::new(state.repo.clone(), state.config.clone());
    use_case.release_hint(&actor, case_id, hint_id).await?;
    Ok(Json(AckResponse { success: true }))
}

/// GET /api/leaderboard
pub async fn get_leaderboard<R>(
    State(state): State<ContestAppState<R>>,
) -> ContestResult<Json<LeaderboardResponse>>
where
    R: SessionRepository + Clone + Send + Sync + 'static,
{
    let use_case = StandingsUseCase::new(state.repo.clone());
    let standings = use_case.leaderboard().await?;
    Ok(Json(LeaderboardResponse {
        success: true,
        leaderboard: standings.into_iter().map(Into::into).collect(),
    }))
}

/// GET /api/leaderboard/my-score
pub async fn get_my_score<R>(
    State(state): State<ContestAppState<R>>,
    axum::Extension(actor): axum::Extension<Actor>,
) -> ContestResult<Json<MyScoreResponse>>
where
    R: SessionRepository + Clone + Send + Sync + 'static,
{
    let use_case = StandingsUseCase::new(state.repo.clone());
    let summary = use_case.my_score(&actor).await?;
    Ok(Json(summary.into()))
}

/// POST /api/leaderboard/submit
pub async fn submit_flag<R>(
    State(state): State<ContestAppState<R>>,
    axum::Extension(actor): axum::Extension<Actor>,
    Json(req): Json<SubmitRequest>,
) -> ContestResult<Json<SubmitResponse>>
where
    R: SessionRepository + Clone + Send + Sync + 'static,
{
    let use_case = SolveCasesUseCase::new(state.repo.clone());
    let outcome = use_case
        .submit_flag(
            &actor,
            SubmitFlagInput {
                case_id: req.case_id,
                flag: req.flag,
            },
        )
        .await?;
    Ok(Json(outcome.into()))
}

/// POST /api/leaderboard/use-hint
pub async fn use_hint<R>(
    State(state): State<ContestAppState<R>>,
    axum::Extension(actor): axum::Extension<Actor>,
    Json(req): Json<UseHintRequest>,
) -> ContestResult<Json<UseHintResponse>>
where
    R: SessionRepository + Clone + Send + Sync + 'static,
{
    let use_case = SolveCasesUseCase::new(state.repo.clone());
    let outcome = use_case.use_hint(&actor, req.case_id, req.hint_id).await?;
    Ok(Json(outcome.into()))
}
