//! API DTOs (Data Transfer Objects)
//!
//! The JSON surface follows the polling dashboards' conventions:
//! camelCase field names and `success` envelopes. The game state
//! collapses to `{phase, remainingSeconds}`; clients derive their
//! started/running booleans from the phase.

use crate::domain::services::Standing;
use crate::domain::session::{CaseView, ContestState, HintOutcome, ScoreSummary, SubmitOutcome};
use crate::domain::value_objects::{Attachment, Difficulty, Phase};
use chrono::{DateTime, Utc};
use kernel::id::{CaseId, HintId};
use serde::{Deserialize, Serialize};

/// Response for GET /game
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameStateResponse {
    pub success: bool,
    pub phase: Phase,
    pub remaining_seconds: i64,
}

impl From<ContestState> for GameStateResponse {
    fn from(state: ContestState) -> Self {
        Self {
            success: true,
            phase: state.phase,
            remaining_seconds: state.remaining_seconds,
        }
    }
}

/// Request for POST /game/start
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartRequest {
    pub timer_seconds: i64,
}

/// Request for POST /game/adjust
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdjustRequest {
    pub delta_seconds: i64,
}

/// Hint projection; `text` is absent for unreleased hints in
/// detective-facing reads.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HintDto {
    pub id: HintId,
    pub point_deduction: u32,
    pub released: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Case projection; `flag` only appears in the chief view.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseDto {
    pub id: CaseId,
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub points: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment: Option<Attachment>,
    pub hints: Vec<HintDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flag: Option<String>,
}

impl From<CaseView> for CaseDto {
    fn from(view: CaseView) -> Self {
        Self {
            id: view.id,
            title: view.title,
            description: view.description,
            difficulty: view.difficulty,
            points: view.points,
            attachment: view.attachment,
            hints: view
                .hints
                .into_iter()
                .map(|h| HintDto {
                    id: h.id,
                    point_deduction: h.point_deduction,
                    released: h.released,
                    text: h.text,
                })
                .collect(),
            flag: view.flag,
        }
    }
}

/// Response for GET /cases
#[derive(Debug, Clone, Serialize)]
pub struct CasesResponse {
    pub success: bool,
    pub cases: Vec<CaseDto>,
}

/// Request for POST /cases
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddCaseRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub points: u32,
    pub flag: String,
    #[serde(default)]
    pub attachment: Option<Attachment>,
    #[serde(default)]
    pub hints: Vec<AddHintRequest>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddHintRequest {
    pub text: String,
    #[serde(default)]
    pub point_deduction: u32,
}

/// Response for POST /cases
#[derive(Debug, Clone, Serialize)]
pub struct CaseCreatedResponse {
    pub success: bool,
    pub case: CaseDto,
}

/// Plain acknowledgement
#[derive(Debug, Clone, Serialize)]
pub struct AckResponse {
    pub success: bool,
}

/// Request for POST /leaderboard/submit
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitRequest {
    pub case_id: CaseId,
    pub flag: String,
}

/// Response for POST /leaderboard/submit
///
/// An incorrect flag is a 200 with `success: false`; only true errors
/// (unknown case, contest not running, role mismatch) use error codes.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points_awarded: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<i64>,
    pub message: String,
}

impl From<SubmitOutcome> for SubmitResponse {
    fn from(outcome: SubmitOutcome) -> Self {
        match outcome {
            SubmitOutcome::Correct {
                points_awarded,
                score,
            } => Self {
                success: true,
                points_awarded: Some(points_awarded),
                score: Some(score),
                message: format!("Case solved: +{} points", points_awarded),
            },
            SubmitOutcome::AlreadySolved { score } => Self {
                success: true,
                points_awarded: Some(0),
                score: Some(score),
                message: "Case already solved; no additional points".to_string(),
            },
            SubmitOutcome::Incorrect => Self {
                success: false,
                points_awarded: None,
                score: None,
                message: "Incorrect flag. Try again!".to_string(),
            },
        }
    }
}

/// Request for POST /leaderboard/use-hint
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UseHintRequest {
    pub case_id: CaseId,
    pub hint_id: HintId,
}

/// Response for POST /leaderboard/use-hint
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UseHintResponse {
    pub success: bool,
    pub hint_text: String,
    pub point_deduction: u32,
    pub already_used: bool,
    pub score: i64,
}

impl From<HintOutcome> for UseHintResponse {
    fn from(outcome: HintOutcome) -> Self {
        Self {
            success: true,
            hint_text: outcome.text,
            point_deduction: outcome.deduction_applied,
            already_used: outcome.already_used,
            score: outcome.score,
        }
    }
}

/// One row of GET /leaderboard
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingDto {
    pub rank: u32,
    pub name: String,
    pub score: i64,
    pub last_updated: DateTime<Utc>,
}

impl From<Standing> for StandingDto {
    fn from(standing: Standing) -> Self {
        Self {
            rank: standing.rank,
            name: standing.name,
            score: standing.score,
            last_updated: standing.last_updated,
        }
    }
}

/// Response for GET /leaderboard
#[derive(Debug, Clone, Serialize)]
pub struct LeaderboardResponse {
    pub success: bool,
    pub leaderboard: Vec<StandingDto>,
}

/// Response for GET /leaderboard/my-score (nested `score` object, as
/// the original dashboard reads `response.score.score`)
#[derive(Debug, Clone, Serialize)]
pub struct MyScoreResponse {
    pub success: bool,
    pub score: ScoreBody,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBody {
    pub score: i64,
    pub solved_count: usize,
}

impl From<ScoreSummary> for MyScoreResponse {
    fn from(summary: ScoreSummary) -> Self {
        Self {
            success: true,
            score: ScoreBody {
                score: summary.score,
                solved_count: summary.solved_count,
            },
        }
    }
}
