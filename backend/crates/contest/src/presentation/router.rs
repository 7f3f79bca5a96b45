//! Contest Router

use crate::application::config::ContestConfig;
use crate::domain::repository::SessionRepository;
use crate::infra::memory::InMemorySessionRepository;
use crate::presentation::handlers::{self, ContestAppState};
use crate::presentation::middleware::require_identity;
use axum::{
    Router, middleware,
    routing::{delete, get, post},
};
use std::sync::Arc;

/// Create the contest router backed by the in-memory session store
pub fn contest_router(config: ContestConfig) -> Router {
    contest_router_generic(InMemorySessionRepository::new(), config)
}

/// Create a generic contest router for any repository implementation
pub fn contest_router_generic<R>(repo: R, config: ContestConfig) -> Router
where
    R: SessionRepository + Clone + Send + Sync + 'static,
{
    let state = ContestAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    Router::new()
        .route("/game", get(handlers::get_game_state::<R>))
        .route("/game/start", post(handlers::start_contest::<R>))
        .route("/game/stop", post(handlers::stop_contest::<R>))
        .route("/game/adjust", post(handlers::adjust_timer::<R>))
        .route(
            "/cases",
            get(handlers::list_cases::<R>).post(handlers::add_case::<R>),
        )
        .route("/cases/{case_id}", delete(handlers::remove_case::<R>))
        .route(
            "/cases/{case_id}/hints/{hint_id}/release",
            post(handlers::release_hint::<R>),
        )
        .route("/leaderboard", get(handlers::get_leaderboard::<R>))
        .route("/leaderboard/my-score", get(handlers::get_my_score::<R>))
        .route("/leaderboard/submit", post(handlers::submit_flag::<R>))
        .route("/leaderboard/use-hint", post(handlers::use_hint::<R>))
        .layer(middleware::from_fn(require_identity))
        .with_state(state)
}
