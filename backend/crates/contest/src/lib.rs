//! Contest Session & Scoring Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Contest session, cases, scoring rules, repository trait
//! - `application/` - Use cases
//! - `infra/` - In-memory session store
//! - `presentation/` - HTTP handlers
//!
//! ## Authority Model
//! - Backend is the sole authority for the countdown clock, flag checks, and scoring
//! - Clients poll; they never hold state the server depends on
//! - Identity is asserted by the upstream gateway via forwarded headers
//! - Submissions and hint uses are serialized through one session lock (no double-award)

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::ContestConfig;
pub use error::{ContestError, ContestResult};
pub use infra::memory::InMemorySessionRepository;
pub use presentation::router::{contest_router, contest_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult, OptionExt, ResultExt},
    kind::ErrorKind,
};
