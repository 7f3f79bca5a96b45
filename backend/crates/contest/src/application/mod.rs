//! Application Layer - Use Cases
//!
//! This layer orchestrates domain logic and infrastructure: role
//! authorization, input validation, and store access. Roles arrive
//! asserted by the external identity collaborator and are checked
//! here, never re-derived.

pub mod config;
pub mod control_contest;
pub mod curate_cases;
pub mod solve_cases;
pub mod standings;

use crate::domain::value_objects::Actor;
use crate::error::{ContestError, ContestResult};

/// Guard for chief-only operations.
pub(crate) fn require_chief(actor: &Actor) -> ContestResult<()> {
    if actor.role.is_chief() {
        Ok(())
    } else {
        Err(ContestError::Unauthorized("chief"))
    }
}

/// Guard for detective-only operations.
pub(crate) fn require_detective(actor: &Actor) -> ContestResult<()> {
    if actor.role.is_chief() {
        Err(ContestError::Unauthorized("detective"))
    } else {
        Ok(())
    }
}
