//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - Domain entities (Contest, Case, Hint, ScoreRecord)
//! - Domain value objects (Phase, Role, Actor, Difficulty, Attachment)
//! - Domain services (pure scoring and ranking logic)
//! - The ContestSession aggregate (single owner of all mutable state)
//! - Repository trait (interface)

pub mod entities;
pub mod repository;
pub mod services;
pub mod session;
pub mod value_objects;
