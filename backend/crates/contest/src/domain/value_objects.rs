//! Domain Value Objects
//!
//! Immutable value types for the contest domain.

use kernel::id::ParticipantId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Contest lifecycle phase. Transitions are monotonic:
/// `NotStarted -> Running -> Ended`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Phase {
    NotStarted,
    Running,
    Ended,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Phase::NotStarted => "notStarted",
            Phase::Running => "running",
            Phase::Ended => "ended",
        })
    }
}

/// Participant role, asserted by the external identity collaborator.
/// The engine trusts the assertion and never re-derives it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Detective,
    Chief,
}

impl Role {
    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            Role::Detective => "detective",
            Role::Chief => "chief",
        }
    }

    #[inline]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "detective" => Some(Role::Detective),
            "chief" => Some(Role::Chief),
            _ => None,
        }
    }

    #[inline]
    pub const fn is_chief(&self) -> bool {
        matches!(self, Role::Chief)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// The authenticated caller of an operation: subject identity plus
/// display name and role, as supplied by the upstream identity
/// collaborator.
#[derive(Debug, Clone)]
pub struct Actor {
    pub subject_id: ParticipantId,
    pub name: String,
    pub role: Role,
}

impl Actor {
    pub fn new(subject_id: ParticipantId, name: impl Into<String>, role: Role) -> Self {
        Self {
            subject_id,
            name: name.into(),
            role,
        }
    }
}

/// Case difficulty, derived from the point value. Never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// points >= 300 => Hard; points >= 150 => Medium; else Easy
    pub const fn from_points(points: u32) -> Self {
        if points >= 300 {
            Difficulty::Hard
        } else if points >= 150 {
            Difficulty::Medium
        } else {
            Difficulty::Easy
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        })
    }
}

/// Kind of supporting material attached to a case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttachmentKind {
    Link,
    File,
}

/// Supporting material for a case. The locator is produced elsewhere
/// (a URL or an uploaded-file reference); the engine carries it opaquely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub kind: AttachmentKind,
    pub name: String,
    pub locator: String,
}
