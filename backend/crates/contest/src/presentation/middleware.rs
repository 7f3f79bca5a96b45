//! Identity Middleware
//!
//! Identity is asserted by the upstream gateway via forwarded
//! headers. This middleware turns them into an [`Actor`] in the
//! request extensions; handlers never parse headers themselves.

use crate::domain::value_objects::{Actor, Role};
use axum::body::Body;
use axum::http::header::HeaderMap;
use axum::http::{Request, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use kernel::id::ParticipantId;
use std::str::FromStr;

pub const SUBJECT_ID_HEADER: &str = "x-subject-id";
pub const SUBJECT_NAME_HEADER: &str = "x-subject-name";
pub const SUBJECT_ROLE_HEADER: &str = "x-subject-role";

/// Middleware that requires identity headers on every request
pub async fn require_identity(
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response> {
    let actor = match extract_actor(req.headers()) {
        Some(actor) => actor,
        None => {
            tracing::debug!("Missing or malformed identity headers");
            return Err((
                StatusCode::UNAUTHORIZED,
                [("X-Identity-Required", "true")],
            )
                .into_response());
        }
    };

    req.extensions_mut().insert(actor);
    Ok(next.run(req).await)
}

fn extract_actor(headers: &HeaderMap) -> Option<Actor> {
    let subject_id = headers
        .get(SUBJECT_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| ParticipantId::from_str(s).ok())?;

    let role = headers
        .get(SUBJECT_ROLE_HEADER)
        .and_then(|v| v.to_str().ok())
        .and_then(Role::from_code)?;

    let name = headers
        .get(SUBJECT_NAME_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_default();

    Some(Actor {
        subject_id,
        name,
        role,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use uuid::Uuid;

    fn headers(id: Option<&str>, name: Option<&str>, role: Option<&str>) -> HeaderMap {
        let mut map = HeaderMap::new();
        if let Some(v) = id {
            map.insert(SUBJECT_ID_HEADER, HeaderValue::from_str(v).unwrap());
        }
        if let Some(v) = name {
            map.insert(SUBJECT_NAME_HEADER, HeaderValue::from_str(v).unwrap());
        }
        if let Some(v) = role {
            map.insert(SUBJECT_ROLE_HEADER, HeaderValue::from_str(v).unwrap());
        }
        map
    }

    #[test]
    fn extracts_full_identity() {
        let id = Uuid::new_v4().to_string();
        let map = headers(Some(&id), Some("Holmes"), Some("detective"));
        let actor = extract_actor(&map).unwrap();
        assert_eq!(actor.subject_id.to_string(), id);
        assert_eq!(actor.name, "Holmes");
        assert_eq!(actor.role, Role::Detective);
    }

    #[test]
    fn name_is_optional() {
        let id = Uuid::new_v4().to_string();
        let map = headers(Some(&id), None, Some("chief"));
        let actor = extract_actor(&map).unwrap();
        assert!(actor.name.is_empty());
        assert_eq!(actor.role, Role::Chief);
    }

    #[test]
    fn rejects_missing_subject_id() {
        let map = headers(None, Some("Holmes"), Some("detective"));
        assert!(extract_actor(&map).is_none());
    }

    #[test]
    fn rejects_garbled_subject_id() {
        let map = headers(Some("not-a-uuid"), None, Some("detective"));
        assert!(extract_actor(&map).is_none());
    }

    #[test]
    fn rejects_unknown_role() {
        let id = Uuid::new_v4().to_string();
        let map = headers(Some(&id), None, Some("admin"));
        assert!(extract_actor(&map).is_none());
    }
}
