//! Custom Axum extractors

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use serde_json::Value;
use uuid::Uuid;

use super::error::ApiError;
use crate::models::{NewClan, ValidationError};

/// Extract a clan id from the path.
///
/// A segment that is not a UUID can never name a clan, so it is rejected
/// as not found rather than as bad input.
pub struct ClanId(pub Uuid);

impl<S> FromRequestParts<S> for ClanId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| not_found(String::new()))?;

        match parse_clan_id(&id) {
            Some(uuid) => Ok(Self(uuid)),
            None => Err(not_found(id)),
        }
    }
}

/// Only the canonical hyphenated form names a clan; simple, braced and
/// `urn:uuid:` spellings are left unmatched.
fn parse_clan_id(id: &str) -> Option<Uuid> {
    if id.len() != 36 {
        return None;
    }
    Uuid::try_parse(id).ok()
}

fn not_found(id: String) -> ApiError {
    ApiError::NotFound {
        resource: "Clan",
        id,
    }
}

/// Extract and validate a create-clan body.
///
/// Missing, unreadable, or non-JSON bodies are all reported as a missing
/// name; nothing reaches the store unless a `NewClan` could be built.
pub struct ValidNewClan(pub NewClan);

impl<S> FromRequest<S> for ValidNewClan
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let missing_name = || ApiError::Validation(ValidationError::Required { field: "name" });

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|_| missing_name())?;
        let body: Value = serde_json::from_slice(&bytes).map_err(|_| missing_name())?;

        Ok(Self(NewClan::from_json(&body)?))
    }
}
