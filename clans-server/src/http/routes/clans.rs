//! Clan endpoints
//!
//! Each handler makes exactly one store call, so a request holds at most one
//! pooled connection and only for the duration of that call.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::{NaiveDateTime, Timelike};
use serde::Serialize;
use uuid::Uuid;

use crate::db::repos::Clan;
use crate::http::error::ApiError;
use crate::http::extractors::{ClanId, ValidNewClan};
use crate::models::ClanQuery;
use crate::state::AppState;

/// Clan response
#[derive(Debug, Serialize)]
pub struct ClanResponse {
    pub id: Uuid,
    pub name: String,
    pub region: Option<String>,
    pub created_at: String,
}

impl From<Clan> for ClanResponse {
    fn from(c: Clan) -> Self {
        Self {
            id: c.id,
            name: c.name,
            region: c.region,
            created_at: format_created_at(c.created_at),
        }
    }
}

/// Render a stored UTC timestamp as ISO-8601 with a `Z` suffix.
///
/// Fractional seconds appear (as microseconds) only when present.
pub fn format_created_at(ts: NaiveDateTime) -> String {
    if ts.nanosecond() == 0 {
        ts.format("%Y-%m-%dT%H:%M:%SZ").to_string()
    } else {
        ts.format("%Y-%m-%dT%H:%M:%S%.6fZ").to_string()
    }
}

#[derive(Serialize)]
pub struct CreatedResponse {
    pub id: Uuid,
    pub message: &'static str,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// List query params
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ListClansParams {
    pub region: Option<String>,
    pub sort: Option<String>,
}

impl ListClansParams {
    /// Collect from raw query pairs. The first value of a repeated
    /// parameter wins and unknown parameters are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "region" => &mut params.region,
                "sort" => &mut params.sort,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        params
    }
}

impl From<ListClansParams> for ClanQuery {
    fn from(p: ListClansParams) -> Self {
        ClanQuery::new(p.region, p.sort.as_deref())
    }
}

/// POST /clans - create a clan
async fn create_clan(
    State(state): State<AppState>,
    ValidNewClan(clan): ValidNewClan,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    state.store().create(&clan).await?;
    tracing::info!(clan_id = %clan.id, "Clan created");

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            id: clan.id,
            message: "Clan created successfully",
        }),
    ))
}

/// GET /clans - list clans, optionally filtered by region
async fn list_clans(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<Vec<ClanResponse>>, ApiError> {
    let query = ClanQuery::from(ListClansParams::from_pairs(pairs));
    let clans = state.store().list(&query).await?;

    Ok(Json(clans.into_iter().map(ClanResponse::from).collect()))
}

/// GET /clans/{id} - get a single clan
async fn get_clan(
    State(state): State<AppState>,
    ClanId(id): ClanId,
) -> Result<Json<ClanResponse>, ApiError> {
    let clan = state.store().get(id).await?;
    Ok(Json(ClanResponse::from(clan)))
}

/// DELETE /clans/{id} - delete a clan
async fn delete_clan(
    State(state): State<AppState>,
    ClanId(id): ClanId,
) -> Result<Json<MessageResponse>, ApiError> {
    state.store().delete(id).await?;
    tracing::info!(clan_id = %id, "Clan deleted");

    Ok(Json(MessageResponse {
        message: "Clan deleted successfully",
    }))
}

/// Clan routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/clans", get(list_clans).post(create_clan))
        .route("/clans/{id}", get(get_clan).delete(delete_clan))
}
